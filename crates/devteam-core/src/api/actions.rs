//! Action methods on [`TeamCoordinator`].
//!
//! These methods mutate the team or the model configuration. Validation errors
//! are returned before anything changes.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::models::ModelSelection;
use crate::tasks::{tasks_for_worker, Task};
use crate::workers::{Specialization, Worker, WorkerIdentity};

use super::core::{TeamCoordinator, TeamState, MAX_TEAM_SIZE};
use super::types::{ApiError, ProjectAssignment};

impl TeamCoordinator {
    // =========================================================
    // Team lifecycle
    // =========================================================

    /// Replace the roster with `size` idle workers.
    ///
    /// Work in progress is stopped first. Each worker is bound to the model
    /// the registry currently resolves for its specialization.
    pub fn configure_team(&self, size: usize) -> Result<(), ApiError> {
        if size > MAX_TEAM_SIZE {
            return Err(ApiError::InvalidInput {
                message: format!("team size must be between 0 and {}, got {}", MAX_TEAM_SIZE, size),
            });
        }

        let mut team = self.team().lock();
        Self::halt(&mut team);

        let registry = self.registry().read();
        team.workers = (0..size)
            .map(|index| {
                let identity = WorkerIdentity::for_roster_slot(index, size);
                let model = registry.resolve_model_for_specialization(identity.specialization);
                Arc::new(Worker::new(
                    identity,
                    model,
                    Arc::new(self.feed().clone()),
                    Arc::clone(self.rng()),
                    self.settings().simulation.clone(),
                ))
            })
            .collect();

        info!(size, "Team configured");
        Ok(())
    }

    /// Record the project and classify it. Does not touch a running team.
    pub fn assign_project(&self, path: &str, description: &str) -> Result<(), ApiError> {
        let path = path.trim();
        let description = description.trim();
        if path.is_empty() {
            return Err(ApiError::InvalidInput {
                message: "project path must not be empty".to_string(),
            });
        }
        if description.is_empty() {
            return Err(ApiError::InvalidInput {
                message: "project description must not be empty".to_string(),
            });
        }

        let classification = self.profiler().classify(Path::new(path), description);
        info!(
            path,
            project_type = %classification.project_type,
            complexity = %classification.complexity,
            "Project assigned"
        );

        let mut team = self.team().lock();
        team.project = Some(ProjectAssignment {
            path: path.to_string(),
            description: description.to_string(),
        });
        team.classification = Some(classification);
        Ok(())
    }

    /// Distribute tasks and start every worker plus the team tick.
    ///
    /// A run already in progress is stopped first. Returns the distributed
    /// task list. Must be called from within a tokio runtime.
    pub fn start_development(&self) -> Result<Vec<Task>, ApiError> {
        let mut team = self.team().lock();
        let project = team.project.clone().ok_or_else(|| ApiError::Precondition {
            message: "no project assigned".to_string(),
        })?;
        if team.workers.is_empty() {
            return Err(ApiError::Precondition {
                message: "no developers configured".to_string(),
            });
        }
        if team.is_working {
            Self::halt(&mut team);
        }

        let roster: Vec<WorkerIdentity> = team
            .workers
            .iter()
            .map(|w| w.identity().clone())
            .collect();
        let classification = team.classification.clone().unwrap_or_default();
        let tasks = self
            .distributor()
            .distribute(&project.description, &roster, &classification);

        for worker in &team.workers {
            worker.start(&project.path, tasks_for_worker(&tasks, worker.identity().id));
        }

        let period = Duration::from_millis(self.settings().simulation.team_tick_interval_ms);
        team.team_tick = Some(spawn_team_tick(team.workers.clone(), period));
        team.is_working = true;

        info!(
            workers = team.workers.len(),
            tasks = tasks.len(),
            "Development started"
        );
        Ok(tasks)
    }

    /// Stop every worker and the team tick. Calling it again changes nothing.
    pub fn stop_development(&self) {
        let mut team = self.team().lock();
        let was_working = team.is_working;
        Self::halt(&mut team);
        if was_working {
            info!("Development stopped");
        }
    }

    fn halt(team: &mut TeamState) {
        if let Some(handle) = team.team_tick.take() {
            handle.abort();
        }
        for worker in &team.workers {
            worker.stop();
        }
        team.is_working = false;
    }

    // =========================================================
    // Model configuration (applies at the next configure_team)
    // =========================================================

    /// Set the default model
    pub fn set_default_model(&self, id: &str) -> Result<(), ApiError> {
        self.registry().write().set_default_model(id)?;
        Ok(())
    }

    /// Apply a model selection (catalog id or "default") to one specialization
    pub fn select_model(
        &self,
        specialization: Specialization,
        selection: &ModelSelection,
    ) -> Result<(), ApiError> {
        self.registry()
            .write()
            .apply_selection(specialization, selection)?;
        Ok(())
    }

    /// Replace the model configuration from exported JSON
    pub fn import_configuration(&self, text: &str) -> Result<(), ApiError> {
        self.registry().write().import_configuration(text)?;
        Ok(())
    }

    /// Restore the built-in model configuration
    pub fn reset_model_configuration(&self) {
        self.registry().write().reset_to_defaults();
    }
}

/// Periodically nudge every worker until aborted
fn spawn_team_tick(workers: Vec<Arc<Worker>>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(period).await;
            for worker in &workers {
                worker.nudge();
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::super::builder::TeamCoordinatorBuilder;
    use super::*;
    use crate::config::Settings;
    use crate::models::RegistryError;
    use crate::profile::DescriptionProfiler;
    use crate::random::{shared, SequenceRandom};
    use crate::workers::WorkerStatus;
    use pretty_assertions::assert_eq;

    const WEB_APP: &str = "Build a web app with authentication and database";

    fn coordinator() -> TeamCoordinator {
        TeamCoordinatorBuilder::new(Settings::default())
            .with_profiler(Arc::new(DescriptionProfiler))
            .with_random(shared(SequenceRandom::constant(0.5)))
            .build()
    }

    #[test]
    fn test_configure_team_rotation() {
        let core = coordinator();
        for size in 1..=10 {
            core.configure_team(size).unwrap();
            let status = core.team_status();
            assert_eq!(status.team_size, size);
            assert_eq!(status.active_workers, 0);

            for (index, worker) in status.workers.iter().enumerate() {
                assert_eq!(worker.id, index as u32 + 1);
                assert_eq!(worker.name, format!("AI-Dev-{}", index + 1));
                assert_eq!(
                    worker.specialization,
                    Specialization::for_roster_slot(index, size)
                );
                assert_eq!(worker.status, WorkerStatus::Idle);
                assert!(worker.queue.is_empty());
            }
        }

        let status = core.team_status();
        assert_eq!(status.workers[7].specialization, Specialization::Mobile);
        assert_eq!(status.workers[8].specialization, Specialization::Frontend);
    }

    #[test]
    fn test_configure_team_rejects_oversized() {
        let core = coordinator();
        core.configure_team(2).unwrap();
        let err = core.configure_team(11).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput { .. }));
        assert_eq!(core.team_size(), 2);
    }

    #[test]
    fn test_assign_project_validation() {
        let core = coordinator();
        assert!(matches!(
            core.assign_project("", "something"),
            Err(ApiError::InvalidInput { .. })
        ));
        assert!(matches!(
            core.assign_project("./app", "   "),
            Err(ApiError::InvalidInput { .. })
        ));
        assert!(!core.has_project());

        core.assign_project("./app", WEB_APP).unwrap();
        let status = core.team_status();
        assert_eq!(status.project.unwrap().path, "./app");
        assert!(status.classification.is_some());
    }

    #[test]
    fn test_start_preconditions() {
        let core = coordinator();
        core.configure_team(3).unwrap();
        assert!(matches!(
            core.start_development(),
            Err(ApiError::Precondition { .. })
        ));

        core.configure_team(0).unwrap();
        core.assign_project("./app", WEB_APP).unwrap();
        assert!(matches!(
            core.start_development(),
            Err(ApiError::Precondition { .. })
        ));
        assert!(!core.team_status().is_working);
    }

    #[tokio::test]
    async fn test_start_distributes_web_app_tasks() {
        let core = coordinator();
        core.configure_team(3).unwrap();
        core.assign_project("./app", WEB_APP).unwrap();

        let tasks = core.start_development().unwrap();
        assert_eq!(tasks.len(), 17);

        let status = core.team_status();
        assert!(status.is_working);
        assert_eq!(status.active_workers, 3);
        let queues: Vec<usize> = status.workers.iter().map(|w| w.queue.len()).collect();
        assert_eq!(queues, vec![5, 7, 5]);
        assert_eq!(
            status.workers[1].current_task.as_deref(),
            Some("Design API architecture")
        );
        // Two timers per working worker plus the team tick
        assert_eq!(core.active_timers(), 7);

        core.stop_development();
    }

    #[tokio::test]
    async fn test_double_stop_matches_single_stop() {
        let core = coordinator();
        core.configure_team(4).unwrap();
        core.assign_project("./app", WEB_APP).unwrap();
        core.start_development().unwrap();

        core.stop_development();
        let once = core.team_status();
        core.stop_development();
        let twice = core.team_status();

        for status in [&once, &twice] {
            assert!(!status.is_working);
            assert_eq!(status.active_workers, 0);
            assert!(status
                .workers
                .iter()
                .all(|w| w.status == WorkerStatus::Idle && w.queue.is_empty()));
        }
        assert_eq!(core.active_timers(), 0);
    }

    #[tokio::test]
    async fn test_restart_and_reconfigure_leave_no_orphan_timers() {
        let core = coordinator();
        core.configure_team(3).unwrap();
        core.assign_project("./app", WEB_APP).unwrap();
        core.start_development().unwrap();
        core.start_development().unwrap();
        assert_eq!(core.active_timers(), 7);

        core.configure_team(5).unwrap();
        assert_eq!(core.active_timers(), 0);
        assert!(!core.team_status().is_working);
    }

    #[tokio::test]
    async fn test_workers_without_tasks_stay_idle() {
        let core = coordinator();
        core.configure_team(3).unwrap();
        core.assign_project("./svc", "REST api service").unwrap();
        core.start_development().unwrap();

        let status = core.team_status();
        assert_eq!(status.active_workers, 1);
        assert_eq!(status.workers[0].status, WorkerStatus::Idle);
        // Backend timers plus the team tick
        assert_eq!(core.active_timers(), 3);
        core.stop_development();
    }

    #[test]
    fn test_model_changes_apply_on_next_configure() {
        let core = coordinator();
        core.configure_team(1).unwrap();
        assert_eq!(core.team_status().workers[0].model.id, "claude-3.5-sonnet");

        core.set_default_model("gpt-4o").unwrap();
        assert_eq!(core.team_status().workers[0].model.id, "claude-3.5-sonnet");

        core.configure_team(1).unwrap();
        assert_eq!(core.team_status().workers[0].model.id, "gpt-4o");

        core.select_model(Specialization::Frontend, &"gemini-flash".parse().unwrap())
            .unwrap();
        core.configure_team(1).unwrap();
        assert_eq!(core.team_status().workers[0].model.id, "gemini-flash");

        core.reset_model_configuration();
        core.configure_team(1).unwrap();
        assert_eq!(core.team_status().workers[0].model.id, "claude-3.5-sonnet");
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let core = coordinator();
        let err = core.set_default_model("nonexistent-id").unwrap_err();
        assert!(matches!(
            err,
            ApiError::Registry(RegistryError::InvalidReference { .. })
        ));
        assert_eq!(core.model_configuration().default_model, "claude-3.5-sonnet");
    }

    #[test]
    fn test_import_failure_keeps_configuration() {
        let core = coordinator();
        core.set_default_model("gpt-4o").unwrap();
        let err = core.import_configuration("{\"default_model\": 1}").unwrap_err();
        assert!(matches!(
            err,
            ApiError::Registry(RegistryError::ImportValidation { .. })
        ));
        assert_eq!(core.model_configuration().default_model, "gpt-4o");
    }
}
