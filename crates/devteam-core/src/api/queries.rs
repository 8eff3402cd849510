//! Read-only query methods on [`TeamCoordinator`].
//!
//! Every method takes its locks internally, converts to owned snapshots and
//! releases the locks before returning.

use tokio::sync::broadcast;

use crate::feed::ActivityEvent;
use crate::models::{models_by_provider, ConfigValidation, Model, Provider, Recommendation};
use crate::workers::WorkerStatus;

use super::core::TeamCoordinator;
use super::types::{ApiError, ModelConfigurationSnapshot, TeamStatus};

impl TeamCoordinator {
    // =========================================================
    // Team queries
    // =========================================================

    /// Aggregated snapshot of the team, project and model configuration
    pub fn team_status(&self) -> TeamStatus {
        let models = self.model_configuration();
        let team = self.team().lock();
        let workers: Vec<_> = team.workers.iter().map(|w| w.snapshot()).collect();
        let active_workers = workers
            .iter()
            .filter(|w| w.status == WorkerStatus::Working)
            .count();

        TeamStatus {
            team_size: workers.len(),
            active_workers,
            project: team.project.clone(),
            is_working: team.is_working,
            classification: team.classification.clone(),
            models,
            workers,
        }
    }

    /// Number of workers in the roster
    pub fn team_size(&self) -> usize {
        self.team().lock().workers.len()
    }

    /// Whether a project has been assigned
    pub fn has_project(&self) -> bool {
        self.team().lock().project.is_some()
    }

    /// Pending timers across every worker and the team tick
    pub fn active_timers(&self) -> usize {
        let team = self.team().lock();
        let team_tick = team
            .team_tick
            .as_ref()
            .is_some_and(|h| !h.is_finished()) as usize;
        team.workers.iter().map(|w| w.active_timers()).sum::<usize>() + team_tick
    }

    // =========================================================
    // Activity feed
    // =========================================================

    /// Up to `limit` most recent events, newest first
    pub fn recent_activity(&self, limit: usize) -> Vec<ActivityEvent> {
        self.feed().recent(limit)
    }

    /// Subscribe to activity events as they are published
    pub fn subscribe(&self) -> broadcast::Receiver<ActivityEvent> {
        self.feed().subscribe()
    }

    // =========================================================
    // Model configuration queries
    // =========================================================

    /// Current model configuration with resolved models and validation
    pub fn model_configuration(&self) -> ModelConfigurationSnapshot {
        let registry = self.registry().read();
        let config = registry.configuration();
        ModelConfigurationSnapshot {
            default_model: config.default_model.clone(),
            fallback_model: config.fallback_model.clone(),
            overrides: config.specialization_models.clone(),
            resolved: registry
                .resolved_models()
                .into_iter()
                .map(|(spec, model)| (spec, model.summary()))
                .collect(),
            validation: registry.validate_configuration(),
        }
    }

    /// Check every configured model id against the catalog
    pub fn validate_configuration(&self) -> ConfigValidation {
        self.registry().read().validate_configuration()
    }

    /// Export the model configuration as pretty JSON
    pub fn export_configuration(&self) -> Result<String, ApiError> {
        Ok(self.registry().read().export_configuration()?)
    }

    /// The fixed advisory recommendation list
    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.registry().read().recommendations()
    }

    /// Catalog grouped by provider
    pub fn models_by_provider(&self) -> Vec<(Provider, Vec<&'static Model>)> {
        models_by_provider()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::builder::TeamCoordinatorBuilder;
    use crate::config::Settings;
    use crate::feed::ActivityKind;
    use crate::profile::{DescriptionProfiler, ProjectType};
    use crate::random::{shared, SequenceRandom};
    use crate::workers::Specialization;
    use pretty_assertions::assert_eq;

    use super::*;

    fn coordinator() -> TeamCoordinator {
        TeamCoordinatorBuilder::new(Settings::default())
            .with_profiler(Arc::new(DescriptionProfiler))
            .with_random(shared(SequenceRandom::constant(0.5)))
            .build()
    }

    #[test]
    fn test_empty_team_status() {
        let core = coordinator();
        let status = core.team_status();
        assert_eq!(status.team_size, 0);
        assert!(!status.is_working);
        assert!(status.project.is_none());
        assert!(status.models.validation.valid);
        assert_eq!(status.models.resolved.len(), Specialization::ALL.len());
        assert_eq!(core.active_timers(), 0);
    }

    #[test]
    fn test_classification_in_status() {
        let core = coordinator();
        core.assign_project("./game", "A browser game").unwrap();
        let classification = core.team_status().classification.unwrap();
        assert_eq!(classification.project_type, ProjectType::Game);
    }

    #[test]
    fn test_export_round_trip_through_coordinator() {
        let core = coordinator();
        core.set_default_model("gemini-pro").unwrap();
        let exported = core.export_configuration().unwrap();

        let fresh = coordinator();
        fresh.import_configuration(&exported).unwrap();
        assert_eq!(fresh.model_configuration().default_model, "gemini-pro");
        assert_eq!(
            fresh.model_configuration().resolved[&Specialization::Backend].id,
            "gemini-pro"
        );
    }

    #[test]
    fn test_model_catalog_queries() {
        let core = coordinator();
        assert_eq!(core.recommendations().len(), 6);
        let groups = core.models_by_provider();
        let total: usize = groups.iter().map(|(_, models)| models.len()).sum();
        assert_eq!(total, 9);
    }

    #[tokio::test]
    async fn test_feed_access() {
        let core = coordinator();
        let mut rx = core.subscribe();
        core.configure_team(1).unwrap();
        core.assign_project("./site", "marketing website").unwrap();
        core.start_development().unwrap();

        let event = rx.recv().await.unwrap();
        assert_eq!(event.kind, ActivityKind::Start);
        assert_eq!(event.worker_name, "AI-Dev-1");

        let recent = core.recent_activity(10);
        assert_eq!(recent.len(), 1);
        core.stop_development();
        assert_eq!(core.recent_activity(1)[0].message, "Stopped working");
    }
}
