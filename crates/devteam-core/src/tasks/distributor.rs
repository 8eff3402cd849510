use tracing::debug;

use crate::profile::ProjectClassification;
use crate::random::SharedRandom;
use crate::workers::WorkerIdentity;

use super::templates::{extract_keywords, tasks_for_specialization, Archetype};
use super::types::{Priority, Task, TaskStatus};

/// Turns a project description into per-worker task lists
#[derive(Clone)]
pub struct TaskDistributor {
    rng: SharedRandom,
}

impl TaskDistributor {
    pub fn new(rng: SharedRandom) -> Self {
        Self { rng }
    }

    /// Generate the task list for a roster.
    ///
    /// Tasks are numbered from 1 in roster order, then template order. Workers
    /// without a template for the detected archetype receive nothing.
    pub fn distribute(
        &self,
        description: &str,
        workers: &[WorkerIdentity],
        classification: &ProjectClassification,
    ) -> Vec<Task> {
        let archetype = Archetype::detect(description);
        let keywords = extract_keywords(description);
        let mut tasks = Vec::new();
        let mut next_id = 1;

        for worker in workers {
            let generated = tasks_for_specialization(archetype, worker.specialization, &keywords);
            for text in generated {
                let priority = Priority::for_description(&text);
                let estimated_hours = self.estimate_hours(&text);
                tasks.push(Task {
                    id: next_id,
                    description: text,
                    specialization: worker.specialization,
                    assigned_to: worker.id,
                    priority,
                    estimated_hours,
                    status: TaskStatus::Pending,
                });
                next_id += 1;
            }
        }

        debug!(
            archetype = %archetype,
            keywords = ?keywords,
            project_type = ?classification.project_type,
            complexity = %classification.complexity,
            workers = workers.len(),
            tasks = tasks.len(),
            "Distributed tasks"
        );

        tasks
    }

    /// Random duration estimate in hours, banded by description keywords
    fn estimate_hours(&self, description: &str) -> u32 {
        let desc = description.to_lowercase();
        let (low, high) = if ["setup", "implement", "design"]
            .iter()
            .any(|k| desc.contains(k))
        {
            (3, 6)
        } else if ["add", "configure", "optimize"]
            .iter()
            .any(|k| desc.contains(k))
        {
            (1, 3)
        } else {
            (2, 3)
        };
        self.rng.lock().range_inclusive(low, high)
    }
}

/// Tasks owned by `worker_id`, preserving order
pub fn tasks_for_worker(tasks: &[Task], worker_id: u32) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.assigned_to == worker_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{shared, SequenceRandom};
    use pretty_assertions::assert_eq;

    fn roster(size: usize) -> Vec<WorkerIdentity> {
        (0..size)
            .map(|i| WorkerIdentity::for_roster_slot(i, size))
            .collect()
    }

    fn distributor(sample: f64) -> TaskDistributor {
        TaskDistributor::new(shared(SequenceRandom::constant(sample)))
    }

    #[test]
    fn test_web_app_with_authentication_and_database() {
        let workers = roster(3);
        let tasks = distributor(0.0).distribute(
            "Build a web app with authentication and database",
            &workers,
            &ProjectClassification::default(),
        );

        assert_eq!(tasks.len(), 17);
        let ids: Vec<u32> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=17).collect::<Vec<u32>>());

        let backend = tasks_for_worker(&tasks, 2);
        assert_eq!(backend.len(), 7);
        assert_eq!(backend[0].description, "Design API architecture");
        assert_eq!(backend[5].description, "Setup database migrations");
        assert_eq!(backend[6].description, "Optimize database queries");

        let auth = backend
            .iter()
            .find(|t| t.description == "Add authentication")
            .unwrap();
        assert_eq!(auth.priority, Priority::High);

        assert_eq!(tasks_for_worker(&tasks, 1).len(), 5);
        assert_eq!(tasks_for_worker(&tasks, 3).len(), 5);
    }

    #[test]
    fn test_tasks_match_owner_specialization() {
        let workers = roster(8);
        let tasks = distributor(0.5).distribute(
            "web platform with security and performance and deployment",
            &workers,
            &ProjectClassification::default(),
        );

        for task in &tasks {
            let owner = workers.iter().find(|w| w.id == task.assigned_to).unwrap();
            assert_eq!(owner.specialization, task.specialization);
            assert_eq!(task.status, TaskStatus::Pending);
        }
        // Mobile has no web template but still receives the extras
        let mobile = tasks_for_worker(&tasks, 8);
        assert_eq!(
            mobile.iter().map(|t| t.description.as_str()).collect::<Vec<_>>(),
            vec!["Implement security measures", "Optimize application performance"]
        );
    }

    #[test]
    fn test_worker_without_template_gets_nothing() {
        let workers = roster(3);
        let tasks = distributor(0.5).distribute(
            "REST api service",
            &workers,
            &ProjectClassification::default(),
        );
        assert!(tasks_for_worker(&tasks, 1).is_empty());
        assert!(tasks_for_worker(&tasks, 3).is_empty());
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks[0].id, 1);
    }

    #[test]
    fn test_estimate_bands() {
        let low = distributor(0.0);
        assert_eq!(low.estimate_hours("Setup navigation"), 3);
        assert_eq!(low.estimate_hours("Add versioning"), 1);
        assert_eq!(low.estimate_hours("Load testing"), 2);

        let high = distributor(0.999);
        assert_eq!(high.estimate_hours("Design API endpoints"), 6);
        assert_eq!(high.estimate_hours("Configure deployment"), 3);
        assert_eq!(high.estimate_hours("Write unit tests"), 3);
    }

    #[test]
    fn test_empty_roster() {
        let tasks = distributor(0.5).distribute("web", &[], &ProjectClassification::default());
        assert!(tasks.is_empty());
    }
}
