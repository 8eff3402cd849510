//! TeamCoordinator: the Facade entry-point for all front-ends.
//!
//! This struct owns every service and exposes high-level methods.
//! Consumers never need to acquire locks or wire services themselves.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::config::Settings;
use crate::feed::ActivityFeed;
use crate::models::ModelRegistry;
use crate::profile::{ProjectClassification, ProjectProfiler};
use crate::random::SharedRandom;
use crate::tasks::TaskDistributor;
use crate::workers::Worker;

use super::types::ProjectAssignment;

/// Largest team the coordinator accepts
pub const MAX_TEAM_SIZE: usize = 10;

/// Mutable team state guarded by one lock
#[derive(Default)]
pub(crate) struct TeamState {
    pub(crate) workers: Vec<Arc<Worker>>,
    pub(crate) project: Option<ProjectAssignment>,
    pub(crate) classification: Option<ProjectClassification>,
    pub(crate) is_working: bool,
    /// Team-wide nudge timer of the current run
    pub(crate) team_tick: Option<JoinHandle<()>>,
}

/// The Facade that wraps all devteam-core services.
///
/// Constructed via [`TeamCoordinatorBuilder`](super::builder::TeamCoordinatorBuilder).
/// Lock order is team state, then worker state, then the feed.
pub struct TeamCoordinator {
    settings: Arc<Settings>,
    registry: RwLock<ModelRegistry>,
    distributor: TaskDistributor,
    profiler: Arc<dyn ProjectProfiler>,
    feed: ActivityFeed,
    rng: SharedRandom,
    team: Mutex<TeamState>,
}

impl TeamCoordinator {
    /// Create a new coordinator (prefer `TeamCoordinatorBuilder`)
    pub(crate) fn new(
        settings: Arc<Settings>,
        registry: ModelRegistry,
        profiler: Arc<dyn ProjectProfiler>,
        feed: ActivityFeed,
        rng: SharedRandom,
    ) -> Self {
        Self {
            settings,
            registry: RwLock::new(registry),
            distributor: TaskDistributor::new(Arc::clone(&rng)),
            profiler,
            feed,
            rng,
            team: Mutex::new(TeamState::default()),
        }
    }

    /// Access application settings (read-only)
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The activity feed shared by every worker
    pub fn feed(&self) -> &ActivityFeed {
        &self.feed
    }

    // =========================================================
    // Internal accessors for query/action impls
    // =========================================================

    pub(crate) fn registry(&self) -> &RwLock<ModelRegistry> {
        &self.registry
    }

    pub(crate) fn distributor(&self) -> &TaskDistributor {
        &self.distributor
    }

    pub(crate) fn profiler(&self) -> &dyn ProjectProfiler {
        self.profiler.as_ref()
    }

    pub(crate) fn rng(&self) -> &SharedRandom {
        &self.rng
    }

    pub(crate) fn team(&self) -> &Mutex<TeamState> {
        &self.team
    }
}

impl Drop for TeamCoordinator {
    fn drop(&mut self) {
        if let Some(handle) = self.team.get_mut().team_tick.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_MODEL;
    use crate::profile::DescriptionProfiler;
    use crate::random::{shared, ThreadRandom};

    #[test]
    fn test_coordinator_creation() {
        let core = TeamCoordinator::new(
            Arc::new(Settings::default()),
            ModelRegistry::new(),
            Arc::new(DescriptionProfiler),
            ActivityFeed::new(10),
            shared(ThreadRandom),
        );

        assert_eq!(core.settings().simulation.advance_interval_ms, 2000);
        assert_eq!(core.feed().capacity(), 10);
        assert_eq!(
            core.registry().read().configuration().default_model,
            DEFAULT_MODEL
        );
        assert!(core.team().lock().workers.is_empty());
    }
}
