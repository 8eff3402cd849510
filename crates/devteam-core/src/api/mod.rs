//! Public API layer (Facade) for devteam-core.
//!
//! [`TeamCoordinator`] owns the roster, the model registry, the task
//! distributor and the activity feed. Front-ends drive the simulation through
//! its typed action and query methods and never touch worker state directly.
//!
//! # Quick Start
//!
//! ```ignore
//! use devteam_core::api::TeamCoordinatorBuilder;
//!
//! let coordinator = TeamCoordinatorBuilder::new(settings).build();
//! coordinator.configure_team(4)?;
//! coordinator.assign_project("./my-app", "Build a web app with authentication")?;
//! coordinator.start_development()?;
//!
//! let mut rx = coordinator.subscribe();
//! ```

mod actions;
mod builder;
mod core;
mod queries;
pub mod types;

pub use builder::TeamCoordinatorBuilder;
pub use core::TeamCoordinator;
pub use types::{ApiError, ModelConfigurationSnapshot, ProjectAssignment, TeamStatus};
