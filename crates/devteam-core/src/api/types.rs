//! Owned snapshot types for the Facade API.
//!
//! These types are returned by query methods and do not hold any lock.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::models::{ConfigValidation, ModelSummary, RegistryError};
use crate::profile::ProjectClassification;
use crate::workers::{Specialization, WorkerSnapshot};

/// Error type for Facade API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid input (e.g. team size out of range, empty description)
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// The operation needs state that has not been set up yet
    #[error("precondition failed: {message}")]
    Precondition { message: String },

    /// A model configuration change was rejected
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// The project the team works on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectAssignment {
    pub path: String,
    pub description: String,
}

/// Model configuration as seen by front-ends
#[derive(Debug, Clone, Serialize)]
pub struct ModelConfigurationSnapshot {
    pub default_model: String,
    pub fallback_model: String,
    /// Configured overrides, ids as stored
    pub overrides: BTreeMap<Specialization, String>,
    /// Model each specialization would be bound to by the next configuration
    pub resolved: BTreeMap<Specialization, ModelSummary>,
    pub validation: ConfigValidation,
}

/// Aggregated team state
#[derive(Debug, Clone, Serialize)]
pub struct TeamStatus {
    pub team_size: usize,
    /// Workers currently in the working state
    pub active_workers: usize,
    pub project: Option<ProjectAssignment>,
    /// Whether a development run was started and not stopped
    pub is_working: bool,
    pub classification: Option<ProjectClassification>,
    pub models: ModelConfigurationSnapshot,
    pub workers: Vec<WorkerSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ApiError::InvalidInput {
            message: "team size must be between 0 and 10".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid input: team size must be between 0 and 10"
        );

        let err: ApiError = RegistryError::InvalidReference {
            id: "nope".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unknown model: nope");
    }
}
