//! Project classification.
//!
//! The coordinator asks a [`ProjectProfiler`] for a [`ProjectClassification`]
//! when a project is assigned. Profilers never fail outward: a path that cannot
//! be inspected degrades to a "new project" classification.

mod description;
mod scanner;
mod types;

pub use description::DescriptionProfiler;
pub use scanner::FsProjectProfiler;
pub use types::{Complexity, ProfileError, ProjectClassification, ProjectType};

use std::path::Path;

/// Produces a classification for an assigned project
pub trait ProjectProfiler: Send + Sync {
    /// Classify the project at `path` described by `description`
    fn classify(&self, path: &Path, description: &str) -> ProjectClassification;
}
