use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a project directory could not be inspected
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The path does not exist, is not a directory, or cannot be read
    #[error("project path unavailable: {path:?}: {reason}")]
    Unavailable { path: PathBuf, reason: String },
}

/// Coarse project type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    #[default]
    Unknown,
    Web,
    Mobile,
    Api,
    Game,
    /// Existing project with a `src` directory
    Structured,
    Node,
    Python,
    Existing,
    New,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectType::Unknown => "unknown",
            ProjectType::Web => "web",
            ProjectType::Mobile => "mobile",
            ProjectType::Api => "api",
            ProjectType::Game => "game",
            ProjectType::Structured => "structured",
            ProjectType::Node => "node",
            ProjectType::Python => "python",
            ProjectType::Existing => "existing",
            ProjectType::New => "new",
        };
        f.write_str(s)
    }
}

/// Complexity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    #[default]
    Medium,
    Complex,
}

impl Complexity {
    /// Index into a ranked candidate list (simple 0, medium 1, complex 2)
    pub fn rank(&self) -> usize {
        match self {
            Complexity::Simple => 0,
            Complexity::Medium => 1,
            Complexity::Complex => 2,
        }
    }

    /// Tier for a complexity score (< 50 simple, < 100 medium)
    pub fn from_score(score: u32) -> Self {
        if score < 50 {
            Complexity::Simple
        } else if score < 100 {
            Complexity::Medium
        } else {
            Complexity::Complex
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Simple => write!(f, "simple"),
            Complexity::Medium => write!(f, "medium"),
            Complexity::Complex => write!(f, "complex"),
        }
    }
}

/// Coarse summary of an assigned project; immutable for a run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProjectClassification {
    pub project_type: ProjectType,
    /// Detected technologies, deduplicated, in detection order
    pub technologies: Vec<String>,
    pub complexity: Complexity,
    pub has_tests: bool,
    pub has_docs: bool,
    /// Number of top-level entries inspected
    pub entries_scanned: usize,
}

impl ProjectClassification {
    /// Add a technology tag unless already present
    pub(crate) fn add_technology(&mut self, tech: &str) {
        if !self.technologies.iter().any(|t| t == tech) {
            self.technologies.push(tech.to_string());
        }
    }

    /// Score-based complexity: technologies, entries, tests, docs, newness
    pub(crate) fn score(&self) -> u32 {
        let mut score = self.technologies.len() as u32 * 10 + self.entries_scanned as u32 * 5;
        if self.has_tests {
            score += 20;
        }
        if self.has_docs {
            score += 10;
        }
        if self.project_type == ProjectType::New {
            score += 30;
        }
        score
    }
}
