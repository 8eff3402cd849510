use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Vendor grouping of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Provider {
    OpenAI,
    Anthropic,
    Google,
    Local,
}

impl Provider {
    /// Providers in catalog order
    pub const ALL: [Provider; 4] = [
        Provider::OpenAI,
        Provider::Anthropic,
        Provider::Google,
        Provider::Local,
    ];
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::OpenAI => write!(f, "OpenAI"),
            Provider::Anthropic => write!(f, "Anthropic"),
            Provider::Google => write!(f, "Google"),
            Provider::Local => write!(f, "Local"),
        }
    }
}

/// Relative cost label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostTier {
    Free,
    Low,
    Medium,
    High,
}

impl CostTier {
    pub const ALL: [CostTier; 4] = [
        CostTier::Free,
        CostTier::Low,
        CostTier::Medium,
        CostTier::High,
    ];
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostTier::Free => write!(f, "free"),
            CostTier::Low => write!(f, "low"),
            CostTier::Medium => write!(f, "medium"),
            CostTier::High => write!(f, "high"),
        }
    }
}

/// Relative speed label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpeedTier {
    Slow,
    Medium,
    Fast,
    VeryFast,
}

impl SpeedTier {
    pub const ALL: [SpeedTier; 4] = [
        SpeedTier::Slow,
        SpeedTier::Medium,
        SpeedTier::Fast,
        SpeedTier::VeryFast,
    ];
}

impl fmt::Display for SpeedTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedTier::Slow => write!(f, "slow"),
            SpeedTier::Medium => write!(f, "medium"),
            SpeedTier::Fast => write!(f, "fast"),
            SpeedTier::VeryFast => write!(f, "very-fast"),
        }
    }
}

/// Capability tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Coding,
    Reasoning,
    Multimodal,
    Analysis,
    General,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Coding => write!(f, "coding"),
            Capability::Reasoning => write!(f, "reasoning"),
            Capability::Multimodal => write!(f, "multimodal"),
            Capability::Analysis => write!(f, "analysis"),
            Capability::General => write!(f, "general"),
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Model {
    /// Catalog id (e.g., "claude-3.5-sonnet")
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    pub provider: Provider,
    pub cost: CostTier,
    pub speed: SpeedTier,
    pub capabilities: &'static [Capability],
    /// One-line description shown next to recommendations
    pub description: &'static str,
}

impl Model {
    /// Compact summary used in status snapshots
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            id: self.id.to_string(),
            name: self.name.to_string(),
            provider: self.provider,
            cost: self.cost,
            speed: self.speed,
        }
    }
}

/// Owned subset of a [`Model`] for snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub id: String,
    pub name: String,
    pub provider: Provider,
    pub cost: CostTier,
    pub speed: SpeedTier,
}

/// Task category used for model recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Frontend,
    Backend,
    Devops,
    Testing,
    Debugging,
    Optimization,
}

impl TaskCategory {
    /// Parse a category, falling back to `Backend` for anything unknown
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or(TaskCategory::Backend)
    }
}

impl FromStr for TaskCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "frontend" => Ok(TaskCategory::Frontend),
            "backend" => Ok(TaskCategory::Backend),
            "devops" => Ok(TaskCategory::Devops),
            "testing" => Ok(TaskCategory::Testing),
            "debugging" => Ok(TaskCategory::Debugging),
            "optimization" => Ok(TaskCategory::Optimization),
            _ => Err(format!("unknown task category: {}", s)),
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskCategory::Frontend => write!(f, "frontend"),
            TaskCategory::Backend => write!(f, "backend"),
            TaskCategory::Devops => write!(f, "devops"),
            TaskCategory::Testing => write!(f, "testing"),
            TaskCategory::Debugging => write!(f, "debugging"),
            TaskCategory::Optimization => write!(f, "optimization"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_serialization() {
        assert_eq!(
            serde_json::to_string(&SpeedTier::VeryFast).unwrap(),
            "\"very-fast\""
        );
        assert_eq!(serde_json::to_string(&CostTier::Free).unwrap(), "\"free\"");
        assert_eq!(SpeedTier::VeryFast.to_string(), "very-fast");
    }

    #[test]
    fn test_task_category_lossy() {
        assert_eq!(TaskCategory::from_str_lossy("DevOps"), TaskCategory::Devops);
        assert_eq!(
            TaskCategory::from_str_lossy("documentation"),
            TaskCategory::Backend
        );
    }
}
