use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed specialization of a simulated developer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Specialization {
    Frontend,
    Backend,
    #[serde(rename = "Full-Stack")]
    FullStack,
    DevOps,
    Testing,
    Security,
    Database,
    Mobile,
}

impl Specialization {
    /// Every specialization, in roster rotation order
    pub const ALL: [Specialization; 8] = [
        Specialization::Frontend,
        Specialization::Backend,
        Specialization::FullStack,
        Specialization::DevOps,
        Specialization::Testing,
        Specialization::Security,
        Specialization::Database,
        Specialization::Mobile,
    ];

    /// Rotation used for teams of three or fewer
    pub const SMALL_TEAM: [Specialization; 3] = [
        Specialization::Frontend,
        Specialization::Backend,
        Specialization::FullStack,
    ];

    /// Rotation list for a team of `team_size` workers
    pub fn rotation(team_size: usize) -> &'static [Specialization] {
        if team_size <= 3 {
            &Self::SMALL_TEAM
        } else {
            &Self::ALL
        }
    }

    /// Specialization for the worker at roster position `index`
    pub fn for_roster_slot(index: usize, team_size: usize) -> Specialization {
        let rotation = Self::rotation(team_size);
        rotation[index % rotation.len()]
    }

    /// Display label (matches the serialized form)
    pub fn label(&self) -> &'static str {
        match self {
            Specialization::Frontend => "Frontend",
            Specialization::Backend => "Backend",
            Specialization::FullStack => "Full-Stack",
            Specialization::DevOps => "DevOps",
            Specialization::Testing => "Testing",
            Specialization::Security => "Security",
            Specialization::Database => "Database",
            Specialization::Mobile => "Mobile",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Specialization {
    type Err = String;

    /// Case-insensitive; accepts "fullstack" and "full_stack" for Full-Stack
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "frontend" => Ok(Specialization::Frontend),
            "backend" => Ok(Specialization::Backend),
            "full-stack" | "fullstack" => Ok(Specialization::FullStack),
            "devops" => Ok(Specialization::DevOps),
            "testing" => Ok(Specialization::Testing),
            "security" => Ok(Specialization::Security),
            "database" => Ok(Specialization::Database),
            "mobile" => Ok(Specialization::Mobile),
            _ => Err(format!("unknown specialization: {}", s)),
        }
    }
}

/// Lifecycle status of a worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    /// No queued work
    #[default]
    Idle,
    /// Advancing the head of its queue
    Working,
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerStatus::Idle => write!(f, "idle"),
            WorkerStatus::Working => write!(f, "working"),
        }
    }
}

/// Stable identity of a worker within one roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerIdentity {
    /// 1-based roster position
    pub id: u32,
    /// Display name (e.g., "AI-Dev-1")
    pub name: String,
    /// Fixed specialization
    pub specialization: Specialization,
}

impl WorkerIdentity {
    /// Identity for roster position `index` (0-based) in a team of `team_size`
    pub fn for_roster_slot(index: usize, team_size: usize) -> Self {
        let id = index as u32 + 1;
        Self {
            id,
            name: format!("AI-Dev-{}", id),
            specialization: Specialization::for_roster_slot(index, team_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_team_rotation() {
        let specs: Vec<_> = (0..3)
            .map(|i| Specialization::for_roster_slot(i, 3))
            .collect();
        assert_eq!(
            specs,
            vec![
                Specialization::Frontend,
                Specialization::Backend,
                Specialization::FullStack
            ]
        );
    }

    #[test]
    fn test_large_team_rotation_wraps() {
        assert_eq!(
            Specialization::for_roster_slot(7, 10),
            Specialization::Mobile
        );
        assert_eq!(
            Specialization::for_roster_slot(8, 10),
            Specialization::Frontend
        );
        assert_eq!(
            Specialization::for_roster_slot(9, 10),
            Specialization::Backend
        );
    }

    #[test]
    fn test_specialization_serde_label() {
        let json = serde_json::to_string(&Specialization::FullStack).unwrap();
        assert_eq!(json, "\"Full-Stack\"");
        let back: Specialization = serde_json::from_str("\"DevOps\"").unwrap();
        assert_eq!(back, Specialization::DevOps);
    }

    #[test]
    fn test_specialization_from_str() {
        assert_eq!(
            "full_stack".parse::<Specialization>().unwrap(),
            Specialization::FullStack
        );
        assert_eq!(
            "BACKEND".parse::<Specialization>().unwrap(),
            Specialization::Backend
        );
        assert!("designer".parse::<Specialization>().is_err());
    }

    #[test]
    fn test_identity_naming() {
        let identity = WorkerIdentity::for_roster_slot(4, 6);
        assert_eq!(identity.id, 5);
        assert_eq!(identity.name, "AI-Dev-5");
        assert_eq!(identity.specialization, Specialization::Testing);
    }
}
