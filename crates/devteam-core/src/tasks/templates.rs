//! Task templates keyed by project archetype and specialization.

use std::fmt;

use serde::Serialize;

use crate::workers::Specialization;

/// Coarse project shape inferred from the free-text description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Web,
    Mobile,
    Api,
}

impl Archetype {
    /// First matching keyword group wins; anything else is a web project.
    pub fn detect(description: &str) -> Self {
        let desc = description.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| desc.contains(w));

        if mentions(&["web", "website", "frontend"]) {
            Archetype::Web
        } else if mentions(&["mobile", "app", "ios", "android"]) {
            Archetype::Mobile
        } else if mentions(&["api", "backend", "service"]) {
            Archetype::Api
        } else {
            Archetype::Web
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Archetype::Web => write!(f, "web"),
            Archetype::Mobile => write!(f, "mobile"),
            Archetype::Api => write!(f, "api"),
        }
    }
}

/// Keywords recognised in project descriptions
pub const KEYWORDS: &[&str] = &[
    "database",
    "security",
    "performance",
    "deployment",
    "testing",
    "authentication",
    "monitoring",
    "logging",
    "optimization",
    "responsive",
    "mobile",
    "accessibility",
];

/// Keywords from [`KEYWORDS`] contained in `description`, in vocabulary order
pub fn extract_keywords(description: &str) -> Vec<&'static str> {
    let desc = description.to_lowercase();
    KEYWORDS
        .iter()
        .copied()
        .filter(|k| desc.contains(k))
        .collect()
}

/// Base task list for a specialization; empty when no template exists
pub fn base_tasks(archetype: Archetype, specialization: Specialization) -> &'static [&'static str] {
    use Specialization::*;

    match (archetype, specialization) {
        (Archetype::Web, Frontend) => &[
            "Setup component structure",
            "Implement responsive design",
            "Add interactive features",
            "Optimize performance",
            "Add accessibility features",
        ],
        (Archetype::Web, Backend) => &[
            "Design API architecture",
            "Implement data models",
            "Add authentication",
            "Setup rate limiting",
            "Add logging and monitoring",
        ],
        (Archetype::Web, FullStack) => &[
            "Setup project structure",
            "Connect frontend and backend",
            "Implement core workflows",
            "Add error handling",
            "Setup development tools",
        ],
        (Archetype::Web, DevOps) => &[
            "Setup build pipeline",
            "Configure deployment",
            "Setup monitoring",
            "Add health checks",
            "Configure security",
        ],
        (Archetype::Web, Testing) => &[
            "Write unit tests",
            "Add integration tests",
            "Setup test automation",
            "Add performance tests",
            "Create test documentation",
        ],
        (Archetype::Mobile, Frontend) => &[
            "Setup navigation",
            "Implement UI components",
            "Add offline support",
            "Optimize for mobile",
            "Add push notifications",
        ],
        (Archetype::Mobile, Backend) => &[
            "Design mobile API",
            "Add data synchronization",
            "Implement push services",
            "Add offline data handling",
            "Optimize for mobile networks",
        ],
        (Archetype::Api, Backend) => &[
            "Design API endpoints",
            "Implement data validation",
            "Add rate limiting",
            "Setup documentation",
            "Add versioning",
        ],
        (Archetype::Api, Testing) => &[
            "API endpoint testing",
            "Load testing",
            "Security testing",
            "Documentation testing",
            "Integration testing",
        ],
        _ => &[],
    }
}

/// Base tasks plus the keyword-driven extras for one specialization
pub fn tasks_for_specialization(
    archetype: Archetype,
    specialization: Specialization,
    keywords: &[&str],
) -> Vec<String> {
    let has = |k: &str| keywords.contains(&k);
    let mut tasks: Vec<String> = base_tasks(archetype, specialization)
        .iter()
        .map(|t| t.to_string())
        .collect();

    if has("database") && specialization == Specialization::Backend {
        tasks.push("Setup database migrations".to_string());
        tasks.push("Optimize database queries".to_string());
    }
    if has("security") && specialization != Specialization::Testing {
        tasks.push("Implement security measures".to_string());
    }
    if has("performance") {
        tasks.push("Optimize application performance".to_string());
    }
    if has("deployment") && specialization == Specialization::DevOps {
        tasks.push("Setup production deployment".to_string());
        tasks.push("Configure environment variables".to_string());
    }

    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_archetype_precedence() {
        assert_eq!(Archetype::detect("A mobile website"), Archetype::Web);
        assert_eq!(Archetype::detect("An Android client"), Archetype::Mobile);
        assert_eq!(Archetype::detect("Payment SERVICE"), Archetype::Api);
        assert_eq!(Archetype::detect("Something else"), Archetype::Web);
        // "app" matches before "api"
        assert_eq!(Archetype::detect("api for my app"), Archetype::Mobile);
    }

    #[test]
    fn test_extract_keywords() {
        assert_eq!(
            extract_keywords("Security and Database with CI deployment"),
            vec!["database", "security", "deployment"]
        );
        assert!(extract_keywords("hello").is_empty());
    }

    #[test]
    fn test_missing_template_is_empty() {
        assert!(base_tasks(Archetype::Api, Specialization::Frontend).is_empty());
        assert!(base_tasks(Archetype::Web, Specialization::Security).is_empty());
        assert!(tasks_for_specialization(Archetype::Mobile, Specialization::Mobile, &[]).is_empty());
    }

    #[test]
    fn test_conditional_appends_order() {
        let tasks = tasks_for_specialization(
            Archetype::Api,
            Specialization::Backend,
            &["database", "security", "performance", "deployment"],
        );
        assert_eq!(
            &tasks[5..],
            &[
                "Setup database migrations",
                "Optimize database queries",
                "Implement security measures",
                "Optimize application performance",
            ]
        );
    }

    #[test]
    fn test_extras_without_base_template() {
        let tasks =
            tasks_for_specialization(Archetype::Mobile, Specialization::DevOps, &["deployment"]);
        assert_eq!(
            tasks,
            vec!["Setup production deployment", "Configure environment variables"]
        );

        let testing =
            tasks_for_specialization(Archetype::Api, Specialization::Testing, &["security"]);
        assert_eq!(testing.len(), 5);
    }
}
