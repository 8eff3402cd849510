//! Static phrase tables for simulated activity.

use crate::feed::ActivityKind;

use super::types::Specialization;

/// Generic progress lines emitted alongside advancement ticks
pub const PROGRESS_PHRASES: &[&str] = &[
    "Analyzing code structure",
    "Writing implementation",
    "Running tests",
    "Fixing syntax errors",
    "Optimizing performance",
    "Adding documentation",
    "Code review in progress",
    "Refactoring components",
    "Updating dependencies",
    "Configuring build tools",
];

/// Short "currently doing" texts applied by the team-wide nudge
pub const FOCUS_PHRASES: &[&str] = &[
    "Analyzing code structure...",
    "Writing implementation...",
    "Running tests...",
    "Fixing bugs...",
    "Optimizing performance...",
    "Adding documentation...",
    "Code review...",
    "Refactoring...",
];

/// Categories an ambient activity line may be tagged with
pub const AMBIENT_KINDS: &[ActivityKind] = &[
    ActivityKind::Progress,
    ActivityKind::Info,
    ActivityKind::Testing,
    ActivityKind::Debug,
    ActivityKind::Review,
];

const FRONTEND: &[&str] = &[
    "Implementing React component architecture",
    "Adding responsive CSS grid layout",
    "Optimizing bundle size with tree shaking",
    "Creating interactive animations",
    "Adding accessibility ARIA labels",
    "Implementing state management with Redux",
    "Setting up component unit tests",
    "Fixing cross-browser compatibility issues",
    "Adding PWA service worker",
    "Optimizing image loading performance",
];

const BACKEND: &[&str] = &[
    "Designing RESTful API endpoints",
    "Implementing database migrations",
    "Adding JWT authentication middleware",
    "Optimizing SQL query performance",
    "Setting up comprehensive error handling",
    "Implementing API rate limiting",
    "Adding structured logging",
    "Configuring CORS and security headers",
    "Setting up database indexing",
    "Implementing caching strategy",
];

const FULL_STACK: &[&str] = &[
    "Connecting React frontend to Express API",
    "Setting up development environment",
    "Implementing user authentication flow",
    "Adding real-time websocket features",
    "Configuring build and deployment pipeline",
    "Setting up API documentation",
    "Implementing error boundaries",
    "Adding environment configuration",
    "Setting up monitoring dashboards",
    "Implementing feature toggles",
];

const DEVOPS: &[&str] = &[
    "Setting up Docker containerization",
    "Configuring Kubernetes deployment",
    "Setting up CI/CD with GitHub Actions",
    "Implementing infrastructure as code",
    "Configuring load balancer",
    "Setting up monitoring and alerting",
    "Implementing backup and recovery",
    "Setting up security scanning",
    "Optimizing cloud infrastructure costs",
    "Configuring auto-scaling policies",
];

const TESTING: &[&str] = &[
    "Writing comprehensive unit tests",
    "Adding integration test coverage",
    "Setting up end-to-end testing",
    "Implementing visual regression testing",
    "Adding performance benchmarking",
    "Creating automated test reports",
    "Setting up test data factories",
    "Adding security penetration tests",
    "Implementing load testing scenarios",
    "Setting up test environment automation",
];

/// Ambient activity phrases for a specialization.
///
/// Specializations without their own table share the Full-Stack set.
pub fn ambient_phrases(specialization: Specialization) -> &'static [&'static str] {
    match specialization {
        Specialization::Frontend => FRONTEND,
        Specialization::Backend => BACKEND,
        Specialization::FullStack => FULL_STACK,
        Specialization::DevOps => DEVOPS,
        Specialization::Testing => TESTING,
        Specialization::Security | Specialization::Database | Specialization::Mobile => {
            FULL_STACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_specialization_has_phrases() {
        for spec in Specialization::ALL {
            assert!(!ambient_phrases(spec).is_empty(), "{} has no phrases", spec);
        }
    }

    #[test]
    fn test_fallback_is_full_stack() {
        assert_eq!(
            ambient_phrases(Specialization::Security),
            ambient_phrases(Specialization::FullStack)
        );
        assert_ne!(
            ambient_phrases(Specialization::DevOps),
            ambient_phrases(Specialization::FullStack)
        );
    }
}
