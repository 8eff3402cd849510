use std::path::Path;

use super::types::{Complexity, ProjectClassification, ProjectType};
use super::ProjectProfiler;

const WEB_KEYWORDS: &[&str] = &["website", "web", "frontend", "react", "vue", "angular"];
const MOBILE_KEYWORDS: &[&str] = &["mobile", "app", "ios", "android", "react native"];
const API_KEYWORDS: &[&str] = &["api", "backend", "server", "database", "microservice"];
const GAME_KEYWORDS: &[&str] = &["game", "unity", "unreal", "gaming"];

/// Technology mentions recognized in free text (keyword, tag)
const TECH_MENTIONS: &[(&str, &str)] = &[
    ("react", "React"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("node", "Node.js"),
    ("express", "Express"),
    ("python", "Python"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("java", "Java"),
    ("spring", "Spring"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
];

/// Archetype suggested by the description, if any keyword matches
pub(crate) fn archetype_from_description(description: &str) -> Option<ProjectType> {
    let desc = description.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|k| desc.contains(k));

    if matches(WEB_KEYWORDS) {
        Some(ProjectType::Web)
    } else if matches(MOBILE_KEYWORDS) {
        Some(ProjectType::Mobile)
    } else if matches(API_KEYWORDS) {
        Some(ProjectType::Api)
    } else if matches(GAME_KEYWORDS) {
        Some(ProjectType::Game)
    } else {
        None
    }
}

/// Fill in description-derived fields.
///
/// The type is only set while still `Unknown`; technologies are appended.
pub(crate) fn apply_description(classification: &mut ProjectClassification, description: &str) {
    if classification.project_type == ProjectType::Unknown {
        if let Some(archetype) = archetype_from_description(description) {
            classification.project_type = archetype;
        }
    }

    let desc = description.to_lowercase();
    for (keyword, tech) in TECH_MENTIONS {
        if desc.contains(keyword) {
            classification.add_technology(tech);
        }
    }
}

/// Profiler that never touches the filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct DescriptionProfiler;

impl ProjectProfiler for DescriptionProfiler {
    fn classify(&self, _path: &Path, description: &str) -> ProjectClassification {
        let mut classification = ProjectClassification::default();
        apply_description(&mut classification, description);
        if classification.project_type == ProjectType::Unknown {
            classification.project_type = ProjectType::New;
        }
        classification.complexity = Complexity::from_score(classification.score());
        classification
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archetype_order() {
        assert_eq!(
            archetype_from_description("A web app for pets"),
            Some(ProjectType::Web)
        );
        assert_eq!(
            archetype_from_description("An Android app"),
            Some(ProjectType::Mobile)
        );
        assert_eq!(
            archetype_from_description("Billing microservice"),
            Some(ProjectType::Api)
        );
        assert_eq!(
            archetype_from_description("Unity racing game"),
            Some(ProjectType::Game)
        );
        assert_eq!(archetype_from_description("Something"), None);
    }

    #[test]
    fn test_description_profiler() {
        let c = DescriptionProfiler.classify(
            Path::new("/nowhere"),
            "React frontend with Docker and Kubernetes",
        );
        assert_eq!(c.project_type, ProjectType::Web);
        assert_eq!(c.technologies, vec!["React", "Docker", "Kubernetes"]);
        assert_eq!(c.complexity, Complexity::Simple);
    }

    #[test]
    fn test_unmatched_description_is_new() {
        let c = DescriptionProfiler.classify(Path::new("."), "Something vague");
        assert_eq!(c.project_type, ProjectType::New);
        assert!(c.technologies.is_empty());
    }
}
