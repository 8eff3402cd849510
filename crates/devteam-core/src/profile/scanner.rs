//! Filesystem project profiler: inspects the top level of a project directory.

use std::path::Path;

use tracing::{debug, warn};

use super::description::apply_description;
use super::types::{Complexity, ProfileError, ProjectClassification, ProjectType};
use super::ProjectProfiler;

/// Top-level entries inspected for structure and technology detection
const MAX_STRUCTURE_ENTRIES: usize = 20;

/// Marker files and the technologies they indicate.
///
/// Markers starting with `.` match by extension (e.g. `App.csproj`).
const TECH_INDICATORS: &[(&str, &[&str])] = &[
    ("package.json", &["Node.js", "JavaScript", "TypeScript"]),
    ("requirements.txt", &["Python"]),
    ("Gemfile", &["Ruby"]),
    ("pom.xml", &["Java"]),
    ("Cargo.toml", &["Rust"]),
    ("go.mod", &["Go"]),
    ("composer.json", &["PHP"]),
    (".csproj", &["C#"]),
    ("Dockerfile", &["Docker"]),
    ("docker-compose.yml", &["Docker"]),
    ("index.html", &["HTML", "Web"]),
    ("style.css", &["CSS"]),
    ("app.js", &["JavaScript"]),
    ("main.py", &["Python"]),
    ("index.php", &["PHP"]),
];

/// Result of reading a project directory
struct DirectoryScan {
    /// Every top-level entry name
    names: Vec<String>,
    /// First entries (sorted) with their directory flag
    structure: Vec<(String, bool)>,
}

impl DirectoryScan {
    fn has_entry(&self, name: &str) -> bool {
        self.structure.iter().any(|(n, _)| n == name)
    }

    fn has_marker(&self, marker: &str) -> bool {
        if marker.starts_with('.') {
            self.structure.iter().any(|(n, _)| n.ends_with(marker))
        } else {
            self.has_entry(marker)
        }
    }
}

/// Profiler that reads the project directory, then refines with the description
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProjectProfiler;

impl FsProjectProfiler {
    fn scan(path: &Path) -> Result<DirectoryScan, ProfileError> {
        let unavailable = |reason: String| ProfileError::Unavailable {
            path: path.to_path_buf(),
            reason,
        };

        let meta = std::fs::metadata(path).map_err(|e| unavailable(e.to_string()))?;
        if !meta.is_dir() {
            return Err(unavailable("not a directory".to_string()));
        }

        let entries = std::fs::read_dir(path).map_err(|e| unavailable(e.to_string()))?;
        let mut names: Vec<String> = entries
            .flatten()
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();

        let structure = names
            .iter()
            .take(MAX_STRUCTURE_ENTRIES)
            .map(|name| (name.clone(), path.join(name).is_dir()))
            .collect();

        Ok(DirectoryScan { names, structure })
    }

    fn apply_scan(classification: &mut ProjectClassification, scan: &DirectoryScan) {
        classification.entries_scanned = scan.structure.len();
        classification.has_tests = scan
            .names
            .iter()
            .any(|n| n.contains("test") || n.contains("spec") || n == "__tests__");
        classification.has_docs = scan.names.iter().any(|n| {
            let lower = n.to_lowercase();
            lower.contains("readme") || lower.contains("doc")
        });

        for (marker, techs) in TECH_INDICATORS {
            if scan.has_marker(marker) {
                for tech in *techs {
                    classification.add_technology(tech);
                }
            }
        }

        classification.project_type = if scan.has_entry("src") {
            ProjectType::Structured
        } else if scan.has_entry("package.json") {
            ProjectType::Node
        } else if scan.has_entry("requirements.txt") {
            ProjectType::Python
        } else if !scan.structure.is_empty() {
            ProjectType::Existing
        } else {
            ProjectType::New
        };
    }
}

impl ProjectProfiler for FsProjectProfiler {
    fn classify(&self, path: &Path, description: &str) -> ProjectClassification {
        let mut classification = ProjectClassification::default();

        match Self::scan(path) {
            Ok(scan) => Self::apply_scan(&mut classification, &scan),
            Err(e) => {
                warn!("Could not analyze project, treating as new: {}", e);
                classification.project_type = ProjectType::New;
            }
        }

        apply_description(&mut classification, description);
        classification.complexity = Complexity::from_score(classification.score());

        debug!(
            project_type = %classification.project_type,
            complexity = %classification.complexity,
            technologies = ?classification.technologies,
            "Project classified"
        );
        classification
    }
}
