use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::feed::DEFAULT_FEED_CAPACITY;
use crate::models::{DEFAULT_FALLBACK_MODEL, DEFAULT_MODEL};

/// Application settings (from config file)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Timer periods and probabilities of the simulation
    #[serde(default)]
    pub simulation: SimulationSettings,

    /// Activity feed settings
    #[serde(default)]
    pub feed: FeedSettings,

    /// Initial team model configuration
    #[serde(default)]
    pub models: ModelSettings,

    /// Project profiling settings
    #[serde(default)]
    pub profile: ProfileSettings,
}

/// Timer periods (milliseconds) and event probabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Period of the per-worker advancement tick
    #[serde(default = "default_advance_interval")]
    pub advance_interval_ms: u64,

    /// Minimum period of the per-worker ambient activity tick
    #[serde(default = "default_activity_base")]
    pub activity_base_ms: u64,

    /// Random extra added to each ambient period, drawn from `[0, jitter)`
    #[serde(default = "default_activity_jitter")]
    pub activity_jitter_ms: u64,

    /// Chance that an ambient tick emits an event
    #[serde(default = "default_activity_probability")]
    pub activity_probability: f64,

    /// Chance that an advancement tick emits a progress line
    #[serde(default = "default_progress_event_probability")]
    pub progress_event_probability: f64,

    /// Period of the team-wide nudge tick
    #[serde(default = "default_team_tick_interval")]
    pub team_tick_interval_ms: u64,

    /// Chance that a nudge changes a working worker's focus text
    #[serde(default = "default_nudge_probability")]
    pub nudge_probability: f64,
}

fn default_advance_interval() -> u64 {
    2000
}

fn default_activity_base() -> u64 {
    3000
}

fn default_activity_jitter() -> u64 {
    4000
}

fn default_activity_probability() -> f64 {
    0.6
}

fn default_progress_event_probability() -> f64 {
    0.4
}

fn default_team_tick_interval() -> u64 {
    5000
}

fn default_nudge_probability() -> f64 {
    0.3
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            advance_interval_ms: default_advance_interval(),
            activity_base_ms: default_activity_base(),
            activity_jitter_ms: default_activity_jitter(),
            activity_probability: default_activity_probability(),
            progress_event_probability: default_progress_event_probability(),
            team_tick_interval_ms: default_team_tick_interval(),
            nudge_probability: default_nudge_probability(),
        }
    }
}

/// Activity feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSettings {
    /// Number of events retained (newest first)
    #[serde(default = "default_feed_capacity")]
    pub capacity: usize,
}

fn default_feed_capacity() -> usize {
    DEFAULT_FEED_CAPACITY
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            capacity: default_feed_capacity(),
        }
    }
}

/// Team model configuration applied at startup.
///
/// Unknown ids are rejected with a warning and the built-in value is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Default model id
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Model used when the default cannot be resolved
    #[serde(default = "default_fallback_model")]
    pub fallback_model: String,

    /// Per-specialization overrides keyed by specialization label
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_fallback_model() -> String {
    DEFAULT_FALLBACK_MODEL.to_string()
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            fallback_model: default_fallback_model(),
            overrides: BTreeMap::new(),
        }
    }
}

/// Project profiling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSettings {
    /// Inspect the project directory; when false only the description is used
    #[serde(default = "default_scan_filesystem")]
    pub scan_filesystem: bool,
}

fn default_scan_filesystem() -> bool {
    true
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            scan_filesystem: default_scan_filesystem(),
        }
    }
}

impl Settings {
    /// Load settings from config file or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        // Try custom path first
        if let Some(p) = path {
            if p.exists() {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read config file: {:?}", p))?;
                return toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config file: {:?}", p));
            }
        }

        let default_paths = [
            dirs::config_dir().map(|p| p.join("devteam/config.toml")),
            dirs::home_dir().map(|p| p.join(".config/devteam/config.toml")),
            dirs::home_dir().map(|p| p.join(".devteam.toml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {:?}", path))?;
                return toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config file: {:?}", path));
            }
        }

        Ok(Self::default())
    }

    /// Validate and normalize settings values
    ///
    /// Timer periods are at least 1 ms, probabilities lie in `[0, 1]`, and the
    /// feed keeps at least one event.
    pub fn validate(&mut self) {
        const MIN_INTERVAL: u64 = 1;

        let sim = &mut self.simulation;
        sim.advance_interval_ms = sim.advance_interval_ms.max(MIN_INTERVAL);
        sim.activity_base_ms = sim.activity_base_ms.max(MIN_INTERVAL);
        sim.team_tick_interval_ms = sim.team_tick_interval_ms.max(MIN_INTERVAL);
        for p in [
            &mut sim.activity_probability,
            &mut sim.progress_event_probability,
            &mut sim.nudge_probability,
        ] {
            *p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        }

        self.feed.capacity = self.feed.capacity.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.simulation.advance_interval_ms, 2000);
        assert_eq!(settings.simulation.team_tick_interval_ms, 5000);
        assert_eq!(settings.feed.capacity, 50);
        assert_eq!(settings.models.default_model, "claude-3.5-sonnet");
        assert_eq!(settings.models.fallback_model, "gpt-3.5-turbo");
        assert!(settings.profile.scan_filesystem);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            [simulation]
            advance_interval_ms = 100
            activity_probability = 0.25

            [feed]
            capacity = 20

            [models]
            default_model = "gpt-4o"

            [models.overrides]
            Backend = "deepseek-coder"
        "#;

        let settings: Settings = toml::from_str(toml).expect("Should parse TOML");
        assert_eq!(settings.simulation.advance_interval_ms, 100);
        assert_eq!(settings.simulation.activity_base_ms, 3000);
        assert_eq!(settings.simulation.activity_probability, 0.25);
        assert_eq!(settings.feed.capacity, 20);
        assert_eq!(settings.models.default_model, "gpt-4o");
        assert_eq!(
            settings.models.overrides.get("Backend").map(String::as_str),
            Some("deepseek-coder")
        );
    }

    #[test]
    fn test_validate_clamps() {
        let mut settings = Settings::default();
        settings.simulation.advance_interval_ms = 0;
        settings.simulation.activity_probability = 3.0;
        settings.simulation.nudge_probability = -1.0;
        settings.simulation.progress_event_probability = f64::NAN;
        settings.feed.capacity = 0;
        settings.validate();

        assert_eq!(settings.simulation.advance_interval_ms, 1);
        assert_eq!(settings.simulation.activity_probability, 1.0);
        assert_eq!(settings.simulation.nudge_probability, 0.0);
        assert_eq!(settings.simulation.progress_event_probability, 0.0);
        assert_eq!(settings.feed.capacity, 1);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[feed]\ncapacity = 7\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.feed.capacity, 7);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[feed\ncapacity = ").unwrap();

        assert!(Settings::load(Some(&path)).is_err());
    }
}
