//! Team model configuration on top of the static catalog.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::config::ModelSettings;
use crate::profile::Complexity;
use crate::workers::Specialization;

use super::catalog::{all_models, find_model};
use super::types::{CostTier, Model, TaskCategory};

/// Built-in default model id
pub const DEFAULT_MODEL: &str = "claude-3.5-sonnet";

/// Built-in fallback model id
pub const DEFAULT_FALLBACK_MODEL: &str = "gpt-3.5-turbo";

/// Errors raised by configuration changes
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The model id does not exist in the catalog
    #[error("unknown model: {id}")]
    InvalidReference { id: String },

    /// Imported configuration has the wrong shape; nothing was applied
    #[error("invalid configuration import: {reason}")]
    ImportValidation { reason: String },

    /// Configuration could not be serialized
    #[error("failed to export configuration: {0}")]
    Export(#[from] serde_json::Error),
}

/// The mutable part of the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamModelConfig {
    /// Model used by every specialization without an override
    pub default_model: String,
    /// Per-specialization overrides
    #[serde(default)]
    pub specialization_models: BTreeMap<Specialization, String>,
    /// Model used when the default cannot be resolved
    pub fallback_model: String,
}

impl Default for TeamModelConfig {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL.to_string(),
            specialization_models: BTreeMap::new(),
            fallback_model: DEFAULT_FALLBACK_MODEL.to_string(),
        }
    }
}

/// A model choice coming from a front-end: a catalog id or "use default"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSelection {
    UseDefault,
    Model(String),
}

impl FromStr for ModelSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "default" | "use default" | "use-default" => Ok(ModelSelection::UseDefault),
            _ => Ok(ModelSelection::Model(trimmed.to_string())),
        }
    }
}

/// Outcome of [`ModelRegistry::validate_configuration`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigValidation {
    pub valid: bool,
    pub issues: Vec<String>,
}

/// One advisory line of the recommendation list
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Human-readable task label
    pub task: &'static str,
    pub category: TaskCategory,
    pub complexity: Complexity,
    pub model: &'static Model,
}

/// Fixed advisory list shown by front-ends
const RECOMMENDATION_TABLE: &[(&str, TaskCategory, Complexity)] = &[
    (
        "Complex Frontend Development",
        TaskCategory::Frontend,
        Complexity::Complex,
    ),
    (
        "Backend API Development",
        TaskCategory::Backend,
        Complexity::Medium,
    ),
    (
        "DevOps and Infrastructure",
        TaskCategory::Devops,
        Complexity::Complex,
    ),
    ("Testing and QA", TaskCategory::Testing, Complexity::Medium),
    (
        "Code Optimization",
        TaskCategory::Optimization,
        Complexity::Complex,
    ),
    ("Bug Fixing", TaskCategory::Debugging, Complexity::Medium),
];

/// Ranked candidates per task category
fn candidates_for(category: TaskCategory) -> &'static [&'static str] {
    match category {
        TaskCategory::Frontend => &["gpt-4o", "claude-3.5-sonnet", "gemini-pro"],
        TaskCategory::Backend => &["claude-3.5-sonnet", "gpt-4o", "gemini-pro"],
        TaskCategory::Devops => &["gpt-4o", "claude-3.5-sonnet", "gemini-pro"],
        TaskCategory::Testing => &["claude-3.5-sonnet", "gpt-4o-mini", "gemini-flash"],
        TaskCategory::Debugging => &["claude-3.5-sonnet", "gpt-4o", "gemini-pro"],
        TaskCategory::Optimization => &["claude-3.5-sonnet", "gpt-4o", "gemini-pro"],
    }
}

/// Static catalog plus the team's model configuration
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    config: TeamModelConfig,
}

impl ModelRegistry {
    /// Registry with the built-in configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded from settings; invalid entries are skipped with a warning
    pub fn from_settings(settings: &ModelSettings) -> Self {
        let mut registry = Self::new();

        if let Err(e) = registry.set_default_model(&settings.default_model) {
            warn!("Ignoring configured default model: {}", e);
        }
        if find_model(&settings.fallback_model).is_some() {
            registry.config.fallback_model = settings.fallback_model.clone();
        } else {
            warn!(
                "Ignoring configured fallback model: unknown model: {}",
                settings.fallback_model
            );
        }
        for (spec, id) in &settings.overrides {
            let spec = match spec.parse::<Specialization>() {
                Ok(s) => s,
                Err(e) => {
                    warn!("Ignoring model override: {}", e);
                    continue;
                }
            };
            if let Err(e) = registry.set_specialization_override(spec, id) {
                warn!("Ignoring model override for {}: {}", spec, e);
            }
        }

        registry
    }

    /// Every catalog entry
    pub fn list_models(&self) -> &'static [Model] {
        all_models()
    }

    /// Look up a catalog entry
    pub fn find_model(&self, id: &str) -> Option<&'static Model> {
        find_model(id)
    }

    /// Current configuration
    pub fn configuration(&self) -> &TeamModelConfig {
        &self.config
    }

    /// Set the default model; unknown ids leave the configuration unchanged
    pub fn set_default_model(&mut self, id: &str) -> Result<(), RegistryError> {
        let model = Self::require(id)?;
        self.config.default_model = model.id.to_string();
        Ok(())
    }

    /// Override the model of one specialization
    pub fn set_specialization_override(
        &mut self,
        specialization: Specialization,
        id: &str,
    ) -> Result<(), RegistryError> {
        let model = Self::require(id)?;
        self.config
            .specialization_models
            .insert(specialization, model.id.to_string());
        Ok(())
    }

    /// Remove an override; returns whether one existed
    pub fn clear_specialization_override(&mut self, specialization: Specialization) -> bool {
        self.config
            .specialization_models
            .remove(&specialization)
            .is_some()
    }

    /// Apply a front-end selection for one specialization
    pub fn apply_selection(
        &mut self,
        specialization: Specialization,
        selection: &ModelSelection,
    ) -> Result<(), RegistryError> {
        match selection {
            ModelSelection::UseDefault => {
                self.clear_specialization_override(specialization);
                Ok(())
            }
            ModelSelection::Model(id) => self.set_specialization_override(specialization, id),
        }
    }

    /// Configured model id for a specialization (override or default)
    pub fn model_id_for_specialization(&self, specialization: Specialization) -> &str {
        self.config
            .specialization_models
            .get(&specialization)
            .unwrap_or(&self.config.default_model)
    }

    /// Model bound to workers of a specialization.
    ///
    /// Resolution order: override, default, fallback, first catalog entry.
    /// Skipping a dangling reference is logged.
    pub fn resolve_model_for_specialization(
        &self,
        specialization: Specialization,
    ) -> &'static Model {
        if let Some(id) = self.config.specialization_models.get(&specialization) {
            match find_model(id) {
                Some(model) => return model,
                None => warn!(
                    "Model override for {} is not in the catalog: {}",
                    specialization, id
                ),
            }
        }
        self.resolve_default()
    }

    fn resolve_default(&self) -> &'static Model {
        if let Some(model) = find_model(&self.config.default_model) {
            return model;
        }
        warn!(
            "Default model is not in the catalog: {}",
            self.config.default_model
        );
        if let Some(model) = find_model(&self.config.fallback_model) {
            return model;
        }
        warn!(
            "Fallback model is not in the catalog: {}",
            self.config.fallback_model
        );
        &all_models()[0]
    }

    /// Resolved model for every specialization
    pub fn resolved_models(&self) -> BTreeMap<Specialization, &'static Model> {
        Specialization::ALL
            .iter()
            .map(|s| (*s, self.resolve_model_for_specialization(*s)))
            .collect()
    }

    /// Advisory pick from the ranked candidates of `category`.
    ///
    /// The complexity rank indexes the list, clamped to its bounds.
    pub fn recommend_model_for_task(
        &self,
        category: TaskCategory,
        complexity: Complexity,
    ) -> &'static Model {
        let candidates = candidates_for(category);
        let index = complexity.rank().min(candidates.len() - 1);
        find_model(candidates[index]).unwrap_or(&all_models()[0])
    }

    /// The fixed recommendation list
    pub fn recommendations(&self) -> Vec<Recommendation> {
        RECOMMENDATION_TABLE
            .iter()
            .map(|(task, category, complexity)| Recommendation {
                task: *task,
                category: *category,
                complexity: *complexity,
                model: self.recommend_model_for_task(*category, *complexity),
            })
            .collect()
    }

    /// Free and low cost catalog entries
    pub fn cost_effective_models(&self) -> Vec<&'static Model> {
        all_models()
            .iter()
            .filter(|m| matches!(m.cost, CostTier::Free | CostTier::Low))
            .collect()
    }

    /// Check that every configured id resolves to a catalog entry
    pub fn validate_configuration(&self) -> ConfigValidation {
        let config = &self.config;
        collect_issues(
            &config.default_model,
            &config.fallback_model,
            config
                .specialization_models
                .iter()
                .map(|(spec, id)| (spec.to_string(), id.as_str())),
            Vec::new(),
        )
    }

    /// Check raw `[models]` settings before anything is filtered out.
    ///
    /// [`ModelRegistry::from_settings`] skips invalid entries; this reports them.
    pub fn validate_settings(settings: &ModelSettings) -> ConfigValidation {
        let mut issues = Vec::new();
        let mut overrides = Vec::new();
        for (key, id) in &settings.overrides {
            match key.parse::<Specialization>() {
                Ok(spec) => overrides.push((spec.to_string(), id.as_str())),
                Err(_) => issues.push(format!(
                    "Unknown specialization '{}' in model overrides",
                    key
                )),
            }
        }
        collect_issues(
            &settings.default_model,
            &settings.fallback_model,
            overrides.into_iter(),
            issues,
        )
    }

    /// Restore the built-in configuration
    pub fn reset_to_defaults(&mut self) {
        self.config = TeamModelConfig::default();
    }

    /// Serialize the configuration as pretty JSON
    pub fn export_configuration(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }

    /// Replace the configuration from exported JSON.
    ///
    /// Only the shape is checked; the configuration is replaced atomically or
    /// not at all. A missing `fallback_model` keeps the current one.
    pub fn import_configuration(&mut self, text: &str) -> Result<(), RegistryError> {
        let imported = parse_import(text, &self.config.fallback_model)?;
        self.config = imported;
        Ok(())
    }

    fn require(id: &str) -> Result<&'static Model, RegistryError> {
        find_model(id).ok_or_else(|| RegistryError::InvalidReference { id: id.to_string() })
    }
}

/// Default, fallback, then overrides; `issues` holds problems found earlier
fn collect_issues<'a>(
    default_model: &str,
    fallback_model: &str,
    overrides: impl Iterator<Item = (String, &'a str)>,
    mut issues: Vec<String>,
) -> ConfigValidation {
    let mut dangling = Vec::new();
    if find_model(default_model).is_none() {
        dangling.push(format!("Default model '{}' is not available", default_model));
    }
    if find_model(fallback_model).is_none() {
        dangling.push(format!(
            "Fallback model '{}' is not available",
            fallback_model
        ));
    }
    for (spec, id) in overrides {
        if find_model(id).is_none() {
            dangling.push(format!(
                "Model '{}' for {} specialization is not available",
                id, spec
            ));
        }
    }
    dangling.append(&mut issues);

    ConfigValidation {
        valid: dangling.is_empty(),
        issues: dangling,
    }
}

fn import_error(reason: impl Into<String>) -> RegistryError {
    RegistryError::ImportValidation {
        reason: reason.into(),
    }
}

fn parse_import(text: &str, current_fallback: &str) -> Result<TeamModelConfig, RegistryError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| import_error(format!("not valid JSON: {}", e)))?;
    let object = value
        .as_object()
        .ok_or_else(|| import_error("expected a JSON object"))?;

    let default_model = object
        .get("default_model")
        .and_then(Value::as_str)
        .ok_or_else(|| import_error("default_model must be a string"))?;

    let overrides = object
        .get("specialization_models")
        .and_then(Value::as_object)
        .ok_or_else(|| import_error("specialization_models must be an object"))?;

    let mut specialization_models = BTreeMap::new();
    for (key, value) in overrides {
        let spec = key.parse::<Specialization>().map_err(import_error)?;
        let id = value
            .as_str()
            .ok_or_else(|| import_error(format!("model for {} must be a string", key)))?;
        specialization_models.insert(spec, id.to_string());
    }

    let fallback_model = match object.get("fallback_model") {
        None => current_fallback.to_string(),
        Some(v) => v
            .as_str()
            .ok_or_else(|| import_error("fallback_model must be a string"))?
            .to_string(),
    };

    Ok(TeamModelConfig {
        default_model: default_model.to_string(),
        specialization_models,
        fallback_model,
    })
}
