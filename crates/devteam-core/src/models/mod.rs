//! Model catalog and team model configuration.
//!
//! Models are static labels (provider, cost, speed, capabilities). Nothing here
//! talks to an inference backend.

mod catalog;
mod registry;
mod types;

pub use catalog::{all_models, find_model, models_by_provider, model_stats, ModelStats};
pub use registry::{
    ConfigValidation, ModelRegistry, ModelSelection, Recommendation, RegistryError,
    TeamModelConfig, DEFAULT_FALLBACK_MODEL, DEFAULT_MODEL,
};
pub use types::{Capability, CostTier, Model, ModelSummary, Provider, SpeedTier, TaskCategory};
