//! The static model catalog.

use std::collections::BTreeMap;

use serde::Serialize;

use super::types::{Capability, CostTier, Model, Provider, SpeedTier};

use Capability::{Analysis, Coding, General, Multimodal, Reasoning};

static CATALOG: &[Model] = &[
    Model {
        id: "gpt-4o",
        name: "GPT-4o",
        provider: Provider::OpenAI,
        cost: CostTier::High,
        speed: SpeedTier::Fast,
        capabilities: &[Coding, Reasoning, Multimodal],
        description: "Latest GPT-4 model with enhanced capabilities",
    },
    Model {
        id: "gpt-4o-mini",
        name: "GPT-4o Mini",
        provider: Provider::OpenAI,
        cost: CostTier::Medium,
        speed: SpeedTier::VeryFast,
        capabilities: &[Coding, Reasoning],
        description: "Smaller, faster version of GPT-4o",
    },
    Model {
        id: "gpt-3.5-turbo",
        name: "GPT-3.5 Turbo",
        provider: Provider::OpenAI,
        cost: CostTier::Low,
        speed: SpeedTier::VeryFast,
        capabilities: &[Coding, General],
        description: "Fast and cost-effective for most tasks",
    },
    Model {
        id: "claude-3.5-sonnet",
        name: "Claude 3.5 Sonnet",
        provider: Provider::Anthropic,
        cost: CostTier::High,
        speed: SpeedTier::Fast,
        capabilities: &[Coding, Reasoning, Analysis],
        description: "Excellent for complex coding and reasoning tasks",
    },
    Model {
        id: "claude-3-haiku",
        name: "Claude 3 Haiku",
        provider: Provider::Anthropic,
        cost: CostTier::Low,
        speed: SpeedTier::VeryFast,
        capabilities: &[Coding, General],
        description: "Fast and efficient for simpler tasks",
    },
    Model {
        id: "gemini-pro",
        name: "Gemini Pro",
        provider: Provider::Google,
        cost: CostTier::Medium,
        speed: SpeedTier::Fast,
        capabilities: &[Coding, Reasoning, Multimodal],
        description: "Google's advanced AI model",
    },
    Model {
        id: "gemini-flash",
        name: "Gemini Flash",
        provider: Provider::Google,
        cost: CostTier::Low,
        speed: SpeedTier::VeryFast,
        capabilities: &[Coding, General],
        description: "Optimized for speed and efficiency",
    },
    Model {
        id: "codellama-34b",
        name: "Code Llama 34B",
        provider: Provider::Local,
        cost: CostTier::Free,
        speed: SpeedTier::Medium,
        capabilities: &[Coding],
        description: "Open-source model specialized for coding",
    },
    Model {
        id: "deepseek-coder",
        name: "DeepSeek Coder",
        provider: Provider::Local,
        cost: CostTier::Free,
        speed: SpeedTier::Medium,
        capabilities: &[Coding],
        description: "Open-source coding specialist",
    },
];

/// Every catalog entry, grouped by provider in catalog order
pub fn all_models() -> &'static [Model] {
    CATALOG
}

/// Look up a model by id
pub fn find_model(id: &str) -> Option<&'static Model> {
    CATALOG.iter().find(|m| m.id == id)
}

/// Catalog grouped by provider; providers without entries are omitted
pub fn models_by_provider() -> Vec<(Provider, Vec<&'static Model>)> {
    Provider::ALL
        .iter()
        .map(|p| (*p, CATALOG.iter().filter(|m| m.provider == *p).collect::<Vec<_>>()))
        .filter(|(_, models)| !models.is_empty())
        .collect()
}

/// Catalog counters
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ModelStats {
    pub total_models: usize,
    pub by_provider: BTreeMap<Provider, usize>,
    pub by_cost: BTreeMap<CostTier, usize>,
    pub by_speed: BTreeMap<SpeedTier, usize>,
}

/// Count catalog entries by provider, cost and speed.
///
/// Every cost and speed tier is present in the maps, zero when unused.
pub fn model_stats() -> ModelStats {
    let mut by_provider = BTreeMap::new();
    let mut by_cost: BTreeMap<CostTier, usize> = CostTier::ALL.iter().map(|c| (*c, 0)).collect();
    let mut by_speed: BTreeMap<SpeedTier, usize> =
        SpeedTier::ALL.iter().map(|s| (*s, 0)).collect();

    for model in CATALOG {
        *by_provider.entry(model.provider).or_insert(0) += 1;
        *by_cost.entry(model.cost).or_insert(0) += 1;
        *by_speed.entry(model.speed).or_insert(0) += 1;
    }

    ModelStats {
        total_models: CATALOG.len(),
        by_provider,
        by_cost,
        by_speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<_> = all_models().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), all_models().len());
    }

    #[test]
    fn test_find_model() {
        let model = find_model("claude-3.5-sonnet").unwrap();
        assert_eq!(model.name, "Claude 3.5 Sonnet");
        assert_eq!(model.provider, Provider::Anthropic);
        assert!(model.capabilities.contains(&Capability::Analysis));
        assert!(find_model("nonexistent-id").is_none());
    }

    #[test]
    fn test_grouped_by_provider() {
        let groups = models_by_provider();
        let providers: Vec<_> = groups.iter().map(|(p, _)| *p).collect();
        assert_eq!(providers, Provider::ALL.to_vec());
        assert_eq!(groups[0].1.len(), 3);
        assert_eq!(groups[3].1.len(), 2);
    }

    #[test]
    fn test_model_stats() {
        let stats = model_stats();
        assert_eq!(stats.total_models, 9);
        assert_eq!(stats.by_provider[&Provider::OpenAI], 3);
        assert_eq!(stats.by_cost[&CostTier::Free], 2);
        assert_eq!(stats.by_speed[&SpeedTier::Slow], 0);
        assert_eq!(stats.by_speed[&SpeedTier::VeryFast], 4);
    }
}
