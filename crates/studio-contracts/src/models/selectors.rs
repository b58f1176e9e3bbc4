use super::registry::{ModelRegistry, ModelSpec, ModelTier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub model: ModelSpec,
    pub requested_tier: ModelTier,
    pub fallback_reason: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ModelSelector {
    pub registry: ModelRegistry,
}

impl ModelSelector {
    pub fn new(registry: Option<ModelRegistry>) -> Self {
        Self {
            registry: registry.unwrap_or_else(|| ModelRegistry::new(None)),
        }
    }

    /// Pick the first model of the requested tier for `capability`, falling back to any model
    /// with the capability and explaining why.
    pub fn select(&self, premium: bool, capability: &str) -> Result<ModelSelection, String> {
        let requested_tier = if premium {
            ModelTier::Premium
        } else {
            ModelTier::Standard
        };
        let candidates = self.registry.by_capability(capability);
        if let Some(model) = candidates
            .iter()
            .find(|model| model.tier == requested_tier)
            .cloned()
        {
            return Ok(ModelSelection {
                model,
                requested_tier,
                fallback_reason: None,
            });
        }

        let Some(model) = candidates.first().cloned() else {
            return Err(format!(
                "No models available for capability '{capability}'."
            ));
        };
        Ok(ModelSelection {
            fallback_reason: Some(format!(
                "No {} model for capability '{capability}'; using {}.",
                tier_name(requested_tier),
                model.name
            )),
            model,
            requested_tier,
        })
    }
}

fn tier_name(tier: ModelTier) -> &'static str {
    match tier {
        ModelTier::Standard => "standard",
        ModelTier::Premium => "premium",
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::models::{CAPABILITY_IMAGE, CAPABILITY_MARKUP};

    fn spec(name: &str, tier: ModelTier, capabilities: &[&str]) -> ModelSpec {
        ModelSpec {
            name: name.to_string(),
            provider: "dryrun".to_string(),
            label: name.to_string(),
            tier,
            capabilities: capabilities.iter().map(|item| (*item).to_string()).collect(),
        }
    }

    #[test]
    fn premium_flag_picks_pro_markup_model() {
        let selector = ModelSelector::new(None);
        let pro = selector.select(true, CAPABILITY_MARKUP).unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(pro.model.label, "Pro (mocked)");
        assert_eq!(pro.fallback_reason, None);

        let flash = selector.select(false, CAPABILITY_MARKUP).unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(flash.model.label, "Flash (mocked)");
    }

    #[test]
    fn missing_tier_falls_back_with_reason() {
        let selector = ModelSelector::new(None);
        let selection = selector
            .select(true, CAPABILITY_IMAGE)
            .unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(selection.model.name, "dryrun-imagen");
        assert_eq!(
            selection.fallback_reason.as_deref(),
            Some("No premium model for capability 'image'; using dryrun-imagen.")
        );
    }

    #[test]
    fn raises_when_no_models_for_capability() {
        let mut models = IndexMap::new();
        models.insert(
            "text-only".to_string(),
            spec("text-only", ModelTier::Standard, &[CAPABILITY_MARKUP]),
        );
        let err = ModelSelector::new(Some(ModelRegistry::new(Some(models))))
            .select(false, CAPABILITY_IMAGE)
            .err()
            .unwrap_or_default();
        assert_eq!(err, "No models available for capability 'image'.");
    }
}
