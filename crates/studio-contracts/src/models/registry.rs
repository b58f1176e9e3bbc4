use indexmap::IndexMap;

pub const CAPABILITY_MARKUP: &str = "markup";
pub const CAPABILITY_IMAGE: &str = "image";
pub const CAPABILITY_ANALYSIS: &str = "analysis";
pub const CAPABILITY_STYLE_TRANSFER: &str = "style_transfer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelTier {
    Standard,
    Premium,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    pub name: String,
    pub provider: String,
    pub label: String,
    pub tier: ModelTier,
    pub capabilities: Vec<String>,
}

impl ModelSpec {
    pub fn supports(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|item| item == capability)
    }
}

#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: IndexMap<String, ModelSpec>,
}

impl ModelRegistry {
    pub fn new(models: Option<IndexMap<String, ModelSpec>>) -> Self {
        Self {
            models: models.unwrap_or_else(default_models),
        }
    }

    /// Models offering `capability`, in registration order.
    pub fn by_capability(&self, capability: &str) -> Vec<ModelSpec> {
        self.models
            .values()
            .filter(|model| model.supports(capability))
            .cloned()
            .collect()
    }
}

fn default_models() -> IndexMap<String, ModelSpec> {
    let mut map = IndexMap::new();

    let mut insert = |name: &str, label: &str, tier: ModelTier, capabilities: &[&str]| {
        map.insert(
            name.to_string(),
            ModelSpec {
                name: name.to_string(),
                provider: "dryrun".to_string(),
                label: label.to_string(),
                tier,
                capabilities: capabilities
                    .iter()
                    .map(|item| (*item).to_string())
                    .collect(),
            },
        );
    };

    insert(
        "dryrun-flash",
        "Flash (mocked)",
        ModelTier::Standard,
        &[CAPABILITY_MARKUP, CAPABILITY_ANALYSIS, CAPABILITY_STYLE_TRANSFER],
    );
    insert(
        "dryrun-pro",
        "Pro (mocked)",
        ModelTier::Premium,
        &[CAPABILITY_MARKUP, CAPABILITY_ANALYSIS],
    );
    insert(
        "dryrun-imagen",
        "Imagen (mocked)",
        ModelTier::Standard,
        &[CAPABILITY_IMAGE],
    );

    map
}
