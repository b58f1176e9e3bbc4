mod registry;
mod selectors;

pub use registry::{
    ModelRegistry, ModelSpec, ModelTier, CAPABILITY_ANALYSIS, CAPABILITY_IMAGE, CAPABILITY_MARKUP,
    CAPABILITY_STYLE_TRANSFER,
};
pub use selectors::{ModelSelection, ModelSelector};
