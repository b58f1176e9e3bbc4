mod catalog;
mod kv;
mod presets;
mod saved;

pub use catalog::{CatalogError, PresetCatalog, PresetSelection, PromptCategory};
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use presets::{IMAGE_PROMPT_CATEGORIES, UI_PROMPT_CATEGORIES};
pub use saved::{
    load, save, PromptStore, DEFAULT_SAVED_PROMPT_CAPACITY, IMAGE_PROMPTS_KEY, UI_PROMPTS_KEY,
};
