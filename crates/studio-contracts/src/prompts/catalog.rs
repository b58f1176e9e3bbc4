use indexmap::IndexMap;
use thiserror::Error;

use super::presets::{IMAGE_PROMPT_CATEGORIES, UI_PROMPT_CATEGORIES};

/// A named, compiled-in group of example prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptCategory {
    pub name: &'static str,
    pub prompts: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown preset category '{0}'")]
    UnknownCategory(String),
}

/// Read-only catalog of preset categories, in declaration order.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    categories: IndexMap<&'static str, PromptCategory>,
}

impl PresetCatalog {
    pub fn new(categories: &'static [PromptCategory]) -> Self {
        Self {
            categories: categories
                .iter()
                .map(|category| (category.name, *category))
                .collect(),
        }
    }

    pub fn ui() -> Self {
        Self::new(UI_PROMPT_CATEGORIES)
    }

    pub fn image() -> Self {
        Self::new(IMAGE_PROMPT_CATEGORIES)
    }

    /// Exact lookup, falling back to an ASCII case-insensitive match.
    pub fn get(&self, name: &str) -> Option<&PromptCategory> {
        let name = name.trim();
        self.categories.get(name).or_else(|| {
            self.categories
                .values()
                .find(|category| category.name.eq_ignore_ascii_case(name))
        })
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.categories.keys().copied().collect()
    }

    pub fn categories(&self) -> impl Iterator<Item = &PromptCategory> {
        self.categories.values()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Single-select active category plus a free-text filter over its prompts.
#[derive(Debug, Clone)]
pub struct PresetSelection {
    catalog: PresetCatalog,
    active: Option<&'static str>,
    filter: String,
}

impl PresetSelection {
    pub fn new(catalog: PresetCatalog) -> Self {
        Self {
            catalog,
            active: None,
            filter: String::new(),
        }
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn active(&self) -> Option<&PromptCategory> {
        self.active.and_then(|name| self.catalog.get(name))
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Toggle `name`: re-selecting the active category clears it, any other category becomes
    /// active with an empty filter. Returns the category active afterwards.
    pub fn select_category(&mut self, name: &str) -> Result<Option<&PromptCategory>, CatalogError> {
        let Some(category) = self.catalog.get(name) else {
            return Err(CatalogError::UnknownCategory(name.trim().to_string()));
        };
        let picked = category.name;
        if self.active == Some(picked) {
            self.active = None;
        } else {
            self.active = Some(picked);
            self.filter.clear();
        }
        Ok(self.active())
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn filtered_prompts(&self) -> Vec<&'static str> {
        let Some(category) = self.active() else {
            return Vec::new();
        };
        if self.filter.is_empty() {
            return category.prompts.to_vec();
        }
        let needle = self.filter.to_lowercase();
        category
            .prompts
            .iter()
            .copied()
            .filter(|prompt| prompt.to_lowercase().contains(&needle))
            .collect()
    }
}
