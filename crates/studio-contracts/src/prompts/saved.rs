use std::sync::Arc;

use tracing::{debug, warn};

use super::kv::KeyValueStore;

pub const UI_PROMPTS_KEY: &str = "design-studio-ui-prompts";
pub const IMAGE_PROMPTS_KEY: &str = "design-studio-image-prompts";
pub const DEFAULT_SAVED_PROMPT_CAPACITY: usize = 50;

/// Favorite prompts for one panel, most recently saved first.
///
/// Entries are unique (exact, case-sensitive match). Each mutation rewrites the whole list under
/// the store key. Once `capacity` is reached the oldest entries are evicted from the tail.
pub struct PromptStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
    capacity: usize,
    prompts: Vec<String>,
}

impl PromptStore {
    pub fn open(backend: Arc<dyn KeyValueStore>, key: impl Into<String>, capacity: usize) -> Self {
        let key = key.into();
        let capacity = capacity.max(1);
        let prompts = normalize(load(backend.as_ref(), &key), capacity);
        debug!(key = %key, count = prompts.len(), "loaded saved prompts");
        Self {
            backend,
            key,
            capacity,
            prompts,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.prompts.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn contains(&self, prompt: &str) -> bool {
        self.prompts.iter().any(|item| item == prompt)
    }

    /// Prepend the trimmed prompt unless it is blank or already saved. Returns whether the list
    /// changed.
    pub fn add(&mut self, text: &str) -> bool {
        let prompt = text.trim();
        if prompt.is_empty() || self.contains(prompt) {
            return false;
        }
        self.prompts.insert(0, prompt.to_string());
        self.prompts.truncate(self.capacity);
        self.save();
        true
    }

    /// Remove the prompt at `index`. Out-of-range indices leave the list and storage untouched.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.prompts.len() {
            return None;
        }
        let removed = self.prompts.remove(index);
        self.save();
        Some(removed)
    }

    /// Write the full list. Failures are logged and otherwise ignored.
    pub fn save(&self) {
        if let Err(err) = save(self.backend.as_ref(), &self.key, &self.prompts) {
            warn!(key = %self.key, "failed to save prompts: {err:#}");
        }
    }
}

/// Read the list stored under `key`. Absent entries and unreadable or malformed data yield an
/// empty list; the latter are logged.
pub fn load(backend: &dyn KeyValueStore, key: &str) -> Vec<String> {
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(key = %key, "failed to load prompts: {err:#}");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(prompts) => prompts,
        Err(err) => {
            warn!(key = %key, "failed to parse stored prompts: {err}");
            Vec::new()
        }
    }
}

pub fn save(backend: &dyn KeyValueStore, key: &str, prompts: &[String]) -> anyhow::Result<()> {
    let raw = serde_json::to_string(prompts)?;
    backend.set(key, &raw)
}

fn normalize(prompts: Vec<String>, capacity: usize) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for prompt in prompts {
        if prompt.trim().is_empty() || unique.contains(&prompt) {
            continue;
        }
        unique.push(prompt);
    }
    unique.truncate(capacity);
    unique
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;
    use crate::prompts::kv::MemoryKeyValueStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Err(anyhow!("quota exceeded"))
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            Err(anyhow!("quota exceeded"))
        }
    }

    fn memory() -> Arc<dyn KeyValueStore> {
        Arc::new(MemoryKeyValueStore::new())
    }

    #[test]
    fn add_prepends_trimmed_prompt_and_persists() {
        let backend = memory();
        let mut store = PromptStore::open(backend.clone(), UI_PROMPTS_KEY, 10);
        assert!(store.add("  first  "));
        assert!(store.add("second"));
        assert_eq!(store.prompts(), ["second", "first"]);
        assert_eq!(load(backend.as_ref(), UI_PROMPTS_KEY), vec!["second", "first"]);
    }

    #[test]
    fn add_is_idempotent_and_keeps_first_position() {
        let mut store = PromptStore::open(memory(), UI_PROMPTS_KEY, 10);
        store.add("alpha");
        store.add("beta");
        assert!(!store.add("alpha"));
        assert!(!store.add("  alpha "));
        assert_eq!(store.len(), 2);
        assert_eq!(store.prompts(), ["beta", "alpha"]);
    }

    #[test]
    fn add_ignores_blank_text_and_is_case_sensitive() {
        let mut store = PromptStore::open(memory(), UI_PROMPTS_KEY, 10);
        assert!(!store.add("   "));
        assert!(store.add("Card"));
        assert!(store.add("card"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_drops_exactly_the_indexed_entry() {
        let backend = memory();
        let mut store = PromptStore::open(backend.clone(), IMAGE_PROMPTS_KEY, 10);
        for prompt in ["c", "b", "a"] {
            store.add(prompt);
        }
        assert_eq!(store.remove(1).as_deref(), Some("b"));
        assert_eq!(store.prompts(), ["a", "c"]);
        assert_eq!(load(backend.as_ref(), IMAGE_PROMPTS_KEY), vec!["a", "c"]);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut store = PromptStore::open(memory(), IMAGE_PROMPTS_KEY, 10);
        store.add("only");
        assert_eq!(store.remove(1), None);
        assert_eq!(store.remove(usize::MAX), None);
        assert_eq!(store.prompts(), ["only"]);
    }

    #[test]
    fn save_then_load_round_trips() -> anyhow::Result<()> {
        let backend = memory();
        let prompts = vec!["one".to_string(), "two \"quoted\"".to_string(), "три".to_string()];
        save(backend.as_ref(), UI_PROMPTS_KEY, &prompts)?;
        assert_eq!(load(backend.as_ref(), UI_PROMPTS_KEY), prompts);
        Ok(())
    }

    #[test]
    fn reopen_restores_previous_session() {
        let backend = memory();
        {
            let mut store = PromptStore::open(backend.clone(), UI_PROMPTS_KEY, 10);
            store.add("kept");
        }
        let store = PromptStore::open(backend, UI_PROMPTS_KEY, 10);
        assert_eq!(store.prompts(), ["kept"]);
    }

    #[test]
    fn panels_keep_independent_lists() {
        let backend = memory();
        let mut ui = PromptStore::open(backend.clone(), UI_PROMPTS_KEY, 10);
        let mut image = PromptStore::open(backend.clone(), IMAGE_PROMPTS_KEY, 10);
        ui.add("ui prompt");
        image.add("image prompt");
        assert_eq!(load(backend.as_ref(), UI_PROMPTS_KEY), vec!["ui prompt"]);
        assert_eq!(load(backend.as_ref(), IMAGE_PROMPTS_KEY), vec!["image prompt"]);
    }

    #[test]
    fn malformed_entry_loads_as_empty() -> anyhow::Result<()> {
        let backend = memory();
        backend.set(UI_PROMPTS_KEY, "{\"not\": \"a list\"}")?;
        let store = PromptStore::open(backend, UI_PROMPTS_KEY, 10);
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn failing_backend_degrades_to_in_memory_list() {
        let mut store = PromptStore::open(Arc::new(BrokenStore), UI_PROMPTS_KEY, 10);
        assert!(store.is_empty());
        assert!(store.add("still works"));
        assert_eq!(store.prompts(), ["still works"]);
    }

    #[test]
    fn capacity_evicts_oldest_entries() {
        let mut store = PromptStore::open(memory(), UI_PROMPTS_KEY, 3);
        for prompt in ["1", "2", "3", "4", "5"] {
            store.add(prompt);
        }
        assert_eq!(store.prompts(), ["5", "4", "3"]);
    }

    #[test]
    fn open_normalizes_stored_duplicates_and_blanks() -> anyhow::Result<()> {
        let backend = memory();
        backend.set(UI_PROMPTS_KEY, r#"["a", "", "b", "a", "c", "d"]"#)?;
        let store = PromptStore::open(backend, UI_PROMPTS_KEY, 3);
        assert_eq!(store.prompts(), ["a", "b", "c"]);
        Ok(())
    }
}
