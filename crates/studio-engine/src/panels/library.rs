use studio_contracts::layout::ResizeController;
use studio_contracts::prompts::{PresetCatalog, PresetSelection, PromptStore};

/// Saved prompts, preset browser and the resizable drawer that shows them.
pub struct PromptLibrary {
    saved: PromptStore,
    presets: PresetSelection,
    resize: ResizeController,
    drawer_open: bool,
}

impl PromptLibrary {
    pub fn new(saved: PromptStore, catalog: PresetCatalog) -> Self {
        Self {
            saved,
            presets: PresetSelection::new(catalog),
            resize: ResizeController::default(),
            drawer_open: false,
        }
    }

    pub fn saved(&self) -> &PromptStore {
        &self.saved
    }

    pub fn saved_mut(&mut self) -> &mut PromptStore {
        &mut self.saved
    }

    pub fn presets(&self) -> &PresetSelection {
        &self.presets
    }

    pub fn presets_mut(&mut self) -> &mut PresetSelection {
        &mut self.presets
    }

    pub fn resize(&self) -> &ResizeController {
        &self.resize
    }

    pub fn resize_mut(&mut self) -> &mut ResizeController {
        &mut self.resize
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Show or hide the drawer. Hiding it also clears the active preset category.
    pub fn toggle_drawer(&mut self) -> bool {
        self.drawer_open = !self.drawer_open;
        if !self.drawer_open {
            self.presets.clear();
        }
        self.drawer_open
    }

    /// Entry `index` of the currently filtered preset list.
    pub fn preset_prompt(&self, index: usize) -> Option<&'static str> {
        self.presets.filtered_prompts().get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use studio_contracts::prompts::{MemoryKeyValueStore, UI_PROMPTS_KEY};

    use super::*;

    fn library() -> PromptLibrary {
        let saved = PromptStore::open(Arc::new(MemoryKeyValueStore::new()), UI_PROMPTS_KEY, 10);
        PromptLibrary::new(saved, PresetCatalog::ui())
    }

    #[test]
    fn closing_drawer_clears_active_category() -> anyhow::Result<()> {
        let mut library = library();
        assert!(library.toggle_drawer());
        library.presets_mut().select_category("Gameplay")?;
        assert!(library.presets().active().is_some());
        assert!(!library.toggle_drawer());
        assert!(library.presets().active().is_none());
        Ok(())
    }

    #[test]
    fn preset_prompt_indexes_filtered_list() -> anyhow::Result<()> {
        let mut library = library();
        assert_eq!(library.preset_prompt(0), None);
        library.presets_mut().select_category("Scoring & State")?;
        library.presets_mut().set_filter("digital");
        assert_eq!(
            library.preset_prompt(0),
            Some("A modern digital scoreboard showing the score for 'Us' and 'Them' as numbers, from 0 to 10.")
        );
        assert_eq!(library.preset_prompt(1), None);
        Ok(())
    }

    #[test]
    fn drawer_starts_at_default_height() {
        let library = library();
        assert!(!library.is_drawer_open());
        assert_eq!(library.resize().height(), 240);
    }
}
