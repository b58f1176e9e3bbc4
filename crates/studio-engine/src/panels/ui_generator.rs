use std::sync::Arc;

use studio_contracts::markup::copyable_code;
use studio_contracts::operation::Operation;
use studio_contracts::prompts::{KeyValueStore, PresetCatalog, PromptStore, UI_PROMPTS_KEY};

use super::{Panel, PromptLibrary, Tab, EMPTY_PROMPT_ERROR};
use crate::service::GenerationService;

pub const DEFAULT_UI_PROMPT: &str = "Create a responsive card component for a blog post with a placeholder image, title, excerpt, and author details. Use Tailwind CSS.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupRequest {
    pub prompt: String,
    pub premium: bool,
}

pub struct UiGeneratorPanel {
    prompt: String,
    use_premium: bool,
    library: PromptLibrary,
    operation: Operation<String>,
}

impl UiGeneratorPanel {
    pub fn new(store: Arc<dyn KeyValueStore>, max_saved_prompts: usize) -> Self {
        let saved = PromptStore::open(store, UI_PROMPTS_KEY, max_saved_prompts);
        Self {
            prompt: DEFAULT_UI_PROMPT.to_string(),
            use_premium: false,
            library: PromptLibrary::new(saved, PresetCatalog::ui()),
            operation: Operation::Idle,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn use_premium(&self) -> bool {
        self.use_premium
    }

    pub fn toggle_premium(&mut self) -> bool {
        self.use_premium = !self.use_premium;
        self.use_premium
    }

    pub fn library(&self) -> &PromptLibrary {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut PromptLibrary {
        &mut self.library
    }

    /// Save the current prompt text. Returns whether the saved list changed.
    pub fn save_current_prompt(&mut self) -> bool {
        let prompt = self.prompt.clone();
        self.library.saved_mut().add(&prompt)
    }

    pub fn load_saved(&mut self, index: usize) -> Option<&str> {
        let prompt = self.library.saved().get(index)?.to_string();
        self.prompt = prompt;
        Some(&self.prompt)
    }

    pub fn load_preset(&mut self, index: usize) -> Option<&str> {
        let prompt = self.library.preset_prompt(index)?;
        self.prompt = prompt.to_string();
        Some(&self.prompt)
    }

    /// Body of the first fenced block in the generated markup, or the whole answer.
    pub fn copyable_code(&self) -> Option<&str> {
        self.operation.result().map(|markup| copyable_code(markup))
    }
}

impl Panel for UiGeneratorPanel {
    type Request = MarkupRequest;
    type Output = String;

    const TAB: Tab = Tab::UiGenerator;

    fn prepare(&self) -> Result<MarkupRequest, String> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(EMPTY_PROMPT_ERROR.to_string());
        }
        Ok(MarkupRequest {
            prompt: prompt.to_string(),
            premium: self.use_premium,
        })
    }

    fn operation(&self) -> &Operation<String> {
        &self.operation
    }

    fn operation_mut(&mut self) -> &mut Operation<String> {
        &mut self.operation
    }

    fn dispatch(service: &dyn GenerationService, request: &MarkupRequest) -> anyhow::Result<String> {
        service.generate_markup(&request.prompt, request.premium)
    }
}
