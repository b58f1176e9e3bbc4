mod image_analyzer;
mod image_generator;
mod image_remix;
mod library;
mod ui_generator;

use std::fmt;
use std::str::FromStr;

use studio_contracts::operation::{failure_message, Operation, OperationBusy};
use thiserror::Error;

use crate::service::GenerationService;

pub use image_analyzer::{AnalysisRequest, ImageAnalyzerPanel, DEFAULT_ANALYSIS_PROMPT};
pub use image_generator::{ImageGeneratorPanel, ImageRequest, DEFAULT_IMAGE_PROMPT};
pub use image_remix::{ImageRemixPanel, RemixRequest, DEFAULT_REMIX_PROMPT};
pub use library::PromptLibrary;
pub use ui_generator::{MarkupRequest, UiGeneratorPanel, DEFAULT_UI_PROMPT};

pub const EMPTY_PROMPT_ERROR: &str = "Prompt cannot be empty.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// Required input missing; nothing was sent to the collaborator.
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Busy(#[from] OperationBusy),
    /// The collaborator call failed.
    #[error("{0}")]
    Collaborator(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    UiGenerator,
    ImageGenerator,
    ImageAnalyzer,
    ImageRemix,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::UiGenerator,
        Tab::ImageGenerator,
        Tab::ImageAnalyzer,
        Tab::ImageRemix,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tab::UiGenerator => "ui-generator",
            Tab::ImageGenerator => "image-generator",
            Tab::ImageAnalyzer => "image-analyzer",
            Tab::ImageRemix => "image-remix",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tab::UiGenerator => "Generate UI",
            Tab::ImageGenerator => "Generate Image",
            Tab::ImageAnalyzer => "Analyze Image",
            Tab::ImageRemix => "Remix Image",
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Tab::UiGenerator
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(value) || tab.name().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                format!(
                    "unknown tab '{value}' (expected one of {})",
                    Tab::ALL.map(Tab::id).join(", ")
                )
            })
    }
}

/// A feature screen that turns its inputs into one collaborator request at a time.
pub trait Panel {
    type Request: Clone + Send + 'static;
    type Output: Clone + Send + 'static;

    const TAB: Tab;

    /// Check required inputs and snapshot them into a request. Errors are user-facing text.
    fn prepare(&self) -> Result<Self::Request, String>;

    fn operation(&self) -> &Operation<Self::Output>;

    fn operation_mut(&mut self) -> &mut Operation<Self::Output>;

    fn dispatch(
        service: &dyn GenerationService,
        request: &Self::Request,
    ) -> anyhow::Result<Self::Output>;
}

/// Guard against an outstanding request, validate, then move the panel to `Pending`.
pub fn begin<P: Panel>(panel: &mut P) -> Result<P::Request, PanelError> {
    if panel.operation().is_loading() {
        return Err(PanelError::Busy(OperationBusy));
    }
    let request = match panel.prepare() {
        Ok(request) => request,
        Err(message) => {
            panel.operation_mut().fail(message.clone());
            return Err(PanelError::Validation(message));
        }
    };
    panel.operation_mut().begin()?;
    Ok(request)
}

/// Record the collaborator outcome. The panel is settled afterwards either way.
pub fn finish<P: Panel>(panel: &mut P, outcome: anyhow::Result<P::Output>) -> Result<(), PanelError> {
    let failure = outcome.as_ref().err().map(failure_message);
    panel.operation_mut().settle(outcome);
    match failure {
        Some(message) => Err(PanelError::Collaborator(message)),
        None => Ok(()),
    }
}

pub fn submit<P: Panel>(panel: &mut P, service: &dyn GenerationService) -> Result<(), PanelError> {
    let request = begin(panel)?;
    let outcome = P::dispatch(service, &request);
    finish(panel, outcome)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use anyhow::{anyhow, Result};
    use studio_contracts::media::{AspectRatio, ImageCount, ImagePayload};

    use crate::service::GenerationService;

    /// Collaborator double that records calls and answers from fixed values.
    #[derive(Default)]
    pub struct RecordingService {
        pub calls: Mutex<Vec<String>>,
        pub fail_with: Option<String>,
        pub images: Vec<String>,
    }

    impl RecordingService {
        pub fn answering(images: &[&str]) -> Self {
            Self {
                images: images.iter().map(|value| (*value).to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
        }

        fn record(&self, call: String) -> Result<()> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(call);
            }
            match &self.fail_with {
                Some(message) => Err(anyhow!("{message}")),
                None => Ok(()),
            }
        }
    }

    impl GenerationService for RecordingService {
        fn name(&self) -> &str {
            "recording"
        }

        fn generate_markup(&self, prompt: &str, premium: bool) -> Result<String> {
            self.record(format!("markup:{prompt}:{premium}"))?;
            Ok(format!("```html\n<p>{prompt}</p>\n```"))
        }

        fn generate_images(
            &self,
            prompt: &str,
            aspect_ratio: AspectRatio,
            count: ImageCount,
        ) -> Result<Vec<String>> {
            self.record(format!("images:{prompt}:{aspect_ratio}:{}", count.get()))?;
            Ok(self.images.clone())
        }

        fn generate_images_from_reference(
            &self,
            prompt: &str,
            reference: &ImagePayload,
            aspect_ratio: AspectRatio,
            count: ImageCount,
        ) -> Result<Vec<String>> {
            self.record(format!(
                "reference:{prompt}:{}:{aspect_ratio}:{}",
                reference.name,
                count.get()
            ))?;
            Ok(self.images.clone())
        }

        fn analyze_image(&self, prompt: &str, image: &ImagePayload) -> Result<String> {
            self.record(format!("analyze:{prompt}:{}", image.mime_type))?;
            Ok(format!("analysis of {}\nline two", image.name))
        }

        fn propose_style_transfer_prompt(
            &self,
            prompt: &str,
            content: &ImagePayload,
            style: &ImagePayload,
        ) -> Result<String> {
            self.record(format!("style:{prompt}:{}:{}", content.name, style.name))?;
            Ok(format!("{prompt} in the style of {}", style.name))
        }
    }

    pub fn image(name: &str) -> ImagePayload {
        ImagePayload::from_bytes(name.as_bytes(), "image/png", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_ids_and_names_parse() {
        assert_eq!("image-remix".parse::<Tab>(), Ok(Tab::ImageRemix));
        assert_eq!("Analyze Image".parse::<Tab>(), Ok(Tab::ImageAnalyzer));
        assert_eq!(Tab::default(), Tab::UiGenerator);
        let err = "video".parse::<Tab>().err().unwrap_or_default();
        assert!(err.contains("ui-generator, image-generator, image-analyzer, image-remix"));
    }

    #[test]
    fn busy_error_message() {
        assert_eq!(
            PanelError::Busy(OperationBusy).to_string(),
            "A request is already in progress."
        );
    }
}
