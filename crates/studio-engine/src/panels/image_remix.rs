use std::path::{Path, PathBuf};

use anyhow::Result;
use studio_contracts::media::{AspectRatio, ImageCount, ImagePayload};
use studio_contracts::operation::Operation;
use tracing::debug;

use super::image_generator::download_images;
use super::{Panel, Tab};
use crate::service::GenerationService;

pub const DEFAULT_REMIX_PROMPT: &str =
    "Repaint the content image using the colours, brushwork and mood of the style image.";

const MISSING_INPUT_ERROR: &str =
    "Please upload a content image and a style image, and provide a prompt.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemixRequest {
    pub prompt: String,
    pub content: ImagePayload,
    pub style: ImagePayload,
    pub aspect_ratio: AspectRatio,
    pub count: ImageCount,
}

pub struct ImageRemixPanel {
    prompt: String,
    content: Option<ImagePayload>,
    style: Option<ImagePayload>,
    aspect_ratio: AspectRatio,
    count: ImageCount,
    operation: Operation<Vec<String>>,
}

impl Default for ImageRemixPanel {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_REMIX_PROMPT.to_string(),
            content: None,
            style: None,
            aspect_ratio: AspectRatio::Square,
            count: ImageCount::default(),
            operation: Operation::Idle,
        }
    }
}

impl ImageRemixPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn content(&self) -> Option<&ImagePayload> {
        self.content.as_ref()
    }

    pub fn set_content(&mut self, image: ImagePayload) {
        self.content = Some(image);
    }

    pub fn style(&self) -> Option<&ImagePayload> {
        self.style.as_ref()
    }

    pub fn set_style(&mut self, image: ImagePayload) {
        self.style = Some(image);
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) {
        self.aspect_ratio = aspect_ratio;
    }

    pub fn count(&self) -> ImageCount {
        self.count
    }

    pub fn set_count(&mut self, count: ImageCount) {
        self.count = count;
    }

    pub fn images(&self) -> &[String] {
        self.operation.result().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn download_images(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        download_images(self.images(), dir)
    }
}

impl Panel for ImageRemixPanel {
    type Request = RemixRequest;
    type Output = Vec<String>;

    const TAB: Tab = Tab::ImageRemix;

    fn prepare(&self) -> Result<RemixRequest, String> {
        let prompt = self.prompt.trim();
        match (&self.content, &self.style) {
            (Some(content), Some(style)) if !prompt.is_empty() => Ok(RemixRequest {
                prompt: prompt.to_string(),
                content: content.clone(),
                style: style.clone(),
                aspect_ratio: self.aspect_ratio,
                count: self.count,
            }),
            _ => Err(MISSING_INPUT_ERROR.to_string()),
        }
    }

    fn operation(&self) -> &Operation<Vec<String>> {
        &self.operation
    }

    fn operation_mut(&mut self) -> &mut Operation<Vec<String>> {
        &mut self.operation
    }

    /// Two collaborator steps: describe the style transfer, then render it over the content image.
    fn dispatch(service: &dyn GenerationService, request: &RemixRequest) -> Result<Vec<String>> {
        let proposed =
            service.propose_style_transfer_prompt(&request.prompt, &request.content, &request.style)?;
        debug!(prompt = %proposed, "style transfer prompt proposed");
        service.generate_images_from_reference(
            &proposed,
            &request.content,
            request.aspect_ratio,
            request.count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dryrun::DryrunGenerationService;
    use crate::panels::testing::{image, RecordingService};
    use crate::panels::{submit, PanelError};

    fn ready_panel() -> ImageRemixPanel {
        let mut panel = ImageRemixPanel::new();
        panel.set_prompt("a cat");
        panel.set_content(image("cat.png"));
        panel.set_style(image("starry.png"));
        panel
    }

    #[test]
    fn requires_both_images_and_prompt() {
        let service = RecordingService::default();
        let mut panel = ImageRemixPanel::new();
        panel.set_content(image("cat.png"));
        let err = submit(&mut panel, &service).err();
        assert_eq!(err, Some(PanelError::Validation(MISSING_INPUT_ERROR.to_string())));

        let mut panel = ready_panel();
        panel.set_prompt(" ");
        assert!(submit(&mut panel, &service).is_err());
        assert!(service.calls().is_empty());
    }

    #[test]
    fn proposes_prompt_then_generates_from_content() -> Result<(), PanelError> {
        let service = RecordingService::answering(&["remix"]);
        let mut panel = ready_panel();
        submit(&mut panel, &service)?;
        assert_eq!(
            service.calls(),
            vec![
                "style:a cat:cat.png:starry.png".to_string(),
                "reference:a cat in the style of starry.png:cat.png:1:1:1".to_string(),
            ]
        );
        assert_eq!(panel.images(), ["remix".to_string()]);
        Ok(())
    }

    #[test]
    fn failed_proposal_skips_generation() {
        let service = RecordingService::failing("quota exceeded");
        let mut panel = ready_panel();
        assert!(submit(&mut panel, &service).is_err());
        assert_eq!(service.calls().len(), 1);
        assert_eq!(panel.operation().error(), Some("quota exceeded"));
    }

    #[test]
    fn dry_run_remix_yields_single_image() -> Result<(), PanelError> {
        let mut panel = ready_panel();
        panel.set_count(ImageCount::new(3).unwrap_or_default());
        submit(&mut panel, &DryrunGenerationService::instant())?;
        assert_eq!(panel.images().len(), 1);
        Ok(())
    }
}
