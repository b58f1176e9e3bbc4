use anyhow::Result;
use studio_contracts::markup::newlines_to_breaks;
use studio_contracts::media::ImagePayload;
use studio_contracts::operation::Operation;

use super::{Panel, Tab};
use crate::camera::{capture_still, CameraDevice};
use crate::service::GenerationService;

pub const DEFAULT_ANALYSIS_PROMPT: &str = "Describe this user interface. What are its strengths and weaknesses? Suggest improvements for accessibility.";

const MISSING_INPUT_ERROR: &str = "Please upload an image and provide a prompt.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub prompt: String,
    pub image: ImagePayload,
}

#[derive(Default)]
pub struct ImageAnalyzerPanel {
    prompt: String,
    image: Option<ImagePayload>,
    operation: Operation<String>,
}

impl ImageAnalyzerPanel {
    pub fn new() -> Self {
        Self {
            prompt: DEFAULT_ANALYSIS_PROMPT.to_string(),
            ..Self::default()
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    /// Replace the image to analyze. A stale error from a previous attempt is dismissed.
    pub fn upload(&mut self, image: ImagePayload) {
        self.image = Some(image);
        if self.operation.error().is_some() {
            self.operation.reset();
        }
    }

    /// Take a still from `camera` and use it as the uploaded image.
    pub fn capture_from_camera(&mut self, camera: &mut dyn CameraDevice) -> Result<()> {
        let image = capture_still(camera)?;
        self.upload(image);
        Ok(())
    }

    /// Analysis text with line breaks rendered as `<br>`.
    pub fn formatted_result(&self) -> Option<String> {
        self.operation.result().map(|text| newlines_to_breaks(text))
    }
}

impl Panel for ImageAnalyzerPanel {
    type Request = AnalysisRequest;
    type Output = String;

    const TAB: Tab = Tab::ImageAnalyzer;

    fn prepare(&self) -> Result<AnalysisRequest, String> {
        let prompt = self.prompt.trim();
        match &self.image {
            Some(image) if !prompt.is_empty() => Ok(AnalysisRequest {
                prompt: prompt.to_string(),
                image: image.clone(),
            }),
            _ => Err(MISSING_INPUT_ERROR.to_string()),
        }
    }

    fn operation(&self) -> &Operation<String> {
        &self.operation
    }

    fn operation_mut(&mut self) -> &mut Operation<String> {
        &mut self.operation
    }

    fn dispatch(service: &dyn GenerationService, request: &AnalysisRequest) -> Result<String> {
        service.analyze_image(&request.prompt, &request.image)
    }
}
