use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use studio_contracts::media::{
    extension_for_mime, AspectRatio, ImageCount, ImagePayload, REFERENCE_PARSE_ERROR,
};
use studio_contracts::operation::Operation;
use studio_contracts::prompts::{IMAGE_PROMPTS_KEY, KeyValueStore, PresetCatalog, PromptStore};
use tracing::debug;

use super::{Panel, PromptLibrary, Tab, EMPTY_PROMPT_ERROR};
use crate::service::GenerationService;

pub const DEFAULT_IMAGE_PROMPT: &str = "A synthwave-style illustration of a developer coding a euchre card game at a futuristic desk, with a futuristic city skyline in the background.";

const DOWNLOAD_PREFIX: &str = "studio-generated";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    pub aspect_ratio: AspectRatio,
    pub count: ImageCount,
    pub reference: Option<ImagePayload>,
}

pub struct ImageGeneratorPanel {
    prompt: String,
    aspect_ratio: AspectRatio,
    count: ImageCount,
    reference: Option<ImagePayload>,
    reference_error: Option<String>,
    library: PromptLibrary,
    operation: Operation<Vec<String>>,
}

impl ImageGeneratorPanel {
    pub fn new(store: Arc<dyn KeyValueStore>, max_saved_prompts: usize) -> Self {
        let saved = PromptStore::open(store, IMAGE_PROMPTS_KEY, max_saved_prompts);
        Self {
            prompt: DEFAULT_IMAGE_PROMPT.to_string(),
            aspect_ratio: AspectRatio::Landscape,
            count: ImageCount::default(),
            reference: None,
            reference_error: None,
            library: PromptLibrary::new(saved, PresetCatalog::image()),
            operation: Operation::Idle,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
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

    pub fn reference(&self) -> Option<&ImagePayload> {
        self.reference.as_ref()
    }

    pub fn set_reference(&mut self, reference: ImagePayload) {
        self.reference = Some(reference);
        self.reference_error = None;
    }

    /// Last failed `use_as_reference`, kept apart from the operation so generated images stay.
    pub fn reference_error(&self) -> Option<&str> {
        self.reference_error.as_deref()
    }

    /// Adopt a generated (or any) image data URI as the reference for the next request.
    ///
    /// Unparsable input leaves the current reference and the operation alone and records the
    /// parse error in `reference_error`.
    pub fn use_as_reference(&mut self, data_uri: &str) -> Result<(), String> {
        if data_uri.trim().is_empty() {
            return Ok(());
        }
        match ImagePayload::from_data_uri(data_uri, "reference") {
            Ok(payload) => {
                let extension = extension_for_mime(&payload.mime_type);
                self.set_reference(ImagePayload {
                    name: format!("reference.{extension}"),
                    ..payload
                });
                Ok(())
            }
            Err(err) => {
                debug!("rejected reference image: {err}");
                self.reference_error = Some(REFERENCE_PARSE_ERROR.to_string());
                Err(REFERENCE_PARSE_ERROR.to_string())
            }
        }
    }

    pub fn clear_reference(&mut self) -> Option<ImagePayload> {
        self.reference_error = None;
        self.reference.take()
    }

    pub fn library(&self) -> &PromptLibrary {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut PromptLibrary {
        &mut self.library
    }

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

    pub fn images(&self) -> &[String] {
        self.operation.result().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Decode the generated images into `dir`. Returns the written paths in result order.
    pub fn download_images(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        download_images(self.images(), dir)
    }
}

pub(crate) fn download_images(images: &[String], dir: &Path) -> Result<Vec<PathBuf>> {
    if images.is_empty() {
        anyhow::bail!("no generated images to download");
    }
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let stamp = Utc::now().timestamp_millis();
    images
        .iter()
        .enumerate()
        .map(|(idx, uri)| {
            let payload = ImagePayload::from_data_uri(uri, format!("image-{}", idx + 1))?;
            let bytes = payload.decode()?;
            let path = dir.join(format!(
                "{DOWNLOAD_PREFIX}-{stamp}-{:02}.{}",
                idx + 1,
                extension_for_mime(&payload.mime_type)
            ));
            fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
            Ok(path)
        })
        .collect()
}

impl Panel for ImageGeneratorPanel {
    type Request = ImageRequest;
    type Output = Vec<String>;

    const TAB: Tab = Tab::ImageGenerator;

    fn prepare(&self) -> Result<ImageRequest, String> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(EMPTY_PROMPT_ERROR.to_string());
        }
        Ok(ImageRequest {
            prompt: prompt.to_string(),
            aspect_ratio: self.aspect_ratio,
            count: self.count,
            reference: self.reference.clone(),
        })
    }

    fn operation(&self) -> &Operation<Vec<String>> {
        &self.operation
    }

    fn operation_mut(&mut self) -> &mut Operation<Vec<String>> {
        &mut self.operation
    }

    fn dispatch(service: &dyn GenerationService, request: &ImageRequest) -> Result<Vec<String>> {
        match &request.reference {
            Some(reference) => service.generate_images_from_reference(
                &request.prompt,
                reference,
                request.aspect_ratio,
                request.count,
            ),
            None => service.generate_images(&request.prompt, request.aspect_ratio, request.count),
        }
    }
}
