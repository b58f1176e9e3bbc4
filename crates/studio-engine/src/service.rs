use anyhow::Result;
use studio_contracts::media::{AspectRatio, ImageCount, ImagePayload};

/// The generative collaborator behind every panel. Calls block until the artifact is ready or
/// the request fails; there is no cancellation and no timeout at this layer.
pub trait GenerationService: Send + Sync {
    fn name(&self) -> &str;

    /// Free-form text, usually containing a fenced code block.
    fn generate_markup(&self, prompt: &str, premium: bool) -> Result<String>;

    /// Image data URIs, one per requested image.
    fn generate_images(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        count: ImageCount,
    ) -> Result<Vec<String>>;

    fn generate_images_from_reference(
        &self,
        prompt: &str,
        reference: &ImagePayload,
        aspect_ratio: AspectRatio,
        count: ImageCount,
    ) -> Result<Vec<String>>;

    fn analyze_image(&self, prompt: &str, image: &ImagePayload) -> Result<String>;

    /// A generation prompt that renders `content` in the style of `style`.
    fn propose_style_transfer_prompt(
        &self,
        prompt: &str,
        content: &ImagePayload,
        style: &ImagePayload,
    ) -> Result<String>;
}
