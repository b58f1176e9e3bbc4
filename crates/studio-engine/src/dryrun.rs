use std::io::Cursor;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use sha2::{Digest, Sha256};
use studio_contracts::media::{AspectRatio, ImageCount, ImagePayload};
use studio_contracts::models::{
    ModelSelector, CAPABILITY_ANALYSIS, CAPABILITY_IMAGE, CAPABILITY_MARKUP,
    CAPABILITY_STYLE_TRANSFER,
};
use tracing::debug;

use crate::service::GenerationService;

/// Prompt the dry-run style-transfer step hands to image generation.
pub const STYLE_TRANSFER_MARKER: &str = "MOCK_STYLE_TRANSFER_PROMPT";

const PLACEHOLDER_LONG_EDGE: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Markup,
    Images,
    ReferenceImages,
    Analysis,
    StyleTransfer,
}

impl Call {
    fn base_delay(self) -> Duration {
        Duration::from_millis(match self {
            Call::Markup => 2000,
            Call::Images => 2500,
            Call::ReferenceImages => 3000,
            Call::Analysis => 1800,
            Call::StyleTransfer => 1200,
        })
    }
}

/// Artificial latency applied before every dry-run answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latency {
    /// Per-call delays resembling a hosted model.
    #[default]
    Simulated,
    /// The same delay for every call; `Duration::ZERO` answers immediately.
    Fixed(Duration),
}

/// Mock collaborator: canned markup and analysis text, placeholder PNGs rendered locally.
#[derive(Debug, Clone)]
pub struct DryrunGenerationService {
    latency: Latency,
    selector: ModelSelector,
}

impl Default for DryrunGenerationService {
    fn default() -> Self {
        Self::new(Latency::Simulated)
    }
}

impl DryrunGenerationService {
    pub fn new(latency: Latency) -> Self {
        Self {
            latency,
            selector: ModelSelector::new(None),
        }
    }

    pub fn instant() -> Self {
        Self::new(Latency::Fixed(Duration::ZERO))
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    fn wait(&self, call: Call) {
        let delay = match self.latency {
            Latency::Simulated => call.base_delay(),
            Latency::Fixed(delay) => delay,
        };
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    fn model_label(&self, premium: bool, capability: &str) -> Result<String> {
        let selection = self
            .selector
            .select(premium, capability)
            .map_err(|err| anyhow!(err))?;
        if let Some(reason) = selection.fallback_reason.as_deref() {
            debug!("model fallback: {reason}");
        }
        Ok(selection.model.label)
    }

    fn placeholder_images(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        count: ImageCount,
    ) -> Result<Vec<String>> {
        if prompt.contains(STYLE_TRANSFER_MARKER) {
            let (width, height) = aspect_ratio.dimensions(PLACEHOLDER_LONG_EDGE);
            return Ok(vec![png_data_uri(&render_placeholder_png(
                width,
                height,
                STYLE_TRANSFER_MARKER,
                0,
            )?)]);
        }

        let (width, height) = aspect_ratio.dimensions(PLACEHOLDER_LONG_EDGE);
        debug!(seed = %prompt_fingerprint(prompt), count = count.get(), "rendering placeholders");
        (0..count.get())
            .map(|idx| {
                render_placeholder_png(width, height, prompt, (idx % 2) as u64)
                    .map(|png| png_data_uri(&png))
            })
            .collect()
    }
}

impl GenerationService for DryrunGenerationService {
    fn name(&self) -> &str {
        "dryrun"
    }

    fn generate_markup(&self, prompt: &str, premium: bool) -> Result<String> {
        self.wait(Call::Markup);
        let model = self.model_label(premium, CAPABILITY_MARKUP)?;
        let seed = prompt_fingerprint(prompt);
        Ok(format!(
            r#"
```html
<!-- Generated with {model} model for prompt: "{prompt}" (seed {seed}) -->
<div class="max-w-sm rounded-lg overflow-hidden shadow-2xl bg-gray-700/50 p-6 backdrop-blur-sm">
  <div class="w-full h-48 bg-gray-600 rounded-md animate-pulse"></div>
  <div class="mt-4">
    <div class="font-bold text-xl mb-2 text-white">Placeholder Post Title</div>
    <p class="text-gray-300 text-base">
      A placeholder component rendered by the dry-run service. It shows a responsive card with
      placeholder elements styled with Tailwind CSS.
    </p>
  </div>
  <div class="mt-6 flex items-center">
    <div class="w-12 h-12 bg-gray-600 rounded-full animate-pulse"></div>
    <div class="ml-4">
      <p class="text-white font-semibold">Demo User</p>
      <p class="text-gray-400 text-sm">Frontend Developer</p>
    </div>
  </div>
</div>
```
"#
        ))
    }

    fn generate_images(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        count: ImageCount,
    ) -> Result<Vec<String>> {
        self.wait(Call::Images);
        self.model_label(false, CAPABILITY_IMAGE)?;
        self.placeholder_images(prompt, aspect_ratio, count)
    }

    fn generate_images_from_reference(
        &self,
        prompt: &str,
        reference: &ImagePayload,
        aspect_ratio: AspectRatio,
        count: ImageCount,
    ) -> Result<Vec<String>> {
        debug!(reference = %reference.name, "dry-run ignores reference pixels");
        self.wait(Call::ReferenceImages);
        self.model_label(false, CAPABILITY_IMAGE)?;
        self.placeholder_images(prompt, aspect_ratio, count)
    }

    fn analyze_image(&self, prompt: &str, image: &ImagePayload) -> Result<String> {
        self.wait(Call::Analysis);
        let model = self.model_label(false, CAPABILITY_ANALYSIS)?;
        Ok(format!(
            "**Dry-run Analysis Report** ({model}, {mime})

This is a simulated analysis based on your prompt: \"{prompt}\".

**Strengths:**
- **Clear Visual Hierarchy:** The layout guides the eye from the main header to the primary call-to-action.
- **Good Contrast:** Text and background contrast generally meets accessibility standards.
- **Consistent Branding:** Color and typography are applied consistently.

**Areas for Improvement:**
- **Accessibility:** Some smaller text could be larger. Verify that alt text is descriptive.
- **Mobile Experience:** Touch targets for some buttons could be larger on small screens.
- **Interactivity:** Subtle hover effects or micro-interactions could improve engagement.

*This analysis was generated by the dry-run service.*",
            mime = image.mime_type,
        ))
    }

    fn propose_style_transfer_prompt(
        &self,
        prompt: &str,
        content: &ImagePayload,
        style: &ImagePayload,
    ) -> Result<String> {
        self.wait(Call::StyleTransfer);
        self.model_label(false, CAPABILITY_STYLE_TRANSFER)?;
        debug!(
            prompt = %prompt,
            content = %content.name,
            style = %style.name,
            "proposing dry-run style transfer prompt"
        );
        Ok(STYLE_TRANSFER_MARKER.to_string())
    }
}

/// Solid-colour PNG whose colour is derived from `seed_text` and `index`.
pub(crate) fn render_placeholder_png(
    width: u32,
    height: u32,
    seed_text: &str,
    index: u64,
) -> Result<Vec<u8>> {
    let (r, g, b) = color_from_seed(seed_text, index);
    let mut image = RgbImage::new(width.max(1), height.max(1));
    for pixel in image.pixels_mut() {
        *pixel = Rgb([r, g, b]);
    }
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .context("failed to encode placeholder png")?;
    Ok(bytes)
}

pub(crate) fn png_data_uri(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(bytes))
}

/// Short hex digest identifying a prompt in dry-run output.
pub(crate) fn prompt_fingerprint(prompt: &str) -> String {
    hex::encode(&Sha256::digest(prompt.as_bytes())[..6])
}

fn color_from_seed(seed_text: &str, index: u64) -> (u8, u8, u8) {
    let mut hasher = Sha256::new();
    hasher.update(seed_text.as_bytes());
    hasher.update(index.to_be_bytes());
    let digest = hasher.finalize();
    (digest[0], digest[1], digest[2])
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use studio_contracts::markup::extract_code_block;

    use super::*;

    fn count(value: i64) -> ImageCount {
        ImageCount::new(value).unwrap_or_default()
    }

    fn decode_dims(uri: &str) -> Result<(u32, u32)> {
        let payload = ImagePayload::from_data_uri(uri, "out.png")?;
        let image = image::load_from_memory(&payload.decode()?)?;
        Ok((image.width(), image.height()))
    }

    #[test]
    fn markup_names_selected_model_and_prompt() -> Result<()> {
        let service = DryrunGenerationService::instant();
        let pro = service.generate_markup("pricing table", true)?;
        assert!(pro.contains("Pro (mocked)"));
        assert!(pro.contains("pricing table"));
        let flash = service.generate_markup("pricing table", false)?;
        assert!(flash.contains("Flash (mocked)"));
        assert!(extract_code_block(&flash).is_some_and(|code| code.starts_with("<!--")));
        Ok(())
    }

    #[test]
    fn markup_carries_prompt_fingerprint() -> Result<()> {
        let markup = DryrunGenerationService::instant().generate_markup("hero", false)?;
        let seed = prompt_fingerprint("hero");
        assert_eq!(seed.len(), 12);
        assert!(markup.contains(&format!("(seed {seed})")));
        Ok(())
    }

    #[test]
    fn images_match_count_and_aspect_ratio() -> Result<()> {
        let service = DryrunGenerationService::instant();
        let images = service.generate_images("neon city", AspectRatio::Portrait, count(3))?;
        assert_eq!(images.len(), 3);
        assert_eq!(images[0], images[2]);
        assert_ne!(images[0], images[1]);
        assert_eq!(decode_dims(&images[0])?, AspectRatio::Portrait.dimensions(256));
        Ok(())
    }

    #[test]
    fn style_transfer_marker_yields_single_remix_image() -> Result<()> {
        let service = DryrunGenerationService::instant();
        let content = ImagePayload::from_bytes(b"c", "image/png", "content.png");
        let style = ImagePayload::from_bytes(b"s", "image/png", "style.png");
        let proposed = service.propose_style_transfer_prompt("cat", &content, &style)?;
        assert_eq!(proposed, STYLE_TRANSFER_MARKER);
        let images = service.generate_images_from_reference(
            &proposed,
            &content,
            AspectRatio::Square,
            count(4),
        )?;
        assert_eq!(images.len(), 1);
        Ok(())
    }

    #[test]
    fn analysis_quotes_prompt() -> Result<()> {
        let service = DryrunGenerationService::instant();
        let image = ImagePayload::from_bytes(b"x", "image/jpeg", "shot.jpg");
        let report = service.analyze_image("Is the CTA visible?", &image)?;
        assert!(report.contains("\"Is the CTA visible?\""));
        assert!(report.contains("image/jpeg"));
        Ok(())
    }

    #[test]
    fn fixed_latency_is_applied() -> Result<()> {
        let service = DryrunGenerationService::new(Latency::Fixed(Duration::from_millis(30)));
        let started = Instant::now();
        service.generate_markup("x", false)?;
        assert!(started.elapsed() >= Duration::from_millis(30));
        Ok(())
    }

    #[test]
    fn reference_generation_waits_once() -> Result<()> {
        let delay = Duration::from_millis(200);
        let service = DryrunGenerationService::new(Latency::Fixed(delay));
        let reference = ImagePayload::from_bytes(b"r", "image/png", "ref.png");
        let started = Instant::now();
        let images =
            service.generate_images_from_reference("owl", &reference, AspectRatio::Square, count(2))?;
        let elapsed = started.elapsed();
        assert_eq!(images.len(), 2);
        assert!(elapsed >= delay);
        assert!(elapsed < delay * 2, "slept {elapsed:?}");
        Ok(())
    }
}
