use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use studio_contracts::media::{extension_for_mime, ImagePayload};

use crate::dryrun::{png_data_uri, render_placeholder_png};

pub const CAMERA_ACCESS_ERROR: &str =
    "Could not access the camera. Please ensure permissions are granted and no other application is using it.";

#[derive(Debug, PartialEq, Eq)]
pub struct StreamHandle {
    id: u64,
}

impl StreamHandle {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

pub trait CameraDevice {
    fn open(&mut self) -> Result<StreamHandle>;
    /// One still frame as an image data URI.
    fn capture_frame(&mut self, stream: &StreamHandle) -> Result<String>;
    fn close(&mut self, stream: StreamHandle);
}

/// An open stream that is closed when dropped.
struct OpenStream<'a> {
    device: &'a mut dyn CameraDevice,
    handle: Option<StreamHandle>,
}

impl OpenStream<'_> {
    fn capture(&mut self) -> Result<String> {
        match self.handle.as_ref() {
            Some(handle) => self.device.capture_frame(handle),
            None => anyhow::bail!("camera stream already closed"),
        }
    }
}

impl Drop for OpenStream<'_> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.device.close(handle);
        }
    }
}

/// Open the camera, grab a single frame and release the stream.
pub fn capture_still(device: &mut dyn CameraDevice) -> Result<ImagePayload> {
    let handle = device.open().context(CAMERA_ACCESS_ERROR)?;
    let mut stream = OpenStream {
        device,
        handle: Some(handle),
    };
    let data_uri = stream.capture()?;
    let payload = ImagePayload::from_data_uri(&data_uri, "capture")?;
    let name = format!(
        "capture-{}.{}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        extension_for_mime(&payload.mime_type)
    );
    Ok(ImagePayload { name, ..payload })
}

/// Camera that renders a solid-colour frame per capture.
#[derive(Debug, Clone)]
pub struct DryrunCamera {
    width: u32,
    height: u32,
    next_stream: u64,
    frames: u64,
    open_streams: usize,
}

impl Default for DryrunCamera {
    fn default() -> Self {
        Self::new(320, 240)
    }
}

impl DryrunCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            next_stream: 1,
            frames: 0,
            open_streams: 0,
        }
    }

    pub fn open_streams(&self) -> usize {
        self.open_streams
    }
}

impl CameraDevice for DryrunCamera {
    fn open(&mut self) -> Result<StreamHandle> {
        let handle = StreamHandle::new(self.next_stream);
        self.next_stream += 1;
        self.open_streams += 1;
        Ok(handle)
    }

    fn capture_frame(&mut self, stream: &StreamHandle) -> Result<String> {
        self.frames += 1;
        let png = render_placeholder_png(
            self.width,
            self.height,
            &format!("camera-stream-{}", stream.id()),
            self.frames,
        )?;
        Ok(png_data_uri(&png))
    }

    fn close(&mut self, _stream: StreamHandle) {
        self.open_streams = self.open_streams.saturating_sub(1);
    }
}
