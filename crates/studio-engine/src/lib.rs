//! Studio runtime: the generation collaborator and its dry-run stand-in, camera capture, the four
//! panels and the tabbed `Studio` that owns them.

pub mod camera;
pub mod config;
pub mod dryrun;
pub mod panels;
pub mod service;
pub mod studio;

pub use camera::{capture_still, CameraDevice, DryrunCamera, StreamHandle, CAMERA_ACCESS_ERROR};
pub use config::StudioConfig;
pub use dryrun::{DryrunGenerationService, Latency, STYLE_TRANSFER_MARKER};
pub use panels::{Panel, PanelError, Tab};
pub use service::GenerationService;
pub use studio::{CompletedRequest, Outcome, PendingRequest, Studio};
