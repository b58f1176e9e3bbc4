use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use studio_contracts::events::{EventFields, EventKind, EventLog};
use studio_contracts::prompts::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::StudioConfig;
use crate::panels::{
    self, AnalysisRequest, ImageAnalyzerPanel, ImageGeneratorPanel, ImageRemixPanel, ImageRequest,
    MarkupRequest, Panel, PanelError, PromptLibrary, RemixRequest, Tab, UiGeneratorPanel,
};
use crate::service::GenerationService;

/// A validated request taken out of its panel, ready to run on any thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    Markup(MarkupRequest),
    Images(ImageRequest),
    Analysis(AnalysisRequest),
    Remix(RemixRequest),
}

impl PendingRequest {
    pub fn tab(&self) -> Tab {
        match self {
            Self::Markup(_) => UiGeneratorPanel::TAB,
            Self::Images(_) => ImageGeneratorPanel::TAB,
            Self::Analysis(_) => ImageAnalyzerPanel::TAB,
            Self::Remix(_) => ImageRemixPanel::TAB,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Self::Markup(request) => &request.prompt,
            Self::Images(request) => &request.prompt,
            Self::Analysis(request) => &request.prompt,
            Self::Remix(request) => &request.prompt,
        }
    }

    /// A completion carrying `err` without calling the collaborator, for requests that could
    /// not be dispatched.
    pub fn abandon(&self, err: anyhow::Error) -> CompletedRequest {
        let outcome = match self {
            Self::Markup(_) => Outcome::Markup(Err(err)),
            Self::Images(_) => Outcome::Images(Err(err)),
            Self::Analysis(_) => Outcome::Analysis(Err(err)),
            Self::Remix(_) => Outcome::Remix(Err(err)),
        };
        CompletedRequest {
            tab: self.tab(),
            prompt: self.prompt().to_string(),
            outcome,
            elapsed: Duration::ZERO,
        }
    }

    /// Call the collaborator. Blocks for as long as the service does.
    pub fn run(self, service: &dyn GenerationService) -> CompletedRequest {
        let started = Instant::now();
        let outcome = match &self {
            Self::Markup(request) => Outcome::Markup(UiGeneratorPanel::dispatch(service, request)),
            Self::Images(request) => {
                Outcome::Images(ImageGeneratorPanel::dispatch(service, request))
            }
            Self::Analysis(request) => {
                Outcome::Analysis(ImageAnalyzerPanel::dispatch(service, request))
            }
            Self::Remix(request) => Outcome::Remix(ImageRemixPanel::dispatch(service, request)),
        };
        CompletedRequest {
            tab: self.tab(),
            prompt: self.prompt().to_string(),
            outcome,
            elapsed: started.elapsed(),
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Markup(Result<String>),
    Images(Result<Vec<String>>),
    Analysis(Result<String>),
    Remix(Result<Vec<String>>),
}

impl Outcome {
    fn artifact_count(&self) -> Option<usize> {
        match self {
            Self::Markup(Ok(_)) | Self::Analysis(Ok(_)) => Some(1),
            Self::Images(Ok(images)) | Self::Remix(Ok(images)) => Some(images.len()),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct CompletedRequest {
    pub tab: Tab,
    pub prompt: String,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

/// The tabbed studio: four independent panels sharing one collaborator and one event log.
pub struct Studio {
    session_id: String,
    events: EventLog,
    service: Arc<dyn GenerationService>,
    active_tab: Tab,
    ui: UiGeneratorPanel,
    image: ImageGeneratorPanel,
    analyzer: ImageAnalyzerPanel,
    remix: ImageRemixPanel,
}

impl Studio {
    pub fn new(config: &StudioConfig, service: Arc<dyn GenerationService>) -> Self {
        let store: Arc<dyn KeyValueStore> = if config.ephemeral {
            Arc::new(MemoryKeyValueStore::new())
        } else {
            Arc::new(FileKeyValueStore::new(config.origin_store_path()))
        };
        Self::with_store(store, config.events_path(), config.max_saved_prompts, service)
    }

    pub fn with_store(
        store: Arc<dyn KeyValueStore>,
        events_path: impl Into<PathBuf>,
        max_saved_prompts: usize,
        service: Arc<dyn GenerationService>,
    ) -> Self {
        let session_id = format!("session-{}", Uuid::new_v4());
        let events = EventLog::new(events_path, session_id.clone());
        let studio = Self {
            session_id,
            events,
            ui: UiGeneratorPanel::new(store.clone(), max_saved_prompts),
            image: ImageGeneratorPanel::new(store, max_saved_prompts),
            analyzer: ImageAnalyzerPanel::new(),
            remix: ImageRemixPanel::new(),
            active_tab: Tab::default(),
            service,
        };
        studio.emit(
            EventKind::SessionStarted,
            None,
            json!({
                "service": studio.service.name(),
                "tabs": Tab::ALL.map(Tab::id),
            }),
        );
        studio
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn service(&self) -> Arc<dyn GenerationService> {
        Arc::clone(&self.service)
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn ui(&self) -> &UiGeneratorPanel {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UiGeneratorPanel {
        &mut self.ui
    }

    pub fn image(&self) -> &ImageGeneratorPanel {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut ImageGeneratorPanel {
        &mut self.image
    }

    pub fn analyzer(&self) -> &ImageAnalyzerPanel {
        &self.analyzer
    }

    pub fn analyzer_mut(&mut self) -> &mut ImageAnalyzerPanel {
        &mut self.analyzer
    }

    pub fn remix(&self) -> &ImageRemixPanel {
        &self.remix
    }

    pub fn remix_mut(&mut self) -> &mut ImageRemixPanel {
        &mut self.remix
    }

    pub fn prompt(&self, tab: Tab) -> &str {
        match tab {
            Tab::UiGenerator => self.ui.prompt(),
            Tab::ImageGenerator => self.image.prompt(),
            Tab::ImageAnalyzer => self.analyzer.prompt(),
            Tab::ImageRemix => self.remix.prompt(),
        }
    }

    pub fn set_prompt(&mut self, tab: Tab, prompt: impl Into<String>) {
        match tab {
            Tab::UiGenerator => self.ui.set_prompt(prompt),
            Tab::ImageGenerator => self.image.set_prompt(prompt),
            Tab::ImageAnalyzer => self.analyzer.set_prompt(prompt),
            Tab::ImageRemix => self.remix.set_prompt(prompt),
        }
    }

    /// `(state, error)` of the panel's current operation.
    pub fn status(&self, tab: Tab) -> (&'static str, Option<&str>) {
        match tab {
            Tab::UiGenerator => (self.ui.operation().state_name(), self.ui.operation().error()),
            Tab::ImageGenerator => (
                self.image.operation().state_name(),
                self.image
                    .operation()
                    .error()
                    .or_else(|| self.image.reference_error()),
            ),
            Tab::ImageAnalyzer => (
                self.analyzer.operation().state_name(),
                self.analyzer.operation().error(),
            ),
            Tab::ImageRemix => (
                self.remix.operation().state_name(),
                self.remix.operation().error(),
            ),
        }
    }

    pub fn is_loading(&self, tab: Tab) -> bool {
        self.status(tab).0 == "pending"
    }

    pub fn library(&self, tab: Tab) -> Option<&PromptLibrary> {
        match tab {
            Tab::UiGenerator => Some(self.ui.library()),
            Tab::ImageGenerator => Some(self.image.library()),
            Tab::ImageAnalyzer | Tab::ImageRemix => None,
        }
    }

    pub fn library_mut(&mut self, tab: Tab) -> Option<&mut PromptLibrary> {
        match tab {
            Tab::UiGenerator => Some(self.ui.library_mut()),
            Tab::ImageGenerator => Some(self.image.library_mut()),
            Tab::ImageAnalyzer | Tab::ImageRemix => None,
        }
    }

    /// Save the tab's current prompt. Returns whether the saved list changed.
    pub fn save_prompt(&mut self, tab: Tab) -> Result<bool> {
        let saved = match tab {
            Tab::UiGenerator => self.ui.save_current_prompt(),
            Tab::ImageGenerator => self.image.save_current_prompt(),
            Tab::ImageAnalyzer | Tab::ImageRemix => return Err(no_library(tab)),
        };
        if saved {
            self.emit(
                EventKind::PromptSaved,
                Some(tab),
                json!({
                    "prompt": self.prompt(tab).trim(),
                    "saved_count": self.library(tab).map(|library| library.saved().len()),
                }),
            );
        }
        Ok(saved)
    }

    pub fn delete_prompt(&mut self, tab: Tab, index: usize) -> Result<Option<String>> {
        let library = self.library_mut(tab).ok_or_else(|| no_library(tab))?;
        let removed = library.saved_mut().remove(index);
        let remaining = library.saved().len();
        if let Some(prompt) = removed.as_deref() {
            self.emit(
                EventKind::PromptDeleted,
                Some(tab),
                json!({
                    "prompt": prompt,
                    "index": index,
                    "saved_count": remaining,
                }),
            );
        }
        Ok(removed)
    }

    pub fn load_saved(&mut self, tab: Tab, index: usize) -> Result<Option<String>> {
        let prompt = match tab {
            Tab::UiGenerator => self.ui.load_saved(index),
            Tab::ImageGenerator => self.image.load_saved(index),
            Tab::ImageAnalyzer | Tab::ImageRemix => return Err(no_library(tab)),
        };
        Ok(prompt.map(str::to_string))
    }

    pub fn load_preset(&mut self, tab: Tab, index: usize) -> Result<Option<String>> {
        let prompt = match tab {
            Tab::UiGenerator => self.ui.load_preset(index),
            Tab::ImageGenerator => self.image.load_preset(index),
            Tab::ImageAnalyzer | Tab::ImageRemix => return Err(no_library(tab)),
        };
        Ok(prompt.map(str::to_string))
    }

    /// Validate the tab's inputs and move it to pending. Rejections are logged as events.
    pub fn begin(&mut self, tab: Tab) -> Result<PendingRequest, PanelError> {
        let begun = match tab {
            Tab::UiGenerator => panels::begin(&mut self.ui).map(PendingRequest::Markup),
            Tab::ImageGenerator => panels::begin(&mut self.image).map(PendingRequest::Images),
            Tab::ImageAnalyzer => panels::begin(&mut self.analyzer).map(PendingRequest::Analysis),
            Tab::ImageRemix => panels::begin(&mut self.remix).map(PendingRequest::Remix),
        };
        match &begun {
            Ok(request) => {
                debug!(panel = %tab, "generation started");
                self.emit(
                    EventKind::GenerationStarted,
                    Some(tab),
                    json!({
                        "prompt": request.prompt(),
                        "service": self.service.name(),
                    }),
                );
            }
            Err(err) => self.emit(
                EventKind::GenerationRejected,
                Some(tab),
                json!({
                    "reason": match err {
                        PanelError::Busy(_) => "busy",
                        _ => "validation",
                    },
                    "error": err.to_string(),
                }),
            ),
        }
        begun
    }

    /// Write a collaborator outcome back into its panel.
    pub fn finish(&mut self, completed: CompletedRequest) -> Result<(), PanelError> {
        let CompletedRequest {
            tab,
            prompt,
            outcome,
            elapsed,
        } = completed;
        let artifacts = outcome.artifact_count();
        let settled = match outcome {
            Outcome::Markup(result) => panels::finish(&mut self.ui, result),
            Outcome::Images(result) => panels::finish(&mut self.image, result),
            Outcome::Analysis(result) => panels::finish(&mut self.analyzer, result),
            Outcome::Remix(result) => panels::finish(&mut self.remix, result),
        };
        let duration_s = elapsed.as_secs_f64();
        match &settled {
            Ok(()) => self.emit(
                EventKind::GenerationSucceeded,
                Some(tab),
                json!({
                    "prompt": prompt,
                    "duration_s": duration_s,
                    "artifacts": artifacts,
                }),
            ),
            Err(err) => self.emit(
                EventKind::GenerationFailed,
                Some(tab),
                json!({
                    "prompt": prompt,
                    "duration_s": duration_s,
                    "error": err.to_string(),
                }),
            ),
        }
        settled
    }

    /// Begin, call the collaborator on this thread and finish.
    pub fn submit(&mut self, tab: Tab) -> Result<(), PanelError> {
        let pending = self.begin(tab)?;
        let completed = pending.run(self.service.as_ref());
        self.finish(completed)
    }

    fn emit(&self, kind: EventKind, panel: Option<Tab>, fields: Value) {
        if let Err(err) = self
            .events
            .record(kind, panel.map(Tab::id), map_object(fields))
        {
            warn!(event = %kind, "failed to write event: {err:#}");
        }
    }
}

fn no_library(tab: Tab) -> anyhow::Error {
    anyhow!("the {} tab has no prompt library", tab.name())
}

fn map_object(value: Value) -> EventFields {
    value.as_object().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use studio_contracts::events::read_event_kinds;
    use studio_contracts::prompts::UI_PROMPTS_KEY;

    use super::*;
    use crate::dryrun::DryrunGenerationService;
    use crate::panels::testing::{image, RecordingService};

    fn studio(dir: &tempfile::TempDir, service: Arc<dyn GenerationService>) -> Studio {
        Studio::with_store(
            Arc::new(MemoryKeyValueStore::new()),
            dir.path().join("events.jsonl"),
            50,
            service,
        )
    }

    #[test]
    fn submit_emits_lifecycle_events() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut studio = studio(&dir, Arc::new(DryrunGenerationService::instant()));
        studio.submit(Tab::UiGenerator)?;
        assert_eq!(studio.status(Tab::UiGenerator), ("succeeded", None));
        assert_eq!(
            read_event_kinds(&dir.path().join("events.jsonl"))?,
            vec![
                EventKind::SessionStarted,
                EventKind::GenerationStarted,
                EventKind::GenerationSucceeded,
            ]
        );
        Ok(())
    }

    #[test]
    fn rejected_and_failed_requests_are_logged() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut studio = studio(&dir, Arc::new(RecordingService::failing("network down")));
        assert!(studio.submit(Tab::ImageAnalyzer).is_err());
        assert_eq!(
            studio.submit(Tab::ImageGenerator).err(),
            Some(PanelError::Collaborator("network down".to_string()))
        );
        assert_eq!(studio.status(Tab::ImageGenerator), ("failed", Some("network down")));

        let raw = fs::read_to_string(dir.path().join("events.jsonl"))?;
        let rows: Vec<Value> = raw
            .lines()
            .map(serde_json::from_str::<Value>)
            .collect::<Result<Vec<_>, _>>()?;
        let types: Vec<&str> = rows.iter().filter_map(|row| row["type"].as_str()).collect();
        assert_eq!(
            types,
            vec![
                "session_started",
                "generation_rejected",
                "generation_started",
                "generation_failed",
            ]
        );
        assert_eq!(rows[1]["reason"], "validation");
        assert_eq!(rows[1]["panel"], "image-analyzer");
        assert!(rows[0].get("panel").is_none());
        assert_eq!(rows[3]["error"], "network down");
        assert!(rows
            .iter()
            .all(|row| row["session_id"].as_str() == Some(studio.session_id())));
        Ok(())
    }

    #[test]
    fn split_submission_reports_busy_until_finished() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let service = Arc::new(RecordingService::answering(&["img1", "img2"]));
        let mut studio = studio(&dir, service.clone());

        let pending = studio.begin(Tab::ImageGenerator)?;
        assert!(studio.is_loading(Tab::ImageGenerator));
        assert!(matches!(
            studio.begin(Tab::ImageGenerator),
            Err(PanelError::Busy(_))
        ));
        assert!(!studio.is_loading(Tab::UiGenerator));

        let completed = pending.run(service.as_ref());
        assert_eq!(completed.tab, Tab::ImageGenerator);
        studio.finish(completed)?;
        assert_eq!(studio.image().images(), ["img1".to_string(), "img2".to_string()]);
        assert_eq!(service.calls().len(), 1);
        Ok(())
    }

    #[test]
    fn abandoned_request_settles_panel_as_failed() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut studio = studio(&dir, Arc::new(RecordingService::default()));
        let pending = studio.begin(Tab::UiGenerator)?;
        let settled = studio.finish(pending.abandon(anyhow!("worker failed to start")));
        assert_eq!(
            settled.err(),
            Some(PanelError::Collaborator("worker failed to start".to_string()))
        );
        assert!(!studio.is_loading(Tab::UiGenerator));
        Ok(())
    }

    #[test]
    fn prompt_library_operations_emit_events() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = Arc::new(MemoryKeyValueStore::new());
        let mut studio = Studio::with_store(
            store.clone(),
            dir.path().join("events.jsonl"),
            50,
            Arc::new(DryrunGenerationService::instant()),
        );
        studio.set_prompt(Tab::UiGenerator, "pricing table");
        assert!(studio.save_prompt(Tab::UiGenerator)?);
        assert!(!studio.save_prompt(Tab::UiGenerator)?);
        assert!(studio.save_prompt(Tab::ImageAnalyzer).is_err());
        assert_eq!(
            store.get(UI_PROMPTS_KEY)?.as_deref(),
            Some(r#"["pricing table"]"#)
        );

        studio.set_prompt(Tab::UiGenerator, "");
        assert_eq!(
            studio.load_saved(Tab::UiGenerator, 0)?.as_deref(),
            Some("pricing table")
        );
        assert_eq!(studio.delete_prompt(Tab::UiGenerator, 4)?, None);
        assert_eq!(
            studio.delete_prompt(Tab::UiGenerator, 0)?.as_deref(),
            Some("pricing table")
        );
        assert_eq!(
            read_event_kinds(&dir.path().join("events.jsonl"))?,
            vec![
                EventKind::SessionStarted,
                EventKind::PromptSaved,
                EventKind::PromptDeleted,
            ]
        );
        Ok(())
    }

    #[test]
    fn panels_keep_independent_state() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut studio = studio(&dir, Arc::new(RecordingService::default()));
        studio.select_tab(Tab::ImageRemix);
        assert_eq!(studio.active_tab(), Tab::ImageRemix);
        studio.remix_mut().set_content(image("a.png"));
        studio.remix_mut().set_style(image("b.png"));
        studio.submit(Tab::ImageRemix)?;
        assert_eq!(studio.status(Tab::ImageRemix).0, "succeeded");
        assert_eq!(studio.status(Tab::UiGenerator).0, "idle");
        assert!(studio.library(Tab::ImageRemix).is_none());
        assert_eq!(
            studio.library(Tab::ImageGenerator).map(|library| library.presets().catalog().len()),
            Some(7)
        );
        Ok(())
    }
}
