use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub type EventFields = Map<String, Value>;

/// Keys every line carries; callers cannot supply them as fields.
const RESERVED_KEYS: [&str; 4] = ["type", "session_id", "ts", "panel"];

/// Product events written to `events.jsonl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    SessionStarted,
    GenerationStarted,
    GenerationSucceeded,
    GenerationFailed,
    GenerationRejected,
    PromptSaved,
    PromptDeleted,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::SessionStarted => "session_started",
            EventKind::GenerationStarted => "generation_started",
            EventKind::GenerationSucceeded => "generation_succeeded",
            EventKind::GenerationFailed => "generation_failed",
            EventKind::GenerationRejected => "generation_rejected",
            EventKind::PromptSaved => "prompt_saved",
            EventKind::PromptDeleted => "prompt_deleted",
        }
    }

    /// Everything but the session marker belongs to exactly one panel.
    pub fn is_panel_scoped(self) -> bool {
        self != EventKind::SessionStarted
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("{0} events must name a panel")]
    MissingPanel(EventKind),
    #[error("{0} events are not tied to a panel")]
    UnexpectedPanel(EventKind),
    #[error("invalid panel id '{0}'")]
    InvalidPanel(String),
    #[error("field '{0}' is reserved")]
    ReservedField(String),
}

/// One line of the event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub session_id: String,
    pub ts: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<String>,
    #[serde(flatten)]
    pub fields: EventFields,
}

/// Append-only JSONL log for one studio session.
///
/// Panel-scoped kinds must carry a panel id and the session marker must not. Shared handles
/// serialize their appends.
#[derive(Debug, Clone)]
pub struct EventLog {
    inner: Arc<EventLogInner>,
}

#[derive(Debug)]
struct EventLogInner {
    path: PathBuf,
    session_id: String,
    lock: Mutex<()>,
}

impl EventLog {
    pub fn new(path: impl Into<PathBuf>, session_id: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(EventLogInner {
                path: path.into(),
                session_id: session_id.into(),
                lock: Mutex::new(()),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    pub fn session_id(&self) -> &str {
        &self.inner.session_id
    }

    pub fn record(
        &self,
        kind: EventKind,
        panel: Option<&str>,
        fields: EventFields,
    ) -> anyhow::Result<EventRecord> {
        let panel = check_panel(kind, panel)?;
        if let Some(key) = fields.keys().find(|key| RESERVED_KEYS.contains(&key.as_str())) {
            return Err(EventError::ReservedField(key.clone()).into());
        }
        let record = EventRecord {
            kind,
            session_id: self.inner.session_id.clone(),
            ts: now_utc_iso(),
            panel: panel.map(str::to_string),
            fields,
        };
        self.append(&record)?;
        Ok(record)
    }

    fn append(&self, record: &EventRecord) -> anyhow::Result<()> {
        let path = &self.inner.path;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let line = serde_json::to_string(record)?;
        let _guard = self
            .inner
            .lock
            .lock()
            .map_err(|_| anyhow::anyhow!("event log lock poisoned"))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

fn check_panel(kind: EventKind, panel: Option<&str>) -> Result<Option<&str>, EventError> {
    match (kind.is_panel_scoped(), panel) {
        (true, None) => Err(EventError::MissingPanel(kind)),
        (false, Some(_)) => Err(EventError::UnexpectedPanel(kind)),
        (false, None) => Ok(None),
        (true, Some(id)) => {
            let well_formed = !id.is_empty()
                && !id.starts_with('-')
                && !id.ends_with('-')
                && id.chars().all(|ch| ch.is_ascii_lowercase() || ch == '-');
            if well_formed {
                Ok(Some(id))
            } else {
                Err(EventError::InvalidPanel(id.to_string()))
            }
        }
    }
}

/// Parse a log back into records. Lines that are not studio events are skipped.
pub fn read_events(path: &Path) -> anyhow::Result<Vec<EventRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(raw
        .lines()
        .filter_map(|line| serde_json::from_str::<EventRecord>(line).ok())
        .collect())
}

pub fn read_event_kinds(path: &Path) -> anyhow::Result<Vec<EventKind>> {
    Ok(read_events(path)?.into_iter().map(|record| record.kind).collect())
}

fn now_utc_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}
