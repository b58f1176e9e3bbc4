use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use studio_contracts::prompts::DEFAULT_SAVED_PROMPT_CAPACITY;

use crate::dryrun::Latency;

pub const DEFAULT_HOME_DIR: &str = ".design-studio";
const ORIGIN_STORE_FILE: &str = "origin-store.json";
const EVENTS_FILE: &str = "events.jsonl";

/// Resolved studio settings. Environment variables are read once; command-line flags are
/// applied on top by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub home: PathBuf,
    pub events_path: Option<PathBuf>,
    pub latency: Latency,
    pub max_saved_prompts: usize,
    /// Keep saved prompts in memory only.
    pub ephemeral: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            home: PathBuf::from(DEFAULT_HOME_DIR),
            events_path: None,
            latency: Latency::Simulated,
            max_saved_prompts: DEFAULT_SAVED_PROMPT_CAPACITY,
            ephemeral: false,
        }
    }
}

impl StudioConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// `STUDIO_HOME`, `STUDIO_LATENCY_MS`, `STUDIO_MAX_SAVED_PROMPTS`; blank values count as
    /// unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let value = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();
        if let Some(home) = value("STUDIO_HOME") {
            config.home = PathBuf::from(home);
        }
        if let Some(raw) = value("STUDIO_LATENCY_MS") {
            let millis = raw
                .parse::<u64>()
                .with_context(|| format!("STUDIO_LATENCY_MS must be milliseconds, got '{raw}'"))?;
            config.latency = Latency::Fixed(Duration::from_millis(millis));
        }
        if let Some(raw) = value("STUDIO_MAX_SAVED_PROMPTS") {
            let cap = raw.parse::<usize>().with_context(|| {
                format!("STUDIO_MAX_SAVED_PROMPTS must be a positive integer, got '{raw}'")
            })?;
            anyhow::ensure!(cap > 0, "STUDIO_MAX_SAVED_PROMPTS must be at least 1");
            config.max_saved_prompts = cap;
        }
        Ok(config)
    }

    pub fn origin_store_path(&self) -> PathBuf {
        self.home.join(ORIGIN_STORE_FILE)
    }

    pub fn events_path(&self) -> PathBuf {
        self.events_path
            .clone()
            .unwrap_or_else(|| self.home.join(EVENTS_FILE))
    }
}
