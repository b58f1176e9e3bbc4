use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context};
use serde_json::{Map, Value};

/// Origin-scoped durable key-value storage. Reads and writes are synchronous from the caller's
/// point of view.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Key-value store backed by a single JSON object file.
///
/// Every `set` re-reads the file and merges only its own key before writing, so two stores
/// pointed at the same file keep each other's entries.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let payload = read_json_object(&self.path)?;
        match payload.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(anyhow!(
                "origin store entry '{key}' is not a string: {other}"
            )),
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut on_disk = if self.path.exists() {
            read_json_object(&self.path).unwrap_or_default()
        } else {
            Map::new()
        };
        on_disk.insert(key.to_string(), Value::String(value.to_string()));
        write_json_object(&self.path, &on_disk)
    }
}

/// In-process store. Nothing survives the process; used for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn read_json_object(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed: Value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    match parsed {
        Value::Object(map) => Ok(map),
        _ => Err(anyhow!("{} does not hold a JSON object", path.display())),
    }
}

fn write_json_object(path: &Path, payload: &Map<String, Value>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(
        path,
        serde_json::to_string_pretty(&Value::Object(payload.clone()))?,
    )
    .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_missing_file_reads_as_absent() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let store = FileKeyValueStore::new(temp.path().join("origin.json"));
        assert_eq!(store.get("anything")?, None);
        Ok(())
    }

    #[test]
    fn file_store_round_trips_and_creates_parents() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let store = FileKeyValueStore::new(temp.path().join("a").join("origin.json"));
        store.set("key", "[\"one\"]")?;
        assert_eq!(store.get("key")?.as_deref(), Some("[\"one\"]"));
        Ok(())
    }

    #[test]
    fn file_stores_sharing_a_file_keep_each_others_keys() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("origin.json");
        let store_a = FileKeyValueStore::new(&path);
        let store_b = FileKeyValueStore::new(&path);

        store_a.set("ui", "a")?;
        store_b.set("image", "b")?;
        store_a.set("ui", "c")?;

        let reloaded = FileKeyValueStore::new(path);
        assert_eq!(reloaded.get("ui")?.as_deref(), Some("c"));
        assert_eq!(reloaded.get("image")?.as_deref(), Some("b"));
        Ok(())
    }

    #[test]
    fn file_store_reports_corrupt_file() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("origin.json");
        std::fs::write(&path, "{not json")?;
        let store = FileKeyValueStore::new(&path);
        assert!(store.get("key").is_err());

        store.set("key", "fresh")?;
        assert_eq!(store.get("key")?.as_deref(), Some("fresh"));
        Ok(())
    }

    #[test]
    fn memory_store_overwrites() -> anyhow::Result<()> {
        let store = MemoryKeyValueStore::new();
        store.set("key", "one")?;
        store.set("key", "two")?;
        assert_eq!(store.get("key")?.as_deref(), Some("two"));
        assert_eq!(store.get("other")?, None);
        Ok(())
    }
}
