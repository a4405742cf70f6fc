use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::catalog::{
    chart, heatmap, metric, DEFAULT_CHARTS, DEFAULT_HEATMAPS, DEFAULT_METRICS,
};

/// Which panel list a preference belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceKind {
    Metrics,
    Charts,
    Heatmaps,
}

impl PreferenceKind {
    pub const ALL: [PreferenceKind; 3] = [
        PreferenceKind::Metrics,
        PreferenceKind::Charts,
        PreferenceKind::Heatmaps,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PreferenceKind::Metrics => "metrics",
            PreferenceKind::Charts => "charts",
            PreferenceKind::Heatmaps => "heatmaps",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(raw.trim()))
    }

    /// Storage key for a program, e.g. `program_metrics_cs-101`.
    pub fn storage_key(self, program_id: &str) -> String {
        match self {
            PreferenceKind::Metrics => format!("program_metrics_{program_id}"),
            PreferenceKind::Charts => format!("program_analytics_charts_{program_id}"),
            PreferenceKind::Heatmaps => format!("program_analytics_heatmaps_{program_id}"),
        }
    }

    pub fn defaults(self) -> Vec<String> {
        let keys: &[&str] = match self {
            PreferenceKind::Metrics => &DEFAULT_METRICS,
            PreferenceKind::Charts => &DEFAULT_CHARTS,
            PreferenceKind::Heatmaps => &DEFAULT_HEATMAPS,
        };
        keys.iter().map(|key| key.to_string()).collect()
    }

    pub fn is_known(self, key: &str) -> bool {
        match self {
            PreferenceKind::Metrics => metric(key).is_some(),
            PreferenceKind::Charts => chart(key).is_some(),
            PreferenceKind::Heatmaps => heatmap(key).is_some(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("failed to access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode preferences: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("preference store lock poisoned")]
    Poisoned,
    #[error("unknown {} key '{key}'", .kind.label())]
    UnknownKey { kind: PreferenceKind, key: String },
}

/// Key/value persistence for per-program panel selections.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, PreferenceError>;
    fn set(&self, key: &str, value: Value) -> Result<(), PreferenceError>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryPreferenceStore {
    entries: Arc<Mutex<BTreeMap<String, Value>>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<Value>, PreferenceError> {
        let guard = self.entries.lock().map_err(|_| PreferenceError::Poisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), PreferenceError> {
        let mut guard = self.entries.lock().map_err(|_| PreferenceError::Poisoned)?;
        guard.insert(key.to_string(), value);
        Ok(())
    }
}

/// All preferences in one JSON object file. Writes go to a sibling temp file
/// that is renamed over the original.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_document(&self) -> Result<BTreeMap<String, Value>, PreferenceError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(self.io_error(error)),
        }
    }

    fn write_document(&self, document: &BTreeMap<String, Value>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|error| self.io_error(error))?;
        }

        let temp = self.path.with_extension("json.tmp");
        let encoded = serde_json::to_vec_pretty(document)?;
        fs::write(&temp, encoded).map_err(|error| self.io_error(error))?;
        fs::rename(&temp, &self.path).map_err(|error| self.io_error(error))?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<Value>, PreferenceError> {
        let mut document = self.read_document()?;
        Ok(document.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), PreferenceError> {
        let _guard = self.write_lock.lock().map_err(|_| PreferenceError::Poisoned)?;
        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(PreferenceError::Serialize(error)) => {
                warn!(path = %self.path.display(), %error, "replacing unreadable preference file");
                BTreeMap::new()
            }
            Err(other) => return Err(other),
        };
        document.insert(key.to_string(), value);
        self.write_document(&document)?;
        debug!(path = %self.path.display(), key, "preference saved");
        Ok(())
    }
}

/// Every panel list for one program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramSelections {
    pub program_id: String,
    pub metrics: Vec<String>,
    pub charts: Vec<String>,
    pub heatmaps: Vec<String>,
}

/// Typed access to the preference store with default fallbacks.
pub struct ProgramPreferences<S> {
    store: Arc<S>,
}

impl<S> ProgramPreferences<S>
where
    S: PreferenceStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Stored selection, or the defaults when nothing usable is stored. Never fails.
    pub fn load(&self, kind: PreferenceKind, program_id: &str) -> Vec<String> {
        let key = kind.storage_key(program_id);
        match self.store.get(&key) {
            Ok(Some(value)) => match serde_json::from_value::<Vec<String>>(value) {
                Ok(keys) => keys,
                Err(error) => {
                    warn!(%key, %error, "stored selection is not a list of keys, using defaults");
                    kind.defaults()
                }
            },
            Ok(None) => kind.defaults(),
            Err(error) => {
                warn!(%key, %error, "failed to load selection, using defaults");
                kind.defaults()
            }
        }
    }

    pub fn load_all(&self, program_id: &str) -> ProgramSelections {
        ProgramSelections {
            program_id: program_id.to_string(),
            metrics: self.load(PreferenceKind::Metrics, program_id),
            charts: self.load(PreferenceKind::Charts, program_id),
            heatmaps: self.load(PreferenceKind::Heatmaps, program_id),
        }
    }

    /// Persist a selection. Keys must exist in the matching catalog.
    pub fn save(
        &self,
        kind: PreferenceKind,
        program_id: &str,
        keys: &[String],
    ) -> Result<(), PreferenceError> {
        if let Some(unknown) = keys.iter().find(|key| !kind.is_known(key)) {
            return Err(PreferenceError::UnknownKey {
                kind,
                key: unknown.clone(),
            });
        }
        let value = serde_json::to_value(keys)?;
        self.store.set(&kind.storage_key(program_id), value)
    }
}
