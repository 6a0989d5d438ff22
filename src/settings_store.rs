//! Persisted key-value settings backing the preference resolvers.

use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::error::Result;
use crate::json_state;

const STATE_FILE: &str = "shell_state.json";
const STATE_DIR_ENV: &str = "DESKSHELL_STATE_DIR";

/// Key-value collaborator the resolvers persist through. Reads are total;
/// only writes can fail.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Default location of the on-disk state file: `$DESKSHELL_STATE_DIR` when set
/// and non-empty, otherwise `.deskshell` under the home directory. `None` only
/// when neither is available.
pub fn default_state_path() -> Option<PathBuf> {
    if let Ok(dir) = env::var(STATE_DIR_ENV) {
        let path = PathBuf::from(dir.trim());
        if !path.as_os_str().is_empty() {
            return Some(path.join(STATE_FILE));
        }
    }

    home::home_dir().map(|home| home.join(".deskshell").join(STATE_FILE))
}

/// Settings persisted as one JSON object file. Every access re-reads the
/// file, and writes preserve fields owned by other parts of the shell.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    state_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(state_path: impl Into<PathBuf>) -> Self {
        Self {
            state_path: state_path.into(),
        }
    }

    pub fn state_path(&self) -> &Path {
        &self.state_path
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        let object = json_state::read_object(&self.state_path);
        object.get(key)?.as_str().map(str::to_owned)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut object = json_state::load_object_for_update(&self.state_path)?;
        object.insert(key.to_string(), Value::String(value.to_string()));
        json_state::write_object(&self.state_path, &object)
    }
}

/// In-memory store for tests and embedders that manage persistence themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
