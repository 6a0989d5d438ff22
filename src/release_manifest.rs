//! The persisted manifest whose `version` field external release tooling
//! consumes.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::calendar_version::{next_version, CalendarVersion, VersionDate};
use crate::error::Result;
use crate::json_state;

const VERSION_FIELD: &str = "version";

/// JSON manifest holding the published version. Writes preserve every other
/// manifest field.
#[derive(Debug, Clone)]
pub struct ReleaseManifest {
    path: PathBuf,
}

impl ReleaseManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Version recorded by the last release, if any. A missing or damaged
    /// manifest reads as "no prior version".
    pub fn read_version(&self) -> Option<String> {
        let object = json_state::read_object(&self.path);
        object.get(VERSION_FIELD)?.as_str().map(str::to_owned)
    }

    pub fn record_version(&self, version: &CalendarVersion) -> Result<()> {
        let mut object = json_state::load_object_for_update(&self.path)?;
        object.insert(
            VERSION_FIELD.to_string(),
            Value::String(version.to_string()),
        );
        json_state::write_object(&self.path, &object)
    }

    /// Computes and persists the next version for a release cut `today`.
    pub fn bump(&self, today: VersionDate) -> Result<CalendarVersion> {
        let previous = self.read_version();
        let next = next_version(previous.as_deref(), today);
        self.record_version(&next)?;
        tracing::info!(
            "release version bumped from {} to {next}",
            previous.as_deref().unwrap_or("none")
        );
        Ok(next)
    }
}
