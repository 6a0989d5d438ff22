//! Read-modify-write helpers for the JSON object files the crate persists
//! into: the settings state file and the release manifest.

use std::{fs, io, path::Path};

use serde_json::{Map, Value};

use crate::error::{CoreError, Result};

fn empty_state_object() -> Map<String, Value> {
    Map::new()
}

/// Lenient read used by the get paths: any unreadable, unparseable, or
/// non-object file reads as an empty object.
pub(crate) fn read_object(path: &Path) -> Map<String, Value> {
    let Ok(raw) = fs::read_to_string(path) else {
        return empty_state_object();
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(object)) => object,
        Ok(_) | Err(_) => empty_state_object(),
    }
}

/// Strict read used before a write. A missing file and a damaged file both
/// reset to an empty object (the damaged case logs a warning so the reset is
/// visible), but an unreadable file aborts the write.
pub(crate) fn load_object_for_update(path: &Path) -> Result<Map<String, Value>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Ok(empty_state_object());
        }
        Err(error) => {
            return Err(CoreError::Io(format!(
                "failed to read state file {}: {}",
                path.display(),
                error
            )));
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => {
            tracing::warn!(
                "state file {} has non-object root; resetting state file",
                path.display()
            );
            Ok(empty_state_object())
        }
        Err(error) => {
            tracing::warn!(
                "failed to parse state file {}: {}; resetting state file",
                path.display(),
                error
            );
            Ok(empty_state_object())
        }
    }
}

pub(crate) fn write_object(path: &Path, object: &Map<String, Value>) -> Result<()> {
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            CoreError::Io(format!(
                "failed to create state directory {}: {}",
                parent_dir.display(),
                error
            ))
        })?;
    }

    let serialized = serde_json::to_string_pretty(object)
        .map_err(|error| CoreError::JsonParse(format!("failed to serialize state: {error}")))?;
    fs::write(path, serialized).map_err(|error| {
        CoreError::Io(format!(
            "failed to write state file {}: {}",
            path.display(),
            error
        ))
    })?;

    Ok(())
}
