//! Core of the DeskShell desktop shell: stored-versus-effective preference
//! resolution (language and theme), the persisted settings state behind it,
//! calendar-based release versioning, and the update-availability check.
//!
//! Windowing, menus, and every other host-toolkit surface live in the shell
//! binary; this crate owns only the logic and the state files.

mod calendar_version;
mod change_events;
mod error;
mod json_state;
mod preferences;
mod release_manifest;
mod settings_store;
mod shell_texts;
mod system_probe;
mod update_check;

pub use calendar_version::{next_version, CalendarVersion, VersionDate};
pub use change_events::{ChangeNotifier, PreferenceChange, SubscriptionId};
pub use error::{CoreError, Result};
pub use preferences::{
    PreferenceKind, PreferenceResolver, SUPPORTED_LANGUAGES, SUPPORTED_THEMES, SYSTEM_SENTINEL,
};
pub use release_manifest::ReleaseManifest;
pub use settings_store::{default_state_path, JsonFileStore, MemoryStore, SettingsStore};
pub use shell_texts::{shell_texts_for_language, ShellTexts};
pub use system_probe::{LocaleProbe, SystemProbe, ThemeProbe};
pub use update_check::{check_for_update, HttpVersionFeed, UpdateCheckResult, VersionFeed};
