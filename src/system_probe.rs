//! Platform probes answering "what does the OS currently use" for the
//! preferences that can defer to the system.

#[cfg(unix)]
use std::process::Command;

/// Queries the platform's current value for one preference domain. Probes are
/// total: they always produce a value, and callers re-probe on every
/// resolution so external changes are picked up.
pub trait SystemProbe {
    fn current(&self) -> String;
}

impl<F> SystemProbe for F
where
    F: Fn() -> String,
{
    fn current(&self) -> String {
        self()
    }
}

/// OS locale reduced to its primary language subtag (`"en-US"` becomes
/// `"en"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleProbe;

impl SystemProbe for LocaleProbe {
    fn current(&self) -> String {
        primary_subtag(&sys_locale::get_locale().unwrap_or_default())
    }
}

pub(crate) fn primary_subtag(raw: &str) -> String {
    raw.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// OS color scheme as `"dark"` or `"light"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeProbe;

impl SystemProbe for ThemeProbe {
    fn current(&self) -> String {
        if system_prefers_dark() { "dark" } else { "light" }.to_string()
    }
}

#[cfg(target_os = "macos")]
fn system_prefers_dark() -> bool {
    // The global default is only present while dark mode is active.
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}

#[cfg(target_os = "windows")]
fn system_prefers_dark() -> bool {
    use winreg::enums::HKEY_CURRENT_USER;
    use winreg::RegKey;

    RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .and_then(|key| key.get_value::<u32, _>("AppsUseLightTheme"))
        .map(|value| value == 0)
        .unwrap_or(false)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn system_prefers_dark() -> bool {
    Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
        .map(|output| String::from_utf8_lossy(&output.stdout).contains("dark"))
        .unwrap_or(false)
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
fn system_prefers_dark() -> bool {
    false
}
