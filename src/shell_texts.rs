//! User-facing strings for the update-check surface, selected by effective
//! language.

#[derive(Debug, Clone, Copy)]
pub struct ShellTexts {
    pub check_for_updates: &'static str,
    pub update_available: &'static str,
    pub up_to_date: &'static str,
    pub update_check_failed: &'static str,
    pub current_version: &'static str,
    pub latest_version: &'static str,
    pub go_to_download: &'static str,
    pub close: &'static str,
}

/// Texts for an effective language. Anything outside the supported set reads
/// as English.
pub fn shell_texts_for_language(language: &str) -> ShellTexts {
    if language == "es" {
        return ShellTexts {
            check_for_updates: "Buscar actualizaciones",
            update_available: "Nueva versión disponible",
            up_to_date: "Estás en la última versión",
            update_check_failed: "No se pudo comprobar si hay actualizaciones",
            current_version: "Versión actual",
            latest_version: "Última versión",
            go_to_download: "Ir a la página de descarga",
            close: "Cerrar",
        };
    }

    ShellTexts {
        check_for_updates: "Check for Updates",
        update_available: "A new version is available",
        up_to_date: "You are on the latest version",
        update_check_failed: "Could not check for updates",
        current_version: "Current version",
        latest_version: "Latest version",
        go_to_download: "Go to Download Page",
        close: "Close",
    }
}
