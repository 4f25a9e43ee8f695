use std::path::Path;

use crate::app::error::AppError;

/// Strips wrapping quotes and surrounding whitespace from a configured
/// adb path (users paste quoted paths from shells and file managers).
pub fn normalize_command_path(value: &str) -> String {
    let trimmed = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|candidate| candidate.strip_suffix(quote))
        {
            return inner.trim().to_string();
        }
    }
    trimmed.to_string()
}

/// Picks the adb program to invoke: the `ADB` environment override wins,
/// then the config-file path, then plain `adb` resolved via `PATH`.
pub fn resolve_adb_program(env_override: Option<&str>, configured: &str) -> String {
    for candidate in [env_override.unwrap_or(""), configured] {
        let normalized = normalize_command_path(candidate);
        if !normalized.is_empty() {
            return normalized;
        }
    }
    "adb".to_string()
}

pub fn validate_adb_program(program: &str) -> Result<(), AppError> {
    if program.trim().is_empty() {
        return Err(AppError::validation("adb command is empty"));
    }
    // A bare name is resolved through PATH at spawn time; only explicit
    // paths can be checked up front.
    if !program.contains(std::path::MAIN_SEPARATOR) && !program.contains('/') {
        return Ok(());
    }
    let path = Path::new(program);
    if path.is_dir() {
        return Err(AppError::validation(format!(
            "adb path must point to an executable file: {program}"
        )));
    }
    if !path.exists() {
        return Err(AppError::validation(format!(
            "adb executable not found at {program}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_wrapping_quotes() {
        assert_eq!(
            normalize_command_path("  \"/opt/platform-tools/adb\"  "),
            "/opt/platform-tools/adb"
        );
        assert_eq!(
            normalize_command_path("  '/opt/platform-tools/adb'  "),
            "/opt/platform-tools/adb"
        );
    }

    #[test]
    fn env_override_wins_over_config() {
        assert_eq!(
            resolve_adb_program(Some("/env/adb"), "/config/adb"),
            "/env/adb"
        );
        assert_eq!(resolve_adb_program(None, "/config/adb"), "/config/adb");
        assert_eq!(resolve_adb_program(Some("  "), ""), "adb");
    }

    #[test]
    fn bare_name_is_accepted_without_path_check() {
        assert!(validate_adb_program("adb").is_ok());
    }

    #[test]
    fn rejects_nonexistent_explicit_path() {
        let err = validate_adb_program("/this/path/should/not/exist/adb").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
