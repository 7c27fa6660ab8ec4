//! Credentials file loading.
//!
//! Credentials live in `~/.zoom-meeting.config.json`:
//!
//! ```json
//! {"account_id": "...", "client_id": "...", "client_secret": "..."}
//! ```
//!
//! The file is only ever read. Loading is all-or-nothing: a run never
//! proceeds with partial credentials.

use std::path::{Path, PathBuf};

use tracing::debug;
use zoom_meeting_providers::zoom::Credentials;

use crate::error::{ClientError, ClientResult};

/// File name of the credentials file inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".zoom-meeting.config.json";

/// Returns the default credentials file path.
///
/// # Errors
///
/// Returns a configuration error when the home directory cannot be
/// determined.
pub fn default_path() -> ClientResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE_NAME))
        .ok_or_else(|| ClientError::Config("could not determine home directory".to_string()))
}

/// Loads and validates credentials from `path`.
pub fn load_credentials(path: &Path) -> ClientResult<Credentials> {
    debug!(path = %path.display(), "loading credentials");

    let credentials = Credentials::from_file(path)
        .map_err(|e| ClientError::Config(format!("{}: {}", path.display(), e)))?;

    credentials
        .validate()
        .map_err(|e| ClientError::Config(format!("{} in {}", e, path.display())))?;

    Ok(credentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        (tmp, path)
    }

    #[test]
    fn default_path_is_in_home() {
        let path = default_path().unwrap();
        assert!(path.ends_with(".zoom-meeting.config.json"));
    }

    #[test]
    fn load_valid_credentials() {
        let (_tmp, path) =
            write_config(r#"{"account_id":"A","client_id":"B","client_secret":"C"}"#);
        let creds = load_credentials(&path).unwrap();
        assert_eq!(creds, Credentials::new("A", "B", "C"));
    }

    #[test]
    fn missing_field_is_config_error() {
        for content in [
            r#"{"client_id":"B","client_secret":"C"}"#,
            r#"{"account_id":"A","client_secret":"C"}"#,
            r#"{"account_id":"A","client_id":"B"}"#,
        ] {
            let (_tmp, path) = write_config(content);
            let err = load_credentials(&path).unwrap_err();
            assert!(matches!(err, ClientError::Config(_)), "{}", content);
            assert!(err.to_string().contains("is required"));
        }
    }

    #[test]
    fn empty_field_is_config_error() {
        let (_tmp, path) =
            write_config(r#"{"account_id":"A","client_id":"B","client_secret":""}"#);
        let err = load_credentials(&path).unwrap_err();
        assert!(err.to_string().contains("client_secret is required"));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let (_tmp, path) = write_config("{\"account_id\": ");
        let err = load_credentials(&path).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn missing_file_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_credentials(&tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
        assert!(err.to_string().contains("failed to read"));
    }
}
