//! Runtime configuration
//!
//! Built once at startup and handed to the Gemini client. The API key comes
//! from `GEMINI_API_KEY`, falling back to a plaintext key file.

use crate::ai::gemini::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const API_KEY_FILE_ENV: &str = "GEMINI_API_KEY_FILE";
pub const API_KEY_FILE_NAME: &str = "apikey.txt";
pub const API_KEY_PLACEHOLDER: &str = "YOUR_GEMINI_API_KEY_HERE";

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Reads configuration from the process environment (after loading a
    /// `.env` file, if any).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves configuration through `lookup`, which stands in for
    /// environment variable access.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key_file = lookup(API_KEY_FILE_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_key_file);

        let api_key = non_empty(lookup(API_KEY_ENV))
            .or_else(|| read_key_file(&key_file))
            .ok_or(Error::MissingApiKey(key_file))?;

        let timeout = match non_empty(lookup("GEMINI_TIMEOUT_SECS")) {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    Error::Config(format!(
                        "GEMINI_TIMEOUT_SECS must be whole seconds, got '{}'",
                        raw
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_key,
            base_url: non_empty(lookup("GEMINI_BASE_URL"))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_empty(lookup("GEMINI_MODEL")).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `apikey.txt` beside the running executable, or in the working directory
/// when the executable path is unavailable.
pub fn default_key_file() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(API_KEY_FILE_NAME)
}

fn read_key_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => non_empty(Some(contents)).filter(|key| key != API_KEY_PLACEHOLDER),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!("Error reading API key file {}: {}", path.display(), e);
            None
        }
    }
}

/// Writes a placeholder key file for the user to fill in. Returns `true`
/// when a new file was created.
pub fn write_key_template(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, API_KEY_PLACEHOLDER)?;
    tracing::info!("API key template file created at: {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_env_key_takes_priority_over_file() {
        let dir = TempDir::new().unwrap();
        let key_file = dir.path().join("apikey.txt");
        fs::write(&key_file, "from-file").unwrap();
        let key_file = key_file.to_string_lossy().to_string();

        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_ENV, "from-env"),
            (API_KEY_FILE_ENV, key_file.as_str()),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_falls_back_to_trimmed_key_file() {
        let dir = TempDir::new().unwrap();
        let key_file = dir.path().join("apikey.txt");
        fs::write(&key_file, "  from-file\n").unwrap();
        let key_file = key_file.to_string_lossy().to_string();

        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_ENV, ""),
            (API_KEY_FILE_ENV, key_file.as_str()),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "from-file");
    }

    #[test]
    fn test_placeholder_key_counts_as_missing() {
        let dir = TempDir::new().unwrap();
        let key_file = dir.path().join("apikey.txt");
        assert!(write_key_template(&key_file).unwrap());
        assert!(!write_key_template(&key_file).unwrap());
        let key_file_str = key_file.to_string_lossy().to_string();

        let err =
            Config::from_lookup(lookup_from(&[(API_KEY_FILE_ENV, key_file_str.as_str())]))
                .unwrap_err();
        match err {
            Error::MissingApiKey(path) => assert_eq!(path, key_file),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_key_everywhere_is_error() {
        let dir = TempDir::new().unwrap();
        let key_file = dir.path().join("absent.txt").to_string_lossy().to_string();

        let err = Config::from_lookup(lookup_from(&[(API_KEY_FILE_ENV, key_file.as_str())]))
            .unwrap_err();
        assert!(matches!(err, Error::MissingApiKey(_)));
    }

    #[test]
    fn test_optional_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_ENV, "k"),
            ("GEMINI_BASE_URL", "http://localhost:8080"),
            ("GEMINI_MODEL", "gemini-2.5-flash"),
            ("GEMINI_TIMEOUT_SECS", "45"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[
            (API_KEY_ENV, "k"),
            ("GEMINI_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config =
            Config::from_lookup(lookup_from(&[(API_KEY_ENV, "super-secret")])).unwrap();
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
