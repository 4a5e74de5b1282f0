//! CLI settings.
//!
//! Loaded from an optional `pitchkit.toml` in the working directory, then
//! overridden by `PITCHKIT_*` environment variables. Everything has a
//! default, so running with no configuration at all works against a local
//! service.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

const CONFIG_FILE: &str = "pitchkit.toml";
const DEFAULT_SERVICE_URL: &str = "http://localhost:5001";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the narrative/deck rendering service.
    pub service_url: String,
    /// Directory exported artifacts are written to.
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// On-disk shape; every field optional.
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    service_url: Option<String>,
    output_dir: Option<PathBuf>,
}

impl Settings {
    /// Load from `./pitchkit.toml` (when present) and the process
    /// environment.
    pub fn load() -> Result<Self> {
        let file = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => return Err(err).context(format!("reading {CONFIG_FILE}")),
        };
        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Core resolution, separated from the process for testability.
    pub fn from_sources(
        file: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(raw) = file {
            let parsed: FileSettings =
                toml::from_str(raw).context(format!("parsing {CONFIG_FILE}"))?;
            if let Some(service_url) = parsed.service_url {
                settings.service_url = service_url;
            }
            if let Some(output_dir) = parsed.output_dir {
                settings.output_dir = output_dir;
            }
        }

        if let Some(service_url) = env("PITCHKIT_SERVICE_URL") {
            settings.service_url = service_url;
        }
        if let Some(output_dir) = env("PITCHKIT_OUTPUT_DIR") {
            settings.output_dir = PathBuf::from(output_dir);
        }

        settings.service_url = settings.service_url.trim_end_matches('/').to_string();
        Ok(settings)
    }

    /// Full path for an artifact file name.
    #[must_use]
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_any_source() {
        let settings = Settings::from_sources(None, |_| None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let file = r#"
            service_url = "http://pitch.internal:9000"
            output_dir = "/tmp/exports"
        "#;
        let settings = Settings::from_sources(Some(file), |_| None).unwrap();
        assert_eq!(settings.service_url, "http://pitch.internal:9000");
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn env_overrides_file() {
        let file = r#"service_url = "http://from-file""#;
        let settings = Settings::from_sources(Some(file), |key| match key {
            "PITCHKIT_SERVICE_URL" => Some("http://from-env/".to_string()),
            _ => None,
        })
        .unwrap();
        // Trailing slash is normalized away.
        assert_eq!(settings.service_url, "http://from-env");
    }

    #[test]
    fn malformed_file_is_an_error_not_a_silent_default() {
        let err = Settings::from_sources(Some("service_url = ["), |_| None);
        assert!(err.is_err());
    }
}
