//! Client configuration for `verifyflow-core`.
//!
//! Settings are layered: the embedded defaults come first, an optional user
//! file overrides the fields it names, then the `VERIFYFLOW_*` environment
//! variables, then whatever the caller applies from its own flags.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENV_SERVICE_URL: &str = "VERIFYFLOW_SERVICE_URL";
pub const ENV_PROFILE: &str = "VERIFYFLOW_PROFILE";

/// Effective client settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base address of the audit service.
    pub service_url: String,
    /// Audit profile sent when the caller does not name one.
    pub default_profile: String,
    /// Extensions accepted by the upload gate, without the leading dot.
    pub allowed_extensions: Vec<String>,
    /// First component of export file names.
    pub export_prefix: String,
}

/// A user file. Every field is optional; missing ones keep the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PartialClientConfig {
    pub service_url: Option<String>,
    pub default_profile: Option<String>,
    pub allowed_extensions: Option<Vec<String>>,
    pub export_prefix: Option<String>,
}

impl ClientConfig {
    /// Loads the settings embedded in the crate.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default client configuration from embedded string...");
        let default_yaml = include_str!("../config/default_client.yaml");
        let config: ClientConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default client configuration")?;
        Ok(config)
    }

    /// Reads a user file. The result still has to be merged onto defaults.
    pub fn load_partial<P: AsRef<Path>>(path: P) -> Result<PartialClientConfig> {
        let path = path.as_ref();
        info!("Loading client configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let partial: PartialClientConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(partial)
    }

    /// Defaults merged with the file at `path`, validated.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load_default()?;
        config.merge(Self::load_partial(path)?);
        config.validate()?;
        Ok(config)
    }

    /// Full resolution: defaults, the explicit file or the first existing
    /// candidate path, then environment overrides.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::load_default()?;

        let user_file = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => config_candidate_paths().into_iter().find(|p| p.is_file()),
        };
        if let Some(path) = user_file {
            config.merge(Self::load_partial(&path)?);
        } else {
            debug!("No user configuration file found; using defaults.");
        }

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Overrides the fields present in `partial`.
    pub fn merge(&mut self, partial: PartialClientConfig) {
        if let Some(url) = partial.service_url {
            self.service_url = url;
        }
        if let Some(profile) = partial.default_profile {
            self.default_profile = profile;
        }
        if let Some(extensions) = partial.allowed_extensions {
            self.allowed_extensions = extensions;
        }
        if let Some(prefix) = partial.export_prefix {
            self.export_prefix = prefix;
        }
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from an arbitrary variable source. Blank values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        if let Some(url) = non_blank(ENV_SERVICE_URL) {
            debug!("{} overrides service_url", ENV_SERVICE_URL);
            self.service_url = url;
        }
        if let Some(profile) = non_blank(ENV_PROFILE) {
            debug!("{} overrides default_profile", ENV_PROFILE);
            self.default_profile = profile;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.service_url.trim().is_empty() {
            return Err(anyhow!("service_url must not be empty"));
        }
        if !self.service_url.starts_with("http://") && !self.service_url.starts_with("https://") {
            warn!("service_url '{}' has no http(s) scheme; requests will likely fail", self.service_url);
        }
        if self.allowed_extensions.iter().all(|e| e.trim().is_empty()) {
            return Err(anyhow!("allowed_extensions must list at least one extension"));
        }
        if self.export_prefix.trim().is_empty() {
            return Err(anyhow!("export_prefix must not be empty"));
        }
        if self.default_profile.trim().is_empty() {
            return Err(anyhow!("default_profile must not be empty"));
        }
        Ok(())
    }
}

pub fn config_candidate_paths() -> Vec<PathBuf> {
    let candidates = vec![
        dirs::config_dir().map(|p| p.join("verifyflow").join("config.yaml")),
        dirs::home_dir().map(|p| p.join(".verifyflow").join("config.yaml")),
        Some(PathBuf::from("./config/verifyflow.yaml")),
    ];
    candidates.into_iter().flatten().collect()
}
