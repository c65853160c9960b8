//! # Configuration
//!
//! Clinicdesk configuration is managed by [`confique`], which handles layered
//! loading from TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `CLINICDESK_LATENCY_MS`, `CLINICDESK_USE_MOCK_DATA`, etc.
//! 2. **Explicit file**: the file passed with `--config`.
//! 3. **Global Config**: `clinicdesk.toml` in the OS config directory (via `directories`).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `base_url` | `http://localhost:5000/api` | Base URL of the clinic API |
//! | `use_mock_data` | `true` | Serve every call from the in-memory mock |
//! | `latency_ms` | `300` | Simulated round-trip per gateway call |
//! | `seed_file` | none | JSON snapshot bulk-loaded at startup |
//! | `endpoints.patients` | `/patients` | Endpoint path, likewise for `providers`, `appointments`, `clinics` |

use crate::error::{ClinicError, Result};
use crate::model::ResourceKind;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "clinicdesk.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClinicConfig {
    /// Base URL for the clinic API, e.g. "https://your-hospital-api.com/api"
    #[config(env = "CLINICDESK_BASE_URL", default = "http://localhost:5000/api")]
    pub base_url: String,

    /// Answer calls from the in-memory mock. There is no real backend yet, so
    /// turning this off makes every gateway call fail.
    #[config(env = "CLINICDESK_USE_MOCK_DATA", default = true)]
    pub use_mock_data: bool,

    /// Simulated network delay in milliseconds
    #[config(env = "CLINICDESK_LATENCY_MS", default = 300)]
    pub latency_ms: u64,

    /// JSON snapshot to bulk-load at startup
    #[config(env = "CLINICDESK_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    #[config(nested)]
    pub endpoints: EndpointConfig,
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    #[config(default = "/patients")]
    pub patients: String,

    #[config(default = "/providers")]
    pub providers: String,

    #[config(default = "/appointments")]
    pub appointments: String,

    #[config(default = "/clinics")]
    pub clinics: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            patients: "/patients".to_string(),
            providers: "/providers".to_string(),
            appointments: "/appointments".to_string(),
            clinics: "/clinics".to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn path(&self, kind: ResourceKind) -> &str {
        match kind {
            ResourceKind::Patients => &self.patients,
            ResourceKind::Providers => &self.providers,
            ResourceKind::Clinics => &self.clinics,
            ResourceKind::Appointments => &self.appointments,
        }
    }
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            use_mock_data: true,
            latency_ms: 300,
            seed_file: None,
            endpoints: EndpointConfig::default(),
        }
    }
}

impl ClinicConfig {
    /// Loads env vars, then `explicit` (which must exist when given), then the global file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut files = Vec::new();
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ClinicError::InvalidInput(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            files.push(path.to_path_buf());
        }
        if let Some(global) = global_config_path() {
            files.push(global);
        }
        Self::load_from(&files)
    }

    /// Earlier files take priority over later ones. Missing files are skipped.
    pub fn load_from(files: &[PathBuf]) -> Result<Self> {
        let mut builder = ClinicConfig::builder().env();
        for file in files {
            builder = builder.file(file);
        }
        let config = builder.load()?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn endpoint_url(&self, kind: ResourceKind) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.endpoints.path(kind)
        )
    }
}

pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "clinicdesk", "clinicdesk")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}
