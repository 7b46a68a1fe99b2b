//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// Where attachment files live and how they are exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory attachment files are written to. Created if absent.
    #[serde(default = "default_upload_root")]
    pub upload_root: String,
    /// URL prefix the upload root is served under.
    #[serde(default = "default_public_path")]
    pub public_path: String,
    /// Maximum request body size for uploads (default 50 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Remove files no attachment references when the server starts.
    #[serde(default)]
    pub sweep_orphans_on_startup: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_root: default_upload_root(),
            public_path: default_public_path(),
            max_upload_size_bytes: default_max_upload(),
            sweep_orphans_on_startup: false,
        }
    }
}

impl StorageConfig {
    /// URL prefix the upload root is mounted at: one leading slash, no
    /// trailing slash. An empty or root prefix falls back to `/uploads`.
    pub fn mount_path(&self) -> String {
        match self.public_path.trim().trim_matches('/') {
            "" => default_public_path(),
            trimmed => format!("/{trimmed}"),
        }
    }

    /// Public URL path for a stored file.
    pub fn public_url(&self, storage_path: &str) -> String {
        format!(
            "{}/{}",
            self.mount_path(),
            storage_path.trim_start_matches('/')
        )
    }
}

fn default_upload_root() -> String {
    "uploads".to_string()
}

fn default_public_path() -> String {
    "/uploads".to_string()
}

fn default_max_upload() -> u64 {
    52_428_800 // 50 MB
}
