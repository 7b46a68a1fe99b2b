//! Removal of upload files no attachment record points at.
//!
//! Such files are left behind when a cascade delete cannot remove a file,
//! or when the process dies between writing an upload and recording it.
//! The sweep must not run while uploads are in flight.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use newsdesk_core::result::AppResult;
use newsdesk_core::traits::StorageProvider;
use newsdesk_database::store::AttachmentStore;

/// Counts from one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Files looked at.
    pub scanned: usize,
    /// Unreferenced files removed.
    pub removed: usize,
    /// Unreferenced files that could not be removed.
    pub failed: usize,
}

/// Deletes unreferenced files from the top level of the upload root.
#[derive(Debug, Clone)]
pub struct OrphanSweeper {
    attachments: Arc<dyn AttachmentStore>,
    storage: Arc<dyn StorageProvider>,
}

impl OrphanSweeper {
    /// Create a sweeper.
    pub fn new(attachments: Arc<dyn AttachmentStore>, storage: Arc<dyn StorageProvider>) -> Self {
        Self {
            attachments,
            storage,
        }
    }

    /// Run one sweep.
    pub async fn sweep(&self) -> AppResult<SweepReport> {
        let referenced: HashSet<String> =
            self.attachments.storage_paths().await?.into_iter().collect();

        let mut report = SweepReport::default();
        for entry in self.storage.list("").await? {
            if entry.is_directory {
                continue;
            }
            report.scanned += 1;
            if referenced.contains(&entry.path) {
                continue;
            }
            match self.storage.delete(&entry.path).await {
                Ok(_) => report.removed += 1,
                Err(e) => {
                    report.failed += 1;
                    warn!(path = %entry.path, error = %e, "Failed to remove orphaned file");
                }
            }
        }

        info!(
            scanned = report.scanned,
            removed = report.removed,
            failed = report.failed,
            "Orphan sweep complete"
        );
        Ok(report)
    }
}
