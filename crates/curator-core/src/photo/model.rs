//! Staged photo domain models.

use serde::{Deserialize, Serialize};

/// A photo awaiting an approve/reject decision before publication.
///
/// Immutable once fetched. The `ulid` is the opaque identifier the remote
/// service uses to key decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedPhoto {
    /// Unique identifier (ULID issued by the server)
    pub ulid: String,
    /// Storage path on the server
    pub path: String,
    /// Display name
    pub filename: String,
    /// Remote URL of the full-size image
    pub url: String,
    /// Size in bytes
    pub size: u64,
}

impl StagedPhoto {
    /// Size in megabytes (1 MB = 1024 * 1024 bytes).
    pub fn size_megabytes(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }
}

/// One page of the staging queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingPage {
    pub photos: Vec<StagedPhoto>,
    /// Photos still waiting in staging on the server, including this page
    #[serde(default)]
    pub total_remaining: u64,
}
