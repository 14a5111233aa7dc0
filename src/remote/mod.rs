//! Remote persistence for DSAFlow
//!
//! This module provides:
//! - The `RemoteSync` seam the progress tracker and session write through
//! - A file-backed backend for offline use
//! - A REST backend speaking the hosted database's PostgREST dialect
//! - An in-memory backend for ephemeral sessions and tests

pub mod file;
pub mod http;
pub mod memory;
pub mod models;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{SyncBackend, SyncSettings};

pub use file::FileSync;
pub use http::HttpSync;
pub use memory::MemorySync;
pub use models::*;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication failed")]
    AuthFailed,

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Invalid sync configuration: {0}")]
    InvalidConfig(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, SyncError>;

/// Durable store for identity, preferences and progress.
///
/// Every write is an upsert; callers send full state so later writes win.
#[async_trait]
pub trait RemoteSync: Send + Sync {
    /// Short backend name for logs
    fn name(&self) -> &'static str;

    /// Return the current identity, creating an anonymous one on first use.
    /// Calling it again returns the same id.
    async fn resolve_identity(&self) -> Result<UserId>;

    async fn load_profile(&self, user: &UserId) -> Result<Option<UserPreferences>>;

    async fn save_profile(&self, user: &UserId, prefs: &UserPreferences) -> Result<()>;

    async fn load_progress(&self, user: &UserId) -> Result<Vec<ProgressRecord>>;

    /// Upsert one completed row per concept. A snapshot with no completed
    /// concepts writes nothing.
    async fn save_progress(&self, user: &UserId, snapshot: &ProgressSnapshot) -> Result<()>;
}

/// Build the configured backend
pub fn connect(settings: &SyncSettings, data_dir: &Path) -> Result<Arc<dyn RemoteSync>> {
    let backend: Arc<dyn RemoteSync> = match settings.backend {
        SyncBackend::File => Arc::new(FileSync::new(data_dir.join("remote"))),
        SyncBackend::Http => Arc::new(HttpSync::new(settings, data_dir)?),
        SyncBackend::Memory => Arc::new(MemorySync::new()),
    };
    log::debug!("Using {} sync backend", backend.name());
    Ok(backend)
}
