//! In-memory sync backend

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ProgressRecord, ProgressSnapshot, RemoteSync, Result, SyncError, UserId, UserPreferences};

#[derive(Debug, Default)]
struct MemoryState {
    identity: Option<UserId>,
    profiles: HashMap<UserId, UserPreferences>,
    progress: HashMap<UserId, Vec<ProgressRecord>>,
}

/// Keeps everything in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemorySync {
    state: Mutex<MemoryState>,
    fail: AtomicBool,
    progress_saves: AtomicU32,
}

impl MemorySync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate progress rows for a user
    pub fn with_progress(mut self, user: &UserId, records: Vec<ProgressRecord>) -> Self {
        self.state.get_mut().progress.insert(user.clone(), records);
        self
    }

    pub fn with_profile(mut self, user: &UserId, prefs: UserPreferences) -> Self {
        self.state.get_mut().profiles.insert(user.clone(), prefs);
        self
    }

    pub fn with_identity(mut self, user: UserId) -> Self {
        self.state.get_mut().identity = Some(user);
        self
    }

    /// Make every call fail until switched back
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of `save_progress` calls that reached the backend
    pub fn progress_save_count(&self) -> u32 {
        self.progress_saves.load(Ordering::SeqCst)
    }

    pub async fn stored_progress(&self, user: &UserId) -> Vec<ProgressRecord> {
        self.state
            .lock()
            .await
            .progress
            .get(user)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn stored_profile(&self, user: &UserId) -> Option<UserPreferences> {
        self.state.lock().await.profiles.get(user).cloned()
    }

    fn check(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(SyncError::Unavailable("memory backend switched off".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteSync for MemorySync {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn resolve_identity(&self) -> Result<UserId> {
        self.check()?;
        let mut state = self.state.lock().await;
        let user = state.identity.get_or_insert_with(UserId::new_anonymous);
        Ok(user.clone())
    }

    async fn load_profile(&self, user: &UserId) -> Result<Option<UserPreferences>> {
        self.check()?;
        Ok(self.state.lock().await.profiles.get(user).cloned())
    }

    async fn save_profile(&self, user: &UserId, prefs: &UserPreferences) -> Result<()> {
        self.check()?;
        self.state
            .lock()
            .await
            .profiles
            .insert(user.clone(), prefs.clone());
        Ok(())
    }

    async fn load_progress(&self, user: &UserId) -> Result<Vec<ProgressRecord>> {
        self.check()?;
        Ok(self.stored_progress(user).await)
    }

    async fn save_progress(&self, user: &UserId, snapshot: &ProgressSnapshot) -> Result<()> {
        self.progress_saves.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        if snapshot.completed_concept_ids.is_empty() {
            return Ok(());
        }
        self.state
            .lock()
            .await
            .progress
            .insert(user.clone(), snapshot.records());
        Ok(())
    }
}
