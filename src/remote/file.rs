use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{ProgressRecord, ProgressSnapshot, RemoteSync, Result, UserId, UserPreferences};

/// Sync backend writing JSON files under a base directory:
/// `identity.json`, `profiles/{id}.json` and `progress/{id}.json`.
pub struct FileSync {
    base_path: PathBuf,
}

impl FileSync {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn identity_path(&self) -> PathBuf {
        self.base_path.join("identity.json")
    }

    fn profile_path(&self, user: &UserId) -> PathBuf {
        self.base_path.join("profiles").join(format!("{}.json", user))
    }

    fn progress_path(&self, user: &UserId) -> PathBuf {
        self.base_path.join("progress").join(format!("{}.json", user))
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(value)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[async_trait]
impl RemoteSync for FileSync {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn resolve_identity(&self) -> Result<UserId> {
        let path = self.identity_path();
        if let Some(user) = Self::read_json::<UserId>(&path)? {
            return Ok(user);
        }

        let user = UserId::new_anonymous();
        Self::write_json(&path, &user)?;
        log::info!("Created anonymous identity {}", user);
        Ok(user)
    }

    async fn load_profile(&self, user: &UserId) -> Result<Option<UserPreferences>> {
        Self::read_json(&self.profile_path(user))
    }

    async fn save_profile(&self, user: &UserId, prefs: &UserPreferences) -> Result<()> {
        Self::write_json(&self.profile_path(user), prefs)
    }

    async fn load_progress(&self, user: &UserId) -> Result<Vec<ProgressRecord>> {
        Ok(Self::read_json(&self.progress_path(user))?.unwrap_or_default())
    }

    async fn save_progress(&self, user: &UserId, snapshot: &ProgressSnapshot) -> Result<()> {
        if snapshot.completed_concept_ids.is_empty() {
            return Ok(());
        }

        let path = self.progress_path(user);
        let mut rows: Vec<ProgressRecord> = Self::read_json(&path)?.unwrap_or_default();

        // Upsert keyed on concept id
        for record in snapshot.records() {
            match rows.iter_mut().find(|r| r.concept_id == record.concept_id) {
                Some(existing) => *existing = record,
                None => rows.push(record),
            }
        }

        Self::write_json(&path, &rows)?;
        log::debug!("Saved {} progress rows for {}", rows.len(), user);
        Ok(())
    }
}
