use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::ProgressState;
use crate::remote::UserId;

const CACHE_FILE: &str = "progress-cache.json";

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CacheError>;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedProgress {
    user_id: Option<UserId>,
    state: ProgressState,
}

/// Local copy of the progress state, kept between CLI runs so packet-level
/// progress survives even though the backend only stores completed concepts.
pub struct ProgressCache {
    path: PathBuf,
}

impl ProgressCache {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            path: data_dir.join(CACHE_FILE),
        }
    }

    /// Cached state for `user`; `None` when nothing is cached or it belongs
    /// to someone else
    pub fn load(&self, user: Option<&UserId>) -> Result<Option<ProgressState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let cached: CachedProgress = serde_json::from_str(&content)?;

        if cached.user_id.as_ref() != user {
            log::debug!("Ignoring progress cache for a different user");
            return Ok(None);
        }
        Ok(Some(cached.state))
    }

    pub fn save(&self, user: Option<&UserId>, state: &ProgressState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let cached = CachedProgress {
            user_id: user.cloned(),
            state: state.clone(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&cached)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state() -> ProgressState {
        ProgressState {
            completed_concept_ids: vec!["arrays".to_string()],
            completed_packet_ids: vec!["arrays-concept".to_string()],
            current_concept_id: "strings".to_string(),
        }
    }

    #[test]
    fn test_roundtrip_for_same_user() {
        let temp = TempDir::new().unwrap();
        let cache = ProgressCache::new(temp.path().to_path_buf());
        let user = UserId::new("learner");

        assert!(cache.load(Some(&user)).unwrap().is_none());

        cache.save(Some(&user), &state()).unwrap();
        assert_eq!(cache.load(Some(&user)).unwrap(), Some(state()));
    }

    #[test]
    fn test_other_user_is_ignored() {
        let temp = TempDir::new().unwrap();
        let cache = ProgressCache::new(temp.path().to_path_buf());

        cache.save(Some(&UserId::new("a")), &state()).unwrap();

        assert!(cache.load(Some(&UserId::new("b"))).unwrap().is_none());
        assert!(cache.load(None).unwrap().is_none());
    }
}
