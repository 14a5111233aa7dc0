//! Data exchanged with the remote sync backend

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anonymous learner identity issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Provision a fresh random identity
    pub fn new_anonymous() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Answers collected during onboarding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// 12-hour clock time, e.g. "7:00 AM"
    pub wake_time: String,
    /// 12-hour clock time, e.g. "11:00 PM"
    pub sleep_time: String,
    /// Self-rated level, "1" (beginner) to "4" (advanced)
    pub dsa_level: String,
    #[serde(default)]
    pub onboarding_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// What the learner is preparing for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

impl UserPreferences {
    pub fn new(wake_time: impl Into<String>, sleep_time: impl Into<String>, dsa_level: impl Into<String>) -> Self {
        Self {
            wake_time: wake_time.into(),
            sleep_time: sleep_time.into(),
            dsa_level: dsa_level.into(),
            onboarding_complete: false,
            name: None,
            goal: None,
        }
    }
}

/// Status column of a remote progress row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    Completed,
    /// Any status this version does not understand; ignored when seeding
    #[serde(other)]
    Unknown,
}

/// One remote progress row: a concept and where the learner is with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub concept_id: String,
    pub status: ProgressStatus,
}

impl ProgressRecord {
    pub fn completed(concept_id: impl Into<String>) -> Self {
        Self {
            concept_id: concept_id.into(),
            status: ProgressStatus::Completed,
        }
    }
}

/// Full progress payload sent on every sync; later writes replace earlier ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub completed_concept_ids: Vec<String>,
    pub completed_packet_ids: Vec<String>,
    pub current_concept_id: String,
}

impl ProgressSnapshot {
    /// One completed row per completed concept
    pub fn records(&self) -> Vec<ProgressRecord> {
        self.completed_concept_ids
            .iter()
            .map(ProgressRecord::completed)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_is_tolerated() {
        let record: ProgressRecord =
            serde_json::from_str(r#"{"conceptId":"arrays","status":"in_review"}"#).unwrap();
        assert_eq!(record.status, ProgressStatus::Unknown);

        let record: ProgressRecord =
            serde_json::from_str(r#"{"conceptId":"arrays","status":"completed"}"#).unwrap();
        assert_eq!(record, ProgressRecord::completed("arrays"));
    }

    #[test]
    fn test_preferences_defaults() {
        let prefs: UserPreferences = serde_json::from_str(
            r#"{"wakeTime":"7:00 AM","sleepTime":"11:00 PM","dsaLevel":"2"}"#,
        )
        .unwrap();
        assert!(!prefs.onboarding_complete);
        assert_eq!(prefs.name, None);
    }
}
