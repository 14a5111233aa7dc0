use serde::{Deserialize, Serialize};

use crate::graph::DEFAULT_CONCEPT_ID;
use crate::remote::ProgressSnapshot;

/// A learner's position in the curriculum.
///
/// Both lists only ever grow. A concept appears in `completed_concept_ids`
/// only once all of its packets are in `completed_packet_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub completed_concept_ids: Vec<String>,
    pub completed_packet_ids: Vec<String>,
    pub current_concept_id: String,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            completed_concept_ids: Vec::new(),
            completed_packet_ids: Vec::new(),
            current_concept_id: DEFAULT_CONCEPT_ID.to_string(),
        }
    }
}

impl ProgressState {
    pub fn is_concept_completed(&self, concept_id: &str) -> bool {
        self.completed_concept_ids.iter().any(|c| c == concept_id)
    }

    pub fn is_packet_completed(&self, packet_id: &str) -> bool {
        self.completed_packet_ids.iter().any(|p| p == packet_id)
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            completed_concept_ids: self.completed_concept_ids.clone(),
            completed_packet_ids: self.completed_packet_ids.clone(),
            current_concept_id: self.current_concept_id.clone(),
        }
    }
}

/// What a call to `complete_packet` did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum CompletionOutcome {
    /// The packet was already recorded; nothing changed
    AlreadyCompleted,
    /// The packet was recorded; the concept still has packets left
    #[serde(rename_all = "camelCase")]
    Recorded { completed_in_concept: usize },
    /// The packet finished its concept and the learner moved on
    #[serde(rename_all = "camelCase")]
    ConceptCompleted {
        concept_id: String,
        next_concept_id: String,
    },
}

/// Progress numbers shown on the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub completed_concepts: usize,
    pub total_concepts: usize,
    /// Share of the graph completed, rounded to a whole percent
    pub mastery_percent: u32,
    pub current_concept_id: String,
    pub current_packets_completed: usize,
    pub current_packets_total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_starts_at_arrays() {
        let state = ProgressState::default();
        assert_eq!(state.current_concept_id, "arrays");
        assert!(state.completed_concept_ids.is_empty());
    }

    #[test]
    fn test_outcome_serialization() {
        let value = serde_json::to_value(CompletionOutcome::ConceptCompleted {
            concept_id: "arrays".to_string(),
            next_concept_id: "strings".to_string(),
        })
        .unwrap();
        assert_eq!(value["outcome"], "conceptCompleted");
        assert_eq!(value["nextConceptId"], "strings");
    }
}
