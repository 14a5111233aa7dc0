use std::sync::Arc;

use tokio::task::JoinHandle;

use super::models::{CompletionOutcome, ProgressState, ProgressSummary};
use crate::graph::{ConceptGraph, NodeStatus, DEFAULT_CONCEPT_ID};
use crate::packets::{Packet, PacketCatalog, PACKETS_PER_CONCEPT};
use crate::remote::{ProgressRecord, ProgressStatus, RemoteSync, UserId};

/// Pick the concept to study next: the first concept in graph order that is
/// not completed and whose prerequisites all are. Falls back to the default
/// starting concept when nothing qualifies.
pub fn next_concept<S: AsRef<str>>(graph: &ConceptGraph, completed: &[S]) -> &'static str {
    let is_completed = |id: &str| completed.iter().any(|c| c.as_ref() == id);

    let candidate = graph
        .nodes()
        .iter()
        .find(|node| !is_completed(node.id) && node.is_unlocked_by(completed));

    match candidate {
        Some(node) => node.id,
        None => {
            if is_completed(DEFAULT_CONCEPT_ID) {
                log::warn!(
                    "No unlocked concept left; falling back to already completed {}",
                    DEFAULT_CONCEPT_ID
                );
            }
            DEFAULT_CONCEPT_ID
        }
    }
}

/// Owns a learner's progress and applies packet completions to it
pub struct ProgressTracker {
    graph: &'static ConceptGraph,
    catalog: &'static PacketCatalog,
    state: ProgressState,
    user: Option<UserId>,
    sync: Option<Arc<dyn RemoteSync>>,
    pending: Vec<JoinHandle<()>>,
}

impl ProgressTracker {
    pub fn new(graph: &'static ConceptGraph, catalog: &'static PacketCatalog) -> Self {
        Self {
            graph,
            catalog,
            state: ProgressState::default(),
            user: None,
            sync: None,
            pending: Vec::new(),
        }
    }

    /// Tracker over the built-in graph and catalog
    pub fn reference() -> Self {
        Self::new(ConceptGraph::reference(), PacketCatalog::reference())
    }

    pub fn with_sync(mut self, sync: Arc<dyn RemoteSync>) -> Self {
        self.sync = Some(sync);
        self
    }

    pub fn set_user(&mut self, user: Option<UserId>) {
        self.user = user;
    }

    pub fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    pub fn graph(&self) -> &'static ConceptGraph {
        self.graph
    }

    pub fn catalog(&self) -> &'static PacketCatalog {
        self.catalog
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn current_concept(&self) -> &str {
        &self.state.current_concept_id
    }

    /// Record a finished packet.
    ///
    /// The packet's catalog entry decides which concept it counts towards.
    /// When that concept reaches its full set of packets it is marked
    /// completed, the current concept advances and the new state is
    /// written to the remote backend in the background.
    pub fn complete_packet(&mut self, packet_id: &str, concept_id: &str) -> CompletionOutcome {
        if self.state.is_packet_completed(packet_id) {
            log::debug!("Packet {} already completed", packet_id);
            return CompletionOutcome::AlreadyCompleted;
        }

        let owner: &str = match self.catalog.packet_by_id(packet_id) {
            Some(packet) => {
                if packet.concept_id != concept_id {
                    log::warn!(
                        "Packet {} belongs to {}, not {}; counting it for {}",
                        packet_id,
                        packet.concept_id,
                        concept_id,
                        packet.concept_id
                    );
                }
                packet.concept_id
            }
            None => {
                log::warn!("Completing unknown packet {} for {}", packet_id, concept_id);
                concept_id
            }
        };

        self.state.completed_packet_ids.push(packet_id.to_string());
        let completed_in_concept = self.completed_in_concept(owner);

        if completed_in_concept < PACKETS_PER_CONCEPT || self.state.is_concept_completed(owner) {
            return CompletionOutcome::Recorded { completed_in_concept };
        }

        self.state.completed_concept_ids.push(owner.to_string());
        let next = next_concept(self.graph, &self.state.completed_concept_ids);
        self.state.current_concept_id = next.to_string();
        log::info!("Completed concept {}, next up {}", owner, next);

        self.spawn_sync();

        CompletionOutcome::ConceptCompleted {
            concept_id: owner.to_string(),
            next_concept_id: next.to_string(),
        }
    }

    /// Number of the concept's catalog packets the learner has finished
    pub fn completed_in_concept(&self, concept_id: &str) -> usize {
        self.catalog
            .packets_for_concept(concept_id)
            .iter()
            .filter(|packet| self.state.is_packet_completed(packet.id))
            .count()
    }

    /// First packet of the current concept not yet completed
    pub fn next_packet(&self) -> Option<&'static Packet> {
        self.catalog
            .packets_for_concept(&self.state.current_concept_id)
            .into_iter()
            .find(|packet| !self.state.is_packet_completed(packet.id))
    }

    pub fn node_status(&self, concept_id: &str) -> NodeStatus {
        if self.state.is_concept_completed(concept_id) {
            return NodeStatus::Completed;
        }
        if self.state.current_concept_id == concept_id {
            return NodeStatus::Current;
        }
        match self.graph.lookup(concept_id) {
            Some(node) if node.is_unlocked_by(&self.state.completed_concept_ids) => {
                NodeStatus::Unlocked
            }
            _ => NodeStatus::Locked,
        }
    }

    pub fn summary(&self) -> ProgressSummary {
        let completed_concepts = self.state.completed_concept_ids.len();
        let total_concepts = self.graph.len();
        let mastery_percent = if total_concepts == 0 {
            0
        } else {
            (completed_concepts as f64 / total_concepts as f64 * 100.0).round() as u32
        };

        ProgressSummary {
            completed_concepts,
            total_concepts,
            mastery_percent,
            current_concept_id: self.state.current_concept_id.clone(),
            current_packets_completed: self.completed_in_concept(&self.state.current_concept_id),
            current_packets_total: self
                .catalog
                .packets_for_concept(&self.state.current_concept_id)
                .len(),
        }
    }

    /// Replace the state with one rebuilt from remote progress rows.
    ///
    /// Rows for unknown concepts, repeated rows and rows not marked completed
    /// are dropped. Packets of every completed concept are marked completed.
    pub fn seed(&mut self, records: &[ProgressRecord]) {
        let mut state = ProgressState::default();

        for record in records {
            if record.status != ProgressStatus::Completed {
                continue;
            }
            if !self.graph.contains(&record.concept_id) {
                log::warn!("Dropping progress for unknown concept {}", record.concept_id);
                continue;
            }
            if state.is_concept_completed(&record.concept_id) {
                continue;
            }
            self.mark_concept(&mut state, &record.concept_id);
        }

        state.current_concept_id = next_concept(self.graph, &state.completed_concept_ids).to_string();
        log::info!(
            "Seeded progress with {} completed concepts, current {}",
            state.completed_concept_ids.len(),
            state.current_concept_id
        );
        self.state = state;
    }

    /// Fold a locally cached state into this one. Nothing already recorded is lost.
    pub fn merge(&mut self, other: &ProgressState) {
        let mut state = std::mem::take(&mut self.state);

        for packet_id in &other.completed_packet_ids {
            if !state.is_packet_completed(packet_id) {
                state.completed_packet_ids.push(packet_id.clone());
            }
        }

        for concept_id in &other.completed_concept_ids {
            if self.graph.contains(concept_id) && !state.is_concept_completed(concept_id) {
                self.mark_concept(&mut state, concept_id);
            }
        }

        state.current_concept_id = next_concept(self.graph, &state.completed_concept_ids).to_string();
        self.state = state;
    }

    fn mark_concept(&self, state: &mut ProgressState, concept_id: &str) {
        state.completed_concept_ids.push(concept_id.to_string());
        for packet in self.catalog.packets_for_concept(concept_id) {
            if !state.is_packet_completed(packet.id) {
                state.completed_packet_ids.push(packet.id.to_string());
            }
        }
    }

    /// Fire-and-forget write of the full snapshot
    fn spawn_sync(&mut self) {
        let (Some(user), Some(sync)) = (self.user.clone(), self.sync.clone()) else {
            log::debug!("No user or sync backend, skipping progress sync");
            return;
        };

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                log::warn!("No async runtime, skipping progress sync");
                return;
            }
        };

        self.pending.retain(|handle| !handle.is_finished());

        let snapshot = self.state.snapshot();
        let handle = runtime.spawn(async move {
            match sync.save_progress(&user, &snapshot).await {
                Ok(()) => log::debug!("Synced progress to {} backend", sync.name()),
                Err(e) => log::error!("Failed to sync progress: {}", e),
            }
        });
        self.pending.push(handle);
    }

    /// Wait for background writes started so far
    pub async fn flush_pending_syncs(&mut self) {
        for handle in self.pending.drain(..) {
            if let Err(e) = handle.await {
                log::error!("Progress sync task failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ConceptNode;
    use crate::remote::MemorySync;

    const ARRAYS: [&str; 5] = [
        "arrays-concept",
        "arrays-visual",
        "arrays-challenge",
        "arrays-connection",
        "arrays-recall",
    ];

    fn complete_all(tracker: &mut ProgressTracker, concept_id: &str) -> CompletionOutcome {
        let ids: Vec<&str> = tracker
            .catalog()
            .packets_for_concept(concept_id)
            .iter()
            .map(|p| p.id)
            .collect();
        let mut outcome = CompletionOutcome::AlreadyCompleted;
        for id in ids {
            outcome = tracker.complete_packet(id, concept_id);
        }
        outcome
    }

    #[test]
    fn test_next_concept_on_fresh_start() {
        let graph = ConceptGraph::reference();
        assert_eq!(next_concept::<&str>(graph, &[]), "arrays");
        assert_eq!(next_concept(graph, &["arrays"]), "strings");
        assert_eq!(next_concept(graph, &["arrays", "strings"]), "hashmaps");
    }

    #[test]
    fn test_next_concept_skips_locked() {
        let graph = ConceptGraph::reference();
        // Everything but trees' prerequisites done up to recursion
        let completed = [
            "arrays",
            "strings",
            "hashmaps",
            "two-pointers",
            "sliding-window",
            "binary-search",
            "stack",
            "queue",
            "recursion",
        ];
        // trees needs linked-list, so linked-list comes first
        assert_eq!(next_concept(graph, &completed), "linked-list");
    }

    #[test]
    fn test_next_concept_falls_back_when_everything_done() {
        let graph = ConceptGraph::reference();
        let all: Vec<&str> = graph.nodes().iter().map(|n| n.id).collect();
        assert_eq!(next_concept(graph, &all), DEFAULT_CONCEPT_ID);
    }

    #[test]
    fn test_next_concept_result_is_unlocked() {
        let graph = ConceptGraph::reference();
        let mut completed: Vec<&str> = Vec::new();

        for _ in 0..graph.len() {
            let next = next_concept(graph, &completed);
            let node = graph.lookup(next).unwrap();
            assert!(!completed.contains(&next));
            assert!(node.is_unlocked_by(&completed));
            completed.push(next);
        }
        assert_eq!(completed.len(), graph.len());
    }

    #[test]
    fn test_concept_completes_after_five_packets() {
        let mut tracker = ProgressTracker::reference();

        for (i, id) in ARRAYS.iter().take(4).enumerate() {
            assert_eq!(
                tracker.complete_packet(id, "arrays"),
                CompletionOutcome::Recorded { completed_in_concept: i + 1 }
            );
        }
        assert!(tracker.state().completed_concept_ids.is_empty());

        assert_eq!(
            tracker.complete_packet("arrays-recall", "arrays"),
            CompletionOutcome::ConceptCompleted {
                concept_id: "arrays".to_string(),
                next_concept_id: "strings".to_string(),
            }
        );
        assert_eq!(tracker.state().completed_concept_ids, vec!["arrays"]);
        assert_eq!(tracker.current_concept(), "strings");
    }

    #[test]
    fn test_double_completion_is_idempotent() {
        let mut tracker = ProgressTracker::reference();

        tracker.complete_packet("arrays-concept", "arrays");
        let before = tracker.state().clone();

        assert_eq!(
            tracker.complete_packet("arrays-concept", "arrays"),
            CompletionOutcome::AlreadyCompleted
        );
        assert_eq!(tracker.state(), &before);
        assert_eq!(tracker.state().completed_packet_ids, vec!["arrays-concept"]);
    }

    #[test]
    fn test_state_only_grows() {
        let mut tracker = ProgressTracker::reference();
        let mut previous = tracker.state().clone();

        for concept in ["arrays", "strings", "hashmaps"] {
            let packets = tracker.catalog().packets_for_concept(concept);
            for packet in packets {
                tracker.complete_packet(packet.id, concept);
                let state = tracker.state();
                assert!(state.completed_packet_ids.starts_with(&previous.completed_packet_ids));
                assert!(state.completed_concept_ids.starts_with(&previous.completed_concept_ids));
                previous = state.clone();
            }
        }
        assert_eq!(previous.completed_concept_ids, vec!["arrays", "strings", "hashmaps"]);
    }

    #[test]
    fn test_mismatched_concept_counts_for_catalog_owner() {
        let mut tracker = ProgressTracker::reference();

        tracker.complete_packet("strings-concept", "arrays");

        assert_eq!(tracker.completed_in_concept("arrays"), 0);
        assert_eq!(tracker.completed_in_concept("strings"), 1);
    }

    #[test]
    fn test_unknown_packet_is_recorded_but_never_completes() {
        let mut tracker = ProgressTracker::reference();

        assert_eq!(
            tracker.complete_packet("arrays-bonus", "arrays"),
            CompletionOutcome::Recorded { completed_in_concept: 0 }
        );
        assert!(tracker.state().is_packet_completed("arrays-bonus"));
    }

    #[test]
    fn test_concept_without_content_never_completes() {
        let mut tracker = ProgressTracker::reference();
        tracker.complete_packet("network-flow-1", "network-flow");
        assert!(!tracker.state().is_concept_completed("network-flow"));
    }

    #[test]
    fn test_node_status() {
        let mut tracker = ProgressTracker::reference();
        complete_all(&mut tracker, "arrays");

        assert_eq!(tracker.node_status("arrays"), NodeStatus::Completed);
        assert_eq!(tracker.node_status("strings"), NodeStatus::Current);
        assert_eq!(tracker.node_status("hashmaps"), NodeStatus::Unlocked);
        assert_eq!(tracker.node_status("trees"), NodeStatus::Locked);
        assert_eq!(tracker.node_status("quantum"), NodeStatus::Locked);
    }

    #[test]
    fn test_summary() {
        let mut tracker = ProgressTracker::reference();
        complete_all(&mut tracker, "arrays");
        tracker.complete_packet("strings-concept", "strings");

        let summary = tracker.summary();
        assert_eq!(summary.completed_concepts, 1);
        assert_eq!(summary.total_concepts, 34);
        assert_eq!(summary.mastery_percent, 3);
        assert_eq!(summary.current_concept_id, "strings");
        assert_eq!(summary.current_packets_completed, 1);
        assert_eq!(summary.current_packets_total, 5);
        assert_eq!(tracker.next_packet().map(|p| p.id), Some("strings-visual"));
    }

    #[test]
    fn test_seed_keeps_completion_invariant() {
        let mut tracker = ProgressTracker::reference();
        tracker.seed(&[
            ProgressRecord::completed("arrays"),
            ProgressRecord::completed("arrays"),
            ProgressRecord::completed("quantum"),
            ProgressRecord {
                concept_id: "strings".to_string(),
                status: ProgressStatus::Unknown,
            },
        ]);

        let state = tracker.state();
        assert_eq!(state.completed_concept_ids, vec!["arrays"]);
        assert_eq!(state.completed_packet_ids, ARRAYS.to_vec());
        assert_eq!(state.current_concept_id, "strings");
    }

    #[test]
    fn test_merge_is_a_union() {
        let mut tracker = ProgressTracker::reference();
        tracker.seed(&[ProgressRecord::completed("arrays")]);

        let cached = ProgressState {
            completed_concept_ids: vec!["strings".to_string()],
            completed_packet_ids: vec!["hashmaps-concept".to_string()],
            current_concept_id: "hashmaps".to_string(),
        };
        tracker.merge(&cached);

        let state = tracker.state();
        assert_eq!(state.completed_concept_ids, vec!["arrays", "strings"]);
        assert!(state.is_packet_completed("strings-recall"));
        assert!(state.is_packet_completed("hashmaps-concept"));
        assert_eq!(state.current_concept_id, "hashmaps");
    }

    #[tokio::test]
    async fn test_concept_completion_syncs_snapshot() {
        let sync = Arc::new(MemorySync::new());
        let user = UserId::new("learner");
        let mut tracker = ProgressTracker::reference().with_sync(sync.clone());
        tracker.set_user(Some(user.clone()));

        tracker.complete_packet("arrays-concept", "arrays");
        tracker.flush_pending_syncs().await;
        assert_eq!(sync.progress_save_count(), 0);

        complete_all(&mut tracker, "arrays");
        tracker.flush_pending_syncs().await;

        assert_eq!(sync.progress_save_count(), 1);
        assert_eq!(
            sync.stored_progress(&user).await,
            vec![ProgressRecord::completed("arrays")]
        );
    }

    #[tokio::test]
    async fn test_sync_failure_keeps_local_state() {
        let sync = Arc::new(MemorySync::new());
        sync.set_failing(true);
        let mut tracker = ProgressTracker::reference().with_sync(sync.clone());
        tracker.set_user(Some(UserId::new("learner")));

        let outcome = complete_all(&mut tracker, "arrays");
        tracker.flush_pending_syncs().await;

        assert!(matches!(outcome, CompletionOutcome::ConceptCompleted { .. }));
        assert_eq!(sync.progress_save_count(), 1);
        assert_eq!(tracker.state().completed_concept_ids, vec!["arrays"]);
    }

    #[tokio::test]
    async fn test_no_user_skips_sync() {
        let sync = Arc::new(MemorySync::new());
        let mut tracker = ProgressTracker::reference().with_sync(sync.clone());

        complete_all(&mut tracker, "arrays");
        tracker.flush_pending_syncs().await;

        assert_eq!(sync.progress_save_count(), 0);
    }

    static CHAIN: &[ConceptNode] = &[
        node("b", &["a"]),
        node("a", &[]),
        node("c", &["a", "b"]),
    ];

    const fn node(id: &'static str, dependencies: &'static [&'static str]) -> ConceptNode {
        ConceptNode {
            id,
            name: id,
            difficulty: 1,
            category: crate::graph::Category::Basics,
            dependencies,
            description: "",
        }
    }

    #[test]
    fn test_next_concept_follows_declaration_order() {
        let graph = ConceptGraph::new(CHAIN);
        assert_eq!(next_concept::<&str>(&graph, &[]), "a");
        assert_eq!(next_concept(&graph, &["a"]), "b");
        assert_eq!(next_concept(&graph, &["a", "b"]), "c");
        // Nothing left and the default id is not in this graph
        assert_eq!(next_concept(&graph, &["a", "b", "c"]), DEFAULT_CONCEPT_ID);
    }
}
