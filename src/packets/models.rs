//! Data models for learning packets

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of packets every concept is split into, one per [`PacketType`]
pub const PACKETS_PER_CONCEPT: usize = 5;

/// Kind of packet; the declaration order is the order they are delivered in a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PacketType {
    /// Short explanation with an analogy
    Concept,
    /// Interactive animation of the data structure or algorithm
    Visual,
    /// One multiple-choice question
    Challenge,
    /// Where the concept shows up in the real world
    Connection,
    /// End-of-day memory check
    Recall,
}

impl PacketType {
    pub const ALL: [PacketType; PACKETS_PER_CONCEPT] = [
        PacketType::Concept,
        PacketType::Visual,
        PacketType::Challenge,
        PacketType::Connection,
        PacketType::Recall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PacketType::Concept => "concept",
            PacketType::Visual => "visual",
            PacketType::Challenge => "challenge",
            PacketType::Connection => "connection",
            PacketType::Recall => "recall",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PacketType::Concept => "Concept",
            PacketType::Visual => "Visual",
            PacketType::Challenge => "Challenge",
            PacketType::Connection => "Connection",
            PacketType::Recall => "Recall",
        }
    }

    /// Position within the day's sequence (0-4)
    pub fn index(&self) -> usize {
        match self {
            PacketType::Concept => 0,
            PacketType::Visual => 1,
            PacketType::Challenge => 2,
            PacketType::Connection => 3,
            PacketType::Recall => 4,
        }
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptContent {
    pub explanation: &'static str,
    pub key_points: &'static [&'static str],
    pub analogy: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualContent {
    /// Animation key the front-end plays
    pub animation: &'static str,
    pub instruction: &'static str,
    pub interactable: bool,
    pub data: &'static [i64],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeContent {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct: &'static str,
    pub explanation: &'static str,
}

impl ChallengeContent {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct.eq_ignore_ascii_case(answer.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionExample {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionContent {
    pub examples: &'static [ConnectionExample],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecallContent {
    pub question: &'static str,
    pub answer: &'static str,
    pub follow_up: &'static str,
}

/// Packet payload, one shape per packet type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "camelCase")]
pub enum PacketContent {
    Concept(ConceptContent),
    Visual(VisualContent),
    Challenge(ChallengeContent),
    Connection(ConnectionContent),
    Recall(RecallContent),
}

impl PacketContent {
    pub fn packet_type(&self) -> PacketType {
        match self {
            PacketContent::Concept(_) => PacketType::Concept,
            PacketContent::Visual(_) => PacketType::Visual,
            PacketContent::Challenge(_) => PacketType::Challenge,
            PacketContent::Connection(_) => PacketType::Connection,
            PacketContent::Recall(_) => PacketType::Recall,
        }
    }
}

/// One atomic unit of learning content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Packet {
    pub id: &'static str,
    /// Owning concept; the only link between a packet and its concept
    pub concept_id: &'static str,
    pub title: &'static str,
    /// Expected time to finish, in seconds
    pub duration: u32,
    #[serde(flatten)]
    pub content: PacketContent,
}

impl Packet {
    pub fn packet_type(&self) -> PacketType {
        self.content.packet_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packet_serializes_type_tag_with_content() {
        let packet = Packet {
            id: "arrays-recall",
            concept_id: "arrays",
            title: "Memory Check",
            duration: 60,
            content: PacketContent::Recall(RecallContent {
                question: "Q",
                answer: "A",
                follow_up: "F",
            }),
        };

        let value = serde_json::to_value(&packet).unwrap();
        assert_eq!(value["conceptId"], "arrays");
        assert_eq!(value["type"], "recall");
        assert_eq!(value["content"]["followUp"], "F");
    }

    #[test]
    fn test_packet_type_order_matches_index() {
        for (i, packet_type) in PacketType::ALL.iter().enumerate() {
            assert_eq!(packet_type.index(), i);
        }
    }

    #[test]
    fn test_challenge_answer_check() {
        let challenge = ChallengeContent {
            question: "Index 3 of [2, 4, 6, 8, 10]?",
            options: &["6", "8", "4", "10"],
            correct: "8",
            explanation: "",
        };
        assert!(challenge.is_correct(" 8 "));
        assert!(!challenge.is_correct("6"));
    }
}
