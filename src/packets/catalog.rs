//! Lookup over a static packet table

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

use super::builtin::PACKETS;
use super::models::{Packet, PacketType, PACKETS_PER_CONCEPT};
use crate::graph::ConceptGraph;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate packet id: {0}")]
    DuplicatePacket(String),

    #[error("Packet {packet} belongs to unknown concept {concept}")]
    UnknownConcept { packet: String, concept: String },

    #[error("Concept {concept} has {found} packets, expected 5")]
    WrongPacketCount { concept: String, found: usize },

    #[error("Concept {concept} has its {position} packet of type {found}, expected {expected}")]
    WrongPacketOrder {
        concept: String,
        position: usize,
        found: PacketType,
        expected: PacketType,
    },
}

/// Indexed view over a static packet table
#[derive(Debug)]
pub struct PacketCatalog {
    packets: &'static [Packet],
    by_id: HashMap<&'static str, usize>,
    /// Positions in insertion order for each concept
    by_concept: HashMap<&'static str, Vec<usize>>,
}

impl PacketCatalog {
    pub fn new(packets: &'static [Packet]) -> Self {
        let mut by_id = HashMap::with_capacity(packets.len());
        let mut by_concept: HashMap<&'static str, Vec<usize>> = HashMap::new();

        for (pos, packet) in packets.iter().enumerate() {
            by_id.entry(packet.id).or_insert(pos);
            by_concept.entry(packet.concept_id).or_default().push(pos);
        }

        Self {
            packets,
            by_id,
            by_concept,
        }
    }

    /// The built-in catalog
    pub fn reference() -> &'static PacketCatalog {
        static CATALOG: OnceLock<PacketCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| PacketCatalog::new(PACKETS))
    }

    pub fn packets(&self) -> &'static [Packet] {
        self.packets
    }

    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    pub fn packet_by_id(&self, id: &str) -> Option<&'static Packet> {
        let packets = self.packets;
        self.by_id.get(id).map(|&pos| &packets[pos])
    }

    /// Packets of a concept in catalog order; empty when the concept has no content yet
    pub fn packets_for_concept(&self, concept_id: &str) -> Vec<&'static Packet> {
        let packets = self.packets;
        self.by_concept
            .get(concept_id)
            .map(|positions| positions.iter().map(|&pos| &packets[pos]).collect())
            .unwrap_or_default()
    }

    pub fn has_content(&self, concept_id: &str) -> bool {
        self.by_concept.contains_key(concept_id)
    }

    /// Total expected time for a concept's packets, in seconds
    pub fn total_duration(&self, concept_id: &str) -> u32 {
        self.packets_for_concept(concept_id)
            .iter()
            .map(|p| p.duration)
            .sum()
    }

    /// Check every packet belongs to a known concept and that each concept
    /// with content has exactly one packet of each type, in delivery order.
    pub fn validate(&self, graph: &ConceptGraph) -> Result<(), CatalogError> {
        if self.by_id.len() != self.packets.len() {
            let mut seen = std::collections::HashSet::new();
            for packet in self.packets {
                if !seen.insert(packet.id) {
                    return Err(CatalogError::DuplicatePacket(packet.id.to_string()));
                }
            }
        }

        for packet in self.packets {
            if !graph.contains(packet.concept_id) {
                return Err(CatalogError::UnknownConcept {
                    packet: packet.id.to_string(),
                    concept: packet.concept_id.to_string(),
                });
            }
        }

        for node in graph.nodes() {
            let packets = self.packets_for_concept(node.id);
            if packets.is_empty() {
                continue;
            }
            if packets.len() != PACKETS_PER_CONCEPT {
                return Err(CatalogError::WrongPacketCount {
                    concept: node.id.to_string(),
                    found: packets.len(),
                });
            }
            for (position, (packet, expected)) in packets.iter().zip(PacketType::ALL).enumerate() {
                if packet.packet_type() != expected {
                    return Err(CatalogError::WrongPacketOrder {
                        concept: node.id.to_string(),
                        position,
                        found: packet.packet_type(),
                        expected,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::models::{PacketContent, RecallContent};

    const fn recall(id: &'static str, concept_id: &'static str) -> Packet {
        Packet {
            id,
            concept_id,
            title: "Memory Check",
            duration: 60,
            content: PacketContent::Recall(RecallContent {
                question: "",
                answer: "",
                follow_up: "",
            }),
        }
    }

    static SHORT: &[Packet] = &[recall("arrays-recall", "arrays")];

    static ORPHAN: &[Packet] = &[recall("quantum-recall", "quantum")];

    static DUPLICATE: &[Packet] = &[recall("arrays-recall", "arrays"), recall("arrays-recall", "arrays")];

    #[test]
    fn test_reference_catalog_is_valid() {
        let catalog = PacketCatalog::reference();
        assert_eq!(catalog.validate(ConceptGraph::reference()), Ok(()));
        assert_eq!(catalog.len() % PACKETS_PER_CONCEPT, 0);
    }

    #[test]
    fn test_packets_for_concept_in_catalog_order() {
        let catalog = PacketCatalog::reference();

        let ids: Vec<&str> = catalog
            .packets_for_concept("arrays")
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "arrays-concept",
                "arrays-visual",
                "arrays-challenge",
                "arrays-connection",
                "arrays-recall",
            ]
        );
    }

    #[test]
    fn test_concept_without_content() {
        let catalog = PacketCatalog::reference();

        assert!(catalog.packets_for_concept("network-flow").is_empty());
        assert!(!catalog.has_content("network-flow"));
        assert_eq!(catalog.total_duration("network-flow"), 0);
    }

    #[test]
    fn test_packet_by_id() {
        let catalog = PacketCatalog::reference();

        let packet = catalog.packet_by_id("binary-search-visual").unwrap();
        assert_eq!(packet.concept_id, "binary-search");
        assert_eq!(packet.packet_type(), PacketType::Visual);
        match &packet.content {
            PacketContent::Visual(visual) => assert_eq!(visual.target, Some(13)),
            other => panic!("unexpected content: {:?}", other),
        }

        assert!(catalog.packet_by_id("arrays-quiz").is_none());
    }

    #[test]
    fn test_total_duration() {
        let catalog = PacketCatalog::reference();
        // 60 + 90 + 300 + 60 + 60
        assert_eq!(catalog.total_duration("arrays"), 570);
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let graph = ConceptGraph::reference();

        assert_eq!(
            PacketCatalog::new(SHORT).validate(graph),
            Err(CatalogError::WrongPacketCount {
                concept: "arrays".to_string(),
                found: 1,
            })
        );
        assert_eq!(
            PacketCatalog::new(ORPHAN).validate(graph),
            Err(CatalogError::UnknownConcept {
                packet: "quantum-recall".to_string(),
                concept: "quantum".to_string(),
            })
        );
        assert_eq!(
            PacketCatalog::new(DUPLICATE).validate(graph),
            Err(CatalogError::DuplicatePacket("arrays-recall".to_string()))
        );
    }
}
