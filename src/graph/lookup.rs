//! Read-only access to a concept table

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use petgraph::graphmap::DiGraphMap;
use thiserror::Error;

use super::builtin::DSA_GRAPH;
use super::models::ConceptNode;

/// Concept a fresh learner starts on, and the fallback when nothing else is ready
pub const DEFAULT_CONCEPT_ID: &str = "arrays";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate concept id: {0}")]
    DuplicateConcept(String),

    #[error("Concept {concept} depends on unknown concept {dependency}")]
    UnknownDependency { concept: String, dependency: String },

    #[error("Concept {concept} has difficulty {difficulty}, expected 1-5")]
    InvalidDifficulty { concept: String, difficulty: u8 },

    #[error("Dependency cycle detected involving concept {0}")]
    Cycle(String),
}

/// Indexed view over a static concept table
#[derive(Debug)]
pub struct ConceptGraph {
    nodes: &'static [ConceptNode],
    /// First occurrence wins when ids collide; `validate` reports the collision
    index: HashMap<&'static str, usize>,
}

impl ConceptGraph {
    pub fn new(nodes: &'static [ConceptNode]) -> Self {
        let mut index = HashMap::with_capacity(nodes.len());
        for (pos, node) in nodes.iter().enumerate() {
            index.entry(node.id).or_insert(pos);
        }
        Self { nodes, index }
    }

    /// The built-in curriculum
    pub fn reference() -> &'static ConceptGraph {
        static GRAPH: OnceLock<ConceptGraph> = OnceLock::new();
        GRAPH.get_or_init(|| ConceptGraph::new(DSA_GRAPH))
    }

    /// All concepts in declaration order
    pub fn nodes(&self) -> &'static [ConceptNode] {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn lookup(&self, id: &str) -> Option<&'static ConceptNode> {
        let nodes = self.nodes;
        self.index.get(id).map(|&pos| &nodes[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Concepts matching `predicate`, in declaration order
    pub fn filter<P>(&self, predicate: P) -> Vec<&'static ConceptNode>
    where
        P: Fn(&ConceptNode) -> bool,
    {
        self.nodes.iter().filter(|n| predicate(n)).collect()
    }

    /// Concepts that list `id` as a direct prerequisite
    pub fn dependents(&self, id: &str) -> Vec<&'static ConceptNode> {
        self.filter(|n| n.dependencies.iter().any(|dep| *dep == id))
    }

    /// Check the table is a well-formed DAG.
    ///
    /// Runtime lookups never call this; a malformed table degrades through
    /// the unlock fallback instead.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut seen = HashSet::with_capacity(self.nodes.len());
        let mut dag: DiGraphMap<&'static str, ()> = DiGraphMap::new();

        for node in self.nodes {
            if !seen.insert(node.id) {
                return Err(GraphError::DuplicateConcept(node.id.to_string()));
            }
            if !(1..=5).contains(&node.difficulty) {
                return Err(GraphError::InvalidDifficulty {
                    concept: node.id.to_string(),
                    difficulty: node.difficulty,
                });
            }
            dag.add_node(node.id);
        }

        for node in self.nodes {
            for &dep in node.dependencies {
                if !self.contains(dep) {
                    return Err(GraphError::UnknownDependency {
                        concept: node.id.to_string(),
                        dependency: dep.to_string(),
                    });
                }
                dag.add_edge(dep, node.id, ());
            }
        }

        petgraph::algo::toposort(&dag, None)
            .map(|_| ())
            .map_err(|cycle| GraphError::Cycle(cycle.node_id().to_string()))
    }
}
