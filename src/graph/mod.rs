//! Concept graph for DSAFlow
//!
//! This module provides:
//! - The built-in curriculum of DSA concepts and their prerequisites
//! - Lookup and filtering over the (immutable) graph
//! - Category display colors
//! - Structural validation (unique ids, known dependencies, no cycles)

pub mod builtin;
pub mod lookup;
pub mod models;

pub use lookup::{ConceptGraph, GraphError, DEFAULT_CONCEPT_ID};
pub use models::*;
