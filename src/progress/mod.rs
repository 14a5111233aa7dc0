//! Learner progress for DSAFlow
//!
//! This module provides:
//! - Progress state (completed packets, completed concepts, current concept)
//! - Packet completion with automatic concept completion and advancement
//! - Next-concept selection over the concept graph
//! - Seeding from remote rows and a local cache between runs

pub mod cache;
pub mod models;
pub mod tracker;

pub use cache::{CacheError, ProgressCache};
pub use models::*;
pub use tracker::{next_concept, ProgressTracker};
