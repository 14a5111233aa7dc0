//! DSAFlow: bite-sized data structures and algorithms lessons with
//! prerequisite-driven progression.

pub mod config;
pub mod graph;
pub mod notifications;
pub mod packets;
pub mod progress;
pub mod remote;
pub mod session;
