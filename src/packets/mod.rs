//! Learning packets for DSAFlow
//!
//! Each concept is taught through five short packets (concept, visual,
//! challenge, connection, recall). This module holds the packet payload
//! types, the built-in catalog and indexed lookups over it.

pub mod builtin;
pub mod catalog;
pub mod models;

pub use catalog::{CatalogError, PacketCatalog};
pub use models::*;
