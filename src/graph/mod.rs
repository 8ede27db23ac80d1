//! Core diagram graph model
//!
//! This module implements the attributed directed-graph store backing a
//! diagram scene:
//! - Uniform attribute records with typed values for nodes and arcs
//! - Nodes keyed by name, arcs keyed by their endpoint pair
//! - Endpoint-validated arc insertion and cascade removal of incident arcs
//! - Insertion-ordered bulk views for the rendering layer

pub mod arc;
pub mod attribute;
pub mod naming;
pub mod node;
pub mod store;

// Re-export main types
pub use attribute::{AttributeRecord, AttributeValue};
pub use naming::{arc_key, parse_endpoints, ArcKey, DELIMITER};
pub use store::{GraphError, GraphResult, GraphStore};
