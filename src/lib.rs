//! Diagraph
//!
//! An in-memory attributed graph model for HMI/SCADA diagram scenes. The
//! store records which named elements exist, the display and role
//! attributes each carries, and the directed arcs connecting them; a
//! rendering layer iterates the store to draw and mutates it in response
//! to user actions. Persistence, rendering and graph algorithms are
//! external concerns.
//!
//! # Example
//!
//! ```rust
//! use diagraph::{node, GraphStore};
//!
//! let mut store = GraphStore::new();
//!
//! // Register two devices and wire them up
//! store.insert_node_with_style("plc-1", "controller").unwrap();
//! store.insert_node("pump-1").unwrap();
//! store.insert_arc("plc-1", "pump-1").unwrap();
//!
//! assert_eq!(store.node_count(), 2);
//! assert_eq!(store.arc_count(), 1);
//!
//! // Lookups are total: a missing node reads as a default record
//! // carrying only its name, and nothing is stored by looking
//! let ghost = store.get_node("ghost");
//! assert_eq!(node::name(&ghost), "ghost");
//! assert_eq!(store.node_count(), 2);
//!
//! // Removing a node drops every arc incident to it
//! assert!(store.remove_node("pump-1").is_some());
//! assert_eq!(store.arc_count(), 0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    arc, arc_key, node, parse_endpoints, ArcKey, AttributeRecord, AttributeValue, GraphError,
    GraphResult, GraphStore, DELIMITER,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
