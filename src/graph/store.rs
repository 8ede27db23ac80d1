//! In-memory storage for diagram nodes and arcs
//!
//! The store owns two independent insertion-ordered mappings — node name to
//! record and [`ArcKey`] to record — and nothing else: no background
//! cleanup, no reference counting, no interior mutability. The scene layer
//! iterates the mappings to draw and calls the mutators in response to user
//! actions.

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, trace};

use super::arc;
use super::attribute::AttributeRecord;
use super::naming::ArcKey;
use super::node;

/// Reasons an insert can be rejected
///
/// A rejected insert never mutates the store, so ignoring the result gives
/// fire-and-forget upsert semantics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node name is empty")]
    EmptyNodeName,

    #[error("arc source node {0:?} does not exist")]
    MissingArcSource(String),

    #[error("arc target node {0:?} does not exist")]
    MissingArcTarget(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory registry of diagram nodes and arcs with their attribute records
///
/// - nodes: name -> record
/// - arcs: structural endpoint pair -> record
///
/// Iteration order of both mappings follows insertion order, giving the
/// scene layer a stable draw order. All operations are synchronous and
/// non-blocking; callers in a concurrent host must serialize access.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Node records keyed by node name
    nodes: IndexMap<String, AttributeRecord>,

    /// Arc records keyed by endpoint pair
    arcs: IndexMap<ArcKey, AttributeRecord>,
}

impl GraphStore {
    /// Create a new empty store
    pub fn new() -> Self {
        GraphStore {
            nodes: IndexMap::new(),
            arcs: IndexMap::new(),
        }
    }

    /// Insert or overwrite a node with the default (empty) display style
    pub fn insert_node(&mut self, name: &str) -> GraphResult<()> {
        self.insert_node_with_style(name, "")
    }

    /// Insert or overwrite a node rendered through a display template
    pub fn insert_node_with_style(&mut self, name: &str, style: &str) -> GraphResult<()> {
        if name.is_empty() {
            return Err(GraphError::EmptyNodeName);
        }
        debug!(name, style, "insert node");
        self.nodes.insert(name.to_string(), node::simple(name, style));
        Ok(())
    }

    /// Insert or overwrite a node from a prepared record, keyed by the
    /// record's own `name` field and preserving all fields verbatim
    pub fn insert_node_record(&mut self, record: AttributeRecord) -> GraphResult<()> {
        let name = node::name(&record);
        if name.is_empty() {
            return Err(GraphError::EmptyNodeName);
        }
        debug!(name = %name, "insert node record");
        self.nodes.insert(name, record);
        Ok(())
    }

    /// Get a node's record by name
    ///
    /// A missing node yields a synthesized default record carrying only the
    /// name; the default is not stored, so a lookup never mutates the store.
    pub fn get_node(&self, name: &str) -> AttributeRecord {
        match self.nodes.get(name) {
            Some(record) => record.clone(),
            None => {
                trace!(name, "node not stored, synthesizing default");
                node::simple(name, "")
            }
        }
    }

    /// Check whether a node is stored
    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Remove a node and every arc incident to it
    ///
    /// Each arc whose endpoint pair contains the name as source or target is
    /// removed along with the node. Idempotent; returns the removed node
    /// record, if any. O(number of arcs) per call.
    pub fn remove_node(&mut self, name: &str) -> Option<AttributeRecord> {
        let removed = self.nodes.shift_remove(name);

        let arcs_before = self.arcs.len();
        self.arcs
            .retain(|key, _| key.from() != name && key.to() != name);
        let arcs_removed = arcs_before - self.arcs.len();

        if removed.is_some() || arcs_removed > 0 {
            debug!(name, arcs_removed, "removed node");
        }
        removed
    }

    /// Insert an arc between two stored nodes
    ///
    /// Admitted only when both endpoints currently resolve to stored nodes;
    /// the check happens at insertion time only.
    pub fn insert_arc(&mut self, from: &str, to: &str) -> GraphResult<()> {
        self.check_endpoints(from, to)?;
        debug!(from, to, "insert arc");
        self.arcs.insert(ArcKey::new(from, to), arc::simple(from, to));
        Ok(())
    }

    /// Insert an arc from a prepared record
    ///
    /// The key is derived from the record's own `from`/`to` payload fields;
    /// the record itself is stored verbatim after the same admission check.
    pub fn insert_arc_record(&mut self, record: AttributeRecord) -> GraphResult<()> {
        let key = ArcKey::from_record(&record);
        self.check_endpoints(key.from(), key.to())?;
        debug!(from = key.from(), to = key.to(), "insert arc record");
        self.arcs.insert(key, record);
        Ok(())
    }

    /// Get an arc's record by endpoint names, empty when absent
    pub fn get_arc(&self, from: &str, to: &str) -> AttributeRecord {
        self.arcs
            .get(&ArcKey::new(from, to))
            .cloned()
            .unwrap_or_default()
    }

    /// Get an arc's record by its literal `from->to` key, empty when absent
    /// or when the key carries no delimiter
    pub fn get_arc_by_key(&self, key: &str) -> AttributeRecord {
        ArcKey::parse(key)
            .and_then(|key| self.arcs.get(&key).cloned())
            .unwrap_or_default()
    }

    /// Check whether an arc is stored
    pub fn has_arc(&self, from: &str, to: &str) -> bool {
        self.arcs.contains_key(&ArcKey::new(from, to))
    }

    /// Remove an arc by endpoint names; idempotent, returning the removed
    /// record if any
    pub fn remove_arc(&mut self, from: &str, to: &str) -> Option<AttributeRecord> {
        let removed = self.arcs.shift_remove(&ArcKey::new(from, to));
        if removed.is_some() {
            debug!(from, to, "removed arc");
        }
        removed
    }

    /// Read-only view of all node records for bulk iteration
    pub fn nodes(&self) -> &IndexMap<String, AttributeRecord> {
        &self.nodes
    }

    /// Read-only view of all arc records for bulk iteration
    pub fn arcs(&self) -> &IndexMap<ArcKey, AttributeRecord> {
        &self.arcs
    }

    /// Number of stored nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored arcs
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Drop all nodes and arcs
    pub fn clear(&mut self) {
        debug!("clearing store");
        self.nodes.clear();
        self.arcs.clear();
    }

    fn check_endpoints(&self, from: &str, to: &str) -> GraphResult<()> {
        if !self.has_node(from) {
            return Err(GraphError::MissingArcSource(from.to_string()));
        }
        if !self.has_node(to) {
            return Err(GraphError::MissingArcTarget(to.to_string()));
        }
        Ok(())
    }
}
