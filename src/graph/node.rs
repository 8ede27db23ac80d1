//! Canonical node records
//!
//! A node is identified by its non-empty name and rendered through an
//! optional display template (`style`). Its record always carries
//! `type = "node"` so the scene layer can discriminate elements while
//! iterating a mixed stream of records.

use super::attribute::AttributeRecord;

/// Build the canonical record for a node
pub fn simple(name: &str, style: &str) -> AttributeRecord {
    let mut node = AttributeRecord::new();
    node.insert("name", name);
    node.insert("type", "node");
    node.insert("style", style);
    node
}

/// The node's name field in string form, empty when absent
pub fn name(record: &AttributeRecord) -> String {
    record.text("name")
}

/// The node's display template, empty when absent
pub fn style(record: &AttributeRecord) -> String {
    record.text("style")
}

/// True for records carrying the node type tag
pub fn is_node(record: &AttributeRecord) -> bool {
    record.text("type") == "node"
}
