//! Canonical arc records
//!
//! An arc is the directed connection between two named nodes. Its record
//! carries `type = "arc"` plus the endpoint names; its identity in the
//! store is derived from those endpoints (see [`super::naming`]).

use super::attribute::AttributeRecord;

/// Build the canonical record for an arc between two named nodes
pub fn simple(from: &str, to: &str) -> AttributeRecord {
    let mut arc = AttributeRecord::new();
    arc.insert("type", "arc");
    arc.insert("from", from);
    arc.insert("to", to);
    arc
}

/// Read the endpoint pair out of an arc record's payload fields, absent
/// fields reading as empty names
pub fn endpoints(record: &AttributeRecord) -> (String, String) {
    (record.text("from"), record.text("to"))
}

/// True for records carrying the arc type tag
pub fn is_arc(record: &AttributeRecord) -> bool {
    record.text("type") == "arc"
}
