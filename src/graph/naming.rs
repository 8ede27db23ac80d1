//! Arc naming scheme
//!
//! The scene layer addresses an arc by the literal key `from->to`. Inside
//! the store the identity is the structural [`ArcKey`] pair, so two node
//! names are never glued together ambiguously; the literal form is only a
//! rendering of it. Node names should not contain the delimiter — a name
//! that does is stored and cascaded correctly, but cannot be addressed
//! through a literal key string.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::attribute::AttributeRecord;

/// Separator joining the endpoint names in the literal arc key form
pub const DELIMITER: &str = "->";

/// Literal arc key for a pair of endpoint names
pub fn arc_key(from: &str, to: &str) -> String {
    format!("{from}{DELIMITER}{to}")
}

/// Recover the endpoint names from a literal arc key, splitting at the
/// first occurrence of the delimiter. `None` when the key has none.
pub fn parse_endpoints(key: &str) -> Option<(&str, &str)> {
    key.split_once(DELIMITER)
}

/// Structural identity of an arc: the ordered pair of endpoint names
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArcKey {
    from: String,
    to: String,
}

impl ArcKey {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        ArcKey {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Parse a literal `from->to` key
    pub fn parse(key: &str) -> Option<Self> {
        parse_endpoints(key).map(|(from, to)| ArcKey::new(from, to))
    }

    /// Key derived from an arc record's own `from`/`to` payload fields
    pub fn from_record(record: &AttributeRecord) -> Self {
        ArcKey::new(record.text("from"), record.text("to"))
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

impl fmt::Display for ArcKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, DELIMITER, self.to)
    }
}
