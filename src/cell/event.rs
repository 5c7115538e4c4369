use super::*;

/// A change delivered synchronously to a cell's listeners. Value events carry the cell's key and
/// the old and new payloads; name events carry the old and new labels.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    Value { key: String, old: Value, new: Value },
    Name { key: String, old: String, new: String },
}

impl ChangeEvent {
    /// The key of the cell that changed
    pub fn key(&self) -> &str {
        match self {
            Self::Value { key, .. } => key,
            Self::Name { key, .. } => key,
        }
    }
}
