use std::collections::BTreeMap;

/// Fields present in the input that the record does not declare.
///
/// Captured verbatim on deserialization and written back as sibling keys.
pub type Extensions = BTreeMap<String, serde_json::Value>;

/// A numeric bound as it appears in the metadata (a decimal literal in text form).
pub type BoundValue = String;
