//! Raw registry document types.
use serde_json::{Map, Value};

/// Package document returned by an npm-compatible registry.
///
/// Only the two fields the release normalizer needs are retained: the
/// `time` mapping of version to publish timestamp, and the keys of the
/// `versions` mapping, which enumerate the versions that actually exist.
/// Registry documents are not trusted to match any particular shape, so
/// both fields are extracted defensively from an untyped value and default
/// to empty when missing or malformed.
///
/// Key order follows the registry document. `serde_json` is built with the
/// `preserve_order` feature, so iterating versions here is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Packument {
    time: Map<String, Value>,
    versions: Vec<String>,
}

impl Packument {
    /// Extract the fields the normalizer needs from an untyped registry
    /// response. Missing or non-object `time`/`versions` fields yield an
    /// empty document rather than an error.
    pub fn from_value(document: Value) -> Self {
        let time = document
            .get("time")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let versions = document
            .get("versions")
            .and_then(Value::as_object)
            .map(|versions| versions.keys().cloned().collect())
            .unwrap_or_default();

        Self { time, versions }
    }

    /// Version strings known to the registry, in document order.
    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    /// Publish timestamp string for a version. Returns `None` when the
    /// `time` mapping has no entry for the version or the entry is not a
    /// string.
    pub fn publish_time(&self, version: &str) -> Option<&str> {
        self.time.get(version).and_then(Value::as_str)
    }
}
