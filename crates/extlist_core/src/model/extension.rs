//! Extension domain model.
//!
//! # Responsibility
//! - Define the JSON record shape consumed from the data source.
//! - Attach a stable surrogate identifier to each loaded record.
//!
//! # Invariants
//! - `id` is assigned once at load time and never reused for another extension.
//! - `name` uniqueness is assumed by name lookups but never enforced.

use serde::Deserialize;
use uuid::Uuid;

/// Stable identifier for one loaded extension.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ExtensionId = Uuid;

/// Extension record as served by the data source.
///
/// Deserialized with camel-case keys to match the external JSON shape
/// (`isActive`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionRecord {
    pub name: String,
    pub description: String,
    /// Relative path or URL of the logo image.
    pub logo: String,
    pub is_active: bool,
}

impl ExtensionRecord {
    /// Creates a record with an empty description and logo.
    pub fn new(name: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            logo: String::new(),
            is_active,
        }
    }
}

/// Loaded extension with its stable identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub id: ExtensionId,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub is_active: bool,
}

impl Extension {
    /// Wraps a record with a freshly generated identifier.
    pub fn from_record(record: ExtensionRecord) -> Self {
        Self::with_id(Uuid::new_v4(), record)
    }

    /// Wraps a record with a caller-provided identifier.
    pub fn with_id(id: ExtensionId, record: ExtensionRecord) -> Self {
        Self {
            id,
            name: record.name,
            description: record.description,
            logo: record.logo,
            is_active: record.is_active,
        }
    }

    /// Returns the wire representation without the identifier.
    pub fn to_record(&self) -> ExtensionRecord {
        ExtensionRecord {
            name: self.name.clone(),
            description: self.description.clone(),
            logo: self.logo.clone(),
            is_active: self.is_active,
        }
    }

    /// Returns the human-readable state label.
    pub fn state_label(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Extension, ExtensionRecord};

    #[test]
    fn record_deserializes_camel_case_active_flag() {
        let record: ExtensionRecord = serde_json::from_str(
            r#"{"name":"DevLens","description":"Inspect","logo":"./logo.svg","isActive":true}"#,
        )
        .unwrap();
        assert_eq!(record.name, "DevLens");
        assert!(record.is_active);
    }

    #[test]
    fn from_record_assigns_distinct_ids() {
        let first = Extension::from_record(ExtensionRecord::new("A", true));
        let second = Extension::from_record(ExtensionRecord::new("A", true));
        assert_ne!(first.id, second.id);
        assert_eq!(first.to_record(), second.to_record());
    }
}
