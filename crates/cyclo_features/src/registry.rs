//! The label-to-constructor catalog of feature variants.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::feature::Feature;
use crate::variants::{
    Callee, Caller, Canister, ComputeAllocation, Ecdsa, Heartbeat, HttpOutcall, Ingress,
    MemoryAllocation, Query, Schnorr, Storage, Timer,
};

/// One catalog entry: a stable label plus constructors.
///
/// `build` produces a fresh default-configured instance; `restore` rebuilds
/// an instance from a persisted `fields` object. Restoration deserializes
/// into the variant's typed field struct, so only known fields are applied,
/// absent fields keep their defaults, and unknown fields are ignored.
pub struct FeatureEntry {
    label: &'static str,
    build: fn() -> Box<dyn Feature>,
    restore: fn(serde_json::Value) -> serde_json::Result<Box<dyn Feature>>,
}

impl FeatureEntry {
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Construct a fresh instance with default parameters.
    pub fn build(&self) -> Box<dyn Feature> {
        (self.build)()
    }

    /// Reconstruct an instance from a persisted `fields` object.
    pub fn restore(&self, fields: serde_json::Value) -> serde_json::Result<Box<dyn Feature>> {
        (self.restore)(fields)
    }
}

impl std::fmt::Debug for FeatureEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureEntry")
            .field("label", &self.label)
            .finish()
    }
}

fn build_default<T: Feature + Default + 'static>() -> Box<dyn Feature> {
    Box::new(T::default())
}

fn restore_typed<T: Feature + DeserializeOwned + 'static>(
    fields: serde_json::Value,
) -> serde_json::Result<Box<dyn Feature>> {
    Ok(Box::new(serde_json::from_value::<T>(fields)?))
}

const fn entry<T: Feature + Default + DeserializeOwned + 'static>(
    label: &'static str,
) -> FeatureEntry {
    FeatureEntry {
        label,
        build: build_default::<T>,
        restore: restore_typed::<T>,
    }
}

/// The fixed, ordered feature catalog. The order is the presentation order
/// for choosable feature types.
pub fn catalog() -> &'static [FeatureEntry] {
    static CATALOG: &[FeatureEntry] = &[
        entry::<Canister>("Canister"),
        entry::<Storage>("Storage"),
        entry::<Ingress>("Ingress"),
        entry::<Query>("Query"),
        entry::<Caller>("Caller"),
        entry::<Callee>("Callee"),
        entry::<Timer>("Timer"),
        entry::<Heartbeat>("Heartbeat"),
        entry::<MemoryAllocation>("MemoryAllocation"),
        entry::<ComputeAllocation>("ComputeAllocation"),
        entry::<Ecdsa>("Ecdsa"),
        entry::<Schnorr>("Schnorr"),
        entry::<HttpOutcall>("HttpOutcall"),
    ];
    CATALOG
}

/// Look up a catalog entry by label.
pub fn find(label: &str) -> Option<&'static FeatureEntry> {
    debug!("Looking up feature: {}", label);
    catalog().iter().find(|entry| entry.label == label)
}

/// All catalog labels, in presentation order.
pub fn labels() -> Vec<&'static str> {
    catalog().iter().map(|entry| entry.label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_unique() {
        let mut labels = labels();
        let len = labels.len();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), len);
    }

    #[test]
    fn test_built_instance_label_matches_catalog_key() {
        for entry in catalog() {
            assert_eq!(entry.build().label(), entry.label());
        }
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert!(find("Storage").is_some());
        assert!(find("Blockchain").is_none());
    }

    #[test]
    fn test_restore_applies_present_fields_and_keeps_defaults() {
        let entry = find("Ingress").unwrap();
        let restored = entry
            .restore(serde_json::json!({ "count": 7 }))
            .unwrap();

        let fields = restored.fields_value().unwrap();
        assert_eq!(fields["count"], 7);
        // Absent from the document, so the constructor default survives.
        assert_eq!(fields["repeat_index"], 3);
    }

    #[test]
    fn test_restore_ignores_unknown_fields() {
        let entry = find("Canister").unwrap();
        let restored = entry
            .restore(serde_json::json!({ "count": 2, "injected": true }))
            .unwrap();
        assert_eq!(restored.fields_value().unwrap(), serde_json::json!({ "count": 2 }));
    }
}
