//! Versioned JSON (de)serialization of configurations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use cyclo_features::registry;

use crate::configuration::Configuration;
use crate::error::{ConfigError, ConfigResult};

/// Bump this number only on breaking changes to the document shape that
/// make loading of old files impossible. Additive field changes within a
/// feature do not require a bump: absent fields fall back to defaults.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    version: u32,
    days: u32,
    subnet_index: usize,
    subnet_values: Vec<u32>,
    features: Vec<FeatureDocument>,
}

#[derive(Serialize, Deserialize)]
struct FeatureDocument {
    label: String,
    fields: serde_json::Value,
}

/// The version field alone. Parsed ahead of the full document so that a
/// mismatched version is reported as such even when the rest of the shape
/// has diverged, which is exactly what a version bump implies. An absent
/// version reads as 0 and fails the gate.
#[derive(Deserialize)]
struct DocumentHeader {
    #[serde(default)]
    version: u32,
}

/// Serialize a configuration to a JSON document.
pub fn to_json(config: &Configuration) -> ConfigResult<String> {
    let features = config
        .features
        .iter()
        .map(|feature| {
            Ok(FeatureDocument {
                label: feature.label().to_string(),
                fields: feature.fields_value()?,
            })
        })
        .collect::<ConfigResult<Vec<_>>>()?;

    let document = Document {
        version: SCHEMA_VERSION,
        days: config.days,
        subnet_index: config.subnet_index,
        subnet_values: config.subnet_values.clone(),
        features,
    };

    Ok(serde_json::to_string(&document)?)
}

/// Reconstruct a configuration from a JSON document.
///
/// Fails with [`ConfigError::IncompatibleVersion`] on any version mismatch
/// (no migration is attempted) and with [`ConfigError::UnknownFeature`] if a
/// feature entry's label is absent from the registry. Either failure aborts
/// the whole load.
pub fn from_json(json: &str) -> ConfigResult<Configuration> {
    let header: DocumentHeader = serde_json::from_str(json)?;
    if header.version != SCHEMA_VERSION {
        return Err(ConfigError::IncompatibleVersion {
            found: header.version,
            expected: SCHEMA_VERSION,
        });
    }

    let document: Document = serde_json::from_str(json)?;

    let mut features = Vec::with_capacity(document.features.len());
    for entry in document.features {
        debug!("Restoring feature: {}", entry.label);
        let meta = registry::find(&entry.label)
            .ok_or_else(|| ConfigError::UnknownFeature(entry.label.clone()))?;
        features.push(meta.restore(entry.fields)?);
    }

    Ok(Configuration {
        features,
        days: document.days,
        subnet_index: document.subnet_index,
        subnet_values: document.subnet_values,
    })
}
