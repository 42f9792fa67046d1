//! # cyclo_config
//!
//! Configuration persistence for cyclo.
//!
//! A [`Configuration`] is the top-level persisted unit: an ordered sequence
//! of feature instances plus the amortization horizon and the network-size
//! selection. [`to_json`] and [`from_json`] convert it to and from a
//! versioned JSON document; loading rejects incompatible versions and
//! unknown feature labels outright rather than partially succeeding.
//!
//! ## Example
//!
//! ```rust
//! use cyclo_config::{from_json, to_json, Configuration};
//! use cyclo_features::registry;
//!
//! let mut config = Configuration::default();
//! config.features.push(registry::find("Storage").unwrap().build());
//!
//! let json = to_json(&config).unwrap();
//! let restored = from_json(&json).unwrap();
//! assert_eq!(restored.features.len(), 1);
//! ```

pub mod configuration;
pub mod error;
pub mod json;

pub use configuration::Configuration;
pub use error::{ConfigError, ConfigResult};
pub use json::{from_json, to_json, SCHEMA_VERSION};
