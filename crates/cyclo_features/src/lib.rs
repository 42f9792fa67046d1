//! # cyclo_features
//!
//! The billable feature catalog for cyclo.
//!
//! A [`Feature`] is an independently configurable unit of billable canister
//! behavior: it owns a set of typed parameters (counts and indices into fixed
//! discretization tables), exposes a field schema for driving input controls,
//! and produces a [`cyclo_cost::Breakdown`] on demand for any
//! [`cyclo_pricing::Pricer`].
//!
//! The [`registry`] maps each variant's stable label to a constructor, which
//! is how configurations enumerate choosable features and how persistence
//! reconstructs them by label.
//!
//! ## Example
//!
//! ```rust
//! use cyclo_features::registry;
//! use cyclo_pricing::FlatPricer;
//!
//! let entry = registry::find("Ingress").unwrap();
//! let mut ingress = entry.build();
//! ingress.set("count", 500).unwrap();
//!
//! let breakdown = ingress.cost(&FlatPricer);
//! assert!(!breakdown.is_empty());
//! ```

pub mod error;
pub mod feature;
pub mod field;
pub mod presets;
pub mod registry;
pub mod value;
pub mod variants;

pub use error::{FeatureError, FeatureResult};
pub use feature::Feature;
pub use field::{Field, FieldKind};
pub use variants::{
    Callee, Caller, Canister, ComputeAllocation, Ecdsa, Heartbeat, HttpOutcall, Ingress,
    MemoryAllocation, Query, Schnorr, Storage, Timer,
};
