//! The polymorphic feature abstraction.

use cyclo_cost::{Breakdown, Kind};
use cyclo_pricing::Pricer;

use crate::error::FeatureResult;
use crate::field::Field;

/// A configurable, independently priced unit of canister workload.
///
/// Features are independent: none holds a reference to another, and `cost`
/// is side-effect free. The label is the serialization discriminant and
/// registry key and must be unique across the catalog.
pub trait Feature {
    /// Stable variant label.
    fn label(&self) -> &'static str;

    /// Descriptive text about what this feature is billed for.
    fn info(&self) -> &'static str;

    /// The field schema for driving user input controls.
    fn fields(&self) -> Vec<Field>;

    /// Mutate the parameter named `key`.
    ///
    /// This is the `onChange` contract of the field schema: the mutation is
    /// immediately visible to the next [`Feature::cost`] call. Range fields
    /// interpret `value` as a table index.
    fn set(&mut self, key: &str, value: u64) -> FeatureResult<()>;

    /// Price the feature's current parameter values.
    fn cost(&self, pricer: &dyn Pricer) -> Breakdown;

    /// The feature's own parameter fields as a JSON object, for persistence.
    fn fields_value(&self) -> serde_json::Result<serde_json::Value>;

    fn clone_box(&self) -> Box<dyn Feature>;

    /// Structural equality across type erasure: same variant, same fields.
    fn eq_dyn(&self, other: &dyn Feature) -> bool {
        self.label() == other.label()
            && self.fields_value().ok() == other.fields_value().ok()
    }
}

impl Clone for Box<dyn Feature> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl std::fmt::Debug for Box<dyn Feature> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Feature({})", self.label())
    }
}

/// Apply the repeat rule: a repeat of exactly 0 means a one-time charge of
/// `count` occurrences; any positive repeat means a per-day charge of
/// `count * repeat` occurrences (possibly fractional).
pub(crate) fn effective(count: u64, repeat: f64) -> (Kind, f64) {
    if repeat == 0.0 {
        (Kind::OneTime, count as f64)
    } else {
        (Kind::PerDay, count as f64 * repeat)
    }
}
