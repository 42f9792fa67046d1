//! The top-level persisted unit.

use cyclo_cost::Breakdown;
use cyclo_features::Feature;
use cyclo_pricing::{Pricer, SUBNET_SIZES};

/// An ordered list of feature instances plus the global settings: the
/// amortization horizon in days and the selected network size (an index
/// into the fixed table of supported subnet sizes).
#[derive(Debug, Clone)]
pub struct Configuration {
    pub features: Vec<Box<dyn Feature>>,
    pub days: u32,
    pub subnet_index: usize,
    pub subnet_values: Vec<u32>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            features: Vec::new(),
            days: 30,
            subnet_index: 0,
            subnet_values: SUBNET_SIZES.to_vec(),
        }
    }
}

impl Configuration {
    /// A configuration holding the given features and default settings.
    pub fn with_features(features: Vec<Box<dyn Feature>>) -> Self {
        Self {
            features,
            ..Self::default()
        }
    }

    /// The currently selected subnet size.
    pub fn subnet_size(&self) -> u32 {
        let index = self.subnet_index.min(self.subnet_values.len().saturating_sub(1));
        self.subnet_values.get(index).copied().unwrap_or(13)
    }

    /// Price every feature and merge the results into one breakdown.
    pub fn breakdown(&self, pricer: &dyn Pricer) -> Breakdown {
        let mut result = Breakdown::new();
        for feature in &self.features {
            result.merge(&feature.cost(pricer));
        }
        result
    }
}
