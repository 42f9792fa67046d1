//! Canister creation.

use serde::{Deserialize, Serialize};

use cyclo_cost::{Breakdown, Category, Cost, Kind};
use cyclo_pricing::Pricer;

use crate::error::{FeatureError, FeatureResult};
use crate::feature::Feature;
use crate::field::Field;

/// A one-time fee per created canister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canister {
    pub count: u64,
}

impl Default for Canister {
    fn default() -> Self {
        Self { count: 1 }
    }
}

impl Feature for Canister {
    fn label(&self) -> &'static str {
        "Canister"
    }

    fn info(&self) -> &'static str {
        "A canister is a smart contract with its own code and state. \
         There is a one-time fee for creating a canister."
    }

    fn fields(&self) -> Vec<Field> {
        vec![Field::increment("count", "Canister", self.count)]
    }

    fn set(&mut self, key: &str, value: u64) -> FeatureResult<()> {
        match key {
            "count" => self.count = value,
            _ => {
                return Err(FeatureError::UnknownField {
                    feature: self.label(),
                    field: key.to_string(),
                })
            }
        }
        Ok(())
    }

    fn cost(&self, pricer: &dyn Pricer) -> Breakdown {
        let mut result = Breakdown::new();
        result.add(Cost::new(
            Kind::OneTime,
            Category::Canister,
            pricer.canister_creation(self.count as f64),
        ));
        result
    }

    fn fields_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    fn clone_box(&self) -> Box<dyn Feature> {
        Box::new(self.clone())
    }
}
