//! Compute capacity reservation.

use serde::{Deserialize, Serialize};

use cyclo_cost::{Breakdown, Category, Cost, Kind};
use cyclo_pricing::Pricer;

use crate::error::{FeatureError, FeatureResult};
use crate::feature::Feature;
use crate::field::Field;
use crate::value::{percent_choices, pick, PERCENT_VALUES};

/// A reserved share of an execution core, expressed in percent.
/// Charged per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeAllocation {
    pub count: u64,
    pub percent_index: usize,
}

impl Default for ComputeAllocation {
    fn default() -> Self {
        Self {
            count: 1,
            percent_index: 2,
        }
    }
}

impl Feature for ComputeAllocation {
    fn label(&self) -> &'static str {
        "ComputeAllocation"
    }

    fn info(&self) -> &'static str {
        "Canisters can reserve a share of compute capacity by setting \
         compute-allocation in their canister settings. It is expressed in \
         percents and denotes the percentage of an execution core."
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::increment("count", "ComputeAllocation", self.count),
            Field::range(
                "percent_index",
                "Capacity",
                percent_choices(),
                self.percent_index,
            ),
        ]
    }

    fn set(&mut self, key: &str, value: u64) -> FeatureResult<()> {
        match key {
            "count" => self.count = value,
            "percent_index" => self.percent_index = value as usize,
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
        let percent = pick(PERCENT_VALUES, self.percent_index);
        let mut result = Breakdown::new();
        result.add(Cost::new(
            Kind::PerDay,
            Category::Compute,
            pricer.compute_allocation(percent, 1.0, self.count as f64),
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
