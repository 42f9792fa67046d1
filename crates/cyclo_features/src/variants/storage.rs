//! Storage consumption and memory reservation.

use serde::{Deserialize, Serialize};

use cyclo_cost::{Breakdown, Category, Cost, Kind};
use cyclo_pricing::Pricer;

use crate::error::{FeatureError, FeatureResult};
use crate::feature::Feature;
use crate::field::Field;
use crate::value::{pick, storage_choices, STORAGE_VALUES};

/// Storage actually consumed by a canister: Wasm binary, Wasm memory,
/// stable memory, and enqueued messages. Charged per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub count: u64,
    pub storage_index: usize,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            count: 1,
            storage_index: 2,
        }
    }
}

impl Feature for Storage {
    fn label(&self) -> &'static str {
        "Storage"
    }

    fn info(&self) -> &'static str {
        "Canisters pay for the storage they consume. This includes storage \
         for the Wasm binary, the Wasm memory, the stable memory, and \
         enqueued messages."
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::increment("count", "Storage", self.count),
            Field::range("storage_index", "Size", storage_choices(), self.storage_index),
        ]
    }

    fn set(&mut self, key: &str, value: u64) -> FeatureResult<()> {
        match key {
            "count" => self.count = value,
            "storage_index" => self.storage_index = value as usize,
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
        let bytes = pick(STORAGE_VALUES, self.storage_index);
        let mut result = Breakdown::new();
        result.add(Cost::new(
            Kind::PerDay,
            Category::Storage,
            pricer.storage(bytes, 1.0, self.count as f64),
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

/// Storage reserved ahead of time via the memory-allocation canister
/// setting. Charged per day whether used or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryAllocation {
    pub count: u64,
    pub storage_index: usize,
}

impl Default for MemoryAllocation {
    fn default() -> Self {
        Self {
            count: 1,
            storage_index: 2,
        }
    }
}

impl Feature for MemoryAllocation {
    fn label(&self) -> &'static str {
        "MemoryAllocation"
    }

    fn info(&self) -> &'static str {
        "Canisters can reserve some amount of storage ahead of time by \
         setting memory-allocation in their canister settings."
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::increment("count", "MemoryAllocation", self.count),
            Field::range("storage_index", "Size", storage_choices(), self.storage_index),
        ]
    }

    fn set(&mut self, key: &str, value: u64) -> FeatureResult<()> {
        match key {
            "count" => self.count = value,
            "storage_index" => self.storage_index = value as usize,
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
        let bytes = pick(STORAGE_VALUES, self.storage_index);
        let mut result = Breakdown::new();
        result.add(Cost::new(
            Kind::PerDay,
            Category::Storage,
            pricer.memory_allocation(bytes, 1.0, self.count as f64),
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

#[cfg(test)]
mod tests {
    use super::*;
    use cyclo_pricing::FlatPricer;

    #[test]
    fn test_storage_is_per_day() {
        let storage = Storage::default();
        let breakdown = storage.cost(&FlatPricer);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown.items()[0].kind(), Kind::PerDay);
        assert_eq!(breakdown.items()[0].category(), Category::Storage);
    }

    #[test]
    fn test_memory_allocation_shares_storage_category() {
        let mut breakdown = Storage::default().cost(&FlatPricer);
        breakdown.merge(&MemoryAllocation::default().cost(&FlatPricer));
        // Same (kind, category) pair, so the two collapse into one line.
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown.items()[0].amount().cycles, 2.0);
    }
}
