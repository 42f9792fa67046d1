//! Threshold signatures.

use serde::{Deserialize, Serialize};

use cyclo_cost::{Breakdown, Category, Cost};
use cyclo_pricing::Pricer;

use crate::error::{FeatureError, FeatureResult};
use crate::feature::{effective, Feature};
use crate::field::Field;
use crate::value::{pick, repeat_choices, repeat_values};

/// Message and signature sizes assumed for threshold signing requests.
const SIGNED_MESSAGE_BYTES: u64 = 32;
const SIGNATURE_BYTES: u64 = 32;

/// Threshold ECDSA signatures, used to sign transactions for other chains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ecdsa {
    pub count: u64,
    pub repeat_index: usize,
}

impl Default for Ecdsa {
    fn default() -> Self {
        Self {
            count: 1,
            repeat_index: 3,
        }
    }
}

impl Feature for Ecdsa {
    fn label(&self) -> &'static str {
        "Ecdsa"
    }

    fn info(&self) -> &'static str {
        "Canisters can request threshold ECDSA signatures to sign messages \
         and transactions for other blockchains."
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::increment("count", "Ecdsa", self.count),
            Field::range("repeat_index", "Frequency", repeat_choices(), self.repeat_index),
        ]
    }

    fn set(&mut self, key: &str, value: u64) -> FeatureResult<()> {
        match key {
            "count" => self.count = value,
            "repeat_index" => self.repeat_index = value as usize,
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
        let repeat = pick(&repeat_values(), self.repeat_index);
        let (kind, count) = effective(self.count, repeat);

        let mut result = Breakdown::new();
        result.add(Cost::new(
            kind,
            Category::Ecdsa,
            pricer.sign_with_ecdsa(SIGNED_MESSAGE_BYTES, SIGNATURE_BYTES, count),
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

/// Threshold Schnorr signatures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schnorr {
    pub count: u64,
    pub repeat_index: usize,
}

impl Default for Schnorr {
    fn default() -> Self {
        Self {
            count: 1,
            repeat_index: 3,
        }
    }
}

impl Feature for Schnorr {
    fn label(&self) -> &'static str {
        "Schnorr"
    }

    fn info(&self) -> &'static str {
        "Canisters can request threshold Schnorr signatures to sign messages \
         and transactions for other blockchains."
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::increment("count", "Schnorr", self.count),
            Field::range("repeat_index", "Frequency", repeat_choices(), self.repeat_index),
        ]
    }

    fn set(&mut self, key: &str, value: u64) -> FeatureResult<()> {
        match key {
            "count" => self.count = value,
            "repeat_index" => self.repeat_index = value as usize,
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
        let repeat = pick(&repeat_values(), self.repeat_index);
        let (kind, count) = effective(self.count, repeat);

        let mut result = Breakdown::new();
        result.add(Cost::new(
            kind,
            Category::Schnorr,
            pricer.sign_with_schnorr(SIGNED_MESSAGE_BYTES, SIGNATURE_BYTES, count),
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
