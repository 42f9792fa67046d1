//! HTTP outcalls to Web 2.0 servers.

use serde::{Deserialize, Serialize};

use cyclo_cost::{Breakdown, Category, Cost};
use cyclo_pricing::Pricer;

use crate::error::{FeatureError, FeatureResult};
use crate::feature::{effective, Feature};
use crate::field::Field;
use crate::value::{network_choices, pick, repeat_choices, repeat_values, NETWORK_VALUES};

/// An HTTP request made from a canister to an external server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpOutcall {
    pub count: u64,
    pub request_index: usize,
    pub response_index: usize,
    pub repeat_index: usize,
}

impl Default for HttpOutcall {
    fn default() -> Self {
        Self {
            count: 1,
            request_index: 4,
            response_index: 4,
            repeat_index: 3,
        }
    }
}

impl Feature for HttpOutcall {
    fn label(&self) -> &'static str {
        "HttpOutcall"
    }

    fn info(&self) -> &'static str {
        "Canisters can make HTTP requests to Web 2.0 servers using HTTP \
         outcalls."
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::increment("count", "HttpOutcall", self.count),
            Field::range("repeat_index", "Frequency", repeat_choices(), self.repeat_index),
            Field::range(
                "request_index",
                "Request bytes",
                network_choices(),
                self.request_index,
            ),
            Field::range(
                "response_index",
                "Response bytes",
                network_choices(),
                self.response_index,
            ),
        ]
    }

    fn set(&mut self, key: &str, value: u64) -> FeatureResult<()> {
        match key {
            "count" => self.count = value,
            "request_index" => self.request_index = value as usize,
            "response_index" => self.response_index = value as usize,
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
        let request = pick(NETWORK_VALUES, self.request_index);
        let response = pick(NETWORK_VALUES, self.response_index);
        let repeat = pick(&repeat_values(), self.repeat_index);
        let (kind, count) = effective(self.count, repeat);

        let mut result = Breakdown::new();
        result.add(Cost::new(
            kind,
            Category::HttpOutcall,
            pricer.http_outcall(request, response, count),
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
