//! Message-driven work: ingress messages, queries, and inter-canister calls.

use serde::{Deserialize, Serialize};

use cyclo_cost::{Breakdown, Category, Cost};
use cyclo_pricing::{Direction, Mode, Pricer};

use crate::error::{FeatureError, FeatureResult};
use crate::feature::{effective, Feature};
use crate::field::Field;
use crate::value::{
    instruction_choices, network_choices, pick, repeat_choices, repeat_values,
    INSTRUCTION_VALUES, NETWORK_VALUES,
};

/// Messages users send to canisters. Ingress messages are added to blocks
/// and executed on all nodes of the subnet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingress {
    pub count: u64,
    pub instruction_index: usize,
    pub request_index: usize,
    pub response_index: usize,
    pub repeat_index: usize,
}

impl Default for Ingress {
    fn default() -> Self {
        Self {
            count: 100,
            instruction_index: 3,
            request_index: 4,
            response_index: 4,
            repeat_index: 3,
        }
    }
}

impl Feature for Ingress {
    fn label(&self) -> &'static str {
        "Ingress"
    }

    fn info(&self) -> &'static str {
        "Messages that users send to canisters are called ingress messages. \
         Ingress messages are added to blocks and executed on all nodes of \
         the subnet."
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::increment("count", "Ingress", self.count),
            Field::range("repeat_index", "Frequency", repeat_choices(), self.repeat_index),
            Field::range(
                "instruction_index",
                "Instructions",
                instruction_choices(),
                self.instruction_index,
            ),
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
            "instruction_index" => self.instruction_index = value as usize,
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
        let instructions = pick(INSTRUCTION_VALUES, self.instruction_index);
        let network =
            pick(NETWORK_VALUES, self.request_index) + pick(NETWORK_VALUES, self.response_index);
        let repeat = pick(&repeat_values(), self.repeat_index);
        let (kind, count) = effective(self.count, repeat);

        let mut result = Breakdown::new();
        result.add(Cost::new(
            kind,
            Category::IngressExecution,
            pricer.execution(Mode::Replicated, instructions, count),
        ));
        result.add(Cost::new(
            kind,
            Category::IngressNetwork,
            pricer.message(Mode::Replicated, Direction::UserToCanister, network, count),
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

/// Read-only messages executed by a single node, off consensus.
/// Priced non-replicated, which is currently free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    pub count: u64,
    pub instruction_index: usize,
    pub request_index: usize,
    pub response_index: usize,
    pub repeat_index: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            count: 100,
            instruction_index: 3,
            request_index: 4,
            response_index: 4,
            repeat_index: 3,
        }
    }
}

impl Feature for Query {
    fn label(&self) -> &'static str {
        "Query"
    }

    fn info(&self) -> &'static str {
        "Queries are read-only messages that are executed by a single node \
         and do not go through consensus. Currently canisters do not pay for \
         queries."
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::increment("count", "Query", self.count),
            Field::range("repeat_index", "Frequency", repeat_choices(), self.repeat_index),
            Field::range(
                "instruction_index",
                "Instructions",
                instruction_choices(),
                self.instruction_index,
            ),
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
            "instruction_index" => self.instruction_index = value as usize,
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
        let instructions = pick(INSTRUCTION_VALUES, self.instruction_index);
        let network =
            pick(NETWORK_VALUES, self.request_index) + pick(NETWORK_VALUES, self.response_index);
        let repeat = pick(&repeat_values(), self.repeat_index);
        let (kind, count) = effective(self.count, repeat);

        let mut result = Breakdown::new();
        result.add(Cost::new(
            kind,
            Category::IngressExecution,
            pricer.execution(Mode::NonReplicated, instructions, count),
        ));
        result.add(Cost::new(
            kind,
            Category::IngressNetwork,
            pricer.message(Mode::NonReplicated, Direction::UserToCanister, network, count),
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

/// The calling side of an inter-canister call: network costs to transfer
/// the request and response plus the execution cost to process the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Caller {
    pub count: u64,
    pub instruction_index: usize,
    pub request_index: usize,
    pub response_index: usize,
    pub repeat_index: usize,
}

impl Default for Caller {
    fn default() -> Self {
        Self {
            count: 100,
            instruction_index: 3,
            request_index: 4,
            response_index: 4,
            repeat_index: 3,
        }
    }
}

impl Feature for Caller {
    fn label(&self) -> &'static str {
        "Caller"
    }

    fn info(&self) -> &'static str {
        "A canister can call another canister. This item computes call costs \
         for the caller, which consist of the network costs to transfer \
         bytes and the execution cost to process the response."
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::increment("count", "Caller", self.count),
            Field::range("repeat_index", "Frequency", repeat_choices(), self.repeat_index),
            Field::range(
                "instruction_index",
                "Instructions",
                instruction_choices(),
                self.instruction_index,
            ),
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
            "instruction_index" => self.instruction_index = value as usize,
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
        let instructions = pick(INSTRUCTION_VALUES, self.instruction_index);
        let network =
            pick(NETWORK_VALUES, self.request_index) + pick(NETWORK_VALUES, self.response_index);
        let repeat = pick(&repeat_values(), self.repeat_index);
        let (kind, count) = effective(self.count, repeat);

        let mut result = Breakdown::new();
        result.add(Cost::new(
            kind,
            Category::CallExecution,
            pricer.execution(Mode::Replicated, instructions, count),
        ));
        result.add(Cost::new(
            kind,
            Category::CallNetwork,
            pricer.message(
                Mode::Replicated,
                Direction::CanisterToCanister,
                network,
                count,
            ),
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

/// The called side of an inter-canister call. Only executed instructions are
/// charged here; the network costs are covered by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Callee {
    pub count: u64,
    pub instruction_index: usize,
    pub repeat_index: usize,
}

impl Default for Callee {
    fn default() -> Self {
        Self {
            count: 100,
            instruction_index: 3,
            repeat_index: 3,
        }
    }
}

impl Feature for Callee {
    fn label(&self) -> &'static str {
        "Callee"
    }

    fn info(&self) -> &'static str {
        "This item computes the costs for a canister that is being called by \
         another canister. The cost depends only on executed instructions \
         because the network costs are covered by the caller."
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::increment("count", "Callee", self.count),
            Field::range("repeat_index", "Frequency", repeat_choices(), self.repeat_index),
            Field::range(
                "instruction_index",
                "Instructions",
                instruction_choices(),
                self.instruction_index,
            ),
        ]
    }

    fn set(&mut self, key: &str, value: u64) -> FeatureResult<()> {
        match key {
            "count" => self.count = value,
            "instruction_index" => self.instruction_index = value as usize,
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
        let instructions = pick(INSTRUCTION_VALUES, self.instruction_index);
        let repeat = pick(&repeat_values(), self.repeat_index);
        let (kind, count) = effective(self.count, repeat);

        let mut result = Breakdown::new();
        result.add(Cost::new(
            kind,
            Category::CallExecution,
            pricer.execution(Mode::Replicated, instructions, count),
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
