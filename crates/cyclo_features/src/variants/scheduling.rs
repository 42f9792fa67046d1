//! Self-scheduled work: timers and heartbeats.

use serde::{Deserialize, Serialize};

use cyclo_cost::{Breakdown, Category, Cost, Kind};
use cyclo_pricing::{Mode, Pricer};

use crate::error::{FeatureError, FeatureResult};
use crate::feature::{effective, Feature};
use crate::field::Field;
use crate::value::{instruction_choices, pick, repeat_choices, repeat_values, INSTRUCTION_VALUES};

/// Heartbeats fire once per block; on an idle subnet that is about once per
/// second, so the effective daily count is fixed.
const HEARTBEATS_PER_DAY: f64 = 24.0 * 3600.0;

/// Periodic or one-off work scheduled through canister timers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timer {
    pub count: u64,
    pub instruction_index: usize,
    pub repeat_index: usize,
}

impl Default for Timer {
    fn default() -> Self {
        Self {
            count: 1,
            instruction_index: 3,
            repeat_index: 4,
        }
    }
}

impl Feature for Timer {
    fn label(&self) -> &'static str {
        "Timer"
    }

    fn info(&self) -> &'static str {
        "Canisters can schedule periodic or one-off work using timers. The \
         cost of one timer execution depends on the number of executed \
         instructions."
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::increment("count", "Timer", self.count),
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
            Category::Timer,
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

/// A heartbeat is a periodic timer that executes as often as possible. It
/// has no frequency selector; the count is fixed at once per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heartbeat {
    pub count: u64,
    pub instruction_index: usize,
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self {
            count: 1,
            instruction_index: 3,
        }
    }
}

impl Feature for Heartbeat {
    fn label(&self) -> &'static str {
        "Heartbeat"
    }

    fn info(&self) -> &'static str {
        "A heartbeat is equivalent to a periodic timer that executes as \
         often as possible (once per block on idle subnets). Since \
         heartbeats cannot control their frequency, timers are usually the \
         better choice."
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::increment("count", "Heartbeat", self.count),
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
        let count = self.count as f64 * HEARTBEATS_PER_DAY;

        let mut result = Breakdown::new();
        result.add(Cost::new(
            Kind::PerDay,
            Category::Heartbeat,
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

#[cfg(test)]
mod tests {
    use super::*;
    use cyclo_pricing::FlatPricer;

    #[test]
    fn test_timer_defaults_to_hourly() {
        let breakdown = Timer::default().cost(&FlatPricer);
        assert_eq!(breakdown.items()[0].kind(), Kind::PerDay);
        assert_eq!(breakdown.items()[0].amount().cycles, 24.0);
    }

    #[test]
    fn test_timer_once_is_one_time() {
        let mut timer = Timer::default();
        timer.set("repeat_index", 0).unwrap();

        let breakdown = timer.cost(&FlatPricer);
        assert_eq!(breakdown.items()[0].kind(), Kind::OneTime);
        assert_eq!(breakdown.items()[0].amount().cycles, 1.0);
    }

    #[test]
    fn test_heartbeat_is_fixed_frequency() {
        let breakdown = Heartbeat::default().cost(&FlatPricer);
        let item = breakdown.items()[0];
        assert_eq!(item.kind(), Kind::PerDay);
        assert_eq!(item.category(), Category::Heartbeat);
        assert_eq!(item.amount().cycles, 86_400.0);
    }

    #[test]
    fn test_heartbeat_has_no_frequency_field() {
        let heartbeat = Heartbeat::default();
        assert!(heartbeat.fields().iter().all(|f| f.key != "repeat_index"));
    }
}
