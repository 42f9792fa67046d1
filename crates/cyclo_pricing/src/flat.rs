//! A deterministic pricer for tests.

use cyclo_cost::Amount;

use crate::pricer::{Direction, Mode, Pricer};

/// Prices every operation at exactly one cycle and one micro-USD per
/// occurrence, regardless of quantities.
///
/// With this pricer the cycle component of any feature cost equals the
/// feature's effective repetition count (times the number of contributed
/// line items), which makes count and kind arithmetic directly observable
/// in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatPricer;

impl FlatPricer {
    fn per_occurrence(count: f64) -> Amount {
        Amount::new(count * 1e-6, count)
    }
}

impl Pricer for FlatPricer {
    fn canister_creation(&self, count: f64) -> Amount {
        Self::per_occurrence(count)
    }

    fn execution(&self, _mode: Mode, _instructions: u64, count: f64) -> Amount {
        Self::per_occurrence(count)
    }

    fn storage(&self, _bytes: u64, _days: f64, count: f64) -> Amount {
        Self::per_occurrence(count)
    }

    fn memory_allocation(&self, _bytes: u64, _days: f64, count: f64) -> Amount {
        Self::per_occurrence(count)
    }

    fn compute_allocation(&self, _percent: u64, _days: f64, count: f64) -> Amount {
        Self::per_occurrence(count)
    }

    fn message(&self, _mode: Mode, _direction: Direction, _bytes: u64, count: f64) -> Amount {
        Self::per_occurrence(count)
    }

    fn http_outcall(&self, _request: u64, _response: u64, count: f64) -> Amount {
        Self::per_occurrence(count)
    }

    fn sign_with_ecdsa(&self, _message: u64, _signature: u64, count: f64) -> Amount {
        Self::per_occurrence(count)
    }

    fn sign_with_schnorr(&self, _message: u64, _signature: u64, count: f64) -> Amount {
        Self::per_occurrence(count)
    }
}
