//! The two-unit monetary value.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// A price expressed in two independent units: a USD equivalent and cycles.
///
/// Both components are non-negative finite reals. Addition is defined
/// component-wise and is associative and commutative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Amount {
    pub usd: f64,
    pub cycles: f64,
}

impl Amount {
    /// The distinguished zero value.
    pub const ZERO: Amount = Amount {
        usd: 0.0,
        cycles: 0.0,
    };

    pub fn new(usd: f64, cycles: f64) -> Self {
        Self { usd, cycles }
    }

    pub fn is_zero(&self) -> bool {
        self.usd == 0.0 && self.cycles == 0.0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount {
            usd: self.usd + other.usd,
            cycles: self.cycles + other.cycles,
        }
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Amount) {
        self.usd += other.usd;
        self.cycles += other.cycles;
    }
}

impl Mul<f64> for Amount {
    type Output = Amount;

    fn mul(self, factor: f64) -> Amount {
        Amount {
            usd: self.usd * factor,
            cycles: self.cycles * factor,
        }
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}
