//! # cyclo_cost
//!
//! The cost aggregation engine for cyclo.
//!
//! This crate defines the monetary value type ([`Amount`]), a single priced
//! line item ([`Cost`]) and the aggregator that merges heterogeneous line
//! items into one reconcilable total ([`Breakdown`]).
//!
//! Everything here is a pure computation over in-memory state: no operation
//! blocks, suspends, or performs I/O.
//!
//! ## Example
//!
//! ```rust
//! use cyclo_cost::{Amount, Breakdown, Category, Cost, Kind};
//!
//! let mut breakdown = Breakdown::new();
//! breakdown.add(Cost::new(Kind::OneTime, Category::Canister, Amount::new(1.0, 100.0)));
//! breakdown.add(Cost::new(Kind::PerDay, Category::Storage, Amount::new(0.5, 50.0)));
//!
//! let total = breakdown.total();
//! assert_eq!(total.one_time.amount(), Amount::new(1.0, 100.0));
//! assert_eq!(total.per_day.project(30.0), Amount::new(15.0, 1500.0));
//! ```

pub mod amount;
pub mod breakdown;
pub mod cost;

pub use amount::Amount;
pub use breakdown::{Breakdown, TotalCost};
pub use cost::{Category, Cost, Kind};
