//! # cyclo_pricing
//!
//! The pricing engine for cyclo.
//!
//! Features never embed fee formulas. They resolve their configured physical
//! quantities (bytes, instructions, percent, repetitions) and hand them to a
//! [`Pricer`], an explicitly passed context value. [`SubnetPricer`] is the
//! production implementation: the published Internet Computer fee schedule,
//! parameterized by subnet size. [`FlatPricer`] is a deterministic double for
//! tests that need exact arithmetic independent of the fee constants.

pub mod flat;
pub mod pricer;
pub mod subnet;

pub use flat::FlatPricer;
pub use pricer::{Direction, Mode, Pricer};
pub use subnet::{SubnetPricer, SUBNET_SIZES};
