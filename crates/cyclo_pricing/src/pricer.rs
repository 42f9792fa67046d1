//! The pricing seam between features and the fee schedule.

use cyclo_cost::Amount;

/// Execution mode of a message.
///
/// Replicated work runs on every node of the subnet and is charged;
/// non-replicated (query) work runs on a single node and is currently free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Replicated,
    NonReplicated,
}

/// Who is talking to whom, for network fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    UserToCanister,
    CanisterToCanister,
}

/// A set of pure pricing functions keyed by physical quantity.
///
/// Every method returns the price of `count` occurrences of the described
/// work. `count` may be fractional: a monthly repetition amortized per day
/// contributes 1/30 of an occurrence.
pub trait Pricer {
    /// One-time fee for creating `count` canisters.
    fn canister_creation(&self, count: f64) -> Amount;

    /// Executing `instructions` instructions, `count` times.
    fn execution(&self, mode: Mode, instructions: u64, count: f64) -> Amount;

    /// Keeping `bytes` of storage for `days`, `count` times.
    fn storage(&self, bytes: u64, days: f64, count: f64) -> Amount;

    /// Reserving `bytes` of memory allocation for `days`, `count` times.
    fn memory_allocation(&self, bytes: u64, days: f64, count: f64) -> Amount;

    /// Reserving `percent` of an execution core for `days`, `count` times.
    fn compute_allocation(&self, percent: u64, days: f64, count: f64) -> Amount;

    /// Transferring `bytes` of message payload, `count` times.
    fn message(&self, mode: Mode, direction: Direction, bytes: u64, count: f64) -> Amount;

    /// An HTTP outcall with the given request and response sizes, `count` times.
    fn http_outcall(&self, request: u64, response: u64, count: f64) -> Amount;

    /// A threshold ECDSA signature over `message` bytes yielding a
    /// `signature`-byte signature, `count` times.
    fn sign_with_ecdsa(&self, message: u64, signature: u64, count: f64) -> Amount;

    /// A threshold Schnorr signature, `count` times.
    fn sign_with_schnorr(&self, message: u64, signature: u64, count: f64) -> Amount;
}
