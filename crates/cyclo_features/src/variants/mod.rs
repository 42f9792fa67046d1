//! The feature catalog, one implementation per billable variant.
//!
//! Variants are deliberately near-identical records of counts and table
//! indices; each one independently implements the same small capability set
//! rather than sharing a base type.

pub mod canister;
pub mod compute;
pub mod messaging;
pub mod outcall;
pub mod scheduling;
pub mod signing;
pub mod storage;

pub use canister::Canister;
pub use compute::ComputeAllocation;
pub use messaging::{Callee, Caller, Ingress, Query};
pub use outcall::HttpOutcall;
pub use scheduling::{Heartbeat, Timer};
pub use signing::{Ecdsa, Schnorr};
pub use storage::{MemoryAllocation, Storage};
