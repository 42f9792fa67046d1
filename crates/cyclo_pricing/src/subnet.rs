//! The Internet Computer fee schedule, parameterized by subnet size.

use cyclo_cost::Amount;

use crate::pricer::{Direction, Mode, Pricer};

/// Subnet sizes supported by the configuration's network-size selector.
pub const SUBNET_SIZES: &[u32] = &[13, 28, 34, 40];

/// Baseline subnet size the published cycle fees are quoted for.
const BASELINE_SUBNET_SIZE: f64 = 13.0;

/// 1 XDR buys exactly one trillion cycles.
const CYCLES_PER_XDR: f64 = 1e12;

/// Fixed XDR to USD conversion rate.
const XDR_USD: f64 = 1.336_610;

const SECONDS_PER_DAY: f64 = 24.0 * 3600.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

// Cycle fees at the 13-node baseline.
const CANISTER_CREATION_FEE: f64 = 500_000_000_000.0;
const UPDATE_MESSAGE_EXECUTION_FEE: f64 = 590_000.0;
const UPDATE_INSTRUCTION_FEE: f64 = 0.4;
const GIB_STORAGE_PER_SECOND_FEE: f64 = 127_000.0;
const COMPUTE_PERCENT_ALLOCATED_PER_SECOND_FEE: f64 = 10_000_000.0;
const INGRESS_MESSAGE_RECEPTION_FEE: f64 = 1_200_000.0;
const INGRESS_BYTE_RECEPTION_FEE: f64 = 2_000.0;
const XNET_CALL_FEE: f64 = 260_000.0;
const XNET_BYTE_TRANSMISSION_FEE: f64 = 1_000.0;

// HTTP outcall fees depend on the subnet size directly rather than through
// the baseline ratio.
const HTTP_OUTCALL_BASE_FEE: f64 = 3_000_000.0;
const HTTP_OUTCALL_PER_NODE_FEE: f64 = 60_000.0;
const HTTP_OUTCALL_REQUEST_BYTE_FEE: f64 = 400.0;
const HTTP_OUTCALL_RESPONSE_BYTE_FEE: f64 = 800.0;

// Threshold signatures are produced by a dedicated signing subnet, so the
// fee does not scale with the selected subnet size.
const SIGNATURE_FEE: f64 = 26_153_846_153.0;

/// The production [`Pricer`]: published cycle fees scaled linearly by the
/// ratio of the selected subnet size to the 13-node baseline, with the USD
/// component derived through the XDR peg.
///
/// Changing the network size means constructing a new `SubnetPricer`; there
/// is no hidden process-wide parameterization.
#[derive(Debug, Clone, Copy)]
pub struct SubnetPricer {
    subnet_size: u32,
}

impl SubnetPricer {
    pub fn new(subnet_size: u32) -> Self {
        Self { subnet_size }
    }

    pub fn subnet_size(&self) -> u32 {
        self.subnet_size
    }

    fn scale(&self) -> f64 {
        f64::from(self.subnet_size) / BASELINE_SUBNET_SIZE
    }

    fn amount(cycles: f64) -> Amount {
        Amount::new(cycles / CYCLES_PER_XDR * XDR_USD, cycles)
    }
}

impl Pricer for SubnetPricer {
    fn canister_creation(&self, count: f64) -> Amount {
        Self::amount(CANISTER_CREATION_FEE * self.scale() * count)
    }

    fn execution(&self, mode: Mode, instructions: u64, count: f64) -> Amount {
        match mode {
            Mode::Replicated => {
                let cycles =
                    UPDATE_MESSAGE_EXECUTION_FEE + UPDATE_INSTRUCTION_FEE * instructions as f64;
                Self::amount(cycles * self.scale() * count)
            }
            // Queries are not charged.
            Mode::NonReplicated => Amount::ZERO,
        }
    }

    fn storage(&self, bytes: u64, days: f64, count: f64) -> Amount {
        let gib_seconds = bytes as f64 / GIB * days * SECONDS_PER_DAY;
        Self::amount(GIB_STORAGE_PER_SECOND_FEE * gib_seconds * self.scale() * count)
    }

    fn memory_allocation(&self, bytes: u64, days: f64, count: f64) -> Amount {
        // Reserved memory is charged at the storage rate whether used or not.
        self.storage(bytes, days, count)
    }

    fn compute_allocation(&self, percent: u64, days: f64, count: f64) -> Amount {
        let cycles =
            COMPUTE_PERCENT_ALLOCATED_PER_SECOND_FEE * percent as f64 * days * SECONDS_PER_DAY;
        Self::amount(cycles * self.scale() * count)
    }

    fn message(&self, mode: Mode, direction: Direction, bytes: u64, count: f64) -> Amount {
        match mode {
            Mode::Replicated => {
                let cycles = match direction {
                    Direction::UserToCanister => {
                        INGRESS_MESSAGE_RECEPTION_FEE + INGRESS_BYTE_RECEPTION_FEE * bytes as f64
                    }
                    Direction::CanisterToCanister => {
                        XNET_CALL_FEE + XNET_BYTE_TRANSMISSION_FEE * bytes as f64
                    }
                };
                Self::amount(cycles * self.scale() * count)
            }
            Mode::NonReplicated => Amount::ZERO,
        }
    }

    fn http_outcall(&self, request: u64, response: u64, count: f64) -> Amount {
        let nodes = f64::from(self.subnet_size);
        let cycles = HTTP_OUTCALL_BASE_FEE
            + HTTP_OUTCALL_PER_NODE_FEE * nodes
            + HTTP_OUTCALL_REQUEST_BYTE_FEE * nodes * request as f64
            + HTTP_OUTCALL_RESPONSE_BYTE_FEE * nodes * response as f64;
        Self::amount(cycles * count)
    }

    fn sign_with_ecdsa(&self, _message: u64, _signature: u64, count: f64) -> Amount {
        Self::amount(SIGNATURE_FEE * count)
    }

    fn sign_with_schnorr(&self, _message: u64, _signature: u64, count: f64) -> Amount {
        Self::amount(SIGNATURE_FEE * count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canister_creation_at_baseline() {
        let pricer = SubnetPricer::new(13);
        let amount = pricer.canister_creation(1.0);
        assert_eq!(amount.cycles, 500_000_000_000.0);
        assert!((amount.usd - 0.5 * XDR_USD).abs() < 1e-9);
    }

    #[test]
    fn test_fees_scale_with_subnet_size() {
        let small = SubnetPricer::new(13);
        let large = SubnetPricer::new(26);
        assert_eq!(
            large.canister_creation(1.0).cycles,
            2.0 * small.canister_creation(1.0).cycles
        );
        assert_eq!(
            large.storage(1 << 30, 1.0, 1.0).cycles,
            2.0 * small.storage(1 << 30, 1.0, 1.0).cycles
        );
    }

    #[test]
    fn test_queries_are_free() {
        let pricer = SubnetPricer::new(13);
        assert!(pricer
            .execution(Mode::NonReplicated, 1_000_000, 100.0)
            .is_zero());
        assert!(pricer
            .message(Mode::NonReplicated, Direction::UserToCanister, 1024, 100.0)
            .is_zero());
    }

    #[test]
    fn test_storage_gib_day_at_baseline() {
        let pricer = SubnetPricer::new(13);
        let amount = pricer.storage(1 << 30, 1.0, 1.0);
        assert_eq!(amount.cycles, GIB_STORAGE_PER_SECOND_FEE * SECONDS_PER_DAY);
    }

    #[test]
    fn test_count_is_a_linear_multiplier() {
        let pricer = SubnetPricer::new(13);
        let one = pricer.http_outcall(1024, 1024, 1.0);
        let many = pricer.http_outcall(1024, 1024, 2400.0);
        assert!((many.cycles - 2400.0 * one.cycles).abs() < 1.0);
    }

    #[test]
    fn test_fractional_count() {
        let pricer = SubnetPricer::new(13);
        let monthly = pricer.sign_with_ecdsa(32, 32, 1.0 / 30.0);
        assert!((monthly.cycles - SIGNATURE_FEE / 30.0).abs() < 1e-3);
    }
}
