//! Ready-made workloads that instantiate and parameterize features.

use crate::feature::Feature;
use crate::value::{INSTRUCTION_VALUES, STORAGE_VALUES};
use crate::variants::{Caller, Canister, Ingress, MemoryAllocation, Storage, Timer};

/// Smallest table index whose tier covers `needed`, clamped to the largest
/// tier when nothing does.
fn index_covering(table: &[u64], needed: u64) -> usize {
    table
        .iter()
        .position(|&tier| tier >= needed)
        .unwrap_or(table.len() - 1)
}

/// A static landing page: one canister and some storage.
pub fn landing_page() -> Vec<Box<dyn Feature>> {
    vec![
        Box::new(Canister::default()),
        Box::new(Storage::default()),
    ]
}

/// A social network sized for `users` daily active users.
pub fn social_network(users: u64) -> Vec<Box<dyn Feature>> {
    const BYTES_PER_USER: u64 = 100_000_000;
    const INGRESS_PER_USER: u64 = 10;
    const INSTRUCTIONS_PER_INGRESS: u64 = 10_000_000;
    const INSTRUCTIONS_PER_TIMER: u64 = 10_000_000_000;

    let mut storage = Storage::default();
    storage.storage_index = index_covering(STORAGE_VALUES, users.saturating_mul(BYTES_PER_USER));

    let mut ingress = Ingress::default();
    ingress.count = users * INGRESS_PER_USER;
    ingress.instruction_index = index_covering(INSTRUCTION_VALUES, INSTRUCTIONS_PER_INGRESS);

    let mut timer = Timer::default();
    timer.instruction_index = index_covering(INSTRUCTION_VALUES, INSTRUCTIONS_PER_TIMER);

    vec![
        Box::new(Canister::default()),
        Box::new(storage),
        Box::new(ingress),
        Box::new(timer),
    ]
}

/// A decentralized exchange handling `trades_per_day` trades.
pub fn decentralized_exchange(trades_per_day: u64) -> Vec<Box<dyn Feature>> {
    const INGRESS_PER_TRADE: u64 = 1;
    const CALLS_PER_TRADE: u64 = 2;
    const STORAGE_BYTES_PER_TRADE: u64 = 4096;
    const STORAGE_HISTORY_DAYS: u64 = 365;
    const INSTRUCTIONS_PER_TIMER: u64 = 10_000_000_000;

    let mut storage = Storage::default();
    storage.storage_index = index_covering(
        STORAGE_VALUES,
        trades_per_day
            .saturating_mul(STORAGE_BYTES_PER_TRADE)
            .saturating_mul(STORAGE_HISTORY_DAYS),
    );

    let mut ingress = Ingress::default();
    ingress.count = trades_per_day * INGRESS_PER_TRADE;

    let mut call = Caller::default();
    call.count = trades_per_day * CALLS_PER_TRADE;

    let mut timer = Timer::default();
    timer.instruction_index = index_covering(INSTRUCTION_VALUES, INSTRUCTIONS_PER_TIMER);

    vec![
        Box::new(Canister::default()),
        Box::new(storage),
        Box::new(ingress),
        Box::new(call),
        Box::new(timer),
    ]
}

/// A data-heavy service storing `users` user payloads across a fleet of
/// canisters, with a matching memory reservation per storage shard.
pub fn large_data(users: u64) -> Vec<Box<dyn Feature>> {
    const CANISTERS: u64 = 20;
    const INGRESS_PER_USER: u64 = 1;
    const USERS_PER_DAY: u64 = 100;
    const STORAGE_BYTES_PER_USER: u64 = 4_000_000;
    const SHARD_BYTES: u64 = 100_000_000_000;

    // One 100 GB shard per started 100 GB of user data.
    let shards = users
        .saturating_mul(STORAGE_BYTES_PER_USER)
        .div_ceil(SHARD_BYTES)
        .max(1);
    let shard_index = index_covering(STORAGE_VALUES, SHARD_BYTES);

    let mut canister = Canister::default();
    canister.count = CANISTERS;

    let mut storage = Storage::default();
    storage.count = shards;
    storage.storage_index = shard_index;

    let mut memory_allocation = MemoryAllocation::default();
    memory_allocation.count = shards;
    memory_allocation.storage_index = shard_index;

    let mut ingress = Ingress::default();
    ingress.count = USERS_PER_DAY * INGRESS_PER_USER;

    vec![
        Box::new(canister),
        Box::new(storage),
        Box::new(memory_allocation),
        Box::new(ingress),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclo_pricing::FlatPricer;

    #[test]
    fn test_index_covering() {
        assert_eq!(index_covering(&[10, 100, 1000], 5), 0);
        assert_eq!(index_covering(&[10, 100, 1000], 100), 1);
        assert_eq!(index_covering(&[10, 100, 1000], 101), 2);
        // Nothing covers the demand: clamp to the largest tier.
        assert_eq!(index_covering(&[10, 100, 1000], 5000), 2);
    }

    #[test]
    fn test_landing_page_shape() {
        let features = landing_page();
        let labels: Vec<_> = features.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Canister", "Storage"]);
    }

    #[test]
    fn test_social_network_scales_with_users() {
        let small = social_network(10);
        let large = social_network(10_000);

        let storage_index = |features: &[Box<dyn Feature>]| {
            features
                .iter()
                .find(|f| f.label() == "Storage")
                .unwrap()
                .fields_value()
                .unwrap()["storage_index"]
                .as_u64()
                .unwrap()
        };
        assert!(storage_index(&large) > storage_index(&small));
    }

    #[test]
    fn test_large_data_reserves_matching_memory() {
        // 1M users at 4 MB each is 4 TB, i.e. 40 shards of 100 GB.
        let features = large_data(1_000_000);
        let labels: Vec<_> = features.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["Canister", "Storage", "MemoryAllocation", "Ingress"]
        );

        let count = |label: &str| {
            features
                .iter()
                .find(|f| f.label() == label)
                .unwrap()
                .fields_value()
                .unwrap()["count"]
                .as_u64()
                .unwrap()
        };
        assert_eq!(count("Canister"), 20);
        assert_eq!(count("Storage"), 40);
        assert_eq!(count("MemoryAllocation"), count("Storage"));
    }

    #[test]
    fn test_large_data_never_drops_to_zero_shards() {
        let features = large_data(1);
        let storage = features.iter().find(|f| f.label() == "Storage").unwrap();
        assert_eq!(storage.fields_value().unwrap()["count"], 1);
    }

    #[test]
    fn test_presets_are_priceable() {
        for features in [
            landing_page(),
            social_network(100),
            decentralized_exchange(100),
            large_data(100),
        ] {
            for feature in features {
                assert!(!feature.cost(&FlatPricer).is_empty());
            }
        }
    }
}
