//! The deduplicated collection of priced line items.

use crate::amount::Amount;
use crate::cost::{Category, Cost, Kind};

/// Aggregate one-time and per-day costs, each under [`Category::Total`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalCost {
    pub one_time: Cost,
    pub per_day: Cost,
}

impl TotalCost {
    /// Project the total over a horizon: one-time plus `days` worth of the
    /// per-day total.
    pub fn project(&self, days: f64) -> Amount {
        self.one_time.project(days) + self.per_day.project(days)
    }
}

/// An ordered collection of line items built incrementally by insertion.
///
/// Insertion merges into an existing mergeable item if one exists, otherwise
/// appends, so no two stored items ever share both kind and category. The
/// scan per insert is linear, which is fine: the number of distinct
/// (kind, category) pairs is bounded by the category enum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown {
    items: Vec<Cost>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a line item, merging it into the first mergeable match.
    pub fn add(&mut self, cost: Cost) {
        for item in &mut self.items {
            if item.merge_if_same_category_and_kind(&cost) {
                return;
            }
        }
        self.items.push(cost);
    }

    /// Insert every item of `other` in iteration order.
    pub fn merge(&mut self, other: &Breakdown) {
        for item in &other.items {
            self.add(*item);
        }
    }

    /// Stable ordering by category declaration order, then kind.
    ///
    /// A presentation aid only; totals are unaffected.
    pub fn sort(&mut self) {
        self.items.sort_by_key(|item| (item.category(), item.kind()));
    }

    pub fn items(&self) -> &[Cost] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fold all items into one aggregate one-time cost and one aggregate
    /// per-day cost.
    pub fn total(&self) -> TotalCost {
        let mut one_time = Cost::zero(Kind::OneTime, Category::Total);
        for item in &self.items {
            one_time.merge_if_same_kind(item);
        }

        let mut per_day = Cost::zero(Kind::PerDay, Category::Total);
        for item in &self.items {
            per_day.merge_if_same_kind(item);
        }

        TotalCost { one_time, per_day }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: Kind, category: Category, usd: f64, cycles: f64) -> Cost {
        Cost::new(kind, category, Amount::new(usd, cycles))
    }

    #[test]
    fn test_add_merges_duplicates() {
        let mut breakdown = Breakdown::new();
        breakdown.add(item(Kind::PerDay, Category::Storage, 1.0, 100.0));
        breakdown.add(item(Kind::PerDay, Category::Storage, 2.0, 200.0));

        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown.items()[0].amount(), Amount::new(3.0, 300.0));
    }

    #[test]
    fn test_add_keeps_distinct_pairs_separate() {
        let mut breakdown = Breakdown::new();
        breakdown.add(item(Kind::OneTime, Category::Storage, 1.0, 100.0));
        breakdown.add(item(Kind::PerDay, Category::Storage, 2.0, 200.0));
        breakdown.add(item(Kind::PerDay, Category::Timer, 3.0, 300.0));

        assert_eq!(breakdown.len(), 3);
    }

    #[test]
    fn test_no_mergeable_pair_survives_any_add_sequence() {
        let inputs = [
            item(Kind::OneTime, Category::Canister, 1.0, 1.0),
            item(Kind::PerDay, Category::Storage, 1.0, 1.0),
            item(Kind::OneTime, Category::Canister, 2.0, 2.0),
            item(Kind::PerDay, Category::Storage, 3.0, 3.0),
            item(Kind::OneTime, Category::Storage, 4.0, 4.0),
            item(Kind::PerDay, Category::Storage, 5.0, 5.0),
        ];

        let mut breakdown = Breakdown::new();
        for input in inputs {
            breakdown.add(input);
        }

        for (i, a) in breakdown.items().iter().enumerate() {
            for b in &breakdown.items()[i + 1..] {
                assert!(
                    a.category() != b.category() || a.kind() != b.kind(),
                    "duplicate (kind, category) pair survived: {:?}",
                    a
                );
            }
        }
    }

    #[test]
    fn test_aggregation_is_commutative() {
        let a = item(Kind::OneTime, Category::Canister, 1.0, 100.0);
        let b = item(Kind::PerDay, Category::Storage, 0.5, 50.0);

        let mut ab = Breakdown::new();
        ab.add(a);
        ab.add(b);

        let mut ba = Breakdown::new();
        ba.add(b);
        ba.add(a);

        assert_eq!(ab.total(), ba.total());
    }

    #[test]
    fn test_merge_is_equivalent_to_adding_items() {
        let mut left = Breakdown::new();
        left.add(item(Kind::PerDay, Category::Storage, 1.0, 100.0));

        let mut right = Breakdown::new();
        right.add(item(Kind::PerDay, Category::Storage, 2.0, 200.0));
        right.add(item(Kind::OneTime, Category::Canister, 3.0, 300.0));

        left.merge(&right);

        assert_eq!(left.len(), 2);
        let total = left.total();
        assert_eq!(total.per_day.amount(), Amount::new(3.0, 300.0));
        assert_eq!(total.one_time.amount(), Amount::new(3.0, 300.0));
    }

    #[test]
    fn test_sort_orders_by_category_then_kind() {
        let mut breakdown = Breakdown::new();
        breakdown.add(item(Kind::PerDay, Category::Timer, 1.0, 1.0));
        breakdown.add(item(Kind::PerDay, Category::Canister, 1.0, 1.0));
        breakdown.add(item(Kind::OneTime, Category::Timer, 1.0, 1.0));

        let total_before = breakdown.total();
        breakdown.sort();

        let order: Vec<_> = breakdown
            .items()
            .iter()
            .map(|c| (c.category(), c.kind()))
            .collect();
        assert_eq!(
            order,
            vec![
                (Category::Canister, Kind::PerDay),
                (Category::Timer, Kind::OneTime),
                (Category::Timer, Kind::PerDay),
            ]
        );
        assert_eq!(breakdown.total(), total_before);
    }

    #[test]
    fn test_total_concrete_scenario() {
        let mut breakdown = Breakdown::new();
        breakdown.add(item(Kind::OneTime, Category::Canister, 1.0, 100.0));
        breakdown.add(item(Kind::PerDay, Category::Storage, 0.5, 50.0));

        let total = breakdown.total();
        assert_eq!(total.one_time.kind(), Kind::OneTime);
        assert_eq!(total.one_time.category(), Category::Total);
        assert_eq!(total.one_time.amount(), Amount::new(1.0, 100.0));
        assert_eq!(total.per_day.amount(), Amount::new(0.5, 50.0));
        assert_eq!(total.per_day.project(30.0), Amount::new(15.0, 1500.0));
    }

    #[test]
    fn test_total_of_empty_breakdown_is_zero() {
        let total = Breakdown::new().total();
        assert!(total.one_time.amount().is_zero());
        assert!(total.per_day.amount().is_zero());
    }
}
