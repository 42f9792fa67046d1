//! A single priced line item.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Whether a cost is charged once or recurs per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    OneTime,
    PerDay,
}

/// The billing classification of a line item.
///
/// Categories are intentionally coarse and fixed so that unrelated features
/// contributing to the same category collapse into one reportable line. The
/// declared order is the display order. [`Category::Total`] is reserved for
/// aggregate rows and never appears in a feature-produced breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Canister,
    Storage,
    Compute,
    IngressExecution,
    IngressNetwork,
    CallExecution,
    CallNetwork,
    Timer,
    Heartbeat,
    HttpOutcall,
    Ecdsa,
    Schnorr,
    Total,
}

impl Category {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Canister => "Canister",
            Category::Storage => "Storage",
            Category::Compute => "Compute",
            Category::IngressExecution => "Execution:Ingress",
            Category::IngressNetwork => "Network:Ingress",
            Category::CallExecution => "Execution:Call",
            Category::CallNetwork => "Network:Call",
            Category::Timer => "Timer",
            Category::Heartbeat => "Heartbeat",
            Category::HttpOutcall => "HttpOutcall",
            Category::Ecdsa => "Ecdsa",
            Category::Schnorr => "Schnorr",
            Category::Total => "Total",
        }
    }
}

/// A `(Kind, Category, Amount)` triple.
///
/// Two line items are mergeable iff both kind and category match; merging
/// sums their amounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    kind: Kind,
    category: Category,
    amount: Amount,
}

impl Cost {
    pub fn new(kind: Kind, category: Category, amount: Amount) -> Self {
        Self {
            kind,
            category,
            amount,
        }
    }

    /// A zero-amount cost of the given kind, used as a fold seed.
    pub fn zero(kind: Kind, category: Category) -> Self {
        Self::new(kind, category, Amount::ZERO)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Sum `other` into this item if the kinds match.
    ///
    /// Returns `false` and leaves `self` untouched otherwise.
    pub fn merge_if_same_kind(&mut self, other: &Cost) -> bool {
        if self.kind == other.kind {
            self.amount += other.amount;
            return true;
        }
        false
    }

    /// Sum `other` into this item if both category and kind match.
    ///
    /// This is the predicate [`crate::Breakdown`] uses for deduplication.
    pub fn merge_if_same_category_and_kind(&mut self, other: &Cost) -> bool {
        if self.category == other.category {
            return self.merge_if_same_kind(other);
        }
        false
    }

    /// Project this item over a horizon of `days`.
    ///
    /// One-time costs are returned unchanged; per-day costs are scaled by
    /// `days`. `days` must be non-negative; fractional values are allowed.
    pub fn project(&self, days: f64) -> Amount {
        debug_assert!(days >= 0.0, "projection horizon must be non-negative");
        match self.kind {
            Kind::OneTime => self.amount,
            Kind::PerDay => self.amount * days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_same_kind() {
        let mut a = Cost::new(Kind::OneTime, Category::Canister, Amount::new(1.0, 100.0));
        let b = Cost::new(Kind::OneTime, Category::Storage, Amount::new(0.5, 50.0));

        assert!(a.merge_if_same_kind(&b));
        assert_eq!(a.amount(), Amount::new(1.5, 150.0));
    }

    #[test]
    fn test_merge_different_kind_leaves_self_untouched() {
        let mut a = Cost::new(Kind::OneTime, Category::Canister, Amount::new(1.0, 100.0));
        let b = Cost::new(Kind::PerDay, Category::Canister, Amount::new(0.5, 50.0));

        assert!(!a.merge_if_same_kind(&b));
        assert_eq!(a.amount(), Amount::new(1.0, 100.0));
    }

    #[test]
    fn test_merge_same_category_and_kind() {
        let mut a = Cost::new(
            Kind::PerDay,
            Category::IngressExecution,
            Amount::new(2.0, 200.0),
        );
        let same = Cost::new(
            Kind::PerDay,
            Category::IngressExecution,
            Amount::new(1.0, 100.0),
        );
        let other_category = Cost::new(Kind::PerDay, Category::Timer, Amount::new(1.0, 100.0));

        assert!(!a.merge_if_same_category_and_kind(&other_category));
        assert_eq!(a.amount(), Amount::new(2.0, 200.0));

        assert!(a.merge_if_same_category_and_kind(&same));
        assert_eq!(a.amount(), Amount::new(3.0, 300.0));
    }

    #[test]
    fn test_project_one_time_is_identity() {
        let cost = Cost::new(Kind::OneTime, Category::Canister, Amount::new(1.0, 100.0));
        assert_eq!(cost.project(0.0), Amount::new(1.0, 100.0));
        assert_eq!(cost.project(365.0), Amount::new(1.0, 100.0));
    }

    #[test]
    fn test_project_per_day_scales() {
        let cost = Cost::new(Kind::PerDay, Category::Storage, Amount::new(0.5, 50.0));
        assert_eq!(cost.project(30.0), Amount::new(15.0, 1500.0));
        assert_eq!(cost.project(0.5), Amount::new(0.25, 25.0));
    }

    #[test]
    fn test_category_display_order_follows_declaration() {
        assert!(Category::Canister < Category::Storage);
        assert!(Category::Storage < Category::IngressExecution);
        assert!(Category::Schnorr < Category::Total);
    }
}
