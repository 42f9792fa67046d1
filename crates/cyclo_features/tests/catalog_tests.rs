//! Integration tests for the feature catalog.

use cyclo_cost::{Category, Kind};
use cyclo_features::{registry, FieldKind};
use cyclo_pricing::{FlatPricer, SubnetPricer};

/// Every catalog entry builds an instance whose label matches its key and
/// whose breakdown is non-empty under any pricer.
#[test]
fn test_every_variant_builds_and_prices() {
    let pricer = SubnetPricer::new(13);

    for entry in registry::catalog() {
        let feature = entry.build();
        assert_eq!(feature.label(), entry.label());

        let breakdown = feature.cost(&pricer);
        assert!(
            !breakdown.is_empty(),
            "{} produced an empty breakdown",
            entry.label()
        );
        for item in breakdown.items() {
            assert_ne!(
                item.category(),
                Category::Total,
                "{} produced a reserved Total row",
                entry.label()
            );
        }
    }
}

/// Every advertised field key is accepted by `set`, and the mutation is
/// visible in the next field snapshot.
#[test]
fn test_field_schema_matches_setters() {
    for entry in registry::catalog() {
        let mut feature = entry.build();
        let mut expected = Vec::new();

        for field in feature.fields() {
            let new_value = match &field.kind {
                FieldKind::Increment => field.value + 1,
                // Stay inside the table.
                FieldKind::Range { .. } => 0,
            };
            feature
                .set(field.key, new_value)
                .unwrap_or_else(|e| panic!("{}: {}", entry.label(), e));
            expected.push((field.key, new_value));
        }

        let snapshot: Vec<_> = feature.fields().iter().map(|f| (f.key, f.value)).collect();
        assert_eq!(snapshot, expected, "{}", entry.label());
    }
}

/// Setting an unknown key fails and names the feature.
#[test]
fn test_unknown_key_is_rejected_everywhere() {
    for entry in registry::catalog() {
        let mut feature = entry.build();
        let err = feature.set("no_such_field", 1).unwrap_err();
        assert!(err.to_string().contains(entry.label()));
    }
}

/// The concrete repeat scenario: count 100 at "once", "every day", and
/// "every hour".
#[test]
fn test_ingress_repeat_scenarios() {
    let entry = registry::find("Ingress").unwrap();

    let expectations = [(0u64, Kind::OneTime, 100.0), (3, Kind::PerDay, 100.0), (4, Kind::PerDay, 2400.0)];
    for (repeat_index, kind, cycles) in expectations {
        let mut ingress = entry.build();
        ingress.set("count", 100).unwrap();
        ingress.set("repeat_index", repeat_index).unwrap();

        let breakdown = ingress.cost(&FlatPricer);
        assert_eq!(breakdown.len(), 2);
        for item in breakdown.items() {
            assert_eq!(item.kind(), kind);
            assert_eq!(item.amount().cycles, cycles);
        }
    }
}

/// Two features contributing to the same category collapse into one line
/// when their breakdowns are merged.
#[test]
fn test_categories_collapse_across_features() {
    let ingress = registry::find("Ingress").unwrap().build();
    let query = registry::find("Query").unwrap().build();

    let mut merged = ingress.cost(&FlatPricer);
    merged.merge(&query.cost(&FlatPricer));

    // Both contribute IngressExecution + IngressNetwork with the same kind.
    assert_eq!(merged.len(), 2);
}

/// Structural equality across type erasure.
#[test]
fn test_eq_dyn() {
    let a = registry::find("Storage").unwrap().build();
    let mut b = registry::find("Storage").unwrap().build();
    assert!(a.eq_dyn(b.as_ref()));

    b.set("storage_index", 5).unwrap();
    assert!(!a.eq_dyn(b.as_ref()));

    let other = registry::find("Canister").unwrap().build();
    assert!(!a.eq_dyn(other.as_ref()));
}
