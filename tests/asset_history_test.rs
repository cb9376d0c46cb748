// tests/asset_history_test.rs
use option_lattice::market::{create_asset, set_price};
use proptest::prelude::*;

#[test]
fn test_create_asset_seeds_single_entry() {
    let asset = create_asset("ACME", 250.5).expect("Valid asset");
    let history = asset.borrow();

    assert_eq!(history.price_history().len(), 1);
    assert_eq!(history.price_history()[0].price, 250.5);
    assert_eq!(history.current_price(), 250.5);
    assert_eq!(history.initial_price(), 250.5);
}

#[test]
fn test_rejected_update_leaves_history_untouched() {
    let mut asset = create_asset("ACME", 100.0).expect("Valid asset");
    set_price(&mut asset, 101.0).expect("Positive price");

    assert!(set_price(&mut asset, -3.0).is_err());
    assert!(set_price(&mut asset, f64::NAN).is_err());

    let asset = asset.borrow();
    assert_eq!(asset.price_history().len(), 2);
    assert_eq!(asset.current_price(), 101.0);
}

fn price_strategy() -> impl Strategy<Value = f64> {
    0.01f64..10_000.0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_history_is_append_only(
        initial in price_strategy(),
        updates in proptest::collection::vec(price_strategy(), 0..50),
    ) {
        let mut asset = create_asset("PROP", initial).unwrap();

        for (k, &price) in updates.iter().enumerate() {
            set_price(&mut asset, price).unwrap();

            let snapshot = asset.borrow();
            prop_assert_eq!(snapshot.price_history().len(), k + 2);
            prop_assert_eq!(snapshot.price_history().last().unwrap().price, snapshot.current_price());
        }

        let snapshot = asset.borrow();
        let mut expected = vec![initial];
        expected.extend(updates.iter().copied());
        let recorded: Vec<f64> = snapshot.prices().collect();
        prop_assert_eq!(recorded, expected);
        prop_assert_eq!(snapshot.initial_price(), initial);
        prop_assert!(snapshot
            .price_history()
            .windows(2)
            .all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn test_running_extremes_bound_history(
        initial in price_strategy(),
        updates in proptest::collection::vec(price_strategy(), 0..50),
    ) {
        let mut asset = create_asset("PROP", initial).unwrap();
        for &price in &updates {
            set_price(&mut asset, price).unwrap();
        }

        let snapshot = asset.borrow();
        let max = snapshot.running_max();
        let min = snapshot.running_min();
        prop_assert!(min <= max);
        for price in snapshot.prices() {
            prop_assert!(min <= price && price <= max);
        }
        prop_assert!(snapshot.prices().any(|p| p == max));
        prop_assert!(snapshot.prices().any(|p| p == min));
    }
}
