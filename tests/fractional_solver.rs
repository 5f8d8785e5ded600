use budget_core::item::Item;
use budget_core::solve_fractional;
use budget_core::types::{FractionalEntry, InvalidInput, SelectionPlan};

fn item(name: &str, price: f64, value: f64) -> Item {
    Item::new(name, price, value).unwrap()
}

fn entries(plan: &SelectionPlan) -> Vec<FractionalEntry> {
    match plan {
        SelectionPlan::Fractional { entries } => entries.clone(),
        other => panic!("fractional solver must return a fractional plan, got {other:?}"),
    }
}

#[test]
fn test_fractional_reference_scenario() {
    let items = vec![
        item("A", 10.0, 60.0),
        item("B", 20.0, 100.0),
        item("C", 30.0, 120.0),
    ];

    let result = solve_fractional(50.0, &items).unwrap();
    let picked = entries(&result.selection);

    // Ratios 6, 5, 4: A and B whole, then 20/30 of C
    assert_eq!(picked.len(), 3);
    assert_eq!((picked[0].index, picked[0].fraction), (0, 1.0));
    assert_eq!((picked[1].index, picked[1].fraction), (1, 1.0));
    assert_eq!(picked[2].index, 2);
    assert!((picked[2].fraction - 2.0 / 3.0).abs() < 1e-12);

    assert_eq!(result.total_cost, 50.0);
    assert!((result.total_value - 240.0).abs() < 1e-9);
}

#[test]
fn test_fractional_order_is_by_ratio_not_catalog() {
    let items = vec![
        item("cheap_low", 10.0, 10.0),   // ratio 1
        item("pricey_high", 10.0, 50.0), // ratio 5
        item("mid", 10.0, 30.0),         // ratio 3
    ];

    let result = solve_fractional(100.0, &items).unwrap();
    let order: Vec<usize> = entries(&result.selection).iter().map(|e| e.index).collect();

    assert_eq!(order, vec![1, 2, 0]);
    assert_eq!(result.total_cost, 30.0);
    assert_eq!(result.total_value, 90.0);
}

#[test]
fn test_fractional_equal_ratios_keep_catalog_order() {
    let items = vec![item("X", 10.0, 10.0), item("Y", 20.0, 20.0)];

    let result = solve_fractional(15.0, &items).unwrap();
    let picked = entries(&result.selection);

    assert_eq!(picked[0], FractionalEntry { index: 0, fraction: 1.0 });
    assert_eq!(picked[1], FractionalEntry { index: 1, fraction: 0.25 });
    assert_eq!(result.total_cost, 15.0);
    assert_eq!(result.total_value, 15.0);
}

#[test]
fn test_fractional_single_item_over_budget_is_partial() {
    let items = vec![item("Laptop", 1200.0, 9.0)];

    let result = solve_fractional(300.0, &items).unwrap();
    let picked = entries(&result.selection);

    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].index, 0);
    assert_eq!(picked[0].fraction, 0.25);
    assert!(picked[0].fraction < 1.0);
    assert_eq!(result.total_cost, 300.0);
    assert_eq!(result.total_value, 2.25);
}

#[test]
fn test_fractional_budget_equal_to_sum_takes_everything() {
    let items = vec![
        item("A", 10.0, 1.0),
        item("B", 20.0, 2.0),
        item("C", 30.0, 3.0),
    ];

    let result = solve_fractional(60.0, &items).unwrap();
    let picked = entries(&result.selection);

    assert_eq!(picked.len(), 3);
    assert!(picked.iter().all(|e| e.fraction == 1.0));
    assert_eq!(result.total_cost, 60.0);
    assert_eq!(result.total_value, 6.0);
    assert_eq!(result.remaining(60.0), 0.0);
}

#[test]
fn test_fractional_exhausted_budget_records_no_zero_entries() {
    let items = vec![item("A", 10.0, 60.0), item("B", 20.0, 100.0)];

    let result = solve_fractional(10.0, &items).unwrap();
    let picked = entries(&result.selection);

    assert_eq!(picked, vec![FractionalEntry { index: 0, fraction: 1.0 }]);
    assert_eq!(result.total_cost, 10.0);
    assert_eq!(result.total_value, 60.0);
}

#[test]
fn test_fractional_rejects_invalid_budget_and_empty_catalog() {
    let items = vec![item("a", 1.0, 1.0)];

    assert!(matches!(solve_fractional(0.0, &items), Err(InvalidInput::NonPositiveBudget(_))));
    assert!(matches!(
        solve_fractional(f64::INFINITY, &items),
        Err(InvalidInput::NonFinite { .. })
    ));
    assert!(matches!(solve_fractional(10.0, &[]), Err(InvalidInput::EmptyCatalog)));
}

#[test]
fn test_fractional_budget_equal_to_decimal_sum_takes_everything_whole() {
    let items = vec![item("a", 0.7, 7.0), item("b", 0.1, 0.5)];

    let result = solve_fractional(0.7 + 0.1, &items).unwrap();
    let picked = entries(&result.selection);

    assert_eq!(
        picked,
        vec![
            FractionalEntry { index: 0, fraction: 1.0 },
            FractionalEntry { index: 1, fraction: 1.0 },
        ]
    );
    assert!(result.selection.contains(1));
    assert_eq!(result.total_value, 7.5);
    assert!((result.total_cost - (0.7 + 0.1)).abs() < 1e-12);
}
