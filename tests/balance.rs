use weight_balance_calculator::balance::{BalanceError, center_of_gravity, moment};

#[test]
fn moment_is_weight_times_arm() {
    assert_eq!(moment(800.4, 1.062), 800.4 * 1.062);
    assert_eq!(moment(0.0, 2.41), 0.0);
    assert!((moment(85.0, 0.94) - 79.9).abs() < 1e-12);
}

#[test]
fn cg_is_weighted_average_of_arms() {
    // With non-negative weights the CG must lie between the extreme arms.
    let loads = [(800.4, 1.062), (85.0, 0.94), (95.04, 1.17), (10.0, 2.41)];
    let total_weight: f64 = loads.iter().map(|(w, _)| w).sum();
    let total_moment: f64 = loads.iter().map(|(w, a)| moment(*w, *a)).sum();

    let cg = center_of_gravity(total_weight, total_moment).expect("cg");
    let min_arm = loads.iter().map(|(_, a)| *a).fold(f64::INFINITY, f64::min);
    let max_arm = loads.iter().map(|(_, a)| *a).fold(f64::NEG_INFINITY, f64::max);
    assert!(cg >= min_arm && cg <= max_arm);
}

#[test]
fn cg_with_zero_weight_is_undefined() {
    assert_eq!(
        center_of_gravity(0.0, 100.0),
        Err(BalanceError::DivisionUndefined)
    );
}

#[test]
fn single_station_cg_equals_its_arm() {
    let cg = center_of_gravity(340.0, moment(340.0, 2.05)).expect("cg");
    assert!((cg - 2.05).abs() < 1e-12);
}
