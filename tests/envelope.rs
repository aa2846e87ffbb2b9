use weight_balance_calculator::catalog::{AircraftCatalog, AircraftProfile};
use weight_balance_calculator::envelope::{is_within_envelope, point_in_polygon};

fn c172s() -> AircraftProfile {
    AircraftCatalog::builtin()
        .get("C172S (SE-MIA)")
        .expect("builtin C172S")
        .clone()
}

#[test]
fn interior_point_is_within_envelope() {
    let profile = c172s();
    assert!(is_within_envelope(&profile, 1000.0, 1.00));
}

#[test]
fn forward_of_cg_limit_is_never_within() {
    let profile = c172s();
    let just_forward = profile.envelope.forward_cg_m - 1e-6;
    for weight in [760.0, 900.0, 1100.0, 1155.0] {
        assert!(!is_within_envelope(&profile, weight, just_forward));
    }
}

#[test]
fn aft_of_cg_limit_is_never_within() {
    let profile = c172s();
    assert!(!is_within_envelope(&profile, 1000.0, profile.envelope.aft_cg_m + 1e-6));
}

#[test]
fn over_mtow_fails_even_with_centered_cg() {
    let profile = c172s();
    assert!(!is_within_envelope(&profile, profile.max_takeoff_weight_kg + 0.1, 1.05));
}

#[test]
fn below_min_weight_fails() {
    let profile = c172s();
    assert!(!is_within_envelope(&profile, profile.envelope.min_weight_kg - 0.1, 1.05));
}

#[test]
fn polygon_excludes_forward_corner_at_high_weight() {
    // At 1100 kg the sloped forward edge sits aft of 0.90 m: the rectangular
    // limits pass but polygon containment must reject the point.
    let profile = c172s();
    assert!(!is_within_envelope(&profile, 1100.0, 0.90));
    assert!(is_within_envelope(&profile, 1100.0, 1.10));
}

#[test]
fn ray_casting_parity_on_square() {
    let square = [
        (0.0, 0.0),
        (0.0, 1.0),
        (1.0, 1.0),
        (1.0, 0.0),
        (0.0, 0.0),
    ]
    .map(|(cg_m, weight_kg)| weight_balance_calculator::catalog::EnvelopePoint { cg_m, weight_kg });

    assert!(point_in_polygon(0.5, 0.5, &square));
    assert!(!point_in_polygon(1.5, 0.5, &square));
    assert!(!point_in_polygon(0.5, -0.5, &square));
}
