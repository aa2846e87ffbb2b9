//! Envelope membership: rectangular limit checks plus ray-casting polygon
//! containment over the certified weight/CG envelope.

use wb_catalog::{AircraftProfile, EnvelopePoint};

/// Ray-casting point-in-polygon test over the envelope boundary, CG on the
/// x axis and weight on the y axis. Odd crossing parity means inside.
///
/// A point exactly on a polygon edge has undefined parity; the rectangular
/// checks in [`is_within_envelope`] are the authoritative guard at the
/// certification boundary.
pub fn point_in_polygon(cg_m: f64, weight_kg: f64, boundary: &[EnvelopePoint]) -> bool {
    let mut inside = false;
    let mut j = boundary.len().saturating_sub(1);
    for i in 0..boundary.len() {
        let (xi, yi) = (boundary[i].cg_m, boundary[i].weight_kg);
        let (xj, yj) = (boundary[j].cg_m, boundary[j].weight_kg);

        let crosses = (yi > weight_kg) != (yj > weight_kg)
            && cg_m < (xj - xi) * (weight_kg - yi) / (yj - yi) + xi;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether a loaded condition sits inside the certified envelope.
///
/// Checks short-circuit in order: maximum takeoff weight, minimum envelope
/// weight, forward/aft CG limits, then polygon containment.
pub fn is_within_envelope(profile: &AircraftProfile, weight_kg: f64, cg_m: f64) -> bool {
    if weight_kg > profile.max_takeoff_weight_kg {
        return false;
    }
    if weight_kg < profile.envelope.min_weight_kg {
        return false;
    }
    if cg_m < profile.envelope.forward_cg_m {
        return false;
    }
    if cg_m > profile.envelope.aft_cg_m {
        return false;
    }
    point_in_polygon(cg_m, weight_kg, &profile.envelope.boundary)
}
