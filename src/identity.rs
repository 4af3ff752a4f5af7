//! Composite identity keys: assembly names and geometry cluster keys.

use crate::models::EMPTY_SENTINELS;

/// Composes the stable assembly identity from its components, joined by
/// `" + "`. The intermediate holder is omitted when it carries one of the
/// empty-value sentinels, so `("X1", "-", "H1")` and a record that never had
/// an intermediate holder group identically.
pub fn assembly_name(cutting_edge: &str, intermediate_holder: &str, base_holder: &str) -> String {
    let mut parts = vec![cutting_edge];
    if !EMPTY_SENTINELS.contains(&intermediate_holder) {
        parts.push(intermediate_holder);
    }
    parts.push(base_holder);
    parts.join(" + ")
}

/// Builds the `"D{diameter} R{radius}"` clustering key with both values
/// rounded to one decimal. Rounding rule: half away from zero (`f64::round`),
/// so 0.45 renders as `R0.5`. Collisions are the point — near-identical
/// geometries must share a key. A missing component renders as `-`.
pub fn geometry_key(diameter: Option<f64>, corner_radius: Option<f64>) -> String {
    format!("D{} R{}", segment(diameter), segment(corner_radius))
}

fn segment(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", round_to_tenth(v)),
        None => "-".to_string(),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
