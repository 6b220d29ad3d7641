// File: crates/viewership-core/src/format.rs
// Summary: Number formatting for labels, tooltips and SVG attributes.

/// Round half up (toward +inf on ties) to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let f = 10f64.powi(decimals as i32);
    let r = (value * f + 0.5).floor() / f;
    // collapse -0 so it prints as "0"
    if r == 0.0 { 0.0 } else { r }
}

/// Rounded value in shortest form: `20`, `20.5`, `20.33`.
pub fn format_rounded(value: f64, decimals: u32) -> String {
    round_to(value, decimals).to_string()
}

/// Compact coordinate for markup; three decimals is well below a device pixel.
pub fn coord(value: f64) -> String {
    if value.is_finite() { round_to(value, 3).to_string() } else { "NaN".to_string() }
}
