//! Amplitude editor input.
//!
//! The editor widget hands back four text fields: real and imaginary parts of
//! the |0⟩ amplitude, then of the |1⟩ amplitude. Anything that does not parse
//! to a finite number is taken as 0.

/// Parse one component.
pub fn parse_component(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parse `[re0, im0, re1, im1]`.
pub fn parse_components<S: AsRef<str>>(values: &[S; 4]) -> [f64; 4] {
    [
        parse_component(values[0].as_ref()),
        parse_component(values[1].as_ref()),
        parse_component(values[2].as_ref()),
        parse_component(values[3].as_ref()),
    ]
}
