//! Qubit register state.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Initial state of one register: `amp0·|0⟩ + amp1·|1⟩`.
///
/// The live model keeps whatever the user typed; nothing here enforces
/// `|amp0|² + |amp1|² = 1`. Normalization is an export concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Qubit {
    /// Amplitude of the |0⟩ basis state.
    pub amp0: Complex64,
    /// Amplitude of the |1⟩ basis state.
    pub amp1: Complex64,
}

impl Qubit {
    /// A qubit in the |0⟩ basis state.
    pub fn zero() -> Self {
        Self {
            amp0: Complex64::new(1.0, 0.0),
            amp1: Complex64::new(0.0, 0.0),
        }
    }

    /// Build a qubit from its four real components.
    pub fn from_components(re0: f64, im0: f64, re1: f64, im1: f64) -> Self {
        Self {
            amp0: Complex64::new(re0, im0),
            amp1: Complex64::new(re1, im1),
        }
    }

    /// The four real components as `[re0, im0, re1, im1]`.
    pub fn components(&self) -> [f64; 4] {
        [self.amp0.re, self.amp0.im, self.amp1.re, self.amp1.im]
    }

    /// Euclidean norm of the state vector.
    pub fn norm(&self) -> f64 {
        (self.amp0.norm_sqr() + self.amp1.norm_sqr()).sqrt()
    }
}

impl Default for Qubit {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})|0⟩ + ({})|1⟩", self.amp0, self.amp1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_state() {
        let q = Qubit::zero();
        assert_eq!(q.components(), [1.0, 0.0, 0.0, 0.0]);
        assert!((q.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_norm() {
        let q = Qubit::from_components(3.0, 0.0, 0.0, 4.0);
        assert!((q.norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_qubit_display() {
        let q = Qubit::zero();
        assert_eq!(format!("{q}"), "(1+0i)|0⟩ + (0+0i)|1⟩");
    }
}
