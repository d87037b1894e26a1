//! Estado de um qubit
//!
//! ```text
//! |ψ⟩ = α|0⟩ + β|1⟩     com |α|² + |β|² ≈ 1
//! ```

use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Amplitude complexa (parte real, parte imaginária)
pub type Amplitude = Complex64;

/// Par de amplitudes de um qubit
///
/// Valor imutável: operações sempre retornam um novo estado.
/// A normalização não é imposta na construção.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QubitState {
    /// Coeficiente de |0⟩
    pub alpha: Amplitude,
    /// Coeficiente de |1⟩
    pub beta: Amplitude,
}

impl QubitState {
    /// |0⟩
    pub const ZERO: Self = Self {
        alpha: Amplitude::new(1.0, 0.0),
        beta: Amplitude::new(0.0, 0.0),
    };

    /// |1⟩
    pub const ONE: Self = Self {
        alpha: Amplitude::new(0.0, 0.0),
        beta: Amplitude::new(1.0, 0.0),
    };

    /// |+⟩ = (|0⟩ + |1⟩) / √2
    pub const PLUS: Self = Self {
        alpha: Amplitude::new(FRAC_1_SQRT_2, 0.0),
        beta: Amplitude::new(FRAC_1_SQRT_2, 0.0),
    };

    /// |-⟩ = (|0⟩ - |1⟩) / √2
    pub const MINUS: Self = Self {
        alpha: Amplitude::new(FRAC_1_SQRT_2, 0.0),
        beta: Amplitude::new(-FRAC_1_SQRT_2, 0.0),
    };

    /// Cria estado a partir das amplitudes
    pub const fn new(alpha: Amplitude, beta: Amplitude) -> Self {
        Self { alpha, beta }
    }

    /// Probabilidade de medir 0: |α|²
    pub fn prob_zero(&self) -> f64 {
        self.alpha.norm_sqr()
    }

    /// Probabilidade de medir 1: |β|²
    pub fn prob_one(&self) -> f64 {
        self.beta.norm_sqr()
    }

    /// |α|² + |β|²
    pub fn norm_sqr(&self) -> f64 {
        self.prob_zero() + self.prob_one()
    }

    /// Todas as componentes são finitas?
    pub fn is_finite(&self) -> bool {
        self.alpha.is_finite() && self.beta.is_finite()
    }

    /// Verifica |α|² + |β|² ≈ 1
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        self.is_finite() && (self.norm_sqr() - 1.0).abs() <= tolerance
    }

    /// Compara componente a componente
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.alpha - other.alpha).norm() <= tolerance && (self.beta - other.beta).norm() <= tolerance
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})|0⟩ + ({})|1⟩", self.alpha, self.beta)
    }
}

/// Estados de referência da esfera de Bloch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasisState {
    Zero,
    One,
    Plus,
    Minus,
}

impl BasisState {
    /// Todos os estados de referência, na ordem de exibição
    pub const ALL: [Self; 4] = [Self::Zero, Self::One, Self::Plus, Self::Minus];

    /// Estado correspondente
    pub fn state(self) -> QubitState {
        match self {
            Self::Zero => QubitState::ZERO,
            Self::One => QubitState::ONE,
            Self::Plus => QubitState::PLUS,
            Self::Minus => QubitState::MINUS,
        }
    }

    /// Nome em notação ket
    pub fn label(self) -> &'static str {
        match self {
            Self::Zero => "|0⟩",
            Self::One => "|1⟩",
            Self::Plus => "|+⟩",
            Self::Minus => "|-⟩",
        }
    }
}

impl From<BasisState> for QubitState {
    fn from(basis: BasisState) -> Self {
        basis.state()
    }
}

impl fmt::Display for BasisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(QubitState::ZERO.alpha, Amplitude::new(1.0, 0.0));
        assert_eq!(QubitState::ZERO.beta, Amplitude::new(0.0, 0.0));
        assert_eq!(QubitState::ONE.beta, Amplitude::new(1.0, 0.0));
        assert!((QubitState::PLUS.alpha.re - 1.0 / 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(QubitState::PLUS.alpha, QubitState::PLUS.beta);
        assert_eq!(QubitState::MINUS.beta.re, -QubitState::MINUS.alpha.re);
    }

    #[test]
    fn test_constants_are_normalized() {
        for basis in BasisState::ALL {
            assert!(basis.state().is_normalized(1e-12), "{basis} not normalized");
        }
    }

    #[test]
    fn test_probabilities() {
        assert_eq!(QubitState::ZERO.prob_zero(), 1.0);
        assert_eq!(QubitState::ZERO.prob_one(), 0.0);
        assert!((QubitState::MINUS.prob_one() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_not_normalized() {
        let state = QubitState::new(Amplitude::new(1.0, 0.0), Amplitude::new(1.0, 0.0));
        assert!(!state.is_normalized(1e-9));
        assert_eq!(state.norm_sqr(), 2.0);

        let nan = QubitState::new(Amplitude::new(f64::NAN, 0.0), Amplitude::new(0.0, 0.0));
        assert!(!nan.is_finite());
        assert!(!nan.is_normalized(1e-9));
    }

    #[test]
    fn test_basis_labels() {
        assert_eq!(BasisState::Zero.label(), "|0⟩");
        assert_eq!(BasisState::Minus.to_string(), "|-⟩");
        assert_eq!(QubitState::from(BasisState::One), QubitState::ONE);
        assert_eq!(QubitState::default(), QubitState::ZERO);
    }
}
