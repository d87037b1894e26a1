//! # Bell States — Estados de Bell e amostragem correlacionada
//!
//! ```text
//! |Φ+⟩ = (|00⟩ + |11⟩) / √2
//! |Φ-⟩ = (|00⟩ - |11⟩) / √2
//! |Ψ+⟩ = (|01⟩ + |10⟩) / √2
//! |Ψ-⟩ = (|01⟩ - |10⟩) / √2
//! ```
//!
//! A amostragem não simula o vetor de estado de dois qubits: um único sorteio
//! compartilhado decide o par. Na base computacional o sinal (+/−) não altera
//! a distribuição, então Φ+ e Φ- (e Ψ+ e Ψ-) amostram igual.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::QubitError;
use crate::measurement::{Bit, MeasurementPair};

/// Estado de Bell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BellState {
    /// |Φ+⟩ = (|00⟩ + |11⟩) / √2
    #[default]
    PhiPlus,
    /// |Φ-⟩ = (|00⟩ - |11⟩) / √2
    PhiMinus,
    /// |Ψ+⟩ = (|01⟩ + |10⟩) / √2
    PsiPlus,
    /// |Ψ-⟩ = (|01⟩ - |10⟩) / √2
    PsiMinus,
}

impl BellState {
    /// Os quatro estados, na ordem de exibição
    pub const ALL: [Self; 4] = [Self::PhiPlus, Self::PhiMinus, Self::PsiPlus, Self::PsiMinus];

    /// Rótulo curto
    pub fn label(&self) -> &'static str {
        match self {
            Self::PhiPlus => "Φ+",
            Self::PhiMinus => "Φ-",
            Self::PsiPlus => "Ψ+",
            Self::PsiMinus => "Ψ-",
        }
    }

    /// Nome em notação bra-ket
    pub fn ket(&self) -> &'static str {
        match self {
            Self::PhiPlus => "|Φ+⟩",
            Self::PhiMinus => "|Φ-⟩",
            Self::PsiPlus => "|Ψ+⟩",
            Self::PsiMinus => "|Ψ-⟩",
        }
    }

    /// Fórmula para exibição
    pub fn formula(&self) -> &'static str {
        match self {
            Self::PhiPlus => "(|00⟩ + |11⟩) / √2",
            Self::PhiMinus => "(|00⟩ - |11⟩) / √2",
            Self::PsiPlus => "(|01⟩ + |10⟩) / √2",
            Self::PsiMinus => "(|01⟩ - |10⟩) / √2",
        }
    }

    /// Paridade: true para Φ (mesmo bit), false para Ψ (bits opostos)
    pub fn parity(&self) -> bool {
        matches!(self, Self::PhiPlus | Self::PhiMinus)
    }

    /// Fase relativa (-1 ou +1)
    pub fn phase(&self) -> i8 {
        match self {
            Self::PhiPlus | Self::PsiPlus => 1,
            Self::PhiMinus | Self::PsiMinus => -1,
        }
    }

    /// Correlação ideal entre os bits: +1 (Φ) ou −1 (Ψ)
    pub fn expected_correlation(&self) -> f64 {
        if self.parity() { 1.0 } else { -1.0 }
    }

    /// Bit de B dado o bit de A
    pub fn correlate(&self, a: Bit) -> Bit {
        if self.parity() { a } else { a.flip() }
    }

    /// Amostra um par com um único sorteio r ∈ [0, 1)
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> MeasurementPair {
        let r: f64 = rng.r#gen();
        let a = if r < 0.5 { Bit::Zero } else { Bit::One };
        MeasurementPair(a, self.correlate(a))
    }
}

impl fmt::Display for BellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BellState {
    type Err = QubitError;

    /// Aceita "Φ+", "|Φ+⟩", "|Φ⁺⟩", "Phi+", "phi_plus", "PhiPlus" e equivalentes
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .trim()
            .trim_start_matches('|')
            .trim_end_matches('⟩')
            .to_lowercase()
            .replace(['_', ' '], "")
            .replace('φ', "phi")
            .replace('ψ', "psi")
            .replace('⁺', "+")
            .replace('⁻', "-")
            .replace("plus", "+")
            .replace("minus", "-");

        match key.as_str() {
            "phi+" => Ok(Self::PhiPlus),
            "phi-" => Ok(Self::PhiMinus),
            "psi+" => Ok(Self::PsiPlus),
            "psi-" => Ok(Self::PsiMinus),
            _ => Err(QubitError::UnknownBellState(s.to_string())),
        }
    }
}

/// Amostra um par usando o gerador da thread
pub fn sample_bell_state(bell: BellState) -> MeasurementPair {
    bell.sample_with(&mut rand::thread_rng())
}

/// Amostra `count` pares independentes
pub fn sample_bell_batch<R: Rng + ?Sized>(rng: &mut R, bell: BellState, count: usize) -> Vec<MeasurementPair> {
    (0..count).map(|_| bell.sample_with(rng)).collect()
}
