//! # Gates — Porta Hadamard
//!
//! ```text
//! H = 1/√2 · | 1   1 |
//!            | 1  -1 |
//! ```
//!
//! Única porta suportada; não há composição arbitrária de portas.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::state::{Amplitude, QubitState};

/// Aplica Hadamard, retornando novo estado
///
/// α' = (α + β) / √2, β' = (α − β) / √2
pub fn apply_hadamard(state: &QubitState) -> QubitState {
    let QubitState { alpha, beta } = *state;
    QubitState {
        alpha: (alpha + beta).scale(FRAC_1_SQRT_2),
        beta: (alpha - beta).scale(FRAC_1_SQRT_2),
    }
}

/// Porta Hadamard: cria superposição
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hadamard;

impl Hadamard {
    /// Nome da porta
    pub fn name(&self) -> &'static str {
        "H"
    }

    /// Matriz da porta: [[a, b], [c, d]]
    pub fn matrix(&self) -> [[Amplitude; 2]; 2] {
        let h = Amplitude::new(FRAC_1_SQRT_2, 0.0);
        [[h, h], [h, -h]]
    }

    /// Aplica a um estado
    pub fn apply(&self, state: &QubitState) -> QubitState {
        apply_hadamard(state)
    }
}

impl QubitState {
    /// Atalho para [`apply_hadamard`]
    pub fn hadamard(&self) -> Self {
        apply_hadamard(self)
    }
}
