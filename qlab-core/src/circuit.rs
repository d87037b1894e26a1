//! Preparação de |Φ+⟩ passo a passo: H no qubit de controle, depois CNOT
//!
//! ```text
//! q0: |0⟩ ──H──●──
//!              │
//! q1: |0⟩ ─────⊕──
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bell::BellState;
use crate::gates::apply_hadamard;
use crate::state::QubitState;

/// Etapa do circuito de preparação
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CircuitStep {
    #[default]
    Initial,
    Hadamard,
    Cnot,
    Complete,
}

impl CircuitStep {
    /// Próxima etapa (Complete é terminal)
    pub fn next(self) -> Self {
        match self {
            Self::Initial => Self::Hadamard,
            Self::Hadamard => Self::Cnot,
            Self::Cnot | Self::Complete => Self::Complete,
        }
    }

    /// Circuito terminou?
    pub fn is_complete(self) -> bool {
        self == Self::Complete
    }

    /// Rótulos dos dois qubits nesta etapa
    pub fn qubit_labels(self) -> (&'static str, &'static str) {
        match self {
            Self::Initial => ("|0⟩", "|0⟩"),
            Self::Hadamard => ("|+⟩", "|0⟩"),
            Self::Cnot | Self::Complete => ("|Φ⁺⟩", "|Φ⁺⟩"),
        }
    }

    /// Estado do qubit de controle enquanto separável
    pub fn control_state(self) -> Option<QubitState> {
        match self {
            Self::Initial => Some(QubitState::ZERO),
            Self::Hadamard => Some(apply_hadamard(&QubitState::ZERO)),
            Self::Cnot | Self::Complete => None,
        }
    }

    /// Estado de Bell após o CNOT
    pub fn entangled_state(self) -> Option<BellState> {
        match self {
            Self::Cnot | Self::Complete => Some(BellState::PhiPlus),
            Self::Initial | Self::Hadamard => None,
        }
    }

    /// Nome da etapa
    pub fn name(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Hadamard => "hadamard",
            Self::Cnot => "cnot",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for CircuitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
