//! Medição projetiva na base computacional

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{QubitError, QubitResult};
use crate::state::QubitState;

/// Bit clássico resultante de uma medição
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Bit {
    #[default]
    Zero = 0,
    One = 1,
}

impl Bit {
    /// Valor numérico
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Valor como f64 (para estatística)
    pub fn as_f64(self) -> f64 {
        f64::from(self.as_u8())
    }

    /// Bit oposto
    pub fn flip(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Self::One } else { Self::Zero }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.as_u8()
    }
}

impl TryFrom<u8> for Bit {
    type Error = QubitError;

    fn try_from(value: u8) -> QubitResult<Self> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(QubitError::InvalidBit(other)),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Resultado da medição de um par (qubit A, qubit B)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasurementPair(pub Bit, pub Bit);

impl MeasurementPair {
    /// Cria par a partir de valores 0/1
    pub fn from_bits(a: u8, b: u8) -> QubitResult<Self> {
        Ok(Self(Bit::try_from(a)?, Bit::try_from(b)?))
    }

    /// Os dois bits são iguais?
    pub fn is_equal(&self) -> bool {
        self.0 == self.1
    }

    /// Índice do resultado na base |ab⟩ (0..4)
    pub fn index(&self) -> usize {
        usize::from(self.0.as_u8()) * 2 + usize::from(self.1.as_u8())
    }

    /// Rótulo "ab"
    pub fn label(&self) -> &'static str {
        ["00", "01", "10", "11"][self.index()]
    }
}

impl From<(Bit, Bit)> for MeasurementPair {
    fn from((a, b): (Bit, Bit)) -> Self {
        Self(a, b)
    }
}

impl fmt::Display for MeasurementPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}⟩", self.label())
    }
}

/// Mede um qubit com o gerador fornecido
///
/// Retorna 0 se r < |α|², com r uniforme em [0, 1).
pub fn measure_qubit_with<R: Rng + ?Sized>(rng: &mut R, state: &QubitState) -> Bit {
    let r: f64 = rng.r#gen();
    if r < state.prob_zero() { Bit::Zero } else { Bit::One }
}

/// Mede um qubit usando o gerador da thread
pub fn measure_qubit(state: &QubitState) -> Bit {
    measure_qubit_with(&mut rand::thread_rng(), state)
}
