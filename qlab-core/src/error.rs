//! Tipos de erro para qlab-core

use thiserror::Error;

/// Resultado customizado para operações sobre qubits
pub type QubitResult<T> = Result<T, QubitError>;

/// Erros que podem ocorrer em operações sobre qubits
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QubitError {
    #[error("State not normalized: |alpha|² + |beta|² = {norm_sqr} (tolerance {tolerance})")]
    NotNormalized { norm_sqr: f64, tolerance: f64 },

    #[error("State has non-finite amplitudes")]
    NonFinite,

    #[error("Unknown Bell state label: {0}")]
    UnknownBellState(String),

    #[error("Invalid classical bit: {0}")]
    InvalidBit(u8),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
