//! # ⚛️ qlab-core — Qubit, Bloch e correlação de Bell
//!
//! Núcleo numérico do laboratório de visualização: estado de um qubit,
//! conversão para a esfera de Bloch, porta Hadamard, amostragem de estados
//! de Bell e correlação de Pearson sobre os pares medidos.
//! Funções puras; o único efeito é consumir um gerador aleatório.
//!
//! ## Computational Complexity
//!
//! - `to_bloch`, `apply_hadamard`, `measure_qubit`, `sample_bell_state` — O(1)
//! - `correlation` — O(n) sobre n pares
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  QubitState ──► to_bloch ──► BlochCoordinates   │
//! │      │                                          │
//! │      ├──► apply_hadamard ──► QubitState         │
//! │      └──► measure_qubit  ──► Bit                │
//! │                                                 │
//! │  BellState ──► sample_bell_state ──► (Bit, Bit) │
//! │                        │                        │
//! │                        ▼                        │
//! │            MeasurementLog ──► correlation       │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qlab_core::{BellState, MeasurementLog, QuantumSampler, QubitState, to_bloch};
//!
//! let bloch = to_bloch(&QubitState::PLUS);
//! assert!((bloch.x - 1.0).abs() < 1e-9);
//!
//! let mut sampler = QuantumSampler::seeded(42);
//! let mut log = MeasurementLog::new();
//! sampler.record_bell(&mut log, BellState::PhiPlus, 100);
//! assert!((log.correlation() - 1.0).abs() < 1e-9);
//! ```

pub mod bell;
pub mod bloch;
pub mod circuit;
pub mod config;
pub mod error;
pub mod gates;
pub mod measurement;
pub mod sampler;
pub mod state;
pub mod stats;

pub use bell::{BellState, sample_bell_batch, sample_bell_state};
pub use bloch::{BlochConverter, BlochCoordinates, to_bloch, try_to_bloch};
pub use circuit::CircuitStep;
pub use config::{BlochPolicy, LabConfig};
pub use error::{QubitError, QubitResult};
pub use gates::{Hadamard, apply_hadamard};
pub use measurement::{Bit, MeasurementPair, measure_qubit, measure_qubit_with};
pub use sampler::QuantumSampler;
pub use state::{Amplitude, BasisState, QubitState};
pub use stats::{CorrelationPoint, MeasurementLog, OutcomeCounts, PearsonAccumulator, correlation};
