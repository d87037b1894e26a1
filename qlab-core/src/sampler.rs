//! Amostrador com seed e configuração

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::bell::{BellState, sample_bell_batch};
use crate::config::LabConfig;
use crate::error::QubitResult;
use crate::measurement::{Bit, MeasurementPair, measure_qubit_with};
use crate::state::QubitState;
use crate::stats::MeasurementLog;

/// Amostrador de medições
///
/// Com `LabConfig::seed` definido, toda sequência é reproduzível.
#[derive(Debug, Clone)]
pub struct QuantumSampler {
    rng: StdRng,
    config: LabConfig,
}

impl QuantumSampler {
    /// Cria amostrador com configuração padrão (seed do sistema)
    pub fn new() -> Self {
        Self::from_parts(LabConfig::default())
    }

    /// Cria amostrador com configuração customizada
    pub fn with_config(config: LabConfig) -> QubitResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    /// Cria amostrador determinístico
    pub fn seeded(seed: u64) -> Self {
        Self::from_parts(LabConfig::default().with_seed(seed))
    }

    fn from_parts(config: LabConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, config }
    }

    /// Configuração ativa
    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    /// Mede um qubit
    pub fn measure(&mut self, state: &QubitState) -> Bit {
        measure_qubit_with(&mut self.rng, state)
    }

    /// Amostra um par de Bell
    pub fn sample_bell(&mut self, bell: BellState) -> MeasurementPair {
        bell.sample_with(&mut self.rng)
    }

    /// Amostra `count` pares
    pub fn run_bell(&mut self, bell: BellState, count: usize) -> Vec<MeasurementPair> {
        let pairs = sample_bell_batch(&mut self.rng, bell, count);
        tracing::debug!(bell = %bell, count, "sampled bell batch");
        pairs
    }

    /// Amostra `count` pares e acrescenta ao log
    pub fn record_bell(&mut self, log: &mut MeasurementLog, bell: BellState, count: usize) {
        log.extend(self.run_bell(bell, count));
        tracing::debug!(total = log.len(), correlation = log.correlation(), "measurement log updated");
    }
}

impl Default for QuantumSampler {
    fn default() -> Self {
        Self::new()
    }
}
