//! # Stats — Correlação de Pearson sobre pares de bits
//!
//! ```text
//!            n·ΣAB − ΣA·ΣB
//! r = ─────────────────────────────────
//!     √[(n·ΣA² − (ΣA)²)·(n·ΣB² − (ΣB)²)]
//! ```
//!
//! ## Computational Complexity
//!
//! - `correlation` — O(n), single pass
//! - `MeasurementLog::correlation_history` — O(n), prefix sums reused between points
//!
//! Empty or constant columns yield 0 instead of NaN.

use serde::{Deserialize, Serialize};

use crate::config::LabConfig;
use crate::measurement::MeasurementPair;

/// Somas acumuladas da correlação de Pearson
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PearsonAccumulator {
    n: u64,
    sum_a: f64,
    sum_b: f64,
    sum_ab: f64,
    sum_a2: f64,
    sum_b2: f64,
}

impl PearsonAccumulator {
    /// Cria acumulador vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Acumula um par
    pub fn push(&mut self, pair: &MeasurementPair) {
        let a = pair.0.as_f64();
        let b = pair.1.as_f64();
        self.n += 1;
        self.sum_a += a;
        self.sum_b += b;
        self.sum_ab += a * b;
        self.sum_a2 += a * a;
        self.sum_b2 += b * b;
    }

    /// Número de pares acumulados
    pub fn count(&self) -> u64 {
        self.n
    }

    /// Coeficiente atual, em [−1, 1]
    pub fn coefficient(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        let n = self.n as f64;
        let numerator = n * self.sum_ab - self.sum_a * self.sum_b;
        let variance_a = n * self.sum_a2 - self.sum_a * self.sum_a;
        let variance_b = n * self.sum_b2 - self.sum_b * self.sum_b;
        let denominator = (variance_a * variance_b).sqrt();

        if denominator == 0.0 || !denominator.is_finite() {
            return 0.0;
        }
        // Arredondamento pode passar levemente de ±1
        (numerator / denominator).clamp(-1.0, 1.0)
    }
}

impl<'a> FromIterator<&'a MeasurementPair> for PearsonAccumulator {
    fn from_iter<I: IntoIterator<Item = &'a MeasurementPair>>(iter: I) -> Self {
        let mut acc = Self::new();
        for pair in iter {
            acc.push(pair);
        }
        acc
    }
}

/// Correlação de Pearson entre as colunas A e B
///
/// Retorna 0 para sequência vazia ou coluna constante.
pub fn correlation(pairs: &[MeasurementPair]) -> f64 {
    pairs.iter().collect::<PearsonAccumulator>().coefficient()
}

/// Contagem dos quatro resultados |00⟩, |01⟩, |10⟩, |11⟩
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    pub c00: u64,
    pub c01: u64,
    pub c10: u64,
    pub c11: u64,
}

impl OutcomeCounts {
    /// Registra um resultado
    pub fn record(&mut self, pair: &MeasurementPair) {
        match pair.index() {
            0 => self.c00 += 1,
            1 => self.c01 += 1,
            2 => self.c10 += 1,
            _ => self.c11 += 1,
        }
    }

    /// Contagem de um resultado
    pub fn get(&self, pair: &MeasurementPair) -> u64 {
        self.as_array()[pair.index()]
    }

    /// Contagens na ordem 00, 01, 10, 11
    pub fn as_array(&self) -> [u64; 4] {
        [self.c00, self.c01, self.c10, self.c11]
    }

    /// Total de medições
    pub fn total(&self) -> u64 {
        self.c00 + self.c01 + self.c10 + self.c11
    }

    /// Fração de pares com bits iguais (0 se vazio)
    pub fn agreement(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => (self.c00 + self.c11) as f64 / total as f64,
        }
    }

    /// Fração de pares com bits opostos (0 se vazio)
    pub fn disagreement(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => (self.c01 + self.c10) as f64 / total as f64,
        }
    }
}

impl<'a> FromIterator<&'a MeasurementPair> for OutcomeCounts {
    fn from_iter<I: IntoIterator<Item = &'a MeasurementPair>>(iter: I) -> Self {
        let mut counts = Self::default();
        for pair in iter {
            counts.record(pair);
        }
        counts
    }
}

/// Ponto do histórico de correlação
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPoint {
    /// Número de amostras consideradas (prefixo)
    pub samples: usize,
    /// |r| do prefixo
    pub strength: f64,
}

/// Sequência de medições, somente acréscimo
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementLog {
    pairs: Vec<MeasurementPair>,
}

impl MeasurementLog {
    /// Cria log vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona uma medição
    pub fn record(&mut self, pair: MeasurementPair) {
        self.pairs.push(pair);
    }

    /// Esvazia o log
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Número de medições
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Log vazio?
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Todas as medições, em ordem
    pub fn pairs(&self) -> &[MeasurementPair] {
        &self.pairs
    }

    /// Últimas `n` medições
    pub fn recent(&self, n: usize) -> &[MeasurementPair] {
        let start = self.pairs.len().saturating_sub(n);
        &self.pairs[start..]
    }

    /// Contagem por resultado
    pub fn counts(&self) -> OutcomeCounts {
        self.pairs.iter().collect()
    }

    /// Correlação de Pearson de todas as medições
    pub fn correlation(&self) -> f64 {
        correlation(&self.pairs)
    }

    /// |r| a cada `step` amostras
    ///
    /// `step` igual a 0 não gera pontos.
    pub fn correlation_history(&self, step: usize) -> Vec<CorrelationPoint> {
        if step == 0 {
            return Vec::new();
        }
        let mut acc = PearsonAccumulator::new();
        let mut history = Vec::with_capacity(self.pairs.len() / step);
        for (i, pair) in self.pairs.iter().enumerate() {
            acc.push(pair);
            let samples = i + 1;
            if samples % step == 0 {
                history.push(CorrelationPoint {
                    samples,
                    strength: acc.coefficient().abs(),
                });
            }
        }
        history
    }

    /// Histórico com o passo definido na configuração
    pub fn history_for(&self, config: &LabConfig) -> Vec<CorrelationPoint> {
        self.correlation_history(config.correlation_step)
    }
}

impl Extend<MeasurementPair> for MeasurementLog {
    fn extend<I: IntoIterator<Item = MeasurementPair>>(&mut self, iter: I) {
        self.pairs.extend(iter);
    }
}

impl FromIterator<MeasurementPair> for MeasurementLog {
    fn from_iter<I: IntoIterator<Item = MeasurementPair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}
