//! Configuração do laboratório
//!
//! Carrega parâmetros numéricos de um `.env` ou de variáveis de ambiente.
//! Usado pelo conversor de Bloch, pelo amostrador e pelas estatísticas.

use std::env;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{QubitError, QubitResult};

// Carrega .env na primeira leitura de configuração
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Garante que o ambiente foi carregado
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Faz parse de um valor opcional, caindo no default se ausente ou inválido
fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "ignoring unparsable config value");
            default
        }),
        None => default,
    }
}

/// Limiar abaixo do qual |beta|² é tratado como zero no cálculo da fase
pub const PHASE_EPSILON: f64 = 1e-4;

/// Tolerância padrão para |alpha|² + |beta|² ≈ 1
pub const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// Tamanho padrão do passo do histórico de correlação
pub const CORRELATION_STEP: usize = 10;

/// O que fazer com estados não normalizados na conversão para Bloch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlochPolicy {
    /// Limita o argumento de arccos a [0, 1]
    #[default]
    Clamp,
    /// Rejeita o estado com `QubitError::NotNormalized`
    Strict,
}

impl FromStr for BlochPolicy {
    type Err = QubitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "strict" => Ok(Self::Strict),
            other => Err(QubitError::InvalidConfig(format!("unknown bloch policy '{other}'"))),
        }
    }
}

/// Configuração do laboratório
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabConfig {
    /// Limiar de |beta|² para definir fase zero
    pub phase_epsilon: f64,
    /// Desvio máximo aceito em |alpha|² + |beta|²
    pub normalization_tolerance: f64,
    /// Tratamento de estados não normalizados
    pub bloch_policy: BlochPolicy,
    /// A cada quantas amostras o histórico de correlação gera um ponto
    pub correlation_step: usize,
    /// Seed do amostrador (None = entropia do sistema)
    pub seed: Option<u64>,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            phase_epsilon: PHASE_EPSILON,
            normalization_tolerance: NORMALIZATION_TOLERANCE,
            bloch_policy: BlochPolicy::Clamp,
            correlation_step: CORRELATION_STEP,
            seed: None,
        }
    }
}

impl LabConfig {
    /// Cria configuração padrão
    pub fn new() -> Self {
        Self::default()
    }

    /// Carrega configuração do ambiente
    ///
    /// Variáveis: `QLAB_PHASE_EPSILON`, `QLAB_NORM_TOLERANCE`, `QLAB_BLOCH_POLICY`
    /// (`clamp` | `strict`), `QLAB_CORRELATION_STEP`, `QLAB_SEED`.
    pub fn from_env() -> QubitResult<Self> {
        ensure_loaded();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Carrega configuração a partir de uma função de consulta `chave -> valor`
    ///
    /// Valores inválidos geram `warn!` e caem no default; o resultado é validado.
    pub fn from_lookup<F>(lookup: F) -> QubitResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // Seed inválida vira None (entropia), com o mesmo aviso dos demais campos
        let seed = lookup("QLAB_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!(key = "QLAB_SEED", value = %raw, "ignoring unparsable config value");
                None
            }
        });

        let config = Self {
            phase_epsilon: parse_or("QLAB_PHASE_EPSILON", lookup("QLAB_PHASE_EPSILON"), defaults.phase_epsilon),
            normalization_tolerance: parse_or(
                "QLAB_NORM_TOLERANCE",
                lookup("QLAB_NORM_TOLERANCE"),
                defaults.normalization_tolerance,
            ),
            bloch_policy: parse_or("QLAB_BLOCH_POLICY", lookup("QLAB_BLOCH_POLICY"), defaults.bloch_policy),
            correlation_step: parse_or(
                "QLAB_CORRELATION_STEP",
                lookup("QLAB_CORRELATION_STEP"),
                defaults.correlation_step,
            ),
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Define seed fixa
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Define política de Bloch
    pub fn with_policy(mut self, policy: BlochPolicy) -> Self {
        self.bloch_policy = policy;
        self
    }

    /// Valida limites
    pub fn validate(&self) -> QubitResult<()> {
        if !(self.phase_epsilon.is_finite() && self.phase_epsilon > 0.0) {
            return Err(QubitError::InvalidConfig(format!(
                "phase_epsilon must be positive, got {}",
                self.phase_epsilon
            )));
        }
        if !(self.normalization_tolerance.is_finite() && self.normalization_tolerance > 0.0) {
            return Err(QubitError::InvalidConfig(format!(
                "normalization_tolerance must be positive, got {}",
                self.normalization_tolerance
            )));
        }
        if self.correlation_step == 0 {
            return Err(QubitError::InvalidConfig("correlation_step must be at least 1".into()));
        }
        Ok(())
    }
}
