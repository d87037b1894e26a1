//! # Bloch — Coordenadas na esfera de Bloch
//!
//! ```text
//! θ = 2·arccos(√|α|²)            θ ∈ [0, π]
//! φ = arg(β) − arg(α)            (0 se |β|² ≤ ε)
//! (x, y, z) = (sin θ cos φ, sin θ sin φ, cos θ)
//! ```
//!
//! Estados não normalizados não produzem NaN: em [`to_bloch`] o argumento de
//! arccos é limitado a [0, 1]; [`try_to_bloch`] rejeita o estado.

use serde::{Deserialize, Serialize};

use crate::config::{BlochPolicy, LabConfig, NORMALIZATION_TOLERANCE, PHASE_EPSILON};
use crate::error::{QubitError, QubitResult};
use crate::state::QubitState;

/// Ponto na esfera de Bloch
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochCoordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Ângulo polar
    pub theta: f64,
    /// Ângulo azimutal (fase relativa)
    pub phi: f64,
}

impl BlochCoordinates {
    /// Cria a partir dos ângulos esféricos
    pub fn from_angles(theta: f64, phi: f64) -> Self {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        Self {
            x: sin_theta * cos_phi,
            y: sin_theta * sin_phi,
            z: cos_theta,
            theta,
            phi,
        }
    }

    /// Vetor cartesiano
    pub fn vector(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Núcleo da conversão, com o argumento de arccos já limitado
fn convert_clamped(state: &QubitState, phase_epsilon: f64) -> BlochCoordinates {
    let prob0 = state.prob_zero();
    let prob1 = state.prob_one();

    let amplitude0 = prob0.sqrt();
    if amplitude0 > 1.0 {
        tracing::debug!(prob0, "clamping arccos argument for non-normalized state");
    }
    let theta = 2.0 * amplitude0.clamp(0.0, 1.0).acos();

    // Fase de uma amplitude quase nula é indefinida
    let phi = if prob1 > phase_epsilon {
        state.beta.arg() - state.alpha.arg()
    } else {
        0.0
    };

    BlochCoordinates::from_angles(theta, phi)
}

/// Converte estado para coordenadas de Bloch
///
/// Amplitudes devem ser finitas; para entrada não confiável use
/// [`BlochConverter::convert`] ou [`try_to_bloch`], que retornam `NonFinite`.
/// Estados não normalizados são tratados por limitação de √|α|² a [0, 1].
pub fn to_bloch(state: &QubitState) -> BlochCoordinates {
    debug_assert!(state.is_finite(), "to_bloch called with non-finite amplitudes: {state:?}");
    convert_clamped(state, PHASE_EPSILON)
}

/// Converte exigindo estado finito e normalizado dentro de `tolerance`
pub fn try_to_bloch(state: &QubitState, tolerance: f64) -> QubitResult<BlochCoordinates> {
    check_normalized(state, tolerance)?;
    Ok(convert_clamped(state, PHASE_EPSILON))
}

fn check_normalized(state: &QubitState, tolerance: f64) -> QubitResult<()> {
    if !state.is_finite() {
        return Err(QubitError::NonFinite);
    }
    let norm_sqr = state.norm_sqr();
    if (norm_sqr - 1.0).abs() > tolerance {
        return Err(QubitError::NotNormalized { norm_sqr, tolerance });
    }
    Ok(())
}

/// Conversor configurável
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochConverter {
    phase_epsilon: f64,
    tolerance: f64,
    policy: BlochPolicy,
}

impl Default for BlochConverter {
    fn default() -> Self {
        Self {
            phase_epsilon: PHASE_EPSILON,
            tolerance: NORMALIZATION_TOLERANCE,
            policy: BlochPolicy::Clamp,
        }
    }
}

impl BlochConverter {
    /// Cria conversor com parâmetros padrão
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria conversor a partir da configuração
    pub fn with_config(config: &LabConfig) -> Self {
        Self {
            phase_epsilon: config.phase_epsilon,
            tolerance: config.normalization_tolerance,
            policy: config.bloch_policy,
        }
    }

    /// Política ativa
    pub fn policy(&self) -> BlochPolicy {
        self.policy
    }

    /// Converte conforme a política
    ///
    /// `Clamp` só falha com amplitudes não finitas.
    pub fn convert(&self, state: &QubitState) -> QubitResult<BlochCoordinates> {
        match self.policy {
            BlochPolicy::Clamp => {
                if !state.is_finite() {
                    return Err(QubitError::NonFinite);
                }
            }
            BlochPolicy::Strict => check_normalized(state, self.tolerance)?,
        }
        Ok(convert_clamped(state, self.phase_epsilon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Amplitude;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const TOL: f64 = 1e-9;

    fn assert_point(c: BlochCoordinates, x: f64, y: f64, z: f64) {
        assert!((c.x - x).abs() < TOL, "x = {} expected {}", c.x, x);
        assert!((c.y - y).abs() < TOL, "y = {} expected {}", c.y, y);
        assert!((c.z - z).abs() < TOL, "z = {} expected {}", c.z, z);
    }

    #[test]
    fn test_zero_is_north_pole() {
        let c = to_bloch(&QubitState::ZERO);
        assert_point(c, 0.0, 0.0, 1.0);
        assert!(c.theta.abs() < TOL);
        assert_eq!(c.phi, 0.0);
    }

    #[test]
    fn test_one_is_south_pole() {
        let c = to_bloch(&QubitState::ONE);
        assert_point(c, 0.0, 0.0, -1.0);
        assert!((c.theta - PI).abs() < TOL);
    }

    #[test]
    fn test_plus_on_equator() {
        let c = to_bloch(&QubitState::PLUS);
        assert!((c.theta - FRAC_PI_2).abs() < TOL);
        assert!(c.phi.abs() < TOL);
        assert_point(c, 1.0, 0.0, 0.0);
    }

    #[test]
    fn test_minus_on_equator() {
        let c = to_bloch(&QubitState::MINUS);
        assert!((c.theta - FRAC_PI_2).abs() < TOL);
        assert!((c.phi - PI).abs() < TOL);
        assert_point(c, -1.0, 0.0, 0.0);
    }

    #[test]
    fn test_imaginary_phase() {
        // (|0⟩ + i|1⟩) / √2 → +y
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let state = QubitState::new(Amplitude::new(h, 0.0), Amplitude::new(0.0, h));
        let c = to_bloch(&state);
        assert!((c.phi - FRAC_PI_2).abs() < TOL);
        assert_point(c, 0.0, 1.0, 0.0);
    }

    #[test]
    fn test_tiny_beta_has_zero_phase() {
        let state = QubitState::new(Amplitude::new(1.0, 0.0), Amplitude::new(0.0, 1e-3));
        let c = to_bloch(&state);
        assert_eq!(c.phi, 0.0);
        assert!(c.theta < FRAC_PI_4);
    }

    #[test]
    fn test_non_normalized_is_clamped() {
        let state = QubitState::new(Amplitude::new(2.0, 0.0), Amplitude::new(0.0, 0.0));
        let c = to_bloch(&state);
        assert!(!c.theta.is_nan());
        assert_eq!(c.theta, 0.0);
        assert_point(c, 0.0, 0.0, 1.0);
    }

    #[test]
    fn test_strict_rejects_non_normalized() {
        let state = QubitState::new(Amplitude::new(2.0, 0.0), Amplitude::new(0.0, 0.0));
        match try_to_bloch(&state, 1e-9) {
            Err(QubitError::NotNormalized { norm_sqr, .. }) => assert_eq!(norm_sqr, 4.0),
            other => panic!("unexpected {other:?}"),
        }

        let empty = QubitState::new(Amplitude::new(0.0, 0.0), Amplitude::new(0.0, 0.0));
        assert!(try_to_bloch(&empty, 1e-9).is_err());
        assert!(try_to_bloch(&QubitState::PLUS, 1e-9).is_ok());
    }

    #[test]
    fn test_converter_policies() {
        let state = QubitState::new(Amplitude::new(1.0, 0.0), Amplitude::new(1.0, 0.0));

        let lenient = BlochConverter::new();
        assert!(lenient.convert(&state).is_ok());

        let strict = BlochConverter::with_config(&LabConfig::default().with_policy(BlochPolicy::Strict));
        assert_eq!(strict.policy(), BlochPolicy::Strict);
        assert!(strict.convert(&state).is_err());
        assert!(strict.convert(&QubitState::MINUS).is_ok());

        let nan = QubitState::new(Amplitude::new(f64::NAN, 0.0), Amplitude::new(0.0, 0.0));
        assert_eq!(lenient.convert(&nan), Err(QubitError::NonFinite));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-finite")]
    fn test_to_bloch_non_finite_panics_in_debug() {
        let inf = QubitState::new(Amplitude::new(f64::INFINITY, 0.0), Amplitude::new(0.0, 0.0));
        let _ = to_bloch(&inf);
    }

    #[test]
    fn test_non_finite_reported_by_checked_paths() {
        let nan = QubitState::new(Amplitude::new(0.0, 0.0), Amplitude::new(f64::NAN, 0.0));
        assert_eq!(try_to_bloch(&nan, 1e-9), Err(QubitError::NonFinite));
        assert_eq!(BlochConverter::new().convert(&nan), Err(QubitError::NonFinite));
    }

    #[test]
    fn test_from_angles_on_unit_sphere() {
        let c = BlochCoordinates::from_angles(1.1, 0.3);
        let [x, y, z] = c.vector();
        assert!((x * x + y * y + z * z - 1.0).abs() < TOL);
    }
}
