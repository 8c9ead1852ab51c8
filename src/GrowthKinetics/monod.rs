//! # Monod Growth Rate Module
//!
//! Algebraic Monod kinetics: growth rate as a function of substrate concentration,
//!
//! ```text
//! r = r_max * C / (K + C)
//! ```
//!
//! A pure, stateless leaf model: the same uptake law reappears inside the batch reactor
//! ODE system, but this module is the standalone pointwise form used by calibration and
//! plotting layers. Supports scalar and vectorized (element-wise) evaluation.
//!
//! No input validation is performed: `K + C == 0` produces an IEEE division-by-zero
//! result (`inf`/`NaN`) which is a valid return value, not an error. Callers that need
//! stricter guarantees must validate parameters before calling.

use crate::BatchReactor::BatchGrowthIVP::KineticsError;
use nalgebra::DVector;

/// Number of entries expected in a positional Monod-parameter array
pub const N_MONOD_PARAMETERS: usize = 2;

/// Parameters of the Monod growth-rate law
///
/// Positional order for array callers: `[r_max, K]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonodParameters {
    /// Maximum growth rate (1/time)
    pub r_max: f64,
    /// Half-saturation concentration (same units as substrate concentration)
    pub K: f64,
}

impl MonodParameters {
    pub fn new(r_max: f64, K: f64) -> Self {
        Self { r_max, K }
    }

    /// Construct from a positional array `[r_max, K]`
    ///
    /// Entries beyond the second are ignored.
    pub fn from_slice(par: &[f64]) -> Result<Self, KineticsError> {
        if par.len() < N_MONOD_PARAMETERS {
            return Err(KineticsError::InvalidParameterCount {
                expected: N_MONOD_PARAMETERS,
                got: par.len(),
            });
        }
        Ok(Self {
            r_max: par[0],
            K: par[1],
        })
    }

    /// r = r_max * C / (K + C)
    pub fn rate(&self, c: f64) -> f64 {
        self.r_max * c / (self.K + c)
    }

    /// Element-wise growth rates, same length and order as the input vector
    pub fn rates(&self, c: &DVector<f64>) -> DVector<f64> {
        c.map(|ci| self.rate(ci))
    }
}

/// Growth rate for a vector of substrate concentrations
///
/// The flat call form for positional callers; equivalent to
/// `MonodParameters::new(r_max, K).rates(c)`.
pub fn growth_rate(r_max: f64, K: f64, c: &DVector<f64>) -> DVector<f64> {
    MonodParameters::new(r_max, K).rates(c)
}

/////////////////////////////////////////TESTS/////////////////////////////////////////////
