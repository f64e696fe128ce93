//! First-order error-feedback sigma-delta modulator.
//!
//! The modulator is the only path from a multi-level PDM-domain value back to
//! a single pulse. It quantizes the integrator sign and feeds the
//! quantization error back, shaping the error toward high frequency so the
//! output's running average tracks the input's.

use crate::deterministic::bit::DeterministicBit;

/// First-order sigma-delta modulator.
///
/// State is one integrator, initialized to zero, owned exclusively by the
/// module that embeds the modulator and mutated only by [`Self::step`].
/// For inputs bounded by [-1, 1] the integrator stays within [-2, 2].
#[derive(Clone, Debug, Default)]
pub struct SigmaDeltaModulator {
    integrator: f64,
}

impl SigmaDeltaModulator {
    /// Creates a modulator with the integrator at zero.
    pub const fn new() -> Self {
        Self { integrator: 0.0 }
    }

    /// Quantizes one input sample to a pulse and absorbs the error.
    ///
    /// ```text
    /// output = sign(s)          // s >= 0 -> +1, else -1
    /// s'     = s + u - output
    /// ```
    pub fn step(&mut self, input: f64) -> DeterministicBit {
        let high = self.integrator >= 0.0;
        let output = if high { 1.0 } else { -1.0 };
        self.integrator += input - output;
        DeterministicBit::new(high)
    }

    /// Returns the current integrator state (observability for tests and
    /// saturation analysis; the modulator itself never reads it externally).
    #[inline]
    pub const fn integrator(&self) -> f64 {
        self.integrator
    }
}
