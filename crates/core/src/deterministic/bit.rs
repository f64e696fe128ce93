//! Deterministic PDM pulse bits.
//!
//! A pulse carries ±1 via `0 ↦ -1`, `1 ↦ +1`; the local density of high
//! pulses encodes signal amplitude. Arithmetic between pulses and reals goes
//! through [`DeterministicBit::to_real`] and ordinary `f64` math — a
//! multi-level PDM intermediate cannot be represented as a single pulse, so
//! combinators return reals and re-quantization happens only through the
//! sigma-delta modulator.

use crate::common::bit::Bit;

/// One pulse of a deterministic (PDM) bitstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DeterministicBit {
    pulse: bool,
}

impl DeterministicBit {
    /// Creates a pulse: `true` encodes +1, `false` encodes -1.
    #[inline]
    pub const fn new(pulse: bool) -> Self {
        Self { pulse }
    }

    /// Returns the raw pulse level.
    #[inline]
    pub const fn pulse(&self) -> bool {
        self.pulse
    }
}

impl From<bool> for DeterministicBit {
    fn from(pulse: bool) -> Self {
        Self::new(pulse)
    }
}

impl Bit for DeterministicBit {
    /// The low pulse, encoding -1; delay buffers seed with this.
    fn zero() -> Self {
        Self::new(false)
    }

    /// Maps the pulse to its amplitude: `false ↦ -1.0`, `true ↦ +1.0`.
    fn to_real(&self) -> f64 {
        if self.pulse { 1.0 } else { -1.0 }
    }

    fn realized(&self) -> f64 {
        self.to_real()
    }
}
