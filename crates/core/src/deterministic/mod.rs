//! Deterministic (PDM) bit algebra: pulses, streams, modulator, delays.
//!
//! This module implements the pulse-density-modulated half of the simulator:
//! 1. **Pulses:** ±1 [`bit::DeterministicBit`] samples.
//! 2. **Streams:** Queue-only [`stream::DeterministicBitstream`] FIFOs.
//! 3. **Modulator:** The first-order [`sdm::SigmaDeltaModulator`] quantizer.
//! 4. **Delays:** Fixed-capacity [`delay::DelayBuffer`] shift registers.

/// Deterministic PDM pulse bits.
pub mod bit;
/// Fixed-capacity delay buffers (shift registers).
pub mod delay;
/// First-order error-feedback sigma-delta modulator.
pub mod sdm;
/// Queue-only PDM bitstreams.
pub mod stream;

pub use bit::DeterministicBit;
pub use delay::DelayBuffer;
pub use sdm::SigmaDeltaModulator;
pub use stream::DeterministicBitstream;
