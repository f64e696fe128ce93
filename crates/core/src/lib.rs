//! Bitstream-computing circuit simulator library.
//!
//! This crate models hardware bitstream-computing circuits at the bit level,
//! so signal-processing and linear-algebra algorithms can be simulated
//! exactly as they would execute in synthesized hardware. It implements:
//! 1. **Stochastic algebra:** Dual-rail Bernoulli bitstreams and the
//!    stochastic-computing operator set (add, sub, mul, div, fixed-gain div,
//!    sqrt, L2 norm) with independence checking and saturation reporting.
//! 2. **Deterministic algebra:** PDM pulse bitstreams, real-domain
//!    combinators, and the first-order sigma-delta modulator.
//! 3. **Queue protocol:** The shared push/pop/observe/length contract with
//!    lazy on-demand sample generation for stochastic streams.
//! 4. **Decorrelation:** Independent resampling for feedback paths.
//! 5. **Structural registry:** Explicit parameter/submodule declaration for
//!    the external hardware-elaboration backend.
//! 6. **Interchange:** PDM DAT text import/export and windowed estimation.

/// Common types and contracts (errors, warnings, ids, bit/stream traits).
pub mod common;
/// Trial configuration (defaults, serde structures).
pub mod config;
/// Deterministic PDM algebra (pulses, streams, modulator, delays).
pub mod deterministic;
/// External data interchange (PDM DAT text format).
pub mod io;
/// Structural registry of module composition.
pub mod registry;
/// Empirical stream statistics (windowed estimation).
pub mod stats;
/// Stochastic dual-rail algebra (samples, streams, operators).
pub mod stochastic;

pub use crate::common::{Bit, Bitstream, Error, ModuleId, Result, StreamId, Warning, WarningSink};
pub use crate::config::SimConfig;
pub use crate::deterministic::{
    DelayBuffer, DeterministicBit, DeterministicBitstream, SigmaDeltaModulator,
};
pub use crate::registry::Registry;
pub use crate::stats::Estimator;
pub use crate::stochastic::{StochasticBit, StochasticBitstream, StochasticOps};
