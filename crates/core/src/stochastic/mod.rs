//! Stochastic bit algebra: dual-rail samples, Bernoulli streams, operators.
//!
//! This module implements the stochastic-computing half of the simulator:
//! 1. **Samples:** Dual-rail [`bit::StochasticBit`] values.
//! 2. **Streams:** Lazy [`stream::StochasticBitstream`] Bernoulli sources.
//! 3. **Operators:** The [`ops::StochasticOps`] per-trial context with the
//!    arithmetic operator set and the decorrelator.

/// Dual-rail stochastic bit samples.
pub mod bit;
/// Arithmetic operators and the decorrelator.
pub mod ops;
/// Lazy Bernoulli bitstreams with FIFO queues.
pub mod stream;

pub use bit::StochasticBit;
pub use ops::StochasticOps;
pub use stream::StochasticBitstream;
