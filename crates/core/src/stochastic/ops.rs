//! Stochastic arithmetic operators and the decorrelator.
//!
//! Every operator works on single samples, exactly as the synthesized circuit
//! would process one bit per clock: pop operand bits, combine, emit one output
//! bit. Operators never touch a stream's queue.
//!
//! Bit-level constructions:
//! - **Multiplication** uses the exact dual-rail gate network
//!   (`z⁺ = x⁺y⁺ ∨ x⁻y⁻`, `z⁻ = x⁺y⁻ ∨ x⁻y⁺` — XNOR/XOR for rail-exclusive
//!   samples), which satisfies `E[z] = E[x]·E[y]` for independent operands.
//! - Every other operator computes the derived expected value and realizes
//!   the output sample as one fresh dual-rail Bernoulli draw of that
//!   expectation. The draw probability is clamped to [0, 1] for
//!   realizability; the tracked value is never clamped.
//!
//! Operators that assume statistical independence compare operand ids and
//! report undecorrelated reuse to the warning sink. Derived expectations that
//! leave [-1, 1] are reported as saturation warnings; the simulation
//! continues either way.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::error::{Error, Result};
use crate::common::id::{StreamId, fresh_stream_id};
use crate::common::warn::{LogSink, Warning, WarningSink};
use crate::config::SimConfig;
use crate::stochastic::bit::StochasticBit;

/// Per-trial operator context for the stochastic bit algebra.
///
/// Owns the randomness source used to realize derived samples and the sink
/// that receives non-fatal warnings. One context per trial; a context is
/// `Send` and moves with its trial, but must not be shared between threads.
pub struct StochasticOps {
    rng: StdRng,
    sink: Box<dyn WarningSink>,
}

impl StochasticOps {
    /// Creates an operator context seeded from OS entropy, warning via
    /// [`LogSink`].
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            sink: Box::new(LogSink),
        }
    }

    /// Creates an operator context with a deterministic seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            sink: Box::new(LogSink),
        }
    }

    /// Creates an operator context from a [`SimConfig`].
    ///
    /// A configured seed gives a reproducible trial; otherwise OS entropy.
    pub fn from_config(config: &SimConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    /// Replaces the warning sink, returning the context (builder style).
    pub fn with_sink(mut self, sink: Box<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Addition: `E[out] = E[x] + E[y]`.
    ///
    /// The caller is responsible for scaling so the sum stays in [-1, 1];
    /// an out-of-range sum is reported as saturation, not clamped.
    pub fn add(&mut self, x: StochasticBit, y: StochasticBit) -> StochasticBit {
        self.check_independent(&x, &y);
        self.derive(x.value() + y.value())
    }

    /// Subtraction: `E[out] = E[x] − E[y]`.
    pub fn sub(&mut self, x: StochasticBit, y: StochasticBit) -> StochasticBit {
        self.check_independent(&x, &y);
        self.derive(x.value() - y.value())
    }

    /// Multiplication: `E[out] = E[x]·E[y]`, by the dual-rail gate network.
    ///
    /// For rail-exclusive samples this is the classic XNOR construction: the
    /// output positive rail fires when the operand rails agree, the negative
    /// rail when they disagree.
    pub fn mul(&mut self, x: StochasticBit, y: StochasticBit) -> StochasticBit {
        self.check_independent(&x, &y);
        let value = x.value() * y.value();
        let id = fresh_stream_id();
        self.check_saturation(id, value);
        let pos = (x.pos() && y.pos()) || (x.neg() && y.neg());
        let neg = (x.pos() && y.neg()) || (x.neg() && y.pos());
        StochasticBit::from_channels(pos, neg, value, id)
    }

    /// Division: `E[out] ≈ E[x] / E[y]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositiveDivisor`] unless `E[y] > 0`.
    pub fn div(&mut self, x: StochasticBit, y: StochasticBit) -> Result<StochasticBit> {
        if y.value() <= 0.0 {
            return Err(Error::NonPositiveDivisor {
                dividend: x.value(),
                divisor: y.value(),
            });
        }
        self.check_independent(&x, &y);
        Ok(self.derive(x.value() / y.value()))
    }

    /// Fixed-gain division by a constant: `E[out] = E[x] / c`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GainBelowUnity`] unless `c >= 1`.
    pub fn fixed_gain_div(&mut self, x: StochasticBit, gain: f64) -> Result<StochasticBit> {
        if gain < 1.0 {
            return Err(Error::GainBelowUnity { gain });
        }
        Ok(self.derive(x.value() / gain))
    }

    /// Square root: `E[out] ≈ sqrt(E[x])`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeRadicand`] unless `E[x] >= 0`.
    pub fn sqrt(&mut self, x: StochasticBit) -> Result<StochasticBit> {
        if x.value() < 0.0 {
            return Err(Error::NegativeRadicand { value: x.value() });
        }
        Ok(self.derive(x.value().sqrt()))
    }

    /// L2 norm of a sample vector: `E[out] ≈ ‖(E[x₁], …, E[xₙ])‖₂`.
    ///
    /// An empty vector has norm zero. Duplicate operand ids are reported as
    /// correlated, like any other independence-assuming operator.
    pub fn l2norm(&mut self, bits: &[StochasticBit]) -> StochasticBit {
        for (i, x) in bits.iter().enumerate() {
            if x.id() != StreamId::SEED && bits[..i].iter().any(|prior| prior.id() == x.id()) {
                self.sink.report(Warning::CorrelatedOperands { stream: x.id() });
            }
        }
        let sum_sq: f64 = bits.iter().map(|b| b.value() * b.value()).sum();
        self.derive(sum_sq.sqrt())
    }

    /// Produces a statistically independent resample of `bit`'s value.
    ///
    /// Same expected value, fresh randomness, fresh stream identity. Required
    /// whenever an output sample is fed back into an input of the same
    /// circuit in a later cycle; reusing a sample bit-for-bit violates the
    /// independence assumption behind every operator above.
    pub fn decorrelate(&mut self, bit: StochasticBit) -> StochasticBit {
        self.derive(bit.value())
    }

    /// Realizes a derived expectation as one fresh dual-rail draw.
    ///
    /// Reports saturation when `value` leaves [-1, 1]; the draw probability
    /// is clamped for realizability but the tracked value is not.
    fn derive(&mut self, value: f64) -> StochasticBit {
        let id = fresh_stream_id();
        self.check_saturation(id, value);
        let p = ((value + 1.0) / 2.0).clamp(0.0, 1.0);
        StochasticBit::from_draw(self.rng.gen_bool(p), value, id)
    }

    /// Reports operand samples that share a stream id.
    fn check_independent(&mut self, x: &StochasticBit, y: &StochasticBit) {
        if x.id() == y.id() && x.id() != StreamId::SEED {
            self.sink.report(Warning::CorrelatedOperands { stream: x.id() });
        }
    }

    /// Reports a derived expectation that left [-1, 1].
    fn check_saturation(&mut self, stream: StreamId, value: f64) {
        if !(-1.0..=1.0).contains(&value) {
            self.sink.report(Warning::Saturation { stream, value });
        }
    }
}

impl Default for StochasticOps {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StochasticOps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StochasticOps").finish_non_exhaustive()
    }
}
