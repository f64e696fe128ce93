//! Error definitions for bitstream simulation.
//!
//! This module defines the single error type shared by the whole core. It provides:
//! 1. **Stream errors:** Popping from an empty deterministic bitstream.
//! 2. **Domain errors:** Operator preconditions (divisor sign, gain range, radicand sign),
//!    each naming the violated precondition and the offending operand values.
//! 3. **Buffer errors:** Delay-buffer one-in-one-out discipline violations.
//! 4. **I/O errors:** Failures while reading or writing PDM text data.
//!
//! Saturation and operand-correlation conditions are *not* errors; they are
//! non-fatal warnings routed through [`crate::common::warn::WarningSink`].

use thiserror::Error;

/// Errors raised by bitstream, operator, buffer, and I/O operations.
///
/// Domain variants carry the operand values that violated the precondition so
/// scaling mistakes upstream can be debugged from the message alone.
#[derive(Debug, Error)]
pub enum Error {
    /// A pop was attempted on an empty deterministic bitstream.
    ///
    /// Deterministic streams have no underlying value to sample from, so an
    /// empty queue cannot synthesize bits on demand.
    #[error("cannot pop from an empty deterministic bitstream")]
    EmptyStream,

    /// Division requires the divisor's expected value to be strictly positive.
    #[error(
        "division requires a strictly positive divisor expectation, \
         got dividend {dividend} and divisor {divisor}"
    )]
    NonPositiveDivisor {
        /// Expected value of the dividend sample.
        dividend: f64,
        /// Expected value of the divisor sample.
        divisor: f64,
    },

    /// Fixed-gain division requires a gain constant of at least one.
    #[error("fixed-gain division requires a gain >= 1, got {gain}")]
    GainBelowUnity {
        /// The offending gain constant.
        gain: f64,
    },

    /// Square root requires a non-negative expected value.
    #[error("square root requires a non-negative expectation, got {value}")]
    NegativeRadicand {
        /// Expected value of the operand sample.
        value: f64,
    },

    /// A stochastic bitstream was constructed from a value outside [-1, 1].
    #[error("stochastic bitstream value must lie in [-1, 1], got {value}")]
    ValueOutOfRange {
        /// The offending construction value.
        value: f64,
    },

    /// A pop was attempted on an empty delay buffer.
    #[error("cannot pop from an empty delay buffer")]
    DelayEmpty,

    /// A push was attempted on a full delay buffer.
    ///
    /// Delay buffers follow shift-register discipline: pop first to make room.
    #[error("delay buffer is full (capacity {capacity}); pop before pushing")]
    DelayFull {
        /// Fixed capacity of the buffer.
        capacity: usize,
    },

    /// An underlying I/O operation failed while reading or writing PDM data.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
