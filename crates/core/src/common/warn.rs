//! Non-fatal warning side channel.
//!
//! Two conditions are reported here rather than raised as errors, because the
//! hardware they model keeps running through both:
//! 1. **Saturation:** a derived expected value left [-1, 1]. The core never
//!    clamps the tracked value; it reports and continues.
//! 2. **Correlated operands:** two operand samples of an independence-assuming
//!    operator carried the same stream id, meaning an output was fed back
//!    without decorrelation and the result is biased.
//!
//! The sink is injectable so hosts can collect, count, or log warnings. The
//! default [`LogSink`] forwards to `tracing`.

use crate::common::id::StreamId;

/// A non-fatal condition observed during operator evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Warning {
    /// A derived expected value left the representable range [-1, 1].
    ///
    /// Carries the id assigned to the derived sample and the out-of-range
    /// value, so the scaling mistake can be located upstream.
    Saturation {
        /// Id of the derived output sample.
        stream: StreamId,
        /// The out-of-range expected value (not clamped).
        value: f64,
    },

    /// Two operands of an independence-assuming operator shared a stream id.
    ///
    /// Reusing a sample at two points of a stochastic circuit violates the
    /// independence assumption behind every operator contract; the result is
    /// biased until the feedback path goes through a decorrelator.
    CorrelatedOperands {
        /// The shared operand stream id.
        stream: StreamId,
    },
}

/// Receiver for non-fatal warnings.
///
/// Implementations must be `Send` so an operator context can move with its
/// trial across threads.
pub trait WarningSink: Send {
    /// Receives one warning. Must not panic; the simulation continues.
    fn report(&mut self, warning: Warning);
}

/// Default sink: forwards warnings to `tracing` at `warn` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl WarningSink for LogSink {
    fn report(&mut self, warning: Warning) {
        match warning {
            Warning::Saturation { stream, value } => {
                tracing::warn!(%stream, value, "expected value saturated outside [-1, 1]");
            }
            Warning::CorrelatedOperands { stream } => {
                tracing::warn!(%stream, "operands share a stream id; decorrelate feedback paths");
            }
        }
    }
}
