//! The queue protocol shared by both bitstream kinds.
//!
//! A bitstream is an ordered FIFO of samples. The protocol is deliberately
//! small: push grows the tail, pop consumes the head, observe peeks at the
//! most recent sample, and length reports queue depth. The two concrete
//! stream kinds differ only in what an empty pop means — deterministic
//! streams fail, stochastic streams synthesize a fresh sample on demand.

use crate::common::bit::Bit;
use crate::common::error::Result;

/// An ordered queue of bit samples.
///
/// Queue entries are consumed at most once: `pop` removes. `observe` is a
/// peek at the most recently pushed or generated sample, not at the head —
/// it answers "what did this stream last carry", which is the tap a probe on
/// the output wire would see.
pub trait Bitstream {
    /// The sample kind carried by this stream.
    type Bit: Bit;

    /// Appends one bit to the tail of the queue.
    fn push(&mut self, bit: Self::Bit);

    /// Removes and returns the head of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::error::Error::EmptyStream`] for a
    /// deterministic stream with an empty queue. Stochastic streams never
    /// fail: an empty queue synthesizes a fresh sample instead.
    fn pop(&mut self) -> Result<Self::Bit>;

    /// Returns the most recently pushed or generated sample without removing
    /// it, or `None` if the stream has never carried a sample.
    fn observe(&self) -> Option<Self::Bit>;

    /// Returns the current queue depth.
    ///
    /// Zero is a valid, meaningful state for stochastic streams: samples are
    /// generated lazily on pop.
    fn len(&self) -> usize;

    /// Returns `true` if the queue is currently empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a sequence of bits to the tail of the queue in order.
    fn push_all<I>(&mut self, bits: I)
    where
        I: IntoIterator<Item = Self::Bit>,
    {
        for bit in bits {
            self.push(bit);
        }
    }
}
