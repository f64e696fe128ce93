//! Stochastic bitstreams: lazy Bernoulli sample sources with a FIFO queue.
//!
//! A stream is constructed once from a value in [-1, 1] and lives for the
//! simulation. Its queue grows via `push`/`generate` and shrinks via `pop`;
//! an empty pop synthesizes a fresh sample from the stream's own randomness
//! source instead of failing. Each stream owns an independently seeded RNG so
//! parallel trials never share randomness state.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::error::{Error, Result};
use crate::common::id::{StreamId, fresh_stream_id};
use crate::common::stream::Bitstream;
use crate::stochastic::bit::StochasticBit;

/// A stochastic bitstream encoding a real value in [-1, 1].
///
/// The value and id never change after construction. Pre-generated bits in
/// the queue are popped before any new samples are synthesized.
#[derive(Debug)]
pub struct StochasticBitstream {
    queue: VecDeque<StochasticBit>,
    value: f64,
    id: StreamId,
    rng: StdRng,
    latest: Option<StochasticBit>,
}

impl StochasticBitstream {
    /// Creates a stream encoding `value`, seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `value` lies outside [-1, 1].
    pub fn new(value: f64) -> Result<Self> {
        Self::with_rng(value, StdRng::from_entropy())
    }

    /// Creates a stream encoding `value` with a deterministic seed.
    ///
    /// Reproducible runs seed every stream (and the operator context)
    /// explicitly; parallel trials must use distinct seeds to avoid
    /// inter-trial correlation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] if `value` lies outside [-1, 1].
    pub fn seeded(value: f64, seed: u64) -> Result<Self> {
        Self::with_rng(value, StdRng::seed_from_u64(seed))
    }

    fn with_rng(value: f64, rng: StdRng) -> Result<Self> {
        if !(-1.0..=1.0).contains(&value) {
            return Err(Error::ValueOutOfRange { value });
        }
        Ok(Self {
            queue: VecDeque::new(),
            value,
            id: fresh_stream_id(),
            rng,
            latest: None,
        })
    }

    /// Returns the real value this stream encodes.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns this stream's unique id.
    #[inline]
    pub const fn id(&self) -> StreamId {
        self.id
    }

    /// Synthesizes one fresh sample without queueing it.
    ///
    /// One Bernoulli trial with success probability `p = (value + 1) / 2`;
    /// the draw asserts exactly one rail, so
    /// `E[pos] − E[neg] = 2p − 1 = value`.
    pub fn draw(&mut self) -> StochasticBit {
        let p = (self.value + 1.0) / 2.0;
        let bit = StochasticBit::from_draw(self.rng.gen_bool(p), self.value, self.id);
        self.latest = Some(bit);
        bit
    }

    /// Pre-populates the tail of the queue with `count` fresh samples.
    ///
    /// Appends only, never removes; amortizes sampling cost for long trials.
    pub fn generate(&mut self, count: usize) {
        self.queue.reserve(count);
        for _ in 0..count {
            let bit = self.draw();
            self.queue.push_back(bit);
        }
        tracing::debug!(stream = %self.id, count, depth = self.queue.len(), "generated samples");
    }
}

impl Bitstream for StochasticBitstream {
    type Bit = StochasticBit;

    fn push(&mut self, bit: StochasticBit) {
        self.latest = Some(bit);
        self.queue.push_back(bit);
    }

    /// Pops the head of the queue, or synthesizes a fresh sample when empty.
    ///
    /// Synthesis does not touch the queue; pre-generated bits always take
    /// precedence over resampling.
    fn pop(&mut self) -> Result<StochasticBit> {
        match self.queue.pop_front() {
            Some(bit) => Ok(bit),
            None => Ok(self.draw()),
        }
    }

    fn observe(&self) -> Option<StochasticBit> {
        self.latest
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
