//! Deterministic PDM bitstreams.
//!
//! A deterministic stream is a plain FIFO of pulses with no associated scalar
//! value: there is no distribution to sample from, so an empty pop is an
//! error rather than a synthesis point.

use std::collections::VecDeque;

use crate::common::error::{Error, Result};
use crate::common::stream::Bitstream;
use crate::deterministic::bit::DeterministicBit;

/// A deterministic (PDM) bitstream: an ordered queue of pulses.
///
/// Constructed empty; grows via `push` and shrinks via `pop`.
#[derive(Debug, Default)]
pub struct DeterministicBitstream {
    queue: VecDeque<DeterministicBit>,
    latest: Option<DeterministicBit>,
}

impl DeterministicBitstream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Bitstream for DeterministicBitstream {
    type Bit = DeterministicBit;

    fn push(&mut self, bit: DeterministicBit) {
        self.latest = Some(bit);
        self.queue.push_back(bit);
    }

    /// Pops the head of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStream`] when the queue is empty.
    fn pop(&mut self) -> Result<DeterministicBit> {
        self.queue.pop_front().ok_or(Error::EmptyStream)
    }

    fn observe(&self) -> Option<DeterministicBit> {
        self.latest
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
