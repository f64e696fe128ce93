//! Fixed-capacity delay buffers (shift registers).
//!
//! A delay buffer models a chain of N flip-flops: it is constructed full of
//! zero bits and follows one-in-one-out discipline. Capacity 1 is exactly a
//! one-sample delay. The buffer is generic over the bit kind — deterministic
//! filters delay pulses, stochastic pipelines delay dual-rail samples.

use std::collections::VecDeque;

use crate::common::bit::Bit;
use crate::common::error::{Error, Result};

/// A fixed-capacity FIFO of bits, seeded with zero bits at construction.
///
/// Capacity is fixed for the buffer's lifetime. `push` fails when full and
/// `pop` fails when empty; [`Self::shift`] is the pop-then-push idiom that
/// keeps the buffer exactly full, the way hardware clocks a shift register.
#[derive(Clone, Debug)]
pub struct DelayBuffer<B: Bit> {
    slots: VecDeque<B>,
    capacity: usize,
}

impl<B: Bit> DelayBuffer<B> {
    /// Creates a buffer of `capacity` slots, all holding `B::zero()`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a zero-length shift register is not a
    /// realizable circuit element.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "delay buffer capacity must be at least 1");
        let mut slots = VecDeque::with_capacity(capacity);
        for _ in 0..capacity {
            slots.push_back(B::zero());
        }
        Self { slots, capacity }
    }

    /// Returns the fixed capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Appends a bit to the tail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DelayFull`] when the buffer is full; pop first to
    /// make room (one-in-one-out discipline).
    pub fn push(&mut self, bit: B) -> Result<()> {
        if self.is_full() {
            return Err(Error::DelayFull {
                capacity: self.capacity,
            });
        }
        self.slots.push_back(bit);
        Ok(())
    }

    /// Removes and returns the oldest bit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DelayEmpty`] when the buffer is empty.
    pub fn pop(&mut self) -> Result<B> {
        self.slots.pop_front().ok_or(Error::DelayEmpty)
    }

    /// Clocks the register once: pops the oldest bit, pushes `bit`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DelayEmpty`] when the buffer is empty (only possible
    /// after unpaired pops broke the one-in-one-out discipline).
    pub fn shift(&mut self, bit: B) -> Result<B> {
        let oldest = self.slots.pop_front().ok_or(Error::DelayEmpty)?;
        self.slots.push_back(bit);
        Ok(oldest)
    }
}
