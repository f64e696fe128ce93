//! Empirical stream statistics.
//!
//! A bitstream encodes its value only in aggregate, so observing a simulated
//! circuit means averaging realized samples over a window — the software
//! analog of the averaging filter a hardware testbench puts on an output
//! wire. This module provides the fixed-window [`Estimator`] used to read
//! empirical stream averages during a trial.

use std::collections::VecDeque;

use crate::common::bit::Bit;
use crate::config::SimConfig;

/// Fixed-window running mean of sample realizations.
///
/// Pushing beyond the window drops the oldest sample, so the estimate tracks
/// the most recent `window` samples. An empty estimator reports zero.
#[derive(Clone, Debug)]
pub struct Estimator {
    window: VecDeque<f64>,
    capacity: usize,
    sum: f64,
}

impl Estimator {
    /// Creates an estimator over the given window length.
    ///
    /// # Panics
    ///
    /// Panics if `window` is zero; an empty window estimates nothing.
    pub fn new(window: usize) -> Self {
        assert!(window > 0, "estimation window must be at least 1");
        Self {
            window: VecDeque::with_capacity(window),
            capacity: window,
            sum: 0.0,
        }
    }

    /// Creates an estimator using the configured window length.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.estimate_window)
    }

    /// Pushes one realized sample and returns the current estimate.
    pub fn update(&mut self, sample: f64) -> f64 {
        if self.window.len() == self.capacity {
            if let Some(oldest) = self.window.pop_front() {
                self.sum -= oldest;
            }
        }
        self.window.push_back(sample);
        self.sum += sample;
        self.mean()
    }

    /// Pushes one bit's realization and returns the current estimate.
    pub fn update_bit<B: Bit>(&mut self, bit: B) -> f64 {
        self.update(bit.realized())
    }

    /// Returns the current estimate without pushing.
    pub fn mean(&self) -> f64 {
        if self.window.is_empty() {
            0.0
        } else {
            self.sum / self.window.len() as f64
        }
    }

    /// Returns the number of samples currently in the window.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Returns `true` if no samples have been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}
