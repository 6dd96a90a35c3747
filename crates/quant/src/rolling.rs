//! Rolling window statistics with O(1) updates.
//!
//! Maintains running sums so a full pass over a series costs O(N)
//! regardless of the window length.

use std::collections::VecDeque;

/// A fixed-capacity rolling window over f64 values.
///
/// Once the window is full, pushing a new value evicts the oldest.
/// Running sums are kept relative to the first observed value; a flat
/// window then cancels to exactly zero variance instead of leaving
/// float dust behind.
#[derive(Debug, Clone)]
pub struct RollingStats {
    data: VecDeque<f64>,
    capacity: usize,
    /// Running sum of (value - shift) over the window.
    sum: f64,
    /// Running sum of (value - shift)^2 over the window.
    sum_sq: f64,
    /// Offset applied to every accumulated term; fixed at the first
    /// pushed value.
    shift: Option<f64>,
}

impl RollingStats {
    /// Create a new rolling window with the given capacity.
    ///
    /// # Panics
    /// Panics if capacity is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "rolling window capacity must be > 0");
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
            sum: 0.0,
            sum_sq: 0.0,
            shift: None,
        }
    }

    /// Push a value, evicting the oldest if the window is full.
    pub fn push(&mut self, value: f64) {
        let shift = *self.shift.get_or_insert(value);
        if self.data.len() == self.capacity {
            if let Some(evicted) = self.data.pop_front() {
                let e = evicted - shift;
                self.sum -= e;
                self.sum_sq -= e * e;
            }
        }
        let d = value - shift;
        self.data.push_back(value);
        self.sum += d;
        self.sum_sq += d * d;
    }

    /// Number of values currently in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check if the window has reached capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Window capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Mean of the current window values.
    pub fn mean(&self) -> Option<f64> {
        if self.data.is_empty() {
            return None;
        }
        let shift = self.shift?;
        Some(shift + self.sum / self.data.len() as f64)
    }

    /// Sample variance (N-1 denominator) of the current window values.
    ///
    /// Needs at least 2 values. Rounding can push the running-sum form a
    /// hair below zero; the result is clamped to 0.
    pub fn sample_variance(&self) -> Option<f64> {
        let n = self.data.len();
        if n < 2 {
            return None;
        }
        let n_f = n as f64;
        let var = (self.sum_sq - self.sum * self.sum / n_f) / (n_f - 1.0);
        Some(var.max(0.0))
    }

    /// Sample standard deviation of the current window values.
    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }

    /// Remove all values and reset the accumulators.
    pub fn clear(&mut self) {
        self.data.clear();
        self.sum = 0.0;
        self.sum_sq = 0.0;
        self.shift = None;
    }
}
