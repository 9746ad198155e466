//! Fixed-size trailing window over a stream of values.
//!
//! Alignment is trailing (the window ends at the current row) and the minimum
//! number of periods equals the capacity: statistics are only reported once
//! the window is full.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct RollingWindow {
    data: VecDeque<f64>,
    capacity: usize,
}

impl RollingWindow {
    /// # Panics
    /// Panics if capacity is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "RollingWindow capacity must be > 0");
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a value, evicting the oldest one when full.
    pub fn push(&mut self, value: f64) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(value);
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    /// Sample standard deviation (n - 1 denominator), `None` while not full.
    pub fn sample_std_dev(&self) -> Option<f64> {
        if !self.is_full() || self.data.len() < 2 {
            return None;
        }
        let n = self.data.len() as f64;
        let mean = self.data.iter().sum::<f64>() / n;
        let ssq: f64 = self.data.iter().map(|v| (v - mean).powi(2)).sum();
        Some((ssq / (n - 1.0)).sqrt())
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}
