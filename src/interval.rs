//! Interval arithmetic for ray parameters and geometric bounds.
//!
//! Provides closed intervals [min, max] used for forward-hit tests, rectangle
//! bounds and cosine clamping.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f64,
    /// Maximum value of the interval
    pub max: f64,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if the interval contains the given value (inclusive bounds)
    ///
    /// NaN is never contained.
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp the given value to be within this interval's bounds
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }
}

/// Valid range of a cosine.
pub const COSINE: Interval = Interval::new(-1.0, 1.0);
