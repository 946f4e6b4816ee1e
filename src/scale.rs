//! Minimal scales for parameterizing chart regions
//!
//! Hosts with their own scale objects only need to implement
//! [`RangedScale`](crate::compose::RangedScale); these two cover the common
//! continuous and categorical cases for headless use and tests.

use crate::compose::RangedScale;

/// Linear domain -> range mapping
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a scale with the given domain and a unit range
    pub fn new(domain_start: f64, domain_end: f64) -> Self {
        Self {
            domain: (domain_start, domain_end),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value into the range
    ///
    /// Values outside the domain extrapolate linearly. A degenerate domain
    /// maps everything to the range start.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

impl RangedScale for LinearScale {
    fn set_range(&mut self, start: f64, end: f64) {
        self.range = (start, end);
    }
}

/// Categorical domain -> evenly stepped band positions
///
/// Each domain key gets a band of equal width; `padding_inner` (0..1) is the
/// fraction of each step left empty between bands. There is no outer
/// padding: the first band starts at the range start.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
}

impl BandScale {
    pub fn new(domain: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            domain: domain.into_iter().map(Into::into).collect(),
            range: (0.0, 1.0),
            padding_inner: 0.0,
        }
    }

    /// Set the inner padding fraction, clamped to [0, 1]
    pub fn with_padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Distance between consecutive band starts
    pub fn step(&self) -> f64 {
        let n = self.domain.len();
        if n == 0 {
            return 0.0;
        }
        let extent = self.range.1 - self.range.0;
        extent / (n as f64 - self.padding_inner).max(1.0)
    }

    /// Width of one band
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Start position of the band for a domain key
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.domain.iter().position(|k| k == key)?;
        Some(self.range.0 + self.step() * index as f64)
    }
}

impl RangedScale for BandScale {
    fn set_range(&mut self, start: f64, end: f64) {
        self.range = (start, end);
    }
}
