//! Core types for resolved grids

use std::collections::HashMap;

use super::error::GridError;
use super::find_similar;

/// A rectangle in container coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized rectangle at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point as (x, y)
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Compute the union of two rectangles (smallest rect containing both)
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Shrink the rectangle by a per-side margin, clamping at zero size
    pub fn inset(&self, margin: crate::layout::Margin) -> Rect {
        Rect::new(
            self.x + margin.left,
            self.y + margin.top,
            (self.width - margin.horizontal()).max(0.0),
            (self.height - margin.vertical()).max(0.0),
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::zero()
    }
}

/// A resolved grid: named regions plus the track geometry they came from
///
/// Immutable after construction; consumers read region geometry to
/// parameterize scales and drawing calls, then discard it.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Region rectangles indexed by name
    regions: HashMap<String, Rect>,
    /// Region names in first-appearance order
    names: Vec<String>,
    /// Resolved row heights, top to bottom
    rows: Vec<f64>,
    /// Resolved column widths, left to right
    columns: Vec<f64>,
    /// Interior rectangle (container minus margin)
    inner: Rect,
}

impl Grid {
    pub(crate) fn new(
        regions: HashMap<String, Rect>,
        names: Vec<String>,
        rows: Vec<f64>,
        columns: Vec<f64>,
        inner: Rect,
    ) -> Self {
        Self {
            regions,
            names,
            rows,
            columns,
            inner,
        }
    }

    /// Geometry of a named region
    ///
    /// Fails with [`GridError::UnknownRegion`] (carrying close-match
    /// suggestions) when the template declares no such region.
    pub fn region(&self, name: &str) -> Result<Rect, GridError> {
        self.regions.get(name).copied().ok_or_else(|| {
            GridError::unknown_region(name, find_similar(self.names.iter(), name, 2))
        })
    }

    /// Geometry of a named region, or None if not declared
    pub fn try_region(&self, name: &str) -> Option<Rect> {
        self.regions.get(name).copied()
    }

    /// Whether the template declares the named region
    pub fn has_region(&self, name: &str) -> bool {
        self.regions.contains_key(name)
    }

    /// Region names in first-appearance order
    pub fn region_names(&self) -> &[String] {
        &self.names
    }

    /// Iterate (name, rect) pairs in first-appearance order
    pub fn regions(&self) -> impl Iterator<Item = (&str, Rect)> + '_ {
        self.names
            .iter()
            .map(|name| (name.as_str(), self.regions[name]))
    }

    /// Resolved row heights, top to bottom
    pub fn rows(&self) -> &[f64] {
        &self.rows
    }

    /// Resolved column widths, left to right
    pub fn columns(&self) -> &[f64] {
        &self.columns
    }

    /// Interior rectangle (container minus margin)
    pub fn inner(&self) -> Rect {
        self.inner
    }
}
