//! Drawing surfaces and layers over a resolved grid
//!
//! A [`Surface`] is the handle host rendering code draws into: a named frame
//! in container coordinates. [`Layers`] wraps a resolved [`Grid`] and hands
//! out region surfaces, including memoized labeled child layers so several
//! overlapping passes (gridlines, marks, labels) can share one region.

use crate::layout::{Grid, GridError, Margin, Rect};

/// A drawable target corresponding to a region, or to a labeled layer
/// within one
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    name: String,
    frame: Rect,
}

impl Surface {
    fn new(name: impl Into<String>, frame: Rect) -> Self {
        Self {
            name: name.into(),
            frame,
        }
    }

    /// Region name, with the layer label appended for child layers
    /// (e.g. `chart.gridlines`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Frame in container coordinates
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn width(&self) -> f64 {
        self.frame.width
    }

    pub fn height(&self) -> f64 {
        self.frame.height
    }
}

/// Region handles for one draw cycle
///
/// Constructed from a resolved grid and discarded with it. Labeled layers
/// are created on first request and returned unchanged afterwards, in
/// creation order, so hosts can stack them back to front.
#[derive(Debug)]
pub struct Layers<'a> {
    grid: &'a Grid,
    layers: Vec<Surface>,
}

impl<'a> Layers<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            layers: Vec::new(),
        }
    }

    /// Surface for a named region
    pub fn surface(&self, name: &str) -> Result<Surface, GridError> {
        let frame = self.grid.region(name)?;
        Ok(Surface::new(name, frame))
    }

    /// Surface for a named region with an extra margin applied to its frame
    pub fn surface_with_margin(
        &self,
        name: &str,
        margin: impl Into<Margin>,
    ) -> Result<Surface, GridError> {
        let frame = self.grid.region(name)?.inset(margin.into());
        Ok(Surface::new(name, frame))
    }

    /// Labeled child layer of a named region, created on first use
    ///
    /// Repeated calls with the same region and label return the same
    /// surface. The layer shares its parent region's frame; distinct labels
    /// give hosts distinct attachment points within it.
    pub fn layer(&mut self, region: &str, label: &str) -> Result<&Surface, GridError> {
        let name = format!("{}.{}", region, label);
        if let Some(index) = self.layers.iter().position(|s| s.name == name) {
            return Ok(&self.layers[index]);
        }
        let frame = self.grid.region(region)?;
        self.layers.push(Surface::new(name, frame));
        Ok(self.layers.last().unwrap())
    }

    /// Labeled layer of the `chart` region
    pub fn chart_layer(&mut self, label: &str) -> Result<&Surface, GridError> {
        self.layer("chart", label)
    }

    /// Layers in creation order (back to front)
    pub fn created_layers(&self) -> impl Iterator<Item = &Surface> {
        self.layers.iter()
    }

    /// The grid this layer set was built from
    pub fn grid(&self) -> &Grid {
        self.grid
    }
}
