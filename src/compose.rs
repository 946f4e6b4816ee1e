//! Chart composition over a resolved grid
//!
//! Hosts describe a draw cycle as a closure over a [`Layers`] set, dispatch
//! named drawing helpers through an explicit [`Registry`], and fit their
//! scales to the chart region with [`fit_scales`]. No drawing happens here;
//! the crate only hands out geometry.

use std::collections::HashMap;

use thiserror::Error;

use crate::layout::{Grid, GridError};
use crate::surface::{Layers, Surface};

/// Run one composition pass over a resolved grid
///
/// The closure receives a fresh [`Layers`] set; nothing is shared across
/// calls, so concurrent draw cycles over separate grids are independent.
pub fn compose<F>(grid: &Grid, f: F) -> Result<(), GridError>
where
    F: FnOnce(&mut Layers) -> Result<(), GridError>,
{
    let mut layers = Layers::new(grid);
    f(&mut layers)
}

/// A scale whose output range can be set from region geometry
///
/// The engine never inspects domains or interpolation; it only needs to
/// point the range at a region's extent.
pub trait RangedScale {
    fn set_range(&mut self, start: f64, end: f64);
}

/// Fit an x and a y scale to the `chart` region
///
/// The x range becomes `[0, chart.width]`; the y range becomes
/// `[chart.height, 0]` so larger domain values sit higher on screen.
pub fn fit_scales(
    grid: &Grid,
    x: &mut dyn RangedScale,
    y: &mut dyn RangedScale,
) -> Result<(), GridError> {
    let chart = grid.region("chart")?;
    x.set_range(0.0, chart.width);
    y.set_range(chart.height, 0.0);
    Ok(())
}

/// Error dispatching a named drawing helper
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no drawing helper registered under '{0}'")]
    UnknownHelper(String),
}

type DrawFn<C> = Box<dyn Fn(&Surface, &mut C)>;

/// Named drawing helpers over a host-supplied context
///
/// The context type carries whatever the host's primitives need: data,
/// scales, styles, an opaque transition handle. The registry is an explicit
/// value passed into composition code, not ambient global state.
pub struct Registry<C> {
    helpers: HashMap<String, DrawFn<C>>,
}

impl<C> Registry<C> {
    pub fn new() -> Self {
        Self {
            helpers: HashMap::new(),
        }
    }

    /// Register a helper under a name, replacing any existing one
    pub fn register(&mut self, name: impl Into<String>, helper: impl Fn(&Surface, &mut C) + 'static) {
        self.helpers.insert(name.into(), Box::new(helper));
    }

    /// Whether a helper is registered under the name
    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    /// Invoke a named helper against a surface
    pub fn draw(&self, name: &str, surface: &Surface, ctx: &mut C) -> Result<(), RegistryError> {
        let helper = self
            .helpers
            .get(name)
            .ok_or_else(|| RegistryError::UnknownHelper(name.to_string()))?;
        helper(surface, ctx);
        Ok(())
    }
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.helpers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("helpers", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridConfig;
    use crate::scale::LinearScale;
    use crate::template;

    fn chart_grid() -> Grid {
        let input = r#"
            "y_axis chart" auto
            ". x_axis" 20
            / 40 auto
        "#;
        template(input, &GridConfig::new(240.0, 120.0)).expect("Should resolve")
    }

    #[test]
    fn test_compose_runs_closure_over_layers() {
        let grid = chart_grid();
        let mut seen = Vec::new();
        compose(&grid, |layers| {
            seen.push(layers.surface("y_axis")?.name().to_string());
            seen.push(layers.chart_layer("marks")?.name().to_string());
            Ok(())
        })
        .expect("Should compose");
        assert_eq!(seen, vec!["y_axis", "chart.marks"]);
    }

    #[test]
    fn test_compose_propagates_unknown_region() {
        let grid = chart_grid();
        let result = compose(&grid, |layers| {
            layers.surface("legend")?;
            Ok(())
        });
        assert!(matches!(result, Err(GridError::UnknownRegion { .. })));
    }

    #[test]
    fn test_fit_scales_uses_chart_extent() {
        let grid = chart_grid();
        let mut x = LinearScale::new(0.0, 100.0);
        let mut y = LinearScale::new(0.0, 100.0);
        fit_scales(&grid, &mut x, &mut y).expect("chart exists");

        assert_eq!(x.range(), (0.0, 200.0));
        assert_eq!(y.range(), (100.0, 0.0));
        // domain maximum maps to the top of the chart
        assert_eq!(y.scale(100.0), 0.0);
    }

    #[test]
    fn test_fit_scales_without_chart_region_fails() {
        let grid = template(r#""a" auto / auto"#, &GridConfig::new(100.0, 100.0)).unwrap();
        let mut x = LinearScale::new(0.0, 1.0);
        let mut y = LinearScale::new(0.0, 1.0);
        assert!(fit_scales(&grid, &mut x, &mut y).is_err());
    }

    #[test]
    fn test_registry_dispatch() {
        let grid = chart_grid();
        let layers = Layers::new(&grid);

        let mut registry: Registry<Vec<String>> = Registry::new();
        registry.register("gridlines", |surface, log: &mut Vec<String>| {
            log.push(format!("gridlines on {}", surface.name()));
        });

        let mut log = Vec::new();
        let chart = layers.surface("chart").unwrap();
        registry.draw("gridlines", &chart, &mut log).expect("registered");
        assert_eq!(log, vec!["gridlines on chart"]);
    }

    #[test]
    fn test_registry_unknown_helper() {
        let grid = chart_grid();
        let layers = Layers::new(&grid);
        let registry: Registry<()> = Registry::new();
        let chart = layers.surface("chart").unwrap();
        let err = registry.draw("bars", &chart, &mut ()).expect_err("Should fail");
        assert!(err.to_string().contains("bars"));
    }

    #[test]
    fn test_registry_replaces_existing_helper() {
        let mut registry: Registry<u32> = Registry::new();
        registry.register("marks", |_, n: &mut u32| *n += 1);
        registry.register("marks", |_, n: &mut u32| *n += 10);
        assert!(registry.contains("marks"));

        let grid = chart_grid();
        let chart = Layers::new(&grid).surface("chart").unwrap();
        let mut count = 0;
        registry.draw("marks", &chart, &mut count).unwrap();
        assert_eq!(count, 10);
    }
}
