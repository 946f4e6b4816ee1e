//! grid-composer - declarative grid layout for chart composition
//!
//! This library parses a CSS-grid-like template string plus a container size
//! and margin into named rectangular regions, and provides a small
//! composition layer (surfaces, labeled chart layers, a drawing-helper
//! registry, scale fitting) for host rendering code.
//!
//! # Example
//!
//! ```rust
//! use grid_composer::{template, GridConfig};
//!
//! let grid = template(
//!     r#"
//!     "title title" 40
//!     "y_axis chart" auto
//!     / 40 auto
//!     "#,
//!     &GridConfig::new(640.0, 440.0).with_margin(20.0),
//! )
//! .unwrap();
//!
//! let chart = grid.region("chart").unwrap();
//! assert_eq!(chart.width, 560.0);
//! assert_eq!(chart.height, 360.0);
//! ```

pub mod compose;
pub mod error;
pub mod layout;
pub mod parser;
pub mod preset;
pub mod scale;
pub mod surface;

pub use compose::{compose, fit_scales, RangedScale, Registry, RegistryError};
pub use error::ParseError;
pub use layout::{Grid, GridConfig, GridError, Margin, Rect};
pub use parser::{parse, TemplateAst};
pub use preset::{Preset, PresetError};
pub use scale::{BandScale, LinearScale};
pub use surface::{Layers, Surface};

use thiserror::Error;

/// Errors that can occur turning a template string into a resolved grid
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Error during parsing
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// Error during grid resolution
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

impl From<Vec<ParseError>> for ComposeError {
    fn from(errors: Vec<ParseError>) -> Self {
        ComposeError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse a template string and resolve it against a container configuration
///
/// This is the main entry point for the library. Each call builds a fresh
/// immutable [`Grid`]; consumers read region geometry from it and discard
/// it at the end of the draw cycle.
///
/// # Example
///
/// ```rust
/// use grid_composer::{template, GridConfig};
///
/// let grid = template(r#""a a" 50 / 100 50"#, &GridConfig::new(150.0, 50.0)).unwrap();
/// let a = grid.region("a").unwrap();
/// assert_eq!((a.x, a.y, a.width, a.height), (0.0, 0.0, 150.0, 50.0));
/// ```
pub fn template(source: &str, config: &GridConfig) -> Result<Grid, ComposeError> {
    let ast = parser::parse(source)?;
    let grid = layout::resolve(&ast, config)?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_resolves_named_regions() {
        let grid = template(r#""a ." 50 / 100 50"#, &GridConfig::new(150.0, 50.0)).unwrap();
        let a = grid.region("a").unwrap();
        assert_eq!((a.x, a.y, a.width, a.height), (0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn test_template_syntax_error() {
        let err = template("no quotes here", &GridConfig::new(100.0, 100.0))
            .expect_err("Should fail");
        assert!(matches!(err, ComposeError::Parse(_)));
    }

    #[test]
    fn test_template_shape_error() {
        let input = r#"
            "a b" 50
            "c" 50
            / auto auto
        "#;
        let err = template(input, &GridConfig::new(100.0, 100.0)).expect_err("Should fail");
        assert!(matches!(err, ComposeError::Grid(GridError::Shape { .. })));
    }

    #[test]
    fn test_unknown_region_error() {
        let grid = template(r#""a" auto / auto"#, &GridConfig::new(100.0, 100.0)).unwrap();
        let err = grid.region("b").expect_err("Should fail");
        assert!(matches!(err, GridError::UnknownRegion { .. }));
    }

    #[test]
    fn test_parse_error_message_joins_all_errors() {
        let err = template("/", &GridConfig::new(10.0, 10.0)).expect_err("Should fail");
        assert!(err.to_string().contains("parse errors"));
    }
}
