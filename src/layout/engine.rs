//! Grid resolution: template AST + container config -> named regions
//!
//! Resolution is a single synchronous pass: validate the template shape,
//! size the row and column tracks against the container interior, then
//! coalesce same-named cells into bounding rectangles.

use std::collections::HashMap;

use crate::parser::ast::{Cell, TemplateAst, TrackSize};

use super::config::GridConfig;
use super::error::GridError;
use super::types::{Grid, Rect};

/// Resolve a parsed template against a container configuration
///
/// Shape errors are raised before any geometry is computed.
pub fn resolve(ast: &TemplateAst, config: &GridConfig) -> Result<Grid, GridError> {
    validate_shape(ast)?;

    let inner = Rect::new(
        config.margin.left,
        config.margin.top,
        config.inner_width(),
        config.inner_height(),
    );

    let row_sizes: Vec<TrackSize> = ast.rows.iter().map(|r| r.node.size.node).collect();
    let col_sizes: Vec<TrackSize> = ast.columns.iter().map(|c| c.node).collect();

    let rows = resolve_tracks(&row_sizes, inner.height);
    let columns = resolve_tracks(&col_sizes, inner.width);

    let row_starts = track_starts(inner.y, &rows);
    let col_starts = track_starts(inner.x, &columns);

    let mut regions: HashMap<String, Rect> = HashMap::new();
    let mut names: Vec<String> = Vec::new();

    for (r, row) in ast.rows.iter().enumerate() {
        for (c, cell) in row.node.cells.iter().enumerate() {
            let name = match &cell.node {
                Cell::Empty => continue,
                Cell::Named(id) => id.as_str(),
            };
            let cell_rect = Rect::new(col_starts[c], row_starts[r], columns[c], rows[r]);
            match regions.get_mut(name) {
                // A repeated name spans: the region becomes the bounding
                // rectangle over every cell sharing it
                Some(rect) => *rect = rect.union(&cell_rect),
                None => {
                    regions.insert(name.to_string(), cell_rect);
                    names.push(name.to_string());
                }
            }
        }
    }

    Ok(Grid::new(regions, names, rows, columns, inner))
}

/// Validate rectangularity before any geometry is computed
fn validate_shape(ast: &TemplateAst) -> Result<(), GridError> {
    // The grammar guarantees at least one row and one column size; a
    // hand-built AST might not
    let Some(first) = ast.rows.first() else {
        return Err(GridError::ragged_row(0, 1, 0, 0..0));
    };
    if ast.columns.is_empty() {
        return Err(GridError::column_clause_mismatch(
            first.node.column_count(),
            0,
            0..0,
        ));
    }
    let expected = first.node.column_count();

    for (index, row) in ast.rows.iter().enumerate() {
        let found = row.node.column_count();
        if found != expected {
            return Err(GridError::ragged_row(index, expected, found, row.span.clone()));
        }
    }

    let declared = ast.column_count();
    if declared != expected {
        let span = ast.columns[0].span.start..ast.columns[declared - 1].span.end;
        return Err(GridError::column_clause_mismatch(expected, declared, span));
    }

    Ok(())
}

/// Size one axis' tracks against the interior extent
///
/// Fixed tracks take their declared size; the leftover (clamped at zero) is
/// split evenly across `auto` tracks. When the axis has no `auto` track and
/// the fixed sizes don't sum to the interior, the last track absorbs the
/// difference, clamped at zero.
fn resolve_tracks(tracks: &[TrackSize], inner: f64) -> Vec<f64> {
    let fixed_sum: f64 = tracks
        .iter()
        .filter_map(|t| match t {
            TrackSize::Px(px) => Some(*px),
            TrackSize::Auto => None,
        })
        .sum();
    let auto_count = tracks
        .iter()
        .filter(|t| matches!(t, TrackSize::Auto))
        .count();

    if auto_count > 0 {
        let share = (inner - fixed_sum).max(0.0) / auto_count as f64;
        tracks
            .iter()
            .map(|t| match t {
                TrackSize::Px(px) => *px,
                TrackSize::Auto => share,
            })
            .collect()
    } else {
        let mut sizes: Vec<f64> = tracks
            .iter()
            .map(|t| match t {
                TrackSize::Px(px) => *px,
                TrackSize::Auto => unreachable!("auto_count is zero"),
            })
            .collect();
        if let Some(last) = sizes.last_mut() {
            *last = (*last + inner - fixed_sum).max(0.0);
        }
        sizes
    }
}

/// Cumulative start offsets for tracks, beginning at `origin`
fn track_starts(origin: f64, sizes: &[f64]) -> Vec<f64> {
    let mut starts = Vec::with_capacity(sizes.len());
    let mut cursor = origin;
    for size in sizes {
        starts.push(cursor);
        cursor += size;
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margin;
    use crate::parser::parse;

    fn resolve_str(source: &str, config: &GridConfig) -> Result<Grid, GridError> {
        let ast = parse(source).expect("template should parse");
        resolve(&ast, config)
    }

    #[test]
    fn test_single_spanning_region() {
        let grid = resolve_str(r#""a a" 50 / 100 50"#, &GridConfig::new(150.0, 50.0))
            .expect("Should resolve");
        let a = grid.region("a").expect("a exists");
        assert_eq!(a, Rect::new(0.0, 0.0, 150.0, 50.0));
    }

    #[test]
    fn test_empty_cell_contributes_no_region() {
        let grid = resolve_str(r#""a ." 50 / 100 50"#, &GridConfig::new(150.0, 50.0))
            .expect("Should resolve");
        let a = grid.region("a").expect("a exists");
        assert_eq!(a, Rect::new(0.0, 0.0, 100.0, 50.0));
        assert!(!grid.has_region("."));
        assert_eq!(grid.region_names().len(), 1);
    }

    #[test]
    fn test_auto_tracks_share_leftover() {
        let input = r#"
            "title title" 40
            "y_axis chart" auto
            / 40 auto
        "#;
        let grid =
            resolve_str(input, &GridConfig::new(240.0, 140.0)).expect("Should resolve");
        assert_eq!(grid.rows(), &[40.0, 100.0]);
        assert_eq!(grid.columns(), &[40.0, 200.0]);
        assert_eq!(
            grid.region("chart").unwrap(),
            Rect::new(40.0, 40.0, 200.0, 100.0)
        );
    }

    #[test]
    fn test_multiple_auto_tracks_split_evenly() {
        let grid = resolve_str(r#""a b c" auto / auto 50 auto"#, &GridConfig::new(250.0, 30.0))
            .expect("Should resolve");
        assert_eq!(grid.columns(), &[100.0, 50.0, 100.0]);
    }

    #[test]
    fn test_margin_offsets_regions() {
        let grid = resolve_str(
            r#""a" auto / auto"#,
            &GridConfig::new(100.0, 80.0).with_margin(Margin::trbl(5.0, 10.0, 15.0, 20.0)),
        )
        .expect("Should resolve");
        assert_eq!(grid.region("a").unwrap(), Rect::new(20.0, 5.0, 70.0, 60.0));
        assert_eq!(grid.inner(), Rect::new(20.0, 5.0, 70.0, 60.0));
    }

    #[test]
    fn test_fixed_only_axis_stretches_last_track() {
        // No auto column and fixed sizes sum to 120 in a 150-wide interior:
        // the last column absorbs the 30px difference
        let grid = resolve_str(r#""a b" 50 / 60 60"#, &GridConfig::new(150.0, 50.0))
            .expect("Should resolve");
        assert_eq!(grid.columns(), &[60.0, 90.0]);
    }

    #[test]
    fn test_fixed_overflow_clamps_last_track() {
        let grid = resolve_str(r#""a b" 50 / 100 100"#, &GridConfig::new(150.0, 50.0))
            .expect("Should resolve");
        assert_eq!(grid.columns(), &[100.0, 50.0]);
    }

    #[test]
    fn test_auto_track_never_negative() {
        let grid = resolve_str(r#""a b" 50 / 200 auto"#, &GridConfig::new(150.0, 50.0))
            .expect("Should resolve");
        assert_eq!(grid.columns(), &[200.0, 0.0]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let input = r#"
            "a b" 50
            "c d e" 50
            / auto auto
        "#;
        let err = resolve_str(input, &GridConfig::new(100.0, 100.0)).expect_err("Should fail");
        match err {
            GridError::Shape {
                expected, found, ..
            } => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("Expected Shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_column_clause_mismatch_rejected() {
        let err = resolve_str(r#""a b" 50 / auto"#, &GridConfig::new(100.0, 50.0))
            .expect_err("Should fail");
        assert!(err.to_string().contains("1 sizes"));
    }

    #[test]
    fn test_non_adjacent_repeats_coalesce_to_bounding_rect() {
        let input = r#"
            "a . a" 10
            / 10 10 10
        "#;
        let grid = resolve_str(input, &GridConfig::new(30.0, 10.0)).expect("Should resolve");
        assert_eq!(grid.region("a").unwrap(), Rect::new(0.0, 0.0, 30.0, 10.0));
    }

    #[test]
    fn test_vertical_spanning() {
        let input = r#"
            "side chart" 40
            "side chart" 60
            / 30 auto
        "#;
        let grid = resolve_str(input, &GridConfig::new(130.0, 100.0)).expect("Should resolve");
        assert_eq!(grid.region("side").unwrap(), Rect::new(0.0, 0.0, 30.0, 100.0));
        assert_eq!(
            grid.region("chart").unwrap(),
            Rect::new(30.0, 0.0, 100.0, 100.0)
        );
    }

    #[test]
    fn test_row_heights_sum_to_inner_height() {
        let input = r#"
            "title" 60
            "chart" auto
            "x_axis" 40
            / auto
        "#;
        let config = GridConfig::new(600.0, 400.0).with_margin(20.0);
        let grid = resolve_str(input, &config).expect("Should resolve");
        let total: f64 = grid.rows().iter().sum();
        assert!((total - config.inner_height()).abs() < 1e-9);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let input = r#"
            "title title title title" 60
            "y_axis_title y_axis chart legend" auto
            ". . x_axis ." 40
            / 20 40 auto 100
        "#;
        let config = GridConfig::new(600.0, 400.0).with_margin(20.0);
        let first = resolve_str(input, &config).expect("Should resolve");
        let second = resolve_str(input, &config).expect("Should resolve");
        for (name, rect) in first.regions() {
            assert_eq!(second.region(name).unwrap(), rect);
        }
    }
}
