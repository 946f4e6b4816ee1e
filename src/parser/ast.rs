//! Abstract syntax tree for grid template strings

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Valid region name (alphanumeric + underscore, starts with letter/_)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One cell in a template row
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// The `.` placeholder: the cell belongs to no region
    Empty,
    /// Cell occupied by the named region
    Named(Identifier),
}

impl Cell {
    /// Region name if the cell is occupied
    pub fn name(&self) -> Option<&str> {
        match self {
            Cell::Empty => None,
            Cell::Named(id) => Some(id.as_str()),
        }
    }
}

/// Size of one row or column track
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackSize {
    /// Fixed size in pixels
    Px(f64),
    /// Consume an even share of the leftover interior space
    Auto,
}

/// One row declaration: quoted cell names plus a trailing track size
#[derive(Debug, Clone, PartialEq)]
pub struct RowDecl {
    pub cells: Vec<Spanned<Cell>>,
    pub size: Spanned<TrackSize>,
}

impl RowDecl {
    /// Number of columns this row references
    pub fn column_count(&self) -> usize {
        self.cells.len()
    }
}

/// Root AST node - a complete grid template
///
/// Rows appear in source order; the column clause (`/ <sizes>`) supplies one
/// track size per column.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateAst {
    pub rows: Vec<Spanned<RowDecl>>,
    pub columns: Vec<Spanned<TrackSize>>,
}

impl TemplateAst {
    /// Column count declared by the `/` clause
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Iterate unique region names in first-appearance order
    pub fn region_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for row in &self.rows {
            for cell in &row.node.cells {
                if let Some(name) = cell.node.name() {
                    if !names.contains(&name) {
                        names.push(name);
                    }
                }
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Spanned<Cell> {
        Spanned::new(Cell::Named(Identifier::new(name)), 0..0)
    }

    #[test]
    fn test_cell_name() {
        assert_eq!(Cell::Empty.name(), None);
        assert_eq!(Cell::Named(Identifier::new("chart")).name(), Some("chart"));
    }

    #[test]
    fn test_region_names_deduplicated_in_order() {
        let ast = TemplateAst {
            rows: vec![
                Spanned::new(
                    RowDecl {
                        cells: vec![named("title"), named("title")],
                        size: Spanned::new(TrackSize::Px(40.0), 0..0),
                    },
                    0..0,
                ),
                Spanned::new(
                    RowDecl {
                        cells: vec![named("y_axis"), named("chart")],
                        size: Spanned::new(TrackSize::Auto, 0..0),
                    },
                    0..0,
                ),
            ],
            columns: vec![
                Spanned::new(TrackSize::Px(40.0), 0..0),
                Spanned::new(TrackSize::Auto, 0..0),
            ],
        };

        assert_eq!(ast.region_names(), vec!["title", "y_axis", "chart"]);
        assert_eq!(ast.column_count(), 2);
    }

    #[test]
    fn test_empty_cells_contribute_no_names() {
        let ast = TemplateAst {
            rows: vec![Spanned::new(
                RowDecl {
                    cells: vec![Spanned::new(Cell::Empty, 0..0), named("x_axis")],
                    size: Spanned::new(TrackSize::Px(20.0), 0..0),
                },
                0..0,
            )],
            columns: vec![
                Spanned::new(TrackSize::Auto, 0..0),
                Spanned::new(TrackSize::Auto, 0..0),
            ],
        };

        assert_eq!(ast.region_names(), vec!["x_axis"]);
    }
}
