//! grid-composer CLI
//!
//! Usage:
//!   grid-composer [OPTIONS] [FILE]
//!
//! Reads a grid template from FILE (or stdin), resolves it against a
//! container, and prints the named region geometry as a table or JSON.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use grid_composer::{template, ComposeError, Grid, GridConfig, Margin, Preset};

#[derive(Parser)]
#[command(name = "grid-composer")]
#[command(about = "Resolve grid template strings into named chart regions")]
struct Cli {
    /// Template file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Container width in pixels
    #[arg(short = 'W', long)]
    width: Option<f64>,

    /// Container height in pixels
    #[arg(short = 'H', long)]
    height: Option<f64>,

    /// Margin shorthand: one, two, or four comma-separated values
    #[arg(short, long)]
    margin: Option<String>,

    /// Preset file with container defaults and named templates (TOML format)
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Use a named template from the preset instead of FILE/stdin
    #[arg(short, long)]
    template: Option<String>,

    /// Print regions as JSON instead of a table
    #[arg(short, long)]
    json: bool,

    /// Show template grammar reference
    #[arg(short, long)]
    grammar: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.grammar {
        print_grammar();
        return;
    }

    // Load preset (built-in defaults when no file is given)
    let preset = match &cli.preset {
        Some(path) => match Preset::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading preset '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Preset::default(),
    };

    // If nothing selects a template and stdin is a terminal, show intro help
    if cli.template.is_none() && cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read template source: named preset template, file, or stdin
    let source = match (&cli.template, &cli.input) {
        (Some(name), _) => match preset.template(name) {
            Some(s) => s.to_string(),
            None => {
                eprintln!(
                    "Error: preset defines no template '{}' (available: {})",
                    name,
                    preset.template_names().join(", ")
                );
                std::process::exit(1);
            }
        },
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        (None, None) => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    // Container: preset defaults, then explicit flags on top
    let mut config = preset
        .container
        .unwrap_or_else(|| GridConfig::new(600.0, 400.0));
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(shorthand) = &cli.margin {
        match parse_margin(shorthand) {
            Some(margin) => config.margin = margin,
            None => {
                eprintln!(
                    "Error: invalid margin '{}' (expected 1, 2, or 4 comma-separated numbers)",
                    shorthand
                );
                std::process::exit(1);
            }
        }
    }

    let grid = match template(&source, &config) {
        Ok(grid) => grid,
        Err(ComposeError::Parse(errors)) => {
            for error in &errors {
                eprint!("{}", error.format(&source, "template"));
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let ComposeError::Grid(grid_err) = &e {
                if let Some(suggestions) = grid_err.suggestions() {
                    if !suggestions.is_empty() {
                        eprintln!("Did you mean: {}?", suggestions.join(", "));
                    }
                }
            }
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", render_json(&grid, &config));
    } else {
        print!("{}", render_table(&grid));
    }
}

/// Parse a comma-separated margin shorthand like `20` or `10,20,10,20`
fn parse_margin(shorthand: &str) -> Option<Margin> {
    let values: Option<Vec<f64>> = shorthand
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect();
    Margin::from_shorthand(&values?)
}

/// Format the resolved regions as an aligned table
fn render_table(grid: &Grid) -> String {
    let name_width = grid
        .region_names()
        .iter()
        .map(|n| n.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (name, rect) in grid.regions() {
        out.push_str(&format!(
            "{:<width$}  x={:<8.1} y={:<8.1} w={:<8.1} h={:.1}\n",
            name,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            width = name_width
        ));
    }
    out
}

/// Serialize the resolved grid as a JSON document
fn render_json(grid: &Grid, config: &GridConfig) -> String {
    let mut regions = serde_json::Map::new();
    for (name, rect) in grid.regions() {
        regions.insert(
            name.to_string(),
            serde_json::json!({
                "x": rect.x,
                "y": rect.y,
                "width": rect.width,
                "height": rect.height,
            }),
        );
    }

    let doc = serde_json::json!({
        "container": { "width": config.width, "height": config.height },
        "rows": grid.rows(),
        "columns": grid.columns(),
        "regions": regions,
    });

    serde_json::to_string_pretty(&doc).expect("grid geometry serializes")
}

fn print_intro() {
    println!(
        r#"grid-composer - resolve grid template strings into named chart regions

USAGE:
    grid-composer [OPTIONS] [FILE]
    echo '<template>' | grid-composer

OPTIONS:
    -W, --width     Container width in pixels (default 600)
    -H, --height    Container height in pixels (default 400)
    -m, --margin    Margin shorthand: 1, 2, or 4 comma-separated values
    -p, --preset    Preset file with container defaults and named templates
    -t, --template  Use a named template from the preset
    -j, --json      Print regions as JSON
    -g, --grammar   Show template grammar reference
    -h, --help      Print help

QUICK START:
    echo '"y_axis chart" auto  / 40 auto' | grid-composer -W 640 -H 480

This resolves a one-row grid with a 40px axis column and a chart region
taking the remaining width. Run --grammar for the template syntax."#
    );
}

fn print_grammar() {
    println!(
        r#"GRID TEMPLATE GRAMMAR
=====================

ROWS
----
Each row is a quoted sequence of cell names followed by a track size:

    "title title" 40
    "y_axis chart" auto

Cell names are identifiers (letters, digits, underscore). The literal `.`
marks an unoccupied cell that belongs to no region.

COLUMNS
-------
The final line, prefixed by `/`, declares one column size per column:

    / 40 auto

TRACK SIZES
-----------
<number>   Fixed size in pixels (non-negative)
auto       An even share of the leftover interior space on that axis

SPANNING
--------
Repeating a name across adjacent cells merges them into one region
covering their bounding rectangle:

    "chart chart legend" auto

CONTAINER
---------
Regions are resolved against a container width, height, and margin. The
margin uses CSS shorthand: one value (all sides), two (vertical,
horizontal), or four (top, right, bottom, left).

EXAMPLE
-------
    "title title title title" 60
    "y_axis_title y_axis chart legend" auto
    ". . x_axis ." 40
    / 20 40 auto 100

A titled chart with a y-axis gutter, bottom x-axis, and a 100px legend."#
    );
}
