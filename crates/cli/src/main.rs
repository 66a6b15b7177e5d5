mod document;

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use columnar_layout::{ColumnarLayout, ColumnarOptions, LayoutEngine, PlacementHints, Point, Vec2};
use document::{load_options, Document};
use petgraph::graph::NodeIndex;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Ron,
    Table,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Graph document (RON) to lay out
    input: PathBuf,

    /// Layout options (RON), replacing the ones in the document
    #[arg(long)]
    options: Option<PathBuf>,

    /// Canvas size used when no bounding box is configured
    #[arg(long, default_value = "800x600", value_parser = parse_viewport)]
    viewport: Vec2,

    /// Force the number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Force the number of grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Force the ring radius
    #[arg(long)]
    radius: Option<f32>,

    /// Walk the ring counterclockwise
    #[arg(long)]
    counterclockwise: bool,

    /// Keep cells and ring inside the bounding box even if nodes overlap
    #[arg(long)]
    no_avoid_overlap: bool,

    #[arg(long, value_enum, default_value_t = Format::Ron)]
    format: Format,
}

impl Args {
    /// Command line flags win over file options
    fn apply(&self, options: &mut ColumnarOptions) {
        if self.rows.is_some() {
            options.rows = self.rows;
        }
        if self.columns.is_some() {
            options.columns = self.columns;
        }
        if self.radius.is_some() {
            options.radius = self.radius;
        }
        if self.counterclockwise {
            options.counterclockwise = true;
        }
        if self.no_avoid_overlap {
            options.avoid_overlap = false;
        }
    }
}

fn parse_viewport(value: &str) -> Result<Vec2, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value:?}"))?;
    let parse = |side: &str| {
        side.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid size {side:?}: {e}"))
    };
    Ok(Vec2::new(parse(width)?, parse(height)?))
}

#[derive(Debug, Serialize)]
struct Placed<'a> {
    id: &'a str,
    position: Point,
}

/// Lay out a document, returning placed nodes in document order
fn layout(
    document: &Document,
    viewport: Vec2,
    options: ColumnarOptions,
) -> Result<Vec<(String, Point)>> {
    let graph = document.to_graph()?;
    debug!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let hints = (|node: NodeIndex| graph[node].placement)
        .with_locked(|node: NodeIndex| graph[node].locked);
    let sizes = |node: NodeIndex| Vec2::new(graph[node].width, graph[node].height);

    let engine = ColumnarLayout::new(viewport, hints).with_options(options);
    let positions = engine.layout(&graph, &sizes)?;
    info!(
        "Placed {} of {} nodes in {:?}",
        positions.len(),
        graph.node_count(),
        engine.bounding_box()
    );

    Ok(graph
        .node_indices()
        .filter_map(|node| Some((graph[node].id.clone(), *positions.get(&node)?)))
        .collect())
}

fn render(placed: &[(String, Point)], format: Format) -> Result<String> {
    match format {
        Format::Ron => {
            let placed: Vec<_> = placed
                .iter()
                .map(|(id, position)| Placed {
                    id,
                    position: *position,
                })
                .collect();
            let mut output =
                ron::ser::to_string_pretty(&placed, ron::ser::PrettyConfig::default())?;
            output.push('\n');
            Ok(output)
        }
        Format::Table => {
            let mut output = String::new();
            for (id, position) in placed {
                writeln!(output, "{id:<24} {:>10.2} {:>10.2}", position.x, position.y)?;
            }
            Ok(output)
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let document = Document::load(&args.input)?;
    let mut options = match &args.options {
        Some(path) => load_options(path)?,
        None => document.options.clone().unwrap_or_default(),
    };
    args.apply(&mut options);
    debug!("Layout options: {options:?}");

    let placed = layout(&document, args.viewport, options)?;
    render(&placed, args.format)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    print!("{}", run(&args)?);
    Ok(())
}
