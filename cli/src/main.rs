use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use topsort::{toposort_with, DanglingPolicy, EdgeSource, SortError, SortOptions, TieBreak};

#[derive(Parser)]
#[command(name = "topsort")]
#[command(about = "Order vertices of a dependency graph with Kahn's algorithm", long_about = None)]
struct Cli {
    /// JSON document to read; stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Edge sets list dependents instead of dependencies
    #[arg(long, default_value_t = false)]
    flip: bool,

    /// Drain the frontier as a stack
    #[arg(long, default_value_t = false)]
    lifo: bool,

    /// Fail on neighbours that are not listed in "nodes"
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Leave this vertex out of the order (repeatable)
    #[arg(long = "exclude", value_name = "VERTEX")]
    excluded: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Lines)]
    format: Format,

    /// Log adapter and scheduler events to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Lines,
    Json,
}

/// Input document: `{ "nodes": [...], "edges": [...] | {...}, "options": {...} }`.
#[derive(Deserialize)]
struct Document {
    nodes: Vec<String>,
    #[serde(default = "no_edges")]
    edges: Value,
    #[serde(default)]
    options: SortOptions,
}

fn no_edges() -> Value {
    Value::Object(Map::new())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let text = read_input(cli.input.as_ref())?;
    let output = run(&cli, &text)?;
    print!("{output}");

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            fs::read_to_string(p).with_context(|| format!("Failed to read {}", p.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Command-line flags override the document's `options`.
fn options(cli: &Cli, mut opts: SortOptions) -> SortOptions {
    if cli.flip {
        opts.flip_edges = true;
    }
    if cli.lifo {
        opts.tie_break = TieBreak::Lifo;
    }
    if cli.strict {
        opts.dangling = DanglingPolicy::Reject;
    }
    opts
}

fn run(cli: &Cli, text: &str) -> Result<String> {
    let doc: Document = serde_json::from_str(text).context("Failed to parse input document")?;
    let opts = options(cli, doc.options);

    let edges = EdgeSource::from_json(doc.edges).map_err(describe)?;
    let order = toposort_with(
        doc.nodes,
        edges,
        &opts,
        |v| cli.excluded.contains(v),
        |v| tracing::trace!(vertex = %v, "emitted"),
    )
    .map_err(describe)?;

    let mut out = match cli.format {
        Format::Lines => order.join("\n"),
        Format::Json => serde_json::to_string_pretty(&order)?,
    };
    if !out.is_empty() {
        out.push('\n');
    }
    Ok(out)
}

fn describe(err: SortError<String>) -> anyhow::Error {
    match err {
        SortError::CyclicGraph { unresolved } => {
            anyhow::anyhow!("graph contains a cycle among: {}", unresolved.join(", "))
        }
        SortError::UnknownVertex { vertex } => {
            anyhow::anyhow!("edge names unknown vertex {vertex:?}")
        }
        SortError::DuplicateVertex { vertex, position } => {
            anyhow::anyhow!("vertex {vertex:?} listed again at position {position}")
        }
        other => anyhow::Error::new(other),
    }
}
