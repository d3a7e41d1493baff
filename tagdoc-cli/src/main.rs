//! Tag document CLI
//!
//! Parses a tag document from a file or stdin and prints statistics, JSON or
//! an outline of the tree.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use owo_colors::OwoColorize;
use tagdoc_dom::format_tree;
use tagdoc_export::{ExportOptions, calculate_stats, to_json_string};
use tagdoc_parser::{ParseError, parse, trim};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Inspect tag documents
#[derive(Parser, Debug)]
#[command(name = "tagdoc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Count tags and attributes
    tagdoc -i page.tag stat

    # Export as JSON with two-space indentation
    cat page.tag | tagdoc json --indent 2

    # Show the tree with source spans and parser logs
    tagdoc -v -i page.tag tree --spans
"#)]
struct Cli {
    /// Read the document from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print tag, text and attribute counts
    Stat {
        /// Emit the counts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the tree as JSON
    Json {
        /// Spaces per nesting level
        #[arg(long, default_value_t = 4)]
        indent: usize,
    },
    /// Print an indented outline of the tree
    Tree {
        /// Append each tag's span and source text
        #[arg(long)]
        spans: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = read_input(cli.input.as_deref())?;
    let result = parse(&source).map_err(|err| anyhow::anyhow!(report_parse_error(&source, &err)))?;
    debug!(tags = result.root.count(), "document parsed");

    match &cli.command {
        Command::Stat { json: false } => print!("{}", calculate_stats(&result.root).render()),
        Command::Stat { json: true } => {
            let stats = calculate_stats(&result.root);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Command::Json { indent } => {
            let options = ExportOptions { indent: *indent };
            println!("{}", to_json_string(&result.root, &options)?);
        }
        Command::Tree { spans } => {
            let document = spans.then_some(result.document.as_slice());
            print!("{}", format_tree(&result.root, document));
        }
    }

    Ok(())
}

/// Read the whole document from `path`, or from stdin when no path is given
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            let _ = io::stdin()
                .read_to_string(&mut source)
                .context("failed to read document from stdin")?;
            Ok(source)
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(0))),
        n => EnvFilter::new(level_for(n)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Describe a parse failure with the slice of the document it covers
fn report_parse_error(source: &str, err: &ParseError) -> String {
    format!(
        "{} at [{},{}]: {}\n  --> {:?}",
        err.kind,
        err.start,
        err.end,
        err.reason,
        offending_slice(source, err)
    )
}

/// Error offsets index the trimmed document, so trim before slicing
fn offending_slice(source: &str, err: &ParseError) -> String {
    let runes: Vec<char> = source.chars().collect();
    let Ok(document) = trim(&runes) else {
        return String::new();
    };
    let end = err.end.min(document.len());
    let start = err.start.min(end);
    document[start..end].iter().collect()
}
