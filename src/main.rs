//! CLI entry point for cquery

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use cquery::{CONTAINER, MatchPrinter, OutputConfig, Query, TreeWalker, WalkerConfig, logging};
use tracing::debug;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cquery")]
#[command(about = "Find directories by their Open Metadata markers")]
#[command(after_help = "Query forms:\n  \
    .Name   directories of class Name   (.meta/Name.class)\n  \
    #Name   directories with id Name    (.meta/Name.id)\n  \
    Name    directories with marker Name (.meta/Name)")]
#[command(version)]
struct Args {
    /// Query to search for
    #[arg(required_unless_present = "query_opt")]
    query: Option<String>,

    /// Query to search for (takes precedence over the positional argument)
    #[arg(short = 'q', long = "query", value_name = "QUERY")]
    query_opt: Option<String>,

    /// Directory to search from (defaults to the current directory)
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    root: Option<PathBuf>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Skip directories matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Visit directories in name order instead of filesystem order
    #[arg(long = "sort")]
    sort: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// The named option wins unless it is empty.
    fn effective_query(&self) -> String {
        self.query_opt
            .clone()
            .filter(|q| !q.is_empty())
            .or_else(|| self.query.clone())
            .unwrap_or_default()
    }
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let query = Query::parse(&args.effective_query());
    let marker = query.marker_path(CONTAINER);
    debug!(query = %query, marker = %marker, "compiled query");

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let root = match args.root {
        Some(ref path) if path.is_absolute() => path.clone(),
        Some(ref path) => cwd.join(path),
        None => cwd,
    };

    let walker = TreeWalker::new(WalkerConfig {
        max_depth: args.level,
        ignore_patterns: args.ignore.clone(),
        sort_entries: args.sort,
    });

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
    };
    let mut printer = MatchPrinter::stdout(&output_config);

    let report = match walker.walk(&root, &marker, &mut printer) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("cquery: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = printer.finish(&report) {
        eprintln!("cquery: error writing output: {}", e);
        process::exit(1);
    }
}
