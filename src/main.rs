//! CLI entry point for arbor

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use arbor::{BuildOptions, OutputConfig, TreeBuilder, TreeFormatter, print_json};
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

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
#[command(name = "arbor")]
#[command(about = "List a directory as a tree, coloured by entry type")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show hidden entries (names starting with '.')
    #[arg(short, long)]
    all: bool,

    /// Show the size of each file in bytes
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Follow symbolic links to directories
    #[arg(short = 'l', long = "follow")]
    follow: bool,

    /// Classify links with a missing target as dead links
    #[arg(long = "dead-links")]
    dead_links: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Number of parallel workers for building subtrees
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Initialize stderr logging. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = BuildOptions {
        show_hidden: args.all,
        show_size: args.size,
        follow_symlinks: args.follow,
        detect_dead_links: args.dead_links,
        parallel_workers: args.jobs,
    };

    let result = match TreeBuilder::new(options).build(&args.path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("arbor: {}", e);
            process::exit(1);
        }
    };

    let written = if args.json {
        print_json(&result)
    } else {
        let formatter = TreeFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
        });
        formatter.print(&result)
    };

    if let Err(e) = written {
        eprintln!("arbor: error writing output: {}", e);
        process::exit(1);
    }
}
