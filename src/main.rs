//! CLI entry point for twig

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::error::{ContextKind, ErrorKind};
use clap::{Parser, ValueEnum};
use tracing::{Level, debug};
use twig::{OutputConfig, StreamingFormatter, TreeWalker, WalkerConfig};

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
#[command(name = "twig")]
#[command(about = "Display directory contents in a tree-like format")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show hidden files (those starting with '.')
    #[arg(short, long)]
    all: bool,

    /// List directories only
    #[arg(short = 'd', long = "dir-only")]
    dir_only: bool,

    /// Print the full path prefix for each file
    #[arg(short = 'f', long = "full-path")]
    full_path: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log every directory visited to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            show_hidden: self.all,
            dirs_only: self.dir_only,
            full_path: self.full_path,
            max_depth: self.level,
        }
    }
}

/// Help and version land here too and are not failures.
fn exit_on_parse_error(e: &clap::Error) -> ! {
    if e.kind() == ErrorKind::UnknownArgument {
        let option = e
            .get(ContextKind::InvalidArg)
            .map(|arg| arg.to_string())
            .unwrap_or_default();
        eprintln!("twig: unrecognized option '{}'. Use -h for help.", option);
        process::exit(1);
    }
    let code = if e.use_stderr() { 1 } else { 0 };
    let _ = e.print();
    process::exit(code);
}

/// Diagnostics go to stderr so stdout carries only the tree.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .init();
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| exit_on_parse_error(&e));

    init_logging(args.verbose);

    let walker = TreeWalker::new(args.walker_config());
    let mut formatter = StreamingFormatter::stdout(OutputConfig {
        use_color: should_use_color(args.color),
    });

    match walker.walk(&args.path, &mut formatter) {
        Ok(summary) => {
            debug!(
                dirs = summary.dirs,
                files = summary.files,
                unreadable = summary.unreadable_dirs,
                "walk finished"
            );
        }
        Err(e) if e.is_broken_pipe() => {}
        Err(e) => {
            eprintln!("twig: {}", e);
            process::exit(1);
        }
    }
}
