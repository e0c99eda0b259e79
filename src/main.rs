//! CLI entry point for linetree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use linetree::{
    JsonReporter, OutputConfig, PatternSyntax, Result, TreeReporter, WalkerConfig, count_project,
    resolve_root,
};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
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
#[command(name = "linetree")]
#[command(about = "Count the lines of every file in a project and print them as a tree")]
#[command(version)]
struct Args {
    /// Project root directory
    path: Option<PathBuf>,

    /// Extra names to ignore, appended to the defaults (., .., .git)
    #[arg(value_name = "IGNORE")]
    extra_ignores: Vec<String>,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Do not read .gitignore from the root directory
    #[arg(long = "no-gitignore")]
    no_gitignore: bool,

    /// Treat patterns as shell globs (every `*` and `?` is a wildcard,
    /// everything else literal) instead of the default translation
    #[arg(long = "glob")]
    glob: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            extra_ignores: self
                .extra_ignores
                .iter()
                .chain(&self.ignore)
                .cloned()
                .collect(),
            read_ignore_file: !self.no_gitignore,
            pattern_syntax: if self.glob {
                PatternSyntax::Glob
            } else {
                PatternSyntax::Legacy
            },
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("linetree: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let root = resolve_root(args.path.as_deref(), &cwd)?;
    tracing::info!(root = %root.display(), "project root directory");

    let config = args.walker_config();
    if args.json {
        count_project(&root, &config, &mut JsonReporter::stdout())?;
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
        };
        count_project(&root, &config, &mut TreeReporter::stdout(&output_config))?;
    }
    Ok(())
}
