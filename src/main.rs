//! CLI entry point for treeignore

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use treeignore::{
    DEFAULT_IGNORE_FILE, IgnoreRules, OutputConfig, RenderConfig, TreeFormatter, TreeRenderer,
    resolve_root,
};

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
            // https://no-color.org/
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
#[command(name = "treeignore")]
#[command(about = "Print a directory tree, skipping paths listed in .treeignore")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Ignore file, relative to the directory or absolute
    #[arg(long = "ignore-file", value_name = "FILE", default_value = DEFAULT_IGNORE_FILE)]
    ignore_file: PathBuf,

    /// Do not descend into symlinked directories
    #[arg(long = "no-follow")]
    no_follow: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

fn run(args: &Args) -> treeignore::Result<()> {
    // Check the root before reading the ignore file inside it.
    let root = resolve_root(&args.path)?;
    let rules = IgnoreRules::load(&root, &args.ignore_file)?;

    let render_config = RenderConfig {
        follow_symlinks: !args.no_follow,
    };
    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
    };

    let mut formatter = TreeFormatter::stdout(&output_config);
    TreeRenderer::new(root, &rules)
        .with_config(render_config)
        .render_root(&mut formatter)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("treeignore: {}", e);
        process::exit(1);
    }
}
