use std::io;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::generate;
use scour::commands::clean::CleanOptions;
use scour::commands::execute_clean;
use scour::error::AppError;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "scour", &mut io::stdout());
        return Ok(());
    }

    if cli.paths.is_empty() {
        let mut cmd = Cli::command();
        cmd.print_help()?;
        return Ok(());
    }

    execute_clean(CleanOptions {
        paths: cli.paths,
        dry_run: cli.dry_run,
        no_errors: cli.no_errors,
    })
}

#[derive(Parser)]
#[command(
    name = "scour",
    version,
    about = "Remove trash files like .DS_Store and Thumbs.db from your disks.",
    after_help = PATTERN_HELP
)]
struct Cli {
    /// Directories or files to sweep for trash entries.
    #[arg(value_name = "PATH", num_args = 0..)]
    paths: Vec<PathBuf>,

    /// Show what would be removed, but do not delete anything.
    #[arg(short = 'd', long = "dry-run", action = ArgAction::SetTrue)]
    dry_run: bool,

    /// Do not print per-entry delete errors at the end.
    #[arg(short = 'n', long = "no-error", action = ArgAction::SetTrue)]
    no_errors: bool,

    /// Generate shell completions and exit.
    #[arg(long = "completions", value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,
}

const PATTERN_HELP: &str = "Removed entries match one of:
  .DS_Store  .cache  .gradle  .mypy_cache  .sass-cache  .textpadtmp
  Thumbs.db  __pycache__  _build  build  slprj  zig-cache  zig-out
  *.slxc  *.bak  ~*

Version-control and sandbox state directories (.git, .var, Steam, .steam,
containers, .dropbox-dist) are never entered or deleted.";
