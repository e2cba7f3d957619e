//! Argument parsing and command dispatch.

mod commands;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use palettegen_render::OutputDefaults;

pub use commands::{generate, kinds, plan, PlannedOutput};

/// Generate color palette files and UIColor categories
#[derive(Parser, Debug)]
#[command(name = "palettegen")]
#[command(version)]
#[command(about = "Generate color palette files and UIColor categories")]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render and write every output the definition requests
    Generate {
        /// Palette definition (.yaml, .yml or .json)
        file: PathBuf,

        #[command(flatten)]
        dirs: DirectoryArgs,

        /// Create missing output directories
        #[arg(long)]
        create_dirs: bool,

        /// Print rendered text instead of writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// List output kinds and paths without rendering
    Plan {
        /// Palette definition (.yaml, .yml or .json)
        file: PathBuf,

        #[command(flatten)]
        dirs: DirectoryArgs,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the supported output kinds
    Kinds,
}

/// Directory overrides shared by `generate` and `plan`.
#[derive(Args, Debug, Clone, Default)]
pub struct DirectoryArgs {
    /// Home directory used for the palette file location (default: $HOME)
    #[arg(long, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Directory for source-code outputs (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

impl DirectoryArgs {
    /// Resolves the output defaults once for the whole run.
    ///
    /// Home falls back to `$HOME`, then to the current directory.
    pub fn resolve(&self) -> anyhow::Result<OutputDefaults> {
        let cwd = || std::env::current_dir().context("failed to read the current directory");

        let home = match &self.home {
            Some(home) => home.clone(),
            None => match std::env::var_os("HOME").filter(|h| !h.is_empty()) {
                Some(home) => PathBuf::from(home),
                None => cwd()?,
            },
        };
        let working_dir = match &self.out_dir {
            Some(dir) => dir.clone(),
            None => cwd()?,
        };

        tracing::debug!(
            home = %home.display(),
            working_dir = %working_dir.display(),
            "resolved output directories"
        );
        Ok(OutputDefaults::new(home, working_dir))
    }
}

/// Runs the parsed command, writing user-facing output to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    match &cli.command {
        Command::Generate {
            file,
            dirs,
            create_dirs,
            dry_run,
        } => generate(file, &dirs.resolve()?, *create_dirs, *dry_run, out),
        Command::Plan { file, dirs, json } => plan(file, &dirs.resolve()?, *json, out),
        Command::Kinds => kinds(out),
    }
}

fn load(file: &Path) -> anyhow::Result<palettegen_render::Palette> {
    palettegen_render::definition::load_file(file)
        .with_context(|| format!("failed to load palette definition {}", file.display()))
}
