use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workdirs::{AppError, PathState, PathsFormat, WorkspaceLayout};

#[derive(Parser)]
#[command(name = "workdirs")]
#[command(version)]
#[command(about = "Provision the csv, dataframe, notebook, and heatmap directories of a workspace", long_about = None)]
struct Cli {
    /// Workspace root (default: two levels above the installed binary)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create every workspace directory that is missing
    #[clap(visible_alias = "i")]
    Init {
        /// Print the per-directory report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report workspace directories without creating anything
    #[clap(visible_alias = "c")]
    Check {
        /// Print the per-directory report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the workspace directory paths
    #[clap(visible_alias = "p")]
    Paths {
        /// Output format: text, json, or toml
        #[arg(short, long, default_value = "text")]
        format: PathsFormat,
        /// Print only this directory (key, directory name, or display name)
        #[arg(short, long, conflicts_with = "format")]
        slot: Option<String>,
    },
    /// Print the resolved workspace root
    Root,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "workdirs=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32, AppError> {
    let layout = resolve_layout(cli.root)?;

    match cli.command {
        Commands::Init { json } => {
            let outcome = workdirs::init_at(layout.root())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(0);
            }
            for report in &outcome.slots {
                let status = if report.created { "created" } else { "present" };
                println!("{:<8} {}", status, report.path.display());
            }
            println!("✅ Workspace ready at {}", layout.root().display());
            Ok(0)
        }
        Commands::Check { json } => {
            let outcome = workdirs::check_at(layout.root());
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(outcome.exit_code);
            }
            for status in &outcome.slots {
                let label = match status.state {
                    PathState::Directory => "ok",
                    PathState::Missing => "missing",
                    PathState::NotADirectory => "not a directory",
                    PathState::Unreadable => "unreadable",
                };
                println!("{:<16} {}", label, status.path.display());
            }
            Ok(outcome.exit_code)
        }
        Commands::Paths { slot: Some(name), .. } => {
            println!("{}", workdirs::slot_path(&layout, &name)?.display());
            Ok(0)
        }
        Commands::Paths { format, slot: None } => {
            print!("{}", workdirs::render_paths(&layout, format)?);
            Ok(0)
        }
        Commands::Root => {
            println!("{}", layout.root().display());
            Ok(0)
        }
    }
}

fn resolve_layout(root: Option<PathBuf>) -> Result<WorkspaceLayout, AppError> {
    match root {
        Some(root) => Ok(workdirs::layout_at(std::path::absolute(root)?)),
        None => workdirs::layout(),
    }
}
