//! Rayna CLI
//!
//! Render, export and exercise the Rayna design-system demo from the terminal.

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use rayna_app::routes::nav_routes;
use rayna_app::{LinkMode, RaynaApp, ROUTES};
use rayna_core::FileInfo;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod simulate;

use config::{RaynaConfig, CONFIG_FILE};
use simulate::Widget;

#[derive(Parser)]
#[command(name = "rayna")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rayna design-system demo CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding rayna.toml
    #[arg(short = 'C', long, global = true, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the demo routes
    Routes {
        /// Print the route table as JSON
        #[arg(long)]
        json: bool,

        /// Include routes hidden from the navigation bar
        #[arg(short, long)]
        all: bool,
    },

    /// Render one route to HTML
    Render {
        /// Route path, e.g. /avatars
        path: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Indent the markup
        #[arg(long)]
        pretty: bool,
    },

    /// Export every route as a static site
    Export {
        /// Output directory (defaults to export.dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Indent the markup
        #[arg(long)]
        pretty: bool,
    },

    /// Drive a timed component on the wall clock
    Simulate {
        #[command(subcommand)]
        command: SimulateCommands,
    },

    /// Write a default rayna.toml in the project directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Subcommand)]
enum SimulateCommands {
    /// Upload a synthetic file
    Upload {
        #[arg(short, long, value_enum, default_value = "small")]
        widget: Widget,

        /// File name shown in the log
        #[arg(short, long, default_value = "document.pdf")]
        name: String,

        /// File size in bytes
        #[arg(short, long, default_value = "1048576")]
        size: u64,

        /// MIME type
        #[arg(short, long, default_value = "application/pdf")]
        mime: String,
    },

    /// Show a toast and wait for it to leave
    Toast {
        /// Auto-dismiss delay (defaults to toast.duration_ms)
        #[arg(short, long)]
        duration: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let project = cli.project;

    match cli.command {
        Commands::Routes { json, all } => cmd_routes(json, all),

        Commands::Render { path, out, pretty } => cmd_render(&project, &path, out.as_deref(), pretty),

        Commands::Export { dir, pretty } => cmd_export(&project, dir, pretty),

        Commands::Simulate { command } => {
            let config = RaynaConfig::load_from_dir(&project)?;
            match command {
                SimulateCommands::Upload {
                    widget,
                    name,
                    size,
                    mime,
                } => {
                    let status = simulate::upload(widget, FileInfo::new(name, size, mime), &config.settings())?;
                    println!("{status}");
                    Ok(())
                }
                SimulateCommands::Toast { duration } => {
                    let lifetime = simulate::toast(duration.unwrap_or(config.toast.duration_ms))?;
                    println!("{}ms", lifetime.as_millis());
                    Ok(())
                }
            }
        }

        Commands::Init { force } => cmd_init(&project, force),

        Commands::Config => cmd_config(&project),
    }
}

fn cmd_routes(json: bool, all: bool) -> Result<()> {
    let routes: Vec<_> = if all {
        ROUTES.iter().collect()
    } else {
        nav_routes().collect()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    for route in routes {
        println!("{:<24} {}", route.path, route.title);
    }
    Ok(())
}

fn cmd_render(project: &Path, path: &str, out: Option<&Path>, pretty: bool) -> Result<()> {
    let config = RaynaConfig::load_from_dir(project)?;
    let app = RaynaApp::new(config.settings());

    let html = app.render_html(path, pretty, LinkMode::Path)?;

    match out {
        Some(file) => {
            fs::write(file, &html).with_context(|| format!("Failed to write {}", file.display()))?;
            info!("Rendered {} to {}", path, file.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn cmd_export(project: &Path, dir: Option<PathBuf>, pretty: bool) -> Result<()> {
    let config = RaynaConfig::load_from_dir(project)?;
    let dir = dir.unwrap_or_else(|| project.join(&config.export.dir));
    let pretty = pretty || config.export.pretty;

    info!("Exporting {} to {}", config.project.name, dir.display());

    let app = RaynaApp::new(config.settings());
    let written = app.export(&dir, pretty)?;

    info!("Wrote {} files", written.len());
    Ok(())
}

fn cmd_init(project: &Path, force: bool) -> Result<()> {
    let path = project.join(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let mut config = RaynaConfig::default();
    let dir = fs::canonicalize(project).with_context(|| format!("No such directory {}", project.display()))?;
    if let Some(name) = dir.file_name().and_then(|n| n.to_str()) {
        config.project.name = name.to_string();
    } else {
        warn!("Could not derive a project name, keeping '{}'", config.project.name);
    }

    fs::write(&path, config.to_toml()?).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Created {}", path.display());
    Ok(())
}

fn cmd_config(project: &Path) -> Result<()> {
    let config = RaynaConfig::load_from_dir(project)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
