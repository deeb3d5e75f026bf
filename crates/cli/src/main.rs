use anyhow::Result;
use clap::{Parser, Subcommand};
use console::{Term, style};
use gradlestub_core::{Renderer, SyncOptions, Version, sync};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// gradlestub - Gradle build-stub generator for game versions
#[derive(Parser)]
#[command(name = "gradlestub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate build.gradle and settings.gradle into an output directory
    Sync {
        /// Path to the version JSON descriptor
        version_json: PathBuf,

        /// Output directory for the generated files
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Show what would change without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the rendered build.gradle to stdout
    Render {
        /// Path to the version JSON descriptor
        version_json: PathBuf,

        /// Print settings.gradle instead of build.gradle
        #[arg(long)]
        settings: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();

    match cli.command {
        Commands::Sync {
            version_json,
            output,
            dry_run,
        } => cmd_sync(&version_json, &output, dry_run),
        Commands::Render {
            version_json,
            settings,
        } => cmd_render(&version_json, settings),
    }
}

fn load_version(term: &Term, path: &Path) -> Result<Version> {
    if !path.exists() {
        term.write_line(&format!(
            "{} Version descriptor not found: {}",
            style("error:").red().bold(),
            path.display()
        ))?;
        std::process::exit(1);
    }

    match Version::from_file(path) {
        Ok(v) => Ok(v),
        Err(e) => {
            term.write_line(&format!(
                "{} Failed to load version descriptor: {}",
                style("error:").red().bold(),
                e
            ))?;
            std::process::exit(1);
        }
    }
}

fn cmd_sync(version_json: &Path, output: &Path, dry_run: bool) -> Result<()> {
    let term = Term::stderr();

    let version = load_version(&term, version_json)?;

    term.write_line(&format!(
        "{} Syncing project files for {} into {}",
        style("::").cyan().bold(),
        version.id,
        output.display()
    ))?;

    let renderer = Renderer::default();
    let options = SyncOptions { dry_run };
    let changed = sync(&renderer, &version, output, &options)?;
    info!(version = %version.id, changed = changed.len(), dry_run, "sync complete");

    if changed.is_empty() {
        term.write_line(&format!("{} No changes needed", style("::").cyan().bold()))?;
        return Ok(());
    }

    for path in &changed {
        term.write_line(&format!(
            "  {} {}",
            style(if dry_run { "~" } else { "+" }).green(),
            path.display()
        ))?;
    }

    term.write_line(&format!(
        "{} {} {} file(s)",
        style("::").green().bold(),
        if dry_run { "Would write" } else { "Wrote" },
        changed.len()
    ))?;

    Ok(())
}

fn cmd_render(version_json: &Path, settings: bool) -> Result<()> {
    let term = Term::stderr();

    let version = load_version(&term, version_json)?;

    let rendered = Renderer::default().render(&version)?;
    let content = if settings {
        rendered.settings_gradle
    } else {
        rendered.build_gradle
    };

    print!("{}", String::from_utf8_lossy(&content));
    Ok(())
}
