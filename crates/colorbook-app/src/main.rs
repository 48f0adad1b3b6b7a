// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colorbook — coloring-page generator.
//
// Entry point. Parses the command line, loads the config, initialises
// logging, and dispatches to the pipeline or the generation service.

mod services;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use colorbook_bridge::{FileImageSource, MemoryGallery, StaticIdentity};
use colorbook_core::error::Result;
use colorbook_core::human_errors::humanize_error;
use colorbook_core::types::{GenerationRequest, OwnerId};
use colorbook_core::{AppConfig, ColorbookError, LineArtSettings};

use services::data_dir;
use services::response::PipelineResponse;
use services::studio::Studio;

#[derive(Debug, Parser)]
#[command(name = "colorbook", version, about = "Turn pictures into printable coloring pages")]
struct Cli {
    /// Directory holding config.json (defaults to the platform data dir).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a local image into line art.
    Process {
        input: PathBuf,
        /// Where to write the PNG (default: next to the input).
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        settings: SettingsArgs,
        /// Print a JSON response with a data URI instead of writing a file.
        #[arg(long)]
        json: bool,
    },
    /// Run the full generate → process → store flow with a file as the source.
    Generate {
        #[arg(long)]
        prompt: String,
        /// Image file standing in for the generation provider.
        #[arg(long)]
        source: PathBuf,
        #[arg(long)]
        owner: String,
        #[arg(long)]
        style: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        settings: SettingsArgs,
    },
    /// Show the effective configuration.
    Config {
        /// Write the default config file if none exists yet.
        #[arg(long)]
        write_default: bool,
    },
}

/// Per-run overrides of the configured default settings.
#[derive(Debug, Args)]
struct SettingsArgs {
    /// Stroke weight, 1-5 (out-of-range values are clamped).
    #[arg(long, allow_hyphen_values = true)]
    line_thickness: Option<i64>,
    /// Pre-edge-detection contrast bias, 0-100 (clamped).
    #[arg(long, allow_hyphen_values = true)]
    edge_softness: Option<i64>,
    /// Composite onto white and drop transparency.
    #[arg(long)]
    remove_background: bool,
    /// None, Horizontal, Vertical or Both.
    #[arg(long)]
    symmetry: Option<String>,
}

impl SettingsArgs {
    fn merge(&self, defaults: &LineArtSettings) -> LineArtSettings {
        LineArtSettings {
            line_thickness: self.line_thickness.unwrap_or(defaults.line_thickness),
            edge_softness: self.edge_softness.unwrap_or(defaults.edge_softness),
            remove_background: self.remove_background || defaults.remove_background,
            symmetry: self
                .symmetry
                .clone()
                .unwrap_or_else(|| defaults.symmetry.clone()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let dir = cli.data_dir.clone().unwrap_or_else(data_dir::data_dir);

    let config = AppConfig::load(&dir);
    let filter = config
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| "info".into());
    init_logging(&filter);

    let result = config.and_then(|config| run(cli.command, &dir, &config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so JSON on stdout stays machine-readable.
fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn report(err: &ColorbookError) {
    let human = humanize_error(err);
    tracing::error!(error = %err, kind = ?err.kind(), "colorbook failed");
    eprintln!("{}\n{}", human.message, human.suggestion);
}

fn run(command: Command, dir: &Path, config: &AppConfig) -> Result<()> {
    match command {
        Command::Process {
            input,
            output,
            settings,
            json,
        } => {
            let settings = settings.merge(&config.default_settings);
            let source = std::fs::read(&input)?;
            let result = colorbook_lineart::process_settings(&source, &settings);

            if json {
                let response = PipelineResponse::from_result(&result);
                println!("{}", serde_json::to_string(&response)?);
                return result.map(|_| ());
            }

            let image = result?;
            let target = output.unwrap_or_else(|| default_output(config, &input));
            std::fs::write(&target, &image.png)?;
            tracing::info!(path = %target.display(), "Coloring page written");
            println!("{}", target.display());
            Ok(())
        }

        Command::Generate {
            prompt,
            source,
            owner,
            style,
            output,
            settings,
        } => {
            let settings = settings.merge(&config.default_settings);
            let studio = Studio::new(
                Box::new(FileImageSource::new(source)),
                Arc::new(MemoryGallery::new()),
                Box::new(StaticIdentity::signed_in(OwnerId::new(owner))),
            );
            let request = GenerationRequest { prompt, style };
            let page = studio.generate(&request, &settings)?;

            let target = output.unwrap_or_else(|| {
                output_base(config).join(format!("{}.png", page.record.id))
            });
            std::fs::write(&target, &page.image.png)?;
            tracing::info!(path = %target.display(), "Coloring page written");
            println!("{}", serde_json::to_string_pretty(&page.record)?);
            Ok(())
        }

        Command::Config { write_default } => {
            let path = dir.join(colorbook_core::config::CONFIG_FILE_NAME);
            if write_default && !path.exists() {
                AppConfig::default().save(dir)?;
                tracing::info!(path = %path.display(), "Default config written");
            }
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(config)?);
            Ok(())
        }
    }
}

/// Configured output dir, or the current directory.
fn output_base(config: &AppConfig) -> PathBuf {
    config
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
}

/// `<stem>.coloring.png` in the configured output dir, else next to the input.
fn default_output(config: &AppConfig, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".into());
    let name = format!("{stem}.coloring.png");
    match &config.output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}
