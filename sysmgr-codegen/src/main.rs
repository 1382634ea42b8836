//! Systems-management binding generator
//!
//! Regenerates entity, enumeration, operation and client sources from a
//! JSON service description.
//!
//! Usage:
//!   sysmgr-codegen generate --config sysmgr-ssm/sysmgr-codegen.toml
//!   sysmgr-codegen check --model schema/ssm.json --out src
//!
//! `check` exits non-zero when the checked-in sources differ from what the
//! description produces.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use sysmgr_codegen::config::CONFIG_FILE;
use sysmgr_codegen::{
    CodegenConfig, GenerateOptions, ServiceDescription, check_files, generate, resolve, write_files,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "sysmgr-codegen")]
#[command(about = "Generates systems-management bindings from a service description")]
struct Args {
    #[command(subcommand)]
    command: Action,

    /// Configuration file (defaults to ./sysmgr-codegen.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Service description, overriding the configuration
    #[arg(short, long, global = true)]
    model: Option<PathBuf>,

    /// Output directory, overriding the configuration
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,

    /// Skip rustfmt
    #[arg(long, global = true)]
    no_format: bool,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Write generated sources
    Generate,
    /// Report drift between generated and checked-in sources
    Check,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let config = load_config(&args)?;
    let source_name = config
        .model
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.model.display().to_string());

    let description = ServiceDescription::load(&config.model)
        .with_context(|| format!("loading {}", config.model.display()))?;
    let service = resolve(&description)?;
    let options = GenerateOptions::new(source_name).with_format(config.format);
    let files = generate(&service, &options)?;

    match args.command {
        Action::Generate => {
            write_files(&config.output, &files)?;
        }
        Action::Check => {
            let drift = check_files(&config.output, &files)?;
            if !drift.is_empty() {
                for entry in &drift {
                    warn!("{entry}");
                }
                bail!(
                    "{} generated file(s) out of date under {}; run `sysmgr-codegen generate`",
                    drift.len(),
                    config.output.display()
                );
            }
            info!(files = files.len(), "generated sources are up to date");
        }
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<CodegenConfig> {
    let mut config = match &args.config {
        Some(path) => CodegenConfig::load(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None if Path::new(CONFIG_FILE).exists() => CodegenConfig::load(Path::new(CONFIG_FILE))?,
        None => CodegenConfig::default(),
    };
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if let Some(out) = &args.out {
        config.output = out.clone();
    }
    if args.no_format {
        config.format = false;
    }
    Ok(config)
}
