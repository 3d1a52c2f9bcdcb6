//! CLI Adapter.
//!
//! Each subcommand is a snap hook entry point.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapters::SnapctlEnvironment;
use crate::app::api::{self, ComponentUpdate, UpdateOptions, UpdateOutcome};
use crate::app::logging;
use crate::domain::{AppError, DEFAULT_SNAP_NAME, MergePolicy, SnapPaths};

#[derive(Parser)]
#[command(name = "ondemand-hooks")]
#[command(version)]
#[command(about = "Lifecycle hooks for the Open OnDemand snap", long_about = None)]
struct Cli {
    /// Read-only snap bundle
    #[arg(long, env = "SNAP", global = true)]
    snap: Option<PathBuf>,
    /// Writable, revision-independent snap data
    #[arg(long, env = "SNAP_COMMON", global = true)]
    snap_common: Option<PathBuf>,
    /// Snap name used to qualify service names
    #[arg(long, env = "SNAP_NAME", default_value = DEFAULT_SNAP_NAME, global = true)]
    snap_name: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Provision the runtime tree and write default configuration
    Install,
    /// Merge snap options into ood_portal.yaml and nginx_stage.yaml
    Configure {
        /// Component option as KEY=JSON; read from snapctl when omitted
        #[arg(short = 'o', long = "option", value_parser = parse_option)]
        options: Vec<(String, String)>,
        /// Translate hyphenated option names to field names
        #[arg(long)]
        prefilter: bool,
        /// Let supplied values replace values already on disk
        #[arg(long)]
        prefer_incoming: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = resolve_paths(cli.snap, cli.snap_common).and_then(|paths| {
        let snap = SnapctlEnvironment::new(paths.clone(), cli.snap_name);
        logging::init(&paths.hooks_log())?;
        match cli.command {
            Commands::Install => run_install(snap),
            Commands::Configure { options, prefilter, prefer_incoming } => {
                let policy = if prefer_incoming {
                    MergePolicy::PreferIncoming
                } else {
                    MergePolicy::PreserveExisting
                };
                run_configure(snap, options, UpdateOptions { prefilter, policy })
            }
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn resolve_paths(
    snap: Option<PathBuf>,
    snap_common: Option<PathBuf>,
) -> Result<SnapPaths, AppError> {
    match (snap, snap_common) {
        (Some(snap), Some(common)) => Ok(SnapPaths::new(snap, common)),
        _ => SnapPaths::from_env(),
    }
}

fn run_install(snap: SnapctlEnvironment) -> Result<(), AppError> {
    api::install(snap)?;
    println!("✅ Provisioned Open OnDemand runtime tree");
    Ok(())
}

fn run_configure(
    snap: SnapctlEnvironment,
    options: Vec<(String, String)>,
    update: UpdateOptions,
) -> Result<(), AppError> {
    let raw: BTreeMap<String, String> = if options.is_empty() {
        api::collect_options(&snap)?
    } else {
        options.into_iter().collect()
    };

    let updates = api::configure(snap, &raw, update)?;
    if updates.is_empty() {
        println!("✅ No configuration options to apply");
    }
    for ComponentUpdate { key, outcome } in updates {
        match outcome {
            UpdateOutcome::Unchanged => println!("✅ {} configuration unchanged", key),
            UpdateOutcome::Updated { restart_required } if restart_required.is_empty() => {
                println!("✅ Updated {} configuration", key)
            }
            UpdateOutcome::Updated { restart_required } => println!(
                "✅ Updated {} configuration (restart required: {})",
                key,
                restart_required.join(", ")
            ),
        }
    }
    Ok(())
}

fn parse_option(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(key, json)| (key.trim().to_string(), json.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected KEY=JSON, got '{}'", value))
}
