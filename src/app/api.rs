//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and hook execution against the local filesystem.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::adapters::{LocalFilesystem, SnapctlEnvironment};
use crate::app::models::ConfigModel;
use crate::app::{
    AppContext,
    commands::{configure, install},
};
use crate::domain::snap_name_from_env;
use crate::ports::SnapEnvironment;

pub use crate::app::commands::configure::{COMPONENT_KEYS, ComponentUpdate};
pub use crate::app::models::{UpdateOptions, UpdateOutcome};
pub use crate::domain::{AppError, ConfigDocument, MergePolicy, SnapPaths};

fn create_context<S: SnapEnvironment>(snap: S) -> AppContext<S, LocalFilesystem> {
    AppContext::new(snap, LocalFilesystem::new())
}

fn snapctl(paths: SnapPaths) -> SnapctlEnvironment {
    SnapctlEnvironment::new(paths, snap_name_from_env())
}

// =============================================================================
// Install Hook API
// =============================================================================

/// Run the install hook: directories, bundled assets, default configuration.
pub fn install<S: SnapEnvironment>(snap: S) -> Result<(), AppError> {
    install::execute(&create_context(snap))
}

/// Run the install hook for explicit snap paths, naming services after `SNAP_NAME`.
pub fn install_at(paths: SnapPaths) -> Result<(), AppError> {
    install(snapctl(paths))
}

// =============================================================================
// Configure Hook API
// =============================================================================

/// Dispatch raw `component key -> JSON` options to the configuration models.
pub fn configure<S: SnapEnvironment>(
    snap: S,
    raw: &BTreeMap<String, String>,
    options: UpdateOptions,
) -> Result<Vec<ComponentUpdate>, AppError> {
    configure::execute(&create_context(snap), raw, options)
}

/// Dispatch raw options for explicit snap paths, naming services after `SNAP_NAME`.
pub fn configure_at(
    paths: SnapPaths,
    raw: &BTreeMap<String, String>,
    options: UpdateOptions,
) -> Result<Vec<ComponentUpdate>, AppError> {
    configure(snapctl(paths), raw, options)
}

/// Read the recognized component options from the snap runtime.
pub fn collect_options<S: SnapEnvironment>(
    snap: &S,
) -> Result<BTreeMap<String, String>, AppError> {
    configure::collect_options(snap)
}

// =============================================================================
// Configuration Model API
// =============================================================================

/// Write the default document for `C`, replacing any existing file.
pub fn generate_config<C: ConfigDocument, S: SnapEnvironment>(snap: S) -> Result<(), AppError> {
    let ctx = create_context(snap);
    ConfigModel::<C, _, _>::new(&ctx).generate_config()
}

/// Merge `partial` into the document for `C`.
pub fn update_config<C: ConfigDocument, S: SnapEnvironment>(
    snap: S,
    partial: &Value,
    options: UpdateOptions,
) -> Result<UpdateOutcome, AppError> {
    let ctx = create_context(snap);
    ConfigModel::<C, _, _>::new(&ctx).update_config(partial, options)
}

/// Load the current document for `C`.
pub fn load_config<C: ConfigDocument, S: SnapEnvironment>(snap: S) -> Result<C, AppError> {
    let ctx = create_context(snap);
    ConfigModel::<C, _, _>::new(&ctx).load()
}
