use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::models::{NginxStage, OodPortal};
use crate::domain::{AppError, RUNTIME_DIRS, STATIC_ASSETS};
use crate::ports::{HookFilesystem, SnapEnvironment};

/// Execute the install hook.
///
/// Provisions the runtime tree, installs bundled assets, and writes default
/// configuration documents. Any failure aborts the hook.
pub fn execute<S, F>(ctx: &AppContext<S, F>) -> Result<(), AppError>
where
    S: SnapEnvironment,
    F: HookFilesystem,
{
    info!("Executing snap `install` hook.");
    setup_dirs(ctx)?;
    install_assets(ctx)?;
    OodPortal::new(ctx).generate_config()?;
    NginxStage::new(ctx).generate_config()?;
    Ok(())
}

/// Create directories required by Open OnDemand, Apache, nginx and Passenger.
pub fn setup_dirs<S, F>(ctx: &AppContext<S, F>) -> Result<(), AppError>
where
    S: SnapEnvironment,
    F: HookFilesystem,
{
    info!("Provisioning required directories for Open OnDemand, Apache, nginx, and Passenger.");
    let common = ctx.paths().common();
    for dir in RUNTIME_DIRS {
        let path = common.join(dir);
        debug!("Generating directory {}.", path.display());
        ctx.filesystem().create_dir(&path)?;
    }
    Ok(())
}

/// Copy static web assets from the read-only bundle into `$SNAP_COMMON`.
pub fn install_assets<S, F>(ctx: &AppContext<S, F>) -> Result<(), AppError>
where
    S: SnapEnvironment,
    F: HookFilesystem,
{
    let paths = ctx.paths();
    for asset in STATIC_ASSETS {
        let from = paths.snap().join(asset.source);
        let to = paths.common().join(asset.target);
        debug!("Copying {} to {} (mode {:o}).", from.display(), to.display(), asset.mode);
        ctx.filesystem().copy_file(&from, &to, asset.mode)?;
    }
    Ok(())
}
