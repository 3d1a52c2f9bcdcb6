//! Snap runtime collaborator.

use crate::domain::{AppError, SnapPaths};

/// Port for the packaging runtime the hooks execute under.
pub trait SnapEnvironment {
    /// Resolved `$SNAP` / `$SNAP_COMMON` locations.
    fn paths(&self) -> &SnapPaths;

    /// Raw value of a snap configuration option, if set.
    fn get_option(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Whether the named service of this snap is currently running.
    fn service_is_active(&self, service: &str) -> Result<bool, AppError>;
}
