//! Snap runtime paths.

use std::env;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Default snap name used when `SNAP_NAME` is not provided.
pub const DEFAULT_SNAP_NAME: &str = "ondemand";

/// Resolved snap locations.
///
/// `snap` is the read-only bundle (`$SNAP`); `common` is the writable,
/// revision-independent data directory (`$SNAP_COMMON`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapPaths {
    snap: PathBuf,
    common: PathBuf,
}

impl SnapPaths {
    pub fn new(snap: impl Into<PathBuf>, common: impl Into<PathBuf>) -> Self {
        Self { snap: snap.into(), common: common.into() }
    }

    /// Resolve paths from `SNAP` and `SNAP_COMMON`.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::new(required_var("SNAP")?, required_var("SNAP_COMMON")?))
    }

    pub fn snap(&self) -> &Path {
        &self.snap
    }

    pub fn common(&self) -> &Path {
        &self.common
    }

    /// `$SNAP_COMMON/hooks.log`
    pub fn hooks_log(&self) -> PathBuf {
        self.common.join("hooks.log")
    }
}

/// Snap name from `SNAP_NAME`; parallel installs carry an instance suffix
/// such as `ondemand_foo`.
pub fn snap_name_from_env() -> String {
    snap_name_or_default(env::var("SNAP_NAME").ok())
}

fn snap_name_or_default(value: Option<String>) -> String {
    value.filter(|name| !name.is_empty()).unwrap_or_else(|| DEFAULT_SNAP_NAME.to_string())
}

fn required_var(name: &str) -> Result<PathBuf, AppError> {
    env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| AppError::config_error(format!("{} is not set; run inside a snap", name)))
}
