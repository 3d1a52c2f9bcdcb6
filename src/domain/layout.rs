//! `$SNAP_COMMON` runtime tree and bundled static assets.

use std::path::{Path, PathBuf};

/// Directories provisioned at install time, relative to `$SNAP_COMMON`.
pub const RUNTIME_DIRS: [&str; 15] = [
    // etc - configuration files.
    "etc/apache2/conf.d",
    "etc/ood/config/clusters.d",
    "etc/ood/config/ondemand.d",
    // run - runtime variable data.
    "run",
    // var/lib - variable state information.
    "var/lib/nginx/config/puns",
    "var/lib/nginx/config/app/sys",
    "var/lib/nginx/config/app/usr",
    "var/lib/nginx/config/app/dev",
    // var/log - variable log data.
    "var/log/apache",
    // var/www - variable web data.
    "var/www/ood/public/maintenance",
    "var/www/ood/discover",
    "var/www/ood/register",
    "var/www/ood/apps/sys",
    "var/www/ood/apps/usr",
    "var/www/ood/apps/dev",
];

/// A file shipped in the read-only bundle and installed into the web-asset tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAsset {
    /// Path relative to `$SNAP`.
    pub source: &'static str,
    /// Path relative to `$SNAP_COMMON`.
    pub target: &'static str,
    pub mode: u32,
}

pub const MAINTENANCE_PAGE: StaticAsset = StaticAsset {
    source: "ood/public/maintenance/index.html",
    target: "var/www/ood/public/maintenance/index.html",
    mode: 0o644,
};

pub const MISSING_HOME_PAGE: StaticAsset = StaticAsset {
    source: "ood/public/missing_home_directory.html",
    target: "var/www/ood/public/missing_home_directory.html",
    mode: 0o600,
};

pub const STATIC_ASSETS: [StaticAsset; 2] = [MAINTENANCE_PAGE, MISSING_HOME_PAGE];

// ── Configuration documents ────────────────────────────────────────────

/// `etc/ood/config/`
pub fn config_dir(common: &Path) -> PathBuf {
    common.join("etc").join("ood").join("config")
}

/// `etc/ood/config/ood_portal.yaml`
pub fn ood_portal_file(common: &Path) -> PathBuf {
    config_dir(common).join("ood_portal.yaml")
}

/// `etc/ood/config/nginx_stage.yaml`
pub fn nginx_stage_file(common: &Path) -> PathBuf {
    config_dir(common).join("nginx_stage.yaml")
}
