//! Shared testing utilities for ondemand-hooks integration tests.

use assert_cmd::Command;
use ondemand_hooks::{AppError, SnapEnvironment, SnapPaths};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Bundled assets seeded into the emulated `$SNAP`, with their content.
pub const SEEDED_ASSETS: [(&str, &str); 2] = [
    ("ood/public/maintenance/index.html", "<html><body>Down for maintenance</body></html>\n"),
    ("ood/public/missing_home_directory.html", "<html><body>No home directory</body></html>\n"),
];

/// Testing harness providing an emulated snap layout.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    snap: PathBuf,
    common: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create `$SNAP` (with bundled assets) and an empty `$SNAP_COMMON`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let snap = root.path().join("snap");
        let common = root.path().join("common");
        fs::create_dir_all(&common).expect("Failed to create SNAP_COMMON");

        for (relative, content) in SEEDED_ASSETS {
            let path = snap.join(relative);
            fs::create_dir_all(path.parent().unwrap()).expect("Failed to create asset dir");
            fs::write(&path, content).expect("Failed to seed bundled asset");
        }

        Self { root, snap, common }
    }

    pub fn snap(&self) -> &Path {
        &self.snap
    }

    pub fn common(&self) -> &Path {
        &self.common
    }

    pub fn paths(&self) -> SnapPaths {
        SnapPaths::new(&self.snap, &self.common)
    }

    /// Build a command for invoking the compiled `ondemand-hooks` binary.
    ///
    /// `PATH` points at an empty directory so `snapctl` is never reachable.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("ondemand-hooks").expect("Failed to locate ondemand-hooks binary");
        cmd.env("SNAP", &self.snap)
            .env("SNAP_COMMON", &self.common)
            .env("SNAP_NAME", "ondemand")
            .env("PATH", self.root.path().join("empty-bin"))
            .env_remove("ONDEMAND_HOOKS_LOG");
        cmd
    }

    /// Run `ondemand-hooks install` and assert success.
    pub fn install(&self) {
        self.cli().arg("install").assert().success();
    }

    pub fn portal_file(&self) -> PathBuf {
        self.common.join("etc/ood/config/ood_portal.yaml")
    }

    pub fn nginx_stage_file(&self) -> PathBuf {
        self.common.join("etc/ood/config/nginx_stage.yaml")
    }

    /// Parse the portal document as a YAML mapping.
    pub fn read_portal(&self) -> serde_yaml::Mapping {
        let content = fs::read_to_string(self.portal_file()).expect("Failed to read portal file");
        serde_yaml::from_str(&content).expect("portal file should be a YAML mapping")
    }

    /// Permission bits of a file.
    #[cfg(unix)]
    pub fn mode(&self, path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).expect("Failed to stat file").permissions().mode() & 0o777
    }
}

/// Snap runtime double for library tests: no options, optional active services.
#[allow(dead_code)]
pub struct StaticSnap {
    paths: SnapPaths,
    active: Vec<String>,
}

#[allow(dead_code)]
impl StaticSnap {
    pub fn new(paths: SnapPaths) -> Self {
        Self { paths, active: Vec::new() }
    }

    pub fn with_active_service(mut self, service: &str) -> Self {
        self.active.push(service.to_string());
        self
    }
}

impl SnapEnvironment for StaticSnap {
    fn paths(&self) -> &SnapPaths {
        &self.paths
    }

    fn get_option(&self, _key: &str) -> Result<Option<String>, AppError> {
        Ok(None)
    }

    fn service_is_active(&self, service: &str) -> Result<bool, AppError> {
        Ok(self.active.iter().any(|s| s == service))
    }
}
