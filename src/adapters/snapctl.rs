use std::io;
use std::process::Command;

use tracing::warn;

use crate::domain::{AppError, SnapPaths};
use crate::ports::SnapEnvironment;

/// `SnapEnvironment` that talks to snapd through `snapctl`.
#[derive(Debug, Clone)]
pub struct SnapctlEnvironment {
    paths: SnapPaths,
    snap_name: String,
}

impl SnapctlEnvironment {
    pub fn new(paths: SnapPaths, snap_name: impl Into<String>) -> Self {
        Self { paths, snap_name: snap_name.into() }
    }

    /// `<snap>.<service>` as listed by `snapctl services`.
    fn qualified_service(&self, service: &str) -> String {
        format!("{}.{}", self.snap_name, service)
    }

    /// Run snapctl, returning `None` when it is not installed.
    fn run(&self, args: &[&str]) -> Result<Option<String>, AppError> {
        let output = match Command::new("snapctl").args(args).output() {
            Ok(output) => output,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("snapctl not found; not running under snapd");
                return Ok(None);
            }
            Err(e) => {
                return Err(AppError::SnapCommand {
                    command: format!("snapctl {}", args.join(" ")),
                    details: e.to_string(),
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::SnapCommand {
                command: format!("snapctl {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()))
    }
}

impl SnapEnvironment for SnapctlEnvironment {
    fn paths(&self) -> &SnapPaths {
        &self.paths
    }

    fn get_option(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.run(&["get", key])?.filter(|value| !value.is_empty()))
    }

    fn service_is_active(&self, service: &str) -> Result<bool, AppError> {
        let qualified = self.qualified_service(service);
        Ok(self
            .run(&["services", &qualified])?
            .is_some_and(|listing| service_listed_active(&listing, &qualified)))
    }
}

/// Parse `snapctl services` output:
///
/// ```text
/// Service          Startup  Current  Notes
/// ondemand.apache  enabled  active   -
/// ```
fn service_listed_active(listing: &str, qualified: &str) -> bool {
    listing.lines().skip(1).any(|line| {
        let mut columns = line.split_whitespace();
        columns.next() == Some(qualified) && columns.nth(1) == Some("active")
    })
}
