//! `nginx_stage.yaml` record.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::ConfigDocument;
use crate::domain::SnapPaths;
use crate::domain::layout;

/// Configuration consumed by the `nginx_stage` per-user nginx manager.
///
/// Every key is optional and left to the utility's built-in default when
/// unset, so the default record serializes to an empty mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NginxStageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ondemand_version_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ondemand_portal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ondemand_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pun_custom_env: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pun_custom_env_declarations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nginx_bin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nginx_signals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_types_path: Option<String>,

    // Passenger
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_ruby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_nodejs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_python: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_pool_idle_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_options: Option<BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nginx_file_upload_max: Option<u64>,

    // Per-user nginx
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pun_config_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pun_tmp_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pun_access_log_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pun_error_log_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pun_secret_key_base_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pun_pid_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pun_socket_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pun_sendfile_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pun_sendfile_uri: Option<String>,

    // Apps, keyed by app type (sys, usr, dev)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_config_path: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_root: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_request_uri: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_request_regex: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_token: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_passenger_env: Option<BTreeMap<String, String>>,

    // Users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_uid: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_shell: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_bundle_user_config: Option<bool>,
}

impl ConfigDocument for NginxStageConfig {
    const KEY: &'static str = "nginx-stage";
    const MODE: u32 = 0o644;
    const DEPENDENT_SERVICES: &'static [&'static str] = &["apache"];

    fn path(common: &Path) -> PathBuf {
        layout::nginx_stage_file(common)
    }

    // TODO: seed snap-specific paths (pun_config_path, app_root) once the
    // bundled nginx_stage reads them from the snap layout.
    fn snap_defaults(_paths: &SnapPaths) -> Self {
        Self::default()
    }
}
