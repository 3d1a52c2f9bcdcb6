//! `ood_portal.yaml` record.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::ConfigDocument;
use crate::domain::SnapPaths;
use crate::domain::layout;

/// Configuration consumed by the portal's Apache frontend generator.
///
/// Optional fields are left out of the serialized document when unset;
/// every other field is always written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OodPortalConfig {
    // ── Network binding ────────────────────────────────────────────────
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_addr_port: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servername: Option<String>,
    pub server_aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_server: Option<String>,
    /// Defaults to 80, or 443 when `ssl` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<Vec<String>>,

    // ── Logging ────────────────────────────────────────────────────────
    pub disable_logs: bool,
    pub logroot: String,
    pub errorlog: String,
    pub accesslog: String,
    /// Apache combined format when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logformat: Option<String>,

    // ── Routing and security ───────────────────────────────────────────
    pub use_rewrites: bool,
    pub use_maintenance: bool,
    pub maintenance_ip_allowlist: Vec<String>,
    pub security_csp_frame_ancestors: String,
    pub security_strict_transport: bool,
    pub lua_root: String,
    pub lua_log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_map_cmd: Option<String>,
    pub user_map_match: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_env: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_fail_uri: Option<String>,
    pub pun_stage_cmd: String,
    pub auth: Vec<String>,
    pub custom_vhost_directives: Vec<String>,
    pub custom_location_directives: Vec<String>,
    pub root_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
    pub public_uri: String,
    pub public_root: String,
    pub logout_uri: String,
    pub logout_redirect: String,
    pub host_regex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rnode_uri: Option<String>,
    pub nginx_uri: String,
    pub pun_uri: String,
    pub pun_socket_root: String,
    pub pun_max_retries: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pun_pre_hook_root_cmd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pun_pre_hook_exports: Option<String>,

    // ── OpenID Connect ─────────────────────────────────────────────────
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_discover_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_discover_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_provider_metadata_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_client_secret: Option<String>,
    pub oidc_remote_user_claim: String,
    pub oidc_scope: String,
    pub oidc_session_inactivity_timeout: u64,
    pub oidc_session_max_duration: u64,
    pub oidc_state_max_number_of_cookies: String,
    pub oidc_cookie_same_site: String,
    pub oidc_settings: BTreeMap<String, Value>,

    // ── Dex ────────────────────────────────────────────────────────────
    pub dex_uri: String,
    /// Dex configuration generation is disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dex: Option<DexConfig>,
}

impl Default for OodPortalConfig {
    fn default() -> Self {
        Self {
            listen_addr_port: None,
            servername: None,
            server_aliases: Vec::new(),
            proxy_server: None,
            port: None,
            ssl: None,
            disable_logs: false,
            logroot: "logs".into(),
            errorlog: "error.log".into(),
            accesslog: "access.log".into(),
            logformat: None,
            use_rewrites: true,
            use_maintenance: true,
            maintenance_ip_allowlist: Vec::new(),
            security_csp_frame_ancestors: String::new(),
            security_strict_transport: false,
            lua_root: "/opt/ood/mod_ood_proxy/lib".into(),
            lua_log_level: "info".into(),
            user_map_cmd: None,
            user_map_match: "'.*'".into(),
            user_env: None,
            map_fail_uri: None,
            pun_stage_cmd: "sudo /opt/ood/nginx_stage/sbin/nginx_stage".into(),
            auth: Vec::new(),
            custom_vhost_directives: Vec::new(),
            custom_location_directives: Vec::new(),
            root_uri: "/pun/sys/dashboard".into(),
            analytics: None,
            public_uri: "/public".into(),
            public_root: "/var/www/ood/public".into(),
            logout_uri: "/logout".into(),
            logout_redirect: "/pun/sys/dashboard/logout".into(),
            host_regex: "'[^/]+'".into(),
            node_uri: None,
            rnode_uri: None,
            nginx_uri: "/nginx".into(),
            pun_uri: "/pun".into(),
            pun_socket_root: "/var/run/ondemand-nginx".into(),
            pun_max_retries: 5,
            pun_pre_hook_root_cmd: None,
            pun_pre_hook_exports: None,
            oidc_uri: None,
            oidc_discover_uri: None,
            oidc_discover_root: None,
            register_uri: None,
            register_root: None,
            oidc_provider_metadata_url: None,
            oidc_client_id: None,
            oidc_client_secret: None,
            oidc_remote_user_claim: "preferred_username".into(),
            oidc_scope: "openid profile email".into(),
            oidc_session_inactivity_timeout: 28800,
            oidc_session_max_duration: 28800,
            oidc_state_max_number_of_cookies: "10 true".into(),
            oidc_cookie_same_site: "On".into(),
            oidc_settings: BTreeMap::new(),
            dex_uri: "/dex".into(),
            dex: None,
        }
    }
}

impl ConfigDocument for OodPortalConfig {
    const KEY: &'static str = "portal";
    const MODE: u32 = 0o600;
    const DEPENDENT_SERVICES: &'static [&'static str] = &["apache"];

    fn path(common: &Path) -> PathBuf {
        layout::ood_portal_file(common)
    }

    fn snap_defaults(paths: &SnapPaths) -> Self {
        let snap = paths.snap().display();
        let common = paths.common().display();
        Self {
            logroot: format!("{}/var/log/ood", common),
            security_strict_transport: true,
            lua_root: format!("{}/mod_ood_proxy/lib", snap),
            pun_stage_cmd: format!("sudo {}/nginx_stage/sbin/nginx_stage", snap),
            public_root: format!("{}/var/www/ood/public", common),
            logout_redirect: "/pun/sys/dashboard/pun".into(),
            pun_socket_root: format!("{}/run/nginx", common),
            ..Self::default()
        }
    }
}

/// Google Analytics reporting target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Analytics {
    pub url: String,
    pub id: String,
}

/// Settings for the bundled Dex OpenID Connect provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DexConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub client_redirect_uris: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connectors: Vec<DexConnector>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub static_passwords: Vec<DexStaticPassword>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend: Option<DexFrontend>,
}

/// Upstream identity connector (LDAP, GitHub, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DexConnector {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub config: BTreeMap<String, Value>,
}

/// Local account served by Dex itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DexStaticPassword {
    pub email: String,
    pub hash: String,
    pub username: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DexFrontend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}
