//! ondemand-hooks: lifecycle hooks for the Open OnDemand snap.
//!
//! Provisions the writable runtime tree at install time and maintains the
//! `ood_portal.yaml` and `nginx_stage.yaml` documents read by the portal
//! frontend and the `nginx_stage` utility.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    COMPONENT_KEYS, ComponentUpdate, UpdateOptions, UpdateOutcome, collect_options, configure,
    configure_at, generate_config, install, install_at, load_config, update_config,
};
pub use domain::config::{merge_mappings, prefilter};
pub use domain::{
    AppError, ConfigDocument, MergePolicy, NginxStageConfig, OodPortalConfig, SnapPaths,
};
pub use ports::SnapEnvironment;
