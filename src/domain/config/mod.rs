pub mod document;
pub mod merge;
pub mod nginx_stage;
pub mod portal;
pub mod prefilter;
pub mod yaml_compat;

pub use document::ConfigDocument;
pub use merge::{MergePolicy, merge_mappings};
pub use nginx_stage::NginxStageConfig;
pub use portal::{
    Analytics, DexConfig, DexConnector, DexFrontend, DexStaticPassword, OodPortalConfig,
};
pub use prefilter::prefilter;
