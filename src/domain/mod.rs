pub mod config;
pub mod error;
pub mod layout;
pub mod snap;

pub use config::{ConfigDocument, MergePolicy, NginxStageConfig, OodPortalConfig};
pub use error::AppError;
pub use layout::{RUNTIME_DIRS, STATIC_ASSETS, StaticAsset};
pub use snap::{DEFAULT_SNAP_NAME, SnapPaths, snap_name_from_env};
