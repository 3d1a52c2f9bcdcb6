pub mod local_filesystem;
pub mod snapctl;

pub use local_filesystem::LocalFilesystem;
pub use snapctl::SnapctlEnvironment;
