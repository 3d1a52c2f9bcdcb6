mod hook_filesystem;
mod snap_environment;

pub use hook_filesystem::HookFilesystem;
pub use snap_environment::SnapEnvironment;
