use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::domain::AppError;
use crate::ports::HookFilesystem;

/// `HookFilesystem` backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl HookFilesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        if path.try_exists()? {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            )));
        }
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path, mode: u32) -> Result<(), AppError> {
        fs::copy(from, to)?;
        set_mode(to, mode)
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(AppError::from)
    }

    fn write_file(&self, path: &Path, content: &str, mode: u32) -> Result<(), AppError> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        let mut file = options.open(path)?;
        file.write_all(content.as_bytes())?;
        // `mode` on open only applies to newly created files.
        set_mode(path, mode)
    }
}

fn set_mode(path: &Path, mode: u32) -> Result<(), AppError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    let _ = (path, mode);
    Ok(())
}
