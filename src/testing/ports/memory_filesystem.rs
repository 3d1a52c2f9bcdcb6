//! In-memory `HookFilesystem` double.

use std::collections::{BTreeSet, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::HookFilesystem;

#[derive(Debug, Clone)]
struct StoredFile {
    bytes: Vec<u8>,
    mode: u32,
}

#[derive(Debug, Default)]
struct State {
    files: HashMap<PathBuf, StoredFile>,
    dirs: BTreeSet<PathBuf>,
    writes: usize,
}

/// In-memory file tree shared between clones.
///
/// Tests seed files with `add` and inspect the outcome through `contents`,
/// `mode` and `writes`.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    state: Arc<Mutex<State>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file without counting it as a write.
    pub fn add(&self, path: impl Into<PathBuf>, content: &str) {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(path.into(), StoredFile { bytes: content.as_bytes().to_vec(), mode: 0o644 });
    }

    pub fn contents(&self, path: &Path) -> Option<String> {
        let state = self.state.lock().unwrap();
        state.files.get(path).map(|file| String::from_utf8_lossy(&file.bytes).into_owned())
    }

    pub fn mode(&self, path: &Path) -> Option<u32> {
        self.state.lock().unwrap().files.get(path).map(|file| file.mode)
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    /// Number of `write_file` calls made through the port.
    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }
}

fn not_found(path: &Path) -> AppError {
    AppError::from(io::Error::new(
        io::ErrorKind::NotFound,
        format!("File not found: {}", path.display()),
    ))
}

impl HookFilesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if state.dirs.contains(path) || state.files.contains_key(path) {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            )));
        }
        for ancestor in path.ancestors() {
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path, mode: u32) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        let bytes = state.files.get(from).ok_or_else(|| not_found(from))?.bytes.clone();
        state.files.insert(to.to_path_buf(), StoredFile { bytes, mode });
        Ok(())
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.contents(path).ok_or_else(|| not_found(path))
    }

    fn write_file(&self, path: &Path, content: &str, mode: u32) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.writes += 1;
        state
            .files
            .insert(path.to_path_buf(), StoredFile { bytes: content.as_bytes().to_vec(), mode });
        Ok(())
    }
}
