use crate::domain::SnapPaths;
use crate::ports::{HookFilesystem, SnapEnvironment};

/// Application context holding dependencies for hook execution.
pub struct AppContext<S: SnapEnvironment, F: HookFilesystem> {
    snap: S,
    filesystem: F,
}

impl<S: SnapEnvironment, F: HookFilesystem> AppContext<S, F> {
    /// Create a new application context.
    pub fn new(snap: S, filesystem: F) -> Self {
        Self { snap, filesystem }
    }

    /// Get a reference to the snap runtime.
    pub fn snap(&self) -> &S {
        &self.snap
    }

    /// Get a reference to the filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    pub fn paths(&self) -> &SnapPaths {
        self.snap.paths()
    }
}
