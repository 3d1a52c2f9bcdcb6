mod fake_snap;
mod memory_filesystem;

pub use fake_snap::FakeSnap;
pub use memory_filesystem::MemoryFilesystem;
