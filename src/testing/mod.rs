pub mod ports;

pub use ports::FakeSnap;
pub use ports::MemoryFilesystem;
