//! Live adapters for real external interactions.

pub mod environment;
pub mod filesystem;

pub use environment::LiveEnvironment;
pub use filesystem::LiveFileSystem;
