//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the task generator and the
//! process it runs in (environment variables, filesystem).
//! Implementations live in `src/adapters/`.

pub mod environment;
pub mod filesystem;

pub use environment::Environment;
pub use filesystem::FileSystem;
