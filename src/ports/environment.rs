//! Environment port for reading process variables.

/// Provides read access to environment variables.
///
/// Abstracting the environment lets tests supply a fixed release version
/// without mutating the process environment.
pub trait Environment: Send + Sync {
    /// Returns the value of `name`, or `None` when it is unset or not valid UTF-8.
    fn var(&self, name: &str) -> Option<String>;
}
