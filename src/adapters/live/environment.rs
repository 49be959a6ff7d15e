//! Live environment adapter using `std::env`.

use crate::ports::environment::Environment;

/// Live environment adapter backed by the process environment.
pub struct LiveEnvironment;

impl Environment for LiveEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
