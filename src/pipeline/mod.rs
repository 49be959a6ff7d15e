//! Task descriptor types and task list construction.
//!
//! A [`TaskDescriptor`] mirrors one entry of the orchestrator's task list.
//! The builder produces them in release order; the check module verifies
//! that dependency references resolve.

pub mod builder;
pub mod check;
mod task;

pub use builder::{build_tasks, platform_tasks};
pub use check::{check_tasks, format_report, CheckReport, UnresolvedReference};
pub use task::{TaskDescriptor, Uses};

/// Sets up the Nix development shell; every build depends on it.
pub const SETUP_NIX: &str = "setup-nix";
/// Installs `rcodesign` for the notarize tasks.
pub const SETUP_CODESIGNING: &str = "setup-codesigning";
/// Installs `zip` for packaging binaries before notarization.
pub const INSTALL_ZIP: &str = "install-zip";

/// Tasks defined elsewhere in the consuming pipeline.
pub const EXTERNAL_TASKS: [&str; 3] = [SETUP_NIX, SETUP_CODESIGNING, INSTALL_ZIP];
