//! `mint-release-tasks check` command.

use crate::config::{resolve_version, ReleaseConfig};
use crate::context::ServiceContext;
use crate::pipeline::{build_tasks, check_tasks, format_report, EXTERNAL_TASKS};

/// Version used when none is configured; the check does not depend on it.
const PLACEHOLDER_VERSION: &str = "0.0.0-check";

/// Execute the `check` command.
///
/// Prints the report and fails when any problem was found.
///
/// # Errors
///
/// Returns an error string if duplicate keys or unresolved references exist.
pub fn run(ctx: &ServiceContext) -> Result<(), String> {
    let version = resolve_version(ctx.env.as_ref(), None).unwrap_or_else(|| {
        tracing::debug!("no release version configured, checking with a placeholder");
        PLACEHOLDER_VERSION.to_string()
    });
    let tasks = build_tasks(&ReleaseConfig::new(version));
    let report = check_tasks(&tasks, &EXTERNAL_TASKS);

    println!("{}", format_report(&report));
    if report.is_clean() {
        Ok(())
    } else {
        Err("task list check failed".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::context::testing;

    #[test]
    fn check_command_passes() {
        let (ctx, _fs) = testing::context(&[("FULL_VERSION", "v1.0.0")]);
        assert!(run(&ctx).is_ok());
    }
}
