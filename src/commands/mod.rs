//! Command dispatch and handlers.

pub mod check;
pub mod generate;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// No subcommand means `generate` with default options, so a bare
/// invocation prints the YAML task list.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: Option<&Command>) -> Result<(), String> {
    dispatch_with_context(command, &ServiceContext::live())
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(command: Option<&Command>, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        None => generate::run(ctx, &generate::GenerateOptions::default()),
        Some(Command::Generate { format, output, release_version }) => {
            let options = generate::GenerateOptions {
                format: *format,
                output: output.clone(),
                release_version: release_version.clone(),
            };
            generate::run(ctx, &options)
        }
        Some(Command::Check) => check::run(ctx),
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::context::testing;
    use crate::render::OutputFormat;

    #[test]
    fn generate_to_file_through_dispatch() {
        let (ctx, fs) = testing::context(&[("FULL_VERSION", "v3.0.0")]);
        let command = Command::Generate {
            format: OutputFormat::Json,
            output: Some(PathBuf::from("/out/tasks.json")),
            release_version: None,
        };
        dispatch_with_context(Some(&command), &ctx).unwrap();

        let written = fs.read(Path::new("/out/tasks.json")).unwrap();
        assert!(written.contains("\"upload-windows-arm64-to-release\""));
    }

    #[test]
    fn bare_invocation_requires_version() {
        let (ctx, _fs) = testing::context(&[]);
        let err = dispatch_with_context(None, &ctx).unwrap_err();
        assert!(err.contains("FULL_VERSION"));
    }

    #[test]
    fn check_needs_no_version() {
        let (ctx, _fs) = testing::context(&[]);
        assert!(dispatch_with_context(Some(&Command::Check), &ctx).is_ok());
    }
}
