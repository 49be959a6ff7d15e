//! `mint-release-tasks generate` command.

use std::path::PathBuf;

use crate::config::ReleaseConfig;
use crate::context::ServiceContext;
use crate::error::GenerateError;
use crate::pipeline::{build_tasks, check_tasks, format_report, EXTERNAL_TASKS};
use crate::render::{render, OutputFormat};

/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Document format.
    pub format: OutputFormat,
    /// Destination file; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Release version overriding `FULL_VERSION`.
    pub release_version: Option<String>,
}

/// Execute the `generate` command.
///
/// # Errors
///
/// Returns an error string if no version is available, serialization fails,
/// or the output file cannot be written.
pub fn run(ctx: &ServiceContext, options: &GenerateOptions) -> Result<(), String> {
    let document = render_document(ctx, options).map_err(|e| e.to_string())?;

    match &options.output {
        Some(path) => {
            ctx.fs.write(path, &document).map_err(|e| {
                GenerateError::Write { path: path.clone(), message: e.to_string() }.to_string()
            })?;
            tracing::info!(path = %path.display(), "wrote task list");
        }
        None => print!("{document}"),
    }
    Ok(())
}

/// Builds the task list for the configured release and serializes it.
///
/// The reference check runs as well, but only logs: the orchestrator remains
/// the authority on whether the pipeline is valid.
///
/// # Errors
///
/// Returns an error if the version is missing or serialization fails.
pub fn render_document(
    ctx: &ServiceContext,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let config = ReleaseConfig::from_env(ctx.env.as_ref(), options.release_version.as_deref())?;
    let tasks = build_tasks(&config);

    let report = check_tasks(&tasks, &EXTERNAL_TASKS);
    if !report.is_clean() {
        tracing::warn!("task list check failed:\n{}", format_report(&report));
    }

    tracing::debug!(version = %config.version, tasks = tasks.len(), "rendering task list");
    render(&tasks, options.format)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::context::testing;
    use crate::pipeline::TaskDescriptor;

    fn options() -> GenerateOptions {
        GenerateOptions { format: OutputFormat::Yaml, output: None, release_version: None }
    }

    #[test]
    fn renders_version_from_environment() {
        let (ctx, _fs) = testing::context(&[("FULL_VERSION", "v1.5.0")]);
        let yaml = render_document(&ctx, &options()).unwrap();
        let tasks: Vec<TaskDescriptor> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(tasks.len(), 14);
        assert!(tasks[0].run.contains("config.Version=v1.5.0"));
    }

    #[test]
    fn override_replaces_environment_version() {
        let (ctx, _fs) = testing::context(&[("FULL_VERSION", "v1.5.0")]);
        let options = GenerateOptions { release_version: Some("v9.9.9".to_string()), ..options() };
        let yaml = render_document(&ctx, &options).unwrap();
        assert!(yaml.contains("v9.9.9"));
        assert!(!yaml.contains("v1.5.0"));
    }

    #[test]
    fn missing_version_fails() {
        let (ctx, _fs) = testing::context(&[]);
        let err = render_document(&ctx, &options()).unwrap_err();
        assert!(matches!(err, GenerateError::MissingVersion));
    }

    #[test]
    fn identical_environment_gives_identical_output() {
        let (ctx, _fs) = testing::context(&[("FULL_VERSION", "v1.5.0")]);
        let first = render_document(&ctx, &options()).unwrap();
        let second = render_document(&ctx, &options()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn writes_output_file() {
        let (ctx, fs) = testing::context(&[("FULL_VERSION", "v1.5.0")]);
        let options = GenerateOptions { output: Some("/ci/release.yml".into()), ..options() };
        run(&ctx, &options).unwrap();

        let written = fs.read(Path::new("/ci/release.yml")).unwrap();
        assert_eq!(written, render_document(&ctx, &options).unwrap());
    }
}
