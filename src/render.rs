//! Serialization of the task list into the document the orchestrator reads.

use clap::ValueEnum;

use crate::error::GenerateError;
use crate::pipeline::TaskDescriptor;

/// Document format for the serialized task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// YAML sequence of tasks; multi-line scripts become block scalars.
    #[default]
    Yaml,
    /// Pretty-printed JSON array of tasks.
    Json,
}

/// Serializes `tasks` in order.
///
/// # Errors
///
/// Returns an error if the serializer rejects the task list.
pub fn render(tasks: &[TaskDescriptor], format: OutputFormat) -> Result<String, GenerateError> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(tasks)?),
        OutputFormat::Json => {
            let mut document = serde_json::to_string_pretty(tasks)?;
            document.push('\n');
            Ok(document)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReleaseConfig;
    use crate::pipeline::build_tasks;

    #[test]
    fn yaml_parses_back_to_same_tasks() {
        let tasks = build_tasks(&ReleaseConfig::new("v1.2.3"));
        let yaml = render(&tasks, OutputFormat::Yaml).unwrap();
        let parsed: Vec<TaskDescriptor> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, tasks);
    }

    #[test]
    fn json_parses_back_to_same_tasks() {
        let tasks = build_tasks(&ReleaseConfig::new("v1.2.3"));
        let json = render(&tasks, OutputFormat::Json).unwrap();
        assert!(json.ends_with("]\n"));
        let parsed: Vec<TaskDescriptor> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tasks);
    }

    #[test]
    fn yaml_is_a_top_level_sequence() {
        let tasks = build_tasks(&ReleaseConfig::new("v1.2.3"));
        let yaml = render(&tasks, OutputFormat::Yaml).unwrap();
        assert!(yaml.starts_with("- key: build-mint-linux-amd64\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = ReleaseConfig::new("v1.2.3");
        let first = render(&build_tasks(&config), OutputFormat::Yaml).unwrap();
        let second = render(&build_tasks(&config), OutputFormat::Yaml).unwrap();
        assert_eq!(first, second);
    }
}
