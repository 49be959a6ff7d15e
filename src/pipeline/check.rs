//! Advisory checks over a generated task list.
//!
//! The orchestrator resolves `use` references by key, so a typo in a key
//! only surfaces when the pipeline runs. These checks catch that earlier.

use std::collections::HashSet;

use crate::pipeline::TaskDescriptor;

/// A `use` reference that names no known task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    /// Key of the task holding the reference.
    pub task: String,
    /// The key it refers to.
    pub reference: String,
}

/// Outcome of checking a task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of tasks inspected.
    pub task_count: usize,
    /// Keys defined more than once, each listed once in first-seen order.
    pub duplicate_keys: Vec<String>,
    /// References that resolve to neither a generated nor an external task.
    pub unresolved: Vec<UnresolvedReference>,
}

impl CheckReport {
    /// Returns `true` if no problems were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicate_keys.is_empty() && self.unresolved.is_empty()
    }
}

/// Checks key uniqueness and that every `use` reference resolves.
///
/// `externals` lists tasks defined outside the generated list.
#[must_use]
pub fn check_tasks(tasks: &[TaskDescriptor], externals: &[&str]) -> CheckReport {
    let mut seen = HashSet::new();
    let mut duplicate_keys = Vec::new();
    for task in tasks {
        if !seen.insert(task.key.as_str()) && !duplicate_keys.contains(&task.key) {
            duplicate_keys.push(task.key.clone());
        }
    }

    let unresolved = tasks
        .iter()
        .flat_map(|task| task.uses.keys().map(move |reference| (task, reference)))
        .filter(|(_, reference)| !seen.contains(reference) && !externals.contains(reference))
        .map(|(task, reference)| UnresolvedReference {
            task: task.key.clone(),
            reference: reference.to_string(),
        })
        .collect();

    CheckReport { task_count: tasks.len(), duplicate_keys, unresolved }
}

/// Formats a [`CheckReport`] as a human-readable report.
#[must_use]
pub fn format_report(report: &CheckReport) -> String {
    let mut lines = vec![format!("Tasks: {}", report.task_count), String::new()];

    if report.duplicate_keys.is_empty() {
        lines.push("  [PASS] task keys are unique".to_string());
    } else {
        for key in &report.duplicate_keys {
            lines.push(format!("  [FAIL] duplicate key: {key}"));
        }
    }

    if report.unresolved.is_empty() {
        lines.push("  [PASS] every dependency resolves".to_string());
    } else {
        for entry in &report.unresolved {
            lines.push(format!("  [FAIL] {} uses unknown task: {}", entry.task, entry.reference));
        }
    }

    lines.push(String::new());
    let overall = if report.is_clean() { "PASSED" } else { "FAILED" };
    lines.push(format!("Result: {overall}"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::config::ReleaseConfig;
    use crate::pipeline::{build_tasks, Uses, EXTERNAL_TASKS};

    fn task(key: &str, uses: Uses) -> TaskDescriptor {
        TaskDescriptor { key: key.to_string(), uses, run: String::new(), env: BTreeMap::new() }
    }

    #[test]
    fn generated_tasks_are_clean() {
        let tasks = build_tasks(&ReleaseConfig::new("v1.0.0"));
        let report = check_tasks(&tasks, &EXTERNAL_TASKS);
        assert!(report.is_clean(), "{}", format_report(&report));
        assert_eq!(report.task_count, 14);
    }

    #[test]
    fn generated_tasks_need_externals() {
        let tasks = build_tasks(&ReleaseConfig::new("v1.0.0"));
        let report = check_tasks(&tasks, &[]);
        let missing: HashSet<&str> = report.unresolved.iter().map(|u| u.reference.as_str()).collect();
        assert_eq!(missing, HashSet::from(EXTERNAL_TASKS));
    }

    #[test]
    fn reports_duplicate_keys_once() {
        let tasks = vec![
            task("a", "setup-nix".into()),
            task("a", "setup-nix".into()),
            task("a", "setup-nix".into()),
        ];
        let report = check_tasks(&tasks, &EXTERNAL_TASKS);
        assert_eq!(report.duplicate_keys, vec!["a"]);
        assert!(!report.is_clean());
    }

    #[test]
    fn reports_unresolved_reference() {
        let tasks = vec![
            task("build", "setup-nix".into()),
            task("upload", Uses::Many(vec!["build".to_string(), "notarize".to_string()])),
        ];
        let report = check_tasks(&tasks, &EXTERNAL_TASKS);
        assert_eq!(
            report.unresolved,
            vec![UnresolvedReference {
                task: "upload".to_string(),
                reference: "notarize".to_string()
            }]
        );
    }

    #[test]
    fn report_lists_failures() {
        let tasks = vec![task("upload", "missing".into())];
        let text = format_report(&check_tasks(&tasks, &EXTERNAL_TASKS));
        assert!(text.contains("[FAIL] upload uses unknown task: missing"));
        assert!(text.contains("[PASS] task keys are unique"));
        assert!(text.ends_with("Result: FAILED"));
    }
}
