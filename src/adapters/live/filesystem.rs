//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = std::env::temp_dir().join("mint_release_tasks_live_fs_test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("tasks.yaml");

        LiveFileSystem.write(&path, "- key: a\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "- key: a\n");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
