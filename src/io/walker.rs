use crate::core::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension of observation files produced by classifiers.
pub const OBSERVATION_EXTENSION: &str = "jsonl";

pub struct FileWalker {
    root: PathBuf,
    extension: String,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: OBSERVATION_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Files under the root with the configured extension, sorted. A root
    /// that is itself a file is returned as-is regardless of extension.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                match e.into_io_error() {
                    Some(source) => Error::file_system("Failed to walk directory", path, source),
                    None => Error::FileSystem {
                        message: "Filesystem loop while walking directory".to_string(),
                        path: Some(path),
                        source: None,
                    },
                }
            })?;
            let path = entry.path();
            if entry.file_type().is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy() == self.extension)
            .unwrap_or(false)
    }
}

/// Expand every root into the observation files beneath it, without
/// duplicates.
pub fn find_observation_files(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in roots {
        files.extend(FileWalker::new(root.clone()).walk()?);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_walk_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("a.jsonl"), "").unwrap();
        fs::write(dir.path().join("nested/b.jsonl"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = FileWalker::new(dir.path().to_path_buf()).walk().unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.jsonl"), dir.path().join("nested/b.jsonl")]
        );
    }

    #[test]
    fn test_explicit_file_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("unit.json");
        fs::write(&file, "").unwrap();

        assert_eq!(FileWalker::new(file.clone()).walk().unwrap(), vec![file]);
    }

    #[test]
    fn test_overlapping_roots_are_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.jsonl");
        fs::write(&file, "").unwrap();

        let files = find_observation_files(&[dir.path().to_path_buf(), file.clone()]).unwrap();
        assert_eq!(files, vec![file]);
    }
}
