use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names that hold installed packages or tooling state, not project sources
const SKIPPED_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".tox",
    ".nox",
    ".venv",
    "venv",
    "__pycache__",
    "site-packages",
    "node_modules",
];

/// Finds Python source files under a project directory
pub struct SourceDetector {
    project_path: PathBuf,
    excluded: Vec<PathBuf>,
}

impl SourceDetector {
    pub fn new(project_path: PathBuf) -> Self {
        Self {
            project_path,
            excluded: Vec::new(),
        }
    }

    /// Leave `path` out of the results
    pub fn exclude(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.excluded.push(canonical(&path));
        self
    }

    /// Walk the project tree and return every `.py` file, sorted by path
    pub fn detect(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(&self.project_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !Self::is_skipped_dir(entry));

        for entry in walker {
            let entry = entry.with_context(|| {
                format!("Failed to walk {}", self.project_path.display())
            })?;

            if !entry.file_type().is_file() || !Self::is_python_source(entry.path()) {
                continue;
            }

            let path = entry.into_path();
            if self.excluded.contains(&canonical(&path)) {
                continue;
            }
            files.push(path);
        }

        Ok(files)
    }

    fn is_skipped_dir(entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| SKIPPED_DIRS.contains(&name))
    }

    fn is_python_source(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "py")
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
