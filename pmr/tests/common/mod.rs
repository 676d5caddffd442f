use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a temporary project directory
pub struct TempProject {
    pub dir: TempDir,
}

impl TempProject {
    /// Create a new temporary project
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        Self { dir }
    }

    /// Get the path to the project directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file in the project with the given content
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let file_path = self.dir.path().join(relative_path);

        // Create parent directories if needed
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Get the absolute path to a file in the project
    pub fn file_path(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Read a file in the project
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.file_path(relative_path)).expect("Failed to read file")
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Name of the master manifest fixture inside each project
pub const FREEZE_FILE: &str = "freeze.txt";

/// A `pip freeze`-style master manifest
pub fn sample_freeze_txt() -> &'static str {
    r#"beautifulsoup4==4.12.2
Flask==2.0
numpy==1.26
opencv-contrib-python==4.8.0
Pillow==10.0.0
requests==2.31
scikit-learn==1.3.0
"#
}

/// A script using flask, requests and a stdlib module
pub fn sample_app_py() -> &'static str {
    r#"import os
import json

from flask import Flask
import requests

app = Flask(__name__)
"#
}

/// A script using computer vision packages through their import aliases
pub fn sample_vision_py() -> &'static str {
    r#"import json
import requests

def load(path):
    import cv2
    from PIL import Image
    return cv2.imread(path), Image.open(path)
"#
}

/// Create a TempProject with two scripts and a master manifest
pub fn create_temp_project_with_scripts() -> TempProject {
    let project = TempProject::new();
    project.create_file(FREEZE_FILE, sample_freeze_txt());
    project.create_file("app.py", sample_app_py());
    project.create_file("tools/vision.py", sample_vision_py());
    project
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_project_creation() {
        let project = TempProject::new();
        assert!(project.path().exists());
        assert!(project.path().is_dir());
    }

    #[test]
    fn test_create_file_with_subdirs() {
        let project = TempProject::new();
        project.create_file("subdir/test.py", "import os\n");

        assert_eq!(project.read_file("subdir/test.py"), "import os\n");
    }
}
