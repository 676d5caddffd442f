use super::{ManifestIndex, ManifestParser};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parser for pip-style requirement lines (`pip freeze` output, requirements.txt)
pub struct RequirementsParser;

impl RequirementsParser {
    pub fn new() -> Self {
        Self
    }

    /// Reduce a single manifest line to its bare package name
    ///
    /// Cuts the trimmed line at the first `==`, then at the first `@`, then at
    /// the first space. Extras such as `pkg[extra]` are left in place.
    pub fn bare_name(line: &str) -> Option<&str> {
        let line = line.trim();

        let name = Self::before(line, "==");
        let name = Self::before(name, "@");
        let name = Self::before(name, " ");
        let name = name.trim();

        if name.is_empty() { None } else { Some(name) }
    }

    fn before<'a>(text: &'a str, marker: &str) -> &'a str {
        text.split_once(marker).map_or(text, |(head, _)| head)
    }
}

impl Default for RequirementsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestParser for RequirementsParser {
    fn index(&self, content: &str) -> ManifestIndex {
        let mut index = ManifestIndex::new();

        for line in content.split('\n') {
            if let Some(name) = Self::bare_name(line) {
                // Later lines overwrite earlier ones with the same name
                index.insert(name, line.trim());
            }
        }

        index
    }

    fn index_file(&self, path: &Path) -> Result<ManifestIndex> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read requirements file: {}", path.display()))?;

        Ok(self.index(&content))
    }
}
