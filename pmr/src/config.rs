use minreqs_core::ResolverConfig;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Project-level settings from the `[tool.pmr]` table of pyproject.toml
///
/// ```toml
/// [tool.pmr]
/// aliases = { yaml = "PyYAML", jwt = "PyJWT" }
/// stdlib = ["local_helpers"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Extra import name -> distribution name mappings
    pub aliases: BTreeMap<String, String>,
    /// Extra module names to treat as never needing a manifest entry
    pub stdlib: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: Tool,
}

#[derive(Debug, Default, Deserialize)]
struct Tool {
    #[serde(default)]
    pmr: Option<ProjectConfig>,
}

impl ProjectConfig {
    /// Load `[tool.pmr]` from `<project>/pyproject.toml`, if present
    pub fn load(project_path: &Path) -> Result<Self, ConfigError> {
        let path = project_path.join("pyproject.toml");
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        Self::from_pyproject(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Extract `[tool.pmr]` from pyproject.toml content
    pub fn from_pyproject(content: &str) -> Result<Self, toml::de::Error> {
        let pyproject: PyProject = toml::from_str(content)?;
        Ok(pyproject.tool.pmr.unwrap_or_default())
    }

    /// Built-in resolver data extended with these settings
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig::default()
            .with_aliases(self.aliases.clone())
            .with_stdlib(self.stdlib.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_pyproject_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_pyproject_without_tool_table() {
        let config = ProjectConfig::from_pyproject(
            r#"
[project]
name = "demo"
dependencies = ["requests"]
"#,
        )
        .unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_pyproject_other_tools_ignored() {
        let config = ProjectConfig::from_pyproject(
            r#"
[tool.black]
line-length = 100

[tool.pmr]
stdlib = ["helpers"]
"#,
        )
        .unwrap();
        assert_eq!(config.stdlib, vec!["helpers"]);
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn test_aliases_and_stdlib_merge_into_resolver_config() {
        let config = ProjectConfig::from_pyproject(
            r#"
[tool.pmr]
aliases = { jwt = "PyJWT", cv2 = "opencv-python" }
stdlib = ["local_helpers"]
"#,
        )
        .unwrap();

        let resolver_config = config.resolver_config();
        assert_eq!(resolver_config.alias("jwt"), Some("PyJWT"));
        assert_eq!(resolver_config.alias("cv2"), Some("opencv-python"));
        assert_eq!(resolver_config.alias("bs4"), Some("beautifulsoup4"));
        assert!(resolver_config.is_stdlib("local_helpers"));
        assert!(resolver_config.is_stdlib("os"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = ProjectConfig::from_pyproject("[tool.pmr]\nalias = {}\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_pyproject() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("pyproject.toml"), "[tool.pmr\n").unwrap();

        let err = ProjectConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
