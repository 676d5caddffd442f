use std::collections::{BTreeSet, HashMap};

/// Root module names collected across every scanned file
pub type ImportedModules = BTreeSet<String>;

/// Maps a lower-cased bare package name to its original manifest line
///
/// Inserting a name that is already present replaces the earlier line, so the
/// last occurrence in a manifest wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestIndex {
    entries: HashMap<String, String>,
}

impl ManifestIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `line` under the lower-cased form of `name`
    pub fn insert(&mut self, name: &str, line: impl Into<String>) {
        self.entries.insert(name.to_lowercase(), line.into());
    }

    /// Case-insensitive lookup of the original line for a package
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(lower-cased name, original line)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, line)| (name.as_str(), line.as_str()))
    }
}

/// How a single imported module was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Part of the standard library; never needs a manifest entry
    Stdlib,
    /// Found in the manifest
    Matched {
        /// Name used for the lookup (after alias translation)
        package: String,
        /// Original manifest line
        line: String,
        /// Whether the alias table translated the import name
        aliased: bool,
    },
    /// No manifest entry for this package
    Unresolved { package: String },
}

/// Resolution of one imported module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleResolution {
    pub module: String,
    pub outcome: Outcome,
}

/// Result of resolving a set of imports against a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Per-module outcomes, ordered by module name
    pub modules: Vec<ModuleResolution>,
    /// Distinct original manifest lines that are actually needed
    pub requirements: BTreeSet<String>,
}

impl Resolution {
    /// The minimal requirement lines in lexicographic order
    pub fn minimal_requirements(&self) -> Vec<String> {
        self.requirements.iter().cloned().collect()
    }

    /// Newline-joined minimal requirements, without a trailing newline
    pub fn render(&self) -> String {
        self.minimal_requirements().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Modules that were neither stdlib nor found in the manifest
    pub fn unresolved(&self) -> impl Iterator<Item = &ModuleResolution> {
        self.modules
            .iter()
            .filter(|m| matches!(m.outcome, Outcome::Unresolved { .. }))
    }
}
