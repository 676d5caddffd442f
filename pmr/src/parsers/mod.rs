pub mod requirements;

pub use requirements::RequirementsParser;

// Re-export ManifestIndex from core for use by parsers
pub use minreqs_core::ManifestIndex;

use std::path::Path;

/// Trait for manifest parsers
pub trait ManifestParser {
    /// Build an index from manifest text
    fn index(&self, content: &str) -> ManifestIndex;

    /// Read a manifest file and index it
    fn index_file(&self, path: &Path) -> anyhow::Result<ManifestIndex>;
}
