pub mod output;
pub mod resolver;
pub mod types;

// Re-export commonly used types at crate root
pub use output::ResolutionRenderer;
pub use resolver::{Resolver, ResolverConfig};
pub use types::{ImportedModules, ManifestIndex, ModuleResolution, Outcome, Resolution};
