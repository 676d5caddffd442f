pub mod cli;
pub mod config;
pub mod detector;
pub mod extractor;
pub mod freeze;
pub mod output;
pub mod parsers;

// Re-export core types for convenience
pub use minreqs_core::{
    ImportedModules, ManifestIndex, ModuleResolution, Outcome, Resolution, ResolutionRenderer,
    Resolver, ResolverConfig,
};
