use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to the computed requirements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    /// Printed to stdout; nothing was written
    Printed,
    /// Written to a new file
    Written(PathBuf),
}

/// Write `rendered` to `destination` unless it already exists.
///
/// An existing destination is never touched; the result is printed instead so
/// it can still be inspected.
pub fn emit(rendered: &str, destination: &Path, force_stdout: bool) -> Result<Emitted> {
    if force_stdout {
        println!("{rendered}");
        return Ok(Emitted::Printed);
    }

    if destination.exists() {
        println!(
            "{} already exists! Delete it to generate a new one. Here is the output though:",
            destination.display().to_string().yellow()
        );
        println!("{rendered}");
        return Ok(Emitted::Printed);
    }

    fs::write(destination, rendered)
        .with_context(|| format!("Failed to write {}", destination.display()))?;
    println!("Saved to {}", destination.display());

    Ok(Emitted::Written(destination.to_path_buf()))
}
