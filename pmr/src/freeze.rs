use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

/// Where the master manifest text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// Output of `<pip> freeze`
    PipFreeze { pip: String },
    /// An existing requirements file
    File(PathBuf),
}

impl ManifestSource {
    /// Obtain the full manifest text. The command runs exactly once.
    pub fn read(&self) -> Result<String> {
        match self {
            ManifestSource::PipFreeze { pip } => run_pip_freeze(pip),
            ManifestSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read requirements file: {}", path.display())),
        }
    }

    /// Short human-readable description for status lines
    pub fn describe(&self) -> String {
        match self {
            ManifestSource::PipFreeze { pip } => format!("{pip} freeze"),
            ManifestSource::File(path) => path.display().to_string(),
        }
    }
}

fn run_pip_freeze(pip: &str) -> Result<String> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Running {pip} freeze..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = Command::new(pip).arg("freeze").output();
    spinner.finish_and_clear();

    let output = output.with_context(|| format!("Failed to run `{pip} freeze`"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "`{pip} freeze` exited with {}: {}",
            output.status,
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
