use crate::freeze::ManifestSource;
use clap::Parser;
use std::path::PathBuf;

/// Generate a minimal requirements.txt from the imports your Python scripts use
#[derive(Parser, Debug, Clone)]
#[command(name = "pmr")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to project directory (defaults to current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Read the master manifest from this file instead of running `pip freeze`
    #[arg(short, long, value_name = "FILE")]
    pub requirements: Option<PathBuf>,

    /// pip executable used to list installed packages
    #[arg(long, value_name = "CMD", default_value = "pip")]
    pub pip: String,

    /// Scan only these source files instead of walking the project (repeatable)
    #[arg(short, long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Leave this file out of the scan (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "FILE")]
    pub excludes: Vec<PathBuf>,

    /// Destination file, relative to the project directory
    #[arg(short, long, value_name = "FILE", default_value = "requirements.txt")]
    pub output: PathBuf,

    /// Show how each imported module was resolved
    #[arg(short, long)]
    pub explain: bool,

    /// Print the result instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

impl Args {
    /// Get the project path, defaulting to current directory
    pub fn project_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Where the output file goes
    pub fn output_path(&self) -> PathBuf {
        self.project_path().join(&self.output)
    }

    /// Where the master manifest comes from
    pub fn manifest_source(&self) -> ManifestSource {
        match &self.requirements {
            Some(path) => ManifestSource::File(path.clone()),
            None => ManifestSource::PipFreeze {
                pip: self.pip.clone(),
            },
        }
    }
}
