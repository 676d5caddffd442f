use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use pmr::cli::Args;
use pmr::config::ProjectConfig;
use pmr::detector::SourceDetector;
use pmr::extractor::ImportExtractor;
use pmr::output::emit;
use pmr::parsers::{ManifestParser, RequirementsParser};
use pmr::{ResolutionRenderer, Resolver};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let project_path = args.project_path();

    // Validate project path exists
    if !project_path.exists() {
        anyhow::bail!("Project path does not exist: {}", project_path.display());
    }

    if !project_path.is_dir() {
        anyhow::bail!("Project path is not a directory: {}", project_path.display());
    }

    // 0. Load project configuration
    let config = ProjectConfig::load(&project_path)?;

    // 1. Collect the source files to scan
    let files = if args.files.is_empty() {
        let detector = args
            .excludes
            .iter()
            .fold(SourceDetector::new(project_path.clone()), |detector, path| {
                detector.exclude(path)
            });
        let files = detector.detect()?;

        if files.is_empty() {
            println!("No Python files found in {}", project_path.display());
            return Ok(());
        }
        files
    } else {
        args.files.clone()
    };

    println!("Found: {}\n", file_names(&files).join(", ").dimmed());

    // 2. Extract imports (a file that does not parse aborts the run)
    let scan = ImportExtractor::new().collect(&files)?;

    // 3. Index the master manifest
    let source = args.manifest_source();
    let manifest = source.read()?;
    let index = RequirementsParser::new().index(&manifest);

    if index.is_empty() {
        eprintln!(
            "{} no packages listed by {}",
            "Warning:".yellow(),
            source.describe()
        );
    }

    // 4. Resolve against the manifest
    let resolver = Resolver::new(config.resolver_config());
    let resolution = resolver.resolve(&scan.modules, &index);

    if args.explain {
        ResolutionRenderer::new(true).render(&resolution);
        println!();
    }

    // 5. Write or print the result
    emit(&resolution.render(), &args.output_path(), args.stdout)?;

    Ok(())
}

fn file_names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            f.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| f.display().to_string())
        })
        .collect()
}
