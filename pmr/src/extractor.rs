use colored::Colorize;
use minreqs_core::ImportedModules;
use rustpython_parser::{Parse, ast};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Imports gathered from a set of source files
#[derive(Debug, Clone, Default)]
pub struct ImportScan {
    /// Root module names across all scanned files
    pub modules: ImportedModules,
    /// Files that were scanned successfully
    pub scanned: Vec<PathBuf>,
    /// Requested files that did not exist
    pub missing: Vec<PathBuf>,
}

/// Extracts imported root module names from Python sources
pub struct ImportExtractor;

impl ImportExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Scan every path and merge the imports found.
    ///
    /// Missing files produce a warning and are skipped. A file that does not
    /// parse aborts the whole scan.
    pub fn collect(&self, paths: &[PathBuf]) -> Result<ImportScan, ExtractError> {
        let mut scan = ImportScan::default();

        for path in paths {
            if !path.exists() {
                eprintln!(
                    "{} {} not found, skipping.",
                    "Warning:".yellow(),
                    path.display()
                );
                scan.missing.push(path.clone());
                continue;
            }

            let modules = self.extract_file(path)?;
            scan.modules.extend(modules);
            scan.scanned.push(path.clone());
        }

        Ok(scan)
    }

    /// Read and scan a single file
    pub fn extract_file(&self, path: &Path) -> Result<ImportedModules, ExtractError> {
        let source = fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        extract_imports(&source, path)
    }
}

impl Default for ImportExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse Python source and return the root name of every imported module
///
/// The grammar is that of Python 3.11 plus PEP 695 type parameters. PEP 701
/// f-strings that reuse their own quote inside a replacement field are
/// reported as parse errors.
pub fn extract_imports(source: &str, path: &Path) -> Result<ImportedModules, ExtractError> {
    let suite = ast::Suite::parse(source, &path.to_string_lossy()).map_err(|e| {
        ExtractError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    let mut modules = ImportedModules::new();
    visit_body(&suite, &mut modules);
    Ok(modules)
}

/// First dot-separated segment of a module path
fn root_module(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

fn visit_body(body: &[ast::Stmt], modules: &mut ImportedModules) {
    for stmt in body {
        visit_stmt(stmt, modules);
    }
}

fn visit_stmt(stmt: &ast::Stmt, modules: &mut ImportedModules) {
    match stmt {
        ast::Stmt::Import(ast::StmtImport { names, .. }) => {
            for alias in names {
                modules.insert(root_module(alias.name.as_str()).to_string());
            }
        }
        ast::Stmt::ImportFrom(ast::StmtImportFrom { module, .. }) => {
            // `from . import x` has no module and records nothing
            if let Some(module) = module {
                let root = root_module(module.as_str());
                if !root.is_empty() {
                    modules.insert(root.to_string());
                }
            }
        }
        ast::Stmt::FunctionDef(ast::StmtFunctionDef { body, .. })
        | ast::Stmt::AsyncFunctionDef(ast::StmtAsyncFunctionDef { body, .. })
        | ast::Stmt::ClassDef(ast::StmtClassDef { body, .. })
        | ast::Stmt::With(ast::StmtWith { body, .. })
        | ast::Stmt::AsyncWith(ast::StmtAsyncWith { body, .. }) => visit_body(body, modules),
        ast::Stmt::For(ast::StmtFor { body, orelse, .. })
        | ast::Stmt::AsyncFor(ast::StmtAsyncFor { body, orelse, .. })
        | ast::Stmt::While(ast::StmtWhile { body, orelse, .. })
        | ast::Stmt::If(ast::StmtIf { body, orelse, .. }) => {
            visit_body(body, modules);
            visit_body(orelse, modules);
        }
        ast::Stmt::Try(ast::StmtTry {
            body,
            handlers,
            orelse,
            finalbody,
            ..
        })
        | ast::Stmt::TryStar(ast::StmtTryStar {
            body,
            handlers,
            orelse,
            finalbody,
            ..
        }) => {
            visit_body(body, modules);
            for handler in handlers {
                let ast::ExceptHandler::ExceptHandler(handler) = handler;
                visit_body(&handler.body, modules);
            }
            visit_body(orelse, modules);
            visit_body(finalbody, modules);
        }
        ast::Stmt::Match(ast::StmtMatch { cases, .. }) => {
            for case in cases {
                visit_body(&case.body, modules);
            }
        }
        _ => {}
    }
}
