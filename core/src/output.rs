use crate::types::{ModuleResolution, Outcome, Resolution};
use colored::Colorize;

/// Renders how each imported module was resolved, one row per module
pub struct ResolutionRenderer {
    show_colors: bool,
}

impl ResolutionRenderer {
    pub fn new(show_colors: bool) -> Self {
        Self { show_colors }
    }

    /// Print the resolution table to stdout
    pub fn render(&self, resolution: &Resolution) {
        for line in self.render_lines(resolution) {
            println!("{line}");
        }
    }

    /// Build the table rows without printing them
    pub fn render_lines(&self, resolution: &Resolution) -> Vec<String> {
        if resolution.modules.is_empty() {
            return vec!["No imports found.".to_string()];
        }

        let max_module = resolution
            .modules
            .iter()
            .map(|m| m.module.len())
            .max()
            .unwrap_or(0);

        let mut lines = vec!["Imported modules:".to_string(), String::new()];
        lines.extend(
            resolution
                .modules
                .iter()
                .map(|m| self.format_row(m, max_module)),
        );
        lines
    }

    fn format_row(&self, resolution: &ModuleResolution, module_width: usize) -> String {
        let detail = match &resolution.outcome {
            Outcome::Stdlib => String::new(),
            Outcome::Matched {
                package,
                line,
                aliased,
            } => {
                if *aliased {
                    format!("{line}  (via {package})")
                } else {
                    line.clone()
                }
            }
            Outcome::Unresolved { package } => {
                if *package == resolution.module {
                    String::new()
                } else {
                    format!("(looked up {package})")
                }
            }
        };

        format!(
            "  {:<module_width$}  {:<10}  {}",
            resolution.module,
            self.format_status(&resolution.outcome),
            detail,
        )
        .trim_end()
        .to_string()
    }

    /// Format the status word with optional colors
    pub fn format_status(&self, outcome: &Outcome) -> String {
        let (word, painted) = match outcome {
            Outcome::Stdlib => ("stdlib", "stdlib".dimmed()),
            Outcome::Matched { .. } => ("required", "required".green()),
            Outcome::Unresolved { .. } => ("not found", "not found".yellow()),
        };

        if self.show_colors {
            painted.to_string()
        } else {
            word.to_string()
        }
    }
}
