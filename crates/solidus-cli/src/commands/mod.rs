pub mod generate;
pub mod init;
pub mod watch;

use anyhow::Result;
use colored::Colorize;
use solidus::config::{GeneratorConfig, ProjectConfig, CONFIG_FILE};
use solidus::PassReport;

use crate::GenerateOptions;

/// Merges defaults, the config file, and command-line overrides, then
/// resolves the remaining relative paths against the project root.
pub(crate) fn resolve_config(options: &GenerateOptions) -> Result<GeneratorConfig> {
    let mut config = match &options.config {
        // An explicitly named config file has to exist.
        Some(path) => ProjectConfig::from_file(path)?.generate,
        None => ProjectConfig::load_or_default(&options.root.join(CONFIG_FILE))?.generate,
    };

    if let Some(input) = &options.input {
        config.input = input.clone();
    }
    if let Some(output) = &options.output {
        config.output = output.clone();
    }
    if let Some(class_name) = &options.class_name {
        config.class_name = class_name.clone();
    }

    Ok(config.resolved_against(&options.root))
}

/// Prints the outcome of a successful pass.
pub(crate) fn print_report(report: &PassReport) {
    for rejected in &report.rejected {
        println!(
            "  {} Skipped {}: {}",
            "⚠".yellow(),
            rejected.source_path.cyan(),
            rejected.reason
        );
    }
    println!(
        "{} Wrote {} ({} route{})",
        "✓".green(),
        report.output.display().to_string().cyan(),
        report.routes,
        if report.routes == 1 { "" } else { "s" }
    );
}
