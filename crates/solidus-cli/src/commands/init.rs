use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use solidus::config::CONFIG_FILE;

const CONFIG_TEMPLATE: &str = r#"# Solidus configuration.
# Every key is optional; the values below are the defaults.

[generate]
# Route-tree artifact scanned for `path:` literals.
input = "src/routeTree.gen.ts"

# Generated accessor module. Overwritten in full on every pass.
output = "src/routePaths.gen.ts"

# Name of the exported accessor class.
class_name = "RoutePaths"
"#;

pub fn execute(force: bool) -> Result<()> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!("'{}' already exists (use --force to overwrite)", CONFIG_FILE);
    }

    fs::write(path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE))?;

    println!("  {} {}", "✓".green(), CONFIG_FILE);
    println!();
    println!("Next steps:");
    println!("  solidus generate");
    println!("  solidus watch");
    println!();

    Ok(())
}
