use anyhow::Result;
use colored::Colorize;

use crate::GenerateOptions;

#[cfg(feature = "watch")]
pub fn execute(options: &GenerateOptions) -> Result<()> {
    use solidus::Generator;

    use crate::commands::resolve_config;

    let config = resolve_config(options)?;
    let generator = Generator::new(config);

    println!("{}", "Starting watch session...".green().bold());
    println!();

    // Initial pass; later passes ride on change notifications.
    run_pass(&generator);

    let input = generator.config().input.clone();
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async { crate::watcher::watch_input(&input, || run_pass(&generator)).await })?;

    println!();
    println!("{}", "Watch session ended".green());
    Ok(())
}

/// One pass inside the watch loop. Never propagates: every failure degrades
/// to a diagnostic so the session keeps running.
#[cfg(feature = "watch")]
fn run_pass(generator: &solidus::Generator) {
    use solidus::GenerateError;

    use crate::commands::print_report;

    match generator.run_pass() {
        Ok(report) => print_report(&report),
        Err(GenerateError::InputMissing { path }) => {
            println!(
                "{} Route tree not found at {}, waiting for it to appear",
                "⚠".yellow(),
                path.display().to_string().cyan()
            );
        }
        Err(err) => {
            eprintln!("{} Generation failed: {:#}", "❌".red(), anyhow::Error::new(err));
        }
    }
}

#[cfg(not(feature = "watch"))]
pub fn execute(_options: &GenerateOptions) -> Result<()> {
    println!("{}", "⚠ Watch mode not available".yellow());
    println!();
    println!("Watch mode requires the 'watch' feature.");
    println!("Rebuild with: cargo build --features watch");
    Ok(())
}
