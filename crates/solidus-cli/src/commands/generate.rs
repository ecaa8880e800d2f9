use anyhow::Result;
use colored::Colorize;
use solidus::{GenerateError, Generator};

use crate::commands::{print_report, resolve_config};
use crate::GenerateOptions;

pub fn execute(options: &GenerateOptions) -> Result<()> {
    let config = resolve_config(options)?;
    let generator = Generator::new(config);

    match generator.run_pass() {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        // A route tree that has not been generated yet is tolerated; the
        // next pass will pick it up.
        Err(GenerateError::InputMissing { path }) => {
            println!(
                "{} Route tree not found at {}, nothing generated",
                "⚠".yellow(),
                path.display().to_string().cyan()
            );
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
