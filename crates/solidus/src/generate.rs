//! One generation pass: read the route tree, extract, emit, write.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::emit::emit_module;
use crate::error::GenerateError;
use crate::extract::{extract_routes, RejectedRoute};

/// Outcome of a completed generation pass.
#[derive(Debug)]
pub struct PassReport {
    /// Number of accessors written.
    pub routes: usize,
    /// Candidates that were scanned but rejected.
    pub rejected: Vec<RejectedRoute>,
    /// Where the module was written.
    pub output: PathBuf,
}

/// Drives Extractor → Emitter → atomic write for one configuration.
///
/// A `Generator` holds no state between passes; every pass re-reads the
/// input and rebuilds the route list from scratch, so concurrent or
/// back-to-back passes over the same input write the same bytes.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs one pass.
    ///
    /// A missing input file is reported as [`GenerateError::InputMissing`]
    /// without touching any previously generated output; stale-but-valid
    /// beats deleting a working file. Read and write failures abort the pass
    /// the same way. Rejected candidates never abort a pass; they ride along
    /// in the report.
    pub fn run_pass(&self) -> Result<PassReport, GenerateError> {
        let input = &self.config.input;
        if !input.exists() {
            warn!(input = %input.display(), "route tree missing, skipping generation");
            return Err(GenerateError::InputMissing {
                path: input.clone(),
            });
        }

        let text = fs::read_to_string(input).map_err(|source| GenerateError::ReadFailure {
            path: input.clone(),
            source,
        })?;

        let extraction = extract_routes(&text);
        let module = emit_module(&self.config.class_name, &extraction.routes);
        self.write_atomic(&module)?;

        debug!(
            routes = extraction.routes.len(),
            rejected = extraction.rejected.len(),
            output = %self.config.output.display(),
            "generation pass complete"
        );

        Ok(PassReport {
            routes: extraction.routes.len(),
            rejected: extraction.rejected,
            output: self.config.output.clone(),
        })
    }

    /// Writes through a temp file in the destination directory plus rename,
    /// so readers never observe a half-written module.
    fn write_atomic(&self, contents: &str) -> Result<(), GenerateError> {
        let output = &self.config.output;
        let write_err = |source: std::io::Error| GenerateError::WriteFailure {
            path: output.clone(),
            source,
        };

        let dir = output.parent().filter(|parent| !parent.as_os_str().is_empty());
        if let Some(dir) = dir {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let dir = dir.unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(contents.as_bytes()).map_err(write_err)?;
        tmp.persist(output).map_err(|persist| write_err(persist.error))?;
        Ok(())
    }
}
