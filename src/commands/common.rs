//! Outcome reporting shared by the pipeline handlers.

use std::path::PathBuf;

use tracing::{error, info};

use crate::{catalog::Catalog, Result};

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Catalog written to `path`
    Saved { path: PathBuf, total: usize },
    /// Not attempted, e.g. a required credential is missing
    Skipped { reason: String },
    /// Fetch, transform or persist failed; nothing was written
    Failed { message: String },
}

impl PipelineOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, PipelineOutcome::Saved { .. })
    }
}

/// Log the result of a run and turn it into an outcome.
pub fn report<E>(label: &str, path: PathBuf, result: Result<Catalog<E>>) -> PipelineOutcome {
    match result {
        Ok(catalog) => {
            info!("{}: saved {} entries to {}", label, catalog.total_count(), path.display());
            for (name, count) in catalog.summary() {
                info!("  - {}: {}", name, count);
            }
            PipelineOutcome::Saved {
                path,
                total: catalog.total_count(),
            }
        }
        Err(e) => {
            error!("{}: {}", label, e);
            PipelineOutcome::Failed {
                message: e.to_string(),
            }
        }
    }
}
