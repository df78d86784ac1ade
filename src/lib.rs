pub mod config;
pub mod error_utils;
pub mod loader;
pub mod report;
pub mod targets;
pub mod validation;

use tracing::debug;

pub use config::RunConfig;
pub use report::{Findings, Outcome, Summary};

/// Validate every asset under the configured project root
pub fn run(config: &RunConfig) -> Findings {
    debug!("Validating assets under {:?}", config.project_root);
    validation::Validator::new(&config.project_root).validate_all()
}
