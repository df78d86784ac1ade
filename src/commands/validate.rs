use anyhow::Result;
use dq_validate::{Outcome, RunConfig};
use std::process::ExitCode;
use tracing::info;

pub fn validate_command(config: &RunConfig) -> Result<ExitCode> {
    let findings = dq_validate::run(config);
    let outcome = findings.outcome(config.strict_references);

    print!("{}", findings.render(config.strict_references));

    if outcome == Outcome::Failed && findings.errors.is_empty() {
        info!("Failing on unresolved rule references (--strict-references)");
    }

    Ok(ExitCode::from(outcome.exit_code()))
}
