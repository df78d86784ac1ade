use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use dq_validate::RunConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "dq-validate",
    about = "Validate data-quality rule, dataset and semantic-type assets",
    version,
    long_about = None
)]
struct Cli {
    /// Project root containing schemas/, rules/ and integrations/
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Fail validation if dataset/semantic files reference unknown rule IDs
    #[arg(long)]
    strict_references: bool,

    /// Trace every validated file (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = RunConfig::new(cli.project_root).with_strict_references(cli.strict_references);
    commands::validate_command(&config)
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("dq_validate=warn"),
        1 => EnvFilter::new("dq_validate=info"),
        _ => EnvFilter::new("dq_validate=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
