use std::io;

use clap::Parser;
use config_engine::ConfigEngine;
use error_common::{log_error, Result};
use tracing::debug;

use ops_cli::{init_tracing, run, Cli};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConfigEngine::new().with_file(&cli.config).load()?;
    let config = cli.apply_overrides(config)?;

    init_tracing(&config.log)?;
    debug!(config_file = %cli.config.display(), command = ?cli.command, "Starting rustcare-risk");

    let mut stdout = io::stdout().lock();
    if let Err(err) = run(&cli, config, &mut stdout) {
        log_error("rustcare-risk", &err);
        return Err(err);
    }
    Ok(())
}
