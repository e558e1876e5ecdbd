mod cli;
mod config;
mod logging;

use crate::config::Config;
use anyhow::Context as _;
use ldif_certs::{summarize_dump, OpensslStyle};
use std::io;

fn main() -> anyhow::Result<()> {
    let matches = cli::app().get_matches();
    let conf = Config::startup_init(&matches)?;

    if matches.is_present(cli::ARG_SHOW_CONFIG) {
        println!("{:#?}", conf);
        return Ok(());
    }

    let _log_handle = logging::init_logs(&conf)?;

    log::info!("summarizing certificates of {}", conf.input.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = summarize_dump(&conf.input, conf.on_error, &OpensslStyle, &mut out)
        .with_context(|| format!("failed to summarize {}", conf.input.display()))?;

    log::info!(
        "{} certificate(s) found, {} printed, {} skipped",
        report.extracted,
        report.printed,
        report.skipped
    );

    Ok(())
}
