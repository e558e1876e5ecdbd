use crate::config::Config;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config as LoggerConfig, Root};
use log4rs::Handle;

const STDERR_APPENDER: &str = "stderr";

/// Installs the global logger. Standard output is left to the certificate summaries.
pub fn init_logs(config: &Config) -> anyhow::Result<Handle> {
    let logger_config = build_logger_config(config)?;
    Ok(log4rs::init_config(logger_config)?)
}

pub fn build_logger_config(config: &Config) -> Result<LoggerConfig, ConfigErrors> {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();

    LoggerConfig::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(config.log_level))
}
