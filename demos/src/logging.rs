//! File logging. The terminal belongs to the UI, so nothing goes to stdout.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

use crate::config::Config;

const MAX_LOG_FILE_SIZE: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Start logging to `<log_dir>/<log_file>*.log`. Keep the handle alive for
/// the lifetime of the program and call [`LoggerHandle::flush`] before exit.
pub fn init(config: &Config) -> Result<LoggerHandle, Box<dyn std::error::Error>> {
    let handle = Logger::try_with_str(&config.log_level)?
        .log_to_file(
            FileSpec::default()
                .basename(&config.log_file)
                .directory(&config.log_dir),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()?;

    log::info!("logging to {}/{}", config.log_dir, config.log_file);
    Ok(handle)
}
