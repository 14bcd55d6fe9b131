//! File logger setup.
//!
//! Installed before config is read so config warnings reach the log file.
//! The level starts at `DEFAULT_LOG_LEVEL` and is narrowed with
//! `log::set_max_level` once the resolved config is known.

use log::SetLoggerError;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use crate::core::config::DEFAULT_LOG_LEVEL;

pub const LOG_FILE: &str = "storefront-nav.log";

pub fn init(log_file: File) -> Result<(), SetLoggerError> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(DEFAULT_LOG_LEVEL, log_config, log_file)
}
