//! Platform logging initialization for prompttune_app.
//!
//! The TUI owns the terminal, so logs go to `./prompttune.log` in the
//! current working directory.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Initialize the file logger. Logging stays disabled if the log file
/// cannot be created.
pub fn initialize() {
    let log_path = PathBuf::from("./prompttune.log");
    let file = match File::create(&log_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                log_path, err
            );
            return;
        }
    };

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let _ = WriteLogger::init(LevelFilter::Info, config, file);
}
