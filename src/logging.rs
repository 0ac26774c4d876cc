use simplelog::*;
use std::fs::{self, OpenOptions};
use std::io::{Error, ErrorKind};
use std::path::PathBuf;

/// `$HOME/.local/share/synthtuner/logs`
pub fn log_dir() -> Result<PathBuf, Error> {
    let home = std::env::var("HOME")
        .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not set"))?;

    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("synthtuner")
        .join("logs"))
}

pub fn init_logger(level: LevelFilter) -> Result<(), Error> {
    let log_dir = log_dir()?;
    fs::create_dir_all(&log_dir)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("synthtuner.log"))?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .build();

    CombinedLogger::init(vec![WriteLogger::new(level, config, log_file)])
        .map_err(|e| Error::new(ErrorKind::Other, format!("Logger initialization failed: {}", e)))
}
