//! log4rs initialization.
//!
//! The YAML file named by [`config::log_config_file`] wins unless `-v` was
//! given; otherwise a stderr console appender is built in code.

use crate::config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}]: ({M}) - {m}{n}";

/// Level selected by the number of `-v` flags.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Console configuration writing to stderr at `level`.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

pub fn init(verbose: u8) -> Result<(), Box<dyn Error>> {
    let file = config::log_config_file();
    if verbose == 0 && Path::new(&file).exists() {
        match log4rs::init_file(&file, Default::default()) {
            Ok(()) => {
                log::debug!("logging configured from {file}");
                return Ok(());
            }
            Err(e) => eprintln!("Error initializing log4rs from {file}: {e}"),
        }
    }
    log4rs::init_config(stderr_config(level_for(verbose))?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn test_stderr_config() {
        let config = stderr_config(LevelFilter::Debug).unwrap();
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert_eq!(config.appenders().len(), 1);
    }
}
