//! log4rs setup. Everything goes to stderr so stdout only carries results.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

const PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} {M} - {m}{n}";

/// Logger configuration writing to stderr at `level`.
pub fn log_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Install the global logger.
pub fn init_logging(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    log4rs::init_config(log_config(level)?)?;
    log::debug!("logging initialised at {level}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_levels() {
        for level in [LevelFilter::Warn, LevelFilter::Trace] {
            let config = log_config(level).unwrap();
            assert_eq!(config.root().level(), level);
            assert_eq!(config.appenders().len(), 1);
        }
    }
}
