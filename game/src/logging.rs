//! Console logging through `log4rs`.

use std::error::Error;

use log::LevelFilter;
use log4rs::{
    Handle,
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

pub const LOG_PATTERN: &str = "{d(%H:%M:%S)} {l} {t} - {m}{n}";
pub const LOG_ENV: &str = "OMBLOCKS_LOG";

/// `error|warn|info|debug|trace|off`, case-insensitive. Anything else means `Info`.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

pub fn level_from_env() -> LevelFilter {
    parse_level(std::env::var(LOG_ENV).ok().as_deref())
}

/// Installs the global logger, writing to stderr.
pub fn init_logging(level: LevelFilter) -> Result<Handle, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(log4rs::init_config(config)?)
}
