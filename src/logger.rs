use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, Sink, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger};

use crate::config::{Config, Log, LogLevel};

impl LogLevel {
    fn level(self) -> Level {
        match self {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

/// Info and below go to stdout, warnings and errors to stderr.
fn console_sink(stream: StdStream) -> spdlog::Result<Arc<dyn Sink>> {
    let filter = match stream {
        StdStream::Stderr => LevelFilter::MoreSevereEqual(Level::Warn),
        _ => LevelFilter::MoreVerbose(Level::Warn),
    };
    let sink = StdStreamSink::builder()
        .std_stream(stream)
        .level_filter(filter)
        .build()?;
    Ok(Arc::new(sink))
}

fn daily_file_sink(location: &std::path::Path) -> spdlog::Result<Arc<dyn Sink>> {
    let sink = RotatingFileSink::builder()
        .base_path(location)
        .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
        .max_files(60)
        .rotate_on_open(false)
        .build()?;
    Ok(Arc::new(sink))
}

/// A file sink when `location` is set, console sinks when asked for or when there is nowhere else to write.
pub fn build_logger(log: &Log) -> spdlog::Result<Arc<Logger>> {
    let mut builder = Logger::builder();

    if let Some(ref location) = log.location {
        builder.sink(daily_file_sink(location)?);
    }

    if log.log_to_console || log.location.is_none() {
        builder.sink(console_sink(StdStream::Stdout)?);
        builder.sink(console_sink(StdStream::Stderr)?);
    }

    let logger = Arc::new(builder.build()?);
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    logger.set_flush_period(Some(Duration::from_secs(2)));
    logger.set_level_filter(LevelFilter::MoreSevereEqual(log.level.level()));

    Ok(logger)
}

/// Installs the default logger described by `[log]`. Without it, spdlog's console logger stays.
pub fn configure_logger(config: &Config) -> spdlog::Result<()> {
    let Some(ref log) = config.log else {
        return Ok(());
    };

    spdlog::set_default_logger(build_logger(log)?);
    Ok(())
}
