use std::sync::Once;

use log::{Level, Log, Metadata, Record};

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "flutter_embedder=trace"). With `target` unset, informational records go
/// to stdout and warnings and errors go to stderr; setting it sends every
/// record to that one target.
#[derive(Debug, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub target: Option<env_logger::Target>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info` so the
/// chosen resource paths are always visible. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let builder = |target: env_logger::Target| {
            let mut builder = env_logger::Builder::new();

            if let Some(filter) = &config.env_filter {
                builder.parse_filters(filter);
            } else if let Ok(filter) = std::env::var("RUST_LOG") {
                builder.parse_filters(&filter);
            } else {
                builder.filter_level(log::LevelFilter::Info);
            }

            builder.write_style(config.write_style);
            builder.target(target);
            builder
        };

        let result = match config.target {
            Some(target) => builder(target).try_init(),
            None => {
                let split = LevelSplit {
                    out: builder(env_logger::Target::Stdout).build(),
                    err: builder(env_logger::Target::Stderr).build(),
                };
                let max_level = split.out.filter();
                log::set_boxed_logger(Box::new(split)).map(|()| log::set_max_level(max_level))
            }
        };

        // The embedder may run alongside other loggers in tests/hosts.
        if result.is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

/// Failures go to stderr, everything else to stdout.
fn is_failure(level: Level) -> bool {
    level <= Level::Warn
}

struct LevelSplit {
    out: env_logger::Logger,
    err: env_logger::Logger,
}

impl Log for LevelSplit {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.out.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if is_failure(record.level()) {
            self.err.log(record);
        } else {
            self.out.log(record);
        }
    }

    fn flush(&self) {
        self.out.flush();
        self.err.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig {
            env_filter: Some("warn".to_string()),
            ..LoggingConfig::default()
        });
        init_logging(LoggingConfig::default());
        log::warn!("logger still usable");
    }

    #[test]
    fn only_warnings_and_errors_count_as_failures() {
        assert!(is_failure(Level::Error));
        assert!(is_failure(Level::Warn));
        assert!(!is_failure(Level::Info));
        assert!(!is_failure(Level::Debug));
        assert!(!is_failure(Level::Trace));
    }

    #[test]
    fn split_logger_routes_by_level() {
        let split = LevelSplit {
            out: env_logger::Builder::new()
                .filter_level(log::LevelFilter::Info)
                .target(env_logger::Target::Stdout)
                .build(),
            err: env_logger::Builder::new()
                .filter_level(log::LevelFilter::Info)
                .target(env_logger::Target::Stderr)
                .build(),
        };

        let info = Metadata::builder().level(Level::Info).target("flutter_embedder").build();
        let debug = Metadata::builder().level(Level::Debug).target("flutter_embedder").build();
        assert!(split.enabled(&info));
        assert!(!split.enabled(&debug));
    }
}
