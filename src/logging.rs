//! Logging glue.
//!
//! With the `logging` feature the session reports through the `log`
//! facade; without it the macros below expand to nothing.

/// Environment variable holding the binary's log level.
pub const LOG_ENV_VAR: &str = "SIMPLE_CHESS_LOG";

#[cfg(feature = "logging")]
macro_rules! debug {
    ($($arg:tt)+) => { log::debug!($($arg)+) };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::std::format!($($arg)+);
        }
    }};
}

#[cfg(feature = "logging")]
macro_rules! info {
    ($($arg:tt)+) => { log::info!($($arg)+) };
}

#[cfg(not(feature = "logging"))]
macro_rules! info {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::std::format!($($arg)+);
        }
    }};
}

pub(crate) use debug;
pub(crate) use info;

#[cfg(feature = "logging")]
mod stderr {
    use log::{LevelFilter, Log, Metadata, Record};

    struct StderrLogger;

    static LOGGER: StderrLogger = StderrLogger;

    impl Log for StderrLogger {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record<'_>) {
            if self.enabled(record.metadata()) {
                eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
            }
        }

        fn flush(&self) {}
    }

    /// Parse a level name (`off`, `error` .. `trace`); anything else is `Off`.
    pub fn level_from_str(value: Option<&str>) -> LevelFilter {
        value
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(LevelFilter::Off)
    }

    /// Install the stderr logger at the level named by `SIMPLE_CHESS_LOG`.
    ///
    /// Returns an error if another logger is already installed.
    pub fn init_from_env() -> Result<(), log::SetLoggerError> {
        let level = level_from_str(std::env::var(super::LOG_ENV_VAR).ok().as_deref());
        log::set_logger(&LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }

}

#[cfg(feature = "logging")]
pub use stderr::{init_from_env, level_from_str};
