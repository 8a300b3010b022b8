#![deny(missing_docs)]
//! Logging macros for the wikitable2csv crates.
//!
//! Library code logs through `engine_*` so that every record carries the
//! calling module as its target; the binary filters on the `wikitable`
//! prefix. Only the binary installs a real logger.

#[doc(hidden)]
pub use log as __log;

/// Per-packet detail, such as streamed download progress.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {
        $crate::__log::trace!($($arg)*)
    };
}

/// Diagnostics shown with `--verbose`.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {
        $crate::__log::debug!($($arg)*)
    };
}

/// Progress messages shown unless `--silent` is given.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {
        $crate::__log::info!($($arg)*)
    };
}

/// A failure that ends the run.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {
        $crate::__log::error!($($arg)*)
    };
}

/// Sends `engine_*` records to stderr while tests run.
///
/// Calling it more than once is harmless; later calls keep the first logger.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

    let config = ConfigBuilder::new()
        .add_filter_allow_str("wikitable")
        .build();
    let _ = TermLogger::init(
        LevelFilter::Debug,
        config,
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}
