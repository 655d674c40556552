//! Shared setup for the deck command-line tools.

use env_logger::{Builder, Env, Target};

/// Initialize logging to stdout.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default))
        .target(Target::Stdout)
        .format_timestamp(None)
        .init();
}
