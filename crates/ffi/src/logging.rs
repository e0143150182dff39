// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "RCBLOB_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `fmt` subscriber filtered by [`LOG_ENV`].
///
/// Returns `false` when the process already has a global subscriber.
pub fn init() -> bool {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init().is_ok()
}

/// Install the library's log subscriber.
///
/// Returns 0 when installed, 1 when a subscriber was already present.
#[unsafe(no_mangle)]
pub extern "C" fn rcblob_init_logging() -> i32 {
	if init() { 0 } else { 1 }
}
