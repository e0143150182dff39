// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::sync::OnceLock;

use rcblob_locator::ResourceSource;

pub(crate) type HostSource = dyn ResourceSource + Send + Sync;

static SOURCE: OnceLock<Box<HostSource>> = OnceLock::new();

/// Source backing the exported entry points, opened on first use.
pub(crate) fn source() -> &'static HostSource {
	SOURCE.get_or_init(open).as_ref()
}

#[cfg(windows)]
fn open() -> Box<HostSource> {
	tracing::debug!("reading resources from the module containing this library");
	Box::new(rcblob_locator::Win32Source::current())
}

#[cfg(not(windows))]
fn open() -> Box<HostSource> {
	use rcblob_locator::{DirectorySource, MemorySource};

	const RESOURCE_DIR_ENV: &str = "RCBLOB_RESOURCE_DIR";

	match std::env::var_os(RESOURCE_DIR_ENV) {
		Some(dir) => {
			let source = DirectorySource::new(dir);
			tracing::debug!(root = %source.root().display(), "reading resources from directory");
			Box::new(source)
		}
		None => {
			tracing::debug!("{RESOURCE_DIR_ENV} is not set, every lookup will be empty");
			Box::new(MemorySource::new())
		}
	}
}
