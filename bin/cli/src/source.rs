// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use rcblob_locator::{DirectorySource, ResourceSource};

/// Where resources are read from.
#[derive(Debug, Args)]
pub struct SourceArgs {
	/// Directory holding one `<id>.bin` file per resource.
	#[arg(long, value_name = "DIR", conflicts_with = "module")]
	pub dir: Option<PathBuf>,

	/// PE image whose RCDATA resources are read (Windows only).
	#[arg(long, value_name = "FILE")]
	pub module: Option<PathBuf>,
}

impl SourceArgs {
	pub fn open(&self) -> Result<Box<dyn ResourceSource>> {
		match (&self.dir, &self.module) {
			(Some(dir), _) => {
				tracing::debug!(dir = %dir.display(), "reading resources from directory");
				Ok(Box::new(DirectorySource::new(dir)))
			}
			(None, Some(module)) => open_module(module),
			(None, None) => bail!("either --dir or --module is required"),
		}
	}
}

#[cfg(windows)]
fn open_module(path: &std::path::Path) -> Result<Box<dyn ResourceSource>> {
	use anyhow::Context;
	use rcblob_locator::{ModuleSelector, Win32Source};

	tracing::debug!(module = %path.display(), "mapping module as data file");
	let source = Win32Source::builder()
		.module(ModuleSelector::DataFile(path.to_path_buf()))
		.build()
		.with_context(|| format!("failed to load {}", path.display()))?;
	Ok(Box::new(source))
}

#[cfg(not(windows))]
fn open_module(path: &std::path::Path) -> Result<Box<dyn ResourceSource>> {
	bail!("reading resources from {} requires Windows, use --dir instead", path.display())
}
