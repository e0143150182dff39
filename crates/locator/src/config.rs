// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::path::PathBuf;

/// Which loaded module a platform source reads resources from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModuleSelector {
	/// The module that contains this library. When built as a DLL that is the DLL itself.
	#[default]
	Current,
	/// The executable that started the process.
	Process,
	/// An already loaded module, by file name.
	Named(String),
	/// A PE file on disk, mapped as data only. Its code is never run.
	DataFile(PathBuf),
}
