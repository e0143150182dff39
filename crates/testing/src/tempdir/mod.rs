// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{env, fs, path::Path};

use rcblob_locator::ResourceId;
use uuid::Uuid;

/// Run `f` with a fresh empty directory that is removed afterwards.
pub fn temp_dir<F, R>(f: F) -> R
where
	F: FnOnce(&Path) -> R,
{
	let mut path = env::temp_dir();
	path.push(format!("rcblob-{}", Uuid::new_v4()));

	fs::create_dir(&path).expect("failed to create temporary directory");
	let result = f(&path);

	let _ = fs::remove_dir_all(&path);
	result
}

/// Write `bytes` where a `DirectorySource` rooted at `dir` looks for `id`.
pub fn write_resource(dir: &Path, id: ResourceId, bytes: &[u8]) {
	fs::write(dir.join(format!("{id}.bin")), bytes).expect("failed to write resource file");
}
