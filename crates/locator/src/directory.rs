// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	borrow::Cow,
	fs, io,
	path::{Path, PathBuf},
};

use tracing::trace;

use crate::{
	error::{LocateError, Result},
	id::ResourceId,
	source::ResourceSource,
};

/// Resources extracted to a directory, one `<id>.bin` file per identifier.
#[derive(Debug, Clone)]
pub struct DirectorySource {
	root: PathBuf,
}

impl DirectorySource {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
		}
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// File that holds resource `id`.
	pub fn path_of(&self, id: ResourceId) -> PathBuf {
		self.root.join(format!("{id}.bin"))
	}
}

impl ResourceSource for DirectorySource {
	fn load(&self, id: ResourceId) -> Result<Cow<'_, [u8]>> {
		let path = self.path_of(id);
		trace!(path = %path.display(), "reading resource file");

		let bytes = fs::read(&path).map_err(|source| match source.kind() {
			io::ErrorKind::NotFound => LocateError::NotFound {
				id,
			},
			_ => LocateError::Io {
				id,
				source,
			},
		})?;

		if bytes.is_empty() {
			return Err(LocateError::Empty {
				id,
			});
		}
		Ok(Cow::Owned(bytes))
	}
}
