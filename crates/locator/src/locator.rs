// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use tracing::{debug, trace};

use crate::{
	blob::Blob,
	error::{LocateError, Result},
	id::ResourceId,
	source::ResourceSource,
};

/// Fetches resources from a [`ResourceSource`] into owned [`Blob`]s.
#[derive(Debug, Clone)]
pub struct Locator<S> {
	source: S,
}

impl<S: ResourceSource> Locator<S> {
	pub fn new(source: S) -> Self {
		Self {
			source,
		}
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	pub fn into_source(self) -> S {
		self.source
	}

	/// Copy resource `id` into a fresh buffer, or report why that was not possible.
	///
	/// [`ResourceId::NONE`] is answered with [`LocateError::Unassigned`] without consulting the source.
	pub fn try_fetch(&self, id: ResourceId) -> Result<Blob> {
		if id.is_none() {
			return Err(LocateError::Unassigned);
		}

		let bytes = self.source.load(id)?;
		if bytes.is_empty() {
			return Err(LocateError::Empty {
				id,
			});
		}

		trace!(%id, len = bytes.len(), "resource fetched");
		Ok(Blob::copy_from(&bytes))
	}

	/// Copy resource `id` into a fresh buffer. Every kind of absence yields the empty blob.
	pub fn fetch(&self, id: ResourceId) -> Blob {
		match self.try_fetch(id) {
			Ok(blob) => blob,
			Err(LocateError::Unassigned) => Blob::empty(),
			Err(err) => {
				debug!(%id, error = %err, "resource unavailable");
				Blob::empty()
			}
		}
	}
}
