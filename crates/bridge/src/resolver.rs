// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use rcblob_format::{Cursor, Table};
use rcblob_locator::{Blob, Locator, ResourceId, ResourceSource};
use tracing::{debug, instrument, trace, warn};

use crate::error::{ResolveError, Result};

/// Resolves names to blobs through the lookup table of a [`ResourceSource`].
///
/// Every call fetches and decodes the table afresh, so a resolver holds no state
/// besides its source and can be shared between threads whenever the source can.
#[derive(Debug, Clone)]
pub struct Resolver<S> {
	locator: Locator<S>,
}

impl<S: ResourceSource> Resolver<S> {
	pub fn new(source: S) -> Self {
		Self {
			locator: Locator::new(source),
		}
	}

	pub fn from_locator(locator: Locator<S>) -> Self {
		Self {
			locator,
		}
	}

	pub fn locator(&self) -> &Locator<S> {
		&self.locator
	}

	/// Blob registered under `name`, or the empty blob.
	///
	/// A missing table, a corrupt table, an unknown name and a missing blob all
	/// produce the same empty result. Use [`Resolver::try_resolve`] to tell them
	/// apart.
	#[instrument(level = "trace", skip_all, fields(name = %String::from_utf8_lossy(name)))]
	pub fn resolve(&self, name: &[u8]) -> Blob {
		let id = match self.lookup(name) {
			Ok(id) => id,
			Err(err) if err.is_corruption() => {
				warn!(error = %err, "lookup table rejected");
				return Blob::empty();
			}
			Err(err) => {
				debug!(error = %err, "lookup table unavailable");
				return Blob::empty();
			}
		};

		if id.is_none() {
			debug!("name not present in lookup table");
		}
		self.locator.fetch(id)
	}

	/// Like [`Resolver::resolve`], but reports why nothing was found.
	///
	/// An unknown name, or a record whose identifier is [`ResourceId::NONE`], is
	/// `Ok(None)`. Failures to read the table or the blob are errors.
	pub fn try_resolve(&self, name: &[u8]) -> Result<Option<Blob>> {
		let id = self.lookup(name)?;
		if id.is_none() {
			return Ok(None);
		}

		self.locator.try_fetch(id).map(Some).map_err(|source| ResolveError::ResourceMissing {
			id,
			source,
		})
	}

	/// Fetch and decode the lookup table.
	pub fn table(&self) -> Result<Table> {
		let bytes = self.locator.try_fetch(ResourceId::TABLE).map_err(ResolveError::TableMissing)?;
		let table = Table::deserialize(&bytes)?;
		trace!(records = table.len(), "lookup table loaded");
		Ok(table)
	}

	/// Last identifier handed out by the producing tool, if it recorded one.
	pub fn last_allocated_id(&self) -> Result<Option<ResourceId>> {
		let bytes = match self.locator.try_fetch(ResourceId::LAST_ALLOCATED) {
			Ok(bytes) => bytes,
			Err(err) if err.is_not_found() => return Ok(None),
			Err(source) => {
				return Err(ResolveError::ResourceMissing {
					id: ResourceId::LAST_ALLOCATED,
					source,
				});
			}
		};

		let last = Cursor::new(&bytes).read_i32().map_err(ResolveError::CorruptCounter)?;
		Ok(Some(ResourceId::new(i64::from(last))))
	}

	/// Identifier for `name`; [`ResourceId::NONE`] when the table has no such record.
	/// The table and its buffer are released before this returns.
	fn lookup(&self, name: &[u8]) -> Result<ResourceId> {
		let table = self.table()?;
		Ok(table.identifier_of(name).map(ResourceId::new).unwrap_or(ResourceId::NONE))
	}
}
