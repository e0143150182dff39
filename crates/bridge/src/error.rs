// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use rcblob_locator::{LocateError, ResourceId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
	#[error("lookup table is unavailable")]
	TableMissing(#[source] LocateError),

	#[error("lookup table is corrupt")]
	CorruptTable(#[from] rcblob_format::Error),

	#[error("resource {id} is unavailable")]
	ResourceMissing {
		id: ResourceId,
		#[source]
		source: LocateError,
	},

	#[error("allocation counter is corrupt")]
	CorruptCounter(#[source] rcblob_format::Error),
}

impl ResolveError {
	/// Whether the stored data is damaged, as opposed to simply absent.
	pub fn is_corruption(&self) -> bool {
		matches!(self, ResolveError::CorruptTable(_) | ResolveError::CorruptCounter(_))
	}
}

pub type Result<T> = std::result::Result<T, ResolveError>;
