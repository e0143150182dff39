// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::io;

use thiserror::Error;

use crate::id::ResourceId;

/// Why a resource could not be supplied.
///
/// None of these are faults of the caller: [`crate::Locator::fetch`] maps every
/// variant to the empty blob.
#[derive(Debug, Error)]
pub enum LocateError {
	#[error("identifier 0 does not name a resource")]
	Unassigned,

	#[error("module is unavailable: {reason}")]
	ModuleUnavailable {
		reason: String,
	},

	#[error("resource {id} not found")]
	NotFound {
		id: ResourceId,
	},

	#[error("resource {id} is empty")]
	Empty {
		id: ResourceId,
	},

	#[error("resource {id} could not be loaded")]
	LoadFailed {
		id: ResourceId,
	},

	#[error("resource {id} could not be locked")]
	LockFailed {
		id: ResourceId,
	},

	#[error("resource {id} is outside the 16-bit ordinal range")]
	OutOfRange {
		id: ResourceId,
	},

	#[error("resource {id}: {source}")]
	Io {
		id: ResourceId,
		#[source]
		source: io::Error,
	},
}

impl LocateError {
	/// Whether the resource simply does not exist, as opposed to existing but being unreadable.
	pub fn is_not_found(&self) -> bool {
		matches!(self, LocateError::Unassigned | LocateError::NotFound { .. } | LocateError::OutOfRange { .. })
	}
}

pub type Result<T> = std::result::Result<T, LocateError>;
