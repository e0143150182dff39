// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

use crate::cursor::MAX_VARINT_BYTES;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	#[error("unexpected end of data at offset {offset:#x} (need {need} bytes, have {have})")]
	Truncated {
		offset: usize,
		need: usize,
		have: usize,
	},

	#[error("7-bit encoded integer at offset {offset:#x} is longer than {} bytes", MAX_VARINT_BYTES)]
	MalformedVarInt {
		offset: usize,
	},

	#[error("invalid string length {length} at offset {offset:#x}")]
	InvalidLength {
		offset: usize,
		length: i32,
	},
}

impl Error {
	/// Byte offset at which decoding failed.
	pub fn offset(&self) -> usize {
		match self {
			Error::Truncated {
				offset,
				..
			}
			| Error::MalformedVarInt {
				offset,
			}
			| Error::InvalidLength {
				offset,
				..
			} => *offset,
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
