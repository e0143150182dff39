// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{fmt, ops::Deref};

/// Owned copy of a resource's bytes. Empty means the resource was absent.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(Box<[u8]>);

impl Blob {
	pub fn empty() -> Self {
		Self::default()
	}

	/// Copy `bytes` into a new allocation sized exactly to them.
	pub fn copy_from(bytes: &[u8]) -> Self {
		Self(Box::from(bytes))
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn into_boxed_slice(self) -> Box<[u8]> {
		self.0
	}

	pub fn into_vec(self) -> Vec<u8> {
		self.0.into_vec()
	}
}

impl Deref for Blob {
	type Target = [u8];

	fn deref(&self) -> &[u8] {
		&self.0
	}
}

impl AsRef<[u8]> for Blob {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl From<Vec<u8>> for Blob {
	fn from(bytes: Vec<u8>) -> Self {
		Self(bytes.into_boxed_slice())
	}
}

impl From<Box<[u8]>> for Blob {
	fn from(bytes: Box<[u8]>) -> Self {
		Self(bytes)
	}
}

impl fmt::Debug for Blob {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Blob").field("len", &self.0.len()).finish()
	}
}
