// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt;

/// Numeric key of a blob in the host's resource storage.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(i64);

impl ResourceId {
	/// Reserved: names no resource. Fetching it yields the empty blob.
	pub const NONE: Self = Self(0);

	/// First identifier handed out to a blob by the producing tool.
	pub const FIRST: Self = Self(101);

	/// Holds the last identifier handed out, as a native `i32`.
	pub const LAST_ALLOCATED: Self = Self(102);

	/// Holds the name to identifier table.
	pub const TABLE: Self = Self(103);

	pub const fn new(id: i64) -> Self {
		Self(id)
	}

	pub const fn get(self) -> i64 {
		self.0
	}

	pub const fn is_none(self) -> bool {
		self.0 == Self::NONE.0
	}

	/// The identifier as a 16-bit integer resource ordinal, if it fits one.
	pub fn ordinal(self) -> Option<u16> {
		u16::try_from(self.0).ok().filter(|ordinal| *ordinal != 0)
	}
}

impl From<i64> for ResourceId {
	fn from(id: i64) -> Self {
		Self(id)
	}
}

impl From<ResourceId> for i64 {
	fn from(id: ResourceId) -> Self {
		id.0
	}
}

impl fmt::Display for ResourceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Resource type under which blobs are stored.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceClass(u16);

impl ResourceClass {
	/// Raw application-defined data (`RT_RCDATA`).
	pub const RCDATA: Self = Self(10);

	pub const fn new(class: u16) -> Self {
		Self(class)
	}

	pub const fn get(self) -> u16 {
		self.0
	}
}

impl Default for ResourceClass {
	fn default() -> Self {
		Self::RCDATA
	}
}
