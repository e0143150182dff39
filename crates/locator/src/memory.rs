// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, collections::HashMap};

use crate::{
	error::{LocateError, Result},
	id::ResourceId,
	source::ResourceSource,
};

/// Resources held in memory, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	entries: HashMap<ResourceId, Box<[u8]>>,
}

impl MemorySource {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style [`MemorySource::insert`].
	pub fn with(mut self, id: ResourceId, bytes: impl Into<Vec<u8>>) -> Self {
		self.insert(id, bytes);
		self
	}

	/// Store `bytes` under `id`, returning the previous contents.
	pub fn insert(&mut self, id: ResourceId, bytes: impl Into<Vec<u8>>) -> Option<Box<[u8]>> {
		self.entries.insert(id, bytes.into().into_boxed_slice())
	}

	pub fn remove(&mut self, id: ResourceId) -> Option<Box<[u8]>> {
		self.entries.remove(&id)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl ResourceSource for MemorySource {
	fn load(&self, id: ResourceId) -> Result<Cow<'_, [u8]>> {
		match self.entries.get(&id) {
			None => Err(LocateError::NotFound {
				id,
			}),
			Some(bytes) if bytes.is_empty() => Err(LocateError::Empty {
				id,
			}),
			Some(bytes) => Ok(Cow::Borrowed(bytes)),
		}
	}
}
