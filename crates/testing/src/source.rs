// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use parking_lot::Mutex;
use rcblob_locator::{MemorySource, ResourceId, ResourceSource, Result};

/// In-memory source that remembers every identifier it was asked for.
#[derive(Debug, Default)]
pub struct RecordingSource {
	inner: MemorySource,
	requests: Mutex<Vec<ResourceId>>,
}

impl RecordingSource {
	pub fn new(inner: MemorySource) -> Self {
		Self {
			inner,
			requests: Mutex::new(Vec::new()),
		}
	}

	/// Identifiers requested so far, in call order.
	pub fn requests(&self) -> Vec<ResourceId> {
		self.requests.lock().clone()
	}

	pub fn clear(&self) {
		self.requests.lock().clear();
	}
}

impl From<MemorySource> for RecordingSource {
	fn from(inner: MemorySource) -> Self {
		Self::new(inner)
	}
}

impl ResourceSource for RecordingSource {
	fn load(&self, id: ResourceId) -> Result<Cow<'_, [u8]>> {
		self.requests.lock().push(id);
		self.inner.load(id)
	}
}
