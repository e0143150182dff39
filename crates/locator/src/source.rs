// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, rc::Rc, sync::Arc};

use crate::{error::Result, id::ResourceId};

/// Capability to read the raw bytes of an embedded resource.
///
/// Implementations report absence through [`crate::LocateError`]; they are
/// never asked for [`ResourceId::NONE`]. Returned bytes may borrow from the
/// source (a mapped module image) or be owned (read from disk).
pub trait ResourceSource {
	fn load(&self, id: ResourceId) -> Result<Cow<'_, [u8]>>;
}

impl<S: ResourceSource + ?Sized> ResourceSource for &S {
	fn load(&self, id: ResourceId) -> Result<Cow<'_, [u8]>> {
		(**self).load(id)
	}
}

impl<S: ResourceSource + ?Sized> ResourceSource for Box<S> {
	fn load(&self, id: ResourceId) -> Result<Cow<'_, [u8]>> {
		(**self).load(id)
	}
}

impl<S: ResourceSource + ?Sized> ResourceSource for Rc<S> {
	fn load(&self, id: ResourceId) -> Result<Cow<'_, [u8]>> {
		(**self).load(id)
	}
}

impl<S: ResourceSource + ?Sized> ResourceSource for Arc<S> {
	fn load(&self, id: ResourceId) -> Result<Cow<'_, [u8]>> {
		(**self).load(id)
	}
}
