// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Name based lookup of embedded resource blobs
//!
//! The [`Resolver`] fetches the lookup table stored under
//! [`ResourceId::TABLE`](rcblob_locator::ResourceId::TABLE), decodes it, finds
//! the first record with the requested name and fetches the blob that record
//! points at. Nothing is cached between calls.

mod error;
mod resolver;

pub use error::{ResolveError, Result};
pub use rcblob_format::{Record, Table};
pub use rcblob_locator::{Blob, LocateError, ResourceId, ResourceSource};
pub use resolver::Resolver;
