// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Resource locator for embedded blobs
//!
//! A [`Locator`] turns a [`ResourceId`] into an owned [`Blob`] using a
//! [`ResourceSource`]. Sources are the only place that talks to the platform:
//! on Windows [`Win32Source`] reads `RCDATA` entries from a loaded module, and
//! [`MemorySource`] / [`DirectorySource`] serve the same bytes from memory or
//! from disk so the rest of the stack can run anywhere.

mod blob;
mod config;
mod directory;
mod error;
mod id;
mod locator;
mod memory;
mod source;
#[cfg(windows)]
mod win32;

pub use blob::Blob;
pub use config::ModuleSelector;
pub use directory::DirectorySource;
pub use error::{LocateError, Result};
pub use id::{ResourceClass, ResourceId};
pub use locator::Locator;
pub use memory::MemorySource;
pub use source::ResourceSource;
#[cfg(windows)]
pub use win32::{Win32Builder, Win32Source};
