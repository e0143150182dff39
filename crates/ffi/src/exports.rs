// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Exported C entry points
//!
//! Nothing here reports an error to the caller: every failure, including a
//! panic inside the resolver, comes back as a null buffer with size 0.

use std::{
	ffi::{CStr, c_char},
	panic::{AssertUnwindSafe, catch_unwind},
	ptr,
};

use rcblob_bridge::{ResourceSource, Resolver};
use tracing::{debug, error};

use crate::{buffer, host};

/// Resolve `name` against `source` and hand the blob out as a raw buffer.
///
/// # Safety
/// `name` must be null or point to a NUL-terminated string. `size` must be null
/// or valid for a `usize` write.
pub unsafe fn resolve_raw<S>(source: &S, name: *const c_char, size: *mut usize) -> *mut u8
where
	S: ResourceSource + ?Sized,
{
	if size.is_null() {
		debug!("resolve called without a size destination");
		return ptr::null_mut();
	}
	unsafe { size.write(0) };

	if name.is_null() {
		debug!("resolve called without a name");
		return ptr::null_mut();
	}
	let name = unsafe { CStr::from_ptr(name) };

	let result = catch_unwind(AssertUnwindSafe(|| {
		let blob = Resolver::new(source).resolve(name.to_bytes());
		buffer::into_raw(&blob)
	}));

	match result {
		Ok((buffer, len)) => {
			unsafe { size.write(len) };
			buffer
		}
		Err(e) => {
			error!(?e, "panic while resolving");
			ptr::null_mut()
		}
	}
}

/// Look up `name` in the host's lookup table and return a copy of its blob.
///
/// On success `*size` receives the byte count and the returned buffer must be
/// freed with [`rcblob_release`]. Any failure returns null with `*size == 0`.
///
/// # Safety
/// `name` must be null or point to a NUL-terminated string. `size` must be null
/// or valid for a `usize` write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rcblob_resolve_by_name(name: *const c_char, size: *mut usize) -> *mut u8 {
	unsafe { resolve_raw(host::source(), name, size) }
}

/// Free a buffer returned by [`rcblob_resolve_by_name`]. Null is ignored.
///
/// # Safety
/// `buffer` must be null or a pointer returned by [`rcblob_resolve_by_name`]
/// that has not been released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rcblob_release(buffer: *mut u8) {
	let result = catch_unwind(AssertUnwindSafe(|| unsafe { buffer::release(buffer) }));
	if let Err(e) = result {
		error!(?e, "panic while releasing buffer");
	}
}

/// Alias of [`rcblob_resolve_by_name`] for callers linked against the legacy name.
///
/// # Safety
/// See [`rcblob_resolve_by_name`].
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn GetByteAssembly(name: *const c_char, size: *mut usize) -> *mut u8 {
	unsafe { rcblob_resolve_by_name(name, size) }
}

/// Alias of [`rcblob_release`] for callers linked against the legacy name.
///
/// # Safety
/// See [`rcblob_release`].
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn FreeByteAssembly(buffer: *mut u8) {
	unsafe { rcblob_release(buffer) }
}

#[cfg(test)]
mod tests {
	use std::{borrow::Cow, ffi::CString, slice};

	use rcblob_bridge::ResourceId;
	use rcblob_locator::{MemorySource, Result};
	use rcblob_testing::TableBuilder;

	use super::*;

	fn source() -> MemorySource {
		let table = TableBuilder::new().record("ping", 200).record("hollow", 201).build();
		MemorySource::new().with(ResourceId::TABLE, table).with(ResourceId::new(200), b"pong".to_vec())
	}

	fn resolve(source: &MemorySource, name: &str) -> (Vec<u8>, usize, bool) {
		let name = CString::new(name).unwrap();
		let mut size = usize::MAX;
		let buffer = unsafe { resolve_raw(source, name.as_ptr(), &mut size) };
		let is_null = buffer.is_null();
		let bytes = if is_null {
			Vec::new()
		} else {
			let bytes = unsafe { slice::from_raw_parts(buffer, size) }.to_vec();
			unsafe { rcblob_release(buffer) };
			bytes
		};
		(bytes, size, is_null)
	}

	#[test]
	fn test_resolves_known_name() {
		let (bytes, size, is_null) = resolve(&source(), "ping");
		assert!(!is_null);
		assert_eq!(size, 4);
		assert_eq!(bytes, b"pong");
	}

	#[test]
	fn test_unknown_name_is_null() {
		let (_, size, is_null) = resolve(&source(), "pong");
		assert!(is_null);
		assert_eq!(size, 0);
	}

	#[test]
	fn test_missing_blob_is_null() {
		let (_, size, is_null) = resolve(&source(), "hollow");
		assert!(is_null);
		assert_eq!(size, 0);
	}

	#[test]
	fn test_null_name() {
		let mut size = usize::MAX;
		let buffer = unsafe { resolve_raw(&source(), ptr::null(), &mut size) };
		assert!(buffer.is_null());
		assert_eq!(size, 0);
	}

	#[test]
	fn test_null_size() {
		let name = CString::new("ping").unwrap();
		let buffer = unsafe { resolve_raw(&source(), name.as_ptr(), ptr::null_mut()) };
		assert!(buffer.is_null());
	}

	#[test]
	fn test_corrupt_table_is_null() {
		let source = MemorySource::new().with(ResourceId::TABLE, TableBuilder::new().declared_count(3).build());
		let (_, size, is_null) = resolve(&source, "ping");
		assert!(is_null);
		assert_eq!(size, 0);
	}

	struct PanickingSource;

	impl ResourceSource for PanickingSource {
		fn load(&self, _id: ResourceId) -> Result<Cow<'_, [u8]>> {
			panic!("source exploded")
		}
	}

	#[test]
	fn test_panic_is_contained() {
		let name = CString::new("ping").unwrap();
		let mut size = usize::MAX;
		let buffer = unsafe { resolve_raw(&PanickingSource, name.as_ptr(), &mut size) };
		assert!(buffer.is_null());
		assert_eq!(size, 0);
	}

	#[test]
	fn test_release_null_is_noop() {
		unsafe {
			rcblob_release(ptr::null_mut());
			FreeByteAssembly(ptr::null_mut());
		}
	}
}
