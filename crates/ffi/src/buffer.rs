// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Owned buffers handed across the C boundary
//!
//! Each allocation starts with a `u64` header holding the payload length.
//! Callers only ever see the payload pointer, so releasing needs nothing
//! else.

use std::{
	alloc::{Layout, alloc, dealloc},
	ptr,
};

const HEADER: usize = size_of::<u64>();
const ALIGN: usize = align_of::<u64>();

fn layout(len: usize) -> Option<Layout> {
	Layout::from_size_align(len.checked_add(HEADER)?, ALIGN).ok()
}

/// Copy `bytes` into a fresh allocation and return its payload pointer and length.
///
/// Empty input, or an allocation failure, yields `(null, 0)`.
pub fn into_raw(bytes: &[u8]) -> (*mut u8, usize) {
	if bytes.is_empty() {
		return (ptr::null_mut(), 0);
	}

	let Some(layout) = layout(bytes.len()) else {
		return (ptr::null_mut(), 0);
	};

	let base = unsafe { alloc(layout) };
	if base.is_null() {
		return (ptr::null_mut(), 0);
	}

	unsafe {
		(base as *mut u64).write(bytes.len() as u64);
		let payload = base.add(HEADER);
		ptr::copy_nonoverlapping(bytes.as_ptr(), payload, bytes.len());
		(payload, bytes.len())
	}
}

/// Free a buffer returned by [`into_raw`]. Null is ignored.
///
/// # Safety
/// `payload` must be null or a pointer obtained from [`into_raw`] that has not
/// been released yet.
pub unsafe fn release(payload: *mut u8) {
	if payload.is_null() {
		return;
	}

	unsafe {
		let base = payload.sub(HEADER);
		let len = (base as *const u64).read() as usize;
		if let Some(layout) = layout(len) {
			dealloc(base, layout);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::slice;

	use super::*;

	#[test]
	fn test_round_trip() {
		let (ptr, len) = into_raw(b"payload");
		assert!(!ptr.is_null());
		assert_eq!(len, 7);
		assert_eq!(unsafe { slice::from_raw_parts(ptr, len) }, b"payload");
		unsafe { release(ptr) };
	}

	#[test]
	fn test_empty_is_null() {
		let (ptr, len) = into_raw(&[]);
		assert!(ptr.is_null());
		assert_eq!(len, 0);
	}

	#[test]
	fn test_payload_is_aligned() {
		let (ptr, len) = into_raw(&[1, 2, 3]);
		assert_eq!(ptr as usize % ALIGN, 0);
		assert_eq!(len, 3);
		unsafe { release(ptr) };
	}

	#[test]
	fn test_release_null() {
		unsafe { release(ptr::null_mut()) };
	}

	#[test]
	fn test_large_buffer() {
		let bytes = vec![0xAB; 1 << 20];
		let (ptr, len) = into_raw(&bytes);
		assert_eq!(len, bytes.len());
		assert_eq!(unsafe { slice::from_raw_parts(ptr, len) }, bytes.as_slice());
		unsafe { release(ptr) };
	}
}
