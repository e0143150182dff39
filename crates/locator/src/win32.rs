// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Resource source backed by the Win32 resource API

use std::{
	borrow::Cow,
	ffi::OsStr,
	iter,
	os::windows::ffi::OsStrExt,
	ptr::{null, null_mut},
	slice,
};

use tracing::{debug, trace};
use windows_sys::Win32::{
	Foundation::{FreeLibrary, HMODULE},
	System::LibraryLoader::{
		FindResourceW, GET_MODULE_HANDLE_EX_FLAG_FROM_ADDRESS, GET_MODULE_HANDLE_EX_FLAG_UNCHANGED_REFCOUNT,
		GetModuleHandleExW, GetModuleHandleW, LOAD_LIBRARY_AS_DATAFILE, LoadLibraryExW, LoadResource, LockResource,
		SizeofResource,
	},
};

use crate::{
	config::ModuleSelector,
	error::{LocateError, Result},
	id::{ResourceClass, ResourceId},
	source::ResourceSource,
};

/// Any address inside this module, used to find the module handle.
static MODULE_ANCHOR: u8 = 0;

enum Module {
	/// Looked up on every load; the handle is not reference counted by us.
	Selected(ModuleSelector),
	/// Mapped by us with `LoadLibraryExW`, released on drop.
	Mapped(HMODULE),
}

/// Reads resources of one [`ResourceClass`] from a loaded module.
pub struct Win32Source {
	module: Module,
	class: ResourceClass,
}

// SAFETY: resource sections are read-only once mapped, and the Win32 resource
// functions may be called from any thread.
unsafe impl Send for Win32Source {}
unsafe impl Sync for Win32Source {}

impl Win32Source {
	/// Source reading `RCDATA` from the module that contains this library.
	pub fn current() -> Self {
		Self {
			module: Module::Selected(ModuleSelector::Current),
			class: ResourceClass::RCDATA,
		}
	}

	pub fn builder() -> Win32Builder {
		Win32Builder::new()
	}

	pub fn class(&self) -> ResourceClass {
		self.class
	}

	fn module(&self) -> Result<HMODULE> {
		match &self.module {
			Module::Mapped(handle) => Ok(*handle),
			Module::Selected(selector) => select_module(selector),
		}
	}
}

impl Drop for Win32Source {
	fn drop(&mut self) {
		if let Module::Mapped(handle) = self.module {
			// SAFETY: the handle came from LoadLibraryExW and is released exactly once.
			unsafe { FreeLibrary(handle) };
		}
	}
}

impl ResourceSource for Win32Source {
	fn load(&self, id: ResourceId) -> Result<Cow<'_, [u8]>> {
		let ordinal = id.ordinal().ok_or(LocateError::OutOfRange {
			id,
		})?;
		let module = self.module()?;

		// SAFETY: `module` is a live module handle, and both name and type are
		// integer resources (MAKEINTRESOURCE), never dereferenced as strings.
		unsafe {
			let info = FindResourceW(module, int_resource(ordinal), int_resource(self.class.get()));
			if info.is_null() {
				return Err(LocateError::NotFound {
					id,
				});
			}

			let size = SizeofResource(module, info) as usize;
			if size == 0 {
				return Err(LocateError::Empty {
					id,
				});
			}

			let loaded = LoadResource(module, info);
			if loaded.is_null() {
				return Err(LocateError::LoadFailed {
					id,
				});
			}

			let data = LockResource(loaded);
			if data.is_null() {
				return Err(LocateError::LockFailed {
					id,
				});
			}

			trace!(%id, size, "resource located");
			// The resource stays mapped for as long as the module is loaded.
			Ok(Cow::Borrowed(slice::from_raw_parts(data.cast::<u8>(), size)))
		}
	}
}

/// Configuration for [`Win32Source`].
#[derive(Debug, Clone, Default)]
pub struct Win32Builder {
	module: ModuleSelector,
	class: ResourceClass,
}

impl Win32Builder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Module to read resources from. Defaults to [`ModuleSelector::Current`].
	pub fn module(mut self, module: ModuleSelector) -> Self {
		self.module = module;
		self
	}

	/// Resource type to query. Defaults to [`ResourceClass::RCDATA`].
	pub fn class(mut self, class: ResourceClass) -> Self {
		self.class = class;
		self
	}

	/// Build the source. Only [`ModuleSelector::DataFile`] touches the system here.
	pub fn build(self) -> Result<Win32Source> {
		let module = match self.module {
			ModuleSelector::DataFile(path) => {
				let wide = wide(path.as_os_str());
				// SAFETY: `wide` is a NUL terminated UTF-16 path that outlives the call.
				let handle = unsafe { LoadLibraryExW(wide.as_ptr(), null_mut(), LOAD_LIBRARY_AS_DATAFILE) };
				if handle.is_null() {
					debug!(path = %path.display(), "could not map module as data file");
					return Err(LocateError::ModuleUnavailable {
						reason: format!("cannot map {}: {}", path.display(), std::io::Error::last_os_error()),
					});
				}
				Module::Mapped(handle)
			}
			selector => Module::Selected(selector),
		};

		Ok(Win32Source {
			module,
			class: self.class,
		})
	}
}

fn select_module(selector: &ModuleSelector) -> Result<HMODULE> {
	let handle = match selector {
		ModuleSelector::Current => {
			let mut handle: HMODULE = null_mut();
			let anchor = (&raw const MODULE_ANCHOR).cast::<u16>();
			// SAFETY: with FROM_ADDRESS the name argument is an address inside a
			// loaded module; UNCHANGED_REFCOUNT means nothing needs releasing.
			let found = unsafe {
				GetModuleHandleExW(
					GET_MODULE_HANDLE_EX_FLAG_FROM_ADDRESS | GET_MODULE_HANDLE_EX_FLAG_UNCHANGED_REFCOUNT,
					anchor,
					&mut handle,
				)
			};
			if found == 0 {
				null_mut()
			} else {
				handle
			}
		}
		// SAFETY: a null name asks for the process executable.
		ModuleSelector::Process => unsafe { GetModuleHandleW(null()) },
		ModuleSelector::Named(name) => {
			let wide = wide(OsStr::new(name));
			// SAFETY: `wide` is NUL terminated and outlives the call.
			unsafe { GetModuleHandleW(wide.as_ptr()) }
		}
		ModuleSelector::DataFile(path) => {
			return Err(LocateError::ModuleUnavailable {
				reason: format!("{} must be mapped through Win32Builder::build", path.display()),
			});
		}
	};

	if handle.is_null() {
		return Err(LocateError::ModuleUnavailable {
			reason: format!("{selector:?}: {}", std::io::Error::last_os_error()),
		});
	}
	Ok(handle)
}

/// `MAKEINTRESOURCEW`
fn int_resource(ordinal: u16) -> *const u16 {
	ordinal as usize as *const u16
}

fn wide(value: &OsStr) -> Vec<u16> {
	value.encode_wide().chain(iter::once(0)).collect()
}
