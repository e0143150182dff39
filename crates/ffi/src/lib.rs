// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! C ABI for rcblob
//!
//! Exposes name lookup over the resources embedded in the module that loads
//! this library. Returned buffers are owned by the caller and must be handed
//! back to `rcblob_release`.

pub mod buffer;
mod exports;
mod host;
pub mod logging;

pub use exports::{FreeByteAssembly, GetByteAssembly, rcblob_release, rcblob_resolve_by_name, resolve_raw};
pub use logging::rcblob_init_logging;
