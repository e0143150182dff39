// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Binary table format for embedded resource lookup
//!
//! The lookup table is written by a .NET `BinaryWriter` and has the shape
//!
//! ```text
//! i32 count
//! count × { 7-bit encoded length, length bytes of name, i64 identifier }
//! ```
//!
//! All fixed-width fields use the native byte order of the host. This crate only
//! reads the format; it never writes it.

pub mod cursor;
pub mod error;
pub mod table;

pub use cursor::{Cursor, MAX_VARINT_BYTES, Primitive};
pub use error::{Error, Result};
pub use table::{COUNT_SIZE, Record, Table};
