// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Test support for rcblob
//!
//! The shipped crates only ever read lookup tables. Tests need to produce them,
//! so the encoder lives here together with a source fake that records what the
//! code under test asked for.

pub mod source;
pub mod table;
pub mod tempdir;

pub use source::RecordingSource;
pub use table::{TableBuilder, write_7bit_encoded_int};
