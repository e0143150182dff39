// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Append `value` as a .NET `Write7BitEncodedInt`.
pub fn write_7bit_encoded_int(buf: &mut Vec<u8>, value: i32) {
	let mut value = value as u32;
	loop {
		let mut byte = (value & 0x7F) as u8;
		value >>= 7;
		if value != 0 {
			byte |= 0x80;
		}
		buf.push(byte);
		if value == 0 {
			break;
		}
	}
}

/// Encodes lookup tables the way the producing tool writes them.
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
	records: Vec<(Vec<u8>, i64)>,
	declared_count: Option<i32>,
}

impl TableBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn record(mut self, name: impl AsRef<[u8]>, identifier: i64) -> Self {
		self.records.push((name.as_ref().to_vec(), identifier));
		self
	}

	pub fn records<N: AsRef<[u8]>>(mut self, records: impl IntoIterator<Item = (N, i64)>) -> Self {
		for (name, identifier) in records {
			self = self.record(name, identifier);
		}
		self
	}

	/// Write `count` into the header instead of the real number of records.
	pub fn declared_count(mut self, count: i32) -> Self {
		self.declared_count = Some(count);
		self
	}

	pub fn build(&self) -> Vec<u8> {
		let count = self.declared_count.unwrap_or(self.records.len() as i32);
		let mut out = count.to_ne_bytes().to_vec();
		for (name, identifier) in &self.records {
			write_7bit_encoded_int(&mut out, name.len() as i32);
			out.extend_from_slice(name);
			out.extend_from_slice(&identifier.to_ne_bytes());
		}
		out
	}
}
