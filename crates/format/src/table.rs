// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, fmt, slice};

use tracing::trace;

use crate::{cursor::Cursor, error::Result};

/// Size of the leading record count.
pub const COUNT_SIZE: usize = size_of::<i32>();

/// Smallest possible encoded record: one length byte and the identifier.
const MIN_RECORD_SIZE: usize = 1 + size_of::<i64>();

/// A single name to identifier mapping.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Record {
	name: Box<[u8]>,
	identifier: i64,
}

impl Record {
	pub fn new(name: impl Into<Box<[u8]>>, identifier: i64) -> Self {
		Self {
			name: name.into(),
			identifier,
		}
	}

	/// Name bytes exactly as stored in the table.
	pub fn name(&self) -> &[u8] {
		&self.name
	}

	/// Name for display purposes; invalid UTF-8 is replaced.
	pub fn name_lossy(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.name)
	}

	pub fn identifier(&self) -> i64 {
		self.identifier
	}

	fn read(cursor: &mut Cursor<'_>) -> Result<Self> {
		let name = cursor.read_length_prefixed_string()?;
		let identifier = cursor.read_i64()?;
		Ok(Self::new(name, identifier))
	}
}

impl fmt::Debug for Record {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Record").field("name", &self.name_lossy()).field("identifier", &self.identifier).finish()
	}
}

/// Ordered list of records, in encoding order.
///
/// Names are not required to be unique; [`Table::find`] returns the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
	records: Vec<Record>,
}

impl Table {
	pub fn new() -> Self {
		Self::default()
	}

	/// Decode a table from its binary form.
	///
	/// Input shorter than the count field decodes to an empty table. A declared
	/// count that is zero or negative also decodes to an empty table. Any record
	/// that cannot be read fully fails the whole decode.
	pub fn deserialize(data: &[u8]) -> Result<Self> {
		if data.len() < COUNT_SIZE {
			trace!(len = data.len(), "table shorter than count field");
			return Ok(Self::new());
		}

		let mut cursor = Cursor::new(data);
		let count = cursor.read_i32()?;
		let declared = usize::try_from(count).unwrap_or(0);

		let mut records = Vec::with_capacity(declared.min(cursor.remaining() / MIN_RECORD_SIZE));
		for _ in 0..declared {
			records.push(Record::read(&mut cursor)?);
		}

		trace!(count, trailing = cursor.remaining(), "table decoded");
		Ok(Self {
			records,
		})
	}

	/// First record whose name equals `name` byte for byte.
	pub fn find(&self, name: &[u8]) -> Option<&Record> {
		self.records.iter().find(|record| record.name() == name)
	}

	/// Identifier of the first record named `name`.
	pub fn identifier_of(&self, name: &[u8]) -> Option<i64> {
		self.find(name).map(Record::identifier)
	}

	pub fn records(&self) -> &[Record] {
		&self.records
	}

	pub fn iter(&self) -> slice::Iter<'_, Record> {
		self.records.iter()
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl FromIterator<Record> for Table {
	fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
		Self {
			records: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Table {
	type Item = &'a Record;
	type IntoIter = slice::Iter<'a, Record>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl IntoIterator for Table {
	type Item = Record;
	type IntoIter = std::vec::IntoIter<Record>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Error;

	fn encode(count: i32, records: &[(&[u8], i64)]) -> Vec<u8> {
		let mut out = count.to_ne_bytes().to_vec();
		for (name, id) in records {
			assert!(name.len() < 0x80);
			out.push(name.len() as u8);
			out.extend_from_slice(name);
			out.extend_from_slice(&id.to_ne_bytes());
		}
		out
	}

	#[test]
	fn test_short_input_is_empty() {
		for len in 0..COUNT_SIZE {
			let table = Table::deserialize(&vec![0xFF; len]).unwrap();
			assert!(table.is_empty());
		}
	}

	#[test]
	fn test_zero_count() {
		let table = Table::deserialize(&encode(0, &[])).unwrap();
		assert!(table.is_empty());
	}

	#[test]
	fn test_negative_count_is_empty() {
		let table = Table::deserialize(&encode(-3, &[])).unwrap();
		assert!(table.is_empty());
	}

	#[test]
	fn test_single_record() {
		let table = Table::deserialize(&encode(1, &[(b"ping", 200)])).unwrap();
		assert_eq!(table.records(), &[Record::new(&b"ping"[..], 200)]);
	}

	#[test]
	fn test_record_order_preserved() {
		let table = Table::deserialize(&encode(3, &[(b"c", 3), (b"a", 1), (b"b", 2)])).unwrap();
		let names: Vec<&[u8]> = table.iter().map(Record::name).collect();
		assert_eq!(names, vec![&b"c"[..], b"a", b"b"]);
	}

	#[test]
	fn test_empty_name_record() {
		let table = Table::deserialize(&encode(1, &[(b"", 7)])).unwrap();
		assert_eq!(table.identifier_of(b""), Some(7));
	}

	#[test]
	fn test_trailing_bytes_ignored() {
		let mut data = encode(1, &[(b"x", 9)]);
		data.extend_from_slice(&[1, 2, 3]);
		let table = Table::deserialize(&data).unwrap();
		assert_eq!(table.len(), 1);
	}

	#[test]
	fn test_count_without_records_is_truncated() {
		let err = Table::deserialize(&encode(1, &[])).unwrap_err();
		assert!(matches!(
			err,
			Error::Truncated {
				offset: 4,
				..
			}
		));
	}

	#[test]
	fn test_missing_identifier_is_truncated() {
		let mut data = encode(2, &[(b"first", 1)]);
		data.extend_from_slice(&[0x02, b'h', b'i', 0x01, 0x02]);
		let err = Table::deserialize(&data).unwrap_err();
		assert!(matches!(err, Error::Truncated { need: 8, have: 2, .. }));
	}

	#[test]
	fn test_huge_count_does_not_preallocate() {
		let data = encode(i32::MAX, &[(b"only", 1)]);
		assert!(Table::deserialize(&data).is_err());
	}

	#[test]
	fn test_find_first_match_wins() {
		let table = Table::deserialize(&encode(2, &[(b"dup", 1), (b"dup", 2)])).unwrap();
		assert_eq!(table.identifier_of(b"dup"), Some(1));
	}

	#[test]
	fn test_find_is_case_sensitive() {
		let table = Table::deserialize(&encode(1, &[(b"Ping", 5)])).unwrap();
		assert_eq!(table.identifier_of(b"ping"), None);
		assert_eq!(table.identifier_of(b"Ping"), Some(5));
	}

	#[test]
	fn test_find_does_not_match_prefix() {
		let table = Table::deserialize(&encode(1, &[(b"pingpong", 5)])).unwrap();
		assert_eq!(table.identifier_of(b"ping"), None);
	}
}
