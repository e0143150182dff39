// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use proptest::{collection::vec, prelude::*};
use rcblob_format::{COUNT_SIZE, Cursor, Error, MAX_VARINT_BYTES, Record, Table};
use rcblob_testing::{TableBuilder, write_7bit_encoded_int};

#[test]
fn test_round_trip_preserves_order_and_duplicates() {
	let records = [("alpha", 101i64), ("beta", 102), ("alpha", 103), ("", 104), ("Ω", i64::MIN)];
	let bytes = TableBuilder::new().records(records).build();

	let table = Table::deserialize(&bytes).unwrap();
	let expected: Table = records.iter().map(|(name, id)| Record::new(name.as_bytes(), *id)).collect();
	assert_eq!(table, expected);
}

#[test]
fn test_long_name_uses_multi_byte_prefix() {
	let name = "n".repeat(300);
	let bytes = TableBuilder::new().record(&name, 5).build();
	// 300 needs a two byte length prefix
	assert_eq!(bytes.len(), COUNT_SIZE + 2 + 300 + 8);

	let table = Table::deserialize(&bytes).unwrap();
	assert_eq!(table.identifier_of(name.as_bytes()), Some(5));
}

#[test]
fn test_truncated_mid_name_aborts() {
	let mut bytes = TableBuilder::new().record("first", 1).record("second", 2).build();
	bytes.truncate(bytes.len() - 10);
	assert!(matches!(Table::deserialize(&bytes), Err(Error::Truncated { .. })));
}

#[test]
fn test_malformed_length_aborts() {
	let mut bytes = 1i32.to_ne_bytes().to_vec();
	bytes.extend_from_slice(&[0x80; MAX_VARINT_BYTES]);
	bytes.extend_from_slice(&[0u8; 16]);
	assert_eq!(
		Table::deserialize(&bytes),
		Err(Error::MalformedVarInt {
			offset: COUNT_SIZE
		})
	);
}

#[test]
fn test_negative_length_aborts() {
	let mut bytes = 1i32.to_ne_bytes().to_vec();
	write_7bit_encoded_int(&mut bytes, -5);
	bytes.extend_from_slice(&[0u8; 16]);
	assert!(matches!(
		Table::deserialize(&bytes),
		Err(Error::InvalidLength {
			length: -5,
			..
		})
	));
}

#[test]
fn test_declared_count_larger_than_records() {
	let bytes = TableBuilder::new().record("only", 1).declared_count(2).build();
	let err = Table::deserialize(&bytes).unwrap_err();
	assert_eq!(err.offset(), bytes.len());
}

proptest! {
	#[test]
	fn prop_short_buffers_decode_empty(bytes in vec(any::<u8>(), 0..COUNT_SIZE)) {
		prop_assert_eq!(Table::deserialize(&bytes), Ok(Table::new()));
	}

	#[test]
	fn prop_varint_round_trip(value in 0i32..=i32::MAX) {
		let mut buf = Vec::new();
		write_7bit_encoded_int(&mut buf, value);
		prop_assert!(buf.len() <= MAX_VARINT_BYTES);

		let mut cursor = Cursor::new(&buf);
		prop_assert_eq!(cursor.read_7bit_encoded_int(), Ok(value));
		prop_assert!(cursor.is_empty());
	}

	#[test]
	fn prop_fifth_continuation_is_malformed(
		prefix in vec(0x80u8..=0xFF, MAX_VARINT_BYTES),
		tail in vec(any::<u8>(), 0..4),
	) {
		let mut buf = prefix;
		buf.extend_from_slice(&tail);
		let mut cursor = Cursor::new(&buf);
		prop_assert_eq!(cursor.read_7bit_encoded_int(), Err(Error::MalformedVarInt { offset: 0 }));
	}

	#[test]
	fn prop_table_round_trip(records in vec((vec(any::<u8>(), 0..200), any::<i64>()), 0..32)) {
		let bytes = TableBuilder::new().records(records.iter().map(|(name, id)| (name.as_slice(), *id))).build();
		let table = Table::deserialize(&bytes).unwrap();

		prop_assert_eq!(table.len(), records.len());
		for (record, (name, id)) in table.iter().zip(&records) {
			prop_assert_eq!(record.name(), name.as_slice());
			prop_assert_eq!(record.identifier(), *id);
		}
	}

	#[test]
	fn prop_any_prefix_never_panics(
		records in vec((vec(any::<u8>(), 0..16), any::<i64>()), 1..8),
		cut in any::<prop::sample::Index>(),
	) {
		let bytes = TableBuilder::new().records(records.iter().map(|(name, id)| (name.as_slice(), *id))).build();
		let len = cut.index(bytes.len());
		let result = Table::deserialize(&bytes[..len]);
		if len < COUNT_SIZE {
			prop_assert_eq!(result, Ok(Table::new()));
		} else {
			prop_assert!(result.is_err());
		}
	}
}
