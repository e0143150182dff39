// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use anyhow::Result;
use rcblob_format::Table;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RecordView {
	name: String,
	identifier: i64,
}

/// Render `table` as `identifier<TAB>name` lines, or as a JSON array.
pub fn table(table: &Table, json: bool) -> Result<String> {
	if json {
		let records: Vec<RecordView> = table
			.iter()
			.map(|record| RecordView {
				name: record.name_lossy().into_owned(),
				identifier: record.identifier(),
			})
			.collect();
		return Ok(serde_json::to_string_pretty(&records)?);
	}

	let mut out = String::new();
	for record in table {
		writeln!(out, "{}\t{}", record.identifier(), record.name_lossy())?;
	}
	Ok(out)
}

#[cfg(test)]
mod tests {
	use rcblob_testing::TableBuilder;

	use super::*;

	fn sample() -> Table {
		let bytes = TableBuilder::new().record("ping", 200).record("dup", 1).build();
		Table::deserialize(&bytes).unwrap()
	}

	#[test]
	fn test_plain() {
		assert_eq!(table(&sample(), false).unwrap(), "200\tping\n1\tdup\n");
	}

	#[test]
	fn test_plain_empty() {
		assert_eq!(table(&Table::new(), false).unwrap(), "");
	}

	#[test]
	fn test_json() {
		let out = table(&sample(), true).unwrap();
		let value: serde_json::Value = serde_json::from_str(&out).unwrap();
		assert_eq!(
			value,
			serde_json::json!([
				{ "name": "ping", "identifier": 200 },
				{ "name": "dup", "identifier": 1 },
			])
		);
	}
}
