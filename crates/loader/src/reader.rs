// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use tally_type::Error as CoreError;
use tracing::trace;

use crate::Result;

fn check_headers(headers: &StringRecord, required: &[&str]) -> Result<()> {
	for name in required {
		if !headers.iter().any(|h| h == *name) {
			return Err(CoreError::missing_field(*name).into());
		}
	}
	Ok(())
}

/// Reads every data row of a CSV into `R`, converting each with `convert`.
///
/// Rows are numbered the way a text editor shows them, so the header is
/// row 1.
pub(crate) fn read_records<R, T, F>(reader: impl Read, required: &[&str], mut convert: F) -> Result<Vec<T>>
where
	R: DeserializeOwned,
	F: FnMut(u64, R) -> Result<T>,
{
	let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

	let headers = reader.headers()?.clone();
	check_headers(&headers, required)?;
	trace!(columns = headers.len(), "headers");

	let mut result = Vec::new();
	for record in reader.records() {
		let record = record?;
		let row = record.position().map_or(0, |p| p.line());
		let raw: R = record.deserialize(Some(&headers))?;
		result.push(convert(row, raw)?);
	}
	Ok(result)
}
