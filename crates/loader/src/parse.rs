// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Cell parsing shared by both tables. Empty cells and `NaN` are missing
//! values; anything else that fails to parse is an error naming the cell.

use tally_type::{DateTime, Error, Result};

fn is_missing(cell: &str) -> bool {
	cell.is_empty() || cell.eq_ignore_ascii_case("nan")
}

fn parse_error(row: u64, column: &str, message: impl Into<String>) -> Error {
	Error::Parse {
		row,
		column: column.to_string(),
		message: message.into(),
	}
}

pub(crate) fn missing(row: u64, column: &str) -> Error {
	parse_error(row, column, "missing value")
}

pub(crate) fn text(cell: Option<String>) -> Option<String> {
	cell.map(|s| s.trim().to_string()).filter(|s| !is_missing(s))
}

pub(crate) fn required_text(row: u64, column: &str, cell: Option<String>) -> Result<String> {
	text(cell).ok_or_else(|| missing(row, column))
}

pub(crate) fn float8(row: u64, column: &str, cell: Option<&str>) -> Result<Option<f64>> {
	let Some(cell) = cell.map(str::trim).filter(|s| !is_missing(s)) else {
		return Ok(None);
	};
	cell.parse::<f64>().map(Some).map_err(|_| parse_error(row, column, format!("`{}` is not a number", cell)))
}

/// Integers, also in the `4.0` spelling float exports produce.
pub(crate) fn int8(row: u64, column: &str, cell: Option<&str>) -> Result<Option<i64>> {
	let Some(cell) = cell.map(str::trim).filter(|s| !is_missing(s)) else {
		return Ok(None);
	};
	if let Ok(value) = cell.parse::<i64>() {
		return Ok(Some(value));
	}
	match cell.parse::<f64>() {
		Ok(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
			Ok(Some(value as i64))
		}
		_ => Err(parse_error(row, column, format!("`{}` is not an integer", cell))),
	}
}

pub(crate) fn datetime(row: u64, column: &str, cell: Option<&str>) -> Result<Option<DateTime>> {
	let Some(cell) = cell.map(str::trim).filter(|s| !is_missing(s)) else {
		return Ok(None);
	};
	cell.parse::<DateTime>().map(Some).map_err(|message| parse_error(row, column, message))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_missing_cells() {
		assert_eq!(float8(2, "price", Some("")).unwrap(), None);
		assert_eq!(float8(2, "price", Some("NaN")).unwrap(), None);
		assert_eq!(float8(2, "price", None).unwrap(), None);
		assert_eq!(text(Some(" ".to_string())), None);
	}

	#[test]
	fn test_int_accepts_float_spelling() {
		assert_eq!(int8(2, "review_score", Some("4.0")).unwrap(), Some(4));
		assert_eq!(int8(2, "review_score", Some("4")).unwrap(), Some(4));
		assert!(int8(2, "review_score", Some("4.5")).is_err());
	}

	#[test]
	fn test_parse_error_names_cell() {
		let err = float8(7, "payment_value", Some("abc")).unwrap_err();
		assert_eq!(err.to_string(), "row 7, column `payment_value`: `abc` is not a number");
	}

	#[test]
	fn test_datetime_formats() {
		let expected = DateTime::new(2017, 10, 2, 10, 56, 33, 0);
		assert_eq!(datetime(2, "ts", Some("2017-10-02 10:56:33")).unwrap(), expected);
		assert_eq!(datetime(2, "ts", Some("2017-10-02T10:56:33Z")).unwrap(), expected);
		assert_eq!(datetime(2, "ts", Some("2017-10-02")).unwrap(), DateTime::new(2017, 10, 2, 0, 0, 0, 0));
		assert!(datetime(2, "ts", Some("yesterday")).is_err());
	}

	#[test]
	fn test_datetime_year_out_of_range_is_parse_error() {
		let err = datetime(4, "order_purchase_timestamp", Some("20000000-01-01 10:00:00")).unwrap_err();
		assert!(matches!(err, Error::Parse { row: 4, ref column, .. } if column == "order_purchase_timestamp"));
	}

	#[test]
	fn test_required_text() {
		assert_eq!(required_text(3, "order_id", Some("o1".to_string())).unwrap(), "o1");
		assert!(matches!(required_text(3, "order_id", None), Err(Error::Parse { row: 3, .. })));
	}
}
