// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::Type;

pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations surfaced by the aggregation core.
///
/// Data-shape conditions (empty tables, empty partitions, tied modes) are
/// never reported through this type; they are handled inside the
/// aggregations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("required field `{name}` is missing")]
	MissingField {
		name: String,
	},

	#[error("column `{column}` has type {actual}, expected {expected}")]
	TypeMismatch {
		column: String,
		expected: Type,
		actual: Type,
	},

	#[error("integer overflow aggregating column `{column}`")]
	Overflow {
		column: String,
	},

	#[error("invalid argument: {message}")]
	InvalidArgument {
		message: String,
	},

	#[error("row {row}, column `{column}`: {message}")]
	Parse {
		row: u64,
		column: String,
		message: String,
	},

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl Error {
	pub fn missing_field(name: impl Into<String>) -> Self {
		Error::MissingField {
			name: name.into(),
		}
	}

	pub fn type_mismatch(column: impl Into<String>, expected: Type, actual: Type) -> Self {
		Error::TypeMismatch {
			column: column.into(),
			expected,
			actual,
		}
	}

	pub fn overflow(column: impl Into<String>) -> Self {
		Error::Overflow {
			column: column.into(),
		}
	}

	pub fn invalid_argument(message: impl Into<String>) -> Self {
		Error::InvalidArgument {
			message: message.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_missing_field_message() {
		let err = Error::missing_field("order_id");
		assert_eq!(err.to_string(), "required field `order_id` is missing");
	}

	#[test]
	fn test_type_mismatch_message() {
		let err = Error::type_mismatch("price", Type::Float8, Type::Utf8);
		assert_eq!(err.to_string(), "column `price` has type UTF8, expected FLOAT8");
	}

	#[test]
	fn test_overflow_message() {
		assert_eq!(Error::overflow("quantity").to_string(), "integer overflow aggregating column `quantity`");
	}

	#[test]
	fn test_parse_message() {
		let err = Error::Parse {
			row: 3,
			column: "payment_value".to_string(),
			message: "invalid float".to_string(),
		};
		assert_eq!(err.to_string(), "row 3, column `payment_value`: invalid float");
	}
}
