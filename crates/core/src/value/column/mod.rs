// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tally_type::{Date, DateTime, Error, Type, Value};

pub mod columns;
pub mod container;
pub mod data;
mod display;
pub mod sort;
pub mod view;

pub use columns::Columns;
pub use container::Container;
pub use data::ColumnData;

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push_value(&mut self, value: Value) -> tally_type::Result<()> {
		let expected = self.get_type();
		self.data.push_value(value).map_err(|actual| Error::type_mismatch(&self.name, expected, actual))
	}

	pub fn bool(name: &str, values: impl IntoIterator<Item = bool>) -> Self {
		Self::new(name, ColumnData::bool(values))
	}

	pub fn int8(name: &str, values: impl IntoIterator<Item = i64>) -> Self {
		Self::new(name, ColumnData::int8(values))
	}

	pub fn int8_optional(name: &str, values: impl IntoIterator<Item = Option<i64>>) -> Self {
		Self::new(name, ColumnData::int8_optional(values))
	}

	pub fn float8(name: &str, values: impl IntoIterator<Item = f64>) -> Self {
		Self::new(name, ColumnData::float8(values))
	}

	pub fn float8_optional(name: &str, values: impl IntoIterator<Item = Option<f64>>) -> Self {
		Self::new(name, ColumnData::float8_optional(values))
	}

	pub fn utf8(name: &str, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self::new(name, ColumnData::utf8(values))
	}

	pub fn utf8_optional(name: &str, values: impl IntoIterator<Item = Option<impl Into<String>>>) -> Self {
		Self::new(name, ColumnData::utf8_optional(values))
	}

	pub fn date(name: &str, values: impl IntoIterator<Item = Date>) -> Self {
		Self::new(name, ColumnData::date(values))
	}

	pub fn datetime(name: &str, values: impl IntoIterator<Item = DateTime>) -> Self {
		Self::new(name, ColumnData::datetime(values))
	}

	pub fn datetime_optional(name: &str, values: impl IntoIterator<Item = Option<DateTime>>) -> Self {
		Self::new(name, ColumnData::datetime_optional(values))
	}

	pub fn undefined(name: &str, len: usize) -> Self {
		Self::new(name, ColumnData::undefined(len))
	}
}
