// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tally_type::{Date, DateTime, Type, Value, value::GetType};

use crate::value::column::container::Container;

#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
	Bool(Container<bool>),
	Int8(Container<i64>),
	Float8(Container<f64>),
	Utf8(Container<String>),
	Date(Container<Date>),
	DateTime(Container<DateTime>),
	// special case: all undefined
	Undefined(usize),
}

impl ColumnData {
	pub fn bool(values: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(Container::new(values.into_iter().collect()))
	}

	pub fn int8(values: impl IntoIterator<Item = i64>) -> Self {
		ColumnData::Int8(Container::new(values.into_iter().collect()))
	}

	pub fn int8_optional(values: impl IntoIterator<Item = Option<i64>>) -> Self {
		ColumnData::Int8(Container::from_options(values))
	}

	pub fn float8(values: impl IntoIterator<Item = f64>) -> Self {
		Self::float8_optional(values.into_iter().map(Some))
	}

	/// NaN is stored as undefined
	pub fn float8_optional(values: impl IntoIterator<Item = Option<f64>>) -> Self {
		ColumnData::Float8(Container::from_options(values.into_iter().map(|v| v.filter(|f| !f.is_nan()))))
	}

	pub fn utf8(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
		ColumnData::Utf8(Container::new(values.into_iter().map(Into::into).collect()))
	}

	pub fn utf8_optional(values: impl IntoIterator<Item = Option<impl Into<String>>>) -> Self {
		ColumnData::Utf8(Container::from_options(values.into_iter().map(|v| v.map(Into::into))))
	}

	pub fn date(values: impl IntoIterator<Item = Date>) -> Self {
		ColumnData::Date(Container::new(values.into_iter().collect()))
	}

	pub fn datetime(values: impl IntoIterator<Item = DateTime>) -> Self {
		ColumnData::DateTime(Container::new(values.into_iter().collect()))
	}

	pub fn datetime_optional(values: impl IntoIterator<Item = Option<DateTime>>) -> Self {
		ColumnData::DateTime(Container::from_options(values))
	}

	pub fn undefined(len: usize) -> Self {
		ColumnData::Undefined(len)
	}

	pub fn with_capacity(ty: Type, capacity: usize) -> Self {
		match ty {
			Type::Boolean => ColumnData::Bool(Container::with_capacity(capacity)),
			Type::Int8 => ColumnData::Int8(Container::with_capacity(capacity)),
			Type::Float8 => ColumnData::Float8(Container::with_capacity(capacity)),
			Type::Utf8 => ColumnData::Utf8(Container::with_capacity(capacity)),
			Type::Date => ColumnData::Date(Container::with_capacity(capacity)),
			Type::DateTime => ColumnData::DateTime(Container::with_capacity(capacity)),
			Type::Undefined => ColumnData::Undefined(0),
		}
	}

	pub fn int8_with_capacity(capacity: usize) -> Self {
		Self::with_capacity(Type::Int8, capacity)
	}

	pub fn float8_with_capacity(capacity: usize) -> Self {
		Self::with_capacity(Type::Float8, capacity)
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Date(_) => Type::Date,
			ColumnData::DateTime(_) => Type::DateTime,
			ColumnData::Undefined(_) => Type::Undefined,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(c) => c.len(),
			ColumnData::Int8(c) => c.len(),
			ColumnData::Float8(c) => c.len(),
			ColumnData::Utf8(c) => c.len(),
			ColumnData::Date(c) => c.len(),
			ColumnData::DateTime(c) => c.len(),
			ColumnData::Undefined(len) => *len,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, index: usize) -> bool {
		match self {
			ColumnData::Bool(c) => c.is_defined(index),
			ColumnData::Int8(c) => c.is_defined(index),
			ColumnData::Float8(c) => c.is_defined(index),
			ColumnData::Utf8(c) => c.is_defined(index),
			ColumnData::Date(c) => c.is_defined(index),
			ColumnData::DateTime(c) => c.is_defined(index),
			ColumnData::Undefined(_) => false,
		}
	}

	/// True when no row holds a defined value (including the empty column)
	pub fn is_fully_undefined(&self) -> bool {
		(0..self.len()).all(|i| !self.is_defined(i))
	}

	pub fn get_value(&self, index: usize) -> Value {
		let value = match self {
			ColumnData::Bool(c) => c.get(index).map(|v| Value::Boolean(*v)),
			ColumnData::Int8(c) => c.get(index).map(|v| Value::Int8(*v)),
			ColumnData::Float8(c) => c.get(index).map(|v| Value::float8(*v)),
			ColumnData::Utf8(c) => c.get(index).map(|v| Value::Utf8(v.clone())),
			ColumnData::Date(c) => c.get(index).map(|v| Value::Date(*v)),
			ColumnData::DateTime(c) => c.get(index).map(|v| Value::DateTime(*v)),
			ColumnData::Undefined(_) => None,
		};
		value.unwrap_or(Value::Undefined)
	}

	pub fn as_string(&self, index: usize) -> String {
		self.get_value(index).to_string()
	}

	/// Appends a value of the column's type, or an undefined row.
	///
	/// An all-undefined column adopts the type of the first defined value.
	/// On a type mismatch the value is rejected and the offending type is
	/// returned.
	pub fn push_value(&mut self, value: Value) -> Result<(), Type> {
		if let ColumnData::Undefined(len) = self {
			if value.is_undefined() {
				*len += 1;
				return Ok(());
			}
			let len = *len;
			*self = match &value {
				Value::Boolean(_) => ColumnData::Bool(Container::undefined(len)),
				Value::Int8(_) => ColumnData::Int8(Container::undefined(len)),
				Value::Float8(_) => ColumnData::Float8(Container::undefined(len)),
				Value::Utf8(_) => ColumnData::Utf8(Container::undefined(len)),
				Value::Date(_) => ColumnData::Date(Container::undefined(len)),
				Value::DateTime(_) => ColumnData::DateTime(Container::undefined(len)),
				Value::Undefined => ColumnData::Undefined(len),
			};
		}

		match (self, value) {
			(ColumnData::Bool(c), Value::Boolean(v)) => c.push(v),
			(ColumnData::Int8(c), Value::Int8(v)) => c.push(v),
			(ColumnData::Float8(c), Value::Float8(v)) => c.push(v.value()),
			(ColumnData::Utf8(c), Value::Utf8(v)) => c.push(v),
			(ColumnData::Date(c), Value::Date(v)) => c.push(v),
			(ColumnData::DateTime(c), Value::DateTime(v)) => c.push(v),
			(ColumnData::Bool(c), Value::Undefined) => c.push_undefined(),
			(ColumnData::Int8(c), Value::Undefined) => c.push_undefined(),
			(ColumnData::Float8(c), Value::Undefined) => c.push_undefined(),
			(ColumnData::Utf8(c), Value::Undefined) => c.push_undefined(),
			(ColumnData::Date(c), Value::Undefined) => c.push_undefined(),
			(ColumnData::DateTime(c), Value::Undefined) => c.push_undefined(),
			(_, value) => return Err(value.get_type()),
		}
		Ok(())
	}

	/// Builds a new column from the rows at `indices`, in that order.
	pub fn take(&self, indices: &[usize]) -> Self {
		match self {
			ColumnData::Bool(c) => ColumnData::Bool(c.take(indices)),
			ColumnData::Int8(c) => ColumnData::Int8(c.take(indices)),
			ColumnData::Float8(c) => ColumnData::Float8(c.take(indices)),
			ColumnData::Utf8(c) => ColumnData::Utf8(c.take(indices)),
			ColumnData::Date(c) => ColumnData::Date(c.take(indices)),
			ColumnData::DateTime(c) => ColumnData::DateTime(c.take(indices)),
			ColumnData::Undefined(_) => ColumnData::Undefined(indices.len()),
		}
	}

	/// An empty column of the same type
	pub fn empty(&self) -> Self {
		Self::with_capacity(self.get_type(), 0)
	}
}
