// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::{Deref, Index};

use serde::{
	Serialize, Serializer,
	ser::{SerializeMap, SerializeSeq},
};
use tally_type::{Error, Result, Type, Value};

use crate::value::column::Column;

/// A table: named columns of equal length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Columns {
	pub columns: Vec<Column>,
}

impl Deref for Columns {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for Columns {
	type Output = Column;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

impl Columns {
	pub fn new(columns: Vec<Column>) -> Self {
		let n = columns.first().map_or(0, |c| c.data.len());
		assert!(columns.iter().all(|c| c.data.len() == n), "all columns must have the same length");

		Self {
			columns,
		}
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(0, |c| c.data.len())
	}

	/// (rows, columns)
	pub fn shape(&self) -> (usize, usize) {
		(self.row_count(), self.columns.len())
	}

	/// True when the table holds no rows; the schema may still be present.
	pub fn is_empty(&self) -> bool {
		self.row_count() == 0
	}

	pub fn names(&self) -> Vec<&str> {
		self.columns.iter().map(|c| c.name.as_str()).collect()
	}

	pub fn find_column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name == name)
	}

	/// Looks up a required column. A missing column is a schema contract
	/// violation and surfaces as [`Error::MissingField`].
	pub fn column(&self, name: &str) -> Result<&Column> {
		self.find_column(name).ok_or_else(|| Error::missing_field(name))
	}

	/// Like [`Columns::column`], additionally requiring one of `types`.
	/// An all-undefined column is accepted for any type.
	pub fn typed_column(&self, name: &str, types: &[Type]) -> Result<&Column> {
		let column = self.column(name)?;
		let actual = column.get_type();
		if actual == Type::Undefined || types.contains(&actual) {
			return Ok(column);
		}
		Err(Error::type_mismatch(name, types.first().copied().unwrap_or(Type::Undefined), actual))
	}

	pub fn row(&self, index: usize) -> Vec<Value> {
		self.columns.iter().map(|c| c.data.get_value(index)).collect()
	}

	pub fn rows(&self) -> impl Iterator<Item = Vec<Value>> + '_ {
		(0..self.row_count()).map(|i| self.row(i))
	}

	/// Builds a new table from the rows at `indices`, in that order.
	pub fn take(&self, indices: &[usize]) -> Self {
		Self {
			columns: self
				.columns
				.iter()
				.map(|c| Column {
					name: c.name.clone(),
					data: c.data.take(indices),
				})
				.collect(),
		}
	}

	/// Keeps only the first `n` rows.
	pub fn truncate(&mut self, n: usize) {
		if n >= self.row_count() {
			return;
		}
		let indices: Vec<usize> = (0..n).collect();
		*self = self.take(&indices);
	}

	/// An empty table with the same schema
	pub fn empty_like(&self) -> Self {
		Self {
			columns: self
				.columns
				.iter()
				.map(|c| Column {
					name: c.name.clone(),
					data: c.data.empty(),
				})
				.collect(),
		}
	}
}

/// Serializes as an array of row objects keyed by column name.
impl Serialize for Columns {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut seq = serializer.serialize_seq(Some(self.row_count()))?;
		for row in 0..self.row_count() {
			seq.serialize_element(&RowRef {
				columns: self,
				row,
			})?;
		}
		seq.end()
	}
}

struct RowRef<'a> {
	columns: &'a Columns,
	row: usize,
}

impl Serialize for RowRef<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.columns.len()))?;
		for column in self.columns.iter() {
			map.serialize_entry(&column.name, &column.data.get_value(self.row))?;
		}
		map.end()
	}
}
