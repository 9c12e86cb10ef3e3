// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use tally_type::Result;

use crate::value::column::{ColumnData, Columns};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
	Asc,
	Desc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortKey {
	pub column: String,
	pub direction: SortDirection,
}

impl SortKey {
	pub fn asc(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Asc,
		}
	}

	pub fn desc(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			direction: SortDirection::Desc,
		}
	}
}

impl Columns {
	/// Stable multi-key sort. Undefined values sort last regardless of
	/// direction.
	pub fn sort(&mut self, keys: &[SortKey]) -> Result<()> {
		let key_columns: Vec<(&ColumnData, SortDirection)> = keys
			.iter()
			.map(|key| self.column(&key.column).map(|c| (&c.data, key.direction)))
			.collect::<Result<_>>()?;

		let mut indices: Vec<usize> = (0..self.row_count()).collect();

		indices.sort_by(|&l, &r| {
			for (data, direction) in &key_columns {
				let lv = data.get_value(l);
				let rv = data.get_value(r);

				let ordering = match (lv.is_undefined(), rv.is_undefined()) {
					(true, true) => Ordering::Equal,
					(true, false) => Ordering::Greater,
					(false, true) => Ordering::Less,
					(false, false) => match direction {
						SortDirection::Asc => lv.cmp(&rv),
						SortDirection::Desc => rv.cmp(&lv),
					},
				};

				if ordering != Ordering::Equal {
					return ordering;
				}
			}
			Ordering::Equal
		});

		*self = self.take(&indices);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use tally_type::{Error, Value};

	use super::*;
	use crate::value::column::Column;

	#[test]
	fn test_sort_desc_then_asc() {
		let mut table = Columns::new(vec![
			Column::utf8("customer_city", ["rio", "campinas", "sao paulo", "belo horizonte"]),
			Column::int8("count", [3, 5, 5, 1]),
		]);

		table.sort(&[SortKey::desc("count"), SortKey::asc("customer_city")]).unwrap();

		let cities: Vec<Value> = (0..4).map(|i| table[0].data.get_value(i)).collect();
		assert_eq!(
			cities,
			vec![
				Value::utf8("campinas"),
				Value::utf8("sao paulo"),
				Value::utf8("rio"),
				Value::utf8("belo horizonte"),
			]
		);
	}

	#[test]
	fn test_undefined_sorts_last_in_both_directions() {
		let mut table = Columns::new(vec![Column::float8_optional("total_sales", [None, Some(1.0), Some(2.0)])]);

		table.sort(&[SortKey::desc("total_sales")]).unwrap();
		assert_eq!(table.row(2), vec![Value::Undefined]);

		table.sort(&[SortKey::asc("total_sales")]).unwrap();
		assert_eq!(table.row(0), vec![Value::float8(1.0)]);
		assert_eq!(table.row(2), vec![Value::Undefined]);
	}

	#[test]
	fn test_sort_is_stable() {
		let mut table =
			Columns::new(vec![Column::int8("score", [1, 1, 1]), Column::utf8("order_id", ["c", "a", "b"])]);
		table.sort(&[SortKey::asc("score")]).unwrap();
		assert_eq!(table[1].data.get_value(0), Value::utf8("c"));
		assert_eq!(table[1].data.get_value(2), Value::utf8("b"));
	}

	#[test]
	fn test_sort_unknown_column() {
		let mut table = Columns::new(vec![Column::int8("score", [1])]);
		assert!(matches!(table.sort(&[SortKey::asc("missing")]), Err(Error::MissingField { .. })));
	}
}
