// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::mem;

use indexmap::IndexMap;
use tally_core::value::column::{ColumnData, view::group_by::GroupKey};
use tally_type::{Error, Result, Type, Value};

use crate::{AggregateFunction, AggregateFunctionContext, ensure_numeric, push_cell};

/// Sum of the defined values. Integer input stays integer and fails with
/// [`Error::Overflow`] instead of wrapping; a group without any defined value
/// yields undefined.
pub struct Sum {
	pub sums: IndexMap<GroupKey, Value>,
	pub ty: Type,
	pub column: String,
}

impl Sum {
	pub fn new() -> Self {
		Self {
			sums: IndexMap::new(),
			ty: Type::Undefined,
			column: String::new(),
		}
	}
}

impl Default for Sum {
	fn default() -> Self {
		Self::new()
	}
}

fn add(column: &str, acc: &Value, value: &Value) -> Result<Value> {
	match (acc, value) {
		(Value::Undefined, v) => Ok(v.clone()),
		(Value::Int8(l), Value::Int8(r)) => l.checked_add(*r).map(Value::Int8).ok_or_else(|| Error::overflow(column)),
		(l, r) => match (l.as_f64(), r.as_f64()) {
			(Some(l), Some(r)) => Ok(Value::float8(l + r)),
			_ => Ok(l.clone()),
		},
	}
}

impl AggregateFunction for Sum {
	fn aggregate(&mut self, ctx: AggregateFunctionContext<'_>) -> Result<()> {
		ensure_numeric(ctx.column)?;
		let data = ctx.column.data();
		if self.ty == Type::Undefined {
			self.ty = data.get_type();
		}
		if self.column.is_empty() {
			self.column = ctx.column.name.clone();
		}

		for (group, indices) in ctx.groups.iter() {
			let acc = self.sums.entry(group.clone()).or_insert(Value::Undefined);
			for &i in indices {
				let value = data.get_value(i);
				if value.is_defined() {
					*acc = add(&self.column, acc, &value)?;
				}
			}
		}
		Ok(())
	}

	fn finalize(&mut self) -> Result<(Vec<GroupKey>, ColumnData)> {
		let mut keys = Vec::with_capacity(self.sums.len());
		let mut data = ColumnData::with_capacity(self.ty, self.sums.len());

		for (key, sum) in mem::take(&mut self.sums) {
			keys.push(key);
			push_cell(&mut data, &self.column, sum)?;
		}

		Ok((keys, data))
	}
}

#[cfg(test)]
mod tests {
	use tally_core::value::column::{Column, Columns};

	use super::*;

	fn sum(table: &Columns, key: &str, column: &str) -> (Vec<GroupKey>, ColumnData) {
		let groups = table.group_by_view(&[key]).unwrap();
		let mut sum = Sum::new();
		sum.aggregate(AggregateFunctionContext {
			column: table.column(column).unwrap(),
			groups: &groups,
		})
		.unwrap();
		sum.finalize().unwrap()
	}

	#[test]
	fn test_sum_int_stays_int() {
		let table = Columns::new(vec![
			Column::utf8("product_category_name_english", ["toys", "toys", "garden"]),
			Column::int8("quantity", [1, 2, 4]),
		]);

		let (keys, data) = sum(&table, "product_category_name_english", "quantity");
		assert_eq!(keys, vec![vec![Value::utf8("garden")], vec![Value::utf8("toys")]]);
		assert_eq!(data.get_type(), Type::Int8);
		assert_eq!(data.get_value(0), Value::int8(4));
		assert_eq!(data.get_value(1), Value::int8(3));
	}

	#[test]
	fn test_sum_of_only_undefined_is_undefined() {
		let table = Columns::new(vec![
			Column::int8("review_score", [1, 5, 5]),
			Column::float8_optional("payment_value", [None, Some(1.5), Some(2.0)]),
		]);

		let (_, data) = sum(&table, "review_score", "payment_value");
		assert_eq!(data.get_value(0), Value::Undefined);
		assert_eq!(data.get_value(1), Value::float8(3.5));
	}

	#[test]
	fn test_sum_int_overflow_is_error() {
		let table = Columns::new(vec![
			Column::utf8("product_category_name_english", ["toys", "toys"]),
			Column::int8("quantity", [i64::MAX, 1]),
		]);
		let groups = table.group_by_view(&["product_category_name_english"]).unwrap();

		let err = Sum::new()
			.aggregate(AggregateFunctionContext {
				column: table.column("quantity").unwrap(),
				groups: &groups,
			})
			.unwrap_err();
		assert!(matches!(err, Error::Overflow { ref column } if column == "quantity"));
	}

	#[test]
	fn test_mixed_inputs_fail_in_finalize() {
		let table = Columns::new(vec![
			Column::int8("review_score", [5, 5]),
			Column::int8("quantity", [1, 2]),
			Column::float8("price", [1.5, 2.0]),
		]);
		let groups = table.group_by_view(&["review_score"]).unwrap();

		let mut sum = Sum::new();
		for column in ["quantity", "price"] {
			sum.aggregate(AggregateFunctionContext {
				column: table.column(column).unwrap(),
				groups: &groups,
			})
			.unwrap();
		}
		assert!(matches!(sum.finalize(), Err(Error::TypeMismatch { .. })));
	}

	#[test]
	fn test_sum_fully_undefined_column() {
		let table = Columns::new(vec![Column::int8("review_score", [1, 2]), Column::undefined("payment_value", 2)]);

		let (keys, data) = sum(&table, "review_score", "payment_value");
		assert_eq!(keys.len(), 2);
		assert_eq!(data.len(), 2);
		assert!(data.is_fully_undefined());
	}
}
