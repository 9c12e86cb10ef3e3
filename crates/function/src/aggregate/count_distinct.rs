// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashSet, mem};

use indexmap::IndexMap;
use tally_core::value::column::{ColumnData, view::group_by::GroupKey};
use tally_type::{Result, Value};

use crate::{AggregateFunction, AggregateFunctionContext};

/// Number of distinct defined values per group.
///
/// Identifier columns fan out (an order has one row per payment, a product
/// one row per sold unit), so every "how many orders/customers/products"
/// figure goes through this rather than a row count.
pub struct CountDistinct {
	pub seen: IndexMap<GroupKey, HashSet<Value>>,
}

impl CountDistinct {
	pub fn new() -> Self {
		Self {
			seen: IndexMap::new(),
		}
	}
}

impl Default for CountDistinct {
	fn default() -> Self {
		Self::new()
	}
}

impl AggregateFunction for CountDistinct {
	fn aggregate(&mut self, ctx: AggregateFunctionContext<'_>) -> Result<()> {
		let data = ctx.column.data();

		for (group, indices) in ctx.groups.iter() {
			let seen = self.seen.entry(group.clone()).or_default();
			for &i in indices {
				let value = data.get_value(i);
				if value.is_defined() {
					seen.insert(value);
				}
			}
		}
		Ok(())
	}

	fn finalize(&mut self) -> Result<(Vec<GroupKey>, ColumnData)> {
		let (keys, counts): (Vec<_>, Vec<_>) =
			mem::take(&mut self.seen).into_iter().map(|(key, seen)| (key, seen.len() as i64)).unzip();
		Ok((keys, ColumnData::int8(counts)))
	}
}

#[cfg(test)]
mod tests {
	use tally_core::value::column::{Column, Columns};

	use super::*;

	#[test]
	fn test_split_payments_count_once() {
		let table = Columns::new(vec![
			Column::utf8("payment_type", ["credit_card", "credit_card", "voucher", "credit_card"]),
			Column::utf8("order_id", ["o1", "o1", "o1", "o2"]),
		]);
		let groups = table.group_by_view(&["payment_type"]).unwrap();

		let mut distinct = CountDistinct::new();
		distinct.aggregate(AggregateFunctionContext {
			column: table.column("order_id").unwrap(),
			groups: &groups,
		})
		.unwrap();

		let (keys, data) = distinct.finalize().unwrap();
		assert_eq!(keys, vec![vec![Value::utf8("credit_card")], vec![Value::utf8("voucher")]]);
		assert_eq!(data, ColumnData::int8([2, 1]));
	}

	#[test]
	fn test_undefined_ids_are_not_counted() {
		let table = Columns::new(vec![
			Column::int8("review_score", [5, 5]),
			Column::utf8_optional("customer_id", [None::<String>, None]),
		]);
		let groups = table.group_by_view(&["review_score"]).unwrap();

		let mut distinct = CountDistinct::new();
		distinct.aggregate(AggregateFunctionContext {
			column: table.column("customer_id").unwrap(),
			groups: &groups,
		})
		.unwrap();

		let (_, data) = distinct.finalize().unwrap();
		assert_eq!(data, ColumnData::int8([0]));
	}
}
