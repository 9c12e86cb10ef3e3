// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::mem;

use indexmap::IndexMap;
use tally_core::value::column::{ColumnData, view::group_by::GroupKey};
use tally_type::Result;

use crate::{AggregateFunction, AggregateFunctionContext};

/// Number of rows per group holding a defined value.
pub struct Count {
	pub counts: IndexMap<GroupKey, i64>,
}

impl Count {
	pub fn new() -> Self {
		Self {
			counts: IndexMap::new(),
		}
	}
}

impl Default for Count {
	fn default() -> Self {
		Self::new()
	}
}

impl AggregateFunction for Count {
	fn aggregate(&mut self, ctx: AggregateFunctionContext<'_>) -> Result<()> {
		let data = ctx.column.data();

		for (group, indices) in ctx.groups.iter() {
			let count = indices.iter().filter(|&&i| data.is_defined(i)).count() as i64;
			*self.counts.entry(group.clone()).or_insert(0) += count;
		}
		Ok(())
	}

	fn finalize(&mut self) -> Result<(Vec<GroupKey>, ColumnData)> {
		let (keys, counts): (Vec<_>, Vec<_>) = mem::take(&mut self.counts).into_iter().unzip();
		Ok((keys, ColumnData::int8(counts)))
	}
}

#[cfg(test)]
mod tests {
	use tally_core::value::column::{Column, Columns};
	use tally_type::Value;

	use super::*;

	#[test]
	fn test_count_ignores_undefined() {
		let table = Columns::new(vec![
			Column::utf8("customer_state", ["SP", "SP", "RJ"]),
			Column::utf8_optional("customer_city", [Some("sao paulo"), None, Some("rio")]),
		]);
		let groups = table.group_by_view(&["customer_state"]).unwrap();

		let mut count = Count::new();
		count.aggregate(AggregateFunctionContext {
			column: table.column("customer_city").unwrap(),
			groups: &groups,
		})
		.unwrap();

		let (keys, data) = count.finalize().unwrap();
		assert_eq!(keys, vec![vec![Value::utf8("RJ")], vec![Value::utf8("SP")]]);
		assert_eq!(data, ColumnData::int8([1, 1]));
	}
}
