// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::mem;

use indexmap::IndexMap;
use tally_core::value::column::{ColumnData, view::group_by::GroupKey};
use tally_type::{Result, Value};

use crate::{AggregateFunction, AggregateFunctionContext, ensure_numeric, push_cell};

/// Arithmetic mean of the defined values. A group without any defined value
/// yields undefined.
pub struct Avg {
	pub sums: IndexMap<GroupKey, f64>,
	pub counts: IndexMap<GroupKey, u64>,
	pub column: String,
}

impl Avg {
	pub fn new() -> Self {
		Self {
			sums: IndexMap::new(),
			counts: IndexMap::new(),
			column: String::new(),
		}
	}
}

impl Default for Avg {
	fn default() -> Self {
		Self::new()
	}
}

impl AggregateFunction for Avg {
	fn aggregate(&mut self, ctx: AggregateFunctionContext<'_>) -> Result<()> {
		ensure_numeric(ctx.column)?;
		let data = ctx.column.data();
		if self.column.is_empty() {
			self.column = ctx.column.name.clone();
		}

		for (group, indices) in ctx.groups.iter() {
			let mut sum = 0.0;
			let mut count = 0;

			for &i in indices {
				if let Some(value) = data.get_value(i).as_f64() {
					sum += value;
					count += 1;
				}
			}

			*self.sums.entry(group.clone()).or_insert(0.0) += sum;
			*self.counts.entry(group.clone()).or_insert(0) += count;
		}
		Ok(())
	}

	fn finalize(&mut self) -> Result<(Vec<GroupKey>, ColumnData)> {
		let mut keys = Vec::with_capacity(self.sums.len());
		let mut data = ColumnData::float8_with_capacity(self.sums.len());

		for (key, sum) in mem::take(&mut self.sums) {
			let count = self.counts.swap_remove(&key).unwrap_or(0);
			let avg = if count > 0 {
				Value::float8(sum / count as f64)
			} else {
				Value::Undefined
			};

			keys.push(key);
			push_cell(&mut data, &self.column, avg)?;
		}

		Ok((keys, data))
	}
}
