// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, mem};

use indexmap::IndexMap;
use tally_core::value::column::{ColumnData, view::group_by::GroupKey};
use tally_type::{Result, Type, Value};

use crate::{AggregateFunction, AggregateFunctionContext, push_cell};

/// Most frequent defined value per group.
///
/// Ties resolve to the smallest tied value in `Value` order. A group without
/// any defined value yields undefined.
pub struct Mode {
	pub frequencies: IndexMap<GroupKey, HashMap<Value, usize>>,
	pub ty: Type,
	pub column: String,
}

impl Mode {
	pub fn new() -> Self {
		Self {
			frequencies: IndexMap::new(),
			ty: Type::Undefined,
			column: String::new(),
		}
	}
}

impl Default for Mode {
	fn default() -> Self {
		Self::new()
	}
}

fn most_frequent(frequencies: HashMap<Value, usize>) -> Value {
	frequencies
		.into_iter()
		.min_by(|(lv, lc), (rv, rc)| rc.cmp(lc).then_with(|| lv.cmp(rv)))
		.map(|(value, _)| value)
		.unwrap_or(Value::Undefined)
}

/// Mode of a whole column, with the same tie-break as [`Mode`].
pub fn mode_of(data: &ColumnData) -> Value {
	let mut frequencies: HashMap<Value, usize> = HashMap::new();
	for i in 0..data.len() {
		let value = data.get_value(i);
		if value.is_defined() {
			*frequencies.entry(value).or_insert(0) += 1;
		}
	}
	most_frequent(frequencies)
}

impl AggregateFunction for Mode {
	fn aggregate(&mut self, ctx: AggregateFunctionContext<'_>) -> Result<()> {
		let data = ctx.column.data();
		if self.ty == Type::Undefined {
			self.ty = data.get_type();
		}
		if self.column.is_empty() {
			self.column = ctx.column.name.clone();
		}

		for (group, indices) in ctx.groups.iter() {
			let frequencies = self.frequencies.entry(group.clone()).or_default();
			for &i in indices {
				let value = data.get_value(i);
				if value.is_defined() {
					*frequencies.entry(value).or_insert(0) += 1;
				}
			}
		}
		Ok(())
	}

	fn finalize(&mut self) -> Result<(Vec<GroupKey>, ColumnData)> {
		let mut keys = Vec::with_capacity(self.frequencies.len());
		let mut data = ColumnData::with_capacity(self.ty, self.frequencies.len());

		for (key, frequencies) in mem::take(&mut self.frequencies) {
			keys.push(key);
			push_cell(&mut data, &self.column, most_frequent(frequencies))?;
		}

		Ok((keys, data))
	}
}
