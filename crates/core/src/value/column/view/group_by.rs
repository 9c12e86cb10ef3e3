// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::{BTreeMap, btree_map::Iter},
	ops::Deref,
};

use tally_type::{Result, Value};

use crate::value::column::{ColumnData, Columns};

pub type GroupKey = Vec<Value>;

/// Row indices per distinct key tuple.
///
/// Backed by an ordered map so iteration is always in ascending key order,
/// with undefined key parts sorting last.
#[derive(Debug, Default, PartialEq)]
pub struct GroupByView(pub BTreeMap<GroupKey, Vec<usize>>);

impl Deref for GroupByView {
	type Target = BTreeMap<GroupKey, Vec<usize>>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl GroupByView {
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	pub fn iter(&self) -> Iter<'_, GroupKey, Vec<usize>> {
		self.0.iter()
	}

	pub fn insert(&mut self, key: GroupKey, row: usize) {
		self.0.entry(key).or_default().push(row);
	}

	pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
		self.0.keys()
	}
}

impl Columns {
	/// Partitions the rows by the values of `keys`. Rows whose key parts are
	/// undefined form their own partition.
	pub fn group_by_view(&self, keys: &[&str]) -> Result<GroupByView> {
		let key_columns: Vec<&ColumnData> =
			keys.iter().map(|&key| self.column(key).map(|c| &c.data)).collect::<Result<_>>()?;

		let mut result = GroupByView::new();

		for row_idx in 0..self.row_count() {
			let key: GroupKey = key_columns.iter().map(|col| col.get_value(row_idx)).collect();
			result.insert(key, row_idx);
		}

		Ok(result)
	}
}
