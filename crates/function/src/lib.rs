// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tally_core::value::column::{
	Column, ColumnData,
	view::group_by::{GroupByView, GroupKey},
};
use tally_type::{Error, Result, Type, Value};

pub mod aggregate;

pub struct AggregateFunctionContext<'a> {
	pub column: &'a Column,
	pub groups: &'a GroupByView,
}

/// Folds one column per group, then emits one output cell per group.
///
/// `finalize` yields the group keys in the order the groups were first seen
/// together with the result column; both have the same length.
pub trait AggregateFunction: Send + Sync {
	fn aggregate(&mut self, ctx: AggregateFunctionContext<'_>) -> Result<()>;

	fn finalize(&mut self) -> Result<(Vec<GroupKey>, ColumnData)>;
}

pub(crate) fn ensure_numeric(column: &Column) -> Result<()> {
	match column.get_type() {
		Type::Int8 | Type::Float8 | Type::Undefined => Ok(()),
		actual => Err(Error::type_mismatch(&column.name, Type::Float8, actual)),
	}
}

/// Appends one finalized cell, naming `column` when the cell does not fit the
/// output type.
pub(crate) fn push_cell(data: &mut ColumnData, column: &str, value: Value) -> Result<()> {
	let expected = data.get_type();
	data.push_value(value).map_err(|actual| Error::type_mismatch(column, expected, actual))
}
