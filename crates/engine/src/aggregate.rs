// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tally_core::value::column::{Column, ColumnData, Columns};
use tally_function::{
	AggregateFunction, AggregateFunctionContext,
	aggregate::{Avg, Count, CountDistinct, Mode, Sum},
};
use tally_type::{Error, Result, Type};
use tracing::{debug, instrument};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Aggregate {
	Count(String),
	CountDistinct(String),
	Sum(String),
	Avg(String),
	Mode(String),
}

impl Aggregate {
	pub fn count(column: &str) -> Self {
		Aggregate::Count(column.to_string())
	}

	pub fn count_distinct(column: &str) -> Self {
		Aggregate::CountDistinct(column.to_string())
	}

	pub fn sum(column: &str) -> Self {
		Aggregate::Sum(column.to_string())
	}

	pub fn avg(column: &str) -> Self {
		Aggregate::Avg(column.to_string())
	}

	pub fn mode(column: &str) -> Self {
		Aggregate::Mode(column.to_string())
	}

	pub fn column(&self) -> &str {
		match self {
			Aggregate::Count(c)
			| Aggregate::CountDistinct(c)
			| Aggregate::Sum(c)
			| Aggregate::Avg(c)
			| Aggregate::Mode(c) => c,
		}
	}

	pub fn display_name(&self) -> String {
		match self {
			Aggregate::Count(c) => format!("count({})", c),
			Aggregate::CountDistinct(c) => format!("count_distinct({})", c),
			Aggregate::Sum(c) => format!("sum({})", c),
			Aggregate::Avg(c) => format!("avg({})", c),
			Aggregate::Mode(c) => format!("mode({})", c),
		}
	}

	pub fn alias(self, alias: &str) -> AliasedAggregate {
		AliasedAggregate {
			aggregate: self,
			alias: alias.to_string(),
		}
	}

	fn function(&self) -> Box<dyn AggregateFunction> {
		match self {
			Aggregate::Count(_) => Box::new(Count::new()),
			Aggregate::CountDistinct(_) => Box::new(CountDistinct::new()),
			Aggregate::Sum(_) => Box::new(Sum::new()),
			Aggregate::Avg(_) => Box::new(Avg::new()),
			Aggregate::Mode(_) => Box::new(Mode::new()),
		}
	}

	/// Resolves the input column and the type of the produced column.
	fn output_type(&self, table: &Columns) -> Result<Type> {
		match self {
			Aggregate::Count(c) | Aggregate::CountDistinct(c) => {
				table.column(c)?;
				Ok(Type::Int8)
			}
			Aggregate::Sum(c) => Ok(table.typed_column(c, &[Type::Float8, Type::Int8])?.get_type()),
			Aggregate::Avg(c) => {
				table.typed_column(c, &[Type::Float8, Type::Int8])?;
				Ok(Type::Float8)
			}
			Aggregate::Mode(c) => Ok(table.column(c)?.get_type()),
		}
	}
}

/// An aggregate together with the name of the column it produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasedAggregate {
	pub aggregate: Aggregate,
	pub alias: String,
}

impl From<Aggregate> for AliasedAggregate {
	fn from(aggregate: Aggregate) -> Self {
		let alias = aggregate.display_name();
		Self {
			aggregate,
			alias,
		}
	}
}

/// Groups `table` by `key` and evaluates every aggregate per group.
///
/// The result holds the key column followed by one column per aggregate, one
/// row per distinct key in ascending key order (undefined key last). An empty
/// table, or a key column without a single defined value, yields an empty
/// result with the full output schema.
#[instrument(name = "engine::aggregate", level = "trace", skip(table, aggregates))]
pub fn aggregate(table: &Columns, key: &str, aggregates: &[AliasedAggregate]) -> Result<Columns> {
	let key_column = table.column(key)?;
	let output_types =
		aggregates.iter().map(|a| a.aggregate.output_type(table)).collect::<Result<Vec<Type>>>()?;

	if table.is_empty() || key_column.data.is_fully_undefined() {
		debug!(rows = table.row_count(), key, "no groupable rows");
		let mut columns = vec![Column::new(key, key_column.data.empty())];
		for (aggregate, ty) in aggregates.iter().zip(output_types) {
			columns.push(Column::new(aggregate.alias.as_str(), ColumnData::with_capacity(ty, 0)));
		}
		return Ok(Columns::new(columns));
	}

	let groups = table.group_by_view(&[key])?;
	debug!(rows = table.row_count(), groups = groups.len(), key, "grouped");

	let mut keys = Column::new(key, ColumnData::with_capacity(key_column.get_type(), groups.len()));
	for group in groups.keys() {
		for value in group {
			keys.push_value(value.clone())?;
		}
	}

	let mut columns = Vec::with_capacity(aggregates.len() + 1);
	columns.push(keys);

	for aliased in aggregates {
		let mut function = aliased.aggregate.function();
		function.aggregate(AggregateFunctionContext {
			column: table.column(aliased.aggregate.column())?,
			groups: &groups,
		})?;

		let (group_keys, data) = function.finalize()?;
		if group_keys.len() != groups.len() {
			return Err(Error::invalid_argument(format!(
				"{} produced {} groups, expected {}",
				aliased.aggregate.display_name(),
				group_keys.len(),
				groups.len()
			)));
		}

		columns.push(Column::new(aliased.alias.as_str(), data));
	}

	Ok(Columns::new(columns))
}
