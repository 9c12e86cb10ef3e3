// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};
use tally_core::value::column::{Column, ColumnData, Columns};
use tally_type::{DateTime, Error, Result, Type};
use tracing::{debug, instrument};

use crate::aggregate::{AliasedAggregate, aggregate};

/// Calendar unit a timestamp is truncated to. All buckets are UTC; weeks
/// start on Monday.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
	#[default]
	Day,
	Week,
	Month,
}

impl Bucket {
	pub fn truncate(&self, datetime: DateTime) -> DateTime {
		match self {
			Bucket::Day => datetime.start_of_day(),
			Bucket::Week => datetime.start_of_week(),
			Bucket::Month => datetime.start_of_month(),
		}
	}
}

impl Display for Bucket {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Bucket::Day => "day",
			Bucket::Week => "week",
			Bucket::Month => "month",
		})
	}
}

impl FromStr for Bucket {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_ascii_lowercase().as_str() {
			"day" | "d" => Ok(Bucket::Day),
			"week" | "w" => Ok(Bucket::Week),
			"month" | "m" => Ok(Bucket::Month),
			other => Err(Error::invalid_argument(format!("unknown bucket `{}`", other))),
		}
	}
}

/// Groups rows by the bucket their `column` timestamp falls into.
///
/// The bucket start replaces the timestamp in the output key column. Rows
/// without a timestamp are skipped and buckets without rows never appear.
#[instrument(name = "engine::resample", level = "debug", skip(table, aggregates))]
pub fn resample(table: &Columns, column: &str, bucket: Bucket, aggregates: &[AliasedAggregate]) -> Result<Columns> {
	let timestamps = table.typed_column(column, &[Type::DateTime])?;

	let mut rows = Vec::with_capacity(table.row_count());
	let mut buckets = Vec::with_capacity(table.row_count());
	for row in 0..table.row_count() {
		if let Some(datetime) = timestamps.data.get_value(row).as_datetime() {
			rows.push(row);
			buckets.push(bucket.truncate(datetime));
		}
	}

	let skipped = table.row_count() - rows.len();
	if skipped > 0 {
		debug!(skipped, "rows without timestamp skipped");
	}

	let mut bucketed = table.take(&rows);
	for c in bucketed.columns.iter_mut() {
		if c.name == column {
			*c = Column::new(column, ColumnData::datetime(buckets.iter().copied()));
		}
	}

	aggregate(&bucketed, column, aggregates)
}
