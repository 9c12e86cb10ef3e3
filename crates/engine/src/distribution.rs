// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Shape of the numeric columns: histograms and pairwise correlation.

use tally_core::value::column::{Column, ColumnData, Columns};
use tally_type::{Error, Result, Type};
use tracing::{debug, instrument};

pub const BIN_START: &str = "bin_start";
pub const BIN_END: &str = "bin_end";
pub const COUNT: &str = "count";
pub const COLUMN: &str = "column";

/// Names of the `Int8` and `Float8` columns, in table order.
pub fn numeric_columns(table: &Columns) -> Vec<String> {
	table.iter().filter(|c| c.get_type().is_number()).map(|c| c.name.clone()).collect()
}

fn defined_f64(data: &ColumnData) -> Vec<Option<f64>> {
	(0..data.len()).map(|i| data.get_value(i).as_f64()).collect()
}

/// Equal-width histogram over the defined values of `column`.
///
/// Bin `i` is `[start, end)` except the last one, which also holds the
/// maximum. A column with a single distinct value is spread over
/// `[value - 0.5, value + 0.5]`.
#[instrument(name = "engine::distribution::histogram", level = "debug", skip(table))]
pub fn histogram(table: &Columns, column: &str, bins: usize) -> Result<Columns> {
	if bins == 0 {
		return Err(Error::invalid_argument("histogram needs at least one bin"));
	}

	let data = &table.typed_column(column, &[Type::Int8, Type::Float8])?.data;
	let values: Vec<f64> = defined_f64(data).into_iter().flatten().collect();

	if values.is_empty() {
		return Ok(Columns::new(vec![
			Column::float8(BIN_START, []),
			Column::float8(BIN_END, []),
			Column::int8(COUNT, []),
		]));
	}

	let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
	let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
	if min == max {
		min -= 0.5;
		max += 0.5;
	}

	let width = (max - min) / bins as f64;
	let mut counts = vec![0i64; bins];
	for value in &values {
		let bin = (((value - min) / width).floor() as usize).min(bins - 1);
		counts[bin] += 1;
	}

	let starts = (0..bins).map(|i| min + i as f64 * width);
	let ends = (0..bins).map(|i| if i == bins - 1 { max } else { min + (i + 1) as f64 * width });

	debug!(values = values.len(), min, max, "histogram");

	Ok(Columns::new(vec![Column::float8(BIN_START, starts), Column::float8(BIN_END, ends), Column::int8(COUNT, counts)]))
}

fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
	let pairs: Vec<(f64, f64)> = x
		.iter()
		.zip(y)
		.filter_map(|(x, y)| match (x, y) {
			(Some(x), Some(y)) => Some((*x, *y)),
			_ => None,
		})
		.collect();

	if pairs.len() < 2 {
		return None;
	}

	let n = pairs.len() as f64;
	let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
	let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

	let mut cov = 0.0;
	let mut var_x = 0.0;
	let mut var_y = 0.0;
	for (x, y) in &pairs {
		let dx = x - mean_x;
		let dy = y - mean_y;
		cov += dx * dy;
		var_x += dx * dx;
		var_y += dy * dy;
	}

	if var_x == 0.0 || var_y == 0.0 {
		return None;
	}

	Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Pearson correlation matrix over every numeric column, computed on the rows
/// where both columns of a pair are defined.
///
/// The first column names the row; every further column holds the
/// coefficients against the numeric column of the same name.
#[instrument(name = "engine::distribution::correlation", level = "debug", skip(table))]
pub fn correlation(table: &Columns) -> Result<Columns> {
	let names = numeric_columns(table);
	let series = names
		.iter()
		.map(|name| table.column(name).map(|c| defined_f64(&c.data)))
		.collect::<Result<Vec<_>>>()?;

	let mut columns = Vec::with_capacity(names.len() + 1);
	columns.push(Column::utf8(COLUMN, names.iter().cloned()));

	for (j, name) in names.iter().enumerate() {
		let coefficients = series.iter().map(|x| pearson(x, &series[j]));
		columns.push(Column::float8_optional(name, coefficients));
	}

	debug!(columns = names.len(), "correlation");
	Ok(Columns::new(columns))
}
