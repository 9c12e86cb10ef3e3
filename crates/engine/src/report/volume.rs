// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tally_core::{dataset::order, value::column::Columns};
use tally_type::Result;
use tracing::{debug, instrument};

use super::column;
use crate::{
	aggregate::Aggregate,
	resample::{Bucket, resample},
};

/// Order volume per calendar bucket: distinct orders and summed payment
/// value, ascending by bucket start.
///
/// Split payments of one order count once towards `order_count` but every
/// payment row adds to `total_sales`.
#[instrument(name = "engine::report::daily_orders", level = "debug", skip(orders))]
pub fn daily_orders(orders: &Columns, bucket: Bucket) -> Result<Columns> {
	let result = resample(
		orders,
		order::column::ORDER_PURCHASE_TIMESTAMP,
		bucket,
		&[
			Aggregate::count_distinct(order::column::ORDER_ID).alias(column::ORDER_COUNT),
			Aggregate::sum(order::column::PAYMENT_VALUE).alias(column::TOTAL_SALES),
		],
	)?;
	debug!(buckets = result.row_count(), "order volume");
	Ok(result)
}

#[cfg(test)]
mod tests {
	use tally_core::dataset::{OrderRecord, orders_table};
	use tally_type::{DateTime, Value};

	use super::*;

	fn day(d: u32) -> DateTime {
		DateTime::new(2024, 1, d, 12, 0, 0, 0).unwrap()
	}

	#[test]
	fn test_split_payments_count_once_per_day() {
		let orders = orders_table(&[
			OrderRecord::new("O1", "C1").with_timestamp(day(1)).with_payment("credit_card", 50.0),
			OrderRecord::new("O1", "C1").with_timestamp(day(1)).with_payment("voucher", 30.0),
			OrderRecord::new("O2", "C2").with_timestamp(day(2)).with_payment("boleto", 20.0),
		]);

		let result = daily_orders(&orders, Bucket::Day).unwrap();
		assert_eq!(result.names(), vec!["order_purchase_timestamp", "order_count", "total_sales"]);
		assert_eq!(
			result.rows().collect::<Vec<_>>(),
			vec![
				vec![Value::datetime(day(1).start_of_day()), Value::int8(1), Value::float8(80.0)],
				vec![Value::datetime(day(2).start_of_day()), Value::int8(1), Value::float8(20.0)],
			]
		);
	}

	#[test]
	fn test_empty_orders() {
		let result = daily_orders(&orders_table(&[]), Bucket::Day).unwrap();
		assert!(result.is_empty());
		assert_eq!(result.names().len(), 3);
	}
}
