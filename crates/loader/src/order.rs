// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::Read;

use serde::Deserialize;
use tally_core::{
	dataset::{OrderRecord, order::column, orders_table},
	value::column::Columns,
};
use tracing::{debug, instrument};

use crate::{Result, parse, reader};

/// Columns a CSV export must carry; any other column is ignored.
pub const REQUIRED: [&str; 9] = column::ALL;

#[derive(Debug, Deserialize)]
struct RawOrder {
	order_id: Option<String>,
	customer_id: Option<String>,
	customer_city: Option<String>,
	customer_state: Option<String>,
	order_purchase_timestamp: Option<String>,
	payment_type: Option<String>,
	payment_value: Option<String>,
	payment_installments: Option<String>,
	review_score: Option<String>,
}

impl RawOrder {
	fn into_record(self, row: u64) -> Result<OrderRecord> {
		let review_score = parse::int8(row, column::REVIEW_SCORE, self.review_score.as_deref())?;

		Ok(OrderRecord {
			order_id: parse::required_text(row, column::ORDER_ID, self.order_id)?,
			customer_id: parse::required_text(row, column::CUSTOMER_ID, self.customer_id)?,
			customer_city: parse::text(self.customer_city),
			customer_state: parse::text(self.customer_state),
			order_purchase_timestamp: parse::datetime(
				row,
				column::ORDER_PURCHASE_TIMESTAMP,
				self.order_purchase_timestamp.as_deref(),
			)?,
			payment_type: parse::required_text(row, column::PAYMENT_TYPE, self.payment_type)?,
			payment_value: parse::float8(row, column::PAYMENT_VALUE, self.payment_value.as_deref())?,
			payment_installments: parse::int8(
				row,
				column::PAYMENT_INSTALLMENTS,
				self.payment_installments.as_deref(),
			)?,
			review_score: review_score.ok_or_else(|| parse::missing(row, column::REVIEW_SCORE))?,
		})
	}
}

/// Parses an orders CSV into typed records.
pub fn read_order_records(reader: impl Read) -> Result<Vec<OrderRecord>> {
	reader::read_records(reader, &REQUIRED, |row, raw: RawOrder| raw.into_record(row))
}

#[instrument(name = "loader::orders::read", level = "debug", skip(reader))]
pub fn read_orders(reader: impl Read) -> Result<Columns> {
	let records = read_order_records(reader)?;
	debug!(rows = records.len(), "orders loaded");
	Ok(orders_table(&records))
}
