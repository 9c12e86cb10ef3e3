// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tally_type::DateTime;

use crate::value::column::{Column, Columns};

pub mod column {
	pub const ORDER_ID: &str = "order_id";
	pub const CUSTOMER_ID: &str = "customer_id";
	pub const CUSTOMER_CITY: &str = "customer_city";
	pub const CUSTOMER_STATE: &str = "customer_state";
	pub const ORDER_PURCHASE_TIMESTAMP: &str = "order_purchase_timestamp";
	pub const PAYMENT_TYPE: &str = "payment_type";
	pub const PAYMENT_VALUE: &str = "payment_value";
	pub const PAYMENT_INSTALLMENTS: &str = "payment_installments";
	pub const REVIEW_SCORE: &str = "review_score";

	pub const ALL: [&str; 9] = [
		ORDER_ID,
		CUSTOMER_ID,
		CUSTOMER_CITY,
		CUSTOMER_STATE,
		ORDER_PURCHASE_TIMESTAMP,
		PAYMENT_TYPE,
		PAYMENT_VALUE,
		PAYMENT_INSTALLMENTS,
		REVIEW_SCORE,
	];
}

/// One payment row of an order. An order paid in several parts appears once
/// per payment, so `order_id` is not unique.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
	pub order_id: String,
	pub customer_id: String,
	pub customer_city: Option<String>,
	pub customer_state: Option<String>,
	pub order_purchase_timestamp: Option<DateTime>,
	pub payment_type: String,
	pub payment_value: Option<f64>,
	pub payment_installments: Option<i64>,
	pub review_score: i64,
}

impl OrderRecord {
	pub fn new(order_id: impl Into<String>, customer_id: impl Into<String>) -> Self {
		Self {
			order_id: order_id.into(),
			customer_id: customer_id.into(),
			customer_city: None,
			customer_state: None,
			order_purchase_timestamp: None,
			payment_type: String::new(),
			payment_value: None,
			payment_installments: None,
			review_score: 0,
		}
	}

	pub fn with_city(mut self, city: impl Into<String>) -> Self {
		self.customer_city = Some(city.into());
		self
	}

	pub fn with_state(mut self, state: impl Into<String>) -> Self {
		self.customer_state = Some(state.into());
		self
	}

	pub fn with_timestamp(mut self, timestamp: DateTime) -> Self {
		self.order_purchase_timestamp = Some(timestamp);
		self
	}

	pub fn with_payment(mut self, payment_type: impl Into<String>, value: f64) -> Self {
		self.payment_type = payment_type.into();
		self.payment_value = Some(value);
		self
	}

	pub fn with_installments(mut self, installments: i64) -> Self {
		self.payment_installments = Some(installments);
		self
	}

	pub fn with_review_score(mut self, score: i64) -> Self {
		self.review_score = score;
		self
	}
}

pub fn orders_table(records: &[OrderRecord]) -> Columns {
	Columns::new(vec![
		Column::utf8(column::ORDER_ID, records.iter().map(|r| r.order_id.clone())),
		Column::utf8(column::CUSTOMER_ID, records.iter().map(|r| r.customer_id.clone())),
		Column::utf8_optional(column::CUSTOMER_CITY, records.iter().map(|r| r.customer_city.clone())),
		Column::utf8_optional(column::CUSTOMER_STATE, records.iter().map(|r| r.customer_state.clone())),
		Column::datetime_optional(column::ORDER_PURCHASE_TIMESTAMP, records.iter().map(|r| r.order_purchase_timestamp)),
		Column::utf8(column::PAYMENT_TYPE, records.iter().map(|r| r.payment_type.clone())),
		Column::float8_optional(column::PAYMENT_VALUE, records.iter().map(|r| r.payment_value)),
		Column::int8_optional(column::PAYMENT_INSTALLMENTS, records.iter().map(|r| r.payment_installments)),
		Column::int8(column::REVIEW_SCORE, records.iter().map(|r| r.review_score)),
	])
}

#[cfg(test)]
mod tests {
	use tally_type::{Type, Value};

	use super::*;

	#[test]
	fn test_orders_table_schema() {
		let records = vec![
			OrderRecord::new("o1", "c1").with_city("sao paulo").with_payment("credit_card", 99.9).with_review_score(5),
			OrderRecord::new("o2", "c2").with_payment("boleto", 10.0).with_review_score(1),
		];

		let table = orders_table(&records);
		assert_eq!(table.names(), column::ALL.to_vec());
		assert_eq!(table.shape(), (2, 9));
		assert_eq!(table.column(column::CUSTOMER_CITY).unwrap().data.get_value(1), Value::Undefined);
		assert_eq!(table.column(column::ORDER_PURCHASE_TIMESTAMP).unwrap().get_type(), Type::DateTime);
		assert_eq!(table.column(column::REVIEW_SCORE).unwrap().data.get_value(0), Value::int8(5));
	}

	#[test]
	fn test_installments_column() {
		let records = vec![
			OrderRecord::new("o1", "c1").with_payment("credit_card", 120.0).with_installments(6),
			OrderRecord::new("o2", "c2").with_payment("voucher", 15.0),
		];

		let installments = orders_table(&records).column(column::PAYMENT_INSTALLMENTS).unwrap().data.clone();
		assert_eq!(installments.get_value(0), Value::int8(6));
		assert_eq!(installments.get_value(1), Value::Undefined);
	}
}
