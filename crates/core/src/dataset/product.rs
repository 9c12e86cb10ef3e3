// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::value::column::{Column, Columns};

pub mod column {
	pub const ORDER_ID: &str = "order_id";
	pub const PRODUCT_ID: &str = "product_id";
	pub const PRODUCT_CATEGORY_NAME_ENGLISH: &str = "product_category_name_english";
	pub const SELLER_CITY: &str = "seller_city";
	pub const PRICE: &str = "price";
	pub const PRODUCT_PHOTOS_QTY: &str = "product_photos_qty";
	pub const PRODUCT_DESCRIPTION_LENGHT: &str = "product_description_lenght";
	pub const QUANTITY: &str = "quantity";

	pub const ALL: [&str; 8] = [
		ORDER_ID,
		PRODUCT_ID,
		PRODUCT_CATEGORY_NAME_ENGLISH,
		SELLER_CITY,
		PRICE,
		PRODUCT_PHOTOS_QTY,
		PRODUCT_DESCRIPTION_LENGHT,
		QUANTITY,
	];
}

fn default_quantity() -> i64 {
	1
}

/// One sold product unit, linked to its order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
	pub order_id: String,
	pub product_id: String,
	pub product_category_name_english: Option<String>,
	pub seller_city: Option<String>,
	pub price: Option<f64>,
	pub product_photos_qty: i64,
	pub product_description_lenght: Option<i64>,
	#[serde(default = "default_quantity")]
	pub quantity: i64,
}

impl ProductRecord {
	pub fn new(order_id: impl Into<String>, product_id: impl Into<String>) -> Self {
		Self {
			order_id: order_id.into(),
			product_id: product_id.into(),
			product_category_name_english: None,
			seller_city: None,
			price: None,
			product_photos_qty: 0,
			product_description_lenght: None,
			quantity: default_quantity(),
		}
	}

	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.product_category_name_english = Some(category.into());
		self
	}

	pub fn with_seller_city(mut self, city: impl Into<String>) -> Self {
		self.seller_city = Some(city.into());
		self
	}

	pub fn with_price(mut self, price: f64) -> Self {
		self.price = Some(price);
		self
	}

	pub fn with_photos(mut self, photos: i64) -> Self {
		self.product_photos_qty = photos;
		self
	}

	pub fn with_description_length(mut self, length: i64) -> Self {
		self.product_description_lenght = Some(length);
		self
	}

	pub fn with_quantity(mut self, quantity: i64) -> Self {
		self.quantity = quantity;
		self
	}
}

pub fn products_table(records: &[ProductRecord]) -> Columns {
	Columns::new(vec![
		Column::utf8(column::ORDER_ID, records.iter().map(|r| r.order_id.clone())),
		Column::utf8(column::PRODUCT_ID, records.iter().map(|r| r.product_id.clone())),
		Column::utf8_optional(
			column::PRODUCT_CATEGORY_NAME_ENGLISH,
			records.iter().map(|r| r.product_category_name_english.clone()),
		),
		Column::utf8_optional(column::SELLER_CITY, records.iter().map(|r| r.seller_city.clone())),
		Column::float8_optional(column::PRICE, records.iter().map(|r| r.price)),
		Column::int8(column::PRODUCT_PHOTOS_QTY, records.iter().map(|r| r.product_photos_qty)),
		Column::int8_optional(column::PRODUCT_DESCRIPTION_LENGHT, records.iter().map(|r| r.product_description_lenght)),
		Column::int8(column::QUANTITY, records.iter().map(|r| r.quantity)),
	])
}

#[cfg(test)]
mod tests {
	use tally_type::Value;

	use super::*;

	#[test]
	fn test_products_table_schema() {
		let records = vec![
			ProductRecord::new("o1", "p1").with_category("toys").with_price(19.9).with_photos(2),
			ProductRecord::new("o1", "p2").with_quantity(3),
		];

		let table = products_table(&records);
		assert_eq!(table.names(), column::ALL.to_vec());
		assert_eq!(table.column(column::QUANTITY).unwrap().data.get_value(0), Value::int8(1));
		assert_eq!(table.column(column::QUANTITY).unwrap().data.get_value(1), Value::int8(3));
		assert_eq!(table.column(column::PRICE).unwrap().data.get_value(1), Value::Undefined);
	}

	#[test]
	fn test_deserialize_defaults_quantity() {
		let record: ProductRecord = serde_json::from_str(
			r#"{"order_id":"o1","product_id":"p1","product_category_name_english":null,
			"seller_city":"curitiba","price":5.0,"product_photos_qty":1,"product_description_lenght":null}"#,
		)
		.unwrap();
		assert_eq!(record.quantity, 1);
		assert_eq!(record.seller_city.as_deref(), Some("curitiba"));
	}

	#[test]
	fn test_description_length_column() {
		let records = vec![
			ProductRecord::new("o1", "p1").with_description_length(512),
			ProductRecord::new("o1", "p2"),
		];

		let table = products_table(&records);
		let lengths = &table.column(column::PRODUCT_DESCRIPTION_LENGHT).unwrap().data;
		assert_eq!(lengths.get_value(0), Value::int8(512));
		assert_eq!(lengths.get_value(1), Value::Undefined);
	}
}
