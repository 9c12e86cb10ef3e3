// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::Read;

use serde::Deserialize;
use tally_core::{
	dataset::{ProductRecord, product::column, products_table},
	value::column::Columns,
};
use tracing::{debug, instrument};

use crate::{Result, parse, reader};

/// Columns a CSV export must carry. `quantity` is optional and defaults to
/// one unit per row.
pub const REQUIRED: [&str; 7] = [
	column::ORDER_ID,
	column::PRODUCT_ID,
	column::PRODUCT_CATEGORY_NAME_ENGLISH,
	column::SELLER_CITY,
	column::PRICE,
	column::PRODUCT_PHOTOS_QTY,
	column::PRODUCT_DESCRIPTION_LENGHT,
];

#[derive(Debug, Deserialize)]
struct RawProduct {
	order_id: Option<String>,
	product_id: Option<String>,
	product_category_name_english: Option<String>,
	seller_city: Option<String>,
	price: Option<String>,
	product_photos_qty: Option<String>,
	product_description_lenght: Option<String>,
	// merged exports suffix the order item quantity
	#[serde(default, alias = "quantity_x")]
	quantity: Option<String>,
}

impl RawProduct {
	fn into_record(self, row: u64) -> Result<ProductRecord> {
		let photos = parse::int8(row, column::PRODUCT_PHOTOS_QTY, self.product_photos_qty.as_deref())?;
		let quantity = parse::int8(row, column::QUANTITY, self.quantity.as_deref())?;

		Ok(ProductRecord {
			order_id: parse::required_text(row, column::ORDER_ID, self.order_id)?,
			product_id: parse::required_text(row, column::PRODUCT_ID, self.product_id)?,
			product_category_name_english: parse::text(self.product_category_name_english),
			seller_city: parse::text(self.seller_city),
			price: parse::float8(row, column::PRICE, self.price.as_deref())?,
			product_photos_qty: photos.ok_or_else(|| parse::missing(row, column::PRODUCT_PHOTOS_QTY))?,
			product_description_lenght: parse::int8(
				row,
				column::PRODUCT_DESCRIPTION_LENGHT,
				self.product_description_lenght.as_deref(),
			)?,
			quantity: quantity.unwrap_or(1),
		})
	}
}

/// Parses a products CSV into typed records.
pub fn read_product_records(reader: impl Read) -> Result<Vec<ProductRecord>> {
	reader::read_records(reader, &REQUIRED, |row, raw: RawProduct| raw.into_record(row))
}

#[instrument(name = "loader::products::read", level = "debug", skip(reader))]
pub fn read_products(reader: impl Read) -> Result<Columns> {
	let records = read_product_records(reader)?;
	debug!(rows = records.len(), "products loaded");
	Ok(products_table(&records))
}

#[cfg(test)]
mod tests {
	use tally_type::Value;

	use super::*;

	const HEADER: &str = "order_id,product_id,product_category_name_english,seller_city,price,product_photos_qty,product_description_lenght";

	#[test]
	fn test_quantity_defaults_to_one() {
		let csv = format!("{HEADER}\no1,p1,toys,curitiba,19.9,2.0,300\n");
		let table = read_products(csv.as_bytes()).unwrap();
		assert_eq!(table.column(column::QUANTITY).unwrap().data.get_value(0), Value::int8(1));
		assert_eq!(table.column(column::PRODUCT_PHOTOS_QTY).unwrap().data.get_value(0), Value::int8(2));
	}

	#[test]
	fn test_quantity_x_alias() {
		let csv = format!("{HEADER},quantity_x\no1,p1,,curitiba,19.9,1,,3\n");
		let table = read_products(csv.as_bytes()).unwrap();
		assert_eq!(table.column(column::QUANTITY).unwrap().data.get_value(0), Value::int8(3));
		assert_eq!(table.column(column::PRODUCT_CATEGORY_NAME_ENGLISH).unwrap().data.get_value(0), Value::Undefined);
	}

	#[test]
	fn test_missing_photo_count_is_an_error() {
		let csv = format!("{HEADER}\no1,p1,toys,curitiba,19.9,,300\n");
		assert!(read_products(csv.as_bytes()).is_err());
	}
}
