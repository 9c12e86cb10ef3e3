// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tally_core::{
	dataset::{Dataset, order, product},
	value::column::Columns,
};
use tally_function::aggregate::mode_of;
use tally_type::{Result, Value};
use tracing::{debug, instrument};

use crate::{
	report::{self, column},
	resample::Bucket,
};

/// Headline numbers of a dataset.
///
/// Text metrics are `None` when the table they are derived from is empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
	pub total_orders: i64,
	pub total_sales: f64,
	pub most_popular_city: Option<String>,
	pub most_popular_category: Option<String>,
	pub most_used_payment_type: Option<String>,
	pub most_popular_review_city: Option<String>,
	pub most_popular_seller_city: Option<String>,
}

fn text(value: Value) -> Option<String> {
	match value {
		Value::Utf8(s) => Some(s),
		_ => None,
	}
}

/// First defined key of a ranked table.
fn leader(table: &Columns, key: &str) -> Result<Option<String>> {
	let data = &table.column(key)?.data;
	Ok((0..data.len()).map(|i| data.get_value(i)).find(Value::is_defined).and_then(text))
}

impl Summary {
	#[instrument(name = "engine::summary::compute", level = "debug", skip(dataset))]
	pub fn compute(dataset: &Dataset) -> Result<Self> {
		let daily = report::daily_orders(&dataset.orders, Bucket::Day)?;

		let order_counts = &daily.column(column::ORDER_COUNT)?.data;
		let total_orders: i64 = (0..order_counts.len()).filter_map(|i| order_counts.get_value(i).as_i64()).sum();

		let sales = &daily.column(column::TOTAL_SALES)?.data;
		let total_sales: f64 = (0..sales.len()).filter_map(|i| sales.get_value(i).as_f64()).sum();

		let cities = report::ranked_cities(&dataset.orders)?;
		let categories = report::ranked_categories(&dataset.products)?;

		let payment_types = &dataset.orders.column(order::column::PAYMENT_TYPE)?.data;
		let by_review = report::stats_by_review_score(&dataset.orders)?;
		let by_photos = report::stats_by_photo_qty(&dataset.products)?;

		let summary = Self {
			total_orders,
			total_sales,
			most_popular_city: leader(&cities, order::column::CUSTOMER_CITY)?,
			most_popular_category: leader(&categories, product::column::PRODUCT_CATEGORY_NAME_ENGLISH)?,
			most_used_payment_type: text(mode_of(payment_types)),
			most_popular_review_city: text(mode_of(&by_review.column(column::MOST_POPULAR_CITY)?.data)),
			most_popular_seller_city: text(mode_of(&by_photos.column(column::MOST_POPULAR_CITY)?.data)),
		};

		debug!(total_orders = summary.total_orders, total_sales = summary.total_sales, "summary");
		Ok(summary)
	}
}

impl Display for Summary {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		fn or_none(value: &Option<String>) -> &str {
			value.as_deref().unwrap_or("-")
		}

		writeln!(f, "total orders:             {}", self.total_orders)?;
		writeln!(f, "total sales:              {:.2}", self.total_sales)?;
		writeln!(f, "most popular city:        {}", or_none(&self.most_popular_city))?;
		writeln!(f, "most popular category:    {}", or_none(&self.most_popular_category))?;
		writeln!(f, "most used payment type:   {}", or_none(&self.most_used_payment_type))?;
		writeln!(f, "most popular review city: {}", or_none(&self.most_popular_review_city))?;
		write!(f, "most popular seller city: {}", or_none(&self.most_popular_seller_city))
	}
}
