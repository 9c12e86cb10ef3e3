// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tally_core::{
	dataset::{order, product},
	value::column::Columns,
};
use tally_type::Result;
use tracing::instrument;

use super::column;
use crate::{
	aggregate::{Aggregate, aggregate},
	rank::{rank, top_n},
};

fn city_counts(orders: &Columns) -> Result<Columns> {
	aggregate(
		orders,
		order::column::CUSTOMER_CITY,
		&[Aggregate::count_distinct(order::column::CUSTOMER_ID).alias(column::COUNT)],
	)
}

fn category_counts(products: &Columns) -> Result<Columns> {
	aggregate(
		products,
		product::column::PRODUCT_CATEGORY_NAME_ENGLISH,
		&[
			Aggregate::count_distinct(product::column::ORDER_ID).alias(column::TOTAL_SALES),
			Aggregate::mode(product::column::SELLER_CITY).alias(column::SOLD_BY),
		],
	)
}

/// Every city ranked by distinct customers, the undefined city included.
pub fn ranked_cities(orders: &Columns) -> Result<Columns> {
	rank(city_counts(orders)?, column::COUNT, order::column::CUSTOMER_CITY)
}

/// Every category ranked by distinct orders.
pub fn ranked_categories(products: &Columns) -> Result<Columns> {
	rank(category_counts(products)?, column::TOTAL_SALES, product::column::PRODUCT_CATEGORY_NAME_ENGLISH)
}

/// The `n` cities with the most distinct customers.
#[instrument(name = "engine::report::top_cities", level = "debug", skip(orders))]
pub fn top_cities(orders: &Columns, n: usize) -> Result<Columns> {
	top_n(city_counts(orders)?, column::COUNT, order::column::CUSTOMER_CITY, n)
}

/// The `n` categories sold in the most distinct orders, with the seller city
/// that sold them most often.
#[instrument(name = "engine::report::top_categories", level = "debug", skip(products))]
pub fn top_categories(products: &Columns, n: usize) -> Result<Columns> {
	top_n(category_counts(products)?, column::TOTAL_SALES, product::column::PRODUCT_CATEGORY_NAME_ENGLISH, n)
}
