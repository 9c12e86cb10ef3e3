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
	rank::rank,
};

#[instrument(name = "engine::report::customers_by_state", level = "debug", skip(orders))]
pub fn customers_by_state(orders: &Columns) -> Result<Columns> {
	aggregate(
		orders,
		order::column::CUSTOMER_STATE,
		&[Aggregate::count_distinct(order::column::CUSTOMER_ID).alias(column::CUSTOMER_COUNT)],
	)
}

#[instrument(name = "engine::report::stats_by_review_score", level = "debug", skip(orders))]
pub fn stats_by_review_score(orders: &Columns) -> Result<Columns> {
	aggregate(
		orders,
		order::column::REVIEW_SCORE,
		&[
			Aggregate::count_distinct(order::column::CUSTOMER_ID).alias(column::CUSTOMER_COUNT),
			Aggregate::sum(order::column::PAYMENT_VALUE).alias(column::TOTAL_SALES),
			Aggregate::mode(order::column::CUSTOMER_CITY).alias(column::MOST_POPULAR_CITY),
		],
	)
}

#[instrument(name = "engine::report::stats_by_photo_qty", level = "debug", skip(products))]
pub fn stats_by_photo_qty(products: &Columns) -> Result<Columns> {
	aggregate(
		products,
		product::column::PRODUCT_PHOTOS_QTY,
		&[
			Aggregate::count_distinct(product::column::PRODUCT_ID).alias(column::PRODUCT_COUNT),
			Aggregate::mode(product::column::SELLER_CITY).alias(column::MOST_POPULAR_CITY),
			Aggregate::sum(product::column::PRICE).alias(column::TOTAL_SALES),
			Aggregate::mode(product::column::PRODUCT_CATEGORY_NAME_ENGLISH).alias(column::MOST_POPULAR_CATEGORY),
		],
	)
}

#[instrument(name = "engine::report::stats_by_payment_type", level = "debug", skip(orders))]
pub fn stats_by_payment_type(orders: &Columns) -> Result<Columns> {
	aggregate(
		orders,
		order::column::PAYMENT_TYPE,
		&[
			Aggregate::count_distinct(order::column::ORDER_ID).alias(column::ORDER_COUNT),
			Aggregate::avg(order::column::PAYMENT_VALUE).alias(column::AVERAGE_VALUE),
		],
	)
}

/// Units sold per category, best sellers first.
#[instrument(name = "engine::report::sales_by_category", level = "debug", skip(products))]
pub fn sales_by_category(products: &Columns) -> Result<Columns> {
	let result = aggregate(
		products,
		product::column::PRODUCT_CATEGORY_NAME_ENGLISH,
		&[Aggregate::sum(product::column::QUANTITY).alias(column::QUANTITY)],
	)?;
	rank(result, column::QUANTITY, product::column::PRODUCT_CATEGORY_NAME_ENGLISH)
}
