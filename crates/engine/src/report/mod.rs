// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The table-producing reports. Each one is a pure function of its input
//! table; none of them mutate or cache anything.

mod breakdown;
mod ranking;
mod volume;

pub use breakdown::{
	customers_by_state, sales_by_category, stats_by_payment_type, stats_by_photo_qty, stats_by_review_score,
};
pub use ranking::{ranked_categories, ranked_cities, top_categories, top_cities};
pub use volume::daily_orders;

/// Names of the columns the reports produce, next to the key columns they
/// share with the input tables.
pub mod column {
	pub const ORDER_COUNT: &str = "order_count";
	pub const TOTAL_SALES: &str = "total_sales";
	pub const CUSTOMER_COUNT: &str = "customer_count";
	pub const PRODUCT_COUNT: &str = "product_count";
	pub const MOST_POPULAR_CITY: &str = "most_popular_city";
	pub const MOST_POPULAR_CATEGORY: &str = "most_popular_category";
	pub const AVERAGE_VALUE: &str = "average_value";
	pub const QUANTITY: &str = "quantity";
	pub const COUNT: &str = "count";
	pub const SOLD_BY: &str = "sold_by";
}
