// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The two input tables every report reads from.

pub mod order;
pub mod product;

pub use order::{OrderRecord, orders_table};
pub use product::{ProductRecord, products_table};

use crate::value::column::Columns;

/// Orders and sold product units. Both tables are read-only inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
	pub orders: Columns,
	pub products: Columns,
}

impl Dataset {
	pub fn new(orders: Columns, products: Columns) -> Self {
		Self {
			orders,
			products,
		}
	}

	pub fn from_records(orders: &[OrderRecord], products: &[ProductRecord]) -> Self {
		Self::new(orders_table(orders), products_table(products))
	}
}
