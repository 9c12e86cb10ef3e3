// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! CSV input for the order and product tables.
//!
//! Only the canonical columns are read. Empty cells and `NaN` load as
//! undefined; numbers written as floats (`4.0`) are accepted for integer
//! columns.

use std::{fs::File, io::BufReader, path::Path};

use tally_core::{dataset::Dataset, value::column::Columns};
use tracing::instrument;

mod error;
mod order;
mod parse;
mod product;
mod reader;

pub use error::{Error, Result};
pub use order::{read_order_records, read_orders};
pub use product::{read_product_records, read_products};

fn open(path: &Path) -> Result<BufReader<File>> {
	File::open(path).map(BufReader::new).map_err(|e| Error::io(path, e))
}

#[instrument(name = "loader::load_orders", level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_orders(path: impl AsRef<Path>) -> Result<Columns> {
	read_orders(open(path.as_ref())?)
}

#[instrument(name = "loader::load_products", level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_products(path: impl AsRef<Path>) -> Result<Columns> {
	read_products(open(path.as_ref())?)
}

pub fn load_dataset(orders: impl AsRef<Path>, products: impl AsRef<Path>) -> Result<Dataset> {
	Ok(Dataset::new(load_orders(orders)?, load_products(products)?))
}
