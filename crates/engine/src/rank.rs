// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tally_core::value::column::{Columns, sort::SortKey};
use tally_type::Result;
use tracing::{instrument, trace};

/// Orders rows descending by `by`, ties ascending by `key`.
pub fn rank(mut table: Columns, by: &str, key: &str) -> Result<Columns> {
	table.sort(&[SortKey::desc(by), SortKey::asc(key)])?;
	Ok(table)
}

/// [`rank`], keeping at most `n` rows. Never pads.
#[instrument(name = "engine::rank::top_n", level = "trace", skip(table))]
pub fn top_n(table: Columns, by: &str, key: &str, n: usize) -> Result<Columns> {
	let mut ranked = rank(table, by, key)?;
	trace!(candidates = ranked.row_count(), "ranked");
	ranked.truncate(n);
	Ok(ranked)
}
