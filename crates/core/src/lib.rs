// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod dataset;
pub mod value;

pub use tally_type::{Error, Result};
