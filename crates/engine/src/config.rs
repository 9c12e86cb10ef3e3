// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::resample::Bucket;

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
	/// Rows kept by the top-N rankings
	pub top_n: usize,
	/// Bucketing unit of the order volume report
	pub bucket: Bucket,
}

impl Default for ReportConfig {
	fn default() -> Self {
		Self {
			top_n: DEFAULT_TOP_N,
			bucket: Bucket::Day,
		}
	}
}

impl ReportConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn top_n(mut self, top_n: usize) -> Self {
		self.top_n = top_n;
		self
	}

	pub fn bucket(mut self, bucket: Bucket) -> Self {
		self.bucket = bucket;
		self
	}
}
