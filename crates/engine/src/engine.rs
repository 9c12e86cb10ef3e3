// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use tally_core::{dataset::Dataset, value::column::Columns};
use tally_type::{Error, Result};
use tracing::{debug, instrument};

use crate::{config::ReportConfig, report, summary::Summary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Report {
	DailyOrders,
	SalesByCategory,
	CustomersByState,
	StatsByReviewScore,
	StatsByPhotoQty,
	StatsByPaymentType,
	TopCities,
	TopCategories,
}

impl Report {
	pub const ALL: [Report; 8] = [
		Report::DailyOrders,
		Report::SalesByCategory,
		Report::CustomersByState,
		Report::StatsByReviewScore,
		Report::StatsByPhotoQty,
		Report::StatsByPaymentType,
		Report::TopCities,
		Report::TopCategories,
	];

	pub fn name(&self) -> &'static str {
		match self {
			Report::DailyOrders => "daily-orders",
			Report::SalesByCategory => "sales-by-category",
			Report::CustomersByState => "customers-by-state",
			Report::StatsByReviewScore => "stats-by-review-score",
			Report::StatsByPhotoQty => "stats-by-photo-qty",
			Report::StatsByPaymentType => "stats-by-payment-type",
			Report::TopCities => "top-cities",
			Report::TopCategories => "top-categories",
		}
	}
}

impl Display for Report {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Report {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
		Report::ALL
			.into_iter()
			.find(|report| report.name() == normalized)
			.ok_or_else(|| Error::invalid_argument(format!("unknown report `{}`", s)))
	}
}

/// Runs reports against a dataset with one fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct Engine {
	config: ReportConfig,
}

impl Engine {
	pub fn new(config: ReportConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn config(&self) -> &ReportConfig {
		&self.config
	}

	#[instrument(name = "engine::run", level = "debug", skip(self, dataset))]
	pub fn run(&self, report: Report, dataset: &Dataset) -> Result<Columns> {
		let result = match report {
			Report::DailyOrders => report::daily_orders(&dataset.orders, self.config.bucket),
			Report::SalesByCategory => report::sales_by_category(&dataset.products),
			Report::CustomersByState => report::customers_by_state(&dataset.orders),
			Report::StatsByReviewScore => report::stats_by_review_score(&dataset.orders),
			Report::StatsByPhotoQty => report::stats_by_photo_qty(&dataset.products),
			Report::StatsByPaymentType => report::stats_by_payment_type(&dataset.orders),
			Report::TopCities => report::top_cities(&dataset.orders, self.config.top_n),
			Report::TopCategories => report::top_categories(&dataset.products, self.config.top_n),
		}?;
		debug!(rows = result.row_count(), "report complete");
		Ok(result)
	}

	pub fn summary(&self, dataset: &Dataset) -> Result<Summary> {
		Summary::compute(dataset)
	}
}

#[cfg(test)]
mod tests {
	use tally_core::dataset::{OrderRecord, ProductRecord};
	use tally_type::Value;

	use super::*;
	use crate::resample::Bucket;

	#[test]
	fn test_report_names_round_trip() {
		for report in Report::ALL {
			assert_eq!(report.name().parse::<Report>().unwrap(), report);
		}
		assert_eq!("top_cities".parse::<Report>().unwrap(), Report::TopCities);
		assert!(matches!("sales".parse::<Report>(), Err(Error::InvalidArgument { .. })));
	}

	#[test]
	fn test_run_uses_config() {
		let dataset = Dataset::from_records(
			&[
				OrderRecord::new("o1", "c1").with_city("rio"),
				OrderRecord::new("o2", "c2").with_city("santos"),
			],
			&[ProductRecord::new("o1", "p1").with_category("toys")],
		);

		let engine = Engine::new(ReportConfig::new().top_n(1).bucket(Bucket::Month));
		let top = engine.run(Report::TopCities, &dataset).unwrap();
		assert_eq!(top.row_count(), 1);
		assert_eq!(top.row(0)[0], Value::utf8("rio"));
	}

	#[test]
	fn test_every_report_runs_on_empty_dataset() {
		let engine = Engine::default();
		let dataset = Dataset::from_records(&[], &[]);
		for report in Report::ALL {
			assert!(engine.run(report, &dataset).unwrap().is_empty(), "{}", report);
		}
	}
}
