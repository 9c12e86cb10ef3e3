// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tally_core::dataset::{Dataset, OrderRecord, ProductRecord};
use tally_engine::{Engine, Report, ReportConfig};
use tally_type::{DateTime, Value};

fn noon(day: u32) -> DateTime {
	DateTime::new(2024, 1, day, 12, 0, 0, 0).unwrap()
}

fn dataset() -> Dataset {
	Dataset::from_records(
		&[
			OrderRecord::new("O1", "C1")
				.with_city("sao paulo")
				.with_state("SP")
				.with_timestamp(noon(1))
				.with_payment("credit_card", 50.0)
				.with_review_score(5),
			OrderRecord::new("O1", "C1")
				.with_city("sao paulo")
				.with_state("SP")
				.with_timestamp(noon(1))
				.with_payment("voucher", 30.0)
				.with_review_score(5),
			OrderRecord::new("O2", "C2")
				.with_city("rio de janeiro")
				.with_state("RJ")
				.with_timestamp(noon(2))
				.with_payment("boleto", 20.0)
				.with_review_score(3),
		],
		&[
			ProductRecord::new("O1", "P1").with_category("toys").with_seller_city("curitiba").with_price(10.0),
			ProductRecord::new("O2", "P2").with_category("toys").with_seller_city("curitiba").with_price(20.0),
			ProductRecord::new("O2", "P3").with_category("books").with_seller_city("santos").with_price(5.0),
		],
	)
}

#[test]
fn test_daily_orders_example() {
	let result = Engine::default().run(Report::DailyOrders, &dataset()).unwrap();
	let rows: Vec<Vec<Value>> = result.rows().collect();
	assert_eq!(
		rows,
		vec![
			vec![Value::datetime(noon(1).start_of_day()), Value::int8(1), Value::float8(80.0)],
			vec![Value::datetime(noon(2).start_of_day()), Value::int8(1), Value::float8(20.0)],
		]
	);
}

#[test]
fn test_category_ranking_example() {
	let result = Engine::default().run(Report::TopCategories, &dataset()).unwrap();
	assert_eq!(result.row(0)[..2], [Value::utf8("toys"), Value::int8(2)]);
	assert_eq!(result.row(1)[..2], [Value::utf8("books"), Value::int8(1)]);
}

#[test]
fn test_every_report_has_rows() {
	let engine = Engine::new(ReportConfig::default());
	let dataset = dataset();
	for report in Report::ALL {
		let result = engine.run(report, &dataset).unwrap();
		assert!(!result.is_empty(), "{} produced no rows", report);
	}
}

#[test]
fn test_summary() {
	let summary = Engine::default().summary(&dataset()).unwrap();
	assert_eq!(summary.total_orders, 2);
	assert_eq!(summary.total_sales, 100.0);
	assert_eq!(summary.most_popular_city.as_deref(), Some("rio de janeiro"));
	assert_eq!(summary.most_popular_category.as_deref(), Some("toys"));
	assert_eq!(summary.most_popular_seller_city.as_deref(), Some("curitiba"));
}

#[test]
fn test_json_rows() {
	let result = Engine::default().run(Report::CustomersByState, &dataset()).unwrap();
	let json = serde_json::to_value(&result).unwrap();
	assert_eq!(
		json,
		serde_json::json!([
			{"customer_state": "RJ", "customer_count": 1},
			{"customer_state": "SP", "customer_count": 1},
		])
	);
}
