// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod output;

use std::{error::Error, io, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use tally_engine::{
	Bucket, Engine, Report, ReportConfig,
	config::DEFAULT_TOP_N,
	distribution::{correlation, histogram},
};
use tally_loader::load_dataset;
use tally_sub_tracing::{Error as TracingError, Format, TracingBuilder};
use tally_type::Error as CoreError;
use tracing::{Level, info};

use crate::output::{Output, OutputFormat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Table {
	Orders,
	Products,
}

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Sales, customer and product reports over an e-commerce order export")]
#[command(version)]
struct Cli {
	/// Orders CSV export
	#[arg(long, default_value = "all_order.csv")]
	orders: PathBuf,

	/// Products CSV export
	#[arg(long, default_value = "all_product.csv")]
	products: PathBuf,

	/// Report to print; every report and the summary when omitted
	report: Option<Report>,

	/// Rows kept by the top-N rankings
	#[arg(long, default_value_t = DEFAULT_TOP_N)]
	top: usize,

	/// Bucket of the order volume report: day, week or month
	#[arg(long, default_value_t = Bucket::Day)]
	bucket: Bucket,

	#[arg(long, value_enum, default_value_t = OutputFormat::Table)]
	format: OutputFormat,

	/// Print only the headline metrics
	#[arg(long)]
	summary: bool,

	/// Histogram of a numeric column of either table
	#[arg(long, value_name = "COLUMN")]
	histogram: Option<String>,

	#[arg(long, default_value_t = 30)]
	bins: usize,

	/// Correlation matrix of the numeric columns of a table
	#[arg(long, value_enum)]
	correlation: Option<Table>,

	/// Log level; RUST_LOG overrides it when set
	#[arg(long, default_value_t = Level::WARN)]
	log_level: Level,

	#[arg(long, default_value_t = Format::Pretty)]
	log_format: Format,
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
	let dataset = load_dataset(&cli.orders, &cli.products)?;
	info!(orders = dataset.orders.row_count(), products = dataset.products.row_count(), "dataset loaded");

	let engine = Engine::new(ReportConfig::new().top_n(cli.top).bucket(cli.bucket));
	let mut output = Output::new(cli.format);

	if let Some(column) = &cli.histogram {
		let table = if dataset.orders.find_column(column).is_some() {
			&dataset.orders
		} else if dataset.products.find_column(column).is_some() {
			&dataset.products
		} else {
			return Err(CoreError::missing_field(column.as_str()).into());
		};
		output.table(format!("histogram of {}", column), histogram(table, column, cli.bins)?);
	} else if let Some(source) = cli.correlation {
		let table = match source {
			Table::Orders => &dataset.orders,
			Table::Products => &dataset.products,
		};
		output.table("correlation", correlation(table)?);
	} else if cli.summary {
		output.summary(engine.summary(&dataset)?);
	} else if let Some(report) = cli.report {
		output.table(report.name(), engine.run(report, &dataset)?);
	} else {
		for report in Report::ALL {
			output.table(report.name(), engine.run(report, &dataset)?);
		}
		output.summary(engine.summary(&dataset)?);
	}

	output.write(&mut io::stdout().lock())?;
	Ok(())
}

/// Installs the subscriber. A directive that fails to parse is dropped in
/// favour of `level` and returned; an already installed subscriber is kept.
fn init_tracing(level: Level, format: Format, directive: Option<String>) -> Option<TracingError> {
	let builder = || TracingBuilder::new().level(level).format(format);

	let (result, rejected) = match directive {
		Some(directive) => match builder().directive(directive).try_init() {
			Err(err @ TracingError::Directive(_)) => (builder().try_init(), Some(err)),
			result => (result, None),
		},
		None => (builder().try_init(), None),
	};

	match result {
		Ok(()) | Err(TracingError::Init(_)) => rejected,
		Err(err) => Some(err),
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	if let Some(err) = init_tracing(cli.log_level, cli.log_format, std::env::var("RUST_LOG").ok()) {
		eprintln!("warning: {}", err);
	}

	match run(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("error: {}", err);
			ExitCode::FAILURE
		}
	}
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn test_cli_definition() {
		Cli::command().debug_assert();
	}

	#[test]
	fn test_defaults() {
		let cli = Cli::try_parse_from(["tally"]).unwrap();
		assert_eq!(cli.report, None);
		assert_eq!(cli.top, 10);
		assert_eq!(cli.bucket, Bucket::Day);
		assert_eq!(cli.bins, 30);
		assert_eq!(cli.format, OutputFormat::Table);
	}

	#[test]
	fn test_report_and_options() {
		let cli = Cli::try_parse_from([
			"tally",
			"top-cities",
			"--top",
			"3",
			"--bucket",
			"month",
			"--format",
			"json",
			"--log-format",
			"json",
		])
		.unwrap();
		assert_eq!(cli.report, Some(Report::TopCities));
		assert_eq!(cli.top, 3);
		assert_eq!(cli.bucket, Bucket::Month);
		assert_eq!(cli.format, OutputFormat::Json);
		assert_eq!(cli.log_format, Format::Json);
	}

	#[test]
	fn test_invalid_rust_log_is_reported() {
		let rejected = init_tracing(Level::WARN, Format::Pretty, Some("tally_engine=loud".into()));
		assert!(matches!(rejected, Some(TracingError::Directive(_))));

		assert!(init_tracing(Level::WARN, Format::Pretty, Some("tally_engine=debug".into())).is_none());
		assert!(init_tracing(Level::WARN, Format::Pretty, None).is_none());
	}

	#[test]
	fn test_unknown_report_is_rejected() {
		assert!(Cli::try_parse_from(["tally", "weekly-sales"]).is_err());
	}
}
