// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::io::{self, Write};

use clap::ValueEnum;
use serde_json::{Map, Value as Json};
use tally_core::value::column::Columns;
use tally_engine::Summary;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	#[default]
	Table,
	Json,
}

/// Collects named results and writes them in one of the output formats.
///
/// JSON output is a single document: a lone table is written as its row
/// array, several results as an object keyed by result name.
pub struct Output {
	format: OutputFormat,
	sections: Vec<(String, Section)>,
}

enum Section {
	Table(Columns),
	Summary(Summary),
}

impl Output {
	pub fn new(format: OutputFormat) -> Self {
		Self {
			format,
			sections: Vec::new(),
		}
	}

	pub fn table(&mut self, name: impl Into<String>, table: Columns) {
		self.sections.push((name.into(), Section::Table(table)));
	}

	pub fn summary(&mut self, summary: Summary) {
		self.sections.push(("summary".to_string(), Section::Summary(summary)));
	}

	pub fn write(self, out: &mut impl Write) -> io::Result<()> {
		match self.format {
			OutputFormat::Table => self.write_tables(out),
			OutputFormat::Json => self.write_json(out),
		}
	}

	fn write_tables(self, out: &mut impl Write) -> io::Result<()> {
		let titled = self.sections.len() > 1;
		for (i, (name, section)) in self.sections.into_iter().enumerate() {
			if i > 0 {
				writeln!(out)?;
			}
			if titled {
				writeln!(out, "{}", name)?;
			}
			match section {
				Section::Table(table) if table.is_empty() => writeln!(out, "no data")?,
				Section::Table(table) => write!(out, "{}", table)?,
				Section::Summary(summary) => writeln!(out, "{}", summary)?,
			}
		}
		Ok(())
	}

	fn write_json(self, out: &mut impl Write) -> io::Result<()> {
		let mut sections = self.sections;
		let document = if sections.len() == 1 {
			let (_, section) = sections.remove(0);
			section_json(section)?
		} else {
			let mut map = Map::new();
			for (name, section) in sections {
				map.insert(name, section_json(section)?);
			}
			Json::Object(map)
		};

		serde_json::to_writer_pretty(&mut *out, &document)?;
		writeln!(out)
	}
}

fn section_json(section: Section) -> io::Result<Json> {
	let value = match section {
		Section::Table(table) => serde_json::to_value(&table),
		Section::Summary(summary) => serde_json::to_value(&summary),
	};
	Ok(value?)
}

#[cfg(test)]
mod tests {
	use tally_core::value::column::Column;

	use super::*;

	fn render(output: Output) -> String {
		let mut buffer = Vec::new();
		output.write(&mut buffer).unwrap();
		String::from_utf8(buffer).unwrap()
	}

	fn states() -> Columns {
		Columns::new(vec![Column::utf8("customer_state", ["SP"]), Column::int8("customer_count", [2])])
	}

	#[test]
	fn test_empty_table_prints_no_data() {
		let mut output = Output::new(OutputFormat::Table);
		output.table("customers-by-state", states().empty_like());
		assert_eq!(render(output), "no data\n");
	}

	#[test]
	fn test_sections_are_titled() {
		let mut output = Output::new(OutputFormat::Table);
		output.table("customers-by-state", states());
		output.summary(Summary::default());
		let text = render(output);
		assert!(text.starts_with("customers-by-state\n+"));
		assert!(text.contains("\nsummary\ntotal orders:"));
	}

	#[test]
	fn test_single_json_table_is_row_array() {
		let mut output = Output::new(OutputFormat::Json);
		output.table("customers-by-state", states());
		let json: Json = serde_json::from_str(&render(output)).unwrap();
		assert_eq!(json, serde_json::json!([{"customer_state": "SP", "customer_count": 2}]));
	}

	#[test]
	fn test_json_sections_keyed_by_name() {
		let mut output = Output::new(OutputFormat::Json);
		output.table("customers-by-state", states());
		output.summary(Summary::default());
		let json: Json = serde_json::from_str(&render(output)).unwrap();
		assert_eq!(json["summary"]["total_orders"], 0);
		assert_eq!(json["customers-by-state"][0]["customer_state"], "SP");
	}
}
