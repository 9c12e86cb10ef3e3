// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use crate::value::column::Columns;

fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

fn width(s: &str) -> usize {
	s.chars().count()
}

fn centered(value: &str, w: usize) -> String {
	let pad = w - width(value);
	let l = pad / 2;
	let r = pad - l;
	format!(" {:l$}{}{:r$} ", "", value, "")
}

impl Display for Columns {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let row_count = self.row_count();

		let mut col_widths: Vec<usize> = Vec::with_capacity(self.len());
		for col in self.iter() {
			let header_width = width(&escape_control_chars(&col.name));
			let max_val_width = (0..row_count)
				.map(|i| width(&escape_control_chars(&col.data.as_string(i))))
				.max()
				.unwrap_or(0);
			col_widths.push(header_width.max(max_val_width) + 2);
		}

		let sep: String = if col_widths.is_empty() {
			"++".to_string()
		} else {
			col_widths.iter().map(|w| format!("+{}", "-".repeat(*w + 2))).collect::<String>() + "+"
		};

		writeln!(f, "{}", sep)?;

		let header: Vec<String> = self
			.iter()
			.zip(&col_widths)
			.map(|(col, &w)| centered(&escape_control_chars(&col.name), w))
			.collect();
		writeln!(f, "|{}|", header.join("|"))?;
		writeln!(f, "{}", sep)?;

		for row_idx in 0..row_count {
			let row: Vec<String> = self
				.iter()
				.zip(&col_widths)
				.map(|(col, &w)| centered(&escape_control_chars(&col.data.as_string(row_idx)), w))
				.collect();
			writeln!(f, "|{}|", row.join("|"))?;
		}

		writeln!(f, "{}", sep)
	}
}

#[cfg(test)]
mod tests {
	use crate::value::column::{Column, Columns};

	#[test]
	fn test_display_table() {
		let table = Columns::new(vec![Column::utf8("state", ["SP", "RJ"]), Column::int8("count", [12, 3])]);
		let expected = "\
+---------+---------+
|  state  |  count  |
+---------+---------+
|   SP    |   12    |
|   RJ    |    3    |
+---------+---------+
";
		assert_eq!(table.to_string(), expected);
	}

	#[test]
	fn test_display_undefined_cell() {
		let table = Columns::new(vec![Column::utf8_optional("city", [None::<String>])]);
		assert!(table.to_string().contains("Undefined"));
	}
}
