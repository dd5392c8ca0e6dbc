/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */

/// Plain-text table for record listings. Columns are left-aligned and padded
/// to the widest cell, with a dashed rule under the header.
pub struct Table {
	header: Vec<String>,
	rows: Vec<Vec<String>>,
}

impl Table {
	pub fn new(header: Vec<&str>) -> Self {
		Self {
			header: header.into_iter().map(|s| s.to_string()).collect(),
			rows: Vec::new(),
		}
	}

	/// Adds a data row. Missing trailing cells render blank.
	pub fn add_row(&mut self, row: Vec<String>) {
		self.rows.push(row);
	}

	pub fn render(&self) -> String {
		let widths = self.column_widths();
		let mut out = String::new();

		out.push_str(&Table::render_row(&widths, &self.header));
		out.push('\n');

		let rule_width = widths.iter().sum::<usize>()
			+ (3 * widths.len().saturating_sub(1));
		out.push_str(&"-".repeat(rule_width));
		out.push('\n');

		for row in &self.rows {
			out.push_str(&Table::render_row(&widths, row));
			out.push('\n');
		}

		out
	}

	fn column_widths(&self) -> Vec<usize> {
		let mut widths: Vec<usize> =
			self.header.iter().map(|h| h.chars().count()).collect();

		for row in &self.rows {
			for (i, value) in row.iter().enumerate().take(widths.len()) {
				widths[i] = widths[i].max(value.chars().count());
			}
		}

		widths
	}

	fn render_row(widths: &[usize], row: &[String]) -> String {
		let cells: Vec<String> = widths
			.iter()
			.enumerate()
			.map(|(i, width)| {
				let value = row.get(i).map(String::as_str).unwrap_or("");
				format!("{:<width$}", value, width = width)
			})
			.collect();

		cells.join(" | ").trim_end().to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_pads_columns() {
		let mut table = Table::new(vec!["A", "Brand"]);
		table.add_row(vec!["long".to_string(), "Honda".to_string()]);
		table.add_row(vec!["x".to_string(), "".to_string()]);

		assert_eq!(
			table.render(),
			"A    | Brand\n------------\nlong | Honda\nx    |\n"
		);
	}
}
