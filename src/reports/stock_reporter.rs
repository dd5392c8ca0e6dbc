/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
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
use crate::inventory::stock_item::StockItem;
use crate::reports::table::Table;
use anyhow::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
	/// One rendered record per line
	Lines,
	Table,
	Json,
}

/// Renders a list of stock records for the one-shot commands.
pub struct StockReporter {
	items: Vec<StockItem>,
}

impl StockReporter {
	pub fn new(items: Vec<StockItem>) -> Self {
		Self { items }
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn render(&self, format: OutputFormat) -> Result<String, Error> {
		if format == OutputFormat::Json {
			return Ok(serde_json::to_string_pretty(&self.items)?);
		}

		if self.items.is_empty() {
			return Ok("(empty)".to_string());
		}

		match format {
			OutputFormat::Table => Ok(self.table().render().trim_end().to_string()),
			_ => Ok(self
				.items
				.iter()
				.map(|item| item.to_string())
				.collect::<Vec<String>>()
				.join("\n")),
		}
	}

	pub fn print(&self, format: OutputFormat) -> Result<(), Error> {
		println!("{}", self.render(format)?);
		Ok(())
	}

	fn table(&self) -> Table {
		let mut table =
			Table::new(vec!["Date Entered", "Label", "Brand", "Engine #", "Status"]);

		for item in &self.items {
			table.add_row(vec![
				item.get_date_entered().to_string(),
				item.get_stock_label().clone(),
				item.get_brand().clone(),
				item.get_engine_number().clone(),
				item.get_status().clone(),
			]);
		}

		table
	}
}
