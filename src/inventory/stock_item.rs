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
use crate::util::date::Date;
use serde::Serialize;
use std::fmt;

/// A single vehicle in stock. Fields are fixed at construction; the only way
/// to "change" a record is to delete it and add a new one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StockItem {
	date_entered: Date,
	stock_label: String,
	brand: String,
	engine_number: String,
	status: String,
}

impl StockItem {
	pub fn new(
		date_entered: Date,
		stock_label: impl Into<String>,
		brand: impl Into<String>,
		engine_number: impl Into<String>,
		status: impl Into<String>,
	) -> Self {
		Self {
			date_entered,
			stock_label: stock_label.into(),
			brand: brand.into(),
			engine_number: engine_number.into(),
			status: status.into(),
		}
	}

	pub fn get_date_entered(&self) -> &Date {
		&self.date_entered
	}

	/// Conventionally "Old" or "New"
	pub fn get_stock_label(&self) -> &String {
		&self.stock_label
	}

	pub fn get_brand(&self) -> &String {
		&self.brand
	}

	/// Meant to identify a vehicle, but duplicates are accepted.
	pub fn get_engine_number(&self) -> &String {
		&self.engine_number
	}

	/// Conventionally "On-hand" or "Sold"
	pub fn get_status(&self) -> &String {
		&self.status
	}
}

impl fmt::Display for StockItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Date Entered: {} | Label: {} | Brand: {} | Engine #: {} | Status: {}",
			self.date_entered,
			self.stock_label,
			self.brand,
			self.engine_number,
			self.status
		)
	}
}
