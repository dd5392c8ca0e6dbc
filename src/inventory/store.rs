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
use crate::inventory::criterion::{normalize, Criterion, Query};
use crate::inventory::stock_item::StockItem;

/// The in-memory stock list for a session. Records keep the order they were
/// added in until the list is explicitly sorted. There are no indexes; every
/// search and delete is a full scan.
///
/// Callers only ever get clones back, so nothing outside can reach in and
/// reorder or mutate the stored records.
#[derive(Debug, Default)]
pub struct Inventory {
	items: Vec<StockItem>,
}

impl Inventory {
	pub fn new() -> Self {
		Self { items: vec![] }
	}

	pub fn size(&self) -> usize {
		self.items.len()
	}

	/// Appends to the end of the list. Duplicate engine numbers are allowed.
	pub fn add_stock(&mut self, item: StockItem) {
		self.items.push(item);
	}

	/// Every record matching the criterion, in list order.
	pub fn search(&self, criterion: Criterion, value: &str) -> Vec<StockItem> {
		let query = Query::new(criterion, value);
		self.items
			.iter()
			.filter(|item| query.matches(item))
			.cloned()
			.collect()
	}

	/// Removes the earliest matching record, if any.
	pub fn delete_first_match(&mut self, criterion: Criterion, value: &str) -> bool {
		let query = Query::new(criterion, value);
		match self.items.iter().position(|item| query.matches(item)) {
			Some(i) => {
				self.items.remove(i);
				true
			},
			None => false,
		}
	}

	/// Removes every matching record and returns how many went.
	pub fn delete_all_matches(&mut self, criterion: Criterion, value: &str) -> usize {
		let query = Query::new(criterion, value);
		let before = self.items.len();
		self.items.retain(|item| !query.matches(item));
		before - self.items.len()
	}

	/// Sorts A-Z by brand ignoring case, then by engine number ignoring case.
	/// Records equal on both keep their relative order.
	pub fn sort_by_brand_ascending(&mut self) {
		self.items.sort_by_cached_key(|item| {
			(normalize(item.get_brand()), normalize(item.get_engine_number()))
		});
	}

	pub fn get_all(&self) -> Vec<StockItem> {
		self.items.clone()
	}
}
