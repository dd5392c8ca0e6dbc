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
use crate::inventory::store::Inventory;
use crate::parsing::filesystem::Filesystem;
use crate::util::date::Date;
use tracing::{debug, info, warn};

/// Columns expected on every data row, in this order:
/// date entered, stock label, brand, engine number, status.
const FIELD_COUNT: usize = 5;

/// Loads every usable row of the CSV at `path` into the inventory and returns
/// how many were added. A file that cannot be read loads nothing and leaves
/// the inventory untouched; the reason only goes to the log.
pub fn try_load_from_csv(
	inventory: &mut Inventory,
	fs: &Filesystem,
	path: &str,
) -> usize {
	match fs.read_to_string(path) {
		Ok(content) => {
			let count = load_from_str(inventory, &content);
			info!("loaded {} records from {}", count, path);
			count
		},
		Err(e) => {
			warn!("could not read {}: {}", path, e);
			0
		},
	}
}

/// Parses CSV text (header line first) into the inventory. Fields are split
/// on bare commas; there is no quoting. Rows with too few fields or a date
/// that can't be made sense of are skipped.
pub fn load_from_str(inventory: &mut Inventory, content: &str) -> usize {
	let mut count = 0;

	// header is never inspected
	for (i, line) in content.lines().enumerate().skip(1) {
		match parse_row(line) {
			Some(item) => {
				inventory.add_stock(item);
				count += 1;
			},
			None => debug!("skipping line {}: {:?}", i + 1, line),
		}
	}

	count
}

fn parse_row(line: &str) -> Option<StockItem> {
	let parts: Vec<&str> = line.split(',').map(str::trim).collect();
	if parts.len() < FIELD_COUNT {
		return None;
	}

	let date = Date::parse_lenient(parts[0])?;

	Some(StockItem::new(date, parts[1], parts[2], parts[3], parts[4]))
}
