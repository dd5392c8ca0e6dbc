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
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub inventory: Option<InventorySettings>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InventorySettings {
	/// CSV loaded at startup when no -f is given
	pub csv_path: Option<String>,
}

impl Config {
	pub fn csv_path(&self) -> Option<&str> {
		self.inventory.as_ref()?.csv_path.as_deref()
	}
}
