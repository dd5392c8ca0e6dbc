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
use crate::util::date::Date;
use anyhow::{bail, Error};
use std::fmt;

/// The single field a search or delete looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Criterion {
	EngineNumber,
	Brand,
	Status,
	StockLabel,
	DateEntered,
}

impl Criterion {
	/// Menu order, as numbered in the interactive session (1-based)
	pub const ALL: [Criterion; 5] = [
		Criterion::EngineNumber,
		Criterion::Brand,
		Criterion::Status,
		Criterion::StockLabel,
		Criterion::DateEntered,
	];

	/// Parses a criterion name as given on the command line.
	pub fn from_str(s: &str) -> Result<Self, Error> {
		match s.trim().to_lowercase().as_str() {
			"engine" | "engine-number" => Ok(Criterion::EngineNumber),
			"brand" => Ok(Criterion::Brand),
			"status" => Ok(Criterion::Status),
			"label" | "stock-label" => Ok(Criterion::StockLabel),
			"date" | "date-entered" => Ok(Criterion::DateEntered),
			_ => bail!("unknown criterion: {}", s),
		}
	}

	/// Maps a menu selection ("1" through "5") to its criterion. Only the
	/// bare digit counts; "01" or "+1" are not a selection.
	pub fn from_menu_choice(choice: &str) -> Option<Self> {
		match choice.trim() {
			"1" => Some(Criterion::EngineNumber),
			"2" => Some(Criterion::Brand),
			"3" => Some(Criterion::Status),
			"4" => Some(Criterion::StockLabel),
			"5" => Some(Criterion::DateEntered),
			_ => None,
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Criterion::EngineNumber => "Engine Number",
			Criterion::Brand => "Brand",
			Criterion::Status => "Status",
			Criterion::StockLabel => "Stock Label",
			Criterion::DateEntered => "Date Entered",
		}
	}
}

impl fmt::Display for Criterion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

/// A criterion paired with its normalized search value, prepared once and
/// then tested against every record in a scan.
#[derive(Debug)]
pub struct Query {
	criterion: Criterion,
	needle: Needle,
}

#[derive(Debug)]
enum Needle {
	Text(String),
	/// None when the value was not a valid ISO date; such a query matches
	/// nothing.
	Date(Option<Date>),
}

impl Query {
	pub fn new(criterion: Criterion, value: &str) -> Self {
		let value = value.trim();
		let needle = match criterion {
			Criterion::DateEntered => Needle::Date(Date::from_str(value).ok()),
			_ => Needle::Text(normalize(value)),
		};

		Self { criterion, needle }
	}

	/// Brand is a substring match; every other text field must match exactly.
	/// Text comparisons ignore case and surrounding whitespace.
	pub fn matches(&self, item: &StockItem) -> bool {
		match (&self.needle, self.criterion) {
			(Needle::Date(date), _) => {
				date.as_ref() == Some(item.get_date_entered())
			},
			(Needle::Text(text), Criterion::Brand) => {
				normalize(item.get_brand()).contains(text.as_str())
			},
			(Needle::Text(text), Criterion::EngineNumber) => {
				&normalize(item.get_engine_number()) == text
			},
			(Needle::Text(text), Criterion::Status) => {
				&normalize(item.get_status()) == text
			},
			(Needle::Text(text), Criterion::StockLabel) => {
				&normalize(item.get_stock_label()) == text
			},
			(Needle::Text(_), Criterion::DateEntered) => false,
		}
	}
}

/// Comparison form of a field: trimmed and lowercased.
pub fn normalize(s: &str) -> String {
	s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item() -> StockItem {
		StockItem::new(
			Date::from_str("2024-03-04").unwrap(),
			" New ",
			"Honda Civic",
			"HON123",
			"On-hand",
		)
	}

	#[test]
	fn test_brand_is_substring() {
		assert!(Query::new(Criterion::Brand, "hon").matches(&item()));
		assert!(Query::new(Criterion::Brand, "  CIVIC ").matches(&item()));
		assert!(Query::new(Criterion::Brand, "").matches(&item()));
		assert!(!Query::new(Criterion::Brand, "yamaha").matches(&item()));
	}

	#[test]
	fn test_engine_number_is_exact() {
		assert!(Query::new(Criterion::EngineNumber, "HON123").matches(&item()));
		assert!(Query::new(Criterion::EngineNumber, " hon123 ").matches(&item()));
		assert!(!Query::new(Criterion::EngineNumber, "hon").matches(&item()));
	}

	#[test]
	fn test_status_and_label_are_exact() {
		assert!(Query::new(Criterion::Status, "on-hand").matches(&item()));
		assert!(!Query::new(Criterion::Status, "on").matches(&item()));
		// stored value has stray whitespace
		assert!(Query::new(Criterion::StockLabel, "new").matches(&item()));
		assert!(!Query::new(Criterion::StockLabel, "old").matches(&item()));
	}

	#[test]
	fn test_date_entered() {
		assert!(Query::new(Criterion::DateEntered, " 2024-03-04 ").matches(&item()));
		assert!(!Query::new(Criterion::DateEntered, "2024-03-05").matches(&item()));
		assert!(!Query::new(Criterion::DateEntered, "3/4/2024").matches(&item()));
		assert!(!Query::new(Criterion::DateEntered, "2024-13-40").matches(&item()));
		assert!(!Query::new(Criterion::DateEntered, "").matches(&item()));
	}

	#[test]
	fn test_from_str() {
		assert_eq!(Criterion::from_str("Brand").unwrap(), Criterion::Brand);
		assert_eq!(
			Criterion::from_str("engine-number").unwrap(),
			Criterion::EngineNumber
		);
		assert_eq!(Criterion::from_str("label").unwrap(), Criterion::StockLabel);
		assert_eq!(Criterion::from_str("date").unwrap(), Criterion::DateEntered);
		assert!(Criterion::from_str("colour").is_err());
	}

	#[test]
	fn test_from_menu_choice() {
		assert_eq!(Criterion::from_menu_choice("1"), Some(Criterion::EngineNumber));
		assert_eq!(Criterion::from_menu_choice(" 5 "), Some(Criterion::DateEntered));
		assert_eq!(Criterion::from_menu_choice("0"), None);
		assert_eq!(Criterion::from_menu_choice("6"), None);
		assert_eq!(Criterion::from_menu_choice("x"), None);
		assert_eq!(Criterion::from_menu_choice("+1"), None);
		assert_eq!(Criterion::from_menu_choice("01"), None);
		assert_eq!(Criterion::from_menu_choice("005"), None);
		assert_eq!(Criterion::from_menu_choice(""), None);
	}
}
