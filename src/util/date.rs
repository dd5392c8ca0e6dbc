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

use anyhow::{bail, Error};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Date {
	year: u32,
	month: u8,
	day: u8,
}

/// Component order of a slash-separated date such as "3/4/2024".
#[derive(Clone, Copy, Debug, PartialEq)]
enum SlashOrder {
	MonthFirst,
	DayFirst,
}

fn iso_regex() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap())
}

fn slash_regex() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| {
		Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})$").unwrap()
	})
}

impl Date {
	/// Constructor to parse a string in the strict "YYYY-MM-DD" format. The
	/// month and day must be zero-padded, and the date must exist.
	pub fn from_str(date_str: &str) -> Result<Date, Error> {
		let caps = match iso_regex().captures(date_str) {
			Some(c) => c,
			None => bail!("Date format must be YYYY-MM-DD"),
		};

		let year = caps[1].parse::<u32>()?;
		let month = caps[2].parse::<u8>()?;
		let day = caps[3].parse::<u8>()?;

		if !Date::is_valid_date(year, month, day) {
			bail!("Invalid date: {}", date_str);
		}

		Ok(Date { year, month, day })
	}

	/// Parses dates as they tend to show up in spreadsheets exported by hand.
	/// Tries, in order: "YYYY-MM-DD", "M/D/YYYY", then "D/M/YYYY", and returns
	/// the first that succeeds.
	///
	/// The two slashed forms overlap whenever both leading numbers are 12 or
	/// less; "3/4/2024" is always March 4, and day-first is only reached when
	/// month-first cannot be read at all (e.g. "25/12/2024").
	pub fn parse_lenient(raw: &str) -> Option<Date> {
		let s = raw.trim();
		if s.is_empty() {
			return None;
		}

		Date::from_str(s)
			.ok()
			.or_else(|| Date::from_slashed(s, SlashOrder::MonthFirst))
			.or_else(|| Date::from_slashed(s, SlashOrder::DayFirst))
	}

	/// Slashed dates resolve leniently: a day of 29-31 past the end of the
	/// month is pulled back to the month's last day ("2/30/2023" is Feb 28).
	/// Days above 31 and months above 12 never resolve.
	fn from_slashed(s: &str, order: SlashOrder) -> Option<Date> {
		let caps = slash_regex().captures(s)?;

		let first = caps[1].parse::<u8>().ok()?;
		let second = caps[2].parse::<u8>().ok()?;
		let year = caps[3].parse::<u32>().ok()?;

		let (month, day) = match order {
			SlashOrder::MonthFirst => (first, second),
			SlashOrder::DayFirst => (second, first),
		};

		if year == 0 || !(1..=12).contains(&month) || !(1..=31).contains(&day)
		{
			return None;
		}

		let day = day.min(Date::days_in_month(year, month)?);

		Some(Date { year, month, day })
	}

	fn days_in_month(year: u32, month: u8) -> Option<u8> {
		(28..=31)
			.rev()
			.find(|&d| Date::is_valid_date(year, month, d))
	}

	fn is_valid_date(year: u32, month: u8, day: u8) -> bool {
		let year = match i32::try_from(year) {
			Ok(y) => y,
			Err(_) => return false,
		};
		NaiveDate::from_ymd_opt(year, month as u32, day as u32).is_some()
	}
}

impl fmt::Display for Date {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}
}

impl Serialize for Date {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}
