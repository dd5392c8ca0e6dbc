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
use crate::inventory::criterion::Criterion;
use crate::inventory::stock_item::StockItem;
use crate::inventory::store::Inventory;
use crate::util::date::Date;
use anyhow::Error;
use std::io::{BufRead, Write};

/// Whether the menu loop should keep going after an action.
#[derive(Debug, PartialEq)]
enum Flow {
	Continue,
	Exit,
}

/// The interactive menu. Reads one answer per line from `input` and writes
/// prompts and results to `output`; end of input is treated like choosing
/// Exit.
pub struct Session<R: BufRead, W: Write> {
	input: R,
	output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}

	pub fn run(&mut self, inventory: &mut Inventory) -> Result<(), Error> {
		loop {
			self.print_menu()?;
			let choice = match self.prompt("Choose an option: ")? {
				Some(c) => c,
				None => break,
			};

			let flow = match choice.as_str() {
				"1" => self.add_stock(inventory)?,
				"2" => self.search(inventory)?,
				"3" => self.delete(inventory)?,
				"4" => {
					inventory.sort_by_brand_ascending();
					writeln!(self.output, "Inventory sorted by Brand (A–Z).")?;
					Flow::Continue
				},
				"5" => {
					self.display_all(inventory)?;
					Flow::Continue
				},
				"0" => Flow::Exit,
				_ => {
					writeln!(self.output, "Invalid choice. Try again.")?;
					Flow::Continue
				},
			};

			if flow == Flow::Exit {
				break;
			}
		}

		writeln!(self.output, "Exiting... Goodbye!")?;
		self.output.flush()?;
		Ok(())
	}

	fn print_menu(&mut self) -> Result<(), Error> {
		writeln!(self.output)?;
		writeln!(self.output, "=== MotorPH Inventory Management ===")?;
		writeln!(self.output, "[1] Add Stock")?;
		writeln!(self.output, "[2] Search Stock (Single Criterion)")?;
		writeln!(self.output, "[3] Delete Stock (Single Criterion)")?;
		writeln!(self.output, "[4] Sort by Brand (A–Z)")?;
		writeln!(self.output, "[5] Display All Inventory")?;
		writeln!(self.output, "[0] Exit")?;
		Ok(())
	}

	fn add_stock(&mut self, inventory: &mut Inventory) -> Result<Flow, Error> {
		writeln!(self.output, "\n--- Add Stock ---")?;

		let Some(date) = self.prompt_date("Date Entered (YYYY-MM-DD): ")? else {
			return Ok(Flow::Exit);
		};
		let Some(label) = self.prompt("Stock Label (Old/New): ")? else {
			return Ok(Flow::Exit);
		};
		let Some(brand) = self.prompt("Brand: ")? else {
			return Ok(Flow::Exit);
		};
		let Some(engine) = self.prompt("Engine Number: ")? else {
			return Ok(Flow::Exit);
		};
		let Some(status) = self.prompt("Status (On-hand/Sold): ")? else {
			return Ok(Flow::Exit);
		};

		let item = StockItem::new(date, label, brand, engine, status);
		writeln!(self.output, "Added: {}", item)?;
		inventory.add_stock(item);
		writeln!(self.output, "Total records: {}", inventory.size())?;

		Ok(Flow::Continue)
	}

	fn search(&mut self, inventory: &Inventory) -> Result<Flow, Error> {
		writeln!(self.output, "\n--- Search Stock (Single Criterion) ---")?;

		let Some(criterion) = self.prompt_criterion()? else {
			return Ok(Flow::Exit);
		};
		let Some(value) = self.prompt("Enter value: ")? else {
			return Ok(Flow::Exit);
		};

		let results = inventory.search(criterion, &value);
		if results.is_empty() {
			writeln!(self.output, "No matching stock found.")?;
			return Ok(Flow::Continue);
		}

		writeln!(self.output, "Found {} match(es):", results.len())?;
		for item in &results {
			writeln!(self.output, " - {}", item)?;
		}

		Ok(Flow::Continue)
	}

	fn delete(&mut self, inventory: &mut Inventory) -> Result<Flow, Error> {
		writeln!(self.output, "\n--- Delete Stock (Single Criterion) ---")?;

		let Some(criterion) = self.prompt_criterion()? else {
			return Ok(Flow::Exit);
		};
		let Some(value) = self.prompt("Enter value: ")? else {
			return Ok(Flow::Exit);
		};
		let Some(first_only) = self.prompt("Delete FIRST match only? (Y/N): ")?
		else {
			return Ok(Flow::Exit);
		};

		// anything but an explicit "n" deletes just the first
		if first_only.to_lowercase() == "n" {
			let count = inventory.delete_all_matches(criterion, &value);
			writeln!(self.output, "Deleted {} record(s).", count)?;
		} else if inventory.delete_first_match(criterion, &value) {
			writeln!(self.output, "Deleted 1 record.")?;
		} else {
			writeln!(self.output, "No matching stock found.")?;
		}

		writeln!(self.output, "Total records: {}", inventory.size())?;
		Ok(Flow::Continue)
	}

	fn display_all(&mut self, inventory: &Inventory) -> Result<(), Error> {
		writeln!(
			self.output,
			"\n--- Inventory Records ({}) ---",
			inventory.size()
		)?;

		let all = inventory.get_all();
		if all.is_empty() {
			writeln!(self.output, "(empty)")?;
			return Ok(());
		}

		for item in &all {
			writeln!(self.output, " - {}", item)?;
		}
		Ok(())
	}

	/// Asks until one of the numbered criteria is picked.
	fn prompt_criterion(&mut self) -> Result<Option<Criterion>, Error> {
		loop {
			writeln!(self.output, "Choose criterion:")?;
			for (i, criterion) in Criterion::ALL.iter().enumerate() {
				writeln!(self.output, " [{}] {}", i + 1, criterion)?;
			}

			let Some(choice) = self.prompt("Enter choice: ")? else {
				return Ok(None);
			};
			match Criterion::from_menu_choice(&choice) {
				Some(c) => return Ok(Some(c)),
				None => writeln!(self.output, "Invalid. Try again.")?,
			}
		}
	}

	/// Manual entry only takes ISO dates; the lenient import formats are
	/// deliberately not offered here.
	fn prompt_date(&mut self, prompt: &str) -> Result<Option<Date>, Error> {
		loop {
			let Some(s) = self.prompt(prompt)? else {
				return Ok(None);
			};
			match Date::from_str(&s) {
				Ok(d) => return Ok(Some(d)),
				Err(_) => writeln!(
					self.output,
					"Invalid date format. Use YYYY-MM-DD."
				)?,
			}
		}
	}

	/// Writes the prompt and reads one trimmed line. None at end of input.
	fn prompt(&mut self, prompt: &str) -> Result<Option<String>, Error> {
		write!(self.output, "{}", prompt)?;
		self.output.flush()?;

		let mut line = String::new();
		if self.input.read_line(&mut line)? == 0 {
			return Ok(None);
		}
		Ok(Some(line.trim().to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	/// Feeds the script to a session and returns everything it printed.
	fn run_script(inventory: &mut Inventory, script: &str) -> String {
		let mut output = Vec::new();
		let mut session = Session::new(Cursor::new(script.as_bytes()), &mut output);
		session.run(inventory).unwrap();
		String::from_utf8(output).unwrap()
	}

	fn seeded() -> Inventory {
		let mut inventory = Inventory::new();
		for (brand, engine) in [("Yamaha", "E2"), ("Honda", "E1"), ("Honda", "E3")] {
			inventory.add_stock(StockItem::new(
				Date::from_str("2024-01-15").unwrap(),
				"New",
				brand,
				engine,
				"On-hand",
			));
		}
		inventory
	}

	#[test]
	fn test_exit() {
		let mut inventory = Inventory::new();
		let out = run_script(&mut inventory, "0\n");
		assert!(out.contains("[1] Add Stock"));
		assert!(out.trim_end().ends_with("Exiting... Goodbye!"));
	}

	#[test]
	fn test_eof_exits() {
		let mut inventory = seeded();
		let out = run_script(&mut inventory, "");
		assert!(out.contains("Exiting... Goodbye!"));
		assert_eq!(inventory.size(), 3);
	}

	#[test]
	fn test_invalid_choice() {
		let mut inventory = Inventory::new();
		let out = run_script(&mut inventory, "9\n0\n");
		assert!(out.contains("Invalid choice. Try again."));
		assert_eq!(out.matches("=== MotorPH Inventory Management ===").count(), 2);
	}

	#[test]
	fn test_add_reprompts_for_date() {
		let mut inventory = Inventory::new();
		let out = run_script(
			&mut inventory,
			"1\n3/4/2024\n2024-03-04\nNew\nHonda\nEN1\nOn-hand\n0\n",
		);
		assert!(out.contains("Invalid date format. Use YYYY-MM-DD."));
		assert!(out.contains(
			"Added: Date Entered: 2024-03-04 | Label: New | Brand: Honda | Engine #: EN1 | Status: On-hand"
		));
		assert!(out.contains("Total records: 1"));
		assert_eq!(inventory.size(), 1);
	}

	#[test]
	fn test_search() {
		let mut inventory = seeded();
		let out = run_script(&mut inventory, "2\n2\nhon\n2\n1\nE9\n0\n");
		assert!(out.contains("Found 2 match(es):"));
		assert!(out.contains(" - Date Entered: 2024-01-15 | Label: New | Brand: Honda | Engine #: E1 | Status: On-hand"));
		assert!(out.contains("No matching stock found."));
	}

	#[test]
	fn test_invalid_criterion_reprompts() {
		let mut inventory = seeded();
		let out = run_script(&mut inventory, "2\n7\n01\n3\non-hand\n0\n");
		assert_eq!(out.matches("Invalid. Try again.").count(), 2);
		assert!(out.contains("Found 3 match(es):"));
	}

	#[test]
	fn test_delete_first_then_all() {
		let mut inventory = seeded();
		let out = run_script(&mut inventory, "3\n2\nhonda\ny\n0\n");
		assert!(out.contains("Deleted 1 record."));
		assert!(out.contains("Total records: 2"));
		assert_eq!(inventory.search(Criterion::EngineNumber, "E1").len(), 0);

		let mut inventory = seeded();
		let out = run_script(&mut inventory, "3\n2\nHONDA\nN\n0\n");
		assert!(out.contains("Deleted 2 record(s)."));
		assert_eq!(inventory.size(), 1);
	}

	#[test]
	fn test_delete_no_match() {
		let mut inventory = seeded();
		let out = run_script(&mut inventory, "3\n1\nnope\n\n0\n");
		assert!(out.contains("No matching stock found."));
		assert!(out.contains("Total records: 3"));
	}

	#[test]
	fn test_sort_and_display() {
		let mut inventory = seeded();
		let out = run_script(&mut inventory, "4\n5\n0\n");
		assert!(out.contains("Inventory sorted by Brand (A–Z)."));
		assert!(out.contains("--- Inventory Records (3) ---"));

		let first_honda = out.find("Engine #: E1").unwrap();
		let second_honda = out.find("Engine #: E3").unwrap();
		let yamaha = out.find("Engine #: E2").unwrap();
		assert!(first_honda < second_honda && second_honda < yamaha);
	}

	#[test]
	fn test_display_empty() {
		let mut inventory = Inventory::new();
		let out = run_script(&mut inventory, "5\n0\n");
		assert!(out.contains("--- Inventory Records (0) ---"));
		assert!(out.contains("(empty)"));
	}
}
