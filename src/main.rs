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
use crate::inventory::criterion::Criterion;
use crate::inventory::store::Inventory;
use crate::menu::session::Session;
use crate::parsing::csv_loader::try_load_from_csv;
use crate::parsing::filesystem::Filesystem;
use crate::reports::stock_reporter::{OutputFormat, StockReporter};
use anyhow::{bail, Error};
use clap::{Parser, ValueEnum};
use std::io;
use tracing_subscriber::EnvFilter;

mod config;
mod inventory;
mod menu;
mod parsing;
mod reports;
mod util;

/// Used when neither -f nor the config file name a CSV
const DEFAULT_CSV_PATH: &str = "resources/MotorPH_Inventory.csv";

#[derive(Parser)]
#[command(name = "stockr", version = "0.1", about = "Vehicle stock inventory tool")]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	#[arg(value_enum, default_value_t = Directive::Menu)]
	command: Directive,

	/// The value to search for with the Find command
	#[arg(required = false)]
	term: Option<String>,

	// -----------
	// -- FLAGS --
	// -----------
	/// CSV file to load at startup
	#[arg(short)]
	file: Option<String>,

	/// Field to search for Find: engine, brand, status, label, or date
	#[arg(short = 'b', long = "by", default_value = "brand")]
	criterion: String,

	/// Print records as an aligned table
	#[arg(long)]
	table: bool,

	/// Print records as JSON
	#[arg(long)]
	json: bool,

	/// Custom config file location (default: ~/.config/stockr/config.toml)
	#[arg(long)]
	config: Option<String>,
}

impl Cli {
	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		if self.table && self.json {
			bail!("Only one of --table and --json may be given");
		}

		Criterion::from_str(&self.criterion)?;

		Ok(())
	}

	fn output_format(&self) -> OutputFormat {
		if self.json {
			OutputFormat::Json
		} else if self.table {
			OutputFormat::Table
		} else {
			OutputFormat::Lines
		}
	}
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Directive {
	Menu, // interactive session

	Ls,   // list every record in file order
	Sort, // list sorted by brand
	Find, // search by a single criterion
}

fn main() -> Result<(), Error> {
	init_logging();

	let args = Cli::parse();
	args.validate()?;

	let fs = Filesystem::new();
	let csv_path = get_csv_path(&args, &fs)?;

	let mut inventory = Inventory::new();
	let loaded = try_load_from_csv(&mut inventory, &fs, &csv_path);

	match args.command {
		Directive::Menu => {
			if loaded > 0 {
				println!("Loaded {} records from {}", loaded, csv_path);
			} else {
				println!("No CSV loaded. You can still add stocks manually.");
			}

			let stdin = io::stdin();
			let mut session = Session::new(stdin.lock(), io::stdout());
			session.run(&mut inventory)?;
		},
		Directive::Ls => {
			StockReporter::new(inventory.get_all()).print(args.output_format())?;
		},
		Directive::Sort => {
			inventory.sort_by_brand_ascending();
			StockReporter::new(inventory.get_all()).print(args.output_format())?;
		},
		Directive::Find => {
			let term = match &args.term {
				Some(t) => t,
				None => bail!("No search term specified"),
			};
			let criterion = Criterion::from_str(&args.criterion)?;

			let reporter = StockReporter::new(inventory.search(criterion, term));
			if reporter.is_empty() && args.output_format() != OutputFormat::Json {
				println!("No matching stock found.");
			} else {
				reporter.print(args.output_format())?;
			}
		},
	}

	Ok(())
}

/// The -f flag wins, then the config file, then the built-in default. The
/// config file is only consulted when it might matter.
fn get_csv_path(args: &Cli, fs: &Filesystem) -> Result<String, Error> {
	if let Some(file) = &args.file {
		return Ok(file.clone());
	}

	let config = fs.get_config(args.config.as_ref())?;
	Ok(config.csv_path().unwrap_or(DEFAULT_CSV_PATH).to_string())
}

/// Logs go to stderr so they never mix with report output. RUST_LOG
/// overrides the default level.
fn init_logging() {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("stockr=warn"));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}
