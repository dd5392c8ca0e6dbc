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
use crate::config::config_file::Config;
use anyhow::{anyhow, bail, Error};
use dirs::home_dir;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where config is looked for when no --config is given, relative to $HOME.
const DEFAULT_CONFIG_PATH: &str = ".config/stockr/config.toml";

pub struct Filesystem;

impl Filesystem {
	pub fn new() -> Self {
		Self
	}

	pub fn read_to_string(&self, file_path: &str) -> Result<String, Error> {
		let path = Path::new(file_path);
		let content = fs::read_to_string(path)
			.map_err(|e| anyhow!("{}: {}", file_path, e))?;
		Ok(content)
	}

	/// Fetches the config from the given path, or default path if none. A
	/// missing file is only acceptable at the default location, where it
	/// means "no settings".
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match custom_config_path {
			None => match home_dir() {
				Some(home) => home.join(DEFAULT_CONFIG_PATH),
				None => {
					debug!("no home directory; using default settings");
					return Ok(Config::default());
				},
			},
			Some(p) => PathBuf::from(p),
		};

		if !config_path.exists() {
			if custom_config_path.is_some() {
				bail!("config file not found: {}", config_path.display());
			}
			debug!("no config at {}", config_path.display());
			return Ok(Config::default());
		}

		debug!("reading config from {}", config_path.display());
		let content = fs::read_to_string(&config_path)?;
		let config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn test_custom_config() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "[inventory]\ncsv_path = \"stock/current.csv\"").unwrap();

		let path = file.path().to_str().unwrap().to_string();
		let config = Filesystem::new().get_config(Some(&path)).unwrap();
		assert_eq!(config.csv_path(), Some("stock/current.csv"));
	}

	#[test]
	fn test_empty_config() {
		let file = NamedTempFile::new().unwrap();
		let path = file.path().to_str().unwrap().to_string();
		let config = Filesystem::new().get_config(Some(&path)).unwrap();
		assert_eq!(config.csv_path(), None);
	}

	#[test]
	fn test_missing_custom_config() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent.toml").to_str().unwrap().to_string();
		assert!(Filesystem::new().get_config(Some(&path)).is_err());
	}

	#[test]
	fn test_malformed_config() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "[inventory\ncsv_path = ").unwrap();

		let path = file.path().to_str().unwrap().to_string();
		assert!(Filesystem::new().get_config(Some(&path)).is_err());
	}

	#[test]
	fn test_read_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("gone.csv");
		assert!(Filesystem::new()
			.read_to_string(path.to_str().unwrap())
			.is_err());
	}
}
