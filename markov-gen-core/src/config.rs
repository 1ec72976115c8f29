//! Configuration for graph walking and the command adapter.

use std::path::Path;

use serde::Deserialize;

use crate::error::{MarkovError, Result};

/// Number of characters generated when a command omits the length.
pub const DEFAULT_LENGTH: usize = 100;

/// Seed of the model-owned random source.
pub const RANDOM_SEED: u64 = 1234;

/// Node count above which dead-end avoidance engages.
pub const BRANCH_GATE: usize = 100;

/// Generator settings.
///
/// Every field is optional in TOML; missing ones take their default.
///
/// ```toml
/// branch_gate = 100
/// default_length = 250
/// random_seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
	/// Both rejection loops (seed and successor) only run when the graph has
	/// strictly more distinct nodes than this. Small graphs skip dead-end
	/// avoidance entirely, since they rarely offer an alternative branch.
	pub branch_gate: usize,
	/// Length used by `process` when the command has no second token.
	pub default_length: usize,
	/// Seed of the `StdRng` created by `MarkovModel::new`.
	pub random_seed: u64,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			branch_gate: BRANCH_GATE,
			default_length: DEFAULT_LENGTH,
			random_seed: RANDOM_SEED,
		}
	}
}

impl GeneratorConfig {
	/// Parses and validates a configuration from a TOML string.
	pub fn from_toml(toml_str: &str) -> Result<Self> {
		let config: Self = toml::from_str(toml_str).map_err(|e| MarkovError::Config(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Loads a configuration file.
	///
	/// # Errors
	/// I/O errors if the file cannot be read, `Config` if it is not valid.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let content = std::fs::read_to_string(path)?;
		Self::from_toml(&content)
	}

	/// Checks value ranges.
	pub fn validate(&self) -> Result<()> {
		if self.default_length == 0 {
			return Err(MarkovError::Config("default_length must be greater than 0".to_owned()));
		}
		Ok(())
	}
}
