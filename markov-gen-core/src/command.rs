use crate::error::{MarkovError, Result};

/// A parsed generation request: order `K` and maximum length `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
	pub order: usize,
	pub length: usize,
}

impl Command {
	/// Parses `"K"` or `"K N"` (whitespace separated, K first).
	///
	/// - `length` falls back to `default_length` when N is missing
	/// - Tokens after N are ignored
	/// - Order 0 is accepted here; the graph builder rejects it
	///
	/// # Errors
	/// `Command` if the order is missing or a token is not a non-negative integer.
	pub fn parse(input: &str, default_length: usize) -> Result<Self> {
		let mut tokens = input.split_whitespace();

		let order = match tokens.next() {
			Some(token) => parse_count(token, "order")?,
			None => return Err(MarkovError::Command("missing order".to_owned())),
		};
		let length = match tokens.next() {
			Some(token) => parse_count(token, "length")?,
			None => default_length,
		};

		Ok(Self { order, length })
	}
}

fn parse_count(token: &str, what: &str) -> Result<usize> {
	token
		.parse::<usize>()
		.map_err(|_| MarkovError::Command(format!("{what} must be a non-negative integer, got '{token}'")))
}
