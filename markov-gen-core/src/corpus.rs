use std::io::Read;

use crate::error::Result;

/// The reference text every graph is built from.
///
/// Stored as Unicode scalar values so that k-grams are counted in
/// characters, not bytes. A `Corpus` is never mutated after construction;
/// loading a new text means building a new `Corpus`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corpus {
	chars: Vec<char>,
}

impl Corpus {
	/// Wraps an already decoded text.
	pub fn new(text: &str) -> Self {
		Self { chars: text.chars().collect() }
	}

	/// Reads a reader to its end.
	///
	/// A single trailing line terminator (`\n` or `\r\n`) is dropped, so a
	/// file saved by an editor yields the same corpus as its raw text.
	///
	/// # Errors
	/// I/O errors, including invalid UTF-8.
	pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
		let mut contents = String::new();
		reader.read_to_string(&mut contents)?;
		Ok(Self::new(strip_final_newline(&contents)))
	}

	/// Number of characters.
	pub fn len(&self) -> usize {
		self.chars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chars.is_empty()
	}

	pub fn chars(&self) -> &[char] {
		&self.chars
	}
}

fn strip_final_newline(text: &str) -> &str {
	text.strip_suffix("\r\n")
		.or_else(|| text.strip_suffix('\n'))
		.unwrap_or(text)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_characters_not_bytes() {
		let corpus = Corpus::new("héllo");
		assert_eq!(corpus.len(), 5);
		assert_eq!(&corpus.chars()[1..3], &['é', 'l']);
	}

	#[test]
	fn reader_drops_one_trailing_newline() {
		let corpus = Corpus::from_reader("abc\n\n".as_bytes()).unwrap();
		assert_eq!(corpus, Corpus::new("abc\n"));
		let corpus = Corpus::from_reader("abc\r\n".as_bytes()).unwrap();
		assert_eq!(corpus, Corpus::new("abc"));
	}

	#[test]
	fn reader_keeps_inner_newlines() {
		let corpus = Corpus::from_reader("a\nb".as_bytes()).unwrap();
		assert_eq!(corpus.chars(), &['a', '\n', 'b']);
	}

	#[test]
	fn reader_rejects_invalid_utf8() {
		assert!(Corpus::from_reader(&[0xff, 0xfe][..]).is_err());
	}
}
