use std::fs::File;
use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::corpus::Corpus;
use crate::error::Result;

/// Extension of corpus files in a corpus directory.
pub const CORPUS_EXTENSION: &str = "txt";

/// Reads a whole text file into a `Corpus`.
///
/// - Reads the entire file into memory
/// - Drops a single trailing line terminator
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<Corpus> {
	Corpus::from_reader(File::open(filename)?)
}

/// Names of the corpora in `dir`: every `*.txt` file, without extension.
///
/// Subdirectories are ignored. Names are sorted.
pub fn list_corpora<P: AsRef<Path>>(dir: P) -> io::Result<Vec<String>> {
	let mut names = Vec::new();
	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if !path.is_file() || path.extension().is_none_or(|ext| ext != CORPUS_EXTENSION) {
			continue;
		}
		if let Some(stem) = path.file_stem() {
			names.push(stem.to_string_lossy().into_owned());
		}
	}
	names.sort();
	Ok(names)
}

/// Path of the corpus called `name` inside `dir`.
///
/// # Errors
/// `InvalidInput` if `name` is empty, hidden, or would leave `dir`.
pub fn corpus_path<P: AsRef<Path>>(dir: P, name: &str) -> io::Result<PathBuf> {
	if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
		return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("invalid corpus name '{name}'")));
	}
	Ok(dir.as_ref().join(format!("{name}.{CORPUS_EXTENSION}")))
}
