//! Error types for markov-gen-core.

use thiserror::Error;

/// Top-level error type for graph building and generation requests.
///
/// Generation itself never fails: a dead end is a short result. Every
/// variant here is a deterministic input problem, so none is retried.
#[derive(Debug, Error)]
pub enum MarkovError {
	/// The order does not satisfy `1 <= order < corpus_len`.
	#[error("invalid order {order}: must satisfy 1 <= k < {corpus_len}")]
	InvalidOrder { order: usize, corpus_len: usize },

	/// No corpus was loaded, or it has no characters.
	#[error("corpus is empty or not loaded")]
	EmptyCorpus,

	/// Malformed "K N" command.
	#[error("invalid command: {0}")]
	Command(String),

	/// Invalid configuration file or values.
	#[error("configuration error: {0}")]
	Config(String),

	/// I/O error wrapper.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type for markov-gen operations.
pub type Result<T> = std::result::Result<T, MarkovError>;
