//! Character-level Markov text generation library.
//!
//! This crate provides an order-K Markov text generator built by brute force
//! from a reference corpus, including:
//! - A k-gram adjacency graph annotated with distances to the corpus end
//! - A rejection-sampling walk that avoids dead ends when it can
//! - A host model that rebuilds the graph whenever the order changes
//! - Thin adapters for corpus reading, "K N" commands and status views
//!
//! Randomness is never global: every generation draws from a source owned
//! by the caller, so results are reproducible from a seed.

/// Core graph, generator and host model.
pub mod model;

/// Immutable reference text.
pub mod corpus;

/// "K N" command parsing.
pub mod command;

/// Generator configuration (TOML).
pub mod config;

/// Error type shared by the whole crate.
pub mod error;

/// Receivers of generated text and status messages.
pub mod view;

/// I/O utilities (file loading, path helpers).
pub mod io;

pub use command::Command;
pub use config::GeneratorConfig;
pub use corpus::Corpus;
pub use error::{MarkovError, Result};
pub use model::generator::SequenceGenerator;
pub use model::graph::{Graph, GraphBuilder, NodeId};
pub use model::markov_model::MarkovModel;
pub use view::{LogView, MessageLog, ModelView};
