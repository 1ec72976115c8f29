//! Top-level module for the order-K Markov generation system.
//!
//! This module provides:
//! - The k-gram adjacency graph and its builder (`Graph`, `GraphBuilder`)
//! - Per-node adjacency storage (`Node`)
//! - The rejection-sampling walk (`SequenceGenerator`)
//! - A host model that owns corpus, graph and random source (`MarkovModel`)

/// k-gram adjacency graph with end-of-corpus distances.
///
/// Built by brute force in one scan of the corpus for a given order.
pub mod graph;

/// Rejection-sampling random walk over a `Graph`.
pub mod generator;

/// Host model: rebuilds the graph on order change, times requests and
/// notifies views.
pub mod markov_model;

/// Internal representation of a single k-gram node.
///
/// Tracks predecessor and successor multisets and the end distance.
/// This module is not exposed publicly.
mod node;
