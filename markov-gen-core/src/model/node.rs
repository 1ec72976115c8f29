use rand::Rng;

use super::graph::NodeId;

/// A k-gram of the corpus and its observed neighbours.
///
/// Conceptually a vertex of the Markov chain. Edges are kept as multisets:
/// a neighbour seen three times appears three times, so a uniform draw over
/// the list is a draw proportional to corpus frequency.
///
/// ## Invariants
/// - `key` has exactly `order` characters and `last` is its final one
/// - `end_distance` is only set when `successors.len() <= 1`
#[derive(Clone, Debug)]
pub(crate) struct Node {
	key: String,
	last: char,
	predecessors: Vec<NodeId>,
	successors: Vec<NodeId>,
	end_distance: Option<usize>,
}

impl Node {
	/// Creates a node with no recorded neighbours.
	///
	/// `window` must not be empty.
	pub(crate) fn new(window: &[char]) -> Self {
		Self {
			key: window.iter().collect(),
			last: window[window.len() - 1],
			predecessors: Vec::new(),
			successors: Vec::new(),
			end_distance: None,
		}
	}

	pub(crate) fn key(&self) -> &str {
		&self.key
	}

	pub(crate) fn last(&self) -> char {
		self.last
	}

	pub(crate) fn predecessors(&self) -> &[NodeId] {
		&self.predecessors
	}

	pub(crate) fn successors(&self) -> &[NodeId] {
		&self.successors
	}

	pub(crate) fn end_distance(&self) -> Option<usize> {
		self.end_distance
	}

	/// Records one occurrence of `prev` right before this node.
	pub(crate) fn add_predecessor(&mut self, prev: NodeId) {
		self.predecessors.push(prev);
	}

	/// Records one occurrence of `next` right after this node.
	pub(crate) fn add_successor(&mut self, next: NodeId) {
		self.successors.push(next);
	}

	pub(crate) fn set_end_distance(&mut self, distance: usize) {
		self.end_distance = Some(distance);
	}

	/// Draws a successor uniformly from the multiset.
	///
	/// Returns `None` if the node has no successors.
	pub(crate) fn random_successor<R: Rng>(&self, rng: &mut R) -> Option<NodeId> {
		if self.successors.is_empty() {
			return None;
		}
		Some(self.successors[rng.random_range(0..self.successors.len())])
	}
}
