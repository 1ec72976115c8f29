use rand::Rng;

use super::graph::{Graph, NodeId};
use crate::config::BRANCH_GATE;

/// Random walk over a `Graph` that steers away from the corpus end.
///
/// Both selection points use rejection sampling:
/// - the seed is redrawn while it lies on the tail leading to the terminal node
/// - a successor is redrawn while its tail is too short to finish the request
///
/// Both rules only apply when the graph has more than `branch_gate` nodes.
/// A redraw only happens when an acceptable candidate exists, so the walk
/// always terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceGenerator {
	branch_gate: usize,
}

impl Default for SequenceGenerator {
	fn default() -> Self {
		Self::new(BRANCH_GATE)
	}
}

impl SequenceGenerator {
	pub fn new(branch_gate: usize) -> Self {
		Self { branch_gate }
	}

	/// Generates at most `max_len` characters.
	///
	/// The result is shorter only when the walk reaches a node with no
	/// successor. All randomness comes from `rng`, so the same graph and
	/// the same seeded source give the same text.
	pub fn generate<R: Rng>(&self, graph: &Graph, max_len: usize, rng: &mut R) -> String {
		let gated = graph.node_count() > self.branch_gate;

		let mut seed = Self::pick_seed(graph, gated, rng);
		// A dead end can stop the walk long before `max_len`
		let mut text = String::with_capacity(max_len.min(graph.window_count()));

		for i in 0..max_len {
			let node = graph.node_at(seed);
			if node.successors().is_empty() {
				break;
			}
			let remaining = max_len - i - 1;
			let runs_out = |id: NodeId| graph.end_distance_of(id).is_some_and(|d| d < remaining);
			let can_reject = gated && node.successors().iter().any(|id| !runs_out(*id));

			let next = loop {
				let Some(candidate) = node.random_successor(rng) else {
					return text;
				};
				if !(can_reject && runs_out(candidate)) {
					break candidate;
				}
			};

			// The seed slides by one character: the new window is `next` itself
			text.push(graph.node_at(next).last());
			seed = next;
		}

		text
	}

	/// Draws a start offset uniformly, so frequent k-grams start more often.
	fn pick_seed<R: Rng>(graph: &Graph, gated: bool, rng: &mut R) -> NodeId {
		let can_reject = gated && graph.annotated_count() < graph.node_count();
		loop {
			let candidate = graph.window(rng.random_range(0..graph.window_count()));
			if !(can_reject && graph.end_distance_of(candidate).is_some()) {
				return candidate;
			}
		}
	}
}
