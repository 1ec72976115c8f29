use std::collections::HashMap;

use super::node::Node;
use crate::corpus::Corpus;
use crate::error::{MarkovError, Result};

/// Dense identifier of a distinct k-gram within one `Graph`.
///
/// Identifiers are assigned in order of first occurrence in the corpus, so
/// a lower id always means a lower first offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Builds a `Graph` of a fixed order from a corpus.
///
/// The builder keeps no state between builds: every call rescans the whole
/// corpus. Changing the order means building a new graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphBuilder {
	order: usize,
}

/// The k-gram adjacency graph of a corpus.
///
/// # Responsibilities
/// - Map each distinct k-gram to its predecessor and successor multisets
/// - Record which node sits at each corpus offset (seed selection)
/// - Annotate the unbranching tail leading to the terminal node with its
///   distance to the end of the corpus
///
/// # Invariants
/// - `order >= 1` and every node key has `order` characters
/// - `windows.len() == corpus.len() - order + 1`
/// - At most one node has no successors: the k-gram at the final offset,
///   when it occurs nowhere else
/// - End distances are `0, 1, 2, ...` along first-predecessor steps from the
///   terminal node, and stop before the first node with two or more successors
#[derive(Clone, Debug)]
pub struct Graph {
	order: usize,
	nodes: Vec<Node>,
	index: HashMap<String, NodeId>,
	windows: Vec<NodeId>,
	terminal: Option<NodeId>,
	annotated: usize,
}

impl GraphBuilder {
	pub fn new(order: usize) -> Self {
		Self { order }
	}

	pub fn order(&self) -> usize {
		self.order
	}

	/// Scans `corpus` and returns its graph of order `self.order`.
	///
	/// # Errors
	/// - `EmptyCorpus` if the corpus has no characters
	/// - `InvalidOrder` if the order is 0 or not smaller than the corpus length
	pub fn build(&self, corpus: &Corpus) -> Result<Graph> {
		if corpus.is_empty() {
			return Err(MarkovError::EmptyCorpus);
		}
		let k = self.order;
		if k < 1 || k >= corpus.len() {
			return Err(MarkovError::InvalidOrder { order: k, corpus_len: corpus.len() });
		}

		let chars = corpus.chars();
		let window_count = chars.len() - k + 1;

		// Assign ids in order of first occurrence
		let mut ids: HashMap<&[char], NodeId> = HashMap::new();
		let mut nodes: Vec<Node> = Vec::new();
		let mut windows: Vec<NodeId> = Vec::with_capacity(window_count);
		for p in 0..window_count {
			let window = &chars[p..p + k];
			let id = *ids.entry(window).or_insert_with(|| {
				nodes.push(Node::new(window));
				NodeId(nodes.len() - 1)
			});
			windows.push(id);
		}

		// One predecessor and one successor entry per occurrence
		for p in 0..window_count {
			let node = &mut nodes[windows[p].0];
			if p > 0 {
				node.add_predecessor(windows[p - 1]);
			}
			if p + 1 < window_count {
				node.add_successor(windows[p + 1]);
			}
		}

		let index = nodes
			.iter()
			.enumerate()
			.map(|(i, node)| (node.key().to_owned(), NodeId(i)))
			.collect();

		// Lowest id wins, i.e. lowest first offset
		let terminal = nodes.iter().position(|node| node.successors().is_empty()).map(NodeId);
		let annotated = match terminal {
			Some(terminal) => annotate_end_distance(&mut nodes, terminal),
			None => 0,
		};

		tracing::debug!(
			order = k,
			nodes = nodes.len(),
			windows = window_count,
			tail = annotated,
			"built k-gram graph"
		);

		Ok(Graph { order: k, nodes, index, windows, terminal, annotated })
	}
}

/// Walks back from `terminal` through first predecessors, numbering each
/// node until one has more than one successor or no predecessor.
///
/// Returns the number of annotated nodes.
fn annotate_end_distance(nodes: &mut [Node], terminal: NodeId) -> usize {
	let mut current = terminal;
	let mut distance = 0;
	loop {
		let node = &mut nodes[current.0];
		if node.successors().len() > 1 {
			return distance;
		}
		node.set_end_distance(distance);
		distance += 1;
		match node.predecessors().first() {
			Some(prev) => current = *prev,
			None => return distance,
		}
	}
}

impl Graph {
	/// The order `k` (node length in characters).
	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct k-grams.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of corpus offsets a k-gram can start at.
	pub fn window_count(&self) -> usize {
		self.windows.len()
	}

	/// Number of nodes carrying an end distance.
	pub fn annotated_count(&self) -> usize {
		self.annotated
	}

	/// Looks up a node by content.
	pub fn node(&self, key: &str) -> Option<NodeId> {
		self.index.get(key).copied()
	}

	/// Content of a node.
	///
	/// # Panics
	/// If `id` comes from another graph and is out of range.
	pub fn key(&self, id: NodeId) -> &str {
		self.nodes[id.0].key()
	}

	/// Node keys in order of first occurrence.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.nodes.iter().map(Node::key)
	}

	/// The node with no successor, if any.
	pub fn terminal(&self) -> Option<&str> {
		self.terminal.map(|id| self.key(id))
	}

	/// Predecessor multiset of `key`, in corpus order.
	pub fn predecessors(&self, key: &str) -> Option<Vec<&str>> {
		let id = self.node(key)?;
		Some(self.predecessor_ids(id).iter().map(|p| self.key(*p)).collect())
	}

	/// Successor multiset of `key`, in corpus order.
	pub fn successors(&self, key: &str) -> Option<Vec<&str>> {
		let id = self.node(key)?;
		Some(self.successor_ids(id).iter().map(|s| self.key(*s)).collect())
	}

	/// Steps from `key` to the terminal node along its unbranching tail.
	pub fn end_distance(&self, key: &str) -> Option<usize> {
		self.end_distance_of(self.node(key)?)
	}

	pub fn predecessor_ids(&self, id: NodeId) -> &[NodeId] {
		self.nodes[id.0].predecessors()
	}

	pub fn successor_ids(&self, id: NodeId) -> &[NodeId] {
		self.nodes[id.0].successors()
	}

	pub fn end_distance_of(&self, id: NodeId) -> Option<usize> {
		self.nodes[id.0].end_distance()
	}

	/// The node starting at corpus `offset`.
	pub(crate) fn window(&self, offset: usize) -> NodeId {
		self.windows[offset]
	}

	pub(crate) fn node_at(&self, id: NodeId) -> &Node {
		&self.nodes[id.0]
	}
}
