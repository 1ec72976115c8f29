use std::io::Read;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::generator::SequenceGenerator;
use super::graph::{Graph, GraphBuilder};
use crate::command::Command;
use crate::config::GeneratorConfig;
use crate::corpus::Corpus;
use crate::error::{MarkovError, Result};
use crate::view::ModelView;

/// Brute-force order-K Markov text model.
///
/// Owns the corpus, the graph of the last requested order and the random
/// source. A request with a new order rescans the whole corpus and replaces
/// the graph; nothing is cached per order.
///
/// # Responsibilities
/// - Load the corpus and report how long it took
/// - Rebuild the graph when the order changes, keeping the previous graph
///   when the rebuild fails
/// - Parse "K N" commands, time the generation and notify views
///
/// The model is single-threaded. Hosts sharing it must serialize calls.
pub struct MarkovModel<R = StdRng> {
	config: GeneratorConfig,
	corpus: Option<Corpus>,
	graph: Option<Graph>,
	generator: SequenceGenerator,
	rng: R,
	views: Vec<Box<dyn ModelView + Send>>,
}

impl MarkovModel<StdRng> {
	/// Creates an empty model whose random source is seeded from
	/// `config.random_seed`.
	pub fn new(config: GeneratorConfig) -> Self {
		let rng = StdRng::seed_from_u64(config.random_seed);
		Self::with_rng(config, rng)
	}
}

impl Default for MarkovModel<StdRng> {
	fn default() -> Self {
		Self::new(GeneratorConfig::default())
	}
}

impl<R: Rng> MarkovModel<R> {
	/// Creates an empty model drawing from `rng`.
	pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
		Self {
			generator: SequenceGenerator::new(config.branch_gate),
			config,
			corpus: None,
			graph: None,
			rng,
			views: Vec::new(),
		}
	}

	/// Registers a view notified of every message and generated text.
	pub fn add_view(&mut self, view: Box<dyn ModelView + Send>) {
		self.views.push(view);
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	pub fn corpus(&self) -> Option<&Corpus> {
		self.corpus.as_ref()
	}

	/// The graph of the last successful build.
	pub fn graph(&self) -> Option<&Graph> {
		self.graph.as_ref()
	}

	/// Reads the whole corpus from `reader`.
	///
	/// Emits `#read: {count} chars in: {secs} secs` and returns the count.
	///
	/// # Errors
	/// I/O errors. The current corpus and graph are kept on failure.
	pub fn initialize<T: Read>(&mut self, reader: T) -> Result<usize> {
		let start = Instant::now();
		let corpus = Corpus::from_reader(reader)?;
		let count = corpus.len();
		self.set_corpus(corpus);
		let secs = start.elapsed().as_secs_f64();
		self.message(&format!("#read: {count} chars in: {secs:.3} secs"));
		Ok(count)
	}

	/// Replaces the corpus. Any graph built from the old one is dropped.
	pub fn set_corpus(&mut self, corpus: Corpus) {
		self.corpus = Some(corpus);
		self.graph = None;
	}

	/// Generates at most `max_len` characters with an order-`order` process.
	///
	/// # Errors
	/// - `EmptyCorpus` if no corpus is loaded or it is empty
	/// - `InvalidOrder` if `order` is 0 or not smaller than the corpus
	///
	/// The previously built graph stays in place on error.
	pub fn make_ngram(&mut self, order: usize, max_len: usize) -> Result<String> {
		let corpus = self.corpus.as_ref().ok_or(MarkovError::EmptyCorpus)?;

		if self.graph.as_ref().is_none_or(|graph| graph.order() != order) {
			tracing::debug!(order, previous = self.graph.as_ref().map(Graph::order), "rebuilding graph");
			let graph = GraphBuilder::new(order).build(corpus)?;
			self.graph = Some(graph);
		}

		match &self.graph {
			Some(graph) => Ok(self.generator.generate(graph, max_len, &mut self.rng)),
			None => Err(MarkovError::EmptyCorpus),
		}
	}

	/// Runs a "K N" command (N defaults to `config.default_length`).
	///
	/// On success views receive `time to generate: {secs} | chars generated:{len}`
	/// followed by the text, which is also returned. On failure they receive
	/// the error message before it is returned.
	pub fn process(&mut self, command: &str) -> Result<String> {
		match self.run(command) {
			Ok(text) => Ok(text),
			Err(e) => {
				self.message(&e.to_string());
				Err(e)
			}
		}
	}

	fn run(&mut self, command: &str) -> Result<String> {
		let command = Command::parse(command, self.config.default_length)?;

		let start = Instant::now();
		let text = self.make_ngram(command.order, command.length)?;
		let secs = start.elapsed().as_secs_f64();

		self.message(&format!(
			"time to generate: {secs:.3} | chars generated:{}",
			text.chars().count()
		));
		self.notify(&text);
		Ok(text)
	}

	fn message(&mut self, message: &str) {
		tracing::info!("{message}");
		for view in &mut self.views {
			view.show_message(message);
		}
	}

	fn notify(&mut self, text: &str) {
		for view in &mut self.views {
			view.show_text(text);
		}
	}
}
