use markov_gen_core::{Corpus, GeneratorConfig, GraphBuilder, MarkovModel, MarkovError, MessageLog, SequenceGenerator};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Numbers 0..300 followed by a tail found nowhere else.
///
/// With k = 3 the graph has well over 100 nodes, and the tail after "99 "
/// is a single unbranching chain to the end of the corpus.
fn counting_corpus() -> String {
	let numbers: Vec<String> = (0..300).map(|n| n.to_string()).collect();
	format!("{} END~OF~TEXT", numbers.join(" "))
}

#[test]
fn large_graph_tail_is_annotated() {
	let graph = GraphBuilder::new(3).build(&Corpus::new(&counting_corpus())).unwrap();
	assert!(graph.node_count() > 100);
	assert_eq!(graph.terminal(), Some("EXT"));
	assert_eq!(graph.end_distance("EXT"), Some(0));
	assert_eq!(graph.end_distance("9 E"), Some(10));
	assert_eq!(graph.end_distance("99 "), None);
	assert_eq!(graph.annotated_count(), 11);
}

#[test]
fn gated_walk_never_runs_out() {
	let text = counting_corpus();
	let graph = GraphBuilder::new(3).build(&Corpus::new(&text)).unwrap();
	let generator = SequenceGenerator::default();

	for seed in 0..50 {
		let output = generator.generate(&graph, 200, &mut StdRng::seed_from_u64(seed));
		assert_eq!(output.chars().count(), 200, "seed {seed}: {output}");
		// The tail is 11 characters past "99 ", so it can only close the text
		if let Some(pos) = output.find('~') {
			assert!(pos >= 200 - 11, "seed {seed}: {output}");
		}
	}
}

#[test]
fn model_over_file_corpus() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("counting.txt");
	std::fs::write(&path, format!("{}\n", counting_corpus())).unwrap();

	let log = MessageLog::new();
	let mut model = MarkovModel::new(GeneratorConfig::default());
	model.add_view(Box::new(log.clone()));
	let count = model.initialize(std::fs::File::open(&path).unwrap()).unwrap();
	assert_eq!(count, counting_corpus().chars().count());

	let text = model.process("3").unwrap();
	assert_eq!(text.chars().count(), 100);
	let text = model.process("4 300").unwrap();
	assert_eq!(text.chars().count(), 300);
	assert_eq!(model.graph().unwrap().order(), 4);

	let err = model.process(&format!("{count} 10")).unwrap_err();
	assert!(matches!(err, MarkovError::InvalidOrder { .. }));
	assert_eq!(model.graph().unwrap().order(), 4);

	assert_eq!(log.texts().len(), 2);
}

#[test]
fn injected_rng_reproduces_model_output() {
	let config = GeneratorConfig { random_seed: 99, ..GeneratorConfig::default() };
	let mut seeded = MarkovModel::new(config.clone());
	let mut injected = MarkovModel::with_rng(config, StdRng::seed_from_u64(99));
	seeded.set_corpus(Corpus::new(&counting_corpus()));
	injected.set_corpus(Corpus::new(&counting_corpus()));

	for k in [2, 3, 5] {
		assert_eq!(seeded.make_ngram(k, 80).unwrap(), injected.make_ngram(k, 80).unwrap());
	}
}
