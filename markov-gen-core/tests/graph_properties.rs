use std::collections::HashMap;

use markov_gen_core::{Corpus, Graph, GraphBuilder, SequenceGenerator};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A corpus over a small alphabet (so k-grams repeat) and a valid order.
fn corpus_and_order() -> impl Strategy<Value = (String, usize)> {
	"[ab c]{2,60}".prop_flat_map(|text| {
		let len = text.chars().count();
		(Just(text), 1..len)
	})
}

fn build(text: &str, k: usize) -> Graph {
	GraphBuilder::new(k).build(&Corpus::new(text)).unwrap()
}

fn windows(text: &str, len: usize) -> Vec<String> {
	let chars: Vec<char> = text.chars().collect();
	chars.windows(len).map(|w| w.iter().collect()).collect()
}

proptest! {
	#[test]
	fn nodes_are_corpus_substrings((text, k) in corpus_and_order()) {
		let graph = build(&text, k);
		let kgrams = windows(&text, k);
		for key in graph.keys() {
			prop_assert_eq!(key.chars().count(), k);
			prop_assert!(kgrams.iter().any(|w| w == key));
		}
		prop_assert_eq!(graph.window_count(), kgrams.len());
	}

	#[test]
	fn successor_multiplicity_matches_corpus((text, k) in corpus_and_order()) {
		let graph = build(&text, k);
		let mut expected: HashMap<(String, String), usize> = HashMap::new();
		for pair in windows(&text, k + 1) {
			let chars: Vec<char> = pair.chars().collect();
			let from: String = chars[..k].iter().collect();
			let to: String = chars[1..].iter().collect();
			*expected.entry((from, to)).or_insert(0) += 1;
		}

		let mut actual: HashMap<(String, String), usize> = HashMap::new();
		for key in graph.keys() {
			for next in graph.successors(key).unwrap() {
				*actual.entry((key.to_owned(), next.to_owned())).or_insert(0) += 1;
			}
		}
		prop_assert_eq!(actual, expected);
	}

	#[test]
	fn predecessors_mirror_successors((text, k) in corpus_and_order()) {
		let graph = build(&text, k);
		let total_pred: usize = graph.keys().map(|key| graph.predecessors(key).unwrap().len()).sum();
		let total_succ: usize = graph.keys().map(|key| graph.successors(key).unwrap().len()).sum();
		prop_assert_eq!(total_pred, graph.window_count() - 1);
		prop_assert_eq!(total_succ, graph.window_count() - 1);
	}

	#[test]
	fn end_distance_follows_first_predecessors((text, k) in corpus_and_order()) {
		let graph = build(&text, k);

		// Replay the walk independently
		let mut chain: Vec<&str> = Vec::new();
		if let Some(terminal) = graph.terminal() {
			let mut current = terminal;
			loop {
				if graph.successors(current).unwrap().len() > 1 {
					break;
				}
				chain.push(current);
				match graph.predecessors(current).unwrap().first() {
					Some(prev) => current = *prev,
					None => break,
				}
			}
		}

		for (step, key) in chain.iter().enumerate() {
			prop_assert_eq!(graph.end_distance(key), Some(step));
		}
		for key in graph.keys() {
			if !chain.contains(&key) {
				prop_assert_eq!(graph.end_distance(key), None);
			}
			if graph.end_distance(key).is_some() {
				prop_assert!(graph.successors(key).unwrap().len() <= 1);
			}
		}
		prop_assert_eq!(graph.annotated_count(), chain.len());
	}

	#[test]
	fn output_is_bounded_and_stops_only_at_dead_ends(
		(text, k) in corpus_and_order(),
		max_len in 0usize..80,
		seed in any::<u64>(),
	) {
		let graph = build(&text, k);
		let output = SequenceGenerator::default().generate(&graph, max_len, &mut StdRng::seed_from_u64(seed));
		let produced = output.chars().count();
		prop_assert!(produced <= max_len);

		if produced < max_len && produced >= k {
			let chars: Vec<char> = output.chars().collect();
			let last: String = chars[produced - k..].iter().collect();
			prop_assert_eq!(graph.successors(&last).unwrap().len(), 0);
		}
	}

	#[test]
	fn output_uses_corpus_transitions(
		(text, k) in corpus_and_order(),
		seed in any::<u64>(),
	) {
		let graph = build(&text, k);
		let output = SequenceGenerator::default().generate(&graph, 60, &mut StdRng::seed_from_u64(seed));
		let transitions = windows(&text, k + 1);
		for window in windows(&output, k + 1) {
			prop_assert!(transitions.contains(&window), "{} not in corpus", window);
		}
	}

	#[test]
	fn generation_is_reproducible(
		(text, k) in corpus_and_order(),
		seed in any::<u64>(),
	) {
		let graph = build(&text, k);
		let generator = SequenceGenerator::new(0);
		let a = generator.generate(&graph, 50, &mut StdRng::seed_from_u64(seed));
		let b = generator.generate(&graph, 50, &mut StdRng::seed_from_u64(seed));
		prop_assert_eq!(a, b);
	}
}
