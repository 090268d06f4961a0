use shelf_domain::{Catalog, RankStrategy, ScoringWeights};
use shelf_service::ranking::{
	self, AnnealingParams, HillClimbingParams, RankParams, hill_climb, ndcg_at_k,
};
use shelf_testkit::{demo_catalog, scenario_catalog};

fn params(strategy: RankStrategy) -> RankParams {
	RankParams {
		strategy,
		weights: ScoringWeights::default(),
		target_category: Some("home".to_string()),
		k: 10,
		max_results: None,
		hill_climbing: HillClimbingParams { max_iterations: 500, patience: 50, min_gain: 1e-9 },
		annealing: AnnealingParams {
			initial_temperature: 1.0,
			cooling_rate: 0.995,
			min_temperature: 0.001,
			max_iterations: 500,
			seed: Some(42),
		},
	}
}

fn ids(raw: &[&str]) -> Vec<String> {
	raw.iter().map(|id| id.to_string()).collect()
}

fn demo_ids(catalog: &Catalog) -> Vec<String> {
	catalog.ids().into_iter().map(str::to_string).collect()
}

#[test]
fn baseline_puts_cheaper_better_rated_item_first() {
	let catalog = scenario_catalog().expect("Scenario catalog must build.");
	let outcome = ranking::rank(&ids(&["B", "A"]), &catalog, &params(RankStrategy::Baseline));

	assert_eq!(outcome.ids(), vec!["A", "B"]);
	assert_eq!(outcome.iterations(), 0);
	assert!((outcome.objective_value() - 1.0).abs() < 1e-12);

	let scores = outcome.scores();

	assert!(scores[0] > scores[1]);
}

#[test]
fn zero_max_results_short_circuits() {
	let catalog = scenario_catalog().expect("Scenario catalog must build.");

	for strategy in RankStrategy::ALL {
		let params = RankParams { max_results: Some(0), ..params(strategy) };
		let outcome = ranking::rank(&ids(&["A", "B", "C"]), &catalog, &params);

		assert!(outcome.is_empty());
		assert_eq!(outcome.objective_value(), 1.0);
		assert_eq!(outcome.iterations(), 0);
		assert_eq!(outcome.strategy(), strategy);
	}
}

#[test]
fn unknown_and_repeated_ids_are_skipped() {
	let catalog = scenario_catalog().expect("Scenario catalog must build.");
	let outcome =
		ranking::rank(&ids(&["Z", "C", "A", "C"]), &catalog, &params(RankStrategy::Baseline));

	assert_eq!(outcome.len(), 2);
	assert!(!outcome.ids().contains(&"Z"));
}

#[test]
fn nothing_resolvable_yields_empty_outcome() {
	let catalog = scenario_catalog().expect("Scenario catalog must build.");
	let outcome = ranking::rank(&ids(&["X", "Y"]), &catalog, &params(RankStrategy::HillClimbing));

	assert!(outcome.is_empty());
	assert_eq!(outcome.objective_value(), 1.0);
	assert_eq!(outcome.iterations(), 0);
}

#[test]
fn max_results_truncates_after_ordering() {
	let catalog = demo_catalog().expect("Demo catalog must build.");
	let full = ranking::rank(&demo_ids(&catalog), &catalog, &params(RankStrategy::Baseline));
	let top = ranking::rank(
		&demo_ids(&catalog),
		&catalog,
		&RankParams { max_results: Some(5), ..params(RankStrategy::Baseline) },
	);

	assert_eq!(top.len(), 5);
	assert_eq!(top.ids(), full.ids()[..5].to_vec());
}

#[test]
fn every_strategy_returns_a_permutation_of_the_candidates() {
	let catalog = demo_catalog().expect("Demo catalog must build.");
	let candidates = demo_ids(&catalog);

	for strategy in RankStrategy::ALL {
		let outcome = ranking::rank(&candidates, &catalog, &params(strategy));
		let mut returned: Vec<&str> = outcome.ids();
		let mut expected: Vec<&str> = candidates.iter().map(String::as_str).collect();

		returned.sort_unstable();
		expected.sort_unstable();

		assert_eq!(returned, expected, "{strategy} dropped or duplicated candidates.");
		assert!((0.0..=1.0).contains(&outcome.objective_value()));

		for score in outcome.scores() {
			assert!((0.0..=1.0).contains(&score));
		}
	}
}

#[test]
fn annealing_with_a_fixed_seed_is_reproducible() {
	let catalog = demo_catalog().expect("Demo catalog must build.");
	let candidates = demo_ids(&catalog);
	let first = ranking::rank(&candidates, &catalog, &params(RankStrategy::SimulatedAnnealing));
	let second = ranking::rank(&candidates, &catalog, &params(RankStrategy::SimulatedAnnealing));

	assert_eq!(first.ids(), second.ids());
	assert_eq!(first.iterations(), second.iterations());
	assert_eq!(first.objective_value(), second.objective_value());
}

#[test]
fn hill_climbing_improves_a_shuffled_start_monotonically() {
	let catalog = demo_catalog().expect("Demo catalog must build.");
	let items = ranking::resolve(&demo_ids(&catalog), &catalog);
	let scored = ranking::score_items(&items, &ScoringWeights::default(), Some("computers"));
	let scores: Vec<f64> = scored.iter().map(|entry| entry.score).collect();
	let start: Vec<usize> = (0..scores.len()).rev().collect();
	let run = hill_climb(&scores, start, 10, &params(RankStrategy::HillClimbing).hill_climbing);

	for pair in run.trajectory.windows(2) {
		assert!(pair[1] > pair[0], "Each applied swap must strictly improve: {pair:?}.");
	}

	let ordered: Vec<f64> = run.order.iter().map(|idx| scores[*idx]).collect();

	assert!((ndcg_at_k(&ordered, 10) - run.objective).abs() < 1e-12);
}

#[test]
fn ranked_outcome_serializes_with_field_names() {
	let catalog = scenario_catalog().expect("Scenario catalog must build.");
	let outcome = ranking::rank(&ids(&["A", "B"]), &catalog, &params(RankStrategy::HillClimbing));
	let json = serde_json::to_value(&outcome).expect("Outcome must serialize.");

	assert_eq!(json["strategy"], "hill_climbing");
	assert_eq!(json["ranked"][0]["id"], "A");
	assert!(json["objective_value"].is_number());
	assert!(json["elapsed_ms"].is_number());
}
