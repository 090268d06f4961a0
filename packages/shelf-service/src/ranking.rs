mod metric;
mod optimizer;
mod scorer;
mod tuning;

pub use metric::ndcg_at_k;
pub use optimizer::{OptimizerRun, anneal, baseline, hill_climb, objective, sorted_order};
pub use scorer::{FeatureRanges, FeatureVector, ScoredItem, score_items};
pub use tuning::{AnnealingGrid, DEFAULT_TUNING_SEED, TuningReport, tune_annealing};

use std::{cmp::Ordering, collections::HashSet, time::Instant};

use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use shelf_config::{RankingAnnealing, RankingHillClimbing};
use shelf_domain::{Catalog, Item, RankStrategy, RankedItem, RankedOutcome, ScoringWeights};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HillClimbingParams {
	pub max_iterations: u32,
	pub patience: u32,
	pub min_gain: f64,
}
impl From<&RankingHillClimbing> for HillClimbingParams {
	fn from(cfg: &RankingHillClimbing) -> Self {
		Self { max_iterations: cfg.max_iterations, patience: cfg.patience, min_gain: cfg.min_gain }
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnnealingParams {
	pub initial_temperature: f64,
	pub cooling_rate: f64,
	pub min_temperature: f64,
	pub max_iterations: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub seed: Option<u64>,
}
impl AnnealingParams {
	pub fn is_valid(&self) -> bool {
		self.initial_temperature.is_finite()
			&& self.min_temperature > 0.0
			&& self.min_temperature < self.initial_temperature
			&& self.cooling_rate > 0.0
			&& self.cooling_rate < 1.0
	}

	/// A generator owned by one annealing call.
	pub fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		}
	}
}
impl From<&RankingAnnealing> for AnnealingParams {
	fn from(cfg: &RankingAnnealing) -> Self {
		Self {
			initial_temperature: cfg.initial_temperature,
			cooling_rate: cfg.cooling_rate,
			min_temperature: cfg.min_temperature,
			max_iterations: cfg.max_iterations,
			seed: cfg.seed,
		}
	}
}

/// Fully resolved inputs of one ranking call.
#[derive(Clone, Debug)]
pub struct RankParams {
	pub strategy: RankStrategy,
	pub weights: ScoringWeights,
	pub target_category: Option<String>,
	pub k: usize,
	pub max_results: Option<usize>,
	pub hill_climbing: HillClimbingParams,
	pub annealing: AnnealingParams,
}

/// Scores and orders `candidate_ids` against `catalog`.
///
/// Ids missing from the catalog are skipped with a warning, as are repeats. When nothing
/// resolves, or `max_results` is zero, no optimizer runs and the outcome is empty with a
/// perfect objective.
pub fn rank(candidate_ids: &[String], catalog: &Catalog, params: &RankParams) -> RankedOutcome {
	let started = Instant::now();

	if params.max_results == Some(0) {
		return RankedOutcome::empty(params.strategy, elapsed_ms(started));
	}

	let items = resolve(candidate_ids, catalog);

	if items.is_empty() {
		return RankedOutcome::empty(params.strategy, elapsed_ms(started));
	}

	let scored = score_items(&items, &params.weights, params.target_category.as_deref());
	let scores: Vec<f64> = scored.iter().map(|entry| entry.score).collect();
	let start = sorted_order(&scores);
	let run = match params.strategy {
		RankStrategy::Baseline => baseline(&scores, params.k),
		RankStrategy::HillClimbing => hill_climb(&scores, start, params.k, &params.hill_climbing),
		RankStrategy::SimulatedAnnealing => {
			let mut rng = params.annealing.rng();

			anneal(&scores, start, params.k, &params.annealing, &mut rng)
		},
	};
	let limit = params.max_results.unwrap_or(run.order.len());
	let ranked: Vec<RankedItem> = run
		.order
		.iter()
		.take(limit)
		.map(|idx| RankedItem { id: scored[*idx].id.clone(), score: scored[*idx].score })
		.collect();
	let elapsed_ms = elapsed_ms(started);

	tracing::info!(
		strategy = %params.strategy,
		candidates = items.len(),
		returned = ranked.len(),
		iterations = run.iterations,
		objective = run.objective,
		elapsed_ms,
		"Ranking completed."
	);

	RankedOutcome::new(ranked, params.strategy, run.iterations, run.objective, elapsed_ms)
}

/// Catalog items for `candidate_ids`, in the given order.
pub fn resolve<'a>(candidate_ids: &[String], catalog: &'a Catalog) -> Vec<&'a Item> {
	let mut seen = HashSet::new();
	let mut items = Vec::with_capacity(candidate_ids.len());

	for id in candidate_ids {
		let Some(item) = catalog.get(id) else {
			tracing::warn!(id = %id, "Candidate not found in catalog.");

			continue;
		};

		if !seen.insert(id.as_str()) {
			tracing::warn!(id = %id, "Duplicate candidate skipped.");

			continue;
		}

		items.push(item);
	}

	items
}

/// Descending order for scores; NaN sorts last.
pub fn cmp_f64_desc(a: f64, b: f64) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}

fn elapsed_ms(started: Instant) -> f64 {
	started.elapsed().as_secs_f64() * 1_000.0
}
