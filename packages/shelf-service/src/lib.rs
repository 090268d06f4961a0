pub mod ranking;
pub mod retrieval;

mod error;

pub use error::{Error, Result};

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use shelf_config::Config;
use shelf_domain::{
	Catalog, CategorySummary, ConstraintRequest, RankStrategy, RankedOutcome, RetrievalOutcome,
	RetrievalStrategy, ScoringWeights,
};

use crate::{
	ranking::{
		AnnealingGrid, AnnealingParams, DEFAULT_TUNING_SEED, HillClimbingParams, RankParams,
		TuningReport,
	},
	retrieval::SearchTree,
};

/// One published catalog and the tree built over it.
#[derive(Debug, Default)]
pub struct Snapshot {
	pub catalog: Catalog,
	pub tree: SearchTree,
}
impl Snapshot {
	pub fn new(catalog: Catalog) -> Self {
		let tree = SearchTree::build(&catalog);

		Self { catalog, tree }
	}
}

/// Per-call ranking overrides. Unset fields fall back to the `[ranking]` config section.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RankRequest {
	pub candidate_ids: Vec<String>,
	pub strategy: Option<String>,
	pub weights: Option<ScoringWeights>,
	pub target_category: Option<String>,
	pub k: Option<usize>,
	pub seed: Option<u64>,
	pub max_results: Option<usize>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchAndRankResponse {
	pub retrieval: RetrievalOutcome,
	pub ranking: RankedOutcome,
}

#[derive(Clone, Debug, Serialize)]
pub struct TuneResponse {
	pub retrieval: RetrievalOutcome,
	pub report: TuningReport,
}

pub struct ShelfService {
	pub cfg: Config,
	snapshot: RwLock<Arc<Snapshot>>,
}
impl ShelfService {
	pub fn new(cfg: Config, catalog: Catalog) -> Self {
		Self { cfg, snapshot: RwLock::new(Arc::new(Snapshot::new(catalog))) }
	}

	/// Builds the tree for `catalog` and swaps it in. Calls already holding the previous
	/// snapshot finish against it.
	pub fn publish(&self, catalog: Catalog) {
		let next = Arc::new(Snapshot::new(catalog));
		let items = next.catalog.len();
		let categories = next.tree.category_count();
		let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);

		*guard = next;

		tracing::info!(items, categories, "Catalog snapshot published.");
	}

	pub fn snapshot(&self) -> Arc<Snapshot> {
		self.snapshot.read().unwrap_or_else(PoisonError::into_inner).clone()
	}

	pub fn retrieve(&self, req: &ConstraintRequest) -> Result<RetrievalOutcome> {
		let snapshot = self.snapshot();

		self.retrieve_in(&snapshot, req)
	}

	pub fn rank(&self, req: &RankRequest) -> Result<RankedOutcome> {
		let snapshot = self.snapshot();
		let params = self.rank_params(req)?;

		Ok(ranking::rank(&req.candidate_ids, &snapshot.catalog, &params))
	}

	/// Retrieval followed by ranking of its candidates, both against the same snapshot.
	/// `rank.candidate_ids` is ignored.
	pub fn search_and_rank(
		&self,
		constraints: &ConstraintRequest,
		rank: &RankRequest,
	) -> Result<SearchAndRankResponse> {
		let snapshot = self.snapshot();
		let params = self.rank_params(rank)?;
		let retrieval = self.retrieve_in(&snapshot, constraints)?;
		let ranking = ranking::rank(retrieval.candidate_ids(), &snapshot.catalog, &params);

		Ok(SearchAndRankResponse { retrieval, ranking })
	}

	pub fn categories(&self) -> Vec<CategorySummary> {
		self.snapshot().catalog.categories()
	}

	/// Grid search over annealing schedules for the candidates of `constraints`, starting from
	/// retrieval order. `rank.seed` fixes the generator; without it a constant seed is used so
	/// schedules are compared on equal footing.
	pub fn tune_annealing(
		&self,
		constraints: &ConstraintRequest,
		rank: &RankRequest,
		grid: &AnnealingGrid,
	) -> Result<TuneResponse> {
		let snapshot = self.snapshot();
		let params = self.rank_params(rank)?;
		let retrieval = self.retrieve_in(&snapshot, constraints)?;
		let items = ranking::resolve(retrieval.candidate_ids(), &snapshot.catalog);
		let scored =
			ranking::score_items(&items, &params.weights, params.target_category.as_deref());
		let scores: Vec<f64> = scored.iter().map(|entry| entry.score).collect();
		let start: Vec<usize> = (0..scores.len()).collect();
		let report = ranking::tune_annealing(
			&scores,
			&start,
			params.k,
			grid,
			params.annealing.max_iterations,
			rank.seed.or(params.annealing.seed).unwrap_or(DEFAULT_TUNING_SEED),
		);

		Ok(TuneResponse { retrieval, report })
	}

	fn retrieve_in(
		&self,
		snapshot: &Snapshot,
		req: &ConstraintRequest,
	) -> Result<RetrievalOutcome> {
		let default_strategy: RetrievalStrategy = self.cfg.retrieval.strategy.parse()?;
		let mut req = req.clone();

		if req.max_results.is_none() {
			req.max_results = self.cfg.retrieval.max_results;
		}

		let spec = req.validate(default_strategy)?;

		Ok(retrieval::retrieve(&snapshot.catalog, &snapshot.tree, &spec))
	}

	fn rank_params(&self, req: &RankRequest) -> Result<RankParams> {
		let cfg = &self.cfg.ranking;
		let strategy: RankStrategy =
			req.strategy.as_deref().unwrap_or(cfg.strategy.as_str()).parse()?;
		let weights = match req.weights {
			Some(weights) => weights,
			None => ScoringWeights::new(
				cfg.weights.price,
				cfg.weights.rating,
				cfg.weights.popularity,
				cfg.weights.category_match,
				cfg.weights.richness,
			)?,
		};
		let k = req.k.unwrap_or(cfg.k);

		if k == 0 {
			return Err(Error::Validation { reason: "k must be greater than zero.".to_string() });
		}

		let mut annealing = AnnealingParams::from(&cfg.annealing);

		if req.seed.is_some() {
			annealing.seed = req.seed;
		}

		Ok(RankParams {
			strategy,
			weights,
			target_category: req.target_category.clone(),
			k,
			max_results: req.max_results.or(cfg.max_results),
			hill_climbing: HillClimbingParams::from(&cfg.hill_climbing),
			annealing,
		})
	}
}
