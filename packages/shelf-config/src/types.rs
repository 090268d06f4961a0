use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub catalog: CatalogSource,
	#[serde(default)]
	pub retrieval: Retrieval,
	#[serde(default)]
	pub ranking: Ranking,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSource {
	/// Optional. A `.json` array or `.jsonl` file of items; the CLI flag takes precedence.
	pub path: Option<PathBuf>,
	/// Optional. Stop loading after this many items.
	pub max_items: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Retrieval {
	pub strategy: String,
	pub max_results: Option<usize>,
}
impl Default for Retrieval {
	fn default() -> Self {
		Self { strategy: "scan".to_string(), max_results: None }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Ranking {
	pub strategy: String,
	pub k: usize,
	pub max_results: Option<usize>,
	pub weights: RankingWeights,
	pub hill_climbing: RankingHillClimbing,
	pub annealing: RankingAnnealing,
}
impl Default for Ranking {
	fn default() -> Self {
		Self {
			strategy: "baseline".to_string(),
			k: 10,
			max_results: None,
			weights: RankingWeights::default(),
			hill_climbing: RankingHillClimbing::default(),
			annealing: RankingAnnealing::default(),
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RankingWeights {
	pub price: f64,
	pub rating: f64,
	pub popularity: f64,
	pub category_match: f64,
	pub richness: f64,
}
impl Default for RankingWeights {
	fn default() -> Self {
		Self { price: 0.25, rating: 0.35, popularity: 0.20, category_match: 0.15, richness: 0.05 }
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RankingHillClimbing {
	pub max_iterations: u32,
	/// Consecutive rounds with a gain below `min_gain` before the search gives up.
	pub patience: u32,
	pub min_gain: f64,
}
impl Default for RankingHillClimbing {
	fn default() -> Self {
		Self { max_iterations: 500, patience: 50, min_gain: 1e-9 }
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RankingAnnealing {
	pub initial_temperature: f64,
	pub cooling_rate: f64,
	pub min_temperature: f64,
	pub max_iterations: u32,
	pub seed: Option<u64>,
}
impl Default for RankingAnnealing {
	fn default() -> Self {
		Self {
			initial_temperature: 1.0,
			cooling_rate: 0.995,
			min_temperature: 0.001,
			max_iterations: 2_000,
			seed: None,
		}
	}
}
