mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	CatalogSource, Config, Ranking, RankingAnnealing, RankingHillClimbing, RankingWeights,
	Retrieval, Service,
};

use std::{fs, path::Path};

/// Names accepted for `retrieval.strategy`, aliases included.
pub const RETRIEVAL_STRATEGIES: [&str; 7] =
	["scan", "linear", "bfs", "breadth_first", "dfs", "depth_first", "priority"];
/// Names accepted for `ranking.strategy`.
pub const RANK_STRATEGIES: [&str; 3] = ["baseline", "hill_climbing", "simulated_annealing"];

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	if let Some(max) = cfg.catalog.max_items
		&& max == 0
	{
		return Err(Error::Validation {
			message: "catalog.max_items must be greater than zero.".to_string(),
		});
	}

	if !RETRIEVAL_STRATEGIES.contains(&cfg.retrieval.strategy.as_str()) {
		return Err(Error::Validation {
			message: "retrieval.strategy must be one of scan, bfs, dfs, or priority.".to_string(),
		});
	}
	if !RANK_STRATEGIES.contains(&cfg.ranking.strategy.as_str()) {
		return Err(Error::Validation {
			message:
				"ranking.strategy must be one of baseline, hill_climbing, or simulated_annealing."
					.to_string(),
		});
	}
	if cfg.ranking.k == 0 {
		return Err(Error::Validation {
			message: "ranking.k must be greater than zero.".to_string(),
		});
	}

	validate_weights(&cfg.ranking.weights)?;

	let hill = &cfg.ranking.hill_climbing;

	if hill.max_iterations == 0 {
		return Err(Error::Validation {
			message: "ranking.hill_climbing.max_iterations must be greater than zero.".to_string(),
		});
	}
	if hill.patience == 0 {
		return Err(Error::Validation {
			message: "ranking.hill_climbing.patience must be greater than zero.".to_string(),
		});
	}
	if !hill.min_gain.is_finite() || hill.min_gain < 0.0 {
		return Err(Error::Validation {
			message: "ranking.hill_climbing.min_gain must be a finite number, zero or greater."
				.to_string(),
		});
	}

	let annealing = &cfg.ranking.annealing;

	for (label, value) in [
		("ranking.annealing.initial_temperature", annealing.initial_temperature),
		("ranking.annealing.min_temperature", annealing.min_temperature),
	] {
		if !value.is_finite() || value <= 0.0 {
			return Err(Error::Validation {
				message: format!("{label} must be a finite number greater than zero."),
			});
		}
	}

	if annealing.min_temperature >= annealing.initial_temperature {
		return Err(Error::Validation {
			message: "ranking.annealing.min_temperature must be less than ranking.annealing.initial_temperature."
				.to_string(),
		});
	}
	if !(annealing.cooling_rate > 0.0 && annealing.cooling_rate < 1.0) {
		return Err(Error::Validation {
			message: "ranking.annealing.cooling_rate must be in the open range 0.0-1.0."
				.to_string(),
		});
	}
	if annealing.max_iterations == 0 {
		return Err(Error::Validation {
			message: "ranking.annealing.max_iterations must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn validate_weights(weights: &RankingWeights) -> Result<()> {
	let entries = [
		("price", weights.price),
		("rating", weights.rating),
		("popularity", weights.popularity),
		("category_match", weights.category_match),
		("richness", weights.richness),
	];

	for (label, value) in entries {
		if !value.is_finite() {
			return Err(Error::Validation {
				message: format!("ranking.weights.{label} must be a finite number."),
			});
		}
		if value < 0.0 {
			return Err(Error::Validation {
				message: format!("ranking.weights.{label} must be zero or greater."),
			});
		}
	}

	if entries.iter().all(|(_, value)| *value == 0.0) {
		return Err(Error::Validation {
			message: "ranking.weights must include at least one positive weight.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.log_level = cfg.service.log_level.trim().to_string();
	cfg.retrieval.strategy = cfg.retrieval.strategy.trim().to_ascii_lowercase();
	cfg.ranking.strategy = cfg.ranking.strategy.trim().to_ascii_lowercase();

	if cfg
		.catalog
		.path
		.as_deref()
		.map(|path| path.as_os_str().to_string_lossy().trim().is_empty())
		.unwrap_or(false)
	{
		cfg.catalog.path = None;
	}
}
