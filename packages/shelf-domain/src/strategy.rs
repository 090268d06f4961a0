use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How the retrieval engine walks the catalog.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RetrievalStrategy {
	#[default]
	#[serde(rename = "scan", alias = "linear")]
	Scan,
	#[serde(rename = "bfs", alias = "breadth_first")]
	BreadthFirst,
	#[serde(rename = "dfs", alias = "depth_first")]
	DepthFirst,
	#[serde(rename = "priority")]
	Priority,
}
impl RetrievalStrategy {
	pub const ALL: [Self; 4] = [Self::Scan, Self::BreadthFirst, Self::DepthFirst, Self::Priority];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Scan => "scan",
			Self::BreadthFirst => "bfs",
			Self::DepthFirst => "dfs",
			Self::Priority => "priority",
		}
	}
}
impl FromStr for RetrievalStrategy {
	type Err = Error;

	fn from_str(raw: &str) -> Result<Self> {
		match raw.trim().to_ascii_lowercase().as_str() {
			"scan" | "linear" => Ok(Self::Scan),
			"bfs" | "breadth_first" => Ok(Self::BreadthFirst),
			"dfs" | "depth_first" => Ok(Self::DepthFirst),
			"priority" => Ok(Self::Priority),
			_ => Err(unknown_strategy(raw, Self::ALL.iter().map(|strategy| strategy.as_str()))),
		}
	}
}
impl fmt::Display for RetrievalStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// How the re-ranking engine orders scored candidates.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankStrategy {
	#[default]
	Baseline,
	HillClimbing,
	SimulatedAnnealing,
}
impl RankStrategy {
	pub const ALL: [Self; 3] = [Self::Baseline, Self::HillClimbing, Self::SimulatedAnnealing];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Baseline => "baseline",
			Self::HillClimbing => "hill_climbing",
			Self::SimulatedAnnealing => "simulated_annealing",
		}
	}
}
impl FromStr for RankStrategy {
	type Err = Error;

	fn from_str(raw: &str) -> Result<Self> {
		match raw.trim().to_ascii_lowercase().as_str() {
			"baseline" => Ok(Self::Baseline),
			"hill_climbing" => Ok(Self::HillClimbing),
			"simulated_annealing" => Ok(Self::SimulatedAnnealing),
			_ => Err(unknown_strategy(raw, Self::ALL.iter().map(|strategy| strategy.as_str()))),
		}
	}
}
impl fmt::Display for RankStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
	#[default]
	None,
	PriceAsc,
	PriceDesc,
	RatingAsc,
	RatingDesc,
}
impl SortOrder {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::PriceAsc => "price_asc",
			Self::PriceDesc => "price_desc",
			Self::RatingAsc => "rating_asc",
			Self::RatingDesc => "rating_desc",
		}
	}
}
impl FromStr for SortOrder {
	type Err = Error;

	fn from_str(raw: &str) -> Result<Self> {
		match raw.trim().to_ascii_lowercase().as_str() {
			"" | "none" => Ok(Self::None),
			"price_asc" => Ok(Self::PriceAsc),
			"price_desc" => Ok(Self::PriceDesc),
			"rating_asc" => Ok(Self::RatingAsc),
			"rating_desc" => Ok(Self::RatingDesc),
			_ => Err(Error::validation(format!(
				"sort_by must be one of none, price_asc, price_desc, rating_asc, or rating_desc, got '{raw}'."
			))),
		}
	}
}

fn unknown_strategy<'a>(raw: &str, valid: impl Iterator<Item = &'a str>) -> Error {
	Error::UnknownStrategy {
		name: raw.to_string(),
		valid_options: valid.map(str::to_string).collect(),
	}
}
