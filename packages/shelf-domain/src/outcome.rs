use serde::Serialize;

use crate::{RankStrategy, RetrievalStrategy};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RetrievalOutcome {
	candidate_ids: Vec<String>,
	strategy: RetrievalStrategy,
	total_scanned: usize,
	elapsed_ms: f64,
}
impl RetrievalOutcome {
	pub fn new(
		candidate_ids: Vec<String>,
		strategy: RetrievalStrategy,
		total_scanned: usize,
		elapsed_ms: f64,
	) -> Self {
		Self { candidate_ids, strategy, total_scanned, elapsed_ms }
	}

	pub fn candidate_ids(&self) -> &[String] {
		&self.candidate_ids
	}

	pub fn strategy(&self) -> RetrievalStrategy {
		self.strategy
	}

	/// Items visited during traversal, counted before truncation.
	pub fn total_scanned(&self) -> usize {
		self.total_scanned
	}

	pub fn elapsed_ms(&self) -> f64 {
		self.elapsed_ms
	}

	pub fn len(&self) -> usize {
		self.candidate_ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.candidate_ids.is_empty()
	}

	pub fn into_candidate_ids(self) -> Vec<String> {
		self.candidate_ids
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedItem {
	pub id: String,
	pub score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedOutcome {
	ranked: Vec<RankedItem>,
	strategy: RankStrategy,
	iterations: u32,
	objective_value: f64,
	elapsed_ms: f64,
}
impl RankedOutcome {
	pub fn new(
		ranked: Vec<RankedItem>,
		strategy: RankStrategy,
		iterations: u32,
		objective_value: f64,
		elapsed_ms: f64,
	) -> Self {
		Self { ranked, strategy, iterations, objective_value, elapsed_ms }
	}

	/// An empty ranking with a vacuously perfect objective.
	pub fn empty(strategy: RankStrategy, elapsed_ms: f64) -> Self {
		Self::new(Vec::new(), strategy, 0, 1.0, elapsed_ms)
	}

	pub fn ranked(&self) -> &[RankedItem] {
		&self.ranked
	}

	pub fn ids(&self) -> Vec<&str> {
		self.ranked.iter().map(|item| item.id.as_str()).collect()
	}

	pub fn scores(&self) -> Vec<f64> {
		self.ranked.iter().map(|item| item.score).collect()
	}

	pub fn strategy(&self) -> RankStrategy {
		self.strategy
	}

	pub fn iterations(&self) -> u32 {
		self.iterations
	}

	pub fn objective_value(&self) -> f64 {
		self.objective_value
	}

	pub fn elapsed_ms(&self) -> f64 {
		self.elapsed_ms
	}

	pub fn len(&self) -> usize {
		self.ranked.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ranked.is_empty()
	}
}
