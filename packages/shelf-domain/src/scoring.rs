use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const FEATURE_COUNT: usize = 5;

/// Relative weights of the five ranking features.
///
/// Construction rejects negative, non-finite, or all-zero weights, so every instance can be
/// normalized.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "RawWeights", into = "RawWeights")]
pub struct ScoringWeights {
	price: f64,
	rating: f64,
	popularity: f64,
	category_match: f64,
	richness: f64,
}
impl ScoringWeights {
	pub fn new(
		price: f64,
		rating: f64,
		popularity: f64,
		category_match: f64,
		richness: f64,
	) -> Result<Self> {
		let raw = [
			("price", price),
			("rating", rating),
			("popularity", popularity),
			("category_match", category_match),
			("richness", richness),
		];

		for (label, value) in raw {
			if !value.is_finite() || value < 0.0 {
				return Err(Error::validation(format!(
					"weight {label} must be a finite number, zero or greater."
				)));
			}
		}

		if raw.iter().all(|(_, value)| *value == 0.0) {
			return Err(Error::validation("at least one weight must be positive."));
		}

		Ok(Self { price, rating, popularity, category_match, richness })
	}

	/// Weights in feature order (price, rating, popularity, category match, richness),
	/// scaled to sum to 1.
	pub fn normalized(&self) -> [f64; FEATURE_COUNT] {
		let raw = self.as_array();
		// Scale by the largest weight first; summing huge finite weights can overflow.
		let largest = raw.iter().copied().fold(0.0, f64::max);
		let scaled = raw.map(|weight| weight / largest);
		let total: f64 = scaled.iter().sum();

		scaled.map(|weight| weight / total)
	}

	pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
		[self.price, self.rating, self.popularity, self.category_match, self.richness]
	}
}
impl Default for ScoringWeights {
	fn default() -> Self {
		Self { price: 0.25, rating: 0.35, popularity: 0.20, category_match: 0.15, richness: 0.05 }
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
struct RawWeights {
	#[serde(default)]
	price: f64,
	#[serde(default)]
	rating: f64,
	#[serde(default)]
	popularity: f64,
	#[serde(default)]
	category_match: f64,
	#[serde(default)]
	richness: f64,
}
impl TryFrom<RawWeights> for ScoringWeights {
	type Error = Error;

	fn try_from(raw: RawWeights) -> Result<Self> {
		Self::new(raw.price, raw.rating, raw.popularity, raw.category_match, raw.richness)
	}
}
impl From<ScoringWeights> for RawWeights {
	fn from(weights: ScoringWeights) -> Self {
		Self {
			price: weights.price,
			rating: weights.rating,
			popularity: weights.popularity,
			category_match: weights.category_match,
			richness: weights.richness,
		}
	}
}
