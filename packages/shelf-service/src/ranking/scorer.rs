use serde::Serialize;

use shelf_domain::{Item, ScoringWeights, item::MAX_SELLER_RATING};

const DESCRIPTION_SHARE: f64 = 0.6;
const FEATURE_SHARE: f64 = 0.4;
const NEUTRAL: f64 = 0.5;

/// Min/max statistics of one candidate set; features are normalized against these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureRanges {
	pub price_min: f64,
	pub price_max: f64,
	pub popularity_min: f64,
	pub popularity_max: f64,
	pub max_description_len: usize,
	pub max_feature_count: usize,
}
impl FeatureRanges {
	pub fn from_items(items: &[&Item]) -> Self {
		let mut ranges = Self {
			price_min: f64::INFINITY,
			price_max: f64::NEG_INFINITY,
			popularity_min: f64::INFINITY,
			popularity_max: f64::NEG_INFINITY,
			max_description_len: 0,
			max_feature_count: 0,
		};

		for item in items {
			let popularity = log_popularity(item);

			ranges.price_min = ranges.price_min.min(item.price);
			ranges.price_max = ranges.price_max.max(item.price);
			ranges.popularity_min = ranges.popularity_min.min(popularity);
			ranges.popularity_max = ranges.popularity_max.max(popularity);
			ranges.max_description_len = ranges.max_description_len.max(item.description_len());
			ranges.max_feature_count = ranges.max_feature_count.max(item.feature_count());
		}

		ranges
	}
}

/// Per-item feature breakdown, each in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FeatureVector {
	pub price: f64,
	pub rating: f64,
	pub popularity: f64,
	pub category_match: f64,
	pub richness: f64,
}
impl FeatureVector {
	pub fn extract(item: &Item, ranges: &FeatureRanges, target_category: Option<&str>) -> Self {
		let price = if ranges.price_max > ranges.price_min {
			1.0 - (item.price - ranges.price_min) / (ranges.price_max - ranges.price_min)
		} else {
			1.0
		};
		let popularity = if ranges.popularity_max > ranges.popularity_min {
			(log_popularity(item) - ranges.popularity_min)
				/ (ranges.popularity_max - ranges.popularity_min)
		} else {
			NEUTRAL
		};
		let category_match = match target_category.map(str::trim).filter(|t| !t.is_empty()) {
			Some(target) if item.category_key() == target.to_lowercase() => 1.0,
			Some(_) => 0.0,
			None => NEUTRAL,
		};
		let description = share(item.description_len(), ranges.max_description_len);
		let features = share(item.feature_count(), ranges.max_feature_count);

		Self {
			price: price.clamp(0.0, 1.0),
			rating: (item.seller_rating / MAX_SELLER_RATING).clamp(0.0, 1.0),
			popularity: popularity.clamp(0.0, 1.0),
			category_match,
			richness: DESCRIPTION_SHARE * description + FEATURE_SHARE * features,
		}
	}

	pub fn as_array(&self) -> [f64; 5] {
		[self.price, self.rating, self.popularity, self.category_match, self.richness]
	}

	/// Weighted sum with normalized weights, clamped to [0, 1].
	pub fn score(&self, weights: &ScoringWeights) -> f64 {
		let total: f64 = self
			.as_array()
			.iter()
			.zip(weights.normalized())
			.map(|(feature, weight)| feature * weight)
			.sum();

		total.clamp(0.0, 1.0)
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoredItem {
	pub id: String,
	pub score: f64,
	pub features: FeatureVector,
}

/// Scores `items` against ranges computed from the same set. Output order matches input order.
pub fn score_items(
	items: &[&Item],
	weights: &ScoringWeights,
	target_category: Option<&str>,
) -> Vec<ScoredItem> {
	let ranges = FeatureRanges::from_items(items);

	items
		.iter()
		.map(|item| {
			let features = FeatureVector::extract(item, &ranges, target_category);

			ScoredItem { id: item.id.clone(), score: features.score(weights), features }
		})
		.collect()
}

fn log_popularity(item: &Item) -> f64 {
	(item.rating_count.unwrap_or(0) as f64).ln_1p()
}

fn share(value: usize, max: usize) -> f64 {
	if max == 0 { 0.0 } else { value as f64 / max as f64 }
}
