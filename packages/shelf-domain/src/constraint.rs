use serde::{Deserialize, Serialize};

use crate::{Error, Item, Result, RetrievalStrategy, SortOrder, item::MAX_SELLER_RATING};

/// Transport-facing filter input. Every field is optional; [`ConstraintRequest::validate`] turns
/// it into a [`ConstraintSpec`] or rejects it.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ConstraintRequest {
	pub price_min: Option<f64>,
	pub price_max: Option<f64>,
	pub category: Option<String>,
	pub min_rating: Option<f64>,
	pub store: Option<String>,
	pub sort_by: Option<String>,
	pub strategy: Option<String>,
	pub max_results: Option<usize>,
}
impl ConstraintRequest {
	pub fn validate(&self, default_strategy: RetrievalStrategy) -> Result<ConstraintSpec> {
		for (label, value) in [("price_min", self.price_min), ("price_max", self.price_max)] {
			if let Some(price) = value
				&& (!price.is_finite() || price < 0.0)
			{
				return Err(Error::validation(format!(
					"{label} must be a finite number, zero or greater."
				)));
			}
		}

		if let (Some(min), Some(max)) = (self.price_min, self.price_max)
			&& min > max
		{
			return Err(Error::validation("price_min cannot exceed price_max."));
		}
		if let Some(rating) = self.min_rating
			&& !(0.0..=MAX_SELLER_RATING).contains(&rating)
		{
			return Err(Error::validation("min_rating must be in the range 0.0-5.0."));
		}

		let sort = match self.sort_by.as_deref() {
			Some(raw) => raw.parse()?,
			None => SortOrder::None,
		};
		let strategy = match self.strategy.as_deref() {
			Some(raw) => raw.parse()?,
			None => default_strategy,
		};

		Ok(ConstraintSpec {
			price_min: self.price_min,
			price_max: self.price_max,
			category: normalize_key(self.category.as_deref()),
			min_rating: self.min_rating,
			store: normalize_key(self.store.as_deref()),
			sort,
			strategy,
			max_results: self.max_results,
		})
	}
}

/// A validated filter predicate plus ordering and traversal choices.
///
/// Category and store are stored lower-cased; matching against them is case-insensitive.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConstraintSpec {
	price_min: Option<f64>,
	price_max: Option<f64>,
	category: Option<String>,
	min_rating: Option<f64>,
	store: Option<String>,
	sort: SortOrder,
	strategy: RetrievalStrategy,
	max_results: Option<usize>,
}
impl ConstraintSpec {
	/// No constraints at all: every item matches.
	pub fn unconstrained(strategy: RetrievalStrategy) -> Self {
		Self { strategy, ..Self::default() }
	}

	pub fn price_min(&self) -> Option<f64> {
		self.price_min
	}

	pub fn price_max(&self) -> Option<f64> {
		self.price_max
	}

	pub fn category(&self) -> Option<&str> {
		self.category.as_deref()
	}

	pub fn min_rating(&self) -> Option<f64> {
		self.min_rating
	}

	pub fn store(&self) -> Option<&str> {
		self.store.as_deref()
	}

	pub fn sort(&self) -> SortOrder {
		self.sort
	}

	pub fn strategy(&self) -> RetrievalStrategy {
		self.strategy
	}

	pub fn max_results(&self) -> Option<usize> {
		self.max_results
	}

	/// Same constraints, different traversal.
	pub fn with_strategy(&self, strategy: RetrievalStrategy) -> Self {
		Self { strategy, ..self.clone() }
	}

	pub fn matches_category(&self, category_key: &str) -> bool {
		self.category.as_deref().map(|wanted| wanted == category_key).unwrap_or(true)
	}

	pub fn matches_store(&self, store_key: &str) -> bool {
		self.store.as_deref().map(|wanted| wanted == store_key).unwrap_or(true)
	}

	/// The full per-item predicate. Bounds are inclusive.
	pub fn matches(&self, item: &Item) -> bool {
		if let Some(min) = self.price_min
			&& item.price < min
		{
			return false;
		}
		if let Some(max) = self.price_max
			&& item.price > max
		{
			return false;
		}
		if let Some(rating) = self.min_rating
			&& item.seller_rating < rating
		{
			return false;
		}

		self.matches_category(&item.category_key()) && self.matches_store(&item.store_key())
	}
}

/// Parses a minimum-rating bound written either as `">=4.0"` or as a bare number.
pub fn parse_rating_bound(raw: &str) -> Result<f64> {
	let trimmed = raw.trim();
	let number = trimmed.strip_prefix(">=").unwrap_or(trimmed).trim();

	number
		.parse::<f64>()
		.map_err(|_| Error::validation(format!("min_rating '{raw}' is not a number.")))
}

fn normalize_key(raw: Option<&str>) -> Option<String> {
	raw.map(|value| value.trim().to_lowercase()).filter(|value| !value.is_empty())
}
