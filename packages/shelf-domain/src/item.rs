use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const MAX_SELLER_RATING: f64 = 5.0;

/// A single listing. Immutable once it is placed in a [`crate::Catalog`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Item {
	pub id: String,
	pub title: String,
	pub price: f64,
	pub category: String,
	pub store: String,
	pub seller_rating: f64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub rating_count: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tags: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub features: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_url: Option<String>,
}
impl Item {
	pub fn new(
		id: impl Into<String>,
		title: impl Into<String>,
		price: f64,
		category: impl Into<String>,
		store: impl Into<String>,
		seller_rating: f64,
	) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			price,
			category: category.into(),
			store: store.into(),
			seller_rating,
			rating_count: None,
			description: None,
			tags: None,
			features: None,
			image_url: None,
		}
	}

	pub fn with_rating_count(mut self, count: u64) -> Self {
		self.rating_count = Some(count);

		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());

		self
	}

	pub fn with_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags = Some(tags.into_iter().map(Into::into).collect());

		self
	}

	pub fn with_features<I, S>(mut self, features: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.features = Some(features.into_iter().map(Into::into).collect());

		self
	}

	pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
		self.image_url = Some(url.into());

		self
	}

	pub fn validate(&self) -> Result<()> {
		if self.id.trim().is_empty() {
			return Err(Error::validation("item id must be non-empty."));
		}
		if !self.price.is_finite() || self.price < 0.0 {
			return Err(Error::validation(format!(
				"item '{}' price must be a finite number, zero or greater.",
				self.id
			)));
		}
		if !(0.0..=MAX_SELLER_RATING).contains(&self.seller_rating) {
			return Err(Error::validation(format!(
				"item '{}' seller_rating must be in the range 0.0-5.0.",
				self.id
			)));
		}
		if self.category.trim().is_empty() {
			return Err(Error::validation(format!("item '{}' category must be non-empty.", self.id)));
		}
		if self.store.trim().is_empty() {
			return Err(Error::validation(format!("item '{}' store must be non-empty.", self.id)));
		}

		Ok(())
	}

	pub fn category_key(&self) -> String {
		self.category.trim().to_lowercase()
	}

	pub fn store_key(&self) -> String {
		self.store.trim().to_lowercase()
	}

	pub fn description_len(&self) -> usize {
		self.description.as_deref().map(|text| text.chars().count()).unwrap_or(0)
	}

	pub fn feature_count(&self) -> usize {
		self.features.as_ref().map(Vec::len).unwrap_or(0)
	}
}
