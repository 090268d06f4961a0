pub mod catalog;
pub mod constraint;
pub mod item;
pub mod loader;
pub mod outcome;
pub mod scoring;
pub mod strategy;

mod error;

pub use catalog::{Catalog, CategorySummary};
pub use constraint::{ConstraintRequest, ConstraintSpec, parse_rating_bound};
pub use error::{Error, Result};
pub use item::Item;
pub use loader::load_catalog;
pub use outcome::{RankedItem, RankedOutcome, RetrievalOutcome};
pub use scoring::ScoringWeights;
pub use strategy::{RankStrategy, RetrievalStrategy, SortOrder};
