use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Cannot read shelf config {path:?}.")]
	ReadConfig { path: PathBuf, source: io::Error },
	#[error("Shelf config {path:?} is not valid TOML for this schema.")]
	ParseConfig { path: PathBuf, source: toml::de::Error },
	#[error("Invalid shelf config: {message}")]
	Validation { message: String },
}
