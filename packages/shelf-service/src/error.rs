pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Validation failed: {reason}")]
	Validation { reason: String },
	#[error("Unknown strategy '{name}'. Valid options: {}.", valid_options.join(", "))]
	UnknownStrategy { name: String, valid_options: Vec<String> },
	#[error("Catalog error: {message}")]
	Catalog { message: String },
}
impl From<shelf_domain::Error> for Error {
	fn from(err: shelf_domain::Error) -> Self {
		match err {
			shelf_domain::Error::Validation { reason } => Self::Validation { reason },
			shelf_domain::Error::UnknownStrategy { name, valid_options } => {
				Self::UnknownStrategy { name, valid_options }
			},
			other => Self::Catalog { message: other.to_string() },
		}
	}
}
