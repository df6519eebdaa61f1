use std::path::PathBuf;

use thiserror::Error;

/// Failures of the text acquisition layer. Counting itself never fails.
#[derive(Error, Debug)]
pub enum Error {
	#[error("source unavailable: {path}: {source}")]
	SourceUnavailable {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("source is not valid UTF-8: {path}: {source}")]
	InvalidEncoding {
		path: PathBuf,
		#[source]
		source: std::string::FromUtf8Error,
	},
}

pub type Result<T> = std::result::Result<T, Error>;
