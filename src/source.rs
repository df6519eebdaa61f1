//! Loading the text to analyze.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// File read when no source is given on the command line.
pub const DEFAULT_SOURCE: &str = "loremipsum.txt";

/// Reads the whole file at `path` as UTF-8 text.
pub fn load_text(path: impl AsRef<Path>) -> Result<String> {
	let path = path.as_ref();
	let bytes = fs::read(path).map_err(|source| Error::SourceUnavailable {
		path: path.to_path_buf(),
		source,
	})?;
	debug!(path = %path.display(), bytes = bytes.len(), "source loaded");

	String::from_utf8(bytes).map_err(|source| Error::InvalidEncoding {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn it_should_load_a_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "Lorem ipsum, dolor.").unwrap();

		assert_eq!(load_text(file.path()).unwrap(), "Lorem ipsum, dolor.");
	}

	#[test]
	fn it_should_report_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("missing.txt");

		match load_text(&missing) {
			Err(Error::SourceUnavailable { path, source }) => {
				assert_eq!(path, missing);
				assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
			}
			other => panic!("expected SourceUnavailable, got {other:?}"),
		}
	}

	#[test]
	fn it_should_reject_invalid_utf8() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(&[b'o', b'k', b' ', 0xff, 0xfe]).unwrap();

		assert!(matches!(load_text(file.path()), Err(Error::InvalidEncoding { .. })));
	}
}
