//! The map step: counting normalized words within a single partition.

use crate::FrequencyTable;

/// Characters removed from the text before it is split into words.
pub const STRIPPED: [char; 2] = ['.', ','];

/// Lower-cases `text` and removes every [`STRIPPED`] character.
pub fn normalize(text: &str) -> String {
	text.to_lowercase().replace(&STRIPPED[..], "")
}

/// Counts every normalized word of `text` into a fresh table.
pub fn count(text: &str) -> FrequencyTable {
	let mut counts = FrequencyTable::new();

	for word in normalize(text).split_whitespace() {
		*counts.entry(word.to_owned()).or_default() += 1;
	}

	counts
}
