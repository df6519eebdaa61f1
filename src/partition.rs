//! Splitting a text blob into contiguous partitions that never cut a word.

/// Byte every inner partition boundary lands on.
pub const SEPARATOR: u8 = b' ';

/// Splits `text` into exactly `n` contiguous partitions (`0` counts as `1`).
///
/// Each boundary starts at the previous one plus `text.len() / n` and moves
/// forward to the next [`SEPARATOR`] or the end of the text. The last
/// partition always runs to the end, so the partitions concatenate back to
/// `text`. Trailing partitions are empty when the text runs out of separators.
pub fn partition(text: &str, n: usize) -> Vec<&str> {
	let n = n.max(1);
	let stride = text.len() / n;
	let mut partitions = Vec::with_capacity(n);
	let mut first = 0;
	let mut last = find_separator(text, stride);

	for i in 0..n {
		if i + 1 == n {
			last = text.len();
		}

		partitions.push(&text[first..last]);
		first = last;
		last = find_separator(text, last + stride);
	}

	assert_eq!(
		partitions.iter().map(|p| p.len()).sum::<usize>(),
		text.len(),
		"partitions must cover the text exactly",
	);
	partitions
}

/// Position of the first separator at or after `from`, or `text.len()`.
fn find_separator(text: &str, from: usize) -> usize {
	let bytes = text.as_bytes();

	if from >= bytes.len() {
		return bytes.len();
	}

	bytes[from..]
		.iter()
		.position(|&b| b == SEPARATOR)
		.map_or(bytes.len(), |offset| from + offset)
}
