//! The reduce step: summing partial frequency tables key by key.

use crate::FrequencyTable;

/// Adds every count of `partial` into `into`.
pub fn merge(into: &mut FrequencyTable, partial: FrequencyTable) {
	for (word, count) in partial {
		*into.entry(word).or_default() += count;
	}
}

/// Folds all `partials` into one table.
///
/// The first table is reused as the accumulator. Merge order never changes
/// the result.
pub fn reduce<I>(partials: I) -> FrequencyTable
where
	I: IntoIterator<Item = FrequencyTable>,
{
	partials
		.into_iter()
		.reduce(|mut total, partial| {
			merge(&mut total, partial);
			total
		})
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn table(entries: &[(&str, usize)]) -> FrequencyTable {
		entries.iter().map(|&(word, count)| (word.to_owned(), count)).collect()
	}

	#[test]
	fn it_should_sum_shared_keys() {
		let total = reduce([table(&[("a", 1), ("b", 2)]), table(&[("b", 3), ("c", 4)])]);

		assert_eq!(total, table(&[("a", 1), ("b", 5), ("c", 4)]));
	}

	#[test]
	fn it_should_return_empty_table_without_partials() {
		assert!(reduce(Vec::new()).is_empty());
	}

	#[test]
	fn it_should_drain_a_channel() {
		let (sender, receiver) = std::sync::mpsc::channel();

		for _ in 0..3 {
			sender.send(table(&[("x", 2)])).unwrap();
		}

		drop(sender);
		assert_eq!(reduce(receiver), table(&[("x", 6)]));
	}

	fn partials() -> impl Strategy<Value = Vec<FrequencyTable>> {
		prop::collection::vec(prop::collection::hash_map("[a-d]{1,2}", 1usize..50, 0..6), 0..6)
	}

	proptest! {
		#[test]
		fn prop_merge_order_does_not_matter(partials in partials()) {
			let forward = reduce(partials.clone());
			let backward = reduce(partials.into_iter().rev());

			prop_assert_eq!(forward, backward);
		}

		#[test]
		fn prop_totals_are_conserved(partials in partials()) {
			let expected: usize = partials.iter().flat_map(|p| p.values()).sum();
			let total: usize = reduce(partials).values().sum();

			prop_assert_eq!(total, expected);
		}
	}
}
