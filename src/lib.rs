//! Parallel word frequency counting.
//!
//! The text is cut into one partition per worker without splitting words,
//! every partition is counted on its own scoped thread, and the partial
//! tables are summed by a single consumer draining an mpsc channel.
//!
//! ```
//! let counts = wordfreq::count_words_with("a b. A, b c", wordfreq::Config::with_worker_count(2));
//!
//! assert_eq!(counts["a"], 2);
//! assert_eq!(counts["b"], 2);
//! assert_eq!(counts["c"], 1);
//! ```

use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;

use tracing::{debug, trace};

pub mod bench;
pub mod counter;
pub mod error;
pub mod partition;
pub mod reduce;
pub mod source;

pub use error::{Error, Result};

/// Normalized word to number of occurrences.
pub type FrequencyTable = HashMap<String, usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
	/// Requested number of partitions, each counted on its own thread.
	pub worker_count: usize,
}

impl Config {
	#[inline]
	pub fn with_worker_count(worker_count: usize) -> Self {
		Self { worker_count }
	}

	/// Worker count actually used for a text of `text_len` bytes, clamped to
	/// `1..=max(1, text_len)`.
	#[inline]
	pub fn effective_worker_count(&self, text_len: usize) -> usize {
		self.worker_count.clamp(1, text_len.max(1))
	}
}

impl Default for Config {
	#[inline]
	fn default() -> Self {
		Self {
			worker_count: num_cpus::get(),
		}
	}
}

/// Stateless, re-entrant word counter. One call fans out, counts and joins.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
	config: Config,
}

impl WordCounter {
	#[inline]
	pub fn new(config: Config) -> Self {
		Self { config }
	}

	#[inline]
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Word frequencies of `text`. Never fails; empty text yields an empty table.
	pub fn count(&self, text: &str) -> FrequencyTable {
		let worker_count = self.config.effective_worker_count(text.len());
		let partitions = partition::partition(text, worker_count);
		debug!(worker_count, bytes = text.len(), "counting words");

		if partitions.len() == 1 {
			return counter::count(text);
		}

		thread::scope(|scope| {
			let (sender, receiver) = mpsc::channel();

			for (index, part) in partitions.iter().copied().enumerate() {
				let sender = sender.clone();

				scope.spawn(move || {
					let partial = counter::count(part);
					trace!(index, bytes = part.len(), words = partial.len(), "partition counted");
					sender.send(partial).expect("aggregator hung up before all partitions were sent")
				});
			}

			drop(sender);
			Self::gather(receiver, partitions.len())
		})
	}

	/// Drains every partial table from `receiver`, returning once all workers
	/// have hung up.
	fn gather(receiver: mpsc::Receiver<FrequencyTable>, expected: usize) -> FrequencyTable {
		let mut received = 0;
		let total = reduce::reduce(receiver.into_iter().inspect(|_| received += 1));

		assert_eq!(received, expected, "aggregator must see every partial table");
		debug!(partials = received, words = total.len(), "partial tables merged");
		total
	}
}

/// Counts words in `text` with one worker per available CPU.
#[inline]
pub fn count_words(text: &str) -> FrequencyTable {
	WordCounter::default().count(text)
}

#[inline]
pub fn count_words_with(text: &str, config: Config) -> FrequencyTable {
	WordCounter::new(config).count(text)
}
