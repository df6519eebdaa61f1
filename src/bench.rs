//! Timing repeated counts of the same text.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::info;

use crate::WordCounter;

pub struct BenchConfig<'a> {
	pub runs: usize,
	#[cfg(feature = "progression")]
	pub progress_bar: bool,
	#[cfg(feature = "progression")]
	pub bar_config: progression::Config<'a>,
	#[cfg(not(feature = "progression"))]
	pub _phantom: std::marker::PhantomData<&'a ()>,
}

impl Default for BenchConfig<'_> {
	#[inline]
	fn default() -> Self {
		Self {
			runs: 100,
			#[cfg(feature = "progression")]
			progress_bar: true,
			#[cfg(feature = "progression")]
			bar_config: progression::Config::default(),
			#[cfg(not(feature = "progression"))]
			_phantom: std::marker::PhantomData,
		}
	}
}

impl BenchConfig<'_> {
	/// Quiet configuration running `runs` counts.
	pub fn with_runs(runs: usize) -> Self {
		Self {
			runs,
			#[cfg(feature = "progression")]
			progress_bar: false,
			..Default::default()
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkReport {
	pub runs: usize,
	pub total: Duration,
}

impl BenchmarkReport {
	/// Mean wall-clock time per run, zero when nothing ran.
	pub fn average(&self) -> Duration {
		if self.runs == 0 {
			return Duration::ZERO;
		}

		self.total.div_f64(self.runs as f64)
	}
}

impl fmt::Display for BenchmarkReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "amount of runs: {}", self.runs)?;
		writeln!(f, "total time: {} ms", self.total.as_millis())?;
		write!(f, "average time/run: {:.2} ms", self.average().as_secs_f64() * 1000.0)
	}
}

/// Counts `text` with `counter` `config.runs` times and measures the total
/// wall-clock duration.
pub fn benchmark(counter: &WordCounter, text: &str, config: &BenchConfig) -> BenchmarkReport {
	#[cfg(feature = "progression")]
	let bar = config.progress_bar.then(|| {
		progression::Bar::new(config.runs.try_into().unwrap_or(u64::MAX), config.bar_config.clone())
	});

	let start = Instant::now();

	for _ in 0..config.runs {
		black_box(counter.count(black_box(text)));

		#[cfg(feature = "progression")]
		if let Some(bar) = &bar {
			bar.inc(1);
		}
	}

	let report = BenchmarkReport {
		runs: config.runs,
		total: start.elapsed(),
	};
	info!(runs = report.runs, total_ms = report.total.as_millis() as u64, "benchmark finished");
	report
}
