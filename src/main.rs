use std::cmp::Reverse;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, trace};
use wordfreq::bench::{benchmark, BenchConfig};
use wordfreq::source::{load_text, DEFAULT_SOURCE};
use wordfreq::{Config, FrequencyTable, WordCounter};

/// Count word frequencies in parallel and benchmark the count
#[derive(Parser)]
#[command(name = "wordfreq", version, about, long_about = None)]
struct Cli {
	/// Text file to analyze
	#[arg(default_value = DEFAULT_SOURCE)]
	path: PathBuf,

	/// Number of partitions counted in parallel (default: number of CPUs)
	#[arg(short, long)]
	workers: Option<usize>,

	/// Number of timed runs, 0 skips the benchmark
	#[arg(short, long, default_value = "100")]
	runs: usize,

	/// Only print the N most frequent words
	#[arg(long)]
	top: Option<usize>,

	/// Do not print the frequency table
	#[arg(long)]
	no_table: bool,

	/// Hide the benchmark progress bar
	#[arg(long)]
	no_progress: bool,

	/// Enable verbose output (-v for debug, -vv for trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn main() {
	let cli = Cli::parse();

	let log_level = match cli.verbose {
		0 => "warn",
		1 => "debug",
		_ => "trace",
	};

	tracing_subscriber::fmt()
		.with_env_filter(log_level)
		.with_target(cli.verbose >= 2)
		.with_thread_ids(cli.verbose >= 2)
		.with_writer(std::io::stderr)
		.init();

	trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

	if let Err(e) = run(cli) {
		error!("Fatal error: {:#}", e);
		eprintln!("Error: {e:#}");
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> anyhow::Result<()> {
	let text = load_text(&cli.path).with_context(|| format!("failed to load {}", cli.path.display()))?;
	let config = cli.workers.map_or_else(Config::default, Config::with_worker_count);
	debug!(?config, "word counter configured");
	let counter = WordCounter::new(config);

	let mut stdout = BufWriter::new(stdout().lock());

	if !cli.no_table {
		write_table(&mut stdout, counter.count(&text), cli.top)?;
	}

	if cli.runs > 0 {
		#[allow(unused_mut)]
		let mut bench_config = BenchConfig::with_runs(cli.runs);
		#[cfg(feature = "progression")]
		{
			bench_config.progress_bar = !cli.no_progress;
		}

		let report = benchmark(&counter, &text, &bench_config);
		writeln!(stdout, "{report}")?;
	}

	stdout.flush()?;
	Ok(())
}

/// Writes `counts` most frequent first, ties broken alphabetically.
fn write_table(out: &mut impl Write, counts: FrequencyTable, top: Option<usize>) -> std::io::Result<()> {
	let mut sorted = Vec::from_iter(counts);
	sorted.sort_unstable_by(|(a_word, a_count), (b_word, b_count)| {
		Reverse(a_count).cmp(&Reverse(b_count)).then_with(|| a_word.cmp(b_word))
	});

	for (word, count) in sorted.into_iter().take(top.unwrap_or(usize::MAX)) {
		writeln!(out, "{word} {count}")?;
	}

	Ok(())
}
