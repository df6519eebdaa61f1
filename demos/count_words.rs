use std::{cmp::Reverse, io::{stdin, stdout, Read, Write, BufWriter}};

fn main() {
	let mut text = String::new();
	stdin().read_to_string(&mut text).unwrap();

	let word_counts = wordfreq::count_words_with(&text, wordfreq::Config { worker_count: 8 });

	let mut sorted_word_counts = Vec::from_iter(word_counts);
	sorted_word_counts.sort_unstable_by_key(|&(_, count)| Reverse(count));
	let mut stdout = BufWriter::new(stdout().lock());

	for (word, count) in sorted_word_counts {
		writeln!(stdout, "{word} {count}").unwrap();
	}
}
