// Criterion benchmarks for wordhoard-search.
//
// Builds a synthetic dictionary of pronounceable words so the benchmarks run
// without external data. Set WORDHOARD_BENCH_WORDS to a word list (one word
// per line) to benchmark against a real dictionary instead.
//
// Run:
//   cargo bench -p wordhoard-search
//   WORDHOARD_BENCH_WORDS=/usr/share/dict/words cargo bench -p wordhoard-search

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wordhoard_core::{CancelToken, Dictionary};
use wordhoard_search::{MultiWordOptions, Multiplexer};

// ---------------------------------------------------------------------------
// Dictionary setup
// ---------------------------------------------------------------------------

fn synthetic_words() -> Vec<String> {
    const ONSETS: &[&str] = &["b", "c", "d", "f", "g", "l", "m", "n", "p", "r", "s", "t"];
    const VOWELS: &[&str] = &["a", "e", "i", "o", "u"];
    const CODAS: &[&str] = &["", "n", "r", "s", "t"];

    let mut words = Vec::new();
    for a in ONSETS {
        for v in VOWELS {
            for b in ONSETS {
                for w in VOWELS {
                    for c in CODAS {
                        words.push(format!("{a}{v}{b}{w}{c}"));
                    }
                }
            }
        }
    }
    words
}

fn load_words() -> Vec<String> {
    if let Ok(path) = std::env::var("WORDHOARD_BENCH_WORDS") {
        if let Ok(contents) = std::fs::read_to_string(&path) {
            return contents.lines().map(|l| l.trim().to_lowercase()).collect();
        }
        eprintln!("[search_bench] could not read {path}; using synthetic words");
    }
    synthetic_words()
}

fn build_dictionary() -> Dictionary {
    let words = load_words();
    Dictionary::from_words(&words, words.len())
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_build(c: &mut Criterion) {
    let words = load_words();
    c.bench_function("build_dictionary", |b| {
        b.iter(|| Dictionary::from_words(black_box(&words), words.len()))
    });
}

fn bench_pattern(c: &mut Criterion) {
    let dict = build_dictionary();
    let cancel = CancelToken::none();
    c.bench_function("match_pattern ?a?o?", |b| {
        b.iter(|| wordhoard_search::match_pattern(&dict, black_box("?a?o?"), &cancel))
    });
}

fn bench_anagram(c: &mut Criterion) {
    let dict = build_dictionary();
    let cancel = CancelToken::none();
    c.bench_function("anagram salton", |b| {
        b.iter(|| wordhoard_search::anagram(&dict, black_box("salton"), &cancel))
    });
    c.bench_function("anagram ta?o?", |b| {
        b.iter(|| wordhoard_search::anagram(&dict, black_box("ta?o?"), &cancel))
    });
}

fn bench_multi(c: &mut Criterion) {
    let dict = build_dictionary();
    let cancel = CancelToken::none();
    let options = MultiWordOptions::default();
    c.bench_function("multi_match", |b| {
        b.iter(|| wordhoard_search::multi_match(&dict, black_box("basonpiret"), options, &cancel))
    });
}

fn bench_decode(c: &mut Criterion) {
    let dict = build_dictionary();
    let cancel = CancelToken::none();
    let morse = wordhoard_core::alphabet::to_morse("basin");
    c.bench_function("morse_decode", |b| {
        b.iter(|| wordhoard_search::morse_decode(&dict, black_box(&morse), &cancel))
    });
    c.bench_function("t9_decode", |b| {
        b.iter(|| wordhoard_search::t9_decode(&dict, black_box("22746"), &cancel))
    });
}

fn bench_multiplex(c: &mut Criterion) {
    let words = load_words();
    let (left, right) = words.split_at(words.len() / 2);
    let dicts = vec![
        Dictionary::from_words(left, left.len()),
        Dictionary::from_words(right, right.len()),
    ];
    let mux = Multiplexer::new(&dicts);
    let cancel = CancelToken::none();
    c.bench_function("multiplex anagram", |b| {
        b.iter(|| mux.anagram(black_box("notes"), &cancel))
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_pattern,
    bench_anagram,
    bench_multi,
    bench_decode,
    bench_multiplex
);
criterion_main!(benches);
