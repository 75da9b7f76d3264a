// wordhoard-query: Run word puzzle queries against one or more dictionaries.
//
// Usage:
//   wordhoard-query [-d DICT]... [OPTIONS] COMMAND INPUT...
//
// Commands:
//   match PATTERN           Words matching PATTERN ('?' is any letter)
//   multimatch PATTERN      Phrases matching PATTERN
//   anagram LETTERS         Anagrams of LETTERS ('?' is any letter)
//   multianagram LETTERS    Multi-word anagrams of LETTERS
//   obo WORD                Words one letter away from WORD
//   morse CODE              Words spelled by CODE (dots and dashes)
//   t9 DIGITS               Words typed by DIGITS (2-9; 0 separates words)
//   findwords TEXT          Words hidden in TEXT
//   wordsearch ROW...       Words hidden in a letter grid, one ROW per argument
//   fstanagram LETTERS      Anagrams from the term index ('*' is any letter)
//   fstmorse CODE           Morse matches from the term index
//   caesar TEXT             All 25 Caesar shifts of TEXT
//   chunk LENGTHS TEXT      Split TEXT into pieces of LENGTHS (e.g. 3,2), repeating
//
// Options:
//   -d, --dict PATH       Dictionary file (repeatable, most important first)
//   -t, --timeout SECS    Give up after SECS seconds (default: 10)
//   --index PATH          Term index for the fst commands
//   -n, --limit N         Maximum number of term index matches
//   --no-dedupe           Keep words already found in an earlier dictionary
//   -h, --help            Print help

use std::io::{self, Write};
use std::path::PathBuf;

use wordhoard_cli::QueryArgs;
use wordhoard_core::{CancelToken, SearchError};
use wordhoard_fst::{AnagramAutomaton, MorseAutomaton, TermAutomaton, TermIndex};
use wordhoard_search::{MultiWordOptions, MultiplexOptions, Multiplexer};

fn print_help() {
    println!("wordhoard-query: Run word puzzle queries against one or more dictionaries.");
    println!();
    println!("Usage: wordhoard-query [-d DICT]... [OPTIONS] COMMAND INPUT...");
    println!();
    println!("Commands:");
    println!("  match PATTERN           Words matching PATTERN ('?' is any letter)");
    println!("  multimatch PATTERN      Phrases matching PATTERN");
    println!("  anagram LETTERS         Anagrams of LETTERS ('?' is any letter)");
    println!("  multianagram LETTERS    Multi-word anagrams of LETTERS");
    println!("  obo WORD                Words one letter away from WORD");
    println!("  morse CODE              Words spelled by CODE (dots and dashes)");
    println!("  t9 DIGITS               Words typed by DIGITS (2-9; 0 separates words)");
    println!("  findwords TEXT          Words hidden in TEXT");
    println!("  wordsearch ROW...       Words hidden in a letter grid, one ROW per argument");
    println!("  fstanagram LETTERS      Anagrams from the term index ('*' is any letter)");
    println!("  fstmorse CODE           Morse matches from the term index");
    println!("  caesar TEXT             All 25 Caesar shifts of TEXT");
    println!("  chunk LENGTHS TEXT      Split TEXT into pieces of LENGTHS (e.g. 3,2), repeating");
    println!();
    println!("Options:");
    println!("  -d, --dict PATH       Dictionary file (repeatable, most important first)");
    println!("                        Falls back to {}", wordhoard_cli::DICT_PATH_ENV);
    println!("  -t, --timeout SECS    Give up after SECS seconds (default: 10)");
    println!("  --index PATH          Term index for the fst commands");
    println!("  -n, --limit N         Maximum number of term index matches");
    println!("  --no-dedupe           Keep words already found in an earlier dictionary");
    println!("  -h, --help            Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordhoard_cli::wants_help(&args) {
        print_help();
        return;
    }

    wordhoard_cli::init_logging();

    let parsed =
        wordhoard_cli::parse_query_args(&args).unwrap_or_else(|e| wordhoard_cli::fatal(&e));
    let Some((command, inputs)) = parsed.rest.split_first() else {
        print_help();
        std::process::exit(1);
    };
    if inputs.is_empty() {
        wordhoard_cli::fatal(&format!("{command} requires an input"));
    }
    let input = inputs.join(" ");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if run_transform(command, inputs, &mut out) {
        return;
    }

    if let Some(kind) = command.strip_prefix("fst") {
        run_index_query(&parsed, kind, &input, &mut out);
        return;
    }

    let env_paths = std::env::var_os(wordhoard_cli::DICT_PATH_ENV);
    let paths = wordhoard_cli::resolve_dictionary_paths(&parsed.dict_paths, env_paths.as_deref());
    let dictionaries =
        wordhoard_cli::load_dictionaries(&paths).unwrap_or_else(|e| wordhoard_cli::fatal(&e));
    let mux = Multiplexer::with_options(
        &dictionaries,
        MultiplexOptions {
            dedupe: parsed.dedupe,
        },
    );
    let cancel = CancelToken::with_timeout(parsed.timeout);

    let results = run_query(&mux, command, &input, inputs, &cancel)
        .unwrap_or_else(|e| wordhoard_cli::fatal(&format!("{command} {input:?}: {e}")));
    print_results(&paths, &results, &mut out);
}

fn run_query(
    mux: &Multiplexer<'_>,
    command: &str,
    input: &str,
    inputs: &[String],
    cancel: &CancelToken,
) -> Result<Vec<Vec<String>>, SearchError> {
    let options = MultiWordOptions::default();
    match command {
        "match" => mux.match_pattern(input, cancel),
        "multimatch" => mux.multi_match(input, options, cancel),
        "anagram" => mux.anagram(input, cancel),
        "multianagram" => mux.multi_anagram(input, options, cancel),
        "obo" => mux.off_by_one(input, cancel),
        "morse" => mux.morse_decode(input, cancel),
        "t9" => t9_phrase(mux, input, cancel),
        "findwords" => mux.find_words(input, cancel),
        "wordsearch" => mux.word_search(inputs, cancel),
        other => wordhoard_cli::fatal(&format!("unknown command: {other} (see --help)")),
    }
}

/// Decode each `0`-separated group of a T9 sequence on its own and join the
/// per-dictionary results as `group: words` lines.
fn t9_phrase(
    mux: &Multiplexer<'_>,
    input: &str,
    cancel: &CancelToken,
) -> Result<Vec<Vec<String>>, SearchError> {
    let groups: Vec<&str> = input.split(['0', ' ']).filter(|g| !g.is_empty()).collect();
    match groups.as_slice() {
        [] => return mux.t9_decode(input, cancel),
        [single] => return mux.t9_decode(single, cancel),
        _ => {}
    }

    let mut merged = vec![Vec::new(); mux.dictionaries().len()];
    for group in groups {
        for (lines, words) in merged.iter_mut().zip(mux.t9_decode(group, cancel)?) {
            if !words.is_empty() {
                lines.push(format!("{group}: {}", words.join(" ")));
            }
        }
    }
    Ok(merged)
}

/// Run the dictionary-free commands. Returns `false` if `command` is not one.
fn run_transform<W: Write>(command: &str, inputs: &[String], out: &mut W) -> bool {
    match command {
        "caesar" => {
            let text = inputs.join(" ");
            for (shift, line) in (1..).zip(wordhoard_search::caesar_shifts(&text)) {
                let _ = writeln!(out, "{shift:2}: {line}");
            }
        }
        "chunk" => {
            let [lengths, rest @ ..] = inputs else {
                return false;
            };
            if rest.is_empty() {
                wordhoard_cli::fatal("chunk requires LENGTHS and TEXT");
            }
            let lengths = wordhoard_cli::parse_lengths(lengths)
                .unwrap_or_else(|e| wordhoard_cli::fatal(&e));
            let pieces = wordhoard_search::chunk(&rest.join(" "), &lengths);
            let _ = writeln!(out, "{}", pieces.join(" "));
        }
        _ => return false,
    }
    true
}

fn run_index_query<W: Write>(parsed: &QueryArgs, kind: &str, input: &str, out: &mut W) {
    let Some(index_path) = &parsed.index_path else {
        wordhoard_cli::fatal("fst commands require --index PATH");
    };
    let automaton: TermAutomaton = match kind {
        "anagram" => AnagramAutomaton::new(input)
            .unwrap_or_else(|e| wordhoard_cli::fatal(&e.to_string()))
            .into(),
        "morse" => MorseAutomaton::new(input).into(),
        other => wordhoard_cli::fatal(&format!("unknown command: fst{other} (see --help)")),
    };

    let index = TermIndex::open(index_path)
        .unwrap_or_else(|e| wordhoard_cli::fatal(&format!("{}: {e}", index_path.display())));
    let matches = index.search(&automaton, parsed.limit);
    if matches.is_empty() {
        eprintln!("no matches for {input:?}");
    }
    for m in &matches {
        let _ = writeln!(out, "{} ({})", m.term, m.score);
    }
}

fn print_results<W: Write>(paths: &[PathBuf], results: &[Vec<String>], out: &mut W) {
    if results.iter().all(Vec::is_empty) {
        eprintln!("no matches");
        return;
    }
    let labelled = paths.len() > 1;
    for (path, words) in paths.iter().zip(results) {
        if words.is_empty() {
            continue;
        }
        if labelled {
            let _ = writeln!(out, "[{}]", wordhoard_cli::dictionary_name(path));
        }
        for word in words {
            let _ = writeln!(out, "{word}");
        }
    }
}
