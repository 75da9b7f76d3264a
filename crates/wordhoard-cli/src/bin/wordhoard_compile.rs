// wordhoard-compile: Build a dictionary file from a word list.
//
// Reads one word per line. Lines are trimmed and lowercased; anything that is
// still not a plain a-z word is skipped. The number of lines is used as the
// size estimate for the filters.
//
// Usage:
//   wordhoard-compile [-i INPUT] [-o OUTPUT]
//
// Options:
//   -i, --in PATH     Word list to read, or '-' for stdin (default: -)
//   -o, --out PATH    Dictionary file to write (default: words.wh)
//   -h, --help        Print help

use std::io::{self, Read};
use std::path::PathBuf;

use tracing::info;
use wordhoard_core::{Dictionary, DictionaryOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordhoard_cli::wants_help(&args) {
        println!("wordhoard-compile: Build a dictionary file from a word list.");
        println!();
        println!("Usage: wordhoard-compile [-i INPUT] [-o OUTPUT]");
        println!();
        println!("Options:");
        println!("  -i, --in PATH     Word list to read, or '-' for stdin (default: -)");
        println!("  -o, --out PATH    Dictionary file to write (default: words.wh)");
        println!("  -h, --help        Print this help");
        return;
    }

    wordhoard_cli::init_logging();

    let mut input = String::from("-");
    let mut output = PathBuf::from("words.wh");
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        let value = || {
            args.get(i + 1)
                .cloned()
                .unwrap_or_else(|| wordhoard_cli::fatal(&format!("{arg} requires a value")))
        };
        match arg.as_str() {
            "-i" | "--in" => {
                input = value();
                skip_next = true;
            }
            "-o" | "--out" => {
                output = PathBuf::from(value());
                skip_next = true;
            }
            other => wordhoard_cli::fatal(&format!("unexpected argument: {other}")),
        }
    }

    let mut contents = Vec::new();
    let read = if input == "-" {
        io::stdin().lock().read_to_end(&mut contents)
    } else {
        std::fs::File::open(&input).and_then(|mut f| f.read_to_end(&mut contents))
    };
    if let Err(e) = read {
        wordhoard_cli::fatal(&format!("unable to read {input}: {e}"));
    }

    let estimated = contents.iter().filter(|&&b| b == b'\n').count();
    let dict = Dictionary::from_reader(contents.as_slice(), estimated, DictionaryOptions::default())
        .unwrap_or_else(|e| wordhoard_cli::fatal(&format!("unable to build dictionary: {e}")));

    dict.save(&output)
        .unwrap_or_else(|e| wordhoard_cli::fatal(&format!("unable to save dictionary: {e}")));

    info!(
        words = dict.word_count(),
        estimated,
        path = %output.display(),
        "dictionary compiled"
    );
}
