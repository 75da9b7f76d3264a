//! Term index round trip through the filesystem.

use std::path::PathBuf;

use fst::MapBuilder;
use wordhoard_fst::{AnagramAutomaton, FstError, MorseAutomaton, TermAutomaton, TermIndex};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("wordhoard-fst-{}-{name}", std::process::id()))
}

fn build_index_file(path: &PathBuf) {
    let file = std::fs::File::create(path).expect("create index file");
    let mut builder = MapBuilder::new(std::io::BufWriter::new(file)).expect("builder");
    for (term, score) in [("listen", 40u64), ("silent", 90), ("tinsel", 15), ("toast", 8)] {
        builder.insert(term, score).expect("insert");
    }
    builder.finish().expect("finish");
}

#[test]
fn open_and_search() {
    let path = temp_path("open_and_search.fst");
    build_index_file(&path);

    let index = TermIndex::open(&path).expect("open");
    assert_eq!(index.len(), 4);

    let found = index.search(TermAutomaton::from(AnagramAutomaton::new("enlist").unwrap()), None);
    let terms: Vec<&str> = found.iter().map(|m| m.term.as_str()).collect();
    assert_eq!(terms, ["silent", "listen", "tinsel"]);

    let code = wordhoard_core::alphabet::to_morse("toast");
    let found = index.search(MorseAutomaton::new(&code), None);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].term, "toast");
    assert_eq!(found[0].score, 8);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_is_io_error() {
    let err = TermIndex::open(&temp_path("does-not-exist.fst")).unwrap_err();
    assert!(matches!(err, FstError::Io(_)));
}
