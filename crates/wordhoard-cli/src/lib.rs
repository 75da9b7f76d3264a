// wordhoard-cli: shared utilities for CLI tools.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;
use wordhoard_core::Dictionary;

/// Environment variable holding a colon-separated list of dictionary files.
pub const DICT_PATH_ENV: &str = "WORDHOARD_DICT_PATH";

/// Default search timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_DIRECTIVE: &str = "wordhoard=info";

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Options shared by the query tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    /// Dictionary files from `-d`/`--dict`, in priority order.
    pub dict_paths: Vec<PathBuf>,
    pub timeout: Duration,
    /// Term index for the fst commands.
    pub index_path: Option<PathBuf>,
    /// Maximum number of term index matches to print.
    pub limit: Option<usize>,
    pub dedupe: bool,
    /// Everything that is not one of the options above, in order.
    pub rest: Vec<String>,
}

impl Default for QueryArgs {
    fn default() -> Self {
        Self {
            dict_paths: Vec::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            index_path: None,
            limit: None,
            dedupe: true,
            rest: Vec::new(),
        }
    }
}

/// Parse the query tool options out of `args`.
///
/// Unrecognised arguments, including ones starting with `-` such as Morse
/// input, are passed through in [`QueryArgs::rest`].
pub fn parse_query_args(args: &[String]) -> Result<QueryArgs, String> {
    let mut parsed = QueryArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let (name, inline) = match arg.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value.to_string())),
            _ => (arg.as_str(), None),
        };
        let mut value = || -> Result<String, String> {
            match inline.clone() {
                Some(v) => Ok(v),
                None => iter.next().cloned().ok_or_else(|| format!("{name} requires a value")),
            }
        };

        match name {
            "-d" | "--dict" => parsed.dict_paths.push(PathBuf::from(value()?)),
            "-t" | "--timeout" => {
                let secs: u64 = value()?
                    .parse()
                    .map_err(|_| format!("invalid number of seconds for {name}"))?;
                parsed.timeout = Duration::from_secs(secs);
            }
            "--index" => parsed.index_path = Some(PathBuf::from(value()?)),
            "-n" | "--limit" => {
                let limit = value()?.parse().map_err(|_| format!("invalid number for {name}"))?;
                parsed.limit = Some(limit);
            }
            "--no-dedupe" => parsed.dedupe = false,
            _ => parsed.rest.push(arg.clone()),
        }
    }

    Ok(parsed)
}

/// Dictionary files to load: the explicit ones if any, otherwise the entries
/// of the `WORDHOARD_DICT_PATH` value `env_value`.
pub fn resolve_dictionary_paths(explicit: &[PathBuf], env_value: Option<&OsStr>) -> Vec<PathBuf> {
    if !explicit.is_empty() {
        return explicit.to_vec();
    }
    env_value
        .map(|v| std::env::split_paths(v).filter(|p| !p.as_os_str().is_empty()).collect())
        .unwrap_or_default()
}

/// Load every dictionary in `paths`, keeping their order.
pub fn load_dictionaries(paths: &[PathBuf]) -> Result<Vec<Dictionary>, String> {
    if paths.is_empty() {
        return Err(format!("no dictionaries given; use -d PATH or set {DICT_PATH_ENV}"));
    }
    paths
        .iter()
        .map(|path| {
            let dict = Dictionary::load(path)
                .map_err(|e| format!("failed to load {}: {}", path.display(), e))?;
            info!(path = %path.display(), words = dict.word_count(), "dictionary ready");
            Ok(dict)
        })
        .collect()
}

/// Parse a comma-separated list of chunk lengths such as `3,2`.
pub fn parse_lengths(list: &str) -> Result<Vec<usize>, String> {
    list.split(',')
        .map(|n| {
            n.trim()
                .parse::<usize>()
                .ok()
                .filter(|&len| len > 0)
                .ok_or_else(|| format!("invalid chunk length: {n:?}"))
        })
        .collect()
}

/// Short display name for a dictionary file.
pub fn dictionary_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let parsed = parse_query_args(&args(&["match", "fo?"])).unwrap();
        assert_eq!(parsed.timeout, Duration::from_secs(10));
        assert!(parsed.dedupe);
        assert!(parsed.dict_paths.is_empty());
        assert_eq!(parsed.rest, ["match", "fo?"]);
    }

    #[test]
    fn repeated_dictionaries_keep_order() {
        let parsed = parse_query_args(&args(&[
            "-d",
            "big.wh",
            "--dict=small.wh",
            "--dict",
            "names.wh",
            "anagram",
            "oof",
        ]))
        .unwrap();
        assert_eq!(
            parsed.dict_paths,
            [PathBuf::from("big.wh"), PathBuf::from("small.wh"), PathBuf::from("names.wh")]
        );
        assert_eq!(parsed.rest, ["anagram", "oof"]);
    }

    #[test]
    fn all_options() {
        let parsed = parse_query_args(&args(&[
            "-t", "3", "--index=terms.fst", "--limit", "20", "--no-dedupe", "fstanagram", "ab*",
        ]))
        .unwrap();
        assert_eq!(parsed.timeout, Duration::from_secs(3));
        assert_eq!(parsed.index_path, Some(PathBuf::from("terms.fst")));
        assert_eq!(parsed.limit, Some(20));
        assert!(!parsed.dedupe);
        assert_eq!(parsed.rest, ["fstanagram", "ab*"]);
    }

    #[test]
    fn morse_input_passes_through() {
        let parsed = parse_query_args(&args(&["morse", "-....-.-.", "--", "-..."])).unwrap();
        assert_eq!(parsed.rest, ["morse", "-....-.-.", "--", "-..."]);
    }

    #[test]
    fn missing_or_bad_values() {
        assert_eq!(parse_query_args(&args(&["-d"])).unwrap_err(), "-d requires a value");
        assert!(parse_query_args(&args(&["--timeout", "soon"])).is_err());
        assert!(parse_query_args(&args(&["--limit=-1"])).is_err());
    }

    #[test]
    fn explicit_paths_win_over_environment() {
        let explicit = [PathBuf::from("a.wh")];
        let paths = resolve_dictionary_paths(&explicit, Some(OsStr::new("b.wh:c.wh")));
        assert_eq!(paths, [PathBuf::from("a.wh")]);
    }

    #[cfg(unix)]
    #[test]
    fn environment_list_is_split() {
        let paths = resolve_dictionary_paths(&[], Some(OsStr::new("b.wh::c.wh")));
        assert_eq!(paths, [PathBuf::from("b.wh"), PathBuf::from("c.wh")]);
        assert!(resolve_dictionary_paths(&[], None).is_empty());
    }

    #[test]
    fn no_dictionaries_is_an_error() {
        assert!(load_dictionaries(&[]).unwrap_err().contains(DICT_PATH_ENV));
    }

    #[test]
    fn dictionary_names() {
        assert_eq!(dictionary_name(Path::new("/usr/share/wordhoard/english.wh")), "english");
        assert_eq!(dictionary_name(Path::new("plain")), "plain");
    }

    #[test]
    fn chunk_lengths() {
        assert_eq!(parse_lengths("3"), Ok(vec![3]));
        assert_eq!(parse_lengths("3, 2"), Ok(vec![3, 2]));
        assert!(parse_lengths("3,0").is_err());
        assert!(parse_lengths("x").is_err());
        assert!(parse_lengths("").is_err());
    }

    #[test]
    fn help_flag() {
        assert!(wants_help(&args(&["match", "-h"])));
        assert!(!wants_help(&args(&["match", "fo?"])));
    }
}
