// trnltk-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use log::{LevelFilter, Log, Metadata, Record};
use trnltk_morph::{Analyzer, AnalyzerBuilder, ChainOptions, Notation};

/// Master dictionary file name.
pub const DICT_FILE: &str = "master-dictionary.dict";

/// Environment variable holding the log level.
const LOG_ENV: &str = "TRNLTK_LOG";

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger. The level comes from `TRNLTK_LOG`
/// (`off`, `error` .. `trace`), `warn` when unset or unrecognized.
pub fn init_logging() {
    let level = parse_level(std::env::var(LOG_ENV).ok().as_deref());
    // Already installed when called twice.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

// ---------------------------------------------------------------------------
// Dictionary discovery
// ---------------------------------------------------------------------------

/// Search for the master dictionary and build an analyzer from it.
///
/// Search order:
/// 1. `dict_path` argument (if provided), a directory or the file itself
/// 2. `TRNLTK_DICT_PATH` environment variable
/// 3. `~/.trnltk`
/// 4. `/usr/share/trnltk`
/// 5. Current working directory
pub fn load_analyzer(dict_path: Option<&str>, chain: ChainOptions) -> Result<Analyzer, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        let path = if candidate.is_file() {
            candidate.clone()
        } else {
            candidate.join(DICT_FILE)
        };
        if path.is_file() {
            log::info!("loading dictionary {}", path.display());
            return AnalyzerBuilder::new()
                .chain_options(chain)
                .build_from_file(&path)
                .map_err(|e| format!("failed to build analyzer from {}: {e}", path.display()));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DICT_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for the dictionary.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. TRNLTK_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var("TRNLTK_DICT_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".trnltk"));
    }

    // 4. System path
    paths.push(PathBuf::from("/usr/share/trnltk"));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Notation picked by `--forms` or `--groups`; plain otherwise. The last
/// flag given wins.
pub fn parse_notation(args: &[String]) -> Notation {
    args.iter().fold(Notation::Plain, |notation, arg| match arg.as_str() {
        "--forms" => Notation::WithForms,
        "--groups" => Notation::Grouped,
        _ => notation,
    })
}

/// Root finders picked by `--brute-force`.
pub fn parse_chain_options(args: &[String]) -> ChainOptions {
    if args.iter().any(|a| a == "--brute-force") {
        ChainOptions::brute_force()
    } else {
        ChainOptions::default()
    }
}

/// Value of a `--name=N` flag. `Ok(None)` when the flag is absent.
pub fn parse_count(args: &[String], name: &str) -> Result<Option<usize>, String> {
    let prefix = format!("--{name}=");
    let Some(value) = args.iter().rev().find_map(|a| a.strip_prefix(prefix.as_str())) else {
        return Ok(None);
    };
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(format!("--{name} expects a positive number, got '{value}'")),
    }
}

/// Arguments that are not flags.
pub fn positional(args: &[String]) -> Vec<String> {
    args.iter().filter(|a| !a.starts_with('-')).cloned().collect()
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
    fn dict_path_forms() {
        let (path, rest) = parse_dict_path(&args(&["--dict-path=/tmp/d", "kitap"]));
        assert_eq!(path.as_deref(), Some("/tmp/d"));
        assert_eq!(rest, args(&["kitap"]));

        let (path, rest) = parse_dict_path(&args(&["ev", "-d", "/opt/trnltk", "--forms"]));
        assert_eq!(path.as_deref(), Some("/opt/trnltk"));
        assert_eq!(rest, args(&["ev", "--forms"]));

        let (path, _) = parse_dict_path(&args(&["ev"]));
        assert!(path.is_none());
    }

    #[test]
    fn notation_flags() {
        assert_eq!(parse_notation(&args(&["ev"])), Notation::Plain);
        assert_eq!(parse_notation(&args(&["--forms"])), Notation::WithForms);
        assert_eq!(parse_notation(&args(&["--forms", "--groups"])), Notation::Grouped);
    }

    #[test]
    fn count_flags() {
        assert_eq!(parse_count(&args(&["--threads=4"]), "threads"), Ok(Some(4)));
        assert_eq!(parse_count(&args(&["--flush=10", "--flush=20"]), "flush"), Ok(Some(20)));
        assert_eq!(parse_count(&args(&["--threads=4"]), "flush"), Ok(None));
        assert!(parse_count(&args(&["--threads=0"]), "threads").is_err());
        assert!(parse_count(&args(&["--threads=many"]), "threads").is_err());
    }

    #[test]
    fn chain_flag() {
        assert_eq!(parse_chain_options(&args(&[])), ChainOptions::default());
        assert_eq!(parse_chain_options(&args(&["--brute-force"])), ChainOptions::brute_force());
    }

    #[test]
    fn positional_skips_flags() {
        assert_eq!(positional(&args(&["kitaba", "--groups", "bana"])), args(&["kitaba", "bana"]));
    }

    #[test]
    fn log_levels() {
        assert_eq!(parse_level(None), LevelFilter::Warn);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("TRACE")), LevelFilter::Trace);
        assert_eq!(parse_level(Some("off")), LevelFilter::Off);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Warn);
    }

    #[test]
    fn explicit_dict_path_is_searched_first() {
        let paths = build_search_paths(Some("/tmp/dict"));
        assert_eq!(paths[0], PathBuf::from("/tmp/dict"));
        assert!(paths.contains(&PathBuf::from("/usr/share/trnltk")));
    }

    #[test]
    fn missing_dictionary_lists_search_paths() {
        let err = load_analyzer(Some("/nonexistent/trnltk"), ChainOptions::default());
        if let Err(msg) = err {
            assert!(msg.contains("/nonexistent/trnltk"), "{msg}");
        }
    }
}
