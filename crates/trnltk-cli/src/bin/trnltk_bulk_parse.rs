// trnltk-bulk-parse: Parse whole texts with a pool of cached parsers.
//
// Splits the input into whitespace separated tokens and parses them on
// worker threads. Every worker buffers its results in a private cache and
// flushes them in bulk into one shared LRU cache, so repeated tokens are
// parsed about once per run. Output keeps input order: one line per token,
// the token followed by its analyses, tab separated.
//
// Usage:
//   trnltk-bulk-parse [-d DICT_PATH] [--threads=N] [--flush=N] [--cache-size=N]
//                     [--forms | --groups] [--brute-force] [FILE...]
//
// Options:
//   -d, --dict-path PATH   Directory containing master-dictionary.dict
//   --threads=N            Worker threads (default: available cores)
//   --flush=N              Buffered surfaces per worker before a flush
//   --cache-size=N         Surfaces kept in the shared cache
//   --forms                Show root and suffix forms
//   --groups               Group analyses by derivation
//   --brute-force          Guess roots missing from the dictionary
//   -h, --help             Print help

use std::io::{self, Read, Write};
use std::sync::Arc;
use std::thread;

use trnltk_morph::cache::{LruCacheOptions, TwoLevelCacheOptions};
use trnltk_morph::{Analyzer, CachingParser, LruCache, Notation, ParseCache, TwoLevelCache};

fn print_help() {
    println!("trnltk-bulk-parse: Parse whole texts with a pool of cached parsers.");
    println!();
    println!("Usage: trnltk-bulk-parse [-d DICT_PATH] [--threads=N] [--flush=N] [--cache-size=N]");
    println!("                         [--forms | --groups] [--brute-force] [FILE...]");
    println!();
    println!("Reads the given files, or stdin when none are given.");
    println!();
    println!("Options:");
    println!("  -d, --dict-path PATH   Directory containing master-dictionary.dict");
    println!("  --threads=N            Worker threads (default: available cores)");
    println!("  --flush=N              Buffered surfaces per worker before a flush");
    println!("  --cache-size=N         Surfaces kept in the shared cache");
    println!("  --forms                Show root and suffix forms");
    println!("  --groups               Group analyses by derivation");
    println!("  --brute-force          Guess roots missing from the dictionary");
    println!("  -h, --help             Print this help");
}

fn read_input(files: &[String]) -> io::Result<String> {
    if files.is_empty() {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        return Ok(text);
    }
    let mut text = String::new();
    for file in files {
        text.push_str(&std::fs::read_to_string(file)?);
        text.push('\n');
    }
    Ok(text)
}

/// Parse `tokens` on one worker and render one output line per token.
fn parse_chunk(
    analyzer: &Analyzer,
    shared: Arc<dyn ParseCache>,
    options: TwoLevelCacheOptions,
    notation: Notation,
    tokens: &[&str],
) -> Vec<String> {
    let cache = TwoLevelCache::new(options, shared);
    let parser = CachingParser::new(cache, Arc::clone(analyzer.parser()), false);
    tokens
        .iter()
        .map(|token| {
            let analyses = parser.parse_shared(token);
            let mut rendered: Vec<String> = analyses
                .iter()
                .map(|c| notation.render(c, analyzer.graph()))
                .collect();
            rendered.sort();
            if rendered.is_empty() {
                format!("{token}\t(no analysis)")
            } else {
                format!("{token}\t{}", rendered.join("\t"))
            }
        })
        .collect()
}

fn main() {
    trnltk_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = trnltk_cli::parse_dict_path(&args);

    if trnltk_cli::wants_help(&args) {
        print_help();
        return;
    }

    let count = |name: &str| trnltk_cli::parse_count(&args, name).unwrap_or_else(|e| trnltk_cli::fatal(&e));
    let threads = count("threads")
        .or_else(|| thread::available_parallelism().ok().map(|n| n.get()))
        .unwrap_or(1);
    let flush = TwoLevelCacheOptions {
        flush_threshold: count("flush").unwrap_or(TwoLevelCacheOptions::default().flush_threshold),
    };
    let lru = LruCacheOptions {
        concurrency_level: threads,
        maximum_size: count("cache-size").unwrap_or(LruCacheOptions::default().maximum_size),
        ..LruCacheOptions::default()
    };
    let notation = trnltk_cli::parse_notation(&args);
    let chain = trnltk_cli::parse_chain_options(&args);
    let files = trnltk_cli::positional(&args);

    let analyzer = trnltk_cli::load_analyzer(dict_path.as_deref(), chain)
        .unwrap_or_else(|e| trnltk_cli::fatal(&e));
    let text = read_input(&files).unwrap_or_else(|e| trnltk_cli::fatal(&format!("cannot read input: {e}")));
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return;
    }

    let shared = Arc::new(LruCache::new(lru));
    let chunk_size = tokens.len().div_ceil(threads);
    log::info!("parsing {} tokens on {} workers", tokens.len(), tokens.len().div_ceil(chunk_size));

    let lines: Vec<Vec<String>> = thread::scope(|s| {
        let workers: Vec<_> = tokens
            .chunks(chunk_size)
            .map(|chunk| {
                let (analyzer, l1) = (&analyzer, Arc::clone(&shared) as Arc<dyn ParseCache>);
                s.spawn(move || parse_chunk(analyzer, l1, flush, notation, chunk))
            })
            .collect();
        workers
            .into_iter()
            .map(|w| w.join().unwrap_or_else(|_| trnltk_cli::fatal("a worker thread panicked")))
            .collect()
    });
    log::info!("shared cache holds {} surfaces", shared.len());

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = lines
        .iter()
        .flatten()
        .try_for_each(|line| writeln!(out, "{line}"))
        .and_then(|()| out.flush());
    if let Err(e) = result {
        trnltk_cli::fatal(&format!("cannot write output: {e}"));
    }
}
