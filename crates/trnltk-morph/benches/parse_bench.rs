// Criterion benchmarks for trnltk-morph.
//
// Uses the master dictionary found through TRNLTK_DICT_PATH, or the sample
// at data/master-dictionary.dict relative to the crate root. If no
// dictionary is found the benchmarks print a message and run no-op
// iterations.
//
// Run:
//   cargo bench -p trnltk-morph
//   TRNLTK_DICT_PATH=/path/to/dict cargo bench -p trnltk-morph

use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use trnltk_morph::cache::LruCacheOptions;
use trnltk_morph::{Analyzer, AnalyzerBuilder, CachingParser, LruCache, MorphologicParser, Notation};

// ---------------------------------------------------------------------------
// Dictionary discovery
// ---------------------------------------------------------------------------

fn find_dictionary() -> Option<std::path::PathBuf> {
    if let Ok(dir) = std::env::var("TRNLTK_DICT_PATH") {
        let path = std::path::PathBuf::from(&dir).join("master-dictionary.dict");
        if path.exists() {
            return Some(path);
        }
    }
    let fallback = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/master-dictionary.dict");
    if fallback.exists() {
        return Some(fallback);
    }
    None
}

fn load_analyzer() -> Option<Analyzer> {
    let path = find_dictionary()?;
    Some(AnalyzerBuilder::new().build_from_file(&path).expect("analyzer"))
}

const SENTENCE: &[&str] = &[
    "kitaplarımızdan", "evdekiler", "bana", "geldi", "yiyor", "başlıyor", "elmalı", "kaleme",
    "okula", "çocuklar", "güzel", "ve", "Ankara'ya", "3", "ağzı", "hakkı",
];

fn inputs() -> Vec<String> {
    SENTENCE.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Build the suffix graph, form graph and lexicon from scratch.
fn bench_build(c: &mut Criterion) {
    let Some(path) = find_dictionary() else {
        eprintln!("[bench_build] master-dictionary.dict not found, skipping (set TRNLTK_DICT_PATH)");
        c.bench_function("build (skipped)", |b| b.iter(|| {}));
        return;
    };

    c.bench_function("build_analyzer", |b| {
        b.iter(|| std::hint::black_box(AnalyzerBuilder::new().build_from_file(&path).expect("analyzer")));
    });
}

/// Parse every surface with no cache in front of the parser.
fn bench_parse_cold(c: &mut Criterion) {
    let Some(analyzer) = load_analyzer() else {
        eprintln!("[bench_parse_cold] master-dictionary.dict not found, skipping (set TRNLTK_DICT_PATH)");
        c.bench_function("parse_cold (skipped)", |b| b.iter(|| {}));
        return;
    };

    c.bench_function("parse_cold", |b| {
        b.iter(|| {
            for word in SENTENCE {
                std::hint::black_box(analyzer.parse(word));
            }
        });
    });
}

/// Parse every surface through a warm LRU cache.
fn bench_parse_cached(c: &mut Criterion) {
    let Some(analyzer) = load_analyzer() else {
        eprintln!("[bench_parse_cached] master-dictionary.dict not found, skipping (set TRNLTK_DICT_PATH)");
        c.bench_function("parse_cached (skipped)", |b| b.iter(|| {}));
        return;
    };

    let cache = LruCache::new(LruCacheOptions::default());
    let parser = CachingParser::new(cache, Arc::clone(analyzer.parser()), true);
    let words = inputs();
    parser.parse_all_shared(&words);

    c.bench_function("parse_cached", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(parser.parse_shared(word));
            }
        });
    });
}

/// Parse all surfaces in parallel and format them.
fn bench_parse_all_formatted(c: &mut Criterion) {
    let Some(analyzer) = load_analyzer() else {
        eprintln!("[bench_parse_all_formatted] master-dictionary.dict not found, skipping (set TRNLTK_DICT_PATH)");
        c.bench_function("parse_all_formatted (skipped)", |b| b.iter(|| {}));
        return;
    };

    let words = inputs();
    c.bench_function("parse_all_formatted", |b| {
        b.iter(|| {
            let results = analyzer.parser().parse_all(&words);
            for containers in &results {
                for container in containers {
                    std::hint::black_box(Notation::Grouped.render(container, analyzer.graph()));
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_parse_cold,
    bench_parse_cached,
    bench_parse_all_formatted,
);
criterion_main!(benches);
