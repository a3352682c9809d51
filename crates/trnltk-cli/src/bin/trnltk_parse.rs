// trnltk-parse: Morphological analysis of Turkish words.
//
// Reads words from stdin (one per line) or from the command line and prints
// every analysis of each word, one per line, sorted.
//
// Usage:
//   trnltk-parse [-d DICT_PATH] [--forms | --groups] [--brute-force] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Directory containing master-dictionary.dict
//   --forms                Show root and suffix forms
//   --groups               Group analyses by derivation
//   --brute-force          Guess roots missing from the dictionary
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use trnltk_morph::{Analyzer, Notation};

fn print_help() {
    println!("trnltk-parse: Morphological analysis of Turkish words.");
    println!();
    println!("Usage: trnltk-parse [-d DICT_PATH] [--forms | --groups] [--brute-force] [WORD...]");
    println!();
    println!("If WORD arguments are given, analyzes each word.");
    println!("Otherwise reads words from stdin (one per line).");
    println!();
    println!("Options:");
    println!("  -d, --dict-path PATH   Directory containing master-dictionary.dict");
    println!("  --forms                Show root and suffix forms");
    println!("  --groups               Group analyses by derivation");
    println!("  --brute-force          Guess roots missing from the dictionary");
    println!("  -h, --help             Print this help");
    println!();
    println!("Set TRNLTK_LOG=debug to trace the parser on stderr.");
}

fn analyze_word(word: &str, analyzer: &Analyzer, notation: Notation, out: &mut impl Write) -> io::Result<()> {
    let analyses = analyzer.analyze(word, notation);
    if analyses.is_empty() {
        writeln!(out, "{word}: (no analysis)")
    } else {
        writeln!(out, "{word}:")?;
        for analysis in &analyses {
            writeln!(out, "  {analysis}")?;
        }
        Ok(())
    }
}

fn main() {
    trnltk_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = trnltk_cli::parse_dict_path(&args);

    if trnltk_cli::wants_help(&args) {
        print_help();
        return;
    }

    let notation = trnltk_cli::parse_notation(&args);
    let chain = trnltk_cli::parse_chain_options(&args);
    let words = trnltk_cli::positional(&args);

    let analyzer = trnltk_cli::load_analyzer(dict_path.as_deref(), chain)
        .unwrap_or_else(|e| trnltk_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = if words.is_empty() {
        let stdin = io::stdin();
        let mut result = Ok(());
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            result = analyze_word(word, &analyzer, notation, &mut out);
            if result.is_err() {
                break;
            }
        }
        result
    } else {
        words
            .iter()
            .try_for_each(|word| analyze_word(word, &analyzer, notation, &mut out))
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        trnltk_cli::fatal(&format!("cannot write output: {e}"));
    }
}
