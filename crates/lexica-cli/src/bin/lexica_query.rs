// lexica-query: interactive dictionary lookup from stdin.
//
// Reads query words from stdin (one per line) and reports for each whether
// it is in the dictionary, followed by every dictionary word found inside
// it (deduplicated for display). A line containing just "q" quits.
//   C: word    (exact dictionary member)
//   W: word    (not a member)
//   M: match   (dictionary word occurring inside the query)
//   P: word    (with -p: dictionary word extending the query as a prefix)
//
// Usage:
//   lexica-query [-w WORDS_PATH] [OPTIONS]
//
// Options:
//   -w, --words PATH   Newline-delimited word-list file
//   -p, --prefix       Also list dictionary words extending the query
//   -h, --help         Print help

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (words_path, args) = lexica_cli::parse_words_path(&args);

    if lexica_cli::wants_help(&args) {
        println!("lexica-query: interactive dictionary lookup from stdin.");
        println!();
        println!("Usage: lexica-query [-w WORDS_PATH] [OPTIONS]");
        println!();
        println!("Reads query words from stdin (one per line); \"q\" quits. Prints:");
        println!("  C: word    (exact dictionary member)");
        println!("  W: word    (not a member)");
        println!("  M: match   (dictionary word occurring inside the query)");
        println!("  P: word    (with -p: dictionary word extending the query)");
        println!();
        println!("Options:");
        println!("  -w, --words PATH   Newline-delimited word-list file");
        println!("  -p, --prefix       Also list dictionary words extending the query");
        println!("  -h, --help         Print this help");
        return;
    }

    let show_prefix = args.iter().any(|a| a == "-p" || a == "--prefix");

    let dict = lexica_cli::load_dictionary(words_path.as_deref())
        .unwrap_or_else(|e| lexica_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

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
        if word == "q" {
            break;
        }

        if dict.contains(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
        }

        // The engine reports one hit per occurrence; collapse repeats
        // for display, keeping first-seen order.
        let mut seen = HashSet::new();
        for matched in dict.find_matches(word) {
            if seen.insert(matched.clone()) {
                let _ = writeln!(out, "M: {matched}");
            }
        }

        if show_prefix {
            for completion in dict.words_with_prefix(word) {
                let _ = writeln!(out, "P: {completion}");
            }
        }

        let _ = out.flush();
    }
}
