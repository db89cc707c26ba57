// lexica-scan: scan lines of text for dictionary matches.
//
// Reads whole lines from stdin and prints every dictionary word found in
// each line, one per line, in scan order and with repeats. Overlapping and
// nested occurrences are all reported.
//
// Usage:
//   lexica-scan [-w WORDS_PATH] [OPTIONS]
//
// Options:
//   -w, --words PATH   Newline-delimited word-list file
//   -c, --count        Print only the match count per line
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (words_path, args) = lexica_cli::parse_words_path(&args);

    if lexica_cli::wants_help(&args) {
        println!("lexica-scan: scan lines of text for dictionary matches.");
        println!();
        println!("Usage: lexica-scan [-w WORDS_PATH] [OPTIONS]");
        println!();
        println!("Reads lines from stdin and prints every dictionary word found");
        println!("in each line, in scan order, repeats included.");
        println!();
        println!("Options:");
        println!("  -w, --words PATH   Newline-delimited word-list file");
        println!("  -c, --count        Print only the match count per line");
        println!("  -h, --help         Print this help");
        return;
    }

    let count_only = args.iter().any(|a| a == "-c" || a == "--count");

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

        let matches = dict.find_matches(&line);
        if count_only {
            let _ = writeln!(out, "{}", matches.len());
        } else {
            for matched in matches {
                let _ = writeln!(out, "{matched}");
            }
        }
    }
}
