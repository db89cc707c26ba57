// lexica-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use lexica_dict::Dictionary;

/// Default word-list file name.
const WORDS_FILE: &str = "words.txt";

/// Search for a word-list file and load a Dictionary.
///
/// Search order:
/// 1. `words_path` argument (if provided)
/// 2. `LEXICA_WORDS` environment variable
/// 3. `~/.lexica/words.txt`
/// 4. `words.txt` in the current working directory
pub fn load_dictionary(words_path: Option<&str>) -> Result<Dictionary, String> {
    let search_paths = build_search_paths(words_path);

    for path in &search_paths {
        if path.is_file() {
            return Dictionary::from_path(path)
                .map_err(|e| format!("failed to load {}: {e}", path.display()));
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of word-list file candidates to try.
fn build_search_paths(words_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = words_path {
        paths.push(PathBuf::from(p));
    }

    // 2. LEXICA_WORDS environment variable
    if let Ok(env_path) = std::env::var("LEXICA_WORDS") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".lexica").join(WORDS_FILE));
    }

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--words=PATH` or `-w PATH` argument from command line args.
///
/// Returns `(words_path, remaining_args)`.
pub fn parse_words_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut words_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--words=") {
            words_path = Some(val.to_string());
        } else if arg == "--words" || arg == "-w" {
            if i + 1 < args.len() {
                words_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (words_path, remaining)
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
    fn parses_equals_form() {
        let (path, rest) = parse_words_path(&args(&["--words=/tmp/w.txt", "-p"]));
        assert_eq!(path.as_deref(), Some("/tmp/w.txt"));
        assert_eq!(rest, args(&["-p"]));
    }

    #[test]
    fn parses_separate_value_form() {
        let (path, rest) = parse_words_path(&args(&["-w", "/tmp/w.txt"]));
        assert_eq!(path.as_deref(), Some("/tmp/w.txt"));
        assert!(rest.is_empty());
    }

    #[test]
    fn passes_through_unrelated_args() {
        let (path, rest) = parse_words_path(&args(&["-p", "--quiet"]));
        assert!(path.is_none());
        assert_eq!(rest, args(&["-p", "--quiet"]));
    }
}
