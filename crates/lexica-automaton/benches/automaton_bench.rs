// Criterion benchmarks for lexica-automaton.
//
// The corpus is synthetic so the benches run without external fixtures:
// a few thousand pseudo-random lowercase words and a long haystack with
// dictionary words sprinkled in.
//
// Run:
//   cargo bench -p lexica-automaton

use criterion::{Criterion, criterion_group, criterion_main};
use lexica_automaton::Automaton;

// ---------------------------------------------------------------------------
// Corpus generation
// ---------------------------------------------------------------------------

/// Deterministic xorshift so runs are comparable.
fn next_rand(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

fn make_words(count: usize) -> Vec<String> {
    let mut state = 0x5EED_u64;
    (0..count)
        .map(|_| {
            let len = 3 + (next_rand(&mut state) % 8) as usize;
            (0..len)
                .map(|_| (b'a' + (next_rand(&mut state) % 26) as u8) as char)
                .collect()
        })
        .collect()
}

fn make_haystack(words: &[String], len: usize) -> String {
    let mut state = 0xFEED_u64;
    let mut text = String::with_capacity(len + 16);
    while text.len() < len {
        if next_rand(&mut state) % 4 == 0 {
            let word = &words[(next_rand(&mut state) as usize) % words.len()];
            text.push_str(word);
        } else {
            text.push((b'a' + (next_rand(&mut state) % 26) as u8) as char);
        }
    }
    text
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_build(c: &mut Criterion) {
    let words = make_words(5_000);
    c.bench_function("build_5000_words", |b| {
        b.iter(|| std::hint::black_box(Automaton::new(&words).expect("build")));
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let words = make_words(5_000);
    let automaton = Automaton::new(&words).expect("build");
    let haystack = make_haystack(&words, 64 * 1024);
    c.bench_function("scan_64k_haystack", |b| {
        b.iter(|| std::hint::black_box(automaton.find_matches(&haystack)));
    });
}

fn bench_contains(c: &mut Criterion) {
    let words = make_words(5_000);
    let automaton = Automaton::new(&words).expect("build");
    c.bench_function("contains_5000_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(automaton.contains(word));
            }
        });
    });
}

criterion_group!(benches, bench_build, bench_find_matches, bench_contains);
criterion_main!(benches);
