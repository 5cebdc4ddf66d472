use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tailtrie::DoubleArrayTrie;

// ── Hand-rolled LCG ─────────────────────────────────────────────────────────

struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0
    }
    /// Returns a value in [0, bound).
    fn next_range(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

// ── Lowercase word lists ────────────────────────────────────────────────────

fn generate_words(n: usize, seed: u64) -> Vec<String> {
    let mut rng = Lcg::new(seed);
    let mut set = std::collections::BTreeSet::new();
    while set.len() < n {
        let len = (rng.next_range(7) + 2) as usize; // 2..=8
        let word: String = (0..len)
            .map(|_| (b'a' + rng.next_range(26) as u8) as char)
            .collect();
        set.insert(word);
    }
    set.into_iter().collect()
}

fn build_trie(words: &[String]) -> DoubleArrayTrie {
    let mut trie = DoubleArrayTrie::new();
    for w in words {
        trie.insert(w).unwrap();
    }
    trie
}

// ── Benchmarks ──────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    let words = generate_words(10_000, 42);
    c.bench_function("insert_10k", |b| {
        b.iter(|| build_trie(black_box(&words)));
    });
}

fn bench_contains(c: &mut Criterion) {
    let words = generate_words(10_000, 42);
    let trie = build_trie(&words);

    let mut rng = Lcg::new(123);
    let hit_words: Vec<&String> = (0..1000)
        .map(|_| &words[rng.next_range(words.len() as u64) as usize])
        .collect();
    let miss_words: Vec<String> = (0..1000)
        .map(|_| {
            // Nine-letter probes; the dictionary stops at eight.
            let len = 9;
            (0..len)
                .map(|_| (b'a' + rng.next_range(26) as u8) as char)
                .collect()
        })
        .collect();

    c.bench_function("contains_hit_1k", |b| {
        b.iter(|| {
            for w in &hit_words {
                black_box(trie.contains(black_box(w)));
            }
        });
    });

    c.bench_function("contains_miss_1k", |b| {
        b.iter(|| {
            for w in &miss_words {
                black_box(trie.contains(black_box(w)));
            }
        });
    });
}

fn bench_starts_with(c: &mut Criterion) {
    let words = generate_words(10_000, 42);
    let trie = build_trie(&words);

    let mut rng = Lcg::new(777);
    let prefixes: Vec<String> = (0..100)
        .map(|_| {
            (0..2)
                .map(|_| (b'a' + rng.next_range(26) as u8) as char)
                .collect()
        })
        .collect();

    c.bench_function("starts_with_2char_prefix", |b| {
        b.iter(|| {
            for p in &prefixes {
                black_box(trie.starts_with(black_box(p)));
            }
        });
    });
}

fn bench_match_text(c: &mut Criterion) {
    let words = generate_words(10_000, 42);
    let trie = build_trie(&words);

    // A random 200-letter text to scan.
    let mut rng = Lcg::new(999);
    let text: String = (0..200)
        .map(|_| (b'a' + rng.next_range(26) as u8) as char)
        .collect();

    c.bench_function("match_text_200", |b| {
        b.iter(|| black_box(trie.match_text(black_box(&text))));
    });
}

fn bench_query(c: &mut Criterion) {
    let words = generate_words(10_000, 42);
    let trie = build_trie(&words);

    let mut rng = Lcg::new(456);
    let expressions: Vec<String> = (0..100)
        .map(|_| {
            (0..5)
                .map(|_| {
                    if rng.next_range(5) == 0 {
                        '?'
                    } else {
                        (b'a' + rng.next_range(26) as u8) as char
                    }
                })
                .collect()
        })
        .collect();

    c.bench_function("query_5char_wildcards", |b| {
        b.iter(|| {
            for e in &expressions {
                black_box(trie.query(black_box(e)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_contains,
    bench_starts_with,
    bench_match_text,
    bench_query,
);
criterion_main!(benches);
