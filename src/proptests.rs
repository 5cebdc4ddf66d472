//! Model-based property tests for the construction engine.
//!
//! Arbitrary insertion sequences are checked against a `BTreeSet` model,
//! and the structural invariants of the double array are audited after
//! every mutation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::{DoubleArrayTrie, END_MARKER};

/// Checks the global invariants of the double array, the tail store and
/// the free-slot index.
fn audit(trie: &DoubleArrayTrie) {
    let len = trie.nodes.len() as i32;
    let da_size = trie.da_size();
    assert!(da_size <= len, "DA_SIZE {da_size} exceeds array length {len}");
    let end_offset = trie.alphabet.end_offset();

    for i in 2..len {
        let node = &trie.nodes[i as usize];
        if node.check != 0 {
            // Occupied: the parent is occupied and owns this slot under
            // exactly one offset.
            let p = node.check;
            assert!(p >= 1 && p < len, "parent {p} of {i} out of range");
            assert!(
                p == 1 || trie.nodes[p as usize].check != 0,
                "parent {p} of {i} is vacant"
            );
            let pb = trie.nodes[p as usize].base;
            assert!(pb > 0, "parent {p} of {i} is not branching");
            let c = i - pb;
            assert!(
                c >= 1 && c <= end_offset,
                "slot {i} not addressable from parent {p}"
            );
            assert!(i < da_size, "occupied slot {i} outside DA_SIZE {da_size}");
        }
        if node.base < 0 {
            assert!(node.check != 0, "leaf {i} has no parent");
            let tp = -node.base;
            assert!(
                tp >= 1 && (tp as usize) < trie.tails.len(),
                "leaf {i} points at invalid tail slot {tp}"
            );
            if let Some(s) = &trie.tails[tp as usize] {
                assert!(s.ends_with(END_MARKER), "tail {tp} lacks the endmarker");
            }
        }
    }

    let expected: BTreeSet<i32> = (2..len)
        .filter(|&i| trie.nodes[i as usize].check == 0)
        .collect();
    assert_eq!(trie.free, expected, "free-slot index out of sync");
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop_oneof![
        // A tiny alphabet provokes dense collisions and relocations.
        prop::collection::vec("[a-e]{0,8}", 0..32),
        // The full range exercises high offsets and the endmarker boundary.
        prop::collection::vec("[a-z]{0,12}", 0..24),
    ]
}

proptest! {
    #[test]
    fn prop_invariants_and_membership(words in words_strategy()) {
        let mut trie = DoubleArrayTrie::new();
        let mut model = BTreeSet::new();
        for w in &words {
            trie.insert(w).unwrap();
            model.insert(w.clone());
            audit(&trie);
        }

        for w in &model {
            prop_assert!(trie.contains(w), "lost {w:?}");
        }
        // Probe around the stored set: extensions and proper prefixes.
        for w in &words {
            let longer = format!("{w}a");
            prop_assert_eq!(trie.contains(&longer), model.contains(&longer));
            for k in 0..w.chars().count() {
                let prefix: String = w.chars().take(k).collect();
                prop_assert_eq!(trie.contains(&prefix), model.contains(&prefix));
            }
        }
    }

    #[test]
    fn prop_insert_idempotent(words in words_strategy()) {
        let mut trie = DoubleArrayTrie::new();
        for w in &words {
            trie.insert(w).unwrap();
        }
        let snapshot = trie.clone();
        for w in &words {
            trie.insert(w).unwrap();
        }
        prop_assert_eq!(&trie.nodes, &snapshot.nodes);
        prop_assert_eq!(&trie.tails, &snapshot.tails);
        prop_assert_eq!(&trie.free, &snapshot.free);
    }

    #[test]
    fn prop_membership_is_order_independent(words in words_strategy()) {
        let mut forward = DoubleArrayTrie::new();
        let mut backward = DoubleArrayTrie::new();
        for w in &words {
            forward.insert(w).unwrap();
        }
        for w in words.iter().rev() {
            backward.insert(w).unwrap();
        }
        audit(&forward);
        audit(&backward);
        for w in &words {
            prop_assert!(forward.contains(w) && backward.contains(w));
            let longer = format!("{w}b");
            prop_assert_eq!(forward.contains(&longer), backward.contains(&longer));
            for k in 0..w.chars().count() {
                let prefix: String = w.chars().take(k).collect();
                prop_assert_eq!(forward.contains(&prefix), backward.contains(&prefix));
            }
        }
    }

    #[test]
    fn prop_starts_with_matches_model(words in words_strategy()) {
        let mut trie = DoubleArrayTrie::new();
        let mut model = BTreeSet::new();
        for w in &words {
            trie.insert(w).unwrap();
            model.insert(w.clone());
        }

        let mut prefixes = BTreeSet::new();
        for w in &model {
            for k in 0..=w.chars().count() {
                prefixes.insert(w.chars().take(k).collect::<String>());
            }
        }
        for p in &prefixes {
            let mut got = trie.starts_with(p);
            got.sort();
            let want: Vec<String> = model.iter().filter(|w| w.starts_with(p.as_str())).cloned().collect();
            prop_assert_eq!(got, want, "prefix {:?}", p);
        }
    }

    #[test]
    fn prop_match_text_matches_model(words in words_strategy()) {
        let mut trie = DoubleArrayTrie::new();
        let mut model = BTreeSet::new();
        for w in &words {
            trie.insert(w).unwrap();
            model.insert(w.clone());
        }

        let text: String = words.concat();
        let tchars: Vec<char> = text.chars().collect();
        let mut want = vec![];
        for i in 0..tchars.len() {
            let mut here: Vec<String> = model
                .iter()
                .filter(|w| !w.is_empty())
                .filter(|w| {
                    let wchars: Vec<char> = w.chars().collect();
                    tchars[i..].starts_with(&wchars)
                })
                .cloned()
                .collect();
            // Walking a single start position reports words shortest first.
            here.sort_by_key(|w| w.chars().count());
            want.extend(here);
        }
        prop_assert_eq!(trie.match_text(&text), want);
    }

    #[test]
    fn prop_trim_preserves_membership(words in words_strategy()) {
        let mut trie = DoubleArrayTrie::new();
        for w in &words {
            trie.insert(w).unwrap();
        }
        trie.trim_to_size();
        audit(&trie);
        for w in &words {
            prop_assert!(trie.contains(w));
        }
        // The trie keeps accepting insertions after trimming.
        let mut extended: Vec<String> = words.iter().map(|w| format!("{w}c")).collect();
        extended.sort();
        extended.dedup();
        for w in &extended {
            trie.insert(w).unwrap();
            audit(&trie);
        }
        for w in &extended {
            prop_assert!(trie.contains(w));
        }
    }
}
