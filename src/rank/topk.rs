// src/rank/topk.rs
//! Bounded min-heap selection of the K best-scored entries.
//!
//! Memory stays at O(K) no matter how many candidates are offered. Among
//! equal scores the entry offered first ranks higher, so output is stable
//! with respect to input order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A totally ordered score.
pub trait Score: Copy {
    fn cmp_score(&self, other: &Self) -> Ordering;
}

impl Score for f64 {
    /// IEEE 754 total order: NaN sorts above every number.
    fn cmp_score(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

macro_rules! int_score {
    ($($t:ty),*) => {
        $(impl Score for $t {
            fn cmp_score(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        })*
    };
}

int_score!(u32, u64, usize);

struct Entry<K, S> {
    key: K,
    score: S,
    seq: usize,
}

// Greater means better: higher score, then earlier insertion.
impl<K, S: Score> Ord for Entry<K, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp_score(&other.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<K, S: Score> PartialOrd for Entry<K, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, S: Score> PartialEq for Entry<K, S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K, S: Score> Eq for Entry<K, S> {}

/// Keeps the `k` best `(key, score)` pairs seen so far.
pub struct TopK<K, S> {
    k: usize,
    heap: BinaryHeap<Reverse<Entry<K, S>>>,
    seen: usize,
}

impl<K, S: Score> TopK<K, S> {
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            k,
            heap: BinaryHeap::with_capacity(k.saturating_add(1).min(1 << 16)),
            seen: 0,
        }
    }

    /// Offers a candidate; evicts the current minimum once over capacity.
    pub fn push(&mut self, key: K, score: S) {
        let seq = self.seen;
        self.seen += 1;

        self.heap.push(Reverse(Entry { key, score, seq }));
        if self.heap.len() > self.k {
            self.heap.pop();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of candidates offered so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Drains the selection, best first.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<(K, S)> {
        // Ascending `Reverse` order is descending entry order.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(e)| (e.key, e.score))
            .collect()
    }
}

impl<K, S: Score> Extend<(K, S)> for TopK<K, S> {
    fn extend<I: IntoIterator<Item = (K, S)>>(&mut self, iter: I) {
        for (key, score) in iter {
            self.push(key, score);
        }
    }
}

/// Returns the `min(k, n)` best candidates sorted by score, descending.
#[must_use]
pub fn top_k<K, S, I>(candidates: I, k: usize) -> Vec<(K, S)>
where
    S: Score,
    I: IntoIterator<Item = (K, S)>,
{
    let mut selector = TopK::new(k);
    selector.extend(candidates);
    selector.into_sorted_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_best_k() {
        let scores = [("a", 0.1), ("b", 0.5), ("c", 0.3), ("d", 0.9), ("e", 0.2)];
        let top = top_k(scores, 3);
        assert_eq!(top, vec![("d", 0.9), ("b", 0.5), ("c", 0.3)]);
    }

    #[test]
    fn test_k_larger_than_input() {
        let top = top_k([("x", 1u64), ("y", 3), ("z", 2)], 10);
        assert_eq!(top, vec![("y", 3), ("z", 2), ("x", 1)]);
    }

    #[test]
    fn test_zero_k() {
        let top = top_k([("x", 1.0)], 0);
        assert!(top.is_empty());

        let mut heap = TopK::new(0);
        heap.push("x", 3u32);
        heap.push("y", 7u32);
        assert!(heap.is_empty());
        assert_eq!(heap.seen(), 2);
    }

    #[test]
    fn test_ties_follow_insertion_order() {
        let items = [("first", 5u64), ("second", 5), ("third", 5), ("low", 1)];
        assert_eq!(
            top_k(items, 4),
            vec![("first", 5), ("second", 5), ("third", 5), ("low", 1)]
        );
        // Eviction drops the later-inserted of equal scores.
        assert_eq!(top_k(items, 2), vec![("first", 5), ("second", 5)]);
    }

    #[test]
    fn test_repeatable_and_input_untouched() {
        let scores = vec![0.25, 0.75, 0.5, 0.75];
        let run = || top_k(scores.iter().copied().enumerate(), 2);
        let first = run();
        assert_eq!(first, run());
        assert_eq!(first, vec![(1, 0.75), (3, 0.75)]);
        assert_eq!(scores, vec![0.25, 0.75, 0.5, 0.75]);
    }

    #[test]
    fn test_memory_bounded_by_k() {
        let mut selector = TopK::new(4);
        for i in 0..10_000u32 {
            selector.push(i, i);
            assert!(selector.len() <= 4);
        }
        assert_eq!(selector.seen(), 10_000);
        let keys: Vec<u32> = selector.into_sorted_vec().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![9_999, 9_998, 9_997, 9_996]);
    }
}
