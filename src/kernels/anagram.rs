//! Anagram frequency counting against a fixed dictionary.
//!
//! The dictionary is folded once into a [`FrequencyTable`] keyed by
//! canonical forms; each query is then a single canonicalize-and-look-up.
//! Words are case- and whitespace-sensitive throughout, and duplicates in
//! the dictionary inflate the matching counts.

use crate::canonical::canonical_form;
use crate::scanner::Scanner;
use crate::table::FrequencyTable;
use crate::traits::ScanKernel;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Dictionary fold kernel: canonicalize and count each word.
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryFold;

impl<S: AsRef<str>> ScanKernel<S> for DictionaryFold {
    type Acc = FrequencyTable;
    type Output = AnagramIndex;

    fn init(&self) -> Self::Acc {
        FrequencyTable::new()
    }

    fn step(&self, word: S, acc: &mut Self::Acc) {
        acc.bump(canonical_form(word.as_ref()));
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        AnagramIndex { table: acc }
    }
}

/// Read-only anagram index over a dictionary.
///
/// Built once, then shared freely: queries never mutate the index, so a
/// single instance can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct AnagramIndex {
    pub(crate) table: FrequencyTable,
}

impl AnagramIndex {
    /// Build the index by folding every dictionary word into the table.
    pub fn from_words<S: AsRef<str>>(dictionary: &[S]) -> Self {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("anagram_index_build", words = dictionary.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        Scanner::new(DictionaryFold).run(dictionary.iter())
    }

    /// Number of dictionary words sharing `query`'s canonical form.
    pub fn count(&self, query: &str) -> u32 {
        self.table.count(&canonical_form(query))
    }

    /// Anagram counts for a batch of queries, order-preserving.
    #[cfg(feature = "parallel")]
    pub fn count_all<S: AsRef<str> + Sync>(&self, queries: &[S]) -> Vec<u32> {
        queries.par_iter().map(|q| self.count(q.as_ref())).collect()
    }

    /// Anagram counts for a batch of queries, order-preserving.
    #[cfg(not(feature = "parallel"))]
    pub fn count_all<S: AsRef<str>>(&self, queries: &[S]) -> Vec<u32> {
        queries.iter().map(|q| self.count(q.as_ref())).collect()
    }

    /// Number of distinct canonical forms in the index.
    pub fn distinct_forms(&self) -> usize {
        self.table.len()
    }
}

/// Build an index from `dictionary` and answer all `queries` in order.
///
/// The result has exactly `queries.len()` entries; an empty dictionary
/// yields all zeros.
pub fn count_anagrams<S, Q>(dictionary: &[S], queries: &[Q]) -> Vec<u32>
where
    S: AsRef<str>,
    Q: AsRef<str>,
{
    let index = AnagramIndex::from_words(dictionary);
    queries.iter().map(|q| index.count(q.as_ref())).collect()
}
