use crate::kernels::anagram::{AnagramIndex, DictionaryFold};
use crate::scanner::Scanner;

/// Incremental builder for an [`AnagramIndex`].
///
/// Collects dictionary words one at a time or in batches, then freezes them
/// into a read-only index.
#[derive(Default)]
pub struct AnagramIndexBuilder {
    words: Vec<String>,
}

impl AnagramIndexBuilder {
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.words.push(word.into());
        self
    }

    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> AnagramIndex {
        Scanner::new(DictionaryFold).run(self.words.iter())
    }
}
