//! Word/index table with occurrence counts.
//!
//! [`Vocabulary`] is the capability shared by the closed [`Vocab`] and the
//! open [`UnkVocab`](crate::UnkVocab). Implementors supply the storage and
//! the miss policy; lookups over batches, pruning and state export are
//! provided on top of that.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::VocabError;
use crate::state::VocabState;

/// Bidirectional token table with frequency counts.
///
/// Indices are dense: `index_to_word(i)` succeeds for every `i < len()`.
pub trait Vocabulary: Sized {
    /// Non-training lookup. What happens on a miss is up to the variant.
    fn index_of(&self, word: &str) -> Result<usize, VocabError>;

    /// Insert `word` if unknown and add `times` to its count.
    ///
    /// `times == 0` still assigns an index. Reserved words are never counted.
    fn train_word_times(&mut self, word: &str, times: u64) -> usize;

    /// Words in index order.
    fn words(&self) -> &[String];

    /// Occurrence count of `word`, or `None` when the word is unknown or
    /// reserved.
    fn count(&self, word: &str) -> Option<u64>;

    fn contains(&self, word: &str) -> bool;

    /// A fresh empty table of the same variant.
    fn empty_like(&self) -> Self;

    /// Rebuild a table from exported state, reproducing its exact indices.
    fn from_state(state: VocabState) -> Result<Self, VocabError>;

    fn train_word(&mut self, word: &str) -> usize {
        self.train_word_times(word, 1)
    }

    /// Lookup with optional training.
    fn word_to_index(&mut self, word: &str, train: bool) -> Result<usize, VocabError> {
        if train {
            Ok(self.train_word(word))
        } else {
            self.index_of(word)
        }
    }

    /// Batch form of [`word_to_index`](Self::word_to_index). Output order
    /// follows input order.
    ///
    /// Tokens before a failing token stay trained.
    fn words_to_indices<S: AsRef<str>>(
        &mut self,
        words: &[S],
        train: bool,
    ) -> Result<Vec<usize>, VocabError> {
        words
            .iter()
            .map(|w| self.word_to_index(w.as_ref(), train))
            .collect()
    }

    /// Batch form of [`index_of`](Self::index_of).
    fn lookup_words<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<usize>, VocabError> {
        words.iter().map(|w| self.index_of(w.as_ref())).collect()
    }

    fn index_to_word(&self, index: usize) -> Result<&str, VocabError> {
        let words = self.words();
        words
            .get(index)
            .map(String::as_str)
            .ok_or(VocabError::IndexOutOfRange {
                index,
                len: words.len(),
            })
    }

    fn indices_to_words(&self, indices: &[usize]) -> Result<Vec<&str>, VocabError> {
        indices.iter().map(|&i| self.index_to_word(i)).collect()
    }

    /// Number of distinct words, reserved slots included.
    fn len(&self) -> usize {
        self.words().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Countable words in index order with their counts.
    fn counted_words(&self) -> Vec<(&str, u64)> {
        self.words()
            .iter()
            .filter_map(|w| self.count(w).map(|c| (w.as_str(), c)))
            .collect()
    }

    /// The `n` most frequent countable words, highest count first. Ties keep
    /// index order.
    fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked = self.counted_words();
        // stable sort keeps index order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// New table holding only words seen at least `min_count` times.
    ///
    /// Survivors keep their counts and are re-indexed in their original
    /// order. `self` is left untouched.
    fn prune_by_count(&self, min_count: u64) -> Self {
        let mut pruned = self.empty_like();
        for (word, count) in self.counted_words() {
            if count >= min_count {
                pruned.train_word_times(word, count);
            }
        }
        debug!(
            min_count,
            before = self.len(),
            after = pruned.len(),
            "pruned vocabulary by count"
        );
        pruned
    }

    /// New table holding only the `total` most frequent words, in their
    /// original order. Reserved words are kept and do not count toward
    /// `total`.
    fn prune_by_total(&self, total: usize) -> Self {
        let keep: HashSet<&str> = self
            .most_common(total)
            .into_iter()
            .map(|(word, _)| word)
            .collect();
        let mut pruned = self.empty_like();
        for (word, count) in self.counted_words() {
            if keep.contains(word) {
                pruned.train_word_times(word, count);
            }
        }
        debug!(
            total,
            before = self.len(),
            after = pruned.len(),
            "pruned vocabulary by total"
        );
        pruned
    }

    /// Whether both tables know the same words, ignoring index order.
    fn contains_same_content(&self, other: &Self, same_counts: bool) -> bool {
        self.len() == other.len()
            && self.words().iter().all(|w| {
                other.contains(w) && (!same_counts || self.count(w) == other.count(w))
            })
    }

    fn to_state(&self) -> VocabState {
        VocabState {
            counts: self
                .counted_words()
                .into_iter()
                .map(|(w, c)| (w.to_string(), c))
                .collect(),
            index2word: self.words().to_vec(),
        }
    }
}

/// Closed vocabulary: non-training lookups of unknown words fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "VocabState", try_from = "VocabState")]
pub struct Vocab {
    word_of_index: Vec<String>,
    index_of_word: HashMap<String, usize>,
    count_of_word: HashMap<String, u64>,
}

impl Vocab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table by training every word in order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    /// Assign `word` an index without giving it a count.
    pub(crate) fn reserve(&mut self, word: &str) -> usize {
        self.insert(word)
    }

    fn insert(&mut self, word: &str) -> usize {
        if let Some(&index) = self.index_of_word.get(word) {
            return index;
        }
        let index = self.word_of_index.len();
        self.word_of_index.push(word.to_string());
        self.index_of_word.insert(word.to_string(), index);
        index
    }

    /// Rebuild from state, requiring `reserved` (if any) at index 0 with no
    /// count.
    pub(crate) fn from_state_reserving(
        state: VocabState,
        reserved: Option<&str>,
    ) -> Result<Self, VocabError> {
        let VocabState {
            mut counts,
            index2word,
        } = state;
        let mut vocab = Vocab::new();
        let mut words = index2word.iter();

        if let Some(reserved) = reserved {
            match words.next() {
                Some(first) if first == reserved => {}
                Some(first) => {
                    return Err(VocabError::InvalidArgument(format!(
                        "index 0 must hold {reserved:?}, found {first:?}"
                    )))
                }
                None => {
                    return Err(VocabError::InvalidArgument(format!(
                        "index2word is empty, expected {reserved:?} at index 0"
                    )))
                }
            }
            if counts.contains_key(reserved) {
                return Err(VocabError::InvalidArgument(format!(
                    "reserved word {reserved:?} must not have a count"
                )));
            }
            vocab.reserve(reserved);
        }

        for word in words {
            let expected = vocab.len();
            if vocab.insert(word) != expected {
                return Err(VocabError::InvalidArgument(format!(
                    "duplicate word {word:?} in index2word"
                )));
            }
            let count = counts.remove(word).ok_or_else(|| {
                VocabError::InvalidArgument(format!("no count for word {word:?}"))
            })?;
            vocab.count_of_word.insert(word.clone(), count);
        }

        if let Some(stray) = counts.keys().next() {
            return Err(VocabError::InvalidArgument(format!(
                "count given for {stray:?}, which is missing from index2word"
            )));
        }

        debug!(size = vocab.len(), "imported vocabulary state");
        Ok(vocab)
    }
}

impl Vocabulary for Vocab {
    fn index_of(&self, word: &str) -> Result<usize, VocabError> {
        self.index_of_word
            .get(word)
            .copied()
            .ok_or_else(|| VocabError::KeyNotFound(word.to_string()))
    }

    fn train_word_times(&mut self, word: &str, times: u64) -> usize {
        let index = self.insert(word);
        *self.count_of_word.entry(word.to_string()).or_insert(0) += times;
        trace!(word, index, times, "trained word");
        index
    }

    fn words(&self) -> &[String] {
        &self.word_of_index
    }

    fn count(&self, word: &str) -> Option<u64> {
        self.count_of_word.get(word).copied()
    }

    fn contains(&self, word: &str) -> bool {
        self.index_of_word.contains_key(word)
    }

    fn empty_like(&self) -> Self {
        Vocab::new()
    }

    fn from_state(state: VocabState) -> Result<Self, VocabError> {
        Vocab::from_state_reserving(state, None)
    }
}

impl PartialEq for Vocab {
    fn eq(&self, other: &Self) -> bool {
        self.word_of_index == other.word_of_index && self.count_of_word == other.count_of_word
    }
}

impl Eq for Vocab {}

impl fmt::Display for Vocab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vocab({})", self.len())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocab {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocab = Vocab::new();
        for word in iter {
            vocab.train_word(word.as_ref());
        }
        vocab
    }
}

impl From<Vocab> for VocabState {
    fn from(vocab: Vocab) -> Self {
        vocab.to_state()
    }
}

impl TryFrom<VocabState> for Vocab {
    type Error = VocabError;

    fn try_from(state: VocabState) -> Result<Self, Self::Error> {
        Vocab::from_state(state)
    }
}
