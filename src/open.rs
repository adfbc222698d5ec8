//! Open vocabulary: unknown words map to a reserved `<unk>` slot.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VocabError;
use crate::state::VocabState;
use crate::table::{Vocab, Vocabulary};

/// Out-of-vocabulary sentinel text.
pub const UNK: &str = "<unk>";
/// Index permanently held by [`UNK`].
pub const UNK_INDEX: usize = 0;

/// A [`Vocab`] whose index 0 is reserved for [`UNK`].
///
/// Non-training lookups of unknown words resolve to [`UNK_INDEX`] instead of
/// failing. The sentinel is never counted and survives every prune.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "VocabState", try_from = "VocabState")]
pub struct UnkVocab {
    base: Vocab,
}

impl UnkVocab {
    pub fn new() -> Self {
        let mut base = Vocab::new();
        base.reserve(UNK);
        Self { base }
    }

    /// Build a table by training every word in order, after the sentinel.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }
}

impl Default for UnkVocab {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary for UnkVocab {
    fn index_of(&self, word: &str) -> Result<usize, VocabError> {
        match self.base.index_of(word) {
            Err(VocabError::KeyNotFound(_)) => Ok(UNK_INDEX),
            found => found,
        }
    }

    fn train_word_times(&mut self, word: &str, times: u64) -> usize {
        if word == UNK {
            return UNK_INDEX;
        }
        self.base.train_word_times(word, times)
    }

    fn words(&self) -> &[String] {
        self.base.words()
    }

    fn count(&self, word: &str) -> Option<u64> {
        self.base.count(word)
    }

    fn contains(&self, word: &str) -> bool {
        self.base.contains(word)
    }

    fn empty_like(&self) -> Self {
        UnkVocab::new()
    }

    fn from_state(state: VocabState) -> Result<Self, VocabError> {
        let base = Vocab::from_state_reserving(state, Some(UNK))?;
        Ok(Self { base })
    }
}

impl fmt::Display for UnkVocab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnkVocab({})", self.len())
    }
}

impl<S: AsRef<str>> FromIterator<S> for UnkVocab {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocab = UnkVocab::new();
        for word in iter {
            vocab.train_word(word.as_ref());
        }
        vocab
    }
}

impl From<UnkVocab> for VocabState {
    fn from(vocab: UnkVocab) -> Self {
        vocab.to_state()
    }
}

impl TryFrom<VocabState> for UnkVocab {
    type Error = VocabError;

    fn try_from(state: VocabState) -> Result<Self, Self::Error> {
        UnkVocab::from_state(state)
    }
}
