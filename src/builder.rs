//! Vocabulary construction from pre-split token files.
//!
//! Each input line carries whitespace-separated tokens that are trained in
//! order. Limits from [`BuildConfig`] are applied once training is done.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::config::BuildConfig;
use crate::error::VocabError;
use crate::open::{UnkVocab, UNK};
use crate::state::VocabState;
use crate::table::{Vocab, Vocabulary};

/// Either variant, chosen at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyVocab {
    Closed(Vocab),
    Open(UnkVocab),
}

impl AnyVocab {
    pub fn new(open_vocab: bool) -> Self {
        if open_vocab {
            AnyVocab::Open(UnkVocab::new())
        } else {
            AnyVocab::Closed(Vocab::new())
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, AnyVocab::Open(_))
    }
}

impl Vocabulary for AnyVocab {
    fn index_of(&self, word: &str) -> Result<usize, VocabError> {
        match self {
            AnyVocab::Closed(v) => v.index_of(word),
            AnyVocab::Open(v) => v.index_of(word),
        }
    }

    fn train_word_times(&mut self, word: &str, times: u64) -> usize {
        match self {
            AnyVocab::Closed(v) => v.train_word_times(word, times),
            AnyVocab::Open(v) => v.train_word_times(word, times),
        }
    }

    fn words(&self) -> &[String] {
        match self {
            AnyVocab::Closed(v) => v.words(),
            AnyVocab::Open(v) => v.words(),
        }
    }

    fn count(&self, word: &str) -> Option<u64> {
        match self {
            AnyVocab::Closed(v) => v.count(word),
            AnyVocab::Open(v) => v.count(word),
        }
    }

    fn contains(&self, word: &str) -> bool {
        match self {
            AnyVocab::Closed(v) => v.contains(word),
            AnyVocab::Open(v) => v.contains(word),
        }
    }

    fn empty_like(&self) -> Self {
        AnyVocab::new(self.is_open())
    }

    /// An uncounted `<unk>` at index 0 marks an open vocabulary.
    fn from_state(state: VocabState) -> Result<Self, VocabError> {
        let open = state.index2word.first().map(String::as_str) == Some(UNK)
            && !state.counts.contains_key(UNK);
        if open {
            UnkVocab::from_state(state).map(AnyVocab::Open)
        } else {
            Vocab::from_state(state).map(AnyVocab::Closed)
        }
    }
}

impl fmt::Display for AnyVocab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyVocab::Closed(v) => fmt::Display::fmt(v, f),
            AnyVocab::Open(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// Prune `vocab` by the count and size limits in `config`.
pub fn apply_limits<V: Vocabulary>(vocab: &V, config: &BuildConfig) -> V {
    let pruned = vocab.prune_by_count(config.min_count);
    match config.max_size {
        Some(total) => pruned.prune_by_total(total),
        None => pruned,
    }
}

pub fn build_from_reader<R: BufRead>(
    reader: R,
    config: &BuildConfig,
) -> Result<AnyVocab, VocabError> {
    config.validate()?;
    let mut vocab = AnyVocab::new(config.open_vocab);
    let mut lines = 0usize;
    let mut tokens = 0usize;
    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            vocab.train_word(token);
            tokens += 1;
        }
        lines += 1;
    }
    info!(lines, tokens, size = vocab.len(), "trained vocabulary");
    let vocab = apply_limits(&vocab, config);
    info!(size = vocab.len(), "applied vocabulary limits");
    Ok(vocab)
}

pub fn build_from_path<P: AsRef<Path>>(
    path: P,
    config: &BuildConfig,
) -> Result<AnyVocab, VocabError> {
    let file = File::open(path)?;
    build_from_reader(BufReader::new(file), config)
}
