//! Bidirectional word/index tables with frequency counts and pruning.
//!
//! [`Vocab`] is a closed vocabulary: looking up an unseen word without
//! training fails. [`UnkVocab`] reserves index 0 for [`UNK`] and maps unseen
//! words there. Both implement [`Vocabulary`].

pub mod builder;
pub mod config;
pub mod error;
pub mod io_utils;
pub mod open;
pub mod padding;
pub mod state;
pub mod table;

pub use builder::{apply_limits, build_from_path, build_from_reader, AnyVocab};
pub use config::BuildConfig;
pub use error::VocabError;
pub use open::{UnkVocab, UNK, UNK_INDEX};
pub use padding::{pad_batch, unpad_batch, PaddedBatch};
pub use state::VocabState;
pub use table::{Vocab, Vocabulary};
