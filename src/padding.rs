//! Rectangular index batches for variable-length sentences.

use crate::error::VocabError;
use crate::table::Vocabulary;

/// Output of [`pad_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedBatch {
    /// One row per sentence, all of equal length.
    pub indices: Vec<Vec<usize>>,
    /// Length of each row before fill.
    pub lengths: Vec<usize>,
}

/// Index of `pad`, which must already be known unless training.
///
/// Open vocabularies would map an unknown pad to `<unk>`, making fill slots
/// indistinguishable from unknown words, so a missing pad is always an error.
fn pad_index_of<V: Vocabulary>(vocab: &V, pad: &str) -> Result<usize, VocabError> {
    if !vocab.contains(pad) {
        return Err(VocabError::KeyNotFound(pad.to_string()));
    }
    vocab.index_of(pad)
}

/// Index every sentence and right-fill the rows with the index of `pad`.
///
/// With `end_pad` each sentence gets one trailing `pad` before filling, and
/// that pad is part of the row's length. Fill slots are never counted.
pub fn pad_batch<V, T, S>(
    vocab: &mut V,
    sentences: &[T],
    pad: &str,
    train: bool,
    end_pad: bool,
) -> Result<PaddedBatch, VocabError>
where
    V: Vocabulary,
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    let known_pad = if train {
        None
    } else {
        Some(pad_index_of(vocab, pad)?)
    };

    let mut indices = Vec::with_capacity(sentences.len());
    for sentence in sentences {
        let mut row = vocab.words_to_indices(sentence.as_ref(), train)?;
        if end_pad {
            row.push(vocab.word_to_index(pad, train)?);
        }
        indices.push(row);
    }

    let pad_index = match known_pad {
        Some(index) => index,
        None => vocab.train_word_times(pad, 0),
    };

    let lengths: Vec<usize> = indices.iter().map(Vec::len).collect();
    let width = lengths.iter().copied().max().unwrap_or(0);
    for row in &mut indices {
        row.resize(width, pad_index);
    }
    Ok(PaddedBatch { indices, lengths })
}

/// Map rows back to words, cutting each row at its first `pad`.
pub fn unpad_batch<V, T>(vocab: &V, rows: &[T], pad: &str) -> Result<Vec<Vec<String>>, VocabError>
where
    V: Vocabulary,
    T: AsRef<[usize]>,
{
    let pad_index = pad_index_of(vocab, pad)?;
    rows.iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .take_while(|&&i| i != pad_index)
                .map(|&i| vocab.index_to_word(i).map(str::to_string))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}
