//! Exported table state and its on-disk forms.
//!
//! JSON is the stable interchange format:
//!
//! ```json
//! { "counts": { "hello": 2 }, "index2word": ["hello"] }
//! ```
//!
//! Position in `index2word` is the index. Reserved words (the open
//! vocabulary's `<unk>`) appear in `index2word` but never in `counts`.
//! Binary snapshots encode the same structure with bincode.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VocabError;
use crate::table::Vocabulary;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VocabState {
    /// Occurrence count per countable word.
    pub counts: BTreeMap<String, u64>,
    /// Words in index order.
    pub index2word: Vec<String>,
}

pub fn to_json<V: Vocabulary>(vocab: &V) -> Result<String, VocabError> {
    Ok(serde_json::to_string_pretty(&vocab.to_state())?)
}

pub fn from_json<V: Vocabulary>(text: &str) -> Result<V, VocabError> {
    let state: VocabState = serde_json::from_str(text)?;
    V::from_state(state)
}

pub fn save_json<V: Vocabulary, P: AsRef<Path>>(vocab: &V, path: P) -> Result<(), VocabError> {
    fs::write(path, to_json(vocab)?)?;
    Ok(())
}

pub fn load_json<V: Vocabulary, P: AsRef<Path>>(path: P) -> Result<V, VocabError> {
    let text = fs::read_to_string(path)?;
    from_json(&text)
}

/// Serialize the table state to disk with bincode.
pub fn save<V: Vocabulary, P: AsRef<Path>>(vocab: &V, path: P) -> Result<(), VocabError> {
    let data = bincode::serialize(&vocab.to_state())?;
    fs::write(path, data)?;
    Ok(())
}

/// Load a bincode snapshot written by [`save`].
pub fn load<V: Vocabulary, P: AsRef<Path>>(path: P) -> Result<V, VocabError> {
    let data = fs::read(path)?;
    let state: VocabState = bincode::deserialize(&data)?;
    V::from_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UnkVocab, Vocab};

    #[test]
    fn json_layout_matches_interchange_format() {
        let v = Vocab::from_words(["hello", "world", "hello"]);
        let value: serde_json::Value = serde_json::from_str(&to_json(&v).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "counts": { "hello": 2, "world": 1 },
                "index2word": ["hello", "world"],
            })
        );
    }

    #[test]
    fn sentinel_has_no_count_in_export() {
        let v = UnkVocab::from_words(["a"]);
        let state = v.to_state();
        assert_eq!(state.index2word, vec!["<unk>".to_string(), "a".to_string()]);
        assert_eq!(state.counts.len(), 1);
    }

    #[test]
    fn missing_field_is_invalid_argument() {
        let err = from_json::<Vocab>(r#"{"index2word": ["a"]}"#).unwrap_err();
        assert!(matches!(err, VocabError::InvalidArgument(_)));
        let err = from_json::<Vocab>(r#"{"counts": {}}"#).unwrap_err();
        assert!(matches!(err, VocabError::InvalidArgument(_)));
    }

    #[test]
    fn extra_field_is_invalid_argument() {
        let err =
            from_json::<Vocab>(r#"{"counts": {}, "index2word": [], "extra": 1}"#).unwrap_err();
        assert!(matches!(err, VocabError::InvalidArgument(_)));
    }

    #[test]
    fn binary_snapshot_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.bin");
        let v = UnkVocab::from_words(["x", "y", "x"]);
        save(&v, &path).unwrap();
        let loaded: UnkVocab = load(&path).unwrap();
        assert_eq!(v, loaded);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json::<Vocab, _>(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, VocabError::Io(_)));
    }
}
