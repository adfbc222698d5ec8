use vocab_table::{state, UnkVocab, VocabError, Vocabulary, UNK, UNK_INDEX};

fn abc() -> UnkVocab {
    UnkVocab::from_words(["a", "bb", "ccc"])
}

#[test]
fn hello_world_scenario() {
    let mut v = UnkVocab::new();
    assert_eq!(v.words_to_indices(&["hello", "world"], true).unwrap(), vec![1, 2]);
    assert_eq!(
        v.words_to_indices(&["hello", "friend", "!"], false).unwrap(),
        vec![1, 0, 0]
    );
    assert_eq!(v.index_to_word(0).unwrap(), UNK);
    assert_eq!(v.len(), 3);
}

#[test]
fn word_to_index() {
    let v = abc();
    assert_eq!(v.index_of("bb").unwrap(), 2);
    assert_eq!(v.lookup_words(&["a", "ccc", "bb"]).unwrap(), vec![1, 3, 2]);
    assert_eq!(v.index_of("dddd").unwrap(), UNK_INDEX);
    assert_eq!(v.lookup_words(&["a", "dddd", "bb"]).unwrap(), vec![1, 0, 2]);
}

#[test]
fn index_to_word() {
    let v = abc();
    assert_eq!(v.index_to_word(2).unwrap(), "bb");
    assert_eq!(v.indices_to_words(&[1, 3, 2]).unwrap(), vec!["a", "ccc", "bb"]);
    assert!(matches!(
        v.index_to_word(4),
        Err(VocabError::IndexOutOfRange { index: 4, len: 4 })
    ));
    assert!(v.indices_to_words(&[0, 4]).is_err());
}

#[test]
fn display_and_len_include_sentinel() {
    assert_eq!(abc().to_string(), "UnkVocab(4)");
    assert_eq!(UnkVocab::new().to_string(), "UnkVocab(1)");
    assert!(!UnkVocab::new().is_empty());
}

#[test]
fn prune_keeps_sentinel_first() {
    let v = UnkVocab::from_words(["a", "b", "b", "c", "c", "c"]);
    let pruned = v.prune_by_count(2);
    assert_eq!(pruned.words(), [UNK, "b", "c"].map(String::from));
    assert_eq!(pruned.count("b"), Some(2));
    assert_eq!(pruned.count(UNK), None);
    assert_eq!(pruned.index_of("a").unwrap(), UNK_INDEX);

    let everything_gone = v.prune_by_count(100);
    assert_eq!(everything_gone, UnkVocab::new());

    let top = v.prune_by_total(1);
    assert_eq!(top.words(), [UNK, "c"].map(String::from));
}

#[test]
fn export_places_sentinel_without_count() {
    let v = abc();
    let value: serde_json::Value = serde_json::from_str(&state::to_json(&v).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "counts": { "a": 1, "bb": 1, "ccc": 1 },
            "index2word": ["<unk>", "a", "bb", "ccc"],
        })
    );
    let back: UnkVocab = state::from_json(&state::to_json(&v).unwrap()).unwrap();
    assert_eq!(back, v);
    assert_eq!(back.index_of("zzz").unwrap(), UNK_INDEX);
}

#[test]
fn closed_export_does_not_load_as_open() {
    let closed = vocab_table::Vocab::from_words(["a"]);
    let text = state::to_json(&closed).unwrap();
    assert!(matches!(
        state::from_json::<UnkVocab>(&text),
        Err(VocabError::InvalidArgument(_))
    ));
}
