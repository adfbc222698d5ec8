use quickcheck::quickcheck;
use vocab_table::{AnyVocab, UnkVocab, Vocab, VocabState, Vocabulary};

quickcheck! {
    fn closed_state_roundtrip(words: Vec<String>) -> bool {
        let v = Vocab::from_words(&words);
        Vocab::from_state(v.to_state()).map_or(false, |back| back == v)
    }

    fn open_state_roundtrip(words: Vec<String>) -> bool {
        let v = UnkVocab::from_words(&words);
        let back = AnyVocab::from_state(v.to_state());
        matches!(back, Ok(AnyVocab::Open(ref b)) if *b == v)
    }

    fn dropping_a_count_is_rejected(words: Vec<String>) -> bool {
        let mut state: VocabState = Vocab::from_words(&words).to_state();
        match state.index2word.first().cloned() {
            Some(first) => {
                state.counts.remove(&first);
                Vocab::from_state(state).is_err()
            }
            None => Vocab::from_state(state).map_or(false, |v| v.is_empty()),
        }
    }
}
