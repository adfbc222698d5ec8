use honggfuzz::fuzz;
use vocab_table::{state, AnyVocab, Vocabulary};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(text) = std::str::from_utf8(data) else {
                return;
            };
            if let Ok(vocab) = state::from_json::<AnyVocab>(text) {
                let again: AnyVocab = state::from_json(&state::to_json(&vocab).unwrap()).unwrap();
                assert_eq!(again, vocab);
                for i in 0..vocab.len() {
                    let word = vocab.index_to_word(i).unwrap();
                    assert_eq!(vocab.index_of(word).unwrap(), i);
                }
            }
        });
    }
}
