use crate::error::VocabError;

/// Parameters for building a vocabulary from token files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Reserve `<unk>` at index 0 and map unknown words to it.
    pub open_vocab: bool,
    /// Words seen fewer times are dropped after training.
    pub min_count: u64,
    /// Keep at most this many countable words, most frequent first.
    pub max_size: Option<usize>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            open_vocab: false,
            min_count: 1,
            max_size: None,
        }
    }
}

impl BuildConfig {
    pub fn validate(&self) -> Result<(), VocabError> {
        if self.max_size == Some(0) {
            return Err(VocabError::InvalidArgument(
                "max_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_everything() {
        let config = BuildConfig::default();
        assert!(!config.open_vocab);
        assert_eq!(config.min_count, 1);
        assert_eq!(config.max_size, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_max_size_is_rejected() {
        let config = BuildConfig {
            max_size: Some(0),
            ..BuildConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(VocabError::InvalidArgument(_))
        ));
    }
}
