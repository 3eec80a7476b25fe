use crate::{vocab::check_freq_threshold, Error, Result, Vocab};
use std::fmt;

/// 分词器，训练前后是两种状态。
///
/// 依赖词表的操作在 [`Tokeniser::Untrained`] 上返回 [`Error::Untrained`]；
/// 已经持有 [`Vocab`] 的调用方可以直接使用其上的同名方法。
#[derive(Clone, Default, Debug)]
pub enum Tokeniser {
    #[default]
    Untrained,
    Trained(Vocab),
}

impl Tokeniser {
    #[inline]
    pub fn new() -> Self {
        Self::Untrained
    }

    /// 用新语料替换整个词表。失败时保留原有状态。
    pub fn train(&mut self, corpus: &str) -> Result<()> {
        *self = Self::Trained(Vocab::train(corpus)?);
        Ok(())
    }

    #[inline]
    pub fn is_trained(&self) -> bool {
        matches!(self, Self::Trained(_))
    }

    #[inline]
    pub fn vocab(&self) -> Option<&Vocab> {
        match self {
            Self::Trained(vocab) => Some(vocab),
            Self::Untrained => None,
        }
    }

    /// 与训练状态无关的基础切分，见 [`crate::tokenise_on_punctuation`]。
    #[inline]
    pub fn tokenise_on_punctuation<'t>(&self, text: &'t str) -> Vec<&'t str> {
        crate::tokenise_on_punctuation(text)
    }

    pub fn tokenise<'t>(&self, text: &'t str, use_unk: bool) -> Result<Vec<&'t str>> {
        Ok(self.trained("tokenise")?.tokenise(text, use_unk))
    }

    pub fn tokenise_with_count_threshold<'t>(
        &self,
        text: &'t str,
        threshold: usize,
        use_unk: bool,
    ) -> Result<Vec<&'t str>> {
        Ok(self
            .trained("tokenise_with_count_threshold")?
            .tokenise_with_count_threshold(text, threshold, use_unk))
    }

    pub fn tokenise_with_freq_threshold<'t>(
        &self,
        text: &'t str,
        threshold: f64,
        use_unk: bool,
    ) -> Result<Vec<&'t str>> {
        // 阈值先于训练状态检查
        check_freq_threshold(threshold)?;
        self.trained("tokenise_with_freq_threshold")?
            .tokenise_with_freq_threshold(text, threshold, use_unk)
    }

    fn trained(&self, operation: &'static str) -> Result<&Vocab> {
        self.vocab().ok_or(Error::Untrained { operation })
    }
}

impl fmt::Display for Tokeniser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Welcome to the tokeniser.")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn untrained() {
        let tokeniser = Tokeniser::new();
        assert!(!tokeniser.is_trained());
        assert_eq!(
            tokeniser.tokenise("a", false),
            Err(Error::Untrained {
                operation: "tokenise"
            }),
        );
        assert_eq!(
            tokeniser.tokenise_with_count_threshold("a", 1, true),
            Err(Error::Untrained {
                operation: "tokenise_with_count_threshold"
            }),
        );
        assert_eq!(
            tokeniser.tokenise_with_freq_threshold("a", 0.5, true),
            Err(Error::Untrained {
                operation: "tokenise_with_freq_threshold"
            }),
        );
        assert_eq!(tokeniser.tokenise_on_punctuation("a.b"), ["a", "b"]);
    }

    #[test]
    fn threshold_checked_before_training() {
        let tokeniser = Tokeniser::new();
        assert_eq!(
            tokeniser.tokenise_with_freq_threshold("a", -0.1, true),
            Err(Error::InvalidThreshold { threshold: -0.1 }),
        );
    }

    #[test]
    fn retrain_replaces_vocab() {
        let mut tokeniser = Tokeniser::new();
        tokeniser.train("alpha beta").unwrap();
        assert_eq!(tokeniser.tokenise("alpha gamma", true), Ok(vec!["alpha", "UNK"]));

        tokeniser.train("gamma").unwrap();
        assert_eq!(tokeniser.tokenise("alpha gamma", true), Ok(vec!["UNK", "gamma"]));
        assert_eq!(tokeniser.vocab().map(Vocab::len), Some(1));
    }

    #[test]
    fn failed_train_keeps_state() {
        let mut tokeniser = Tokeniser::new();
        assert_eq!(tokeniser.train("  "), Err(Error::EmptyCorpus));
        assert!(!tokeniser.is_trained());

        tokeniser.train("kept").unwrap();
        assert_eq!(tokeniser.train("!?"), Err(Error::EmptyCorpus));
        assert_eq!(tokeniser.tokenise("kept", false), Ok(vec!["kept"]));
    }

    #[test]
    fn display() {
        assert_eq!(Tokeniser::new().to_string(), "Welcome to the tokeniser.");
    }
}
