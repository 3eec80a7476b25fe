use thiserror::Error;

#[derive(Clone, PartialEq, Debug, Error)]
pub enum Error {
    /// 在训练之前调用了依赖词表的操作。
    #[error("`{operation}` requires a trained tokeniser")]
    Untrained { operation: &'static str },
    /// 频率阈值不在 [0, 1] 内。
    #[error("frequency threshold {threshold} is outside [0, 1]")]
    InvalidThreshold { threshold: f64 },
    /// 训练语料切分后没有任何词。
    #[error("training corpus contains no tokens")]
    EmptyCorpus,
    /// 统计至少需要 2 个词。
    #[error("statistics need at least 2 tokens, found {found}")]
    TooFewTokens { found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
