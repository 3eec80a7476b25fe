#![deny(warnings)]

mod error;
mod split;
mod stats;
mod tokeniser;
mod vocab;

pub use error::{Error, Result};
pub use stats::{get_stats, CorpusStats};
pub use tokeniser::Tokeniser;
pub use vocab::Vocab;

/// 与空白等价的分隔符集合。
pub const PUNCTUATION: &[char] = &[
    '!', '#', '%', '&', '\'', '(', ')', '*', ',', '-', '.', '/', ':', ';', '?', '@', '[', ']', '_',
    '{', '}', '¡', '§', '«', '¶', '·', '»', '¿', '‘', '’', '“', '”', '–', '—', '"',
];

/// 未知词的占位符。
pub const UNK: &str = "UNK";

/// 按 [`PUNCTUATION`] 和空白切分文本，连续的分隔符合并，不产生空词。
///
/// ```
/// assert_eq!(
///     tokeniser::tokenise_on_punctuation("Hello, world!"),
///     ["Hello", "world"],
/// );
/// ```
#[inline]
pub fn tokenise_on_punctuation(text: &str) -> Vec<&str> {
    split::split(text).collect()
}
