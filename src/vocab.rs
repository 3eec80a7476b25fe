//! 这个模块提供训练得到的词表，以及基于词表的三种过滤分词。

use crate::{split::split, Error, Result, UNK};
use log::{debug, trace};
use patricia_tree::PatriciaMap;

/// 训练完成的词表。
///
/// 只能通过 [`Vocab::train`] 构造，因此持有 `Vocab` 即意味着已经训练过，
/// 基于词表的分词不会再遇到未训练的错误。
#[derive(Clone, Debug)]
pub struct Vocab {
    /// 训练语料切分后的原始词序列，保留重复
    tokens: Vec<String>,
    /// 不重复的词及其出现次数，按首次出现的顺序
    counts: Box<[(String, usize)]>,
    /// 与 `counts` 同序的相对频率
    freqs: Box<[f64]>,
    /// 总词数的倒数
    sum_reciprocal: f64,
    /// 词 -> `counts` 中的序号
    trie: PatriciaMap<usize>,
}

impl Vocab {
    /// 切分语料并统计词表。语料中没有任何词时失败。
    pub fn train(corpus: &str) -> Result<Self> {
        let tokens = split(corpus).map(str::to_string).collect::<Vec<_>>();
        if tokens.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let mut trie = PatriciaMap::<usize>::new();
        let mut counts = Vec::<(String, usize)>::new();
        for token in &tokens {
            match trie.get(token) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    trie.insert(token, counts.len());
                    counts.push((token.clone(), 1));
                }
            }
        }

        let sum_reciprocal = 1. / counts.iter().map(|(_, n)| n).sum::<usize>() as f64;
        let freqs = counts
            .iter()
            .map(|&(_, n)| n as f64 * sum_reciprocal)
            .collect();

        debug!(
            "Trained vocab, detected {} tokens of {} types",
            tokens.len(),
            counts.len(),
        );

        Ok(Self {
            tokens,
            counts: counts.into_boxed_slice(),
            freqs,
            sum_reciprocal,
            trie,
        })
    }

    /// 训练语料的原始词序列。
    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
    /// 不重复的词数。
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }
    /// 训练成功的词表至少有一个词。
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
    /// 训练语料的总词数。
    #[inline]
    pub fn total(&self) -> usize {
        self.tokens.len()
    }
    #[inline]
    pub fn sum_reciprocal(&self) -> f64 {
        self.sum_reciprocal
    }

    #[inline]
    pub fn count(&self, token: &str) -> Option<usize> {
        self.index(token).map(|i| self.counts[i].1)
    }
    #[inline]
    pub fn freq(&self, token: &str) -> Option<f64> {
        self.index(token).map(|i| self.freqs[i])
    }

    /// 按首次出现的顺序遍历词及其次数。
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(t, n)| (&**t, *n))
    }
    /// 按首次出现的顺序遍历词及其相对频率。
    pub fn frequencies(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.counts.iter().zip(&*self.freqs).map(|((t, _), f)| (&**t, *f))
    }

    /// 出现次数不低于 `threshold` 的词。
    pub fn by_count(&self, threshold: usize) -> impl Iterator<Item = &str> + '_ {
        self.counts()
            .filter(move |&(_, n)| n >= threshold)
            .map(|(t, _)| t)
    }
    /// 相对频率不低于 `threshold` 的词。
    pub fn by_freq(&self, threshold: f64) -> impl Iterator<Item = &str> + '_ {
        self.frequencies()
            .filter(move |&(_, f)| f >= threshold)
            .map(|(t, _)| t)
    }

    /// 保留训练中见过的词，其余按 `use_unk` 替换为 [`UNK`] 或拆成单字符。
    pub fn tokenise<'t>(&self, text: &'t str, use_unk: bool) -> Vec<&'t str> {
        filter(text, |piece| self.index(piece).is_some(), use_unk)
    }

    /// 只保留训练中出现至少 `threshold` 次的词。
    pub fn tokenise_with_count_threshold<'t>(
        &self,
        text: &'t str,
        threshold: usize,
        use_unk: bool,
    ) -> Vec<&'t str> {
        filter(
            text,
            |piece| self.index(piece).is_some_and(|i| self.counts[i].1 >= threshold),
            use_unk,
        )
    }

    /// 只保留相对频率不低于 `threshold` 的词，`threshold` 必须在 [0, 1] 内。
    pub fn tokenise_with_freq_threshold<'t>(
        &self,
        text: &'t str,
        threshold: f64,
        use_unk: bool,
    ) -> Result<Vec<&'t str>> {
        check_freq_threshold(threshold)?;
        Ok(filter(
            text,
            |piece| self.index(piece).is_some_and(|i| self.freqs[i] >= threshold),
            use_unk,
        ))
    }

    #[inline(always)]
    fn index(&self, token: &str) -> Option<usize> {
        self.trie.get(token).copied()
    }
}

/// NaN 也视为越界。
pub(crate) fn check_freq_threshold(threshold: f64) -> Result<()> {
    if (0. ..=1.).contains(&threshold) {
        Ok(())
    } else {
        Err(Error::InvalidThreshold { threshold })
    }
}

/// 切分 → 判定 → 回退，三种过滤分词共用。
fn filter<'t>(text: &'t str, is_member: impl Fn(&str) -> bool, use_unk: bool) -> Vec<&'t str> {
    let mut ans = Vec::new();
    let mut unknown = 0usize;
    for piece in split(text) {
        if is_member(piece) {
            ans.push(piece);
            continue;
        }
        unknown += 1;
        if use_unk {
            ans.push(UNK);
        } else {
            ans.extend(
                piece
                    .char_indices()
                    .map(|(i, c)| &piece[i..][..c.len_utf8()]),
            );
        }
    }
    trace!("{unknown} unknown tokens, {} tokens emitted", ans.len());
    ans
}
