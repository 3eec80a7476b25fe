use crate::{Error, Result};
use std::collections::{BTreeMap, HashSet};

/// 已分词语料的描述性统计。长度以字符计。
#[derive(Clone, PartialEq, Debug)]
pub struct CorpusStats {
    /// 不同词的数量
    pub type_count: usize,
    /// 词的总数
    pub token_count: usize,
    /// `type_count / token_count`
    pub type_token_ratio: f64,
    /// 长度 -> 该长度的词数，按长度升序
    pub token_count_by_length: BTreeMap<usize, usize>,
    pub average_token_length: f64,
    /// 样本标准差
    pub token_length_std: f64,
}

/// 统计一个词序列。少于 2 个词时标准差无定义，返回 [`Error::TooFewTokens`]。
pub fn get_stats<T: AsRef<str>>(tokens: &[T]) -> Result<CorpusStats> {
    let n = tokens.len();
    if n < 2 {
        return Err(Error::TooFewTokens { found: n });
    }

    let types = tokens.iter().map(AsRef::as_ref).collect::<HashSet<&str>>();
    let lengths = tokens
        .iter()
        .map(|t| t.as_ref().chars().count())
        .collect::<Vec<_>>();

    let mut token_count_by_length = BTreeMap::new();
    for &len in &lengths {
        *token_count_by_length.entry(len).or_insert(0) += 1;
    }

    let mean = lengths.iter().sum::<usize>() as f64 / n as f64;
    let var = lengths
        .iter()
        .map(|&len| (len as f64 - mean).powi(2))
        .sum::<f64>()
        / (n - 1) as f64;

    Ok(CorpusStats {
        type_count: types.len(),
        token_count: n,
        type_token_ratio: types.len() as f64 / n as f64,
        token_count_by_length,
        average_token_length: mean,
        token_length_std: var.sqrt(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lengths_are_chars() {
        let stats = get_stats(&["élan", "日本", "日本"]).unwrap();
        assert_eq!(stats.type_count, 2);
        assert_eq!(stats.token_count_by_length, BTreeMap::from([(2, 2), (4, 1)]));
    }

    #[test]
    fn uniform_lengths() {
        let stats = get_stats(&[String::from("ab"), String::from("cd")]).unwrap();
        assert_eq!(stats.type_token_ratio, 1.);
        assert_eq!(stats.average_token_length, 2.);
        assert_eq!(stats.token_length_std, 0.);
    }

    #[test]
    fn degenerate() {
        assert_eq!(
            get_stats::<&str>(&[]),
            Err(Error::TooFewTokens { found: 0 })
        );
        assert_eq!(get_stats(&["one"]), Err(Error::TooFewTokens { found: 1 }));
    }
}
