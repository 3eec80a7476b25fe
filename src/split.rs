use crate::PUNCTUATION;
use regex::Regex;
use std::{collections::HashSet, sync::LazyLock};

static RULE: LazyLock<Regex> = LazyLock::new(|| build_pattern(PUNCTUATION));

/// 切分文本，产生的每个词都是输入的子串。
pub(crate) fn split(text: &str) -> impl Iterator<Item = &str> + '_ {
    RULE.split(text).filter(|piece| !piece.is_empty())
}

/// 将分隔符集合构造成 `(?:[...]|[\s\x1C-\x1F])+`，信息分隔符 U+001C..=U+001F 也算空白。
fn build_pattern(separators: &[char]) -> Regex {
    static SPECIAL: LazyLock<HashSet<char>> = LazyLock::new(|| {
        HashSet::from([
            '\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$', '#', '&', '-',
            '~',
        ])
    });

    let mut pattern = String::from("(?:[");
    for &c in separators {
        if SPECIAL.contains(&c) {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push_str(r"]|[\s\x1C-\x1F])+");

    // 分隔符集合是常量，构造失败只能是转义表有误
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid separator pattern {pattern:?}: {e}"))
}
