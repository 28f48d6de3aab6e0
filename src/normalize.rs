//! 单词规范化 - 去除首尾特殊字符并转为大写

/// 特殊字符集：空格、ASCII标点，以及弯引号与商标符号。
///
/// 末尾的 `â € œ � „ ¢` 是 “ ” ™ 按 Windows-1252 误解码后的形态。
pub const SPECIAL_CHARS: &str =
    " ~!@#$%^&*()_+`-={}[]|\\:\";'<>?,./\u{201c}\u{201d}\u{2122}\u{e2}\u{20ac}\u{153}\u{fffd}\u{201e}\u{a2}";

/// 判断字符是否属于特殊字符集
#[inline]
pub fn is_special_char(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// 规范化单词
///
/// 只剥离首尾的特殊字符，中间的保持不变。全部由特殊字符组成或为空的输入
/// 得到空字符串。
pub fn normalize(word: &str) -> String {
    word.trim_matches(is_special_char).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_and_uppercase() {
        assert_eq!(normalize("testWord"), "TESTWORD");
        assert_eq!(normalize("  testWord!!"), "TESTWORD");
        assert_eq!(normalize("\"(hello)\","), "HELLO");
    }

    #[test]
    fn test_interior_untouched() {
        assert_eq!(normalize("--well-known--"), "WELL-KNOWN");
        assert_eq!(normalize("don't."), "DON'T");
        assert_eq!(normalize("a.b"), "A.B");
    }

    #[test]
    fn test_all_special_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!?.,;"), "");
        assert_eq!(normalize("\u{201c}\u{201d}"), "");
    }

    #[test]
    fn test_unicode_quotes() {
        assert_eq!(normalize("\u{201c}Elizabeth\u{201d}"), "ELIZABETH");
        assert_eq!(normalize("Brand\u{2122}"), "BRAND");
        // 误解码的左引号 â€œ
        assert_eq!(normalize("\u{e2}\u{20ac}\u{153}Well"), "WELL");
    }

    #[test]
    fn test_single_char() {
        assert_eq!(normalize("a"), "A");
        assert_eq!(normalize("!a!"), "A");
    }

    #[test]
    fn test_fixed_point() {
        for word in ["testWord", "  x!!", "\u{201c}Mr.", "...", "ça", "straße"] {
            let once = normalize(word);
            assert_eq!(normalize(&once), once, "input {:?}", word);
        }
    }
}
