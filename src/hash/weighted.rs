//! 加权多项式滚动哈希 - 元音与倒数第二、三位字符加权

use crate::{
    error::{Result, WordSetError},
    hash::strategy::WordHasher,
    types::{BUCKETS, HASH_PRIME},
};
use std::fmt;

const VOWELS: &str = "AEIOU";
const FREQUENT_LETTERS: &str = "EARIO";

/// 哈希权重
///
/// 默认值 `vowel = 2, ending = 4, consonant = 1, frequent = 1`，
/// 即只对元音和词尾加权。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashWeights {
    /// 元音 A E I O U 的乘数
    pub vowel: u32,
    /// 倒数第二、第三位字符的乘数
    pub ending: u32,
    /// ASCII 辅音的乘数
    pub consonant: u32,
    /// 高频字母 E A R I O 的乘数
    pub frequent: u32,
}

impl Default for HashWeights {
    fn default() -> Self {
        Self {
            vowel: 2,
            ending: 4,
            consonant: 1,
            frequent: 1,
        }
    }
}

impl HashWeights {
    pub fn new(vowel: u32, ending: u32, consonant: u32, frequent: u32) -> Self {
        Self {
            vowel,
            ending,
            consonant,
            frequent,
        }
    }

    /// 乘数为0会抹掉字符的贡献
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.genes_named() {
            if value == 0 {
                return Err(WordSetError::InvalidWeights {
                    reason: format!("{} multiplier must be at least 1", name),
                });
            }
        }
        Ok(())
    }

    /// 按固定顺序返回四个乘数
    pub fn genes(&self) -> [u32; 4] {
        [self.vowel, self.ending, self.consonant, self.frequent]
    }

    pub fn from_genes(genes: [u32; 4]) -> Self {
        Self::new(genes[0], genes[1], genes[2], genes[3])
    }

    fn genes_named(&self) -> [(&'static str, u32); 4] {
        [
            ("vowel", self.vowel),
            ("ending", self.ending),
            ("consonant", self.consonant),
            ("frequent", self.frequent),
        ]
    }
}

impl fmt::Display for HashWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[vowel={}, ending={}, consonant={}, frequent={}]",
            self.vowel, self.ending, self.consonant, self.frequent
        )
    }
}

#[inline]
fn mul_mod(a: u64, b: u64) -> u64 {
    (a % BUCKETS as u64) * (b % BUCKETS as u64) % BUCKETS as u64
}

/// 加权多项式滚动哈希
///
/// `h = (h * 31 + c) mod 53`，`c` 为字符码位乘以命中的各项权重。
/// 权重在取模前后作用结果相同，因此先取模以避免溢出。
/// 分布均匀性只有经验上的平均桶长作参考，没有理论保证。
#[derive(Debug, Clone, Default)]
pub struct WeightedPolyHasher {
    weights: HashWeights,
}

impl WeightedPolyHasher {
    pub fn new(weights: HashWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// 计算单个字符的加权值（已对桶数取模）
    #[inline]
    fn char_value(&self, c: char, index: usize, len: usize) -> u64 {
        let mut value = c as u64;
        if VOWELS.contains(c) {
            value = mul_mod(value, self.weights.vowel as u64);
        }
        if index + 2 == len || index + 3 == len {
            value = mul_mod(value, self.weights.ending as u64);
        }
        if c.is_ascii_alphabetic() && !VOWELS.contains(c.to_ascii_uppercase()) {
            value = mul_mod(value, self.weights.consonant as u64);
        }
        if FREQUENT_LETTERS.contains(c.to_ascii_uppercase()) {
            value = mul_mod(value, self.weights.frequent as u64);
        }
        value % BUCKETS as u64
    }

    /// 计算单词的哈希值，范围 `[0, 52]`，空串为0
    pub fn hash(&self, word: &str) -> usize {
        let len = word.chars().count();
        let mut h: u64 = 0;
        for (index, c) in word.chars().enumerate() {
            h = (h * HASH_PRIME + self.char_value(c, index, len)) % BUCKETS as u64;
        }
        h as usize
    }
}

impl WordHasher for WeightedPolyHasher {
    fn bucket_of(&self, word: &str) -> usize {
        self.hash(word)
    }

    fn weights(&self) -> HashWeights {
        self.weights
    }
}
