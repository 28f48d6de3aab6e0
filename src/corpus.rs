//! 语料读取 - 按空白切分文本并写入单词集合

use crate::{error::Result, set::WordSet};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// 按空白切分文本
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// 读取全部单词
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        words.extend(split_words(&line).map(str::to_string));
    }
    Ok(words)
}

/// 从文件读取全部单词
pub fn read_words_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    crate::log_info!("reading corpus from {}", path.display());
    let file = File::open(path)?;
    read_words(BufReader::new(file))
}

impl WordSet {
    /// 逐行读取并插入每个单词，返回读到的单词总数（含重复）
    pub fn extend_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut tokens = 0;
        for line in reader.lines() {
            let line = line?;
            for word in split_words(&line) {
                self.add(word);
                tokens += 1;
            }
        }
        crate::log_debug!("consumed {} tokens, {} distinct words", tokens, self.len());
        Ok(tokens)
    }

    /// 从文件构建
    pub fn extend_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        crate::log_info!("loading words from {}", path.display());
        let file = File::open(path)?;
        self.extend_from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WordSetError;
    use std::io::{self, Cursor, Read};

    const TEXT: &str = "It is a truth universally acknowledged,\n\
                        that a single man in possession of a good fortune,\n\
                        must be in want of a wife.\n";

    #[test]
    fn test_split_words() {
        let words: Vec<_> = split_words("  a\tb\n\nc  ").collect();
        assert_eq!(words, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_read_words() {
        let words = read_words(Cursor::new(TEXT)).unwrap();
        assert_eq!(words.len(), 23);
        assert_eq!(words[0], "It");
        assert_eq!(words.last().map(String::as_str), Some("wife."));
    }

    #[test]
    fn test_extend_from_reader() {
        let mut set = WordSet::new();
        let tokens = set.extend_from_reader(Cursor::new(TEXT)).unwrap();
        assert_eq!(tokens, 23);
        // "a" x4, "in" x2, "of" x2 重复
        assert_eq!(set.len(), 18);
        assert!(set.contains("WIFE"));
        assert!(set.contains("acknowledged"));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk gone"))
        }
    }

    #[test]
    fn test_io_error_propagates() {
        let mut set = WordSet::new();
        let err = set
            .extend_from_reader(BufReader::new(FailingReader))
            .unwrap_err();
        assert!(matches!(err, WordSetError::Io { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = read_words_from_path("/nonexistent/book.txt").unwrap_err();
        assert!(matches!(err, WordSetError::Io { .. }));
    }
}
