//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file
///
/// Blank lines and lines starting with `#` are skipped, as are entries that
/// are not valid words.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_lines(&content);
    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(entry = line, error = %e, "skipping invalid word");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["apple", "Banana", "CHERRY"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "APPLE");
        assert_eq!(words[1].text(), "BANANA");
        assert_eq!(words[2].text(), "CHERRY");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["apple", "two words", "", "r2d2", "kiwi"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "APPLE");
        assert_eq!(words[1].text(), "KIWI");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_lines_skips_comments_and_blanks() {
        let content = "# animals\nkoala\n\n  lizard  \n# end\nbad-word\n";
        let words = parse_lines(content);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["KOALA", "LIZARD"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("hangman_words_{}.txt", std::process::id()));
        fs::write(&path, "otter\nbadger\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "BADGER");
    }
}
