//! Word list loading utilities
//!
//! Plain lists hold one word per line. Files ending in `.yaml` or `.yml` are
//! read as a YAML sequence of words, block or flow style.

use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for word list loading
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Yaml(serde_yaml::Error),
    InvalidWord {
        line: usize,
        text: String,
        source: WordError,
    },
    /// Bad word in a YAML sequence, with its 1-based position
    InvalidEntry {
        entry: usize,
        text: String,
        source: WordError,
    },
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read word list {}: {source}", path.display())
            }
            Self::Yaml(e) => write!(f, "word list is not a YAML sequence of words: {e}"),
            Self::InvalidWord { line, text, source } => {
                write!(f, "line {line}: '{text}' is not a valid word: {source}")
            }
            Self::InvalidEntry {
                entry,
                text,
                source,
            } => write!(f, "entry {entry}: '{text}' is not a valid word: {source}"),
            Self::Empty => write!(f, "word list contains no words"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Yaml(e) => Some(e),
            Self::InvalidWord { source, .. } | Self::InvalidEntry { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

/// Load words from a file
///
/// The format is picked by extension: `.yaml`/`.yml` as YAML, anything else
/// as plain text.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or parsed, any entry is not
/// a valid word, or the file holds no words at all.
///
/// # Examples
/// ```no_run
/// use wordle_guesser::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        parse_yaml_word_list(&content)
    } else {
        parse_word_list(&content)
    }
}

/// Parse a plain word list
///
/// Blank lines and `#` comments are skipped. Duplicates keep their first
/// position, since list order decides entropy ties.
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` with a 1-based line number for the first
/// bad entry, or `LoadError::Empty` if nothing remains.
pub fn parse_word_list(content: &str) -> Result<Vec<Word>, LoadError> {
    let entries = content.lines().enumerate().filter_map(|(index, line)| {
        let entry = line.split('#').next().unwrap_or_default().trim();
        (!entry.is_empty()).then_some((index + 1, entry))
    });

    collect_words(entries, |line, text, source| LoadError::InvalidWord {
        line,
        text,
        source,
    })
}

/// Parse a YAML sequence of words
///
/// # Errors
///
/// Returns `LoadError::Yaml` if the document is not a sequence of strings,
/// `LoadError::InvalidEntry` for the first bad word, or `LoadError::Empty`.
///
/// # Examples
/// ```
/// use wordle_guesser::wordlists::loader::parse_yaml_word_list;
///
/// let words = parse_yaml_word_list("[crane, slate]").unwrap();
/// assert_eq!(words.len(), 2);
/// ```
pub fn parse_yaml_word_list(content: &str) -> Result<Vec<Word>, LoadError> {
    let entries: Option<Vec<String>> = serde_yaml::from_str(content)?;
    let entries = entries.unwrap_or_default();

    collect_words(
        entries
            .iter()
            .enumerate()
            .map(|(index, text)| (index + 1, text.as_str())),
        |entry, text, source| LoadError::InvalidEntry {
            entry,
            text,
            source,
        },
    )
}

fn collect_words<'a>(
    entries: impl IntoIterator<Item = (usize, &'a str)>,
    invalid: impl Fn(usize, String, WordError) -> LoadError,
) -> Result<Vec<Word>, LoadError> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (position, text) in entries {
        let word =
            Word::new(text).map_err(|source| invalid(position, text.to_string(), source))?;
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    if words.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_guesser::wordlists::loader::words_from_slice;
/// use wordle_guesser::wordlists::WORDS;
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

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);
        assert_eq!(texts(&words), ["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(texts(&words), ["crane", "slate"]);
    }

    #[test]
    fn parse_plain_list() {
        let words = parse_word_list("crane\n\nslate\n  plane  \n").unwrap();
        assert_eq!(texts(&words), ["crane", "slate", "plane"]);
    }

    #[test]
    fn parse_yaml_block_sequence() {
        let content = "---\n# dev list\n- crane\n- 'slate'\n-   \"plane\"  # quoted\n";
        let words = parse_yaml_word_list(content).unwrap();
        assert_eq!(texts(&words), ["crane", "slate", "plane"]);
    }

    #[test]
    fn parse_yaml_flow_sequence() {
        let words = parse_yaml_word_list("[crane, slate]\n").unwrap();
        assert_eq!(texts(&words), ["crane", "slate"]);
    }

    #[test]
    fn parse_yaml_multiline_flow_keeps_first_duplicate() {
        let content = "[slate,\n  crane,\n  SLATE]\n";
        let words = parse_yaml_word_list(content).unwrap();
        assert_eq!(texts(&words), ["slate", "crane"]);
    }

    #[test]
    fn parse_yaml_reports_bad_entry() {
        let err = parse_yaml_word_list("- crane\n- sl4te\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidEntry { entry: 2, ref text, .. } if text == "sl4te"
        ));
    }

    #[test]
    fn parse_yaml_rejects_mapping() {
        let err = parse_yaml_word_list("words: crane\n").unwrap_err();
        assert!(matches!(err, LoadError::Yaml(_)));
    }

    #[test]
    fn parse_yaml_empty_document() {
        assert!(matches!(parse_yaml_word_list("[]"), Err(LoadError::Empty)));
        assert!(matches!(parse_yaml_word_list("~"), Err(LoadError::Empty)));
    }

    #[test]
    fn parse_keeps_first_of_duplicates() {
        let words = parse_word_list("slate\ncrane\nSLATE\n").unwrap();
        assert_eq!(texts(&words), ["slate", "crane"]);
    }

    #[test]
    fn parse_reports_bad_line() {
        let err = parse_word_list("crane\nsl4te\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidWord { line: 2, ref text, .. } if text == "sl4te"
        ));
        assert!(err.to_string().starts_with("line 2"));
    }

    #[test]
    fn parse_empty_list() {
        assert!(matches!(
            parse_word_list("# nothing here\n\n"),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn load_from_missing_file() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "wordle_guesser_loader_{}.yaml",
            std::process::id()
        ));
        fs::write(&path, "- zesty\n- crane\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(texts(&words), ["zesty", "crane"]);
    }

    #[test]
    fn load_picks_format_by_extension() {
        let dir = std::env::temp_dir();
        let id = std::process::id();
        let yml = dir.join(format!("wordle_guesser_flow_{id}.yml"));
        let txt = dir.join(format!("wordle_guesser_flow_{id}.txt"));
        fs::write(&yml, "[zesty, crane]\n").unwrap();
        fs::write(&txt, "[zesty, crane]\n").unwrap();

        let from_yaml = load_from_file(&yml);
        let from_text = load_from_file(&txt);
        fs::remove_file(&yml).unwrap();
        fs::remove_file(&txt).unwrap();

        assert_eq!(texts(&from_yaml.unwrap()), ["zesty", "crane"]);
        assert!(matches!(from_text, Err(LoadError::InvalidWord { line: 1, .. })));
    }
}
