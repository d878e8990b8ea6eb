//! Word-list profanity filter for review comments.
//!
//! Text is lowercased and split into tokens first. Inside a token that
//! holds at least one letter, common character substitutions are folded
//! back to letters (`sh1t` → `shit`, `@ss` → `ass`); punctuation around a
//! token and all-digit tokens are left alone. A comment is flagged when any
//! token, as written or folded, is in the word set. Partial matches inside
//! longer words are never flagged.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Built-in English and French terms.
const DEFAULT_WORDS: &[&str] = &[
    // English
    "arse", "arsehole", "ass", "asshole", "bastard", "bitch", "bitches", "bollocks", "bullshit",
    "crap", "cunt", "dick", "dickhead", "dumbass", "fag", "faggot", "fuck", "fucked",
    "fucker", "fucking", "motherfucker", "nigger", "piss", "prick", "pussy", "retard", "shit",
    "shitty", "slut", "twat", "wanker", "whore",
    // French
    "batard", "bâtard", "bordel", "chier", "conasse", "connard", "connasse",
    "conne", "couille", "couilles", "crisse", "câlisse", "calisse", "enculé", "encule",
    "enculer", "enfoiré", "enfoire", "fdp", "merde", "niquer", "nique", "ntm", "pétasse",
    "petasse", "putain", "pute", "salaud", "salope", "tabarnak", "tabarnac", "ostie", "osti",
];

/// Errors raised while loading a word list.
#[derive(Debug, Error)]
pub enum ProfanityError {
    /// The word list file could not be read.
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Word-list based content check.
#[derive(Debug, Clone)]
pub struct ProfanityFilter {
    words: HashSet<String>,
}

impl Default for ProfanityFilter {
    fn default() -> Self {
        Self::from_words(DEFAULT_WORDS.iter().copied())
    }
}

impl ProfanityFilter {
    /// Create a filter that flags exactly the given words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self {
            words: HashSet::new(),
        };
        filter.extend(words);
        filter
    }

    /// Load the built-in list merged with a word list file.
    ///
    /// The file holds one word per line. Blank lines and lines starting
    /// with `#` are ignored. A leading `~` is expanded to the home directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfanityError> {
        let raw = path.as_ref().to_string_lossy();
        let expanded = PathBuf::from(shellexpand::tilde(&raw).into_owned());
        let content = std::fs::read_to_string(&expanded).map_err(|source| ProfanityError::Io {
            path: expanded.clone(),
            source,
        })?;

        let mut filter = Self::default();
        let before = filter.len();
        filter.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        debug!(
            path = %expanded.display(),
            added = filter.len() - before,
            "Loaded profanity word list"
        );
        Ok(filter)
    }

    /// Add words to the filter.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let normalized = normalize(word.as_ref());
            if !normalized.is_empty() {
                self.words.insert(normalized);
            }
        }
    }

    /// Number of distinct words in the filter.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the filter holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether `text` contains a flagged word.
    pub fn contains_profanity(&self, text: &str) -> bool {
        tokens(&text.to_lowercase()).any(|token| {
            self.words.contains(token) || self.words.contains(fold_token(token).as_str())
        })
    }
}

/// Characters that may stand in for a letter inside a word.
fn is_substitute(c: char) -> bool {
    matches!(c, '@' | '$' | '!')
}

/// Split lowercased text into candidate words.
///
/// Substitute characters stay inside a token (`b!tch`) but trailing or
/// leading `!` is punctuation (`merde!!!`).
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || is_substitute(c)))
        .map(|token| token.trim_matches('!'))
        .filter(|token| !token.is_empty())
}

/// Fold substitutions in a token that contains at least one letter.
///
/// All-digit tokens such as `455` are returned unchanged.
fn fold_token(token: &str) -> String {
    if !token.chars().any(char::is_alphabetic) {
        return token.to_string();
    }
    token
        .chars()
        .map(|c| match c {
            '@' | '4' => 'a',
            '$' | '5' => 's',
            '0' => 'o',
            '1' | '!' => 'i',
            '3' => 'e',
            '7' => 't',
            other => other,
        })
        .collect()
}

/// Normalize a list entry the same way tokens are folded.
fn normalize(word: &str) -> String {
    fold_token(&word.trim().to_lowercase())
}
