//! Tag options parsing
//!
//! Turns the free-form options text of a tag signature into key/value pairs.
//! Values can be quoted with `'` or `"` to carry spaces, commas and colons.
//!
//! ```text
//! k1:v1, k2:v2        => {k1: "v1", k2: "v2"}
//! k:"foo: bar"        => {k: "foo: bar"}
//! k1:v1, k2           => {k1: "v1"}
//! ```

use std::fmt;

const SEPARATORS: [char; 2] = [',', ':'];

/// Tokenizer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Bare,
    InSingleQuote,
    InDoubleQuote,
}

impl QuoteState {
    fn opened_by(c: char) -> Option<Self> {
        match c {
            '\'' => Some(QuoteState::InSingleQuote),
            '"' => Some(QuoteState::InDoubleQuote),
            _ => None,
        }
    }
}

/// Ordered key/value options of a tag.
///
/// A repeated key keeps its first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsMap {
    entries: Vec<(String, String)>,
}

impl OptionsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an options string. Never fails: unterminated quotes swallow the
    /// rest of the input and a trailing key without a value is dropped.
    pub fn parse(options_text: &str) -> Self {
        let tokens = tokenize(options_text);

        let mut map = OptionsMap::new();
        for pair in tokens.chunks(2) {
            if let [key, value] = pair {
                if !key.trim().is_empty() {
                    map.insert(key.clone(), value.clone());
                }
            }
        }
        map
    }

    /// Insert a pair, replacing the value of an existing key in place
    pub fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for OptionsMap {
    /// Canonical `k1:v1, k2:v2` form; values needing it are double-quoted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let needs_quotes = value.is_empty()
                || value.contains(SEPARATORS)
                || value.contains(['\'', '"'])
                || value.trim() != value;
            if !needs_quotes {
                write!(f, "{}:{}", key, value)?;
            } else if !value.contains('"') {
                write!(f, "{}:\"{}\"", key, value)?;
            } else {
                write!(f, "{}:'{}'", key, value)?;
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OptionsMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OptionsMap::new();
        for (k, v) in iter {
            map.insert(k.into(), v.into());
        }
        map
    }
}

/// Split options text into trimmed tokens. Always yields separators + 1 tokens.
fn tokenize(options_text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut token = String::new();
    let mut state = QuoteState::Bare;

    for c in options_text.chars() {
        if let Some(quote) = QuoteState::opened_by(c) {
            if state == quote {
                state = QuoteState::Bare;
            } else if state == QuoteState::Bare {
                state = quote;
            } else {
                // the other quote style is literal inside a quoted value
                token.push(c);
            }
        } else if SEPARATORS.contains(&c) && state == QuoteState::Bare {
            tokens.push(token.trim().to_string());
            token.clear();
        } else {
            token.push(c);
        }
    }
    tokens.push(token.trim().to_string());

    tokens
}
