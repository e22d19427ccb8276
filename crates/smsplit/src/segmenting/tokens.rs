//! Word tokenization.
//!
//! Every space is a token of its own and every maximal run of other
//! characters is one token, so concatenating the tokens reproduces the
//! input exactly.

use crate::limits::WORD_SEPARATOR;

/// A word or a single separator space, borrowed from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    text: &'a str,
    chars: usize,
}

impl<'a> Token<'a> {
    pub(crate) fn text(&self) -> &'a str {
        self.text
    }

    /// Length in characters.
    pub(crate) fn chars(&self) -> usize {
        self.chars
    }

    pub(crate) fn is_space(&self) -> bool {
        self.text.len() == 1 && self.text.starts_with(WORD_SEPARATOR)
    }
}

/// Split `text` into words and standalone spaces.
///
/// Never yields an empty token.
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start = 0;
    let mut word_chars = 0;

    for (offset, c) in text.char_indices() {
        if c != WORD_SEPARATOR {
            word_chars += 1;
            continue;
        }

        if offset > word_start {
            tokens.push(Token {
                text: &text[word_start..offset],
                chars: word_chars,
            });
        }

        let end = offset + WORD_SEPARATOR.len_utf8();
        tokens.push(Token {
            text: &text[offset..end],
            chars: 1,
        });
        word_start = end;
        word_chars = 0;
    }

    if word_start < text.len() {
        tokens.push(Token {
            text: &text[word_start..],
            chars: word_chars,
        });
    }

    tokens
}
