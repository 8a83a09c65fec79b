//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis chain: the
//! tokenizer creates tokens from raw text, filters rewrite or drop them, and
//! the normalizer joins the surviving token texts back into a string.
//!
//! # Examples
//!
//! ```
//! use sentir::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("Running", 0, 0, 7).with_token_type(TokenType::Alphabetic);
//! assert_eq!(token.text, "Running");
//! assert!(token.is_alphabetic());
//!
//! let lemma = token.with_lemma("run");
//! assert_eq!(lemma.text, "run");
//! assert_eq!(lemma.original_text.as_deref(), Some("Running"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Classification of the token content
    pub token_type: TokenType,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,

    /// The surface form before a filter replaced the text (e.g. by its lemma)
    pub original_text: Option<String>,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Only alphabetic characters (any script)
    Alphabetic,
    /// Letters mixed with digits or joiners such as `'` and `-`
    Alphanum,
    /// Numeric values
    Num,
    /// Punctuation marks
    Punctuation,
    /// Other/unknown token types
    Other,
}

impl TokenType {
    /// Classify a word by its characters.
    pub fn detect(word: &str) -> Self {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(char::is_alphabetic) {
            return TokenType::Alphabetic;
        }

        if word.chars().all(char::is_numeric) {
            return TokenType::Num;
        }

        if word.chars().any(char::is_alphanumeric) {
            return TokenType::Alphanum;
        }

        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return TokenType::Punctuation;
        }

        TokenType::Other
    }
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let token_type = TokenType::detect(&text);
        Token {
            text,
            position,
            start_offset: 0,
            end_offset: 0,
            token_type,
            stopped: false,
            original_text: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Whether the token consists of alphabetic characters only.
    pub fn is_alphabetic(&self) -> bool {
        self.token_type == TokenType::Alphabetic
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Replace the text with `lemma`, remembering the first surface form.
    pub fn with_lemma<S: Into<String>>(&self, lemma: S) -> Self {
        let mut token = self.with_text(lemma);
        if token.original_text.is_none() {
            token.original_text = Some(self.text.clone());
        }
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
