//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis chain: they split input
//! text into [`Token`](crate::analysis::token::Token)s.
//!
//! [`unicode_word::UnicodeWordTokenizer`] splits on Unicode word boundaries
//! (UAX #29) and is the tokenizer of every built-in analyzer.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can sit inside an
/// analyzer shared between threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod unicode_word;

pub use unicode_word::UnicodeWordTokenizer;
