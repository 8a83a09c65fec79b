//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer and return a new
//! stream, rewriting or dropping tokens on the way.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`alphabetic::AlphabeticFilter`] - Drops tokens that are not purely alphabetic
//! - [`stop::StopFilter`] - Removes stop words
//! - [`lemma::LemmaFilter`] - Replaces words by their lemma
//!
//! # Examples
//!
//! ```
//! use sentir::analysis::token_filter::Filter;
//! use sentir::analysis::token_filter::lowercase::LowercaseFilter;
//! use sentir::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```
//!
//! # Filter Chaining
//!
//! The English normalizer chains them in this order:
//!
//! ```text
//! Tokenizer → Lowercase → Alphabetic → Stop Words → Lemma → join
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` so filters can be shared by an analyzer
/// used from several threads.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use sentir::analysis::token::{Token, TokenStream};
/// use sentir::analysis::token_filter::Filter;
/// use sentir::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|t| {
///                 let text: String = t.text.chars().rev().collect();
///                 t.with_text(text)
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphabetic;
pub mod lemma;
pub mod lowercase;
pub mod stop;

pub use alphabetic::AlphabeticFilter;
pub use lemma::LemmaFilter;
pub use lowercase::LowercaseFilter;
pub use stop::StopFilter;
