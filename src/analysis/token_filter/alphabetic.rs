//! Filter that keeps purely alphabetic tokens.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Drops every token containing a non-letter character.
///
/// Numbers (`123`), contractions (`don't`) and mixed tokens (`mp3`) are
/// removed; letters of any script are kept.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticFilter;

impl AlphabeticFilter {
    /// Create a new alphabetic filter.
    pub fn new() -> Self {
        AlphabeticFilter
    }

    fn is_alphabetic(token: &Token) -> bool {
        !token.text.is_empty() && token.text.chars().all(char::is_alphabetic)
    }
}

impl Filter for AlphabeticFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.is_stopped() || Self::is_alphabetic(token))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}
