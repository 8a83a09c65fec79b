//! Lemma filter implementation.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sentir::analysis::language::LanguageResource;
//! use sentir::analysis::token_filter::Filter;
//! use sentir::analysis::token_filter::lemma::LemmaFilter;
//! use sentir::analysis::token::Token;
//!
//! let filter = LemmaFilter::new(Arc::new(LanguageResource::english()));
//! let tokens = vec![Token::new("cats", 0), Token::new("ran", 1)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result[0].text, "cat");
//! assert_eq!(result[1].text, "run");
//! ```

use std::sync::Arc;

use crate::analysis::language::LanguageResource;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that replaces each token's text by its lemma.
///
/// Expects lowercased input. The surface form is kept in
/// [`Token::original_text`].
#[derive(Clone, Debug)]
pub struct LemmaFilter {
    resource: Arc<LanguageResource>,
}

impl LemmaFilter {
    /// Create a lemma filter backed by `resource`.
    pub fn new(resource: Arc<LanguageResource>) -> Self {
        LemmaFilter { resource }
    }

    /// The language resource used for lookups.
    pub fn resource(&self) -> &Arc<LanguageResource> {
        &self.resource
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .map(|token| {
                if token.is_stopped() {
                    return token;
                }
                let lemma = self.resource.lemmatize(&token.text);
                if lemma == token.text {
                    token
                } else {
                    token.with_lemma(lemma)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lemma_filter() {
        let filter = LemmaFilter::new(Arc::new(LanguageResource::english()));
        let tokens = vec![
            Token::new("movies", 0),
            Token::new("running", 1),
            Token::new("great", 2),
            Token::new("mice", 3).stop(),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "movie");
        assert_eq!(result[0].original_text.as_deref(), Some("movies"));
        assert_eq!(result[1].text, "run");
        assert_eq!(result[2].text, "great");
        assert!(result[2].original_text.is_none());
        // stopped tokens are not processed
        assert_eq!(result[3].text, "mice");
    }

    #[test]
    fn test_filter_name() {
        let filter = LemmaFilter::new(Arc::new(LanguageResource::english()));
        assert_eq!(filter.name(), "lemma");
    }
}
