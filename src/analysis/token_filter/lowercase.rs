//! Lowercasing.
//!
//! ```
//! use sentir::analysis::token::Token;
//! use sentir::analysis::token_filter::Filter;
//! use sentir::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let tokens = vec![Token::new("LOVED", 0), Token::new("ÉTÉ", 1)];
//! let out: Vec<_> = LowercaseFilter::new()
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(out[0].text, "loved");
//! assert_eq!(out[1].text, "été");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases token text. Stopped tokens are left as they are.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

fn lowercase(token: Token) -> Token {
    if token.is_stopped() {
        return token;
    }
    if token.text.is_ascii() {
        if token.text.bytes().any(|b| b.is_ascii_uppercase()) {
            let text = token.text.to_ascii_lowercase();
            return token.with_text(text);
        }
        return token;
    }
    let text = token.text.to_lowercase();
    token.with_text(text)
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(lowercase)))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
