//! Analyzers combine a tokenizer with a chain of filters.
//!
//! # Available Analyzers
//!
//! - [`pipeline::PipelineAnalyzer`] - Any tokenizer plus any filters
//! - [`english::EnglishAnalyzer`] - The chat-message normalization chain
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sentir::analysis::analyzer::Analyzer;
//! use sentir::analysis::analyzer::english::EnglishAnalyzer;
//! use sentir::analysis::language::LanguageResource;
//!
//! let analyzer = EnglishAnalyzer::new(Arc::new(LanguageResource::english()));
//! let tokens: Vec<_> = analyzer.analyze("The CATS run!!! 123").unwrap().collect();
//!
//! // "the" stays in the stream, flagged as a stop word
//! assert_eq!(tokens.len(), 3);
//! assert!(tokens[0].is_stopped());
//! assert_eq!(tokens[1].text, "cat");
//! assert_eq!(tokens[2].text, "run");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod english;
pub mod pipeline;

pub use english::EnglishAnalyzer;
pub use pipeline::PipelineAnalyzer;
