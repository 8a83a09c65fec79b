//! Text analysis: tokenization, filtering and message normalization.
//!
//! Raw messages go through an [`Analyzer`](analyzer::Analyzer), a tokenizer
//! followed by a chain of token filters, and the [`Normalizer`]
//! joins the surviving tokens into the normalized string used for training
//! and inference.

pub mod analyzer;
pub mod language;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use normalizer::Normalizer;
