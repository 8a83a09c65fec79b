//! English analyzer used to normalize chat messages.
//!
//! Stop words are flagged rather than removed, so the stream still shows
//! every word of the message; consumers such as the normalizer skip the
//! flagged ones.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::language::LanguageResource;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::alphabetic::AlphabeticFilter;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::{StopAction, StopFilter};
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// Unicode word tokenizer, lowercase, alphabetic-only, stop-word flags, lemmas.
pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
    resource: Arc<LanguageResource>,
}

impl EnglishAnalyzer {
    pub fn new(resource: Arc<LanguageResource>) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(AlphabeticFilter::new()))
            .add_filter(Arc::new(
                StopFilter::from_resource(Arc::clone(&resource)).with_action(StopAction::Mark),
            ))
            .add_filter(Arc::new(LemmaFilter::new(Arc::clone(&resource))))
            .with_name("english");

        Self {
            inner: analyzer,
            resource,
        }
    }

    pub fn resource(&self) -> &Arc<LanguageResource> {
        &self.resource
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(LanguageResource::english()))
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

impl Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("inner", &self.inner)
            .field("resource", &self.resource.name)
            .finish()
    }
}
