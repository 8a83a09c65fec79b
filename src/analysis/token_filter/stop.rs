//! Stop-word filtering.
//!
//! A [`StopFilter`] looks every token up in a stop list. The list is either
//! a language resource shared with the rest of the analysis chain or an
//! ad-hoc word set. Matching tokens are dropped or, with
//! [`StopAction::Mark`], kept and flagged as stopped so later filters skip
//! them.
//!
//! ```
//! use std::sync::Arc;
//!
//! use sentir::analysis::language::LanguageResource;
//! use sentir::analysis::token::Token;
//! use sentir::analysis::token_filter::Filter;
//! use sentir::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::from_resource(Arc::new(LanguageResource::english()));
//! let tokens = vec![Token::new("this", 0), Token::new("is", 1), Token::new("great", 2)];
//!
//! let kept: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].text, "great");
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::analysis::language::LanguageResource;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// What happens to a token found in the stop list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StopAction {
    /// Remove it from the stream.
    #[default]
    Drop,
    /// Keep it, flagged with [`Token::stop`](crate::analysis::token::Token::stop).
    Mark,
}

#[derive(Clone)]
enum StopList {
    Resource(Arc<LanguageResource>),
    Words(Arc<HashSet<String>>),
}

impl StopList {
    fn contains(&self, word: &str) -> bool {
        match self {
            StopList::Resource(resource) => resource.is_stop_word(word),
            StopList::Words(words) => words.contains(word),
        }
    }

    fn len(&self) -> usize {
        match self {
            StopList::Resource(resource) => resource.stop_words.len(),
            StopList::Words(words) => words.len(),
        }
    }
}

/// Removes (or marks) stop words. Expects lowercased tokens.
#[derive(Clone)]
pub struct StopFilter {
    list: StopList,
    action: StopAction,
}

impl StopFilter {
    /// Use the stop words of `resource`, shared rather than copied.
    pub fn from_resource(resource: Arc<LanguageResource>) -> Self {
        StopFilter {
            list: StopList::Resource(resource),
            action: StopAction::Drop,
        }
    }

    /// Use an explicit word list.
    ///
    /// ```
    /// use sentir::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(["lol", "omg"]);
    /// assert!(filter.is_stop_word("lol"));
    /// assert_eq!(filter.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            list: StopList::Words(Arc::new(words.into_iter().map(Into::into).collect())),
            action: StopAction::Drop,
        }
    }

    pub fn with_action(mut self, action: StopAction) -> Self {
        self.action = action;
        self
    }

    pub fn action(&self) -> StopAction {
        self.action
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.list.contains(word)
    }

    /// Size of the stop list.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::from_resource(Arc::new(LanguageResource::english()))
    }
}

impl fmt::Debug for StopFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.list {
            StopList::Resource(resource) => resource.name.as_str(),
            StopList::Words(_) => "custom",
        };
        f.debug_struct("StopFilter")
            .field("source", &source)
            .field("words", &self.len())
            .field("action", &self.action)
            .finish()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let list = self.list.clone();
        let action = self.action;
        Ok(Box::new(tokens.filter_map(move |token| {
            if token.is_stopped() || !list.contains(&token.text) {
                return Some(token);
            }
            match action {
                StopAction::Drop => None,
                StopAction::Mark => Some(token.stop()),
            }
        })))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
