//! Class labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SentirError;

/// A discrete class label.
///
/// The trained configuration is binary (`0` negative, `1` positive), but any
/// number of classes is accepted at training time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub u32);

impl Label {
    /// Negative sentiment.
    pub const NEGATIVE: Label = Label(0);
    /// Positive sentiment.
    pub const POSITIVE: Label = Label(1);

    /// The raw class id.
    pub fn id(self) -> u32 {
        self.0
    }

    /// A human-readable name for the binary classes.
    pub fn name(self) -> String {
        match self {
            Label::NEGATIVE => "negative".to_string(),
            Label::POSITIVE => "positive".to_string(),
            Label(other) => format!("class_{other}"),
        }
    }
}

impl From<u32> for Label {
    fn from(id: u32) -> Self {
        Label(id)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Label {
    type Err = SentirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Label)
            .map_err(|_| SentirError::dataset(format!("invalid label {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parse() {
        assert_eq!(" 1 ".parse::<Label>().unwrap(), Label::POSITIVE);
        assert_eq!("0".parse::<Label>().unwrap(), Label::NEGATIVE);
        assert!(matches!(
            "-1".parse::<Label>().unwrap_err(),
            SentirError::Dataset(_)
        ));
    }

    #[test]
    fn test_label_names() {
        assert_eq!(Label::NEGATIVE.name(), "negative");
        assert_eq!(Label::POSITIVE.name(), "positive");
        assert_eq!(Label(2).name(), "class_2");
        assert_eq!(Label(7).to_string(), "7");
    }

    #[test]
    fn test_label_ordering() {
        let mut labels = vec![Label(2), Label(0), Label(1)];
        labels.sort();
        assert_eq!(labels, vec![Label(0), Label(1), Label(2)]);
    }
}
