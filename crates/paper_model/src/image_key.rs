//! Image keys - (section, question) addresses for attached diagrams

use crate::error::ModelError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Address of a question within a paper, used to key attached images
///
/// The textual form is `"{section}_{question}"` with 0-based indices,
/// matching the keys the editor hands to the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageKey {
    pub section: usize,
    pub question: usize,
}

impl ImageKey {
    pub fn new(section: usize, question: usize) -> Self {
        Self { section, question }
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.section, self.question)
    }
}

impl FromStr for ImageKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidImageKey(s.to_string());
        let (section, question) = s.split_once('_').ok_or_else(invalid)?;
        let parse = |part: &str| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<usize>().map_err(|_| invalid())
        };
        Ok(Self::new(parse(section)?, parse(question)?))
    }
}

impl From<(usize, usize)> for ImageKey {
    fn from((section, question): (usize, usize)) -> Self {
        Self::new(section, question)
    }
}

impl Serialize for ImageKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ImageKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
