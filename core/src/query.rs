use crate::tokenizer::Normalizer;
use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct normalized query words. Repeating a word in the query text does not
/// give it extra weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query {
    words: BTreeSet<String>,
}

impl Query {
    pub fn parse<N: Normalizer + ?Sized>(text: &str, normalizer: &N) -> Self {
        normalizer.normalize(text).into_iter().collect()
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ { self.words.iter().map(String::as_str) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: Into<String>> FromIterator<S> for Query {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { words: iter.into_iter().map(Into::into).collect() }
    }
}
