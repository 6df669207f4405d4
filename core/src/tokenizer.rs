use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;
use std::collections::HashSet;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)[\p{L}\p{N}][\p{L}\p{N}_']*").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "just","let's","me","more","most","mustn't","my","myself",
            "no","nor","not","now","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "s","same","she","she'd","she'll","she's","should","should've","shouldn't","so","some","such",
            "t","than","that","that'll","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","will","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Turns raw text into the ordered sequence of tokens the rankers compare.
pub trait Normalizer {
    fn normalize(&self, text: &str) -> Vec<String>;
}

/// English text normalization: NFKC, lowercase, punctuation and stopword removal,
/// with optional Snowball stemming.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNormalizer {
    pub stem: bool,
}

impl EnglishNormalizer {
    pub fn new(stem: bool) -> Self { Self { stem } }
}

impl Normalizer for EnglishNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        let normalized = text.nfkc().collect::<String>().to_lowercase();
        let mut tokens = Vec::new();
        for mat in RE.find_iter(&normalized) {
            // "dogs'" and "dogs" are the same word
            let token = mat.as_str().trim_end_matches('\'');
            if token.is_empty() || is_stopword(token) { continue; }
            // possessive: "dog's" is "dog"; contractions were matched whole above
            let token = token.strip_suffix("'s").unwrap_or(token);
            if token.is_empty() || is_stopword(token) { continue; }
            if self.stem {
                tokens.push(STEMMER.stem(token).to_string());
            } else {
                tokens.push(token.to_string());
            }
        }
        tokens
    }
}

/// Tokenize text with the default (non-stemming) English normalizer.
pub fn tokenize(text: &str) -> Vec<String> {
    EnglishNormalizer::default().normalize(text)
}
