use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref ABBREVIATIONS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "mr","mrs","ms","dr","prof","sr","jr","st","vs","etc","e.g","i.e","cf","al",
            "jan","feb","mar","apr","jun","jul","aug","sep","sept","oct","nov","dec",
            "vol","fig","approx","inc","ltd","co","corp","u.s","u.k","a.m","p.m",
        ];
        words.iter().copied().collect()
    };
    // abbreviations that also end sentences ("moved to the U.S. He ...")
    static ref SENTENCE_FINAL: HashSet<&'static str> = {
        let words: &[&str] = &["etc","u.s","u.k","a.m","p.m","inc","ltd","co","corp","jr","sr","al"];
        words.iter().copied().collect()
    };
    static ref SENTENCE_OPENERS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","an","the","i","it","he","she","we","they","you","this","that","these","those",
            "there","then","but","and","so","if","when","after","in","on","at","his","her","its",
            "their","our","my","yet","however",
        ];
        words.iter().copied().collect()
    };
}

/// Splits one passage of raw text into sentences, in order.
pub trait SentenceSegmenter {
    fn segment(&self, passage: &str) -> Vec<String>;
}

/// Punctuation-driven segmenter: a sentence ends at `.`, `!` or `?` (plus any closing
/// quotes or brackets) followed by whitespace, unless the next word starts in lowercase
/// or the period belongs to a known abbreviation or an initial. Initials and
/// abbreviations such as `U.S.` or `etc.` still end the sentence when the next word is
/// a common sentence opener (`It`, `He`, `The`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSegmenter;

fn is_terminator(c: char) -> bool { matches!(c, '.' | '!' | '?') }

fn is_closer(c: char) -> bool { matches!(c, '"' | '\'' | ')' | ']' | '}' | '\u{201d}' | '\u{2019}') }

/// Whether a period after the last word of `before` belongs to that word rather than
/// ending the sentence, given the (lowercased) word that follows it.
fn is_abbreviation(before: &str, next_word: &str) -> bool {
    let word = match before.split_whitespace().last() {
        Some(w) => w.trim_start_matches(|c: char| !c.is_alphanumeric()).to_lowercase(),
        None => return false,
    };
    let initial = word.chars().count() == 1 && word.chars().all(char::is_alphabetic);
    if !initial && !ABBREVIATIONS.contains(word.as_str()) {
        return false;
    }
    let may_end = initial || SENTENCE_FINAL.contains(word.as_str());
    !(may_end && SENTENCE_OPENERS.contains(next_word))
}

fn next_word(rest: &[(usize, char)]) -> String {
    rest.iter()
        .map(|&(_, ch)| ch)
        .skip_while(|ch| ch.is_whitespace() || is_closer(*ch) || *ch == '(')
        .take_while(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl SentenceSegmenter for PunctuationSegmenter {
    fn segment(&self, passage: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = passage.char_indices().collect();
        let mut sentences = Vec::new();
        let mut push = |s: &str| {
            let s = s.trim();
            if !s.is_empty() { sentences.push(s.to_string()); }
        };

        let mut start = 0;
        let mut i = 0;
        while i < chars.len() {
            let (pos, c) = chars[i];
            if !is_terminator(c) {
                i += 1;
                continue;
            }
            let mut j = i + 1;
            while j < chars.len() && (is_terminator(chars[j].1) || is_closer(chars[j].1)) { j += 1; }
            let end = chars.get(j).map(|&(p, _)| p).unwrap_or(passage.len());

            let followed_by_space = j == chars.len() || chars[j].1.is_whitespace();
            let next_word_lower = chars[j..]
                .iter()
                .map(|&(_, ch)| ch)
                .find(|ch| !ch.is_whitespace())
                .map(|ch| ch.is_lowercase())
                .unwrap_or(false);
            let abbreviated = c == '.' && j == i + 1 && is_abbreviation(&passage[start..pos], &next_word(&chars[j..]));

            if followed_by_space && !next_word_lower && !abbreviated {
                push(&passage[start..end]);
                start = end;
            }
            i = j;
        }
        push(&passage[start..]);
        sentences
    }
}

/// Split raw document text into passages on newlines, then into sentences.
pub fn split_sentences<S: SentenceSegmenter + ?Sized>(segmenter: &S, text: &str) -> Vec<String> {
    text.split('\n').flat_map(|passage| segmenter.segment(passage)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str) -> Vec<String> { PunctuationSegmenter.segment(text) }

    #[test]
    fn splits_on_terminal_punctuation() {
        assert_eq!(seg("The cat sat. Did it? Yes!"), vec!["The cat sat.", "Did it?", "Yes!"]);
    }

    #[test]
    fn keeps_abbreviations_and_initials_together() {
        assert_eq!(
            seg("Mr. Smith met J. R. Tolkien in the U.S. on Monday. Then he left."),
            vec!["Mr. Smith met J. R. Tolkien in the U.S. on Monday.", "Then he left."]
        );
    }

    #[test]
    fn initials_and_abbreviations_can_end_a_sentence() {
        assert_eq!(seg("I take vitamin C. It helps."), vec!["I take vitamin C.", "It helps."]);
        assert_eq!(seg("He moved to the U.S. He liked it."), vec!["He moved to the U.S.", "He liked it."]);
        assert_eq!(seg("Bring pens, paper, etc. The rest is provided."), vec!["Bring pens, paper, etc.", "The rest is provided."]);
        assert_eq!(seg("Dr. The Great spoke."), vec!["Dr. The Great spoke."]);
    }

    #[test]
    fn decimals_and_lowercase_continuations_do_not_split() {
        assert_eq!(seg("Pi is about 3.14 and so on... roughly."), vec!["Pi is about 3.14 and so on... roughly."]);
    }

    #[test]
    fn closing_quotes_stay_with_their_sentence() {
        assert_eq!(seg("He said \"stop.\" She did."), vec!["He said \"stop.\"", "She did."]);
    }

    #[test]
    fn passages_split_on_newlines() {
        let s = split_sentences(&PunctuationSegmenter, "First line\n\nSecond. Third.");
        assert_eq!(s, vec!["First line", "Second.", "Third."]);
    }
}
