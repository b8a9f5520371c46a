//! Rule-based fallback analyzer.
//!
//! A deterministic approximation of a statistical NLP pipeline: whitespace
//! tokenization with clitic splitting, an embedded English stopword list, a
//! suffix-rule lemmatizer with a small irregular-form table, and
//! lookup-table part-of-speech assignment. Production callers are expected
//! to inject a real analyzer behind [`NlpAnalyzer`]; this one keeps the
//! binary usable without external models.

use super::{AnalyzedToken, NlpAnalyzer, PartOfSpeech};
use std::collections::{HashMap, HashSet};

/// Common English function words.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
    "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it",
    "its", "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now",
    "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your", "yours", "yourself", "yourselves", "n't", "'s", "'re", "'ve", "'ll", "'d",
    "'m",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "mine",
    "yours", "hers", "ours", "theirs", "myself", "yourself", "himself", "herself", "itself",
    "ourselves", "yourselves", "themselves", "who", "whom", "whose", "something", "anything",
    "nothing", "everything", "someone", "anyone", "everyone",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion",
];

const DETERMINERS: &[&str] = &["the", "a", "an", "this", "that", "these", "those", "each", "every"];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "because", "although", "while", "if"];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "from", "of", "to", "about", "into", "over",
    "under", "between", "through", "during", "against",
];

/// Auxiliaries and their lemmas.
const AUXILIARIES: &[(&str, &str)] = &[
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("am", "be"),
    ("be", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("have", "have"),
    ("had", "have"),
    ("do", "do"),
    ("does", "do"),
    ("did", "do"),
    ("will", "will"),
    ("would", "would"),
    ("can", "can"),
    ("could", "could"),
    ("should", "should"),
    ("shall", "shall"),
    ("may", "may"),
    ("might", "might"),
    ("must", "must"),
];

/// Irregular lemmas the suffix rules cannot derive.
const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("went", "go"),
    ("gone", "go"),
    ("said", "say"),
    ("made", "make"),
    ("ran", "run"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
];

/// Contraction suffixes split off as their own tokens, with lemma and POS.
const CLITICS: &[(&str, &str, PartOfSpeech)] = &[
    ("n't", "not", PartOfSpeech::Particle),
    ("'s", "'s", PartOfSpeech::Particle),
    ("'re", "be", PartOfSpeech::Auxiliary),
    ("'ve", "have", PartOfSpeech::Auxiliary),
    ("'ll", "will", PartOfSpeech::Auxiliary),
    ("'d", "would", PartOfSpeech::Auxiliary),
    ("'m", "be", PartOfSpeech::Auxiliary),
];

/// Deterministic rule-based analyzer.
pub struct HeuristicAnalyzer {
    stopwords: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    number_words: HashSet<&'static str>,
    determiners: HashSet<&'static str>,
    conjunctions: HashSet<&'static str>,
    adpositions: HashSet<&'static str>,
    auxiliaries: HashMap<&'static str, &'static str>,
    irregulars: HashMap<&'static str, &'static str>,
}

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self {
            stopwords: STOPWORDS.iter().copied().collect(),
            pronouns: PRONOUNS.iter().copied().collect(),
            number_words: NUMBER_WORDS.iter().copied().collect(),
            determiners: DETERMINERS.iter().copied().collect(),
            conjunctions: CONJUNCTIONS.iter().copied().collect(),
            adpositions: ADPOSITIONS.iter().copied().collect(),
            auxiliaries: AUXILIARIES.iter().copied().collect(),
            irregulars: IRREGULAR_LEMMAS.iter().copied().collect(),
        }
    }

    fn classify(&self, piece: &str) -> AnalyzedToken {
        let lower = piece.to_lowercase();

        if !piece.chars().any(char::is_alphanumeric) {
            let pos = if piece.chars().any(|c| "$%€£#+=<>^~|&".contains(c)) {
                PartOfSpeech::Symbol
            } else {
                PartOfSpeech::Punctuation
            };
            return AnalyzedToken {
                text: piece.to_string(),
                lemma: lower,
                pos,
                is_stop: false,
            };
        }

        if is_numeric(piece) || self.number_words.contains(lower.as_str()) {
            return self.token(piece, lower.clone(), PartOfSpeech::Numeral, &lower);
        }

        for (suffix, lemma, pos) in CLITICS {
            if lower == *suffix {
                return self.token(piece, lemma.to_string(), *pos, &lower);
            }
        }

        if self.pronouns.contains(lower.as_str()) {
            return self.token(piece, lower.clone(), PartOfSpeech::Pronoun, &lower);
        }
        if let Some(lemma) = self.auxiliaries.get(lower.as_str()) {
            return self.token(piece, lemma.to_string(), PartOfSpeech::Auxiliary, &lower);
        }
        if self.determiners.contains(lower.as_str()) {
            return self.token(piece, lower.clone(), PartOfSpeech::Determiner, &lower);
        }
        if self.conjunctions.contains(lower.as_str()) {
            return self.token(piece, lower.clone(), PartOfSpeech::Conjunction, &lower);
        }
        if self.adpositions.contains(lower.as_str()) {
            return self.token(piece, lower.clone(), PartOfSpeech::Adposition, &lower);
        }

        let lemma = self.lemmatize(&lower);
        let pos = if lower.ends_with("ly") && lower.len() > 3 {
            PartOfSpeech::Adverb
        } else {
            PartOfSpeech::Noun
        };
        self.token(piece, lemma, pos, &lower)
    }

    fn token(&self, text: &str, lemma: String, pos: PartOfSpeech, lower: &str) -> AnalyzedToken {
        AnalyzedToken {
            text: text.to_string(),
            lemma,
            pos,
            is_stop: self.stopwords.contains(lower),
        }
    }

    /// Derive a lemma from a lowercased word via suffix rules.
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.irregulars.get(word) {
            return lemma.to_string();
        }

        if word.len() > 4 && word.ends_with("ies") {
            return format!("{}y", &word[..word.len() - 3]);
        }
        if word.ends_with("sses") {
            return word[..word.len() - 2].to_string();
        }
        if word.len() > 4
            && (word.ends_with("ches")
                || word.ends_with("shes")
                || word.ends_with("xes")
                || word.ends_with("zes"))
        {
            return word[..word.len() - 2].to_string();
        }
        if word.len() > 3
            && word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
        {
            return word[..word.len() - 1].to_string();
        }
        if word.len() > 5 && word.ends_with("ing") {
            return undouble(&word[..word.len() - 3]);
        }
        if word.len() > 4 && word.ends_with("ied") {
            return format!("{}y", &word[..word.len() - 3]);
        }
        if word.len() > 4 && word.ends_with("ed") {
            let stem = undouble(&word[..word.len() - 2]);
            // Restore a trailing 'e' where the suffix rule ate it (loved, danced).
            if !stem.ends_with("ss") && stem.ends_with(&['v', 'c', 'g', 'z', 'u'][..]) {
                return format!("{}e", stem);
            }
            return stem;
        }

        word.to_string()
    }
}

impl Default for HeuristicAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl NlpAnalyzer for HeuristicAnalyzer {
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken> {
        let mut tokens = Vec::new();

        for chunk in text.split_whitespace() {
            let (leading, rest) = peel_leading_punct(chunk);
            if !leading.is_empty() {
                tokens.push(self.classify(leading));
            }

            let (core, trailing) = peel_trailing_punct(rest);
            if !core.is_empty() {
                if let Some((base, clitic)) = split_clitic(core) {
                    tokens.push(self.classify(base));
                    tokens.push(self.classify(clitic));
                } else {
                    tokens.push(self.classify(core));
                }
            }

            if !trailing.is_empty() {
                tokens.push(self.classify(trailing));
            }
        }

        tokens
    }
}

/// Whether a chunk reads as a number (digits with optional separators).
fn is_numeric(piece: &str) -> bool {
    piece.chars().any(|c| c.is_ascii_digit())
        && piece
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '%'))
}

fn peel_leading_punct(chunk: &str) -> (&str, &str) {
    let core_start = chunk
        .find(|c: char| c.is_alphanumeric())
        .unwrap_or(chunk.len());
    chunk.split_at(core_start)
}

fn peel_trailing_punct(chunk: &str) -> (&str, &str) {
    let core_end = chunk
        .rfind(|c: char| c.is_alphanumeric())
        .map(|i| i + chunk[i..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    chunk.split_at(core_end)
}

/// Split a contraction suffix off a word, e.g. `cafe's` -> (`cafe`, `'s`).
fn split_clitic(core: &str) -> Option<(&str, &str)> {
    if !core.is_ascii() {
        return None;
    }
    let lower = core.to_lowercase();
    for (suffix, _, _) in CLITICS {
        if lower.ends_with(suffix) && lower.len() > suffix.len() {
            let split = core.len() - suffix.len();
            return Some(core.split_at(split));
        }
    }
    None
}

/// Collapse a doubled final consonant (running -> run).
fn undouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 2 {
        let last = chars[chars.len() - 1];
        let prev = chars[chars.len() - 2];
        if last == prev && !"aeioulsz".contains(last) {
            return chars[..chars.len() - 1].iter().collect();
        }
    }
    stem.to_string()
}
