//! String similarity strategies for window scoring.
//!
//! The windowing, threshold, and tie-break policy in the fuzzy aligner are
//! the contract; the similarity formula is pluggable behind [`Similarity`]
//! so it can be swapped without touching that logic.

use serde::{Deserialize, Serialize};

/// A symmetric, normalized string similarity in `[0, 1]`.
pub trait Similarity: Send + Sync {
    fn ratio(&self, a: &str, b: &str) -> f64;
}

/// Available similarity strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimilarityKind {
    /// Longest-matching-blocks ratio (`2*M / (len_a + len_b)`).
    #[default]
    MatchingBlocks,
    /// Normalized Levenshtein distance.
    Levenshtein,
    /// Jaro-Winkler similarity.
    JaroWinkler,
}

impl std::str::FromStr for SimilarityKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "matching-blocks" | "matching_blocks" => Ok(SimilarityKind::MatchingBlocks),
            "levenshtein" => Ok(SimilarityKind::Levenshtein),
            "jaro-winkler" | "jaro_winkler" => Ok(SimilarityKind::JaroWinkler),
            _ => Err(format!("Unknown similarity strategy: {}", s)),
        }
    }
}

impl std::fmt::Display for SimilarityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimilarityKind::MatchingBlocks => write!(f, "matching-blocks"),
            SimilarityKind::Levenshtein => write!(f, "levenshtein"),
            SimilarityKind::JaroWinkler => write!(f, "jaro-winkler"),
        }
    }
}

/// Create a similarity strategy by kind.
pub fn create_similarity(kind: SimilarityKind) -> Box<dyn Similarity> {
    match kind {
        SimilarityKind::MatchingBlocks => Box::new(MatchingBlocks),
        SimilarityKind::Levenshtein => Box::new(NormalizedLevenshtein),
        SimilarityKind::JaroWinkler => Box::new(JaroWinkler),
    }
}

/// Classic sequence-matching ratio: recursively find the longest common
/// substring, then match the pieces to its left and right. The ratio is
/// `2 * matched_chars / (len_a + len_b)`.
pub struct MatchingBlocks;

impl Similarity for MatchingBlocks {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * matching_chars(&a, &b) as f64 / total as f64
    }
}

/// Total characters covered by matching blocks between `a` and `b`.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (ai, bi, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_chars(&a[..ai], &b[..bi]) + matching_chars(&a[ai + len..], &b[bi + len..])
}

/// Longest common substring of `a` and `b`; ties resolve to the earliest
/// position in `a`, then in `b`.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // lengths[j] = length of common suffix ending at a[i], b[j]
    let mut lengths = vec![0usize; b.len() + 1];

    for i in 0..a.len() {
        let mut prev = 0;
        for j in 0..b.len() {
            let current = lengths[j + 1];
            if a[i] == b[j] {
                let len = prev + 1;
                lengths[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            } else {
                lengths[j + 1] = 0;
            }
            prev = current;
        }
    }

    best
}

/// Levenshtein distance normalized to a similarity in `[0, 1]`.
pub struct NormalizedLevenshtein;

impl Similarity for NormalizedLevenshtein {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b)
    }
}

/// Jaro-Winkler similarity.
pub struct JaroWinkler;

impl Similarity for JaroWinkler {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_blocks_identical() {
        assert!((MatchingBlocks.ratio("abc", "abc") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_matching_blocks_disjoint() {
        assert_eq!(MatchingBlocks.ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_matching_blocks_known_ratio() {
        // "abcd" vs "bcde": common block "bcd" -> 2*3 / 8
        assert!((MatchingBlocks.ratio("abcd", "bcde") - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_matching_blocks_empty() {
        assert_eq!(MatchingBlocks.ratio("", ""), 1.0);
        assert_eq!(MatchingBlocks.ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_matching_blocks_is_symmetric() {
        let a = "united state country";
        let b = "the united states is a country";
        assert!((MatchingBlocks.ratio(a, b) - MatchingBlocks.ratio(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_longest_common_block_prefers_earliest() {
        let a: Vec<char> = "abXab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        assert_eq!(longest_common_block(&a, &b), (0, 0, 2));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(
            "matching-blocks".parse::<SimilarityKind>().unwrap(),
            SimilarityKind::MatchingBlocks
        );
        assert_eq!(
            "jaro-winkler".parse::<SimilarityKind>().unwrap(),
            SimilarityKind::JaroWinkler
        );
        assert!("nonsense".parse::<SimilarityKind>().is_err());
    }

    #[test]
    fn test_strsim_strategies_normalized() {
        for strategy in [
            create_similarity(SimilarityKind::Levenshtein),
            create_similarity(SimilarityKind::JaroWinkler),
        ] {
            let r = strategy.ratio("kitten", "sitting");
            assert!(r > 0.0 && r < 1.0);
            assert!((strategy.ratio("same", "same") - 1.0).abs() < 1e-9);
        }
    }
}
