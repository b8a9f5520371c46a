//! Sentence boundary mapping over the flattened token text.
//!
//! Used when sentence boundaries were detected over the ASR's own transcript
//! text (same-source mode): the splitter's byte spans index into the exact
//! flattened text, so token membership is pure offset arithmetic.

use super::SentenceSpan;
use crate::nlp::SentenceBoundary;
use crate::timing::{FlattenedTokens, Token};
use tracing::debug;

/// Map sentence boundary spans to sentence spans with their tokens.
///
/// A token belongs to a sentence iff its `[offset, offset + len)` byte range
/// is fully contained in the boundary's `[start, end)`. A token straddling a
/// boundary is excluded from both neighboring sentences; this avoids
/// double-counting at the cost of losing the straddler. Sentences with zero
/// contained tokens carry no timing information and are dropped.
pub fn map_boundaries(
    tokens: &[Token],
    flat: &FlattenedTokens,
    boundaries: &[SentenceBoundary],
) -> Vec<SentenceSpan> {
    let mut spans = Vec::with_capacity(boundaries.len());

    for boundary in boundaries {
        let text = flat
            .text
            .get(boundary.start..boundary.end)
            .unwrap_or("")
            .trim();

        let contained: Vec<Token> = tokens
            .iter()
            .enumerate()
            .filter(|(k, token)| {
                let offset = flat.offsets[*k];
                offset >= boundary.start && offset + token.text.len() <= boundary.end
            })
            .map(|(_, token)| token.clone())
            .collect();

        match SentenceSpan::from_tokens(text, contained) {
            Some(span) => spans.push(span),
            None => debug!(
                "Dropping sentence with no contained tokens: '{}' [{}, {})",
                text, boundary.start, boundary.end
            ),
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Vec<Token> {
        vec![
            Token::new("hello", 0.0, 0.4, 1.0),
            Token::new("world.", 0.4, 0.9, 1.0),
            Token::new("more", 1.0, 1.3, 1.0),
            Token::new("words", 1.3, 1.8, 1.0),
        ]
    }

    #[test]
    fn test_maps_tokens_into_sentences() {
        let tokens = tokens();
        let flat = FlattenedTokens::flatten(&tokens);
        // "hello world. more words"
        let boundaries = vec![
            SentenceBoundary::new(0, 12),
            SentenceBoundary::new(13, 23),
        ];

        let spans = map_boundaries(&tokens, &flat, &boundaries);
        assert_eq!(spans.len(), 2);

        assert_eq!(spans[0].text, "hello world.");
        assert_eq!(spans[0].words.len(), 2);
        assert_eq!(spans[0].start, 0.0);
        assert_eq!(spans[0].end, 0.9);

        assert_eq!(spans[1].text, "more words");
        assert_eq!(spans[1].start, 1.0);
        assert_eq!(spans[1].end, 1.8);
    }

    #[test]
    fn test_span_times_derive_from_first_and_last_token() {
        let tokens = tokens();
        let flat = FlattenedTokens::flatten(&tokens);
        let boundaries = vec![SentenceBoundary::new(0, flat.text.len())];

        let spans = map_boundaries(&tokens, &flat, &boundaries);
        assert_eq!(spans[0].start, spans[0].words.first().unwrap().start);
        assert_eq!(spans[0].end, spans[0].words.last().unwrap().end);
    }

    #[test]
    fn test_straddling_token_excluded_from_both_sides() {
        let tokens = tokens();
        let flat = FlattenedTokens::flatten(&tokens);
        // Boundary at byte 8 cuts through "world." (offsets 6..12): the
        // token is partially inside both spans and must appear in neither.
        let boundaries = vec![SentenceBoundary::new(0, 8), SentenceBoundary::new(8, 23)];

        let spans = map_boundaries(&tokens, &flat, &boundaries);
        let all_words: Vec<&str> = spans
            .iter()
            .flat_map(|s| s.words.iter().map(|w| w.text.as_str()))
            .collect();
        assert!(!all_words.contains(&"world."));
    }

    #[test]
    fn test_one_token_sentence_straddling_boundary_is_dropped() {
        let tokens = vec![Token::new("lonely", 0.0, 0.5, 1.0)];
        let flat = FlattenedTokens::flatten(&tokens);
        // The span covers only part of the single token, so the token is
        // excluded and the sentence has nothing left: no span is emitted.
        let boundaries = vec![SentenceBoundary::new(0, 3)];

        let spans = map_boundaries(&tokens, &flat, &boundaries);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_empty_sentences_dropped_silently() {
        let tokens = tokens();
        let flat = FlattenedTokens::flatten(&tokens);
        // A zero-width span between words contains no tokens.
        let boundaries = vec![SentenceBoundary::new(12, 13)];

        let spans = map_boundaries(&tokens, &flat, &boundaries);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_sentence_text_is_trimmed_span_text() {
        let tokens = tokens();
        let flat = FlattenedTokens::flatten(&tokens);
        // Include the separating space before "more".
        let boundaries = vec![SentenceBoundary::new(12, 23)];

        let spans = map_boundaries(&tokens, &flat, &boundaries);
        assert_eq!(spans[0].text, "more words");
    }
}
