//! Property-based tests for segmentation.
//!
//! These tests verify segmentation invariants hold for arbitrary inputs:
//!
//! - Every segment stays within the limit, counter included
//! - Stripping counters and joining with spaces restores the text
//! - Counters run from 1 to N and agree on N
//! - Words are never split across segments

use proptest::prelude::*;

use crate::config::SegmenterConfig;
use crate::limits::{MAX_SEGMENT_CHARS, MIN_SEGMENT_CHARS};
use crate::segmenting::{SegmentCounter, SegmentReassembler, Segmenter, reassemble, segment};

const WORD_CHARS: &[char] = &['a', 'z', 'Q', '7', '.', '!', '\u{e9}', '\u{1F600}'];

/// Words of up to `max_word` characters separated by runs of 1-3 spaces,
/// optionally with leading and trailing spaces.
fn spaced_text(max_word: usize, max_words: usize) -> impl Strategy<Value = String> {
    (
        prop::collection::vec(
            (
                prop::collection::vec(prop::sample::select(WORD_CHARS.to_vec()), 1..=max_word),
                1usize..=3,
            ),
            1..max_words,
        ),
        0usize..=2,
        0usize..=3,
    )
        .prop_map(|(words, leading, trailing)| {
            let mut text = " ".repeat(leading);
            for (i, (word, spaces)) in words.iter().enumerate() {
                if i > 0 {
                    text.push_str(&" ".repeat(*spaces));
                }
                text.extend(word.iter());
            }
            text.push_str(&" ".repeat(trailing));
            text
        })
}

fn strip_counters(parts: &[String]) -> Vec<&str> {
    parts
        .iter()
        .map(|part| {
            SegmentCounter::split_suffix(part)
                .map(|(payload, _)| payload)
                .unwrap_or(part.as_str())
        })
        .collect()
}

fn words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

fn check_segments(text: &str, parts: &[String], max: usize) -> Result<(), TestCaseError> {
    let total = parts.len();
    prop_assert!(total >= 1);

    for part in parts {
        prop_assert!(part.chars().count() <= max, "{:?} exceeds {}", part, max);
    }

    if total == 1 {
        prop_assert_eq!(&parts[0], text);
        return Ok(());
    }

    for (i, part) in parts.iter().enumerate() {
        let suffix = format!(" {}/{}", i + 1, total);
        prop_assert!(part.ends_with(&suffix), "{:?} lacks {}", part, suffix);
    }

    let payloads = strip_counters(parts);
    prop_assert_eq!(payloads.join(" "), text);

    let split_words: Vec<&str> = payloads.iter().flat_map(|payload| words(payload)).collect();
    prop_assert_eq!(split_words, words(text));

    Ok(())
}

// ==================== Segmentation Property Tests ====================

proptest! {
    /// Messages within the limit come back unchanged.
    #[test]
    fn short_messages_unchanged(content in ".{1,140}") {
        prop_assume!(content.chars().count() <= MAX_SEGMENT_CHARS);
        let parts = segment(Some(&content)).unwrap();
        prop_assert_eq!(parts, vec![content]);
    }

    /// Default limit: bounds, counters, round trip, whole words.
    #[test]
    fn default_limit_invariants(text in spaced_text(12, 300)) {
        let parts = segment(Some(&text)).unwrap();
        check_segments(&text, &parts, MAX_SEGMENT_CHARS)?;
    }

    /// Small limits force many segments and counter width growth.
    #[test]
    fn small_limit_invariants(
        max in MIN_SEGMENT_CHARS..=40usize,
        text in spaced_text(6, 250)
    ) {
        let config = SegmenterConfig::builder().with_max_segment_chars(max).build();
        let segmenter = Segmenter::new(config).unwrap();

        let parts = segmenter.split(&text).unwrap();
        check_segments(&text, &parts, max)?;
    }

    /// Space-only messages survive exactly.
    #[test]
    fn only_spaces_roundtrip(len in 1usize..600) {
        let text = " ".repeat(len);
        let parts = segment(Some(&text)).unwrap();
        check_segments(&text, &parts, MAX_SEGMENT_CHARS)?;
    }

    /// Segmentation is deterministic.
    #[test]
    fn segmentation_deterministic(text in spaced_text(10, 100)) {
        prop_assert_eq!(segment(Some(&text)).unwrap(), segment(Some(&text)).unwrap());
    }

    /// Batch reassembly restores the message.
    #[test]
    fn reassemble_roundtrip(text in spaced_text(12, 200)) {
        let parts = segment(Some(&text)).unwrap();
        prop_assert_eq!(reassemble(&parts).unwrap(), text);
    }

    /// Reassembly in reverse arrival order restores the message.
    #[test]
    fn reverse_order_reassembly(text in spaced_text(12, 200)) {
        let parts = segment(Some(&text)).unwrap();
        let mut reassembler = SegmentReassembler::new();

        let mut result = None;
        for part in parts.iter().rev() {
            if let Some(complete) = reassembler.add_segment(part).unwrap() {
                result = Some(complete);
            }
        }

        prop_assert_eq!(result, Some(text));
    }

    /// Any word longer than a segment can hold is rejected.
    #[test]
    fn oversized_word_rejected(extra in 1usize..50, prefix in "[a-z ]{0,20}") {
        let text = format!("{prefix}{}", "w".repeat(MAX_SEGMENT_CHARS + extra));
        prop_assert!(segment(Some(&text)).is_err());
    }
}
