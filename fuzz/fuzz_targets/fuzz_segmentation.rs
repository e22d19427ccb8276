//! Fuzz target for message segmentation.
//!
//! Tests that segmentation handles arbitrary input safely and that every
//! successful split restores the original text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use smsplit::{MAX_SEGMENT_CHARS, SegmentError, reassemble, segment};

fuzz_target!(|data: &[u8]| {
    // Try to interpret input as a UTF-8 string
    if let Ok(message) = std::str::from_utf8(data) {
        match segment(Some(message)) {
            Ok(parts) => {
                if message.is_empty() {
                    assert!(parts.is_empty());
                    return;
                }

                // Each part should have <= 140 characters
                for part in &parts {
                    assert!(part.chars().count() <= MAX_SEGMENT_CHARS);
                }

                // Counters should run from 1 to N
                if parts.len() > 1 {
                    for (i, part) in parts.iter().enumerate() {
                        assert!(part.ends_with(&format!(" {}/{}", i + 1, parts.len())));
                    }
                }

                // Reassembly should restore the original
                assert_eq!(reassemble(&parts).unwrap(), message);
            }
            // Only a word that cannot fit any segment may fail
            Err(SegmentError::SegmentTooLong { .. }) => {
                assert!(message.split(' ').any(|word| word.chars().count() > 120));
            }
            Err(SegmentError::TooManySegments { .. }) => {
                assert!(message.chars().count() > MAX_SEGMENT_CHARS * 1000);
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
});
