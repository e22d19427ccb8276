//! Error types for segmentation and reassembly.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while splitting or reassembling a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// A rendered segment exceeds the segment limit.
    ///
    /// Only reachable when a single word is longer than the payload
    /// capacity of a segment, since words are never split.
    #[error("Segment {index} too long: max {max} characters, got {actual}")]
    SegmentTooLong {
        /// One-based index of the offending segment.
        index: usize,
        /// Maximum allowed characters.
        max: usize,
        /// Actual character count, counter included.
        actual: usize,
    },

    /// Counter values out of range.
    #[error("Invalid segment counter: {index}/{total}")]
    InvalidCounter {
        /// One-based segment index.
        index: usize,
        /// Total number of segments.
        total: usize,
    },

    /// A part of a multi-segment message carries no counter suffix.
    #[error("Segment at position {position} has no counter suffix")]
    MissingCounter {
        /// Zero-based position in the received sequence.
        position: usize,
    },

    /// A counter does not match the segment's position.
    #[error("Segment at position {position} carries counter {found}, expected {expected}")]
    CounterMismatch {
        /// Zero-based position in the received sequence.
        position: usize,
        /// Counter expected at this position, as `i/N`.
        expected: String,
        /// Counter actually found, as `i/N`.
        found: String,
    },

    /// Parts of one message disagree on the total segment count.
    #[error("Segment total mismatch: expected {expected}, got {actual}")]
    TotalMismatch {
        /// Total announced by the first received part.
        expected: usize,
        /// Total announced by the offending part.
        actual: usize,
    },

    /// A message needs, or a counter announces, more segments than a
    /// message may have.
    #[error("Too many segments: max {max}, got {actual}")]
    TooManySegments {
        /// Maximum allowed segments.
        max: usize,
        /// Required or announced segment count.
        actual: usize,
    },

    /// Invalid segmenter configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for segmentation operations.
pub type Result<T> = std::result::Result<T, SegmentError>;
