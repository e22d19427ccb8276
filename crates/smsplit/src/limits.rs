//! Segmentation limits and constants.

/// Maximum characters per segment, counter suffix included.
pub const MAX_SEGMENT_CHARS: usize = 140;

/// Smallest segment limit a [`SegmenterConfig`](crate::SegmenterConfig) accepts.
///
/// Leaves room for the widest counter a message can carry, `" 9999/9999"`,
/// and a few payload characters.
pub const MIN_SEGMENT_CHARS: usize = 16;

/// Maximum segments in one message, enforced by both the segmenter and the
/// reassembler.
pub const MAX_SEGMENTS_PER_MESSAGE: usize = 9999;

/// The character words are split on.
pub const WORD_SEPARATOR: char = ' ';
