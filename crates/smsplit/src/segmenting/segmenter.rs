//! Word-preserving message splitting.
//!
//! The width of the `" i/N"` counter depends on how many segments there
//! are, and the number of segments depends on how much room the counter
//! leaves. [`Segmenter::split`] starts from the smallest plausible count and
//! walks the words. Only the width of the planned count matters, so when the
//! real count needs more digits the walk is abandoned and the next attempt
//! plans the count it reached. Each retry adds a digit.

use tracing::{debug, trace};

use crate::config::SegmenterConfig;
use crate::error::{Result, SegmentError};
use crate::limits::{MAX_SEGMENT_CHARS, MAX_SEGMENTS_PER_MESSAGE, WORD_SEPARATOR};

use super::counter::{SegmentCounter, digit_count};
use super::tokens::{Token, tokenize};

/// Segment content collected during one attempt, before its counter is added.
#[derive(Debug, Default)]
struct Draft {
    content: String,
    chars: usize,
}

impl Draft {
    fn push(&mut self, token: &Token<'_>) {
        self.content.push_str(token.text());
        self.chars += token.chars();
    }

    fn is_empty(&self) -> bool {
        self.chars == 0
    }

    fn ends_with_space(&self) -> bool {
        self.content.ends_with(WORD_SEPARATOR)
    }
}

impl From<&Token<'_>> for Draft {
    fn from(token: &Token<'_>) -> Self {
        let mut draft = Self::default();
        draft.push(token);
        draft
    }
}

/// Outcome of walking the words with one planned segment count.
#[derive(Debug)]
enum Attempt {
    /// Every word was placed and the counter width held.
    Settled(Vec<Draft>),
    /// The real segment count outgrew the planned counter width.
    Retry {
        /// Segment count at the point the walk was abandoned.
        reached: usize,
    },
}

/// Settled drafts and the number of attempts it took to find them.
#[derive(Debug)]
struct Resolution {
    drafts: Vec<Draft>,
    attempts: usize,
}

/// Splits messages into counter-suffixed segments.
///
/// # Example
///
/// ```
/// use smsplit::{Segmenter, SegmenterConfig};
///
/// let config = SegmenterConfig::builder().with_max_segment_chars(20).build();
/// let segmenter = Segmenter::new(config).unwrap();
///
/// let parts = segmenter.split("the quick brown fox jumps over the lazy dog").unwrap();
/// assert_eq!(parts, vec![
///     "the quick brown 1/3",
///     "fox jumps over 2/3",
///     "the lazy dog 3/3",
/// ]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    max_segment_chars: usize,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self {
            max_segment_chars: MAX_SEGMENT_CHARS,
        }
    }
}

impl Segmenter {
    /// Create a segmenter from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::Config`] if the configuration is invalid.
    pub fn new(config: SegmenterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            max_segment_chars: config.max_segment_chars,
        })
    }

    /// Get the maximum characters per segment, counter included.
    pub fn max_segment_chars(&self) -> usize {
        self.max_segment_chars
    }

    /// Split `text` into segments of at most `max_segment_chars` characters.
    ///
    /// - Empty text yields no segments.
    /// - Text that fits in one segment is returned unchanged, without counter.
    /// - Longer text is split between words; segment `i` of `N` ends with
    ///   `" i/N"`. Stripping the counters and joining the rest with single
    ///   spaces gives back `text` exactly, including runs of spaces and
    ///   trailing spaces.
    ///
    /// # Errors
    ///
    /// - [`SegmentError::SegmentTooLong`] if a word is too long to fit any
    ///   segment together with its counter
    /// - [`SegmentError::TooManySegments`] if the message needs more than
    ///   [`MAX_SEGMENTS_PER_MESSAGE`] segments
    pub fn split(&self, text: &str) -> Result<Vec<String>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let char_count = text.chars().count();
        if char_count <= self.max_segment_chars {
            return Ok(vec![text.to_string()]);
        }

        let tokens = tokenize(text);
        let Resolution { drafts, attempts } =
            self.resolve(&tokens, char_count.div_ceil(self.max_segment_chars))?;

        debug!(
            chars = char_count,
            segments = drafts.len(),
            attempts,
            "message segmented"
        );

        self.render(drafts)
    }

    /// Find the segment layout whose counter width holds, starting from
    /// `planned` segments.
    fn resolve(&self, tokens: &[Token<'_>], mut planned: usize) -> Result<Resolution> {
        let mut attempts = 0;

        loop {
            if planned > MAX_SEGMENTS_PER_MESSAGE {
                return Err(SegmentError::TooManySegments {
                    max: MAX_SEGMENTS_PER_MESSAGE,
                    actual: planned,
                });
            }

            attempts += 1;
            match self.attempt(tokens, planned) {
                Attempt::Settled(drafts) => return Ok(Resolution { drafts, attempts }),
                Attempt::Retry { reached } => planned = reached.max(planned + 1),
            }
        }
    }

    /// Place every token assuming the message ends up with `planned` segments.
    ///
    /// Exactly one space is consumed at each segment boundary: either the
    /// space that ends a draft or a space that did not fit. Any further
    /// space at the same boundary is payload of the next segment.
    fn attempt(&self, tokens: &[Token<'_>], planned: usize) -> Attempt {
        let width = digit_count(planned);
        trace!(planned, width, "segmentation attempt");

        let mut drafts = vec![Draft::default()];
        let mut separator_dropped = false;

        for token in tokens {
            let index = drafts.len();
            let available = self
                .max_segment_chars
                .saturating_sub(SegmentCounter::suffix_len(index, planned));
            let current = &mut drafts[index - 1];
            let remaining = available.saturating_sub(current.chars);

            if token.chars() <= remaining {
                current.push(token);
                continue;
            }

            if token.is_space() && !separator_dropped && !current.ends_with_space() {
                separator_dropped = true;
                continue;
            }

            // Only a first word longer than a whole segment gets here.
            if current.is_empty() {
                current.push(token);
                continue;
            }

            drafts.push(Draft::from(token));
            separator_dropped = false;
            if self.outgrew(drafts.len(), planned, width) {
                return Attempt::Retry {
                    reached: drafts.len(),
                };
            }
        }

        // The text ends in a space that spilled over the last segment.
        if separator_dropped {
            drafts.push(Draft::default());
            if self.outgrew(drafts.len(), planned, width) {
                return Attempt::Retry {
                    reached: drafts.len(),
                };
            }
        }

        Attempt::Settled(drafts)
    }

    fn outgrew(&self, actual: usize, planned: usize, width: usize) -> bool {
        if digit_count(actual) <= width {
            return false;
        }

        debug!(
            planned,
            actual, "segment counter outgrew planned width, retrying"
        );
        true
    }

    /// Append counters and enforce the segment limit.
    fn render(&self, drafts: Vec<Draft>) -> Result<Vec<String>> {
        let total = drafts.len();

        drafts
            .into_iter()
            .enumerate()
            .map(|(i, draft)| {
                let counter = SegmentCounter::new(i + 1, total)?;

                // A draft that closed on a space already carries the
                // separator; the last draft's trailing spaces are payload.
                let mut rendered = draft.content;
                if counter.is_last() || !rendered.ends_with(WORD_SEPARATOR) {
                    rendered.push(WORD_SEPARATOR);
                }
                rendered.push_str(&counter.to_string());

                let actual = rendered.chars().count();
                if actual > self.max_segment_chars {
                    return Err(SegmentError::SegmentTooLong {
                        index: counter.index(),
                        max: self.max_segment_chars,
                        actual,
                    });
                }

                Ok(rendered)
            })
            .collect()
    }
}

/// Split a message into SMS segments of at most [`MAX_SEGMENT_CHARS`]
/// characters.
///
/// `None` and `""` yield an empty vector. See [`Segmenter::split`] for the
/// full contract.
///
/// # Errors
///
/// Returns [`SegmentError::SegmentTooLong`] if the text contains a word that
/// cannot fit a segment, or [`SegmentError::TooManySegments`] if it needs
/// more than [`MAX_SEGMENTS_PER_MESSAGE`] segments.
///
/// # Example
///
/// ```
/// use smsplit::segment;
///
/// assert!(segment(None).unwrap().is_empty());
/// assert!(segment(Some("")).unwrap().is_empty());
///
/// let text = "x".repeat(100) + " " + &"y".repeat(100);
/// let parts = segment(Some(&text)).unwrap();
/// assert_eq!(parts.len(), 2);
/// assert_eq!(parts[0], "x".repeat(100) + " 1/2");
/// assert_eq!(parts[1], "y".repeat(100) + " 2/2");
/// ```
pub fn segment(text: Option<&str>) -> Result<Vec<String>> {
    Segmenter::default().split(text.unwrap_or_default())
}
