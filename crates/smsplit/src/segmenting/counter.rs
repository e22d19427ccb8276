//! Segment counter suffixes.
//!
//! Every part of a multi-segment message ends with `" i/N"`, where `i` is
//! the one-based position and `N` the total number of parts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SegmentError};
use crate::limits::WORD_SEPARATOR;

/// Position of a segment within its parent message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCounter")]
pub struct SegmentCounter {
    /// One-based index of this segment.
    index: usize,
    /// Total number of segments in the message.
    total: usize,
}

impl SegmentCounter {
    /// Create a counter for segment `index` (one-based) of `total`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidCounter`] if `total` is 0 or
    /// `index` is outside `1..=total`.
    pub fn new(index: usize, total: usize) -> Result<Self> {
        if total == 0 || index == 0 || index > total {
            return Err(SegmentError::InvalidCounter { index, total });
        }
        Ok(Self { index, total })
    }

    /// Check if this is the first segment.
    pub fn is_first(&self) -> bool {
        self.index == 1
    }

    /// Check if this is the last segment.
    pub fn is_last(&self) -> bool {
        self.index == self.total
    }

    /// Get the one-based segment index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the total number of segments.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The suffix appended to the segment, e.g. `" 3/12"`.
    pub fn suffix(&self) -> String {
        format!("{WORD_SEPARATOR}{}", self)
    }

    /// Character length of the suffix for `index` of `total`.
    ///
    /// Does not validate the pair; the segmenter sizes suffixes for indices
    /// past its planned total while it is still searching for the real one.
    pub fn suffix_len(index: usize, total: usize) -> usize {
        1 + digit_count(index) + 1 + digit_count(total)
    }

    /// Strip a trailing `" i/N"` counter from a rendered segment.
    ///
    /// Returns the payload in front of the counter together with the parsed
    /// counter, or `None` if the segment does not end in a well-formed one.
    /// Digits must be canonical: `"01/2"` is not a counter.
    ///
    /// ```
    /// use smsplit::SegmentCounter;
    ///
    /// let (payload, counter) = SegmentCounter::split_suffix("see you 2/3").unwrap();
    /// assert_eq!(payload, "see you");
    /// assert_eq!((counter.index(), counter.total()), (2, 3));
    ///
    /// assert!(SegmentCounter::split_suffix("no counter here").is_none());
    /// ```
    pub fn split_suffix(segment: &str) -> Option<(&str, Self)> {
        let (payload, raw) = segment.rsplit_once(WORD_SEPARATOR)?;
        let (index, total) = raw.split_once('/')?;

        let counter = Self::new(parse_decimal(index)?, parse_decimal(total)?).ok()?;
        if counter.to_string() != raw {
            return None;
        }

        Some((payload, counter))
    }
}

/// Unvalidated wire form of a [`SegmentCounter`].
#[derive(Deserialize)]
struct RawCounter {
    index: usize,
    total: usize,
}

impl TryFrom<RawCounter> for SegmentCounter {
    type Error = SegmentError;

    fn try_from(raw: RawCounter) -> Result<Self> {
        Self::new(raw.index, raw.total)
    }
}

impl fmt::Display for SegmentCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.index, self.total)
    }
}

/// Number of decimal digits needed to print `n`.
pub(crate) fn digit_count(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

fn parse_decimal(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
