//! Segment reassembly.
//!
//! Reverses [`segment`](super::segment): each part's `" i/N"` counter is
//! stripped and the payloads are joined with single spaces, in counter
//! order.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::error::{Result, SegmentError};
use crate::limits::MAX_SEGMENTS_PER_MESSAGE;

use super::counter::SegmentCounter;

/// Join an ordered batch of segments back into the original message.
///
/// An empty batch yields an empty string and a single segment is returned
/// as is, since a message that fits one segment carries no counter.
///
/// # Errors
///
/// Returns an error if a part of a multi-segment batch has no counter
/// ([`SegmentError::MissingCounter`]) or its counter does not match its
/// position and the batch size ([`SegmentError::CounterMismatch`]).
///
/// # Example
///
/// ```
/// use smsplit::{reassemble, segment};
///
/// let message = "ping ".repeat(50);
/// let parts = segment(Some(&message)).unwrap();
/// assert_eq!(reassemble(&parts).unwrap(), message);
/// ```
pub fn reassemble<S: AsRef<str>>(segments: &[S]) -> Result<String> {
    match segments {
        [] => return Ok(String::new()),
        [single] => return Ok(single.as_ref().to_string()),
        _ => {}
    }

    let total = segments.len();
    let mut payloads = Vec::with_capacity(total);

    for (position, segment) in segments.iter().enumerate() {
        let (payload, counter) = SegmentCounter::split_suffix(segment.as_ref())
            .ok_or(SegmentError::MissingCounter { position })?;

        if counter.index() != position + 1 || counter.total() != total {
            return Err(SegmentError::CounterMismatch {
                position,
                expected: format!("{}/{}", position + 1, total),
                found: counter.to_string(),
            });
        }

        payloads.push(payload);
    }

    Ok(payloads.join(" "))
}

/// Collects the parts of one message as they arrive, in any order.
///
/// A part without a counter, received while nothing is pending, is a
/// complete single-segment message. Duplicate parts are ignored. Once the
/// message completes the reassembler resets and can take the next one.
///
/// A single-segment message that happens to end in something shaped like
/// `" 1/2"` is indistinguishable from a counter; use [`reassemble`] when the
/// whole batch is known.
///
/// # Example
///
/// ```
/// use smsplit::{SegmentReassembler, segment};
///
/// let message = "out of order ".repeat(20);
/// let mut parts = segment(Some(&message)).unwrap();
/// parts.reverse();
///
/// let mut reassembler = SegmentReassembler::new();
/// let last = parts.pop().unwrap();
/// for part in &parts {
///     assert_eq!(reassembler.add_segment(part).unwrap(), None);
/// }
/// assert_eq!(reassembler.add_segment(&last).unwrap(), Some(message));
/// ```
#[derive(Debug, Default)]
pub struct SegmentReassembler {
    /// Total announced by the first counted part.
    total: Option<usize>,
    /// Payloads received so far, keyed by one-based index.
    payloads: BTreeMap<usize, String>,
    /// Parts offered since the last reset, duplicates included.
    arrivals: usize,
}

impl SegmentReassembler {
    /// Create an empty reassembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a received segment.
    ///
    /// Returns `Ok(Some(message))` when this segment completes the message,
    /// `Ok(None)` while parts are still missing.
    ///
    /// # Errors
    ///
    /// - [`SegmentError::MissingCounter`] if a part without counter arrives
    ///   while a multi-segment message is pending
    /// - [`SegmentError::TooManySegments`] if the counter announces more
    ///   than [`MAX_SEGMENTS_PER_MESSAGE`] parts
    /// - [`SegmentError::TotalMismatch`] if the counter disagrees with the
    ///   total of the pending message
    pub fn add_segment(&mut self, segment: &str) -> Result<Option<String>> {
        let position = self.arrivals;

        let Some((payload, counter)) = SegmentCounter::split_suffix(segment) else {
            if self.total.is_some() {
                return Err(SegmentError::MissingCounter { position });
            }
            return Ok(Some(segment.to_string()));
        };

        if counter.total() > MAX_SEGMENTS_PER_MESSAGE {
            return Err(SegmentError::TooManySegments {
                max: MAX_SEGMENTS_PER_MESSAGE,
                actual: counter.total(),
            });
        }

        match self.total {
            Some(expected) if expected != counter.total() => {
                return Err(SegmentError::TotalMismatch {
                    expected,
                    actual: counter.total(),
                });
            }
            Some(_) => {}
            None => self.total = Some(counter.total()),
        }

        self.arrivals += 1;
        if self.payloads.contains_key(&counter.index()) {
            debug!(%counter, "duplicate segment ignored");
            return Ok(None);
        }

        trace!(%counter, "segment received");
        self.payloads.insert(counter.index(), payload.to_string());

        if !self.is_complete() {
            return Ok(None);
        }

        let message = self
            .payloads
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        self.reset();

        Ok(Some(message))
    }

    /// Total segments expected, once a counted part has arrived.
    pub fn expected(&self) -> Option<usize> {
        self.total
    }

    /// Number of distinct parts received.
    pub fn received(&self) -> usize {
        self.payloads.len()
    }

    /// Check if every part of the pending message has arrived.
    pub fn is_complete(&self) -> bool {
        self.total.is_some_and(|total| self.payloads.len() == total)
    }

    /// Drop all buffered parts.
    pub fn reset(&mut self) {
        self.total = None;
        self.payloads.clear();
        self.arrivals = 0;
    }
}
