//! # smsplit
//!
//! Splits long text messages into SMS-sized segments.
//!
//! This crate provides:
//! - **segment**: Word-preserving splitting with `" i/N"` part counters
//! - **Segmenter**: The same algorithm with a configurable segment limit
//! - **SegmentCounter**: Parsing and formatting of part counters
//! - **SegmentReassembler**: Receiver-side reconstruction, in any arrival order
//!
//! ## Sizing
//!
//! The number of segments decides how wide the counter suffix is, and the
//! suffix width decides how many segments are needed. The splitter retries
//! with a larger planned count until both agree, so every segment (counter
//! included) stays within [`MAX_SEGMENT_CHARS`].
//!
//! ```
//! use smsplit::segment;
//!
//! let parts = segment(Some("short message")).unwrap();
//! assert_eq!(parts, vec!["short message"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod limits;
pub mod segmenting;

#[cfg(test)]
mod proptests;

pub use config::{ConfigError, SegmenterConfig, SegmenterConfigBuilder};
pub use error::{Result, SegmentError};
pub use limits::{MAX_SEGMENT_CHARS, MAX_SEGMENTS_PER_MESSAGE};
pub use segmenting::{SegmentCounter, SegmentReassembler, Segmenter, reassemble, segment};
