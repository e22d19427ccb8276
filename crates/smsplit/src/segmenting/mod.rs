//! Message segmentation and reassembly.
//!
//! This module splits long messages into SMS-sized segments, each carrying a
//! `" i/N"` counter so the receiver can restore the order, and joins such
//! segments back into the original text.
//!
//! # Limits
//!
//! - Maximum 140 characters per segment, counter included
//! - Uses character count, not byte length
//! - Words are never split; only the space character separates words
//!
//! # Example
//!
//! ```
//! use smsplit::segmenting::{reassemble, segment};
//!
//! // Sender side: split a message
//! let message = "word ".repeat(40);
//! let parts = segment(Some(&message)).unwrap();
//! assert_eq!(parts.len(), 2);
//! assert!(parts[0].ends_with(" 1/2"));
//! assert!(parts[1].ends_with(" 2/2"));
//!
//! // Receiver side: join the parts back together
//! assert_eq!(reassemble(&parts).unwrap(), message);
//! ```
//!
//! # Out-of-Order Arrival
//!
//! SMS parts may arrive in any order. [`SegmentReassembler`] buffers them
//! until every part is present:
//!
//! ```
//! use smsplit::segmenting::{SegmentReassembler, segment};
//!
//! let message = "lorem ipsum ".repeat(30);
//! let parts = segment(Some(&message)).unwrap();
//!
//! let mut reassembler = SegmentReassembler::new();
//! let mut complete = None;
//! for part in parts.iter().rev() {
//!     complete = reassembler.add_segment(part).unwrap();
//! }
//! assert_eq!(complete.as_deref(), Some(message.as_str()));
//! ```

mod counter;
mod reassembly;
mod segmenter;
mod tokens;

pub use counter::SegmentCounter;
pub use reassembly::{SegmentReassembler, reassemble};
pub use segmenter::{Segmenter, segment};
