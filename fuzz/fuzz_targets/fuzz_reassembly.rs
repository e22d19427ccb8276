//! Fuzz target for segment reassembly.
//!
//! Feeds arbitrary lines to the reassembler; it must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use smsplit::{SegmentReassembler, reassemble};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let parts: Vec<&str> = input.split('\n').collect();

        let _ = reassemble(&parts);

        let mut reassembler = SegmentReassembler::new();
        for part in parts {
            if reassembler.add_segment(part).is_err() {
                reassembler.reset();
            }
        }
    }
});
