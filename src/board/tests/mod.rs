//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `edge_cases.rs` - Positions that exercise blocking, captures and board edges
//! - `proptest.rs` - Property-based tests over random boards
//! - `mod.rs` - Shared helpers


use crate::board::Square;

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}
