//! The matching engine.
//!
//! The functions in this module are the individual stages of gestalt
//! pattern matching and expose the most generic bounds possible.  Most
//! users want the [`SequenceMatcher`](crate::SequenceMatcher) which wires
//! them together, but direct access is useful when the same index is to
//! be reused for many comparisons.
//!
//! The stages build on each other:
//!
//! 1. [`JunkIndex`] indexes the second sequence, leaving out junk and
//!    popular elements.
//! 2. [`find_longest_match`] finds the longest junk-free matching block
//!    within sub ranges of both sequences.
//! 3. [`get_matching_blocks`] repeatedly splits the sequences around the
//!    longest match into a sorted list of [`Match`](crate::Match)es.
//! 4. [`emit_opcodes`] turns the matching blocks into an edit script that
//!    is reported to a [`DiffHook`].  [`capture_opcodes`] collects it into
//!    [`DiffOp`](crate::DiffOp)s with the [`Capture`] hook.

mod blocks;
mod hook;
mod junk;
mod longest;
mod opcodes;

pub use self::blocks::{get_matching_blocks, matched_len};
pub use self::hook::DiffHook;
pub use self::junk::{JunkIndex, AUTO_JUNK_MIN_LEN};
pub use self::longest::find_longest_match;
pub use self::opcodes::{capture_opcodes, emit_opcodes, Capture};
