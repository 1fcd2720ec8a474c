//! This crate implements gestalt pattern matching (also known as
//! Ratcliff/Obershelp matching) for arbitrary sequences of hashable
//! elements.
//!
//! The longest contiguous matching block that contains no junk is located
//! first, then the same is done recursively for the parts to the left and
//! to the right of it.  The resulting matching blocks are the basis for
//! edit scripts (opcodes), diff hunks and similarity ratios.  This does not
//! yield minimal edit sequences but tends to produce matches that look
//! right to people.
//!
//! ```rust
//! use gestalt::SequenceMatcher;
//!
//! let a = "private Thread currentThread;".chars().collect::<Vec<_>>();
//! let b = "private volatile Thread currentThread;".chars().collect::<Vec<_>>();
//! let matcher = SequenceMatcher::with_junk(&a, &b, |c: &char| *c == ' ');
//! assert!(matcher.ratio() > 0.86);
//! for op in matcher.get_opcodes() {
//!     println!("{:?}", op.as_opcode());
//! }
//! ```
//!
//! The crate is split into two levels:
//!
//! * [`algorithms`]: the individual stages of the matcher with the most
//!   generic bounds, for callers that want to reuse an index.
//! * [`SequenceMatcher`] and [`get_close_matches`]: the convenient API that
//!   wires the stages together.
//!
//! The [`text`] module adds helpers to match strings by characters, lines
//! or (with the `unicode` feature) grapheme clusters.
//!
//! # Junk
//!
//! Elements of the second sequence can be declared junk with a predicate.
//! Junk never starts a match but is absorbed into matches found next to it.
//! Independently, when the second sequence has at least 200 elements, any
//! element that makes up more than 1% of it is treated as "popular" and
//! left out of the index as well.  This avoids quadratic behavior on inputs
//! dominated by one element (blank lines, for instance) and can be turned
//! off with [`MatcherConfig::auto_junk`].
//!
//! # Features
//!
//! * `text`: enables the [`text`] module (on by default).
//! * `unicode`: enables grapheme cluster splitting.
//! * `serde`: implements serialization for [`Match`], [`DiffOp`] and
//!   [`DiffTag`] and deserialization for the configs.  Unknown fields are
//!   rejected.
//!
//! # Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events at `debug`
//! and `trace` level but never installs a subscriber.
pub mod algorithms;
pub mod text;

mod close;
mod common;
mod error;
mod matcher;
mod types;
mod utils;

pub use self::close::*;
pub use self::common::*;
pub use self::error::*;
pub use self::matcher::*;
pub use self::types::*;
pub use self::utils::*;
