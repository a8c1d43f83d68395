//! Program document loading.
//!
//! A convenience loader outside the propagation contract: propagation only
//! ever sees an [`ObjectTree`](crate::tree::ObjectTree), however it was built.
//! Parsing source text is someone else's job; this module only reads the
//! XML form (XMIR) that parsers emit, so that a graph can be built and
//! enriched without linking a parser.

mod error;
mod xmir;

pub use error::InterchangeError;
pub use xmir::{read_xmir, read_xmir_file};
