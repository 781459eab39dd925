#![deny(clippy::all)]

//! Find the duplicate text elements of a string.
//!
//! Strings are split into text elements (extended grapheme clusters,
//! see [elements]), and elements are compared case-insensitively under
//! an explicit [Collation] profile, so the Turkish dotted and dotless I
//! rules apply only when asked for. [duplicate_elements] reports each
//! repeated element once, spelled as its first occurrence and in first
//! occurrence order.

mod collation;
mod duplicates;
mod errors;
mod segment;

pub use crate::collation::Collation;
pub use crate::duplicates::duplicate_elements;
pub use crate::errors::ParseLocaleError;
pub use crate::segment::{element_count, elements};
