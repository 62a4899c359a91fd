//! Equivalence groups.
//!
//! An equivalence group is an ordered, duplicate-free list of normalized
//! keys that all mean the same thing, the first of which is the preferred
//! (canonical) member.
//!
//! - [`equivalents::Equivalents`] - the generic group
//! - [`synonyms::Synonyms`] - word-level groups
//! - [`wordings::Wordings`] - phrase-level groups that also remember the
//!   phrases (and so the lexicons) they were built from
//!
//! Groups are registered in a [`Dictionary`](crate::dictionary::Dictionary),
//! which merges overlapping groups so that every cluster of equivalent
//! spellings ends up in exactly one group.

pub mod equivalents;
pub mod synonyms;
pub mod wordings;

pub use equivalents::{Equivalents, SerializedEquivalents};
pub use synonyms::Synonyms;
pub use wordings::Wordings;
