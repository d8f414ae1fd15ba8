//! Roll-call vote schema and deserialization.
//!
//! The Senate publishes each roll-call vote as an XML document: a
//! metadata block of scalar elements plus one `members` element
//! wrapping a `member` element per legislator. This module owns the
//! record types for that document, the field/tag mapping, and the
//! [`deserialize`] entry point that turns raw bytes into a
//! [`RollCallVote`].
//!
//! Rendering lives in [`crate::report`]; fetching lives in
//! [`crate::senate`].

mod de;
mod types;

pub use de::{deserialize, DeserializeError};
pub use types::{tags, Member, MemberList, RollCallVote, COMPOSITE_TAGS};
