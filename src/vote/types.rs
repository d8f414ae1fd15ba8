//! Record types for Senate roll-call vote documents.

use serde::Deserialize;

use crate::report::{FieldSpec, FieldValue, Record};

/// External element names used in the roll-call vote wire format.
///
/// This is the single mapping between in-memory fields and the tags the
/// Senate publishes. Both the deserializer (via the serde renames on the
/// record types, which must agree with these constants) and the
/// reporter's exclusion logic key off these names.
pub mod tags {
    pub const ROOT: &str = "roll_call_vote";
    pub const MEMBERS: &str = "members";
    pub const MEMBER: &str = "member";

    pub const CONGRESS: &str = "congress";
    pub const SESSION: &str = "session";
    pub const CONGRESS_YEAR: &str = "congress_year";
    pub const VOTE_NUMBER: &str = "vote_number";
    pub const VOTE_DATE: &str = "vote_date";
    pub const VOTE_QUESTION: &str = "vote_question_text";
    pub const VOTE_DOC_TEXT: &str = "vote_document_text";

    pub const MEMBER_FULL: &str = "member_full";
    pub const LAST_NAME: &str = "last_name";
    pub const FIRST_NAME: &str = "first_name";
    pub const PARTY: &str = "party";
    pub const STATE: &str = "state";
    pub const VOTE_CAST: &str = "vote_cast";
    pub const LIS_MEMBER: &str = "lis_member";
}

/// Tags that name composite structure rather than a scalar: the nested
/// member collection and the document root. The reporter skips these
/// during the metadata phase.
pub const COMPOSITE_TAGS: &[&str] = &[tags::MEMBERS, tags::ROOT];

/// One legislator's recorded vote.
///
/// Every field is propagated verbatim from the document; nothing is
/// validated against an enum (party and vote values vary across
/// chambers and eras). Missing elements decode to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    /// Display name, e.g. "Booker (D-NJ)"
    #[serde(rename = "member_full", default)]
    pub full_name: String,
    #[serde(rename = "last_name", default)]
    pub last_name: String,
    #[serde(rename = "first_name", default)]
    pub first_name: String,
    /// Party code, e.g. "R", "D", "I"
    #[serde(default)]
    pub party: String,
    /// Two-letter state abbreviation, e.g. "NJ"
    #[serde(default)]
    pub state: String,
    /// Cast vote, e.g. "Yea", "Nay", "Present", "Not Voting"
    #[serde(rename = "vote_cast", default)]
    pub vote: String,
    /// LIS member identifier, e.g. "S370"
    #[serde(rename = "lis_member", default)]
    pub member_id: String,
}

/// Ordered collection of [`Member`] records.
///
/// Document order is preserved; it is the order the votes were reported
/// in, which is semantically meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MemberList {
    #[serde(rename = "member", default)]
    members: Vec<Member>,
}

impl MemberList {
    #[must_use]
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<'a> IntoIterator for &'a MemberList {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// A single roll-call vote: metadata plus every member's cast vote.
///
/// Constructed atomically by [`crate::vote::deserialize`] and read-only
/// afterwards. Scalar elements missing from the document decode to the
/// type's zero value rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RollCallVote {
    /// Congress number as published, e.g. "119"
    #[serde(default)]
    pub congress: String,
    /// Session within the congress (1 or 2)
    #[serde(default)]
    pub session: u32,
    #[serde(rename = "congress_year", default)]
    pub congress_year: u32,
    /// Sequence number of this roll call within the session
    #[serde(rename = "vote_number", default)]
    pub vote_number: u32,
    /// Date string as supplied by the source, not reparsed
    #[serde(rename = "vote_date", default)]
    pub vote_date: String,
    #[serde(rename = "vote_question_text", default)]
    pub vote_question: String,
    #[serde(rename = "vote_document_text", default)]
    pub vote_doc_text: String,
    #[serde(default)]
    pub members: MemberList,
}

static VOTE_FIELDS: &[FieldSpec<RollCallVote>] = &[
    FieldSpec {
        name: "congress",
        tag: tags::CONGRESS,
        get: |v: &RollCallVote| FieldValue::Str(&v.congress),
    },
    FieldSpec {
        name: "session",
        tag: tags::SESSION,
        get: |v: &RollCallVote| FieldValue::Int(i64::from(v.session)),
    },
    FieldSpec {
        name: "congress_year",
        tag: tags::CONGRESS_YEAR,
        get: |v: &RollCallVote| FieldValue::Int(i64::from(v.congress_year)),
    },
    FieldSpec {
        name: "vote_number",
        tag: tags::VOTE_NUMBER,
        get: |v: &RollCallVote| FieldValue::Int(i64::from(v.vote_number)),
    },
    FieldSpec {
        name: "vote_date",
        tag: tags::VOTE_DATE,
        get: |v: &RollCallVote| FieldValue::Str(&v.vote_date),
    },
    FieldSpec {
        name: "vote_question",
        tag: tags::VOTE_QUESTION,
        get: |v: &RollCallVote| FieldValue::Str(&v.vote_question),
    },
    FieldSpec {
        name: "vote_doc_text",
        tag: tags::VOTE_DOC_TEXT,
        get: |v: &RollCallVote| FieldValue::Str(&v.vote_doc_text),
    },
    FieldSpec {
        name: "members",
        tag: tags::MEMBERS,
        get: |v: &RollCallVote| FieldValue::Composite(&v.members),
    },
];

impl Record for RollCallVote {
    fn fields() -> &'static [FieldSpec<Self>] {
        VOTE_FIELDS
    }
}
