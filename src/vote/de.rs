//! XML deserialization for roll-call vote documents.

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

use super::types::{tags, RollCallVote};

/// Errors produced while decoding a vote document.
#[derive(Debug, Error)]
pub enum DeserializeError {
    /// The byte stream is not a well-formed XML document, or a scalar
    /// element failed to decode (e.g. a non-numeric integer field).
    #[error("malformed vote document: {0}")]
    Decode(#[from] quick_xml::DeError),

    /// The byte stream could not be read as XML at all.
    #[error("unreadable vote document: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// The document's root element is not `roll_call_vote`.
    #[error("unexpected root element <{0}>, expected <roll_call_vote>")]
    UnexpectedRoot(String),

    /// The document ended before any root element appeared.
    #[error("document contains no root element")]
    MissingRoot,
}

/// Decode one roll-call vote document.
///
/// The operation is atomic: either a fully populated [`RollCallVote`]
/// is returned or an error describing the first failure. Unknown
/// elements are ignored; missing scalar elements decode to the type's
/// zero value. A non-numeric `session`, `congress_year` or
/// `vote_number` fails the whole document.
///
/// # Errors
/// See [`DeserializeError`] for the failure cases.
pub fn deserialize(bytes: &[u8]) -> Result<RollCallVote, DeserializeError> {
    let root = root_element(bytes)?;
    if root != tags::ROOT {
        return Err(DeserializeError::UnexpectedRoot(root));
    }
    let vote: RollCallVote = quick_xml::de::from_reader(bytes)?;
    Ok(vote)
}

/// Name of the document's first start element.
///
/// The serde layer does not check the root element name, which would
/// turn a wrong-root document into an all-defaults record that looks
/// like a success. This pre-pass rejects it instead.
fn root_element(bytes: &[u8]) -> Result<String, DeserializeError> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) | Event::Empty(start) => {
                return Ok(String::from_utf8_lossy(start.name().as_ref()).into_owned());
            }
            Event::Eof => return Err(DeserializeError::MissingRoot),
            _ => {}
        }
        buf.clear();
    }
}
