//! Descriptor-driven rendering of record types.
//!
//! The reporter walks a static table of field descriptors instead of
//! inspecting types at runtime: each record type declares, once, an
//! ordered list of (name, external tag, accessor) triples. One rendering
//! function then works for any record shape, with composite fields
//! skipped by external tag name rather than hardcoded field lists.

use std::fmt;
use std::io::{self, Write};

use thiserror::Error;

use crate::vote::{RollCallVote, COMPOSITE_TAGS};

/// Width of the separator line printed after the metadata block.
pub const SEPARATOR_WIDTH: usize = 35;

/// Errors raised while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The value's descriptor table is empty, so it is not a
    /// structured record this reporter can walk.
    #[error("value is not a structured record")]
    NotARecord,

    /// The output writer failed.
    #[error("failed to write report output: {0}")]
    Io(#[from] io::Error),
}

/// A scalar field value surfaced through a record's descriptor table.
pub enum FieldValue<'a> {
    /// String content, rendered verbatim.
    Str(&'a str),
    /// Integer content, rendered as decimal.
    Int(i64),
    /// Nested structure. Normally excluded by tag; rendered as a debug
    /// dump if a caller chooses not to exclude it.
    Composite(&'a dyn fmt::Debug),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Composite(v) => write!(f, "{v:?}"),
        }
    }
}

/// One entry in a record type's descriptor table.
pub struct FieldSpec<R> {
    /// Display name used for the metadata line.
    pub name: &'static str,
    /// External tag the field maps to in the wire format; matched
    /// against the reporter's exclusion set.
    pub tag: &'static str,
    /// Accessor returning the field's current value.
    pub get: fn(&R) -> FieldValue<'_>,
}

/// A type that declares its fields as a static, ordered descriptor
/// table. Declaration order is rendering order.
pub trait Record {
    fn fields() -> &'static [FieldSpec<Self>]
    where
        Self: Sized;
}

/// Render one `name: value` line per declared field, skipping fields
/// whose external tag is in `exclude`, then a separator line.
///
/// The record is never mutated. An empty descriptor table means the
/// value is not a structured record; nothing is emitted in that case.
///
/// # Errors
/// [`ReportError::NotARecord`] for an empty descriptor table,
/// [`ReportError::Io`] if the writer fails.
pub fn report_fields<R, W>(record: &R, exclude: &[&str], out: &mut W) -> Result<(), ReportError>
where
    R: Record + 'static,
    W: Write,
{
    let fields = R::fields();
    if fields.is_empty() {
        return Err(ReportError::NotARecord);
    }

    for field in fields {
        if exclude.contains(&field.tag) {
            continue;
        }
        writeln!(out, "{}: {}", field.name, (field.get)(record))?;
    }
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}

/// Render the full summary of a roll-call vote: the metadata block
/// (composite tags excluded), then one `LastName (State) - Vote` line
/// per member in document order.
///
/// # Errors
/// Propagates [`report_fields`] failures and writer I/O errors.
pub fn report<W: Write>(vote: &RollCallVote, out: &mut W) -> Result<(), ReportError> {
    report_fields(vote, COMPOSITE_TAGS, out)?;
    for member in &vote.members {
        writeln!(out, "{} ({}) - {}", member.last_name, member.state, member.vote)?;
    }
    Ok(())
}
