//! Senate roll-call vote retrieval.
//!
//! Trait-based HTTP client for pulling raw vote documents from the
//! Senate's roll-call vote endpoint:
//!
//! - [`VoteFetcher`] - trait defining the fetch operation
//! - [`HttpVoteFetcher`] - real HTTP implementation using reqwest
//! - [`mock::MockVoteFetcher`] - mock for unit tests (behind the
//!   `test-utils` feature)
//!
//! Document URL scheme:
//!
//! ```text
//! <base>/vote[CONGRESS][SESSION]/vote_[CONGRESS]_[SESSION]_[NUMBER_5_PADDED].xml
//! e.g.   .../vote1172/vote_117_2_00071.xml
//! ```
//!
//! The fetcher returns raw bytes only; [`crate::vote::deserialize`]
//! turns them into a record.

mod client;

pub use client::{FetchError, HttpVoteFetcher, VoteFetcher, VoteLocator};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
