//! End-to-end tests for the deserialize → report pipeline.
//!
//! These pin the observable output contract: one metadata line per
//! non-excluded field in declaration order, a 35-dash separator, then
//! one `LastName (State) - Vote` line per member in document order.

use rollcall::report::{report, SEPARATOR_WIDTH};
use rollcall::senate::mock::MockVoteFetcher;
use rollcall::senate::{VoteFetcher, VoteLocator};
use rollcall::vote::deserialize;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<roll_call_vote>
  <congress>119</congress>
  <session>1</session>
  <congress_year>2025</congress_year>
  <vote_number>124</vote_number>
  <vote_date>Jan 15, 2025</vote_date>
  <vote_question_text>On Passage of the Bill</vote_question_text>
  <vote_document_text>H.R. 1234</vote_document_text>
  <members>
    <member>
      <member_full>Smith (R-OH)</member_full>
      <last_name>Smith</last_name>
      <first_name>Jane</first_name>
      <party>R</party>
      <state>OH</state>
      <vote_cast>Yea</vote_cast>
      <lis_member>S401</lis_member>
    </member>
    <member>
      <member_full>Jones (D-CA)</member_full>
      <last_name>Jones</last_name>
      <first_name>Alex</first_name>
      <party>D</party>
      <state>CA</state>
      <vote_cast>Nay</vote_cast>
      <lis_member>S402</lis_member>
    </member>
  </members>
</roll_call_vote>
"#;

fn render(document: &str) -> String {
    let vote = deserialize(document.as_bytes()).expect("document should decode");
    let mut out = Vec::new();
    report(&vote, &mut out).expect("report should succeed");
    String::from_utf8(out).expect("output should be utf-8")
}

#[test]
fn renders_full_summary() {
    let expected = "\
congress: 119
session: 1
congress_year: 2025
vote_number: 124
vote_date: Jan 15, 2025
vote_question: On Passage of the Bill
vote_doc_text: H.R. 1234
-----------------------------------
Smith (OH) - Yea
Jones (CA) - Nay
";
    assert_eq!(render(SAMPLE), expected);
}

#[test]
fn output_shape_is_metadata_separator_members() {
    let output = render(SAMPLE);
    let lines: Vec<&str> = output.lines().collect();

    // 7 non-excluded metadata fields, 1 separator, 2 members.
    assert_eq!(lines.len(), 7 + 1 + 2);
    assert_eq!(lines[7], "-".repeat(SEPARATOR_WIDTH));
    assert!(lines[..7].iter().all(|l| l.contains(": ")));
}

#[test]
fn composite_fields_never_render_metadata_lines() {
    let output = render(SAMPLE);
    for line in output.lines() {
        assert!(
            !line.starts_with("members:") && !line.starts_with("roll_call_vote:"),
            "composite field leaked into metadata: {line}"
        );
    }
}

#[test]
fn member_lines_follow_document_order_not_alphabetical() {
    let output = render(SAMPLE);
    let members: Vec<&str> = output
        .lines()
        .skip_while(|l| !l.starts_with('-'))
        .skip(1)
        .collect();
    assert_eq!(members, vec!["Smith (OH) - Yea", "Jones (CA) - Nay"]);
}

#[test]
fn empty_member_collection_still_renders_full_metadata_block() {
    let document = "<roll_call_vote>\
        <congress>119</congress>\
        <session>1</session>\
        <members></members>\
    </roll_call_vote>";
    let output = render(document);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 7 + 1, "metadata block plus separator only");
    assert_eq!(lines[7], "-".repeat(SEPARATOR_WIDTH));
}

#[test]
fn malformed_document_aborts_before_any_reporting() {
    assert!(deserialize(b"this is not xml").is_err());
    assert!(deserialize(b"<roll_call_vote><members>").is_err());
}

#[tokio::test]
async fn fetched_bytes_flow_through_the_pipeline() {
    let fetcher = MockVoteFetcher::new();
    fetcher.set_fetch_result(Ok(SAMPLE.as_bytes().to_vec()));

    let locator = VoteLocator {
        congress: 119,
        session: 1,
        number: 124,
    };
    let body = fetcher
        .fetch_vote(&locator)
        .await
        .expect("mock fetch should succeed");

    let vote = deserialize(&body).expect("fetched document should decode");
    assert_eq!(vote.vote_number, 124);
    assert_eq!(vote.members.len(), 2);
    assert_eq!(fetcher.fetch_calls(), vec![locator]);
}
