//! Testing utilities for parsed topics
//!
//!     BQC documents are usually produced by a model and then edited by hand, so small format
//!     slips are common. A test written against an ad-hoc source string that is slightly off
//!     tunes the parser to the wrong thing, and every format change means hunting those
//!     strings down across test files. Tests therefore follow two rules:
//!
//!         1. Use the verified sample documents (via [Samples](samples::Samples))
//!         2. Check the parse with the fluent assertions (via [assert_topic](fn@assert_topic))
//!
//!     Inline sources are fine for unit tests of a single grammar rule (one line, one token),
//!     where the source is the thing under test.
//!
//! Samples
//!
//!     ```rust,ignore
//!     use bqc_parser::bqc::testing::samples::Samples;
//!
//!     let topic = Samples::cell_biology().parse();
//!     let source = Samples::no_sections().source();
//!     let err = Samples::invalid_blank().parse_err();
//!     ```
//!
//! Fluent Assertions
//!
//!     Walking the tree by hand is verbose and tends to end up checking counts only. The fluent
//!     API checks shape and content in one go, and failure messages carry the path of the node
//!     that failed (`sections[0]:questions[2]:content[1]`):
//!
//!     ```rust,ignore
//!     use bqc_parser::bqc::testing::assert_topic;
//!
//!     assert_topic(&topic)
//!         .slug("cell-biology")
//!         .section_count(2)
//!         .section(0, |section| {
//!             section
//!                 .id("organelles")
//!                 .title("Organelles")
//!                 .question(0, |question| {
//!                     question
//!                         .id("q1")
//!                         .number(1)
//!                         .text(0, "The ")
//!                         .blank(1, &["mitochondria", "mitochondrion"], "...")
//!                 })
//!         });
//!     ```

pub mod samples;
mod topic_assertions;

pub use topic_assertions::{
    assert_topic, ContentAssertion, QuestionAssertion, SectionAssertion, TopicAssertion,
};
