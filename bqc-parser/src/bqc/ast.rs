//! Document model for the BQC format
//!
//!     The parser produces a single [Topic] per source text. The tree is strictly owned from the
//!     top down: a topic owns its sections, a section owns its questions and a question owns its
//!     content sequence. There are no back references, so a parsed topic can be cloned, cached,
//!     shared across threads and serialized verbatim.
//!
//! Structure:
//!
//!         Topic
//!           └── Section        (§ marker, or the implicit "Questions" section)
//!                 └── Question (numbered line plus continuation lines)
//!                       └── QuestionContent  (Text runs interleaved with Blanks)
//!
//! Identifiers
//!
//!     Sections and questions carry stable ids. An explicit `[#id]` tag on the marker line wins;
//!     otherwise sections get `section-<n>` (1-based position) and questions get
//!     `q<questionNumber>`. Blanks are always addressed as `<questionId>-blank-<k>`, with k
//!     counting from zero within the owning question.
//!
//! Serialization
//!
//!     The serde representation is the one the surrounding application persists: camelCase
//!     `questionNumber` and content items tagged by a `type` field (`"text"` or `"blank"`).

pub mod content;
pub mod question;
pub mod section;
pub mod stats;
pub mod topic;

pub use content::{Blank, QuestionContent};
pub use question::Question;
pub use section::Section;
pub use stats::TopicStats;
pub use topic::Topic;
