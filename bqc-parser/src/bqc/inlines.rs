//! Inline content of question text
//!
//!     Question text is plain text with embedded blank tokens. A blank token is a single `{...}`
//!     span without nested braces:
//!
//!         {answer}                    one accepted answer, placeholder "..."
//!         {cat|kitten}                alternates separated by `|`, the first is canonical
//!         {cat|kitten::animal}        placeholder after the first `::`
//!
//!     See [blanks] for the expansion rules.

pub mod blanks;

pub use blanks::{expand_blanks, DEFAULT_PLACEHOLDER};
