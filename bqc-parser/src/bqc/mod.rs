//! Main module for bqc library functionality

pub mod answers;
pub mod ast;
pub mod error;
pub mod formats;
pub mod frontmatter;
pub mod inlines;
pub mod loader;
pub mod parsing;
pub mod repair;
pub mod testing;
