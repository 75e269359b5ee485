//! Lossless parser for the pattern matching syntax of Java.
//!
//! ```txt
//!        +-------+             +--------+            +------+
//! str -> | lexer | - Tokens -> | parser | - Events -> | sink | -> Parse
//!        +-------+             +--------+            +------+
//!                                  |
//!                   grammar: patterns, types, modifiers,
//!                        expressions, switch labels
//! ```
//!
//! Every byte of the input ends up in the tree, including whitespace,
//! comments and tokens the grammar could not make sense of. Syntax errors
//! never abort a parse; they are recorded and the parse goes on.
//!
//! # Examples
//!
//! ```rust
//! use jpat::syntax::SyntaxKind;
//!
//! let input = "Point(int x, int y) p && x > 0";
//! let parse = jpat::parse_pattern(input);
//! assert!(parse.errors().is_empty());
//! assert_eq!(parse.syntax().text().to_string(), input);
//!
//! let pattern = parse.syntax().first_child().unwrap();
//! assert_eq!(pattern.kind(), SyntaxKind::GuardedPattern);
//! ```

// Pedantic warnings
#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines, clippy::must_use_candidate)]
#![allow(
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation
)]

pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod syntax;
pub mod token;
pub mod utils;

mod parse;

pub use rowan;

pub use error::{ParseError, SyntaxErrorKind};
pub use parse::*;
pub use utils::{LineIndex, Locatable};
