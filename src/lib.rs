//! tagquery: a tagged-markup parser with a small path query language
//!
//! This crate provides functionality to:
//! - Parse nested tagged elements with quoted attributes into a tree
//! - Parse dotted tag paths ending in an attribute lookup (`a.b~name`)
//! - Evaluate such queries against a tree
//! - Run a whole batch (header, markup, queries) as read from one input
//!
//! # Examples
//! ```
//! use tagquery::{parse_query, parse_tree, Result};
//!
//! fn example() -> Result<()> {
//!     let tree = parse_tree("<a href = \"example.com\"></a>")?;
//!     let query = parse_query("a~href")?;
//!     assert_eq!(tree.query(&query), Some("example.com"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod markup;
pub mod query;
pub mod scanner;

// Re-exports
pub use batch::{format_answers, run_batch, Answer, Header, NOT_FOUND};
pub use config::ParserConfig;
pub use error::{Error, ErrorKind, Pos, Result};
pub use markup::{Element, MarkupParser, Tree};
pub use query::{evaluate, evaluate_tree, Query, QueryParser};
pub use scanner::Scanner;

/// Parse markup text with the default configuration
pub fn parse_tree(input: &str) -> Result<Tree> {
    let config = ParserConfig::default();
    let mut scanner = Scanner::new(input);
    MarkupParser::new(&mut scanner, &config).parse_tree()
}

/// Parse a single query with the default configuration
pub fn parse_query(input: &str) -> Result<Query> {
    let config = ParserConfig::default();
    let mut scanner = Scanner::new(input);
    QueryParser::new(&mut scanner, &config).parse_query()
}
