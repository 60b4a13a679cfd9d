//! Query parser implementation
//!
//! ```text
//! query    := skip(whitespace) tagname sep rest
//! sep      := '.' | '~'
//! rest     := query      (after '.')
//!           | attrname   (after '~')
//! ```
//!
//! Every parsed query starts with a tag step; a bare attribute lookup is
//! never produced.

use tracing::debug;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::query::model::Query;
use crate::scanner::Scanner;

const LEADING_SKIP: [char; 3] = ['\r', '\n', ' '];

/// Query parser
#[derive(Debug)]
pub struct QueryParser<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
    config: &'s ParserConfig,
    depth: usize,
}

impl<'s, 'a> QueryParser<'s, 'a> {
    pub fn new(scanner: &'s mut Scanner<'a>, config: &'s ParserConfig) -> Self {
        Self {
            scanner,
            config,
            depth: 0,
        }
    }

    /// Parse the next query from the input.
    ///
    /// Reading stops right after the attribute name, so several queries can
    /// be parsed one after another from the same scanner.
    pub fn parse_query(&mut self) -> Result<Query> {
        self.depth = 0;
        let query = self.parse_step()?;
        debug!(%query, steps = query.depth(), "parsed query");
        Ok(query)
    }

    fn parse_step(&mut self) -> Result<Query> {
        self.depth += 1;
        self.config.check_depth(self.depth, self.scanner.position())?;

        self.scanner.read_while(&LEADING_SKIP);
        let tag = self.scanner.read_until(&['.', '~'])?;

        let next = if self.scanner.current() == Some('.') {
            self.scanner.expect_char('.')?;
            self.parse_step()?
        } else {
            self.scanner.expect_char('~')?;
            Query::attr_lookup(self.scanner.read_token()?)
        };

        Ok(Query::tag_step(tag, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn parse(input: &str) -> Result<Query> {
        let config = ParserConfig::default();
        let mut scanner = Scanner::new(input);
        QueryParser::new(&mut scanner, &config).parse_query()
    }

    #[test]
    fn test_parse_single_segment() -> Result<()> {
        let query = parse("tag1~value")?;
        assert_eq!(query, Query::tag_step("tag1", Query::attr_lookup("value")));
        Ok(())
    }

    #[test]
    fn test_parse_nested_segments() -> Result<()> {
        let query = parse("tag1.tag2.tag3~name")?;
        let expected = Query::tag_step(
            "tag1",
            Query::tag_step("tag2", Query::tag_step("tag3", Query::attr_lookup("name"))),
        );
        assert_eq!(query, expected);
        Ok(())
    }

    #[test]
    fn test_consecutive_queries_share_scanner() -> Result<()> {
        let config = ParserConfig::default();
        let mut scanner = Scanner::new("\r\n a~x\nb.c~y  \n");

        let first = QueryParser::new(&mut scanner, &config).parse_query()?;
        let second = QueryParser::new(&mut scanner, &config).parse_query()?;

        assert_eq!(first.to_string(), "a~x");
        assert_eq!(second.to_string(), "b.c~y");
        assert_eq!(scanner.remaining(), "  \n");
        Ok(())
    }

    #[test]
    fn test_missing_separator() {
        let err = parse("tag1").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnexpectedEof { .. }));
    }

    #[test]
    fn test_missing_attribute_name() {
        let err = parse("tag1~\n").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnexpectedEof { .. }));
    }

    #[test]
    fn test_max_depth() {
        let config = ParserConfig::default().with_max_depth(2);
        let mut scanner = Scanner::new("a.b.c~x");
        let err = QueryParser::new(&mut scanner, &config)
            .parse_query()
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MaxDepthExceeded { max: 2 });
    }
}
