//! Batch driver: header, markup block, then a fixed number of queries
//!
//! Input layout:
//!
//! ```text
//! <markup line count> <query count>
//! <markup spanning any number of lines>
//! <one query per line>
//! ```
//!
//! The markup line count is read for format compatibility only; the markup
//! parser finds the end of the block by its delimiters.

use std::fmt;

use tracing::{debug, info, instrument};

use crate::config::ParserConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::markup::MarkupParser;
use crate::query::QueryParser;
use crate::scanner::Scanner;

/// Text printed for a query that matched nothing
pub const NOT_FOUND: &str = "Not Found!";

/// First line of a batch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Number of markup lines; informational only
    pub markup_lines: usize,
    /// Number of queries following the markup
    pub query_count: usize,
}

impl Header {
    fn parse(scanner: &mut Scanner<'_>) -> Result<Self> {
        let markup_lines = read_count(scanner, "markup line count")?;
        let query_count = read_count(scanner, "query count")?;
        Ok(Self {
            markup_lines,
            query_count,
        })
    }
}

fn read_count(scanner: &mut Scanner<'_>, what: &str) -> Result<usize> {
    scanner.skip_whitespace();
    let pos = scanner.position();
    let token = scanner.read_token()?;
    token.parse().map_err(|_| {
        Error::new(
            ErrorKind::InvalidHeader(format!("{what} must be a non-negative integer, got {token:?}")),
            pos,
        )
    })
}

/// Outcome of one query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer(pub Option<String>);

impl Answer {
    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_found(&self) -> bool {
        self.0.is_some()
    }
}

/// An empty attribute value is reported the same way as a miss
impl From<Option<&str>> for Answer {
    fn from(value: Option<&str>) -> Self {
        Self(value.filter(|v| !v.is_empty()).map(str::to_string))
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or(NOT_FOUND))
    }
}

/// Run a whole batch and return one answer per query, in input order.
///
/// Any malformed part of the input fails the entire batch; answers computed
/// before the failure are discarded.
#[instrument(level = "debug", skip_all, fields(bytes = input.len()))]
pub fn run_batch(input: &str, config: &ParserConfig) -> Result<Vec<Answer>> {
    let mut scanner = Scanner::new(input);

    let header = Header::parse(&mut scanner)?;
    debug!(
        markup_lines = header.markup_lines,
        query_count = header.query_count,
        "read header"
    );

    let tree = MarkupParser::new(&mut scanner, config).parse_tree()?;

    let mut answers = Vec::with_capacity(header.query_count);
    for _ in 0..header.query_count {
        let query = QueryParser::new(&mut scanner, config).parse_query()?;
        answers.push(Answer::from(tree.query(&query)));
    }

    info!(
        queries = answers.len(),
        found = answers.iter().filter(|a| a.is_found()).count(),
        "batch complete"
    );
    Ok(answers)
}

/// Render answers one per line
pub fn format_answers(answers: &[Answer]) -> String {
    answers.iter().map(|answer| format!("{answer}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "4 3
<tag1 value = \"HelloWorld\">
<tag2 name = \"Name1\">
</tag2>
</tag1>
tag1.tag2~name
tag1~name
tag1~value
";

    #[test]
    fn test_sample_batch() -> Result<()> {
        let answers = run_batch(SAMPLE, &ParserConfig::default())?;
        assert_eq!(
            format_answers(&answers),
            "Name1\nNot Found!\nHelloWorld\n"
        );
        Ok(())
    }

    #[test]
    fn test_markup_line_count_is_ignored() -> Result<()> {
        let input = SAMPLE.replacen("4 3", "99 3", 1);
        let answers = run_batch(&input, &ParserConfig::default())?;
        assert_eq!(answers.len(), 3);
        Ok(())
    }

    #[test]
    fn test_zero_queries() -> Result<()> {
        let answers = run_batch("1 0\n<a></a>\n", &ParserConfig::default())?;
        assert!(answers.is_empty());
        Ok(())
    }

    #[test]
    fn test_last_query_without_newline() -> Result<()> {
        let answers = run_batch("1 1\n<a x = \"1\"></a>\na~x", &ParserConfig::default())?;
        assert_eq!(answers, vec![Answer(Some("1".to_string()))]);
        Ok(())
    }

    #[test]
    fn test_crlf_input() -> Result<()> {
        let input = "2 2\r\n<a x = \"1\">\r\n<b y = \"2\"></b>\r\n</a>\r\na.b~y\r\na~x\r\n";
        let answers = run_batch(input, &ParserConfig::default())?;
        assert_eq!(format_answers(&answers), "2\n1\n");
        Ok(())
    }

    #[test]
    fn test_empty_value_prints_not_found() -> Result<()> {
        let answers = run_batch("1 2\n<a x = \"\" y = \"1\"></a>\na~x\na~y\n", &ParserConfig::default())?;
        assert_eq!(format_answers(&answers), "Not Found!\n1\n");
        assert!(!answers.first().is_some_and(Answer::is_found));
        Ok(())
    }

    #[test]
    fn test_invalid_header() {
        let err = run_batch("four 3\n<a></a>", &ParserConfig::default()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidHeader(_)));

        let err = run_batch("4 -1\n<a></a>", &ParserConfig::default()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidHeader(_)));
    }

    #[test]
    fn test_missing_queries_fail_whole_batch() {
        let result = run_batch("1 2\n<a x = \"1\"></a>\na~x\n", &ParserConfig::default());
        assert!(matches!(
            result.map_err(|e| e.kind().clone()),
            Err(ErrorKind::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(Answer(None).to_string(), NOT_FOUND);
        assert_eq!(Answer::from(Some("v")).to_string(), "v");
        assert_eq!(Answer::from(Some("")), Answer(None));
    }
}
