//! Markup parser implementation
//!
//! A recursive descent parser over the fixed markup grammar:
//!
//! ```text
//! tree      := skip-to('<') '<' element
//! element   := tagname attrs '>' children
//! attrs     := (key ' ' '=' ' ' '"' value '"')*
//! children  := (skip-to('<') '<' element)* skip-to('<') '<' '/' endtag '>'
//! ```
//!
//! Any character found where the grammar wants a delimiter is fatal; there is
//! no recovery and no partial tree.

use tracing::{debug, instrument, trace};

use crate::config::ParserConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::markup::model::{Attributes, Element, Tree};
use crate::scanner::Scanner;

/// Markup parser
///
/// Borrows the scanner so the caller can keep reading the same input once
/// the tree is done.
#[derive(Debug)]
pub struct MarkupParser<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
    config: &'s ParserConfig,
    depth: usize,
}

impl<'s, 'a> MarkupParser<'s, 'a> {
    pub fn new(scanner: &'s mut Scanner<'a>, config: &'s ParserConfig) -> Self {
        Self {
            scanner,
            config,
            depth: 0,
        }
    }

    /// Parse the first element found in the input as the tree root.
    ///
    /// Input after the root's end tag is left unread.
    #[instrument(level = "debug", skip_all)]
    pub fn parse_tree(&mut self) -> Result<Tree> {
        self.skip_to_open()?;
        let root = self.parse_element()?;
        debug!(
            tag = %root.tag,
            children = root.children.len(),
            "parsed markup tree"
        );
        Ok(Tree::new(root))
    }

    /// Parse one element whose opening `<` was already consumed
    pub fn parse_element(&mut self) -> Result<Element> {
        self.depth += 1;
        self.config.check_depth(self.depth, self.scanner.position())?;

        let tag = self.scanner.read_until(&[' ', '>'])?.to_string();
        let attrs = self.parse_attributes()?;
        self.scanner.expect_char('>')?;
        let children = self.parse_children(&tag)?;

        trace!(%tag, attrs = attrs.len(), children = children.len(), "element");
        self.depth -= 1;
        Ok(Element {
            tag,
            attrs,
            children,
        })
    }

    /// Parse `key = "value"` pairs up to, not including, the closing `>`
    fn parse_attributes(&mut self) -> Result<Attributes> {
        let mut attrs = Attributes::new();

        loop {
            match self.scanner.current() {
                Some('>') => break,
                Some(_) => {}
                None => return Err(Error::eof("'>'", self.scanner.position())),
            }

            let key = self.scanner.read_token()?.to_string();
            for delim in [' ', '=', ' ', '"'] {
                self.scanner.expect_char(delim)?;
            }
            let value = self.scanner.read_until(&['"'])?.to_string();
            self.scanner.expect_char('"')?;
            attrs.insert(key, value);
        }

        Ok(attrs)
    }

    /// Parse child elements, then the end tag closing `tag`
    fn parse_children(&mut self, tag: &str) -> Result<Vec<Element>> {
        let mut children = Vec::new();

        self.skip_to_open()?;
        while self.scanner.current() != Some('/') {
            children.push(self.parse_element()?);
            self.skip_to_open()?;
        }

        self.scanner.expect_char('/')?;
        let pos = self.scanner.position();
        let end_tag = self.scanner.read_until(&['>'])?;
        if self.config.strict_end_tags && end_tag != tag {
            return Err(Error::new(
                ErrorKind::MismatchedEndTag {
                    expected: tag.to_string(),
                    found: end_tag.to_string(),
                },
                pos,
            ));
        }
        self.scanner.expect_char('>')?;

        Ok(children)
    }

    /// Skip to the next `<` and consume it
    fn skip_to_open(&mut self) -> Result<()> {
        self.scanner.read_until(&['<'])?;
        self.scanner.expect_char('<')
    }
}
