use super::{LabelExtension, LabelExtensionSet};
use crate::utils::HarnessError;
use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new(r"^[^\s\[\],]+").unwrap();
}

/// A recursive-descent parser for the bracketed answers of argumentation solvers.
///
/// The parser works on a whole solver output; the dialect-specific grammars are built on top of its primitives.
pub(crate) struct AnswerParser<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> AnswerParser<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.position..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn error<T>(&self, message: &str) -> Result<T> {
        let before = &self.text[..self.position];
        let line = 1 + before.matches('\n').count();
        let column = 1 + before.chars().rev().take_while(|c| *c != '\n').count();
        let found = match self.peek() {
            Some('\n') => "a newline".to_string(),
            Some(c) => format!("'{}'", c),
            None => "the end of the output".to_string(),
        };
        Err(HarnessError::Syntax(format!(
            "{} at line {}, column {} (found {})",
            message, line, column, found
        ))
        .into())
    }

    /// Skips all whitespaces, including newlines.
    pub(crate) fn skip_whitespaces(&mut self) {
        let rest = self.rest();
        self.position += rest.len() - rest.trim_start().len();
    }

    /// Skips whitespaces, including newlines, and returns the number of newlines encountered.
    pub(crate) fn skip_whitespaces_counting_newlines(&mut self) -> usize {
        let rest = self.rest();
        let skipped = &rest[..rest.len() - rest.trim_start().len()];
        self.position += skipped.len();
        skipped.matches('\n').count()
    }

    pub(crate) fn try_consume(&mut self, c: char) -> bool {
        self.skip_whitespaces();
        if self.peek() == Some(c) {
            self.position += c.len_utf8();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, c: char) -> Result<()> {
        if self.try_consume(c) {
            Ok(())
        } else {
            self.error(&format!("expected '{}'", c))
        }
    }

    fn read_word(&mut self, what: &str) -> Result<&'a str> {
        self.skip_whitespaces();
        match WORD_PATTERN.find(self.rest()) {
            Some(m) => {
                let word = &self.rest()[..m.end()];
                self.position += m.end();
                Ok(word)
            }
            None => self.error(&format!("expected {}", what)),
        }
    }

    /// Checks nothing but whitespaces remain.
    pub(crate) fn expect_end(&mut self) -> Result<()> {
        self.skip_whitespaces();
        if self.rest().is_empty() {
            Ok(())
        } else {
            self.error("unexpected content after the answer")
        }
    }

    /// Reads a bracketed, comma-separated list of argument names.
    pub(crate) fn read_extension(&mut self) -> Result<LabelExtension> {
        self.expect('[')?;
        let mut extension = LabelExtension::new();
        if self.try_consume(']') {
            return Ok(extension);
        }
        loop {
            extension.insert(self.read_word("an argument name")?.to_string());
            if self.try_consume(']') {
                return Ok(extension);
            }
            self.expect(',')?;
        }
    }

    /// Reads a bracketed, comma-separated list of extensions.
    pub(crate) fn read_flat_extension_set(&mut self) -> Result<LabelExtensionSet> {
        self.expect('[')?;
        let mut extensions = LabelExtensionSet::new();
        if self.try_consume(']') {
            return Ok(extensions);
        }
        loop {
            extensions.insert(self.read_extension()?);
            if self.try_consume(']') {
                return Ok(extensions);
            }
            self.expect(',')?;
        }
    }

    /// Reads a bracketed list of extensions, each extension on its own line.
    pub(crate) fn read_multiline_extension_set(&mut self) -> Result<LabelExtensionSet> {
        self.expect('[')?;
        let mut extensions = LabelExtensionSet::new();
        if self.skip_whitespaces_counting_newlines() == 0 {
            if self.try_consume(']') {
                return Ok(extensions);
            }
            return self.error("expected a newline after the opening bracket of an extension set");
        }
        loop {
            if self.try_consume(']') {
                return Ok(extensions);
            }
            extensions.insert(self.read_extension()?);
            if self.skip_whitespaces_counting_newlines() == 0 {
                return self.error("expected a newline after an extension");
            }
        }
    }

    /// Reads a bracketed triple of extension sets, using the provided function to read each set.
    pub(crate) fn read_triple<F>(&mut self, mut read_set: F) -> Result<[LabelExtensionSet; 3]>
    where
        F: FnMut(&mut Self) -> Result<LabelExtensionSet>,
    {
        self.expect('[')?;
        let first = read_set(self)?;
        self.expect(',')?;
        let second = read_set(self)?;
        self.expect(',')?;
        let third = read_set(self)?;
        self.expect(']')?;
        Ok([first, second, third])
    }

    /// Reads a comma-separated list of `YES` and `NO` words.
    pub(crate) fn read_acceptance_statuses(&mut self) -> Result<Vec<bool>> {
        let mut statuses = vec![];
        loop {
            let position = self.position;
            match self.read_word("an acceptance status")? {
                "YES" => statuses.push(true),
                "NO" => statuses.push(false),
                _ => {
                    self.position = position;
                    self.skip_whitespaces();
                    return self.error("expected an acceptance status (YES or NO)");
                }
            }
            if !self.try_consume(',') {
                return Ok(statuses);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext(labels: &[&str]) -> LabelExtension {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_read_extension() {
        let mut parser = AnswerParser::new(" [ a0 ,\n a1]");
        assert_eq!(ext(&["a0", "a1"]), parser.read_extension().unwrap());
        parser.expect_end().unwrap();
    }

    #[test]
    fn test_read_empty_extension() {
        let mut parser = AnswerParser::new("[]");
        assert!(parser.read_extension().unwrap().is_empty());
    }

    #[test]
    fn test_read_extension_empty_name() {
        let mut parser = AnswerParser::new("[a0,]");
        let err = parser.read_extension().unwrap_err();
        assert!(HarnessError::is_syntax_error(&err));
    }

    #[test]
    fn test_read_extension_unbalanced() {
        let mut parser = AnswerParser::new("[a0,a1");
        let err = parser.read_extension().unwrap_err();
        assert!(err.to_string().contains("the end of the output"));
    }

    #[test]
    fn test_error_position() {
        let mut parser = AnswerParser::new("[\n a0 a1]");
        let err = parser.read_extension().unwrap_err();
        assert_eq!(
            "syntax error: expected ',' at line 2, column 5 (found 'a')",
            err.to_string()
        );
    }

    #[test]
    fn test_stray_tokens() {
        let mut parser = AnswerParser::new("[a0] [a1]");
        parser.read_extension().unwrap();
        assert!(parser.expect_end().is_err());
    }

    #[test]
    fn test_read_flat_extension_set() {
        let mut parser = AnswerParser::new("[[a0],[], [a0,a1]]");
        let set = parser.read_flat_extension_set().unwrap();
        assert_eq!(3, set.len());
        assert!(set.contains(&ext(&[])));
    }

    #[test]
    fn test_read_multiline_extension_set() {
        let mut parser = AnswerParser::new("[\n  [a0,a1]\n  []\n]\n");
        let set = parser.read_multiline_extension_set().unwrap();
        assert_eq!(2, set.len());
        parser.expect_end().unwrap();
    }

    #[test]
    fn test_read_multiline_extension_set_requires_newlines() {
        assert!(AnswerParser::new("[[a0]\n]")
            .read_multiline_extension_set()
            .is_err());
        assert!(AnswerParser::new("[\n[a0] [a1]\n]")
            .read_multiline_extension_set()
            .is_err());
        assert!(AnswerParser::new("[\n[a0],\n[a1]\n]")
            .read_multiline_extension_set()
            .is_err());
        assert!(AnswerParser::new("[\n  [a0]]")
            .read_multiline_extension_set()
            .is_err());
    }

    #[test]
    fn test_read_acceptance_statuses() {
        let mut parser = AnswerParser::new("YES, NO ,YES\n");
        assert_eq!(
            vec![true, false, true],
            parser.read_acceptance_statuses().unwrap()
        );
        parser.expect_end().unwrap();
    }

    #[test]
    fn test_read_acceptance_statuses_unknown_word() {
        let mut parser = AnswerParser::new("MAYBE");
        let err = parser.read_acceptance_statuses().unwrap_err();
        assert!(HarnessError::is_syntax_error(&err));
    }
}
