use super::{
    answer_parser::AnswerParser, specs::format_extension, AnswerReader, AnswerWriter,
    LabelExtension, LabelExtensionSet,
};
use anyhow::{Context, Result};
use std::io::Write;

/// A reader for the output format used in the ICCMA 2019 competition.
///
/// Extensions and acceptance statuses are written as in the ICCMA 2017 format,
/// but extension sets are multi-line blocks: an opening bracket, a newline, one extension per line and a closing bracket.
///
/// ```text
/// [
///   [a0,a1]
///   [a2]
/// ]
/// ```
///
/// The empty set of extensions may be written `[]` or on two lines.
#[derive(Default)]
pub struct Iccma19Reader;

impl AnswerReader for Iccma19Reader {
    fn read_extension(&self, text: &str) -> Result<LabelExtension> {
        let mut parser = AnswerParser::new(text);
        let extension = parser
            .read_extension()
            .context("while reading an ICCMA19 extension")?;
        parser.expect_end()?;
        Ok(extension)
    }

    fn read_extension_set(&self, text: &str) -> Result<LabelExtensionSet> {
        let mut parser = AnswerParser::new(text);
        let extensions = parser
            .read_multiline_extension_set()
            .context("while reading an ICCMA19 extension set")?;
        parser.expect_end()?;
        Ok(extensions)
    }

    fn read_d3(&self, text: &str) -> Result<[LabelExtensionSet; 3]> {
        let mut parser = AnswerParser::new(text);
        let sets = parser
            .read_triple(|p| p.read_multiline_extension_set())
            .context("while reading an ICCMA19 D3 answer")?;
        parser.expect_end()?;
        Ok(sets)
    }

    fn read_acceptance_statuses(&self, text: &str) -> Result<Vec<bool>> {
        let mut parser = AnswerParser::new(text);
        let statuses = parser
            .read_acceptance_statuses()
            .context("while reading ICCMA19 acceptance statuses")?;
        parser.expect_end()?;
        Ok(statuses)
    }
}

/// A writer for the output format used in the ICCMA 2019 competition.
///
/// See [`Iccma19Reader`] for a description of the format.
#[derive(Default)]
pub struct Iccma19Writer;

impl Iccma19Writer {
    fn format_extension_set(extensions: &LabelExtensionSet) -> String {
        let mut result = "[\n".to_string();
        for e in extensions.iter() {
            result.push_str("  ");
            result.push_str(&format_extension(e));
            result.push('\n');
        }
        result.push(']');
        result
    }
}

impl AnswerWriter for Iccma19Writer {
    fn write_extension(&self, writer: &mut dyn Write, extension: &LabelExtension) -> Result<()> {
        let context = "while writing an extension";
        writeln!(writer, "{}", format_extension(extension)).context(context)?;
        writer.flush().context(context)
    }

    fn write_extension_set(
        &self,
        writer: &mut dyn Write,
        extensions: &LabelExtensionSet,
    ) -> Result<()> {
        let context = "while writing an extension set";
        writeln!(writer, "{}", Self::format_extension_set(extensions)).context(context)?;
        writer.flush().context(context)
    }

    fn write_d3(&self, writer: &mut dyn Write, sets: &[LabelExtensionSet; 3]) -> Result<()> {
        let context = "while writing a D3 answer";
        writeln!(
            writer,
            "[{}]",
            sets.iter()
                .map(Self::format_extension_set)
                .collect::<Vec<String>>()
                .join(",")
        )
        .context(context)?;
        writer.flush().context(context)
    }
}
