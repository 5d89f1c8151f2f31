use super::{
    answer_parser::AnswerParser, specs::format_extension, AnswerReader, AnswerWriter,
    LabelExtension, LabelExtensionSet,
};
use anyhow::{Context, Result};
use std::io::Write;

/// A reader for the output format used in the ICCMA 2017 competition.
///
/// Answers are written this way:
///   * extension: a bracketed, comma-separated list of argument names, like `[a0,a1]`
///   * extension set: a bracketed, comma-separated list of extensions, like `[[a0,a1],[a2]]`
///   * D3 answer: a bracketed, comma-separated list of three extension sets
///   * acceptance statuses: `YES` and `NO`, comma-separated if there are many of them
///
/// Whitespaces, including newlines, may appear between any two tokens.
#[derive(Default)]
pub struct Iccma17Reader;

impl AnswerReader for Iccma17Reader {
    fn read_extension(&self, text: &str) -> Result<LabelExtension> {
        let mut parser = AnswerParser::new(text);
        let extension = parser
            .read_extension()
            .context("while reading an ICCMA17 extension")?;
        parser.expect_end()?;
        Ok(extension)
    }

    fn read_extension_set(&self, text: &str) -> Result<LabelExtensionSet> {
        let mut parser = AnswerParser::new(text);
        let extensions = parser
            .read_flat_extension_set()
            .context("while reading an ICCMA17 extension set")?;
        parser.expect_end()?;
        Ok(extensions)
    }

    fn read_d3(&self, text: &str) -> Result<[LabelExtensionSet; 3]> {
        let mut parser = AnswerParser::new(text);
        let sets = parser
            .read_triple(|p| p.read_flat_extension_set())
            .context("while reading an ICCMA17 D3 answer")?;
        parser.expect_end()?;
        Ok(sets)
    }

    fn read_acceptance_statuses(&self, text: &str) -> Result<Vec<bool>> {
        let mut parser = AnswerParser::new(text);
        let statuses = parser
            .read_acceptance_statuses()
            .context("while reading ICCMA17 acceptance statuses")?;
        parser.expect_end()?;
        Ok(statuses)
    }
}

/// A writer for the output format used in the ICCMA 2017 competition.
///
/// See [`Iccma17Reader`] for a description of the format.
#[derive(Default)]
pub struct Iccma17Writer;

impl Iccma17Writer {
    fn format_extension_set(extensions: &LabelExtensionSet) -> String {
        format!(
            "[{}]",
            extensions
                .iter()
                .map(format_extension)
                .collect::<Vec<String>>()
                .join(",")
        )
    }
}

impl AnswerWriter for Iccma17Writer {
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
