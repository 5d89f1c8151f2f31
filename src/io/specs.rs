use anyhow::{Context, Result};
use std::{collections::BTreeSet, io::Write};

/// An extension given by the labels of its arguments.
pub type LabelExtension = BTreeSet<String>;

/// A set of extensions given by the labels of their arguments.
pub type LabelExtensionSet = BTreeSet<LabelExtension>;

/// A trait implemented by objects able to decode the answers of argumentation solvers.
///
/// Each function takes the whole output of a solver.
/// Any deviation from the expected grammar, including content after the answer, leads to a [Syntax](crate::utils::HarnessError::Syntax) error.
pub trait AnswerReader {
    /// Reads a single extension.
    ///
    /// # Example
    ///
    /// ```
    /// # use crusticheck::io::{AnswerReader, Iccma17Reader};
    /// let extension = Iccma17Reader::default().read_extension("[a0,a1]\n").unwrap();
    /// assert_eq!(2, extension.len());
    /// ```
    fn read_extension(&self, text: &str) -> Result<LabelExtension>;

    /// Reads a set of extensions.
    fn read_extension_set(&self, text: &str) -> Result<LabelExtensionSet>;

    /// Reads the answer to a D3 problem, that is a triple of extension sets.
    fn read_d3(&self, text: &str) -> Result<[LabelExtensionSet; 3]>;

    /// Reads a list of acceptance statuses.
    fn read_acceptance_statuses(&self, text: &str) -> Result<Vec<bool>>;
}

/// A trait implemented by objects that write answers to argumentation problems.
pub trait AnswerWriter {
    /// Writes a single extension.
    fn write_extension(&self, writer: &mut dyn Write, extension: &LabelExtension) -> Result<()>;

    /// Writes a set of extensions.
    fn write_extension_set(
        &self,
        writer: &mut dyn Write,
        extensions: &LabelExtensionSet,
    ) -> Result<()>;

    /// Writes the answer to a D3 problem.
    fn write_d3(&self, writer: &mut dyn Write, sets: &[LabelExtensionSet; 3]) -> Result<()>;

    /// Writes a list of acceptance statuses.
    fn write_acceptance_statuses(&self, writer: &mut dyn Write, statuses: &[bool]) -> Result<()> {
        let context = "while writing acceptance statuses";
        let words = statuses
            .iter()
            .map(|s| if *s { "YES" } else { "NO" })
            .collect::<Vec<&str>>();
        writeln!(writer, "{}", words.join(",")).context(context)?;
        writer.flush().context(context)
    }
}

pub(crate) fn format_extension(extension: &LabelExtension) -> String {
    format!(
        "[{}]",
        extension
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<&str>>()
            .join(",")
    )
}
