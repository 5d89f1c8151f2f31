use super::{AnswerReader, AnswerWriter, Iccma17Reader, Iccma17Writer, Iccma19Reader, Iccma19Writer};
use crate::utils::HarnessError;
use anyhow::Result;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The output dialects of argumentation solvers.
///
/// Dialects are named after the competition that defined them.
/// Their names are case-insensitive.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, AsRefStr, Display, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Dialect {
    /// The format used in the ICCMA 2017 competition.
    #[strum(serialize = "ICCMA17")]
    Iccma17,
    /// The format used in the ICCMA 2019 competition.
    #[default]
    #[strum(serialize = "ICCMA19")]
    Iccma19,
}

impl Dialect {
    /// Returns the dialect with the given name.
    ///
    /// An [InvalidArgument](HarnessError::InvalidArgument) error is returned if no dialect has this name.
    ///
    /// # Example
    ///
    /// ```
    /// # use crusticheck::io::Dialect;
    /// assert_eq!(Dialect::Iccma19, Dialect::from_name("iccma19").unwrap());
    /// assert!(Dialect::from_name("ICCMA42").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        Dialect::from_str(name).map_err(|_| {
            HarnessError::InvalidArgument(format!(
                r#"unknown dialect "{}" (expected one of {})"#,
                name,
                Dialect::iter()
                    .map(|d| d.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ))
            .into()
        })
    }

    /// Returns a reader for this dialect.
    pub fn reader(&self) -> Box<dyn AnswerReader> {
        match self {
            Dialect::Iccma17 => Box::new(Iccma17Reader),
            Dialect::Iccma19 => Box::new(Iccma19Reader),
        }
    }

    /// Returns a writer for this dialect.
    pub fn writer(&self) -> Box<dyn AnswerWriter> {
        match self {
            Dialect::Iccma17 => Box::new(Iccma17Writer),
            Dialect::Iccma19 => Box::new(Iccma19Writer),
        }
    }
}

/// Returns an iterator to the names of the available dialects.
pub fn iter_dialect_names() -> impl Iterator<Item = &'static str> {
    Dialect::iter().map(|d| d.into())
}

/// Returns a reader for the dialect with the given name.
///
/// An [InvalidArgument](HarnessError::InvalidArgument) error is returned if no dialect has this name.
pub fn reader_by_name(name: &str) -> Result<Box<dyn AnswerReader>> {
    Dialect::from_name(name).map(|d| d.reader())
}
