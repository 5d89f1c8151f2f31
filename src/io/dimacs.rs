use crate::{
    cnf::{Literal, Model},
    utils::HarnessError,
};
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::{fmt::Display, io::Write};

lazy_static! {
    static ref COUNT_STATUS_PATTERN: Regex =
        Regex::new(r"^s\s+(?:w?mc\s+)?(\S+)\s*$").unwrap();
    static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").unwrap();
}

/// A writer for the DIMACS family of formats.
///
/// Formulas are written in the DIMACS CNF format: a `p cnf <n_vars> <n_clauses>` preamble, followed by one clause per line, each terminated by `0`.
/// The same line format is used to write models.
#[derive(Default)]
pub struct DimacsWriter {}

impl DimacsWriter {
    /// Writes a formula in the DIMACS CNF format.
    pub fn write_cnf(
        &self,
        n_vars: usize,
        clauses: &[Vec<Literal>],
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing a DIMACS formula";
        writeln!(writer, "p cnf {} {}", n_vars, clauses.len()).context(context)?;
        for cl in clauses {
            write_zero_terminated(writer, cl.iter()).context(context)?;
        }
        writer.flush().context(context)
    }

    /// Writes models, one per line, each terminated by `0`.
    pub fn write_models<'a, I>(&self, models: I, writer: &mut dyn Write) -> Result<()>
    where
        I: Iterator<Item = &'a Model>,
    {
        let context = "while writing models";
        for m in models {
            write_zero_terminated(writer, m.iter()).context(context)?;
        }
        writer.flush().context(context)
    }

    /// Writes literal weights, one `<literal> <weight>` pair per line.
    pub fn write_weights<I>(&self, weights: I, writer: &mut dyn Write) -> Result<()>
    where
        I: Iterator<Item = (Literal, u64)>,
    {
        let context = "while writing literal weights";
        for (l, w) in weights {
            writeln!(writer, "{} {}", l, w).context(context)?;
        }
        writer.flush().context(context)
    }

    /// Writes a count, followed by a newline.
    pub fn write_count<T>(&self, count: &T, writer: &mut dyn Write) -> Result<()>
    where
        T: Display,
    {
        let context = "while writing a count";
        writeln!(writer, "{}", count).context(context)?;
        writer.flush().context(context)
    }
}

fn write_zero_terminated<'a, I>(writer: &mut dyn Write, literals: I) -> std::io::Result<()>
where
    I: Iterator<Item = &'a Literal>,
{
    for l in literals {
        write!(writer, "{} ", l)?;
    }
    writeln!(writer, "0")
}

/// The status returned by a SAT solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatStatus {
    /// The formula is satisfiable; the literals of the model are given.
    Satisfiable(Vec<Literal>),
    /// The formula is unsatisfiable.
    Unsatisfiable,
    /// The solver could not decide.
    Unknown,
}

/// A reader for the outputs of SAT solvers and model counters following the competition conventions.
///
/// Lines beginning with `c` are comments, and exactly one line must begin with `s`.
/// SAT solvers give their status as `s SATISFIABLE`, `s UNSATISFIABLE` or `s UNKNOWN`,
/// and satisfiable answers come with `v` lines giving the model, terminated by `0`.
/// Model counters give the count as `s <count>`, optionally tagged as in `s mc <count>` or `s wmc <count>`.
///
/// Any other content leads to a [Syntax](HarnessError::Syntax) error.
#[derive(Default)]
pub struct DimacsStatusReader {}

impl DimacsStatusReader {
    /// Reads the output of a SAT solver.
    ///
    /// # Example
    ///
    /// ```
    /// # use crusticheck::io::{DimacsStatusReader, SatStatus};
    /// # use crusticheck::clause;
    /// let status = DimacsStatusReader::default()
    ///     .read_sat_status("c a comment\ns SATISFIABLE\nv 1 -2 0\n")
    ///     .unwrap();
    /// assert_eq!(SatStatus::Satisfiable(clause![1, -2]), status);
    /// ```
    pub fn read_sat_status(&self, text: &str) -> Result<SatStatus> {
        let mut status = None;
        let mut values = vec![];
        let mut values_seen = false;
        let mut values_end = false;
        for (i, line) in relevant_lines(text) {
            let context = || format!("while reading line {} of the solver output", i + 1);
            if line.starts_with('s') {
                let new_status = match line {
                    "s SATISFIABLE" => SatStatus::Satisfiable(vec![]),
                    "s UNSATISFIABLE" => SatStatus::Unsatisfiable,
                    "s UNKNOWN" => SatStatus::Unknown,
                    _ => return syntax_error(format!(r#"unknown status line "{}""#, line)).with_context(context),
                };
                set_status(&mut status, new_status).with_context(context)?;
            } else if line == "v" || line.starts_with("v ") {
                values_seen = true;
                for w in line.split_ascii_whitespace().skip(1) {
                    let n = match w.parse::<isize>() {
                        Ok(n) => n,
                        Err(_) => {
                            return syntax_error(format!(r#""{}" is not a literal"#, w))
                                .with_context(context)
                        }
                    };
                    if values_end {
                        return syntax_error("value after the terminating zero".to_string())
                            .with_context(context);
                    }
                    match Literal::try_new(n) {
                        Some(l) => values.push(l),
                        None => values_end = true,
                    }
                }
            } else {
                return syntax_error(format!(r#"unexpected line "{}""#, line)).with_context(context);
            }
        }
        match status {
            Some(SatStatus::Satisfiable(_)) => {
                if !values_seen {
                    return syntax_error("satisfiable status without values".to_string());
                }
                if !values_end {
                    return syntax_error("values are not terminated by a zero".to_string());
                }
                Ok(SatStatus::Satisfiable(values))
            }
            Some(s) => {
                if values_seen {
                    return syntax_error("values given while the status is not satisfiable".to_string());
                }
                Ok(s)
            }
            None => syntax_error("no status line".to_string()),
        }
    }

    /// Reads the output of a model counter, returning the count as written by the solver.
    ///
    /// The count is checked to be a number, but its conversion is left to the caller,
    /// since exact counts and weighted counts are not compared the same way.
    pub fn read_count(&self, text: &str) -> Result<String> {
        let mut count = None;
        for (i, line) in relevant_lines(text) {
            let context = || format!("while reading line {} of the solver output", i + 1);
            match COUNT_STATUS_PATTERN.captures(line) {
                Some(c) => {
                    let value = c.get(1).map(|m| m.as_str()).unwrap_or_default();
                    if !NUMBER_PATTERN.is_match(value) {
                        return syntax_error(format!(r#""{}" is not a number"#, value))
                            .with_context(context);
                    }
                    set_status(&mut count, value.to_string()).with_context(context)?;
                }
                None => {
                    return syntax_error(format!(r#"unexpected line "{}""#, line))
                        .with_context(context)
                }
            }
        }
        match count {
            Some(c) => Ok(c),
            None => syntax_error("no status line".to_string()),
        }
    }
}

fn relevant_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .map(|l| l.trim_end())
        .enumerate()
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('c'))
}

fn set_status<T>(status: &mut Option<T>, value: T) -> Result<()> {
    if status.is_some() {
        return syntax_error("multiple status lines".to_string());
    }
    *status = Some(value);
    Ok(())
}

fn syntax_error<T>(message: String) -> Result<T> {
    Err(HarnessError::Syntax(message).into())
}
