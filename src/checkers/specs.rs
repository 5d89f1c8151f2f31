use crate::{
    generator::{GeneratorFactory, Instance},
    io::AnswerReader,
};
use anyhow::Result;
use std::{ffi::OsString, path::PathBuf};

/// The result of the comparison between the answer of a solver and the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// The answer is correct.
    Success,
    /// The answer is not correct; an explanation is given.
    Failure(String),
}

impl CheckResult {
    /// Returns `true` iff this result is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, CheckResult::Success)
    }

    /// Builds a failure explaining the expected and actual answers.
    pub fn mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: std::fmt::Debug,
        A: std::fmt::Debug,
    {
        CheckResult::Failure(format!("expected {:?}, got {:?}", expected, actual))
    }
}

/// A trait for objects building the command line arguments of a solver.
pub trait SolverExecutor {
    /// Returns the arguments to give to the solver, given the paths of the files containing the required payloads.
    ///
    /// The paths are given in the order of [Checker::required_payloads].
    fn cli_args(&self, instance_files: &[PathBuf]) -> Vec<OsString>;
}

/// A trait for objects checking solvers against generated instances.
///
/// A checker tells how the instances are generated, which payloads must be given to the solver,
/// how the solver is called, and how its answer is compared to the expected one.
pub trait Checker {
    /// The type of the instances under test.
    type Instance: Instance;

    /// Returns the name of this checker.
    fn name(&self) -> &'static str;

    /// Returns a short description of this checker.
    fn description(&self) -> &'static str;

    /// Builds the generator of the instances.
    fn generator_factory(&self) -> Result<Box<dyn GeneratorFactory<Instance = Self::Instance>>>;

    /// Returns the kinds of payloads to give to the solver.
    fn required_payloads(&self) -> &[&'static str];

    /// Returns `true` iff the instance is not relevant for this checker.
    ///
    /// Ignored instances are not given to the solver.
    fn ignore_instance(&self, _instance: &Self::Instance) -> bool {
        false
    }

    /// Returns the object building the command line arguments of the solver for the instance.
    fn executor(&self, instance: &Self::Instance) -> Box<dyn SolverExecutor>;

    /// Compares the output of the solver to the expected answer.
    ///
    /// The reader is the one of the dialect selected by the user;
    /// checkers which solvers do not follow an argumentation dialect ignore it.
    ///
    /// Errors, including syntax errors in the output, are reported as failures of the solver.
    fn check(
        &self,
        instance: &Self::Instance,
        solver_output: &str,
        reader: &dyn AnswerReader,
    ) -> Result<CheckResult>;
}
