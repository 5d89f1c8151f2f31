use super::SolverExecutor;
use anyhow::{anyhow, Context, Result};
use log::debug;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

/// A solver which execution is made by a system command.
///
/// The solver is given its arguments on the command line and nothing on its standard input.
/// Its standard output is captured and returned as a string.
pub struct ExternalSolver {
    program: PathBuf,
}

impl ExternalSolver {
    /// Builds a new external solver given the path to its executable.
    pub fn new<P>(program: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            program: program.into(),
        }
    }

    /// Returns the path to the executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs the solver with the given arguments and returns its standard output.
    ///
    /// An error is returned if the process cannot be spawned, if its exit status is not a success, or if its output is not valid UTF-8.
    /// The error message contains the standard error of the process.
    pub fn run(&self, args: &[OsString]) -> Result<String> {
        debug!("executing {:?} with arguments {:?}", self.program, args);
        let context = || format!("while executing solver {:?}", self.program);
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(context)?;
        if !output.status.success() {
            return Err(anyhow!(
                "solver exited with {}; standard error was:\n{}",
                output.status,
                String::from_utf8_lossy(&output.stderr)
            ))
            .with_context(context);
        }
        String::from_utf8(output.stdout)
            .context("solver output is not valid UTF-8")
            .with_context(context)
    }

    /// Runs the solver with the arguments built by an executor.
    pub fn run_with(&self, executor: &dyn SolverExecutor, instance_files: &[PathBuf]) -> Result<String> {
        self.run(&executor.cli_args(instance_files))
    }
}
