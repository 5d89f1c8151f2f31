use super::{CheckResult, Checker, ExternalSolver};
use crate::{
    generator::{self, GenerationContext},
    io::{write_all_payload_files, write_payload_files, Dialect},
};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

/// The name of the file receiving the output of a solver on a failed check.
pub const SOLVER_OUTPUT_FILE_NAME: &str = "solver_output.txt";

/// The name of the file receiving the explanation of a failed check.
pub const EXPLANATION_FILE_NAME: &str = "explanation.txt";

/// The settings of a checking session.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    /// The path to the solver under test.
    pub solver: PathBuf,
    /// The maximal depth of the generated instances tree.
    pub max_depth: usize,
    /// The directory where the instances are written.
    pub output_dir: PathBuf,
    /// The dialect of the solver outputs, for argumentation solvers.
    pub dialect: Dialect,
    /// The seed of the random source, if the session must be reproducible.
    pub seed: Option<u64>,
}

/// The counters of a checking session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckCounters {
    /// The number of instances given to the solver.
    pub n_checks: usize,
    /// The number of instances for which the solver failed.
    pub n_errors: usize,
    /// The number of instances that were not relevant for the checker.
    pub n_ignored: usize,
}

impl CheckCounters {
    /// Returns `true` iff no error occurred.
    pub fn is_success(&self) -> bool {
        self.n_errors == 0
    }
}

/// Runs a checking session.
///
/// Instances are generated up to the depth given in the settings.
/// For each of them, the payloads required by the checker are written into a dedicated subdirectory of the output directory,
/// the solver is called and its output is checked.
/// The directories of successful checks are removed, while the ones of failed checks are completed with all the payloads of the instance,
/// the output of the solver and an explanation of the failure.
///
/// Failures of the solver (including errors while executing it or decoding its output) are counted and do not interrupt the session.
/// An error is returned if the session cannot be run, for example if the output directory cannot be written.
pub fn run_checks<C>(checker: &C, settings: &CheckSettings) -> Result<CheckCounters>
where
    C: Checker + ?Sized,
{
    fs::create_dir_all(&settings.output_dir)
        .with_context(|| format!("while creating output directory {:?}", settings.output_dir))?;
    let mut context = match settings.seed {
        Some(s) => GenerationContext::new_with_seed(s),
        None => GenerationContext::new(),
    };
    let factory = checker.generator_factory()?;
    let solver = ExternalSolver::new(&settings.solver);
    let reader = settings.dialect.reader();
    let mut counters = CheckCounters::default();
    let mut index = 0;
    info!(
        "checking solver {:?} with checker {}",
        settings.solver,
        checker.name()
    );
    generator::generate_with(&*factory, settings.max_depth, &mut context, |instance| {
        index += 1;
        if checker.ignore_instance(instance) {
            debug!("ignoring instance #{}", index);
            counters.n_ignored += 1;
            return Ok(());
        }
        let instance_dir = settings.output_dir.join(format!("instance_{:06}", index));
        let files = write_payload_files(instance, checker.required_payloads(), &instance_dir)?;
        let executor = checker.executor(instance);
        let mut solver_output = None;
        let result = solver
            .run_with(executor.as_ref(), &files)
            .and_then(|output| {
                let result = checker.check(instance, &output, reader.as_ref());
                solver_output = Some(output);
                result
            });
        counters.n_checks += 1;
        let explanation = match result {
            Ok(CheckResult::Success) => {
                fs::remove_dir_all(&instance_dir)
                    .with_context(|| format!("while removing directory {:?}", instance_dir))?;
                return Ok(());
            }
            Ok(CheckResult::Failure(e)) => e,
            Err(e) => format!("{:#}", e),
        };
        counters.n_errors += 1;
        warn!(
            "check failed for instance #{} (see {:?}): {}",
            index, instance_dir, explanation
        );
        write_all_payload_files(instance, &instance_dir)?;
        write_text_file(
            &instance_dir.join(SOLVER_OUTPUT_FILE_NAME),
            solver_output.as_deref().unwrap_or_default(),
        )?;
        write_text_file(&instance_dir.join(EXPLANATION_FILE_NAME), &explanation)
    })?;
    info!(
        "{} check(s), {} error(s), {} ignored instance(s)",
        counters.n_checks, counters.n_errors, counters.n_ignored
    );
    Ok(counters)
}

fn write_text_file(path: &std::path::Path, content: &str) -> Result<()> {
    let context = || format!("while writing {:?}", path);
    let mut file = File::create(path).with_context(context)?;
    writeln!(file, "{}", content.trim_end()).with_context(context)
}
