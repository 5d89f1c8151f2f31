use super::{CheckResult, Checker, SolverExecutor};
use crate::{
    cnf::{
        cnf_generator, model_counting_generator, satisfies_clause,
        weighted_model_counting_generator, CnfInstance, Literal, Model, ModelCountingInstance,
        WeightedModelCountingInstance,
    },
    generator::GeneratorFactory,
    io::{AnswerReader, DimacsStatusReader, SatStatus},
    utils::HarnessError,
};
use anyhow::{Context, Result};
use std::{ffi::OsString, path::PathBuf};

/// The relative tolerance used to compare weighted model counts.
pub const WEIGHTED_COUNT_TOLERANCE: f64 = 1e-9;

/// The object building the command line of SAT solvers and model counters.
///
/// The files containing the payloads are given as the arguments of the solver, in order.
#[derive(Default)]
pub struct DimacsExecutor;

impl SolverExecutor for DimacsExecutor {
    fn cli_args(&self, instance_files: &[PathBuf]) -> Vec<OsString> {
        instance_files
            .iter()
            .map(|f| f.clone().into_os_string())
            .collect()
    }
}

/// A checker for SAT solvers.
///
/// The solver is given the formula file and must follow the output format of the SAT competitions.
/// A satisfiable answer is correct if the values it gives are consistent and satisfy all the clauses.
#[derive(Default)]
pub struct SatChecker;

impl SatChecker {
    fn check_model(instance: &CnfInstance, values: &[Literal]) -> CheckResult {
        let model = values.iter().copied().collect::<Model>();
        if let Some(l) = model.iter().find(|l| model.contains(&l.negate())) {
            return CheckResult::Failure(format!(
                "the model assigns both polarities of variable {}",
                usize::from(l.var())
            ));
        }
        if let Some(l) = model.iter().find(|l| usize::from(l.var()) > instance.n_vars()) {
            return CheckResult::Failure(format!(
                "literal {} is out of bounds (number of variables is {})",
                l,
                instance.n_vars()
            ));
        }
        match instance
            .clauses()
            .iter()
            .find(|cl| !satisfies_clause(&model, cl))
        {
            Some(cl) => CheckResult::Failure(format!(
                "the model does not satisfy clause {:?}",
                cl.iter().map(|l| isize::from(*l)).collect::<Vec<isize>>()
            )),
            None => CheckResult::Success,
        }
    }
}

impl Checker for SatChecker {
    type Instance = CnfInstance;

    fn name(&self) -> &'static str {
        "SAT"
    }

    fn description(&self) -> &'static str {
        "satisfiability of CNF formulas"
    }

    fn generator_factory(&self) -> Result<Box<dyn GeneratorFactory<Instance = CnfInstance>>> {
        Ok(Box::new(cnf_generator()?))
    }

    fn required_payloads(&self) -> &[&'static str] {
        &["cnf"]
    }

    fn executor(&self, _instance: &CnfInstance) -> Box<dyn SolverExecutor> {
        Box::new(DimacsExecutor)
    }

    fn check(
        &self,
        instance: &CnfInstance,
        solver_output: &str,
        _reader: &dyn AnswerReader,
    ) -> Result<CheckResult> {
        let expected_sat = !instance.models().is_empty();
        match DimacsStatusReader::default().read_sat_status(solver_output)? {
            SatStatus::Satisfiable(values) if expected_sat => {
                Ok(Self::check_model(instance, &values))
            }
            SatStatus::Unsatisfiable if !expected_sat => Ok(CheckResult::Success),
            SatStatus::Unknown => Ok(CheckResult::Failure(
                "the solver returned an unknown status".to_string(),
            )),
            _ => Ok(CheckResult::Failure(format!(
                "wrong status; the formula is {}",
                if expected_sat {
                    "satisfiable"
                } else {
                    "unsatisfiable"
                }
            ))),
        }
    }
}

/// A checker for model counters.
///
/// The solver is given the formula file and must give the count in a status line.
#[derive(Default)]
pub struct ModelCountingChecker;

impl Checker for ModelCountingChecker {
    type Instance = ModelCountingInstance;

    fn name(&self) -> &'static str {
        "MC"
    }

    fn description(&self) -> &'static str {
        "model counting of CNF formulas"
    }

    fn generator_factory(
        &self,
    ) -> Result<Box<dyn GeneratorFactory<Instance = ModelCountingInstance>>> {
        Ok(Box::new(model_counting_generator()?))
    }

    fn required_payloads(&self) -> &[&'static str] {
        &["cnf"]
    }

    fn executor(&self, _instance: &ModelCountingInstance) -> Box<dyn SolverExecutor> {
        Box::new(DimacsExecutor)
    }

    fn check(
        &self,
        instance: &ModelCountingInstance,
        solver_output: &str,
        _reader: &dyn AnswerReader,
    ) -> Result<CheckResult> {
        let text = DimacsStatusReader::default().read_count(solver_output)?;
        let actual = text.parse::<u128>().map_err(|_| {
            HarnessError::Syntax(format!(r#""{}" is not a non-negative integer"#, text))
        })?;
        let expected = instance.count() as u128;
        if actual == expected {
            Ok(CheckResult::Success)
        } else {
            Ok(CheckResult::mismatch(expected, actual))
        }
    }
}

/// A checker for weighted model counters.
///
/// The solver is given the formula file and the weight file, and must give the weighted count in a status line.
/// Counts are compared with a relative tolerance of [`WEIGHTED_COUNT_TOLERANCE`].
#[derive(Default)]
pub struct WeightedModelCountingChecker;

impl Checker for WeightedModelCountingChecker {
    type Instance = WeightedModelCountingInstance;

    fn name(&self) -> &'static str {
        "WMC"
    }

    fn description(&self) -> &'static str {
        "weighted model counting of CNF formulas"
    }

    fn generator_factory(
        &self,
    ) -> Result<Box<dyn GeneratorFactory<Instance = WeightedModelCountingInstance>>> {
        Ok(Box::new(weighted_model_counting_generator()?))
    }

    fn required_payloads(&self) -> &[&'static str] {
        &["cnf", "weights"]
    }

    fn executor(&self, _instance: &WeightedModelCountingInstance) -> Box<dyn SolverExecutor> {
        Box::new(DimacsExecutor)
    }

    fn check(
        &self,
        instance: &WeightedModelCountingInstance,
        solver_output: &str,
        _reader: &dyn AnswerReader,
    ) -> Result<CheckResult> {
        let text = DimacsStatusReader::default().read_count(solver_output)?;
        let actual = text
            .parse::<f64>()
            .map_err(|_| HarnessError::Syntax(format!(r#""{}" is not a number"#, text)))
            .context("while reading a weighted count")?;
        let expected = instance.count();
        let expected_f64 = expected as f64;
        if (actual - expected_f64).abs() <= WEIGHTED_COUNT_TOLERANCE * expected_f64.abs().max(1.) {
            Ok(CheckResult::Success)
        } else {
            Ok(CheckResult::mismatch(expected, actual))
        }
    }
}
