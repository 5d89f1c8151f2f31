use super::{CheckResult, Checker, SolverExecutor};
use crate::{
    aa::{self, ArgumentationGeneratorFactory, ExtensionInstance},
    generator::GeneratorFactory,
    io::AnswerReader,
};
use anyhow::Result;
use std::{ffi::OsString, path::PathBuf};

/// The query asked to an argumentation solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Enumerate all the extensions
    EE,
    /// Compute a single extension
    SE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl Query {
    /// Returns a short string representing the query.
    ///
    /// The string corresponds to the two letters query as defined in ICCMA competitions.
    pub fn to_short_str(&self) -> &'static str {
        match self {
            Query::EE => "EE",
            Query::SE => "SE",
            Query::DC => "DC",
            Query::DS => "DS",
        }
    }

    fn needs_argument(&self) -> bool {
        matches!(self, Query::DC | Query::DS)
    }
}

/// A checker for argumentation solvers following the ICCMA command line conventions.
///
/// The solver is called with `-p <problem> -f <file> -fo apx`, followed by `-a <argument>` for acceptance queries.
/// Acceptance queries are made on the last argument of the framework; frameworks without arguments are ignored for these queries.
///
/// The semantics under test is named "complete" for compatibility with existing tools,
/// but the expected extensions are the admissible sets of the frameworks.
/// Credulous acceptance is the same under both semantics.
/// Skeptical acceptance is decided under the complete semantics, that is by membership in the grounded extension.
pub struct ArgumentationChecker {
    query: Query,
}

impl ArgumentationChecker {
    /// Builds a checker for the given query.
    pub fn new(query: Query) -> Self {
        Self { query }
    }

    /// Returns the query of this checker.
    pub fn query(&self) -> Query {
        self.query
    }

    fn query_argument(instance: &ExtensionInstance) -> Option<String> {
        instance
            .af()
            .arguments()
            .last()
            .map(|a| a.label().to_string())
    }
}

/// The object building the command line of an argumentation solver.
pub struct IccmaExecutor {
    problem: String,
    argument: Option<String>,
}

impl IccmaExecutor {
    /// Builds a new executor for the problem, with an optional query argument.
    pub fn new(problem: String, argument: Option<String>) -> Self {
        Self { problem, argument }
    }
}

impl SolverExecutor for IccmaExecutor {
    fn cli_args(&self, instance_files: &[PathBuf]) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-p".into(), self.problem.as_str().into(), "-f".into()];
        if let Some(f) = instance_files.first() {
            args.push(f.clone().into_os_string());
        }
        args.push("-fo".into());
        args.push("apx".into());
        if let Some(a) = &self.argument {
            args.push("-a".into());
            args.push(a.into());
        }
        args
    }
}

impl Checker for ArgumentationChecker {
    type Instance = ExtensionInstance;

    fn name(&self) -> &'static str {
        match self.query {
            Query::EE => "EE-CO",
            Query::SE => "SE-CO",
            Query::DC => "DC-CO",
            Query::DS => "DS-CO",
        }
    }

    fn description(&self) -> &'static str {
        match self.query {
            Query::EE => "enumeration of the extensions",
            Query::SE => "computation of a single extension",
            Query::DC => "credulous acceptance of the last argument",
            Query::DS => "skeptical acceptance of the last argument (grounded extension membership)",
        }
    }

    fn generator_factory(&self) -> Result<Box<dyn GeneratorFactory<Instance = ExtensionInstance>>> {
        Ok(Box::new(ArgumentationGeneratorFactory::default()))
    }

    fn required_payloads(&self) -> &[&'static str] {
        &["apx"]
    }

    fn ignore_instance(&self, instance: &ExtensionInstance) -> bool {
        self.query.needs_argument() && instance.af().n_arguments() == 0
    }

    fn executor(&self, instance: &ExtensionInstance) -> Box<dyn SolverExecutor> {
        let argument = if self.query.needs_argument() {
            Self::query_argument(instance)
        } else {
            None
        };
        Box::new(IccmaExecutor::new(self.name().to_string(), argument))
    }

    fn check(
        &self,
        instance: &ExtensionInstance,
        solver_output: &str,
        reader: &dyn AnswerReader,
    ) -> Result<CheckResult> {
        let expected = instance.extension_labels();
        match self.query {
            Query::EE => {
                let actual = reader.read_extension_set(solver_output)?;
                if actual == expected {
                    Ok(CheckResult::Success)
                } else {
                    Ok(CheckResult::mismatch(expected, actual))
                }
            }
            Query::SE => {
                let actual = reader.read_extension(solver_output)?;
                if expected.contains(&actual) {
                    Ok(CheckResult::Success)
                } else {
                    Ok(CheckResult::Failure(format!(
                        "{:?} is not an extension (extensions are {:?})",
                        actual, expected
                    )))
                }
            }
            Query::DC | Query::DS => {
                let argument = Self::query_argument(instance).unwrap_or_default();
                let expected_status = if self.query == Query::DC {
                    expected.iter().any(|e| e.contains(&argument))
                } else {
                    aa::grounded_extension(instance.af())
                        .iter()
                        .any(|a| a.label() == argument)
                };
                let actual = reader.read_acceptance_statuses(solver_output)?;
                if actual == [expected_status] {
                    Ok(CheckResult::Success)
                } else {
                    Ok(CheckResult::mismatch(vec![expected_status], actual))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        aa::{AAFramework, ArgumentRegistry},
        generator::{self, GenerationContext},
        io::Dialect,
        utils::HarnessError,
    };

    fn instance_with_attacks(n_args: usize, attacks: &[(usize, usize)]) -> ExtensionInstance {
        let mut registry = ArgumentRegistry::default();
        let mut af = AAFramework::default();
        for i in 0..n_args {
            af.new_argument(registry.intern(&format!("a{}", i))).unwrap();
        }
        for (from, to) in attacks {
            af.new_attack_by_ids(*from, *to).unwrap();
        }
        ExtensionInstance::new(af)
    }

    fn instance() -> ExtensionInstance {
        instance_with_attacks(2, &[(0, 1)])
    }

    fn check_instance(
        query: Query,
        instance: &ExtensionInstance,
        output: &str,
    ) -> Result<CheckResult> {
        ArgumentationChecker::new(query).check(
            instance,
            output,
            Dialect::Iccma19.reader().as_ref(),
        )
    }

    fn check(query: Query, output: &str) -> Result<CheckResult> {
        check_instance(query, &instance(), output)
    }

    #[test]
    fn test_cli_args() {
        let checker = ArgumentationChecker::new(Query::DC);
        assert_eq!("DC", checker.query().to_short_str());
        let args = checker
            .executor(&instance())
            .cli_args(&[PathBuf::from("/tmp/instance.apx")]);
        assert_eq!(
            vec!["-p", "DC-CO", "-f", "/tmp/instance.apx", "-fo", "apx", "-a", "a1"],
            args.iter()
                .map(|a| a.to_str().unwrap())
                .collect::<Vec<&str>>()
        );
        let args = ArgumentationChecker::new(Query::EE)
            .executor(&instance())
            .cli_args(&[PathBuf::from("f.apx")]);
        assert_eq!(6, args.len());
    }

    #[test]
    fn test_enumeration() {
        assert!(check(Query::EE, "[\n  [a0]\n  []\n]\n").unwrap().is_success());
        assert!(!check(Query::EE, "[\n  [a0]\n]\n").unwrap().is_success());
        assert!(HarnessError::is_syntax_error(
            &check(Query::EE, "[[a0],[]]\n").unwrap_err()
        ));
    }

    #[test]
    fn test_single_extension() {
        assert!(check(Query::SE, "[a0]\n").unwrap().is_success());
        assert!(check(Query::SE, "[]\n").unwrap().is_success());
        assert!(!check(Query::SE, "[a1]\n").unwrap().is_success());
    }

    #[test]
    fn test_acceptance() {
        assert!(!check(Query::DC, "YES\n").unwrap().is_success());
        assert!(check(Query::DC, "NO\n").unwrap().is_success());
        assert!(check(Query::DS, "NO\n").unwrap().is_success());
        assert!(!check(Query::DC, "NO,NO\n").unwrap().is_success());
    }

    #[test]
    fn test_skeptical_acceptance() {
        let unattacked = instance_with_attacks(2, &[(1, 0)]);
        assert!(check_instance(Query::DS, &unattacked, "YES\n").unwrap().is_success());
        assert!(!check_instance(Query::DS, &unattacked, "NO\n").unwrap().is_success());
        let defended = instance_with_attacks(3, &[(0, 1), (1, 2)]);
        assert!(check_instance(Query::DS, &defended, "YES\n").unwrap().is_success());
        let undecided = instance_with_attacks(2, &[(0, 1), (1, 0)]);
        assert!(check_instance(Query::DS, &undecided, "NO\n").unwrap().is_success());
        assert!(check_instance(Query::DC, &undecided, "YES\n").unwrap().is_success());
        assert!(!check(Query::DS, "YES\n").unwrap().is_success());
    }

    #[test]
    fn test_skeptical_answers_are_not_constant() {
        let checker = ArgumentationChecker::new(Query::DS);
        let reader = Dialect::Iccma19.reader();
        let mut context = GenerationContext::new_with_seed(0);
        let instances =
            generator::generate(&ArgumentationGeneratorFactory::default(), 3, &mut context)
                .unwrap();
        let failures = |answer: &str| {
            instances
                .iter()
                .filter(|i| !checker.ignore_instance(i))
                .filter(|i| {
                    !checker
                        .check(i, answer, reader.as_ref())
                        .unwrap()
                        .is_success()
                })
                .count()
        };
        assert!(failures("YES\n") > 0);
        assert!(failures("NO\n") > 0);
    }

    #[test]
    fn test_ignore_empty_frameworks() {
        let empty = ExtensionInstance::default();
        assert!(ArgumentationChecker::new(Query::DC).ignore_instance(&empty));
        assert!(ArgumentationChecker::new(Query::DS).ignore_instance(&empty));
        assert!(!ArgumentationChecker::new(Query::EE).ignore_instance(&empty));
        assert!(!ArgumentationChecker::new(Query::DC).ignore_instance(&instance()));
    }
}
