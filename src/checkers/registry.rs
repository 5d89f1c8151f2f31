use super::{
    argumentation::Query, run_checks, ArgumentationChecker, CheckCounters, CheckSettings, Checker,
    ModelCountingChecker, SatChecker, WeightedModelCountingChecker,
};
use crate::utils::HarnessError;
use anyhow::Result;

/// A checker which instances are hidden.
///
/// This trait is implemented by all [`Checker`] objects.
/// It is used to handle checkers selected by their name, regardless of the type of instances they use.
pub trait CheckerRunner {
    /// Returns the name of the checker.
    fn name(&self) -> &'static str;

    /// Returns a short description of the checker.
    fn description(&self) -> &'static str;

    /// Runs a checking session with this checker.
    ///
    /// See [`run_checks`].
    fn run(&self, settings: &CheckSettings) -> Result<CheckCounters>;
}

impl<C> CheckerRunner for C
where
    C: Checker,
{
    fn name(&self) -> &'static str {
        Checker::name(self)
    }

    fn description(&self) -> &'static str {
        Checker::description(self)
    }

    fn run(&self, settings: &CheckSettings) -> Result<CheckCounters> {
        run_checks(self, settings)
    }
}

/// Returns an iterator to all the available checkers.
pub fn iter_checkers() -> impl Iterator<Item = Box<dyn CheckerRunner>> {
    let checkers: Vec<Box<dyn CheckerRunner>> = vec![
        Box::new(ArgumentationChecker::new(Query::EE)),
        Box::new(ArgumentationChecker::new(Query::SE)),
        Box::new(ArgumentationChecker::new(Query::DC)),
        Box::new(ArgumentationChecker::new(Query::DS)),
        Box::new(SatChecker),
        Box::new(ModelCountingChecker),
        Box::new(WeightedModelCountingChecker),
    ];
    checkers.into_iter()
}

/// Returns the checker with the given name.
///
/// An [InvalidArgument](HarnessError::InvalidArgument) error is returned if no checker has this name.
///
/// # Example
///
/// ```
/// # use crusticheck::checkers;
/// assert_eq!("MC", checkers::checker_by_name("MC").unwrap().name());
/// assert!(checkers::checker_by_name("XX-CO").is_err());
/// ```
pub fn checker_by_name(name: &str) -> Result<Box<dyn CheckerRunner>> {
    iter_checkers().find(|c| c.name() == name).ok_or_else(|| {
        HarnessError::InvalidArgument(format!(
            r#"unknown checker "{}" (expected one of {})"#,
            name,
            iter_checkers()
                .map(|c| c.name())
                .collect::<Vec<&str>>()
                .join(", ")
        ))
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(
            vec!["EE-CO", "SE-CO", "DC-CO", "DS-CO", "SAT", "MC", "WMC"],
            iter_checkers().map(|c| c.name()).collect::<Vec<&str>>()
        );
    }

    #[test]
    fn test_unknown_checker() {
        let err = checker_by_name("foo").err().unwrap();
        assert!(HarnessError::is_invalid_argument(&err));
    }

    #[test]
    fn test_descriptions() {
        assert!(iter_checkers().all(|c| !c.description().is_empty()));
    }
}
