use super::{all_assignments, satisfies_clause, Literal, Model};
use crate::{
    generator::{specs::unknown_payload_kind, Instance, Payloads},
    io::DimacsWriter,
    utils::HarnessError,
};
use anyhow::Result;
use std::{collections::BTreeSet, io::Write};

const PAYLOAD_KINDS: [&str; 2] = ["cnf", "models"];

/// A CNF formula paired with its models.
///
/// The formula is given by a number of variables and a sequence of clauses;
/// the models are all the total assignments of these variables satisfying all the clauses.
///
/// The available payloads are `cnf` (DIMACS format) and `models` (one model per line, each terminated by `0`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CnfInstance {
    n_vars: usize,
    clauses: Vec<Vec<Literal>>,
    models: BTreeSet<Model>,
}

impl Default for CnfInstance {
    /// Returns the formula with no variables and no clauses, which single model is the empty assignment.
    fn default() -> Self {
        Self {
            n_vars: 0,
            clauses: vec![],
            models: BTreeSet::from([Model::new()]),
        }
    }
}

impl CnfInstance {
    /// Builds an instance from a formula, enumerating all the assignments to compute its models.
    ///
    /// An error is returned if a literal refers to a variable greater than `n_vars`.
    ///
    /// # Example
    ///
    /// ```
    /// # use crusticheck::{clause, cnf::CnfInstance};
    /// let instance = CnfInstance::new(2, vec![clause![1, 2], clause![-1]]).unwrap();
    /// assert_eq!(1, instance.models().len());
    /// ```
    pub fn new(n_vars: usize, clauses: Vec<Vec<Literal>>) -> Result<Self> {
        if let Some(l) = clauses
            .iter()
            .flatten()
            .find(|l| usize::from(l.var()) > n_vars)
        {
            return Err(HarnessError::InvalidArgument(format!(
                "literal {} is out of bounds (number of variables is {})",
                l, n_vars
            ))
            .into());
        }
        let models = all_assignments(n_vars)
            .filter(|m| clauses.iter().all(|cl| satisfies_clause(m, cl)))
            .collect();
        Ok(Self {
            n_vars,
            clauses,
            models,
        })
    }

    pub(crate) fn from_parts(
        n_vars: usize,
        clauses: Vec<Vec<Literal>>,
        models: BTreeSet<Model>,
    ) -> Self {
        Self {
            n_vars,
            clauses,
            models,
        }
    }

    /// Returns the number of variables.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    /// Returns the clauses, in insertion order.
    pub fn clauses(&self) -> &[Vec<Literal>] {
        &self.clauses
    }

    /// Returns the models of the formula.
    pub fn models(&self) -> &BTreeSet<Model> {
        &self.models
    }

    /// Returns an iterator to all the literals of the variables, by variable order.
    pub fn iter_literals(&self) -> impl Iterator<Item = Literal> {
        (1..=self.n_vars as isize).flat_map(|v| [Literal::from(-v), Literal::from(v)])
    }
}

impl Payloads for CnfInstance {
    fn payload_kinds(&self) -> &[&'static str] {
        &PAYLOAD_KINDS
    }

    fn write_payload(&self, kind: &str, writer: &mut dyn Write) -> Result<()> {
        let dimacs_writer = DimacsWriter::default();
        match kind {
            "cnf" => dimacs_writer.write_cnf(self.n_vars, &self.clauses, writer),
            "models" => dimacs_writer.write_models(self.models.iter(), writer),
            _ => Err(unknown_payload_kind(kind, &PAYLOAD_KINDS)),
        }
    }
}

impl Instance for CnfInstance {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause;

    fn payload(instance: &CnfInstance, kind: &str) -> String {
        let mut buffer = Vec::new();
        instance.write_payload(kind, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_default() {
        let instance = CnfInstance::default();
        assert_eq!(0, instance.n_vars());
        assert!(instance.clauses().is_empty());
        assert_eq!(1, instance.models().len());
        assert_eq!(CnfInstance::new(0, vec![]).unwrap(), instance);
    }

    #[test]
    fn test_new() {
        let instance = CnfInstance::new(3, vec![clause![1, 2], clause![-3]]).unwrap();
        assert_eq!(3, instance.models().len());
        assert!(instance
            .models()
            .iter()
            .all(|m| m.contains(&Literal::from(-3))));
    }

    #[test]
    fn test_new_out_of_bounds() {
        assert!(CnfInstance::new(1, vec![clause![1, 2]]).is_err());
    }

    #[test]
    fn test_cnf_payload() {
        let instance = CnfInstance::new(2, vec![clause![1, -2], clause![2]]).unwrap();
        assert_eq!("p cnf 2 2\n1 -2 0\n2 0\n", payload(&instance, "cnf"));
    }

    #[test]
    fn test_models_payload() {
        let instance = CnfInstance::new(2, vec![clause![1]]).unwrap();
        assert_eq!("1 -2 0\n1 2 0\n", payload(&instance, "models"));
    }

    #[test]
    fn test_unknown_payload() {
        let mut buffer = Vec::new();
        let err = CnfInstance::default()
            .write_payload("apx", &mut buffer)
            .unwrap_err();
        assert!(HarnessError::is_invalid_argument(&err));
    }

    #[test]
    fn test_iter_literals() {
        let instance = CnfInstance::new(2, vec![]).unwrap();
        assert_eq!(
            clause![-1, 1, -2, 2],
            instance.iter_literals().collect::<Vec<Literal>>()
        );
    }
}
