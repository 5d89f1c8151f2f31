use super::Argument;
use crate::utils::HarnessError;
use anyhow::{anyhow, Result};
use std::collections::BTreeSet;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// Arguments are referred by their index in the framework, which is their insertion order.
/// The framework only grows: arguments and attacks are never removed.
#[derive(Clone, Debug, Default)]
pub struct AAFramework {
    arguments: Vec<Argument>,
    attacks: BTreeSet<(usize, usize)>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a>(&'a Argument, &'a Argument);

impl<'a> Attack<'a> {
    /// Returns the attacker.
    pub fn attacker(&self) -> &'a Argument {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument {
        self.1
    }
}

impl AAFramework {
    /// Adds a new argument to this argumentation framework.
    ///
    /// The index of the new argument is the previous number of arguments.
    /// If the argument already belongs to this framework, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use crusticheck::aa::{AAFramework, ArgumentRegistry};
    /// let mut registry = ArgumentRegistry::default();
    /// let mut framework = AAFramework::default();
    /// framework.new_argument(registry.intern("a0")).unwrap();
    /// assert_eq!(1, framework.n_arguments());
    /// assert!(framework.new_argument(registry.intern("a0")).is_err());
    /// ```
    pub fn new_argument(&mut self, argument: Argument) -> Result<usize> {
        if self.arguments.contains(&argument) {
            return Err(HarnessError::InvalidArgument(format!(
                "argument {} is already in the framework",
                argument
            ))
            .into());
        }
        self.arguments.push(argument);
        self.attacks_from.push(Vec::new());
        self.attacks_to.push(Vec::new());
        Ok(self.arguments.len() - 1)
    }

    /// Adds a new attack given the indexes of the source and destination arguments.
    ///
    /// If the provided arguments are undefined, or if the attack already exists, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use crusticheck::aa::{AAFramework, ArgumentRegistry};
    /// let mut registry = ArgumentRegistry::default();
    /// let mut framework = AAFramework::default();
    /// framework.new_argument(registry.intern("a0")).unwrap();
    /// framework.new_argument(registry.intern("a1")).unwrap();
    /// framework.new_attack_by_ids(0, 1).unwrap(); // "a0" attacks "a1"
    /// assert_eq!(1, framework.n_attacks());
    /// assert!(framework.new_attack_by_ids(0, 1).is_err());
    /// ```
    pub fn new_attack_by_ids(&mut self, from: usize, to: usize) -> Result<()> {
        let n_arguments = self.arguments.len();
        if from >= n_arguments || to >= n_arguments {
            return Err(anyhow!(
                "cannot add an attack from identifiers {:?} to {:?}; the framework has {} argument(s)",
                from,
                to,
                n_arguments
            ));
        }
        if !self.attacks.insert((from, to)) {
            return Err(anyhow!(
                "cannot add an attack from {} to {}; this attack already exists",
                self.arguments[from],
                self.arguments[to]
            ));
        }
        self.attacks_from[from].push(to);
        self.attacks_to[to].push(from);
        Ok(())
    }

    /// Returns the arguments of the framework, in insertion order.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Returns the argument at the given index.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such index.
    pub fn argument(&self, index: usize) -> &Argument {
        &self.arguments[index]
    }

    /// Returns `true` iff the attack exists.
    pub fn has_attack(&self, from: usize, to: usize) -> bool {
        self.attacks.contains(&(from, to))
    }

    /// Returns the indexes of the arguments attacked by the given one.
    pub fn attacked_by(&self, from: usize) -> &[usize] {
        &self.attacks_from[from]
    }

    /// Returns the indexes of the arguments attacking the given one.
    pub fn attackers_of(&self, to: usize) -> &[usize] {
        &self.attacks_to[to]
    }

    /// Provides an iterator to the attacks, ordered by attacker and attacked indexes.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_>> + '_ {
        self.attacks
            .iter()
            .map(|(a, b)| Attack(&self.arguments[*a], &self.arguments[*b]))
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }
}

impl PartialEq for AAFramework {
    fn eq(&self, other: &Self) -> bool {
        self.arguments == other.arguments && self.attacks == other.attacks
    }
}

impl Eq for AAFramework {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentRegistry;

    fn framework_with_args(n: usize) -> AAFramework {
        let mut registry = ArgumentRegistry::default();
        let mut af = AAFramework::default();
        for i in 0..n {
            af.new_argument(registry.intern(&format!("a{}", i))).unwrap();
        }
        af
    }

    #[test]
    fn test_n_args() {
        let af = framework_with_args(3);
        assert_eq!(3, af.n_arguments());
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_new_attack_ok() {
        let mut af = framework_with_args(3);
        af.new_attack_by_ids(0, 0).unwrap();
        assert_eq!(1, af.n_attacks());
        assert!(af.has_attack(0, 0));
        assert!(!af.has_attack(0, 1));
        assert_eq!(&[0], af.attacked_by(0));
        assert_eq!(&[0], af.attackers_of(0));
    }

    #[test]
    fn test_new_attack_unknown_id_1() {
        let mut af = framework_with_args(3);
        af.new_attack_by_ids(3, 0).unwrap_err();
    }

    #[test]
    fn test_new_attack_unknown_id_2() {
        let mut af = framework_with_args(3);
        af.new_attack_by_ids(0, 3).unwrap_err();
    }

    #[test]
    fn test_new_attack_twice() {
        let mut af = framework_with_args(2);
        af.new_attack_by_ids(0, 1).unwrap();
        af.new_attack_by_ids(0, 1).unwrap_err();
        assert_eq!(1, af.n_attacks());
    }

    #[test]
    fn test_iter_attacks() {
        let mut af = framework_with_args(3);
        af.new_attack_by_ids(2, 1).unwrap();
        af.new_attack_by_ids(0, 1).unwrap();
        let attacks = af
            .iter_attacks()
            .map(|att| (att.attacker().label(), att.attacked().label()))
            .collect::<Vec<_>>();
        assert_eq!(vec![("a0", "a1"), ("a2", "a1")], attacks);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut af1 = framework_with_args(3);
        af1.new_attack_by_ids(0, 1).unwrap();
        af1.new_attack_by_ids(2, 1).unwrap();
        let mut af2 = framework_with_args(3);
        af2.new_attack_by_ids(2, 1).unwrap();
        af2.new_attack_by_ids(0, 1).unwrap();
        assert_eq!(af1, af2);
    }
}
