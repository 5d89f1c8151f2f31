//! Extensions of argumentation frameworks and the algorithms computing them.

use super::{AAFramework, Argument};
use std::collections::BTreeSet;

/// An extension, that is a set of arguments.
pub type Extension = BTreeSet<Argument>;

/// A set of extensions.
pub type ExtensionSet = BTreeSet<Extension>;

/// Computes the admissible sets of an argumentation framework.
///
/// An admissible set is a conflict-free set of arguments defending all its members:
/// each argument attacking a member of the set is attacked by a member of the set.
///
/// The subsets of arguments are enumerated by deciding, argument by argument, whether it joins the current set.
/// An argument is prevented from joining the set as soon as it makes it conflicting,
/// so the defense is only checked on conflict-free sets.
///
/// This enumeration is exponential in the number of arguments.
///
/// # Example
///
/// ```
/// # use crusticheck::aa::{self, AAFramework, ArgumentRegistry};
/// let mut registry = ArgumentRegistry::default();
/// let mut af = AAFramework::default();
/// af.new_argument(registry.intern("a0")).unwrap();
/// af.new_argument(registry.intern("a1")).unwrap();
/// af.new_attack_by_ids(0, 1).unwrap();
/// let extensions = aa::admissible_sets(&af);
/// assert_eq!(2, extensions.len()); // {} and {a0}
/// ```
pub fn admissible_sets(af: &AAFramework) -> ExtensionSet {
    let mut computer = AdmissibleSetsComputer {
        af,
        members: Vec::with_capacity(af.n_arguments()),
        in_set: vec![false; af.n_arguments()],
        result: ExtensionSet::new(),
    };
    computer.enumerate(0);
    computer.result
}

struct AdmissibleSetsComputer<'a> {
    af: &'a AAFramework,
    members: Vec<usize>,
    in_set: Vec<bool>,
    result: ExtensionSet,
}

impl AdmissibleSetsComputer<'_> {
    fn enumerate(&mut self, next: usize) {
        if next == self.af.n_arguments() {
            if self.defends_members() {
                self.result.insert(
                    self.members
                        .iter()
                        .map(|i| self.af.argument(*i).clone())
                        .collect(),
                );
            }
            return;
        }
        self.enumerate(next + 1);
        if self.can_join(next) {
            self.in_set[next] = true;
            self.members.push(next);
            self.enumerate(next + 1);
            self.members.pop();
            self.in_set[next] = false;
        }
    }

    fn can_join(&self, candidate: usize) -> bool {
        !self.af.has_attack(candidate, candidate)
            && self
                .af
                .attacked_by(candidate)
                .iter()
                .all(|a| !self.in_set[*a])
            && self
                .af
                .attackers_of(candidate)
                .iter()
                .all(|a| !self.in_set[*a])
    }

    fn defends_members(&self) -> bool {
        self.members.iter().all(|m| {
            self.af.attackers_of(*m).iter().all(|attacker| {
                self.af
                    .attackers_of(*attacker)
                    .iter()
                    .any(|defender| self.in_set[*defender])
            })
        })
    }
}

/// Computes the grounded extension of an argumentation framework.
///
/// The grounded extension is the least fixed point of the characteristic function,
/// and the intersection of the complete extensions.
/// Unattacked arguments are accepted first; each accepted argument defeats the arguments it attacks,
/// and an argument is accepted as soon as all its attackers are defeated.
///
/// # Example
///
/// ```
/// # use crusticheck::aa::{self, AAFramework, ArgumentRegistry};
/// let mut registry = ArgumentRegistry::default();
/// let mut af = AAFramework::default();
/// for label in ["a0", "a1", "a2"] {
///     af.new_argument(registry.intern(label)).unwrap();
/// }
/// af.new_attack_by_ids(0, 1).unwrap();
/// af.new_attack_by_ids(1, 2).unwrap();
/// let grounded = aa::grounded_extension(&af);
/// assert_eq!(vec!["a0", "a2"], grounded.iter().map(|a| a.label()).collect::<Vec<&str>>());
/// ```
pub fn grounded_extension(af: &AAFramework) -> Extension {
    let n = af.n_arguments();
    let mut n_live_attackers = (0..n)
        .map(|i| af.attackers_of(i).len())
        .collect::<Vec<usize>>();
    let mut defeated = vec![false; n];
    let mut accepted = Vec::new();
    let mut to_process = (0..n)
        .filter(|i| n_live_attackers[*i] == 0)
        .collect::<Vec<usize>>();
    while let Some(arg) = to_process.pop() {
        accepted.push(arg);
        for target in af.attacked_by(arg) {
            if defeated[*target] {
                continue;
            }
            defeated[*target] = true;
            for next in af.attacked_by(*target) {
                n_live_attackers[*next] -= 1;
                if n_live_attackers[*next] == 0 {
                    to_process.push(*next);
                }
            }
        }
    }
    accepted.iter().map(|i| af.argument(*i).clone()).collect()
}

/// Returns `true` iff the set of argument indexes is conflict-free.
///
/// A conflict-free set contains no pair of arguments such that one attacks the other, including self-attacks.
pub fn is_conflict_free(af: &AAFramework, set: &[usize]) -> bool {
    set.iter()
        .all(|a| set.iter().all(|b| !af.has_attack(*a, *b)))
}

/// Returns `true` iff the set of argument indexes is admissible.
pub fn is_admissible(af: &AAFramework, set: &[usize]) -> bool {
    is_conflict_free(af, set)
        && set.iter().all(|m| {
            af.attackers_of(*m)
                .iter()
                .all(|attacker| set.iter().any(|d| af.has_attack(*d, *attacker)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentRegistry;

    fn framework(n_args: usize, attacks: &[(usize, usize)]) -> AAFramework {
        let mut registry = ArgumentRegistry::default();
        let mut af = AAFramework::default();
        for i in 0..n_args {
            af.new_argument(registry.intern(&format!("a{}", i))).unwrap();
        }
        for (from, to) in attacks {
            af.new_attack_by_ids(*from, *to).unwrap();
        }
        af
    }

    fn labels(extensions: &ExtensionSet) -> BTreeSet<Vec<String>> {
        extensions
            .iter()
            .map(|e| e.iter().map(|a| a.label().to_string()).collect())
            .collect()
    }

    fn expected(sets: &[&[&str]]) -> BTreeSet<Vec<String>> {
        sets.iter()
            .map(|s| s.iter().map(|a| a.to_string()).collect())
            .collect()
    }

    fn brute_force(af: &AAFramework) -> BTreeSet<Vec<String>> {
        let n = af.n_arguments();
        (0..1usize << n)
            .map(|mask| (0..n).filter(|i| mask & (1 << i) != 0).collect::<Vec<usize>>())
            .filter(|set| is_admissible(af, set))
            .map(|set| {
                set.iter()
                    .map(|i| af.argument(*i).label().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_empty_framework() {
        let af = framework(0, &[]);
        assert_eq!(expected(&[&[]]), labels(&admissible_sets(&af)));
    }

    #[test]
    fn test_no_attacks() {
        let af = framework(2, &[]);
        assert_eq!(
            expected(&[&[], &["a0"], &["a1"], &["a0", "a1"]]),
            labels(&admissible_sets(&af))
        );
    }

    #[test]
    fn test_single_attack() {
        let af = framework(2, &[(0, 1)]);
        assert_eq!(expected(&[&[], &["a0"]]), labels(&admissible_sets(&af)));
    }

    #[test]
    fn test_mutual_attack() {
        let af = framework(2, &[(0, 1), (1, 0)]);
        assert_eq!(
            expected(&[&[], &["a0"], &["a1"]]),
            labels(&admissible_sets(&af))
        );
    }

    #[test]
    fn test_self_attack() {
        let af = framework(2, &[(0, 0)]);
        assert_eq!(expected(&[&[], &["a1"]]), labels(&admissible_sets(&af)));
    }

    #[test]
    fn test_defense() {
        let af = framework(3, &[(0, 1), (1, 2)]);
        assert_eq!(
            expected(&[&[], &["a0"], &["a0", "a2"]]),
            labels(&admissible_sets(&af))
        );
    }

    #[test]
    fn test_odd_cycle() {
        let af = framework(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(expected(&[&[]]), labels(&admissible_sets(&af)));
    }

    fn grounded_labels(af: &AAFramework) -> Vec<String> {
        grounded_extension(af)
            .iter()
            .map(|a| a.label().to_string())
            .collect()
    }

    fn brute_force_grounded(af: &AAFramework) -> Vec<String> {
        let n = af.n_arguments();
        let defended_by = |set: &[usize], arg: usize| {
            af.attackers_of(arg)
                .iter()
                .all(|attacker| set.iter().any(|d| af.has_attack(*d, *attacker)))
        };
        let complete_extensions = (0..1usize << n)
            .map(|mask| (0..n).filter(|i| mask & (1 << i) != 0).collect::<Vec<usize>>())
            .filter(|set| is_admissible(af, set))
            .filter(|set| (0..n).all(|a| set.contains(&a) || !defended_by(set, a)))
            .collect::<Vec<Vec<usize>>>();
        (0..n)
            .filter(|a| complete_extensions.iter().all(|e| e.contains(a)))
            .map(|a| af.argument(a).label().to_string())
            .collect()
    }

    #[test]
    fn test_grounded_extension() {
        let af = framework(6, &[(0, 1), (1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]);
        assert_eq!(vec!["a0", "a2", "a3", "a5"], grounded_labels(&af));
    }

    #[test]
    fn test_grounded_extension_of_cycles() {
        assert!(grounded_labels(&framework(3, &[(0, 1), (1, 2), (2, 0)])).is_empty());
        assert!(grounded_labels(&framework(2, &[(0, 1), (1, 0)])).is_empty());
        assert_eq!(vec!["a1"], grounded_labels(&framework(2, &[(0, 0)])));
        assert!(grounded_labels(&framework(0, &[])).is_empty());
    }

    #[test]
    fn test_grounded_extension_against_brute_force() {
        let attack_lists: &[&[(usize, usize)]] = &[
            &[(0, 1), (1, 2), (2, 3), (3, 0)],
            &[(0, 1), (1, 0), (2, 1), (3, 3), (2, 3)],
            &[(0, 0), (1, 2), (2, 1), (3, 1), (0, 3)],
            &[(1, 0), (2, 0), (3, 0), (0, 1), (0, 2)],
            &[(0, 1), (1, 2), (2, 3)],
            &[(3, 2), (2, 1), (1, 1), (0, 3)],
        ];
        for attacks in attack_lists {
            let af = framework(4, attacks);
            assert_eq!(brute_force_grounded(&af), grounded_labels(&af), "{:?}", attacks);
        }
    }

    #[test]
    fn test_against_brute_force() {
        let attack_lists: &[&[(usize, usize)]] = &[
            &[(0, 1), (1, 2), (2, 3), (3, 0)],
            &[(0, 1), (1, 0), (2, 1), (3, 3), (2, 3)],
            &[(0, 0), (1, 2), (2, 1), (3, 1), (0, 3)],
            &[(1, 0), (2, 0), (3, 0), (0, 1), (0, 2)],
        ];
        for attacks in attack_lists {
            let af = framework(4, attacks);
            assert_eq!(brute_force(&af), labels(&admissible_sets(&af)));
        }
    }
}
