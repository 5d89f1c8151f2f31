use super::{all_assignments, satisfies_clause, CnfInstance, Literal, Variable};
use crate::{
    generator::{GenerationContext, GeneratorFactory, SharedTranslator, Translator},
    utils::HarnessError,
};
use anyhow::Result;
use rand::Rng;
use std::{collections::BTreeSet, rc::Rc};

/// The name of the [`NewVariableTranslator`].
pub const NEW_VARIABLE_TRANSLATOR: &str = "new_variable";

/// The name of the [`NewClauseTranslator`].
pub const NEW_CLAUSE_TRANSLATOR: &str = "new_clause";

/// The name of the [`NewLiteralInClauseTranslator`].
pub const NEW_LITERAL_IN_CLAUSE_TRANSLATOR: &str = "new_literal_in_clause";

/// A translator adding a new variable to the formula.
///
/// Each model is split into two models, one for each polarity of the new variable.
/// This translator is applicable as long as the formula has at least one model.
#[derive(Default)]
pub struct NewVariableTranslator;

impl Translator<CnfInstance> for NewVariableTranslator {
    fn name(&self) -> &str {
        NEW_VARIABLE_TRANSLATOR
    }

    fn can_apply(&self, instance: &CnfInstance) -> bool {
        !instance.models().is_empty()
    }

    fn apply(&self, instance: &CnfInstance, _context: &mut GenerationContext) -> Result<CnfInstance> {
        let var = Variable::from(instance.n_vars() + 1);
        let models = instance
            .models()
            .iter()
            .flat_map(|m| {
                [false, true].into_iter().map(move |polarity| {
                    let mut new_model = m.clone();
                    new_model.insert(var.literal(polarity));
                    new_model
                })
            })
            .collect();
        Ok(CnfInstance::from_parts(
            instance.n_vars() + 1,
            instance.clauses().to_vec(),
            models,
        ))
    }
}

/// A translator adding a unit clause.
///
/// The literal of the clause is chosen uniformly among the ones that are not already the literal of a unit clause.
/// The models are filtered to keep the ones containing this literal.
///
/// This translator is applicable when the formula has at least one model and a literal is not the literal of a unit clause yet.
#[derive(Default)]
pub struct NewClauseTranslator;

impl NewClauseTranslator {
    fn free_literals(instance: &CnfInstance) -> Vec<Literal> {
        let pinned = instance
            .clauses()
            .iter()
            .filter(|cl| cl.len() == 1)
            .map(|cl| cl[0])
            .collect::<BTreeSet<Literal>>();
        instance
            .iter_literals()
            .filter(|l| !pinned.contains(l))
            .collect()
    }
}

impl Translator<CnfInstance> for NewClauseTranslator {
    fn name(&self) -> &str {
        NEW_CLAUSE_TRANSLATOR
    }

    fn can_apply(&self, instance: &CnfInstance) -> bool {
        !instance.models().is_empty() && !Self::free_literals(instance).is_empty()
    }

    fn apply(&self, instance: &CnfInstance, context: &mut GenerationContext) -> Result<CnfInstance> {
        let free_literals = Self::free_literals(instance);
        if free_literals.is_empty() {
            return Err(HarnessError::InvalidState(
                "all the literals are already involved in unit clauses".to_string(),
            )
            .into());
        }
        let literal = free_literals[context.rng().gen_range(0..free_literals.len())];
        let mut clauses = instance.clauses().to_vec();
        clauses.push(vec![literal]);
        let models = instance
            .models()
            .iter()
            .filter(|m| m.contains(&literal))
            .cloned()
            .collect();
        Ok(CnfInstance::from_parts(instance.n_vars(), clauses, models))
    }
}

/// A translator adding a literal to an existing clause.
///
/// The clause is chosen uniformly among the ones that do not contain a literal for each variable,
/// and the variable is chosen uniformly among the ones that do not appear in the clause.
/// The polarity of the literal is random.
///
/// Since the clause is broadened, the previous models are kept and new ones may appear.
///
/// This translator is applicable as long as a clause does not contain a literal for each variable.
#[derive(Default)]
pub struct NewLiteralInClauseTranslator;

impl NewLiteralInClauseTranslator {
    fn absent_vars(n_vars: usize, clause: &[Literal]) -> Vec<Variable> {
        let present = clause.iter().map(|l| l.var()).collect::<BTreeSet<Variable>>();
        (1..=n_vars)
            .map(Variable::from)
            .filter(|v| !present.contains(v))
            .collect()
    }
}

impl Translator<CnfInstance> for NewLiteralInClauseTranslator {
    fn name(&self) -> &str {
        NEW_LITERAL_IN_CLAUSE_TRANSLATOR
    }

    fn can_apply(&self, instance: &CnfInstance) -> bool {
        instance
            .clauses()
            .iter()
            .any(|cl| !Self::absent_vars(instance.n_vars(), cl).is_empty())
    }

    fn apply(&self, instance: &CnfInstance, context: &mut GenerationContext) -> Result<CnfInstance> {
        let candidates = instance
            .clauses()
            .iter()
            .enumerate()
            .map(|(i, cl)| (i, Self::absent_vars(instance.n_vars(), cl)))
            .filter(|(_, vars)| !vars.is_empty())
            .collect::<Vec<_>>();
        if candidates.is_empty() {
            return Err(HarnessError::InvalidState(
                "all the clauses already contain a literal for each variable".to_string(),
            )
            .into());
        }
        let rng = context.rng();
        let (clause_index, vars) = &candidates[rng.gen_range(0..candidates.len())];
        let var = vars[rng.gen_range(0..vars.len())];
        let literal = var.literal(rng.gen_bool(0.5));
        let mut clauses = instance.clauses().to_vec();
        clauses[*clause_index].push(literal);
        let mut models = instance.models().clone();
        models.extend(
            all_assignments(instance.n_vars())
                .filter(|m| clauses.iter().all(|cl| satisfies_clause(m, cl))),
        );
        Ok(CnfInstance::from_parts(instance.n_vars(), clauses, models))
    }
}

/// The factory of CNF instances.
///
/// The root instance is the formula with no variables and no clauses.
/// The translators are a [`NewVariableTranslator`], a [`NewClauseTranslator`] and a [`NewLiteralInClauseTranslator`].
#[derive(Default)]
pub struct CnfGeneratorFactory;

impl GeneratorFactory for CnfGeneratorFactory {
    type Instance = CnfInstance;

    fn init_instance(&self, _context: &mut GenerationContext) -> Result<CnfInstance> {
        Ok(CnfInstance::default())
    }

    fn init_translators(&self) -> Vec<SharedTranslator<CnfInstance>> {
        vec![
            Rc::new(NewVariableTranslator),
            Rc::new(NewClauseTranslator),
            Rc::new(NewLiteralInClauseTranslator),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clause, cnf::Model, generator};

    fn brute_force_models(instance: &CnfInstance) -> BTreeSet<Model> {
        all_assignments(instance.n_vars())
            .filter(|m| instance.clauses().iter().all(|cl| satisfies_clause(m, cl)))
            .collect()
    }

    #[test]
    fn test_new_variable() {
        let mut context = GenerationContext::new_with_seed(0);
        let i0 = CnfInstance::default();
        let i1 = NewVariableTranslator.apply(&i0, &mut context).unwrap();
        let i2 = NewVariableTranslator.apply(&i1, &mut context).unwrap();
        assert_eq!(2, i2.n_vars());
        assert_eq!(4, i2.models().len());
        assert_eq!(&brute_force_models(&i2), i2.models());
    }

    #[test]
    fn test_new_variable_not_applicable_without_models() {
        let instance = CnfInstance::new(1, vec![clause![1], clause![-1]]).unwrap();
        assert!(!NewVariableTranslator.can_apply(&instance));
    }

    #[test]
    fn test_new_clause_on_last_free_literal() {
        let mut context = GenerationContext::new_with_seed(0);
        let instance = CnfInstance::new(1, vec![clause![1]]).unwrap();
        assert!(NewClauseTranslator.can_apply(&instance));
        let new_instance = NewClauseTranslator.apply(&instance, &mut context).unwrap();
        assert_eq!(&[clause![1], clause![-1]], new_instance.clauses());
        assert!(new_instance.models().is_empty());
    }

    #[test]
    fn test_new_clause_not_applicable_on_empty_formula() {
        assert!(!NewClauseTranslator.can_apply(&CnfInstance::default()));
    }

    #[test]
    fn test_new_literal_in_clause() {
        let mut context = GenerationContext::new_with_seed(0);
        let instance = CnfInstance::new(2, vec![clause![1]]).unwrap();
        assert!(NewLiteralInClauseTranslator.can_apply(&instance));
        let new_instance = NewLiteralInClauseTranslator
            .apply(&instance, &mut context)
            .unwrap();
        assert_eq!(2, new_instance.clauses()[0].len());
        assert_eq!(3, new_instance.models().len());
        assert!(instance.models().is_subset(new_instance.models()));
        assert_eq!(&brute_force_models(&new_instance), new_instance.models());
    }

    #[test]
    fn test_new_literal_in_full_clause() {
        let mut context = GenerationContext::new_with_seed(0);
        let instance = CnfInstance::new(2, vec![clause![1, -2]]).unwrap();
        assert!(!NewLiteralInClauseTranslator.can_apply(&instance));
        let err = NewLiteralInClauseTranslator
            .apply(&instance, &mut context)
            .unwrap_err();
        assert!(HarnessError::is_invalid_state(&err));
    }

    #[test]
    fn test_tree_size() {
        let mut context = GenerationContext::new_with_seed(0);
        // root -> {x1} -> {x1 x2 ; x1 with unit clause}
        let instances = generator::generate(&CnfGeneratorFactory, 3, &mut context).unwrap();
        assert_eq!(4, instances.len());
    }

    #[test]
    fn test_generated_instances_are_consistent() {
        for seed in 0..4 {
            let mut context = GenerationContext::new_with_seed(seed);
            let instances = generator::generate(&CnfGeneratorFactory, 5, &mut context).unwrap();
            for i in instances.iter() {
                assert_eq!(&brute_force_models(i), i.models());
                assert!(i
                    .clauses()
                    .iter()
                    .flatten()
                    .all(|l| usize::from(l.var()) <= i.n_vars()));
            }
        }
    }
}
