use super::{
    model_counting_generator_factory, weighted_cnf_generator_factory,
    weighted_model_counting_generator_factory, CnfGeneratorFactory, ModelCountingGeneratorFactory,
    WeightedCnfGeneratorFactory, WeightedModelCountingGeneratorFactory, NEW_CLAUSE_TRANSLATOR,
    NEW_LITERAL_IN_CLAUSE_TRANSLATOR, NEW_VARIABLE_TRANSLATOR, SET_LITERAL_WEIGHT_TRANSLATOR,
};
use crate::generator::{GeneratorFactory, WeightedGeneratorFactory};
use anyhow::Result;
use std::collections::HashMap;

/// The translator weights of the CNF and model counting generators.
///
/// New clauses are drawn twice from each node, since each application picks a random unit clause.
pub const CNF_TRANSLATOR_WEIGHTS: [(&str, i64); 3] = [
    (NEW_VARIABLE_TRANSLATOR, 1),
    (NEW_CLAUSE_TRANSLATOR, 2),
    (NEW_LITERAL_IN_CLAUSE_TRANSLATOR, 1),
];

/// The translator weights of the weighted CNF and weighted model counting generators.
pub const WEIGHTED_CNF_TRANSLATOR_WEIGHTS: [(&str, i64); 4] = [
    (NEW_VARIABLE_TRANSLATOR, 1),
    (NEW_CLAUSE_TRANSLATOR, 2),
    (NEW_LITERAL_IN_CLAUSE_TRANSLATOR, 1),
    (SET_LITERAL_WEIGHT_TRANSLATOR, 1),
];

fn weighted<F>(base: F, table: &[(&str, i64)]) -> Result<WeightedGeneratorFactory<F>>
where
    F: GeneratorFactory,
{
    let weights = table
        .iter()
        .map(|(name, w)| (name.to_string(), *w))
        .collect::<HashMap<String, i64>>();
    WeightedGeneratorFactory::new(base, weights)
}

/// Builds the generator of CNF formulas, weighted by [`CNF_TRANSLATOR_WEIGHTS`].
pub fn cnf_generator() -> Result<WeightedGeneratorFactory<CnfGeneratorFactory>> {
    weighted(CnfGeneratorFactory, &CNF_TRANSLATOR_WEIGHTS)
}

/// Builds the generator of model counting instances, weighted by [`CNF_TRANSLATOR_WEIGHTS`].
pub fn model_counting_generator() -> Result<WeightedGeneratorFactory<ModelCountingGeneratorFactory>> {
    weighted(model_counting_generator_factory(), &CNF_TRANSLATOR_WEIGHTS)
}

/// Builds the generator of weighted CNF formulas, weighted by [`WEIGHTED_CNF_TRANSLATOR_WEIGHTS`].
pub fn weighted_cnf_generator() -> Result<WeightedGeneratorFactory<WeightedCnfGeneratorFactory>> {
    weighted(weighted_cnf_generator_factory(), &WEIGHTED_CNF_TRANSLATOR_WEIGHTS)
}

/// Builds the generator of weighted model counting instances, weighted by [`WEIGHTED_CNF_TRANSLATOR_WEIGHTS`].
pub fn weighted_model_counting_generator(
) -> Result<WeightedGeneratorFactory<WeightedModelCountingGeneratorFactory>> {
    weighted(
        weighted_model_counting_generator_factory(),
        &WEIGHTED_CNF_TRANSLATOR_WEIGHTS,
    )
}
