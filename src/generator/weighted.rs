use super::{GenerationContext, GeneratorFactory, SharedTranslator};
use crate::utils::HarnessError;
use anyhow::Result;
use std::collections::{BTreeSet, HashMap};

/// A generator factory that assigns weights to the translators of another factory.
///
/// The effective translator list contains each translator of the underlying factory as many times as its weight.
/// Since translators may rely on random choices, a weight greater than one may produce several different children from the same node.
/// A weight of zero disables a translator.
///
/// Each translator of the underlying factory must be given exactly one weight, and no weight may refer to an unknown translator.
///
/// # Example
///
/// ```
/// # use crusticheck::cnf::CnfGeneratorFactory;
/// # use crusticheck::generator::{GeneratorFactory, WeightedGeneratorFactory};
/// # use std::collections::HashMap;
/// let weights = HashMap::from([
///     ("new_variable".to_string(), 1),
///     ("new_clause".to_string(), 2),
///     ("new_literal_in_clause".to_string(), 0),
/// ]);
/// let factory = WeightedGeneratorFactory::new(CnfGeneratorFactory::default(), weights).unwrap();
/// assert_eq!(3, factory.effective_translators().unwrap().len());
/// ```
pub struct WeightedGeneratorFactory<F>
where
    F: GeneratorFactory,
{
    base: F,
    weights: HashMap<String, i64>,
}

impl<F> WeightedGeneratorFactory<F>
where
    F: GeneratorFactory,
{
    /// Builds a new weighted factory.
    ///
    /// An [InvalidConfiguration](HarnessError::InvalidConfiguration) error is returned if the weights do not match the translators of the factory,
    /// or if a weight is negative.
    pub fn new(base: F, weights: HashMap<String, i64>) -> Result<Self> {
        let factory = Self { base, weights };
        factory.effective_translators()?;
        Ok(factory)
    }

    /// Returns the underlying factory.
    pub fn base(&self) -> &F {
        &self.base
    }
}

impl<F> GeneratorFactory for WeightedGeneratorFactory<F>
where
    F: GeneratorFactory,
{
    type Instance = F::Instance;

    fn init_instance(&self, context: &mut GenerationContext) -> Result<Self::Instance> {
        self.base.init_instance(context)
    }

    fn init_translators(&self) -> Vec<SharedTranslator<Self::Instance>> {
        self.base.init_translators()
    }

    fn effective_translators(&self) -> Result<Vec<SharedTranslator<Self::Instance>>> {
        let mut seen_names = BTreeSet::new();
        let distinct_translators = self
            .base
            .init_translators()
            .into_iter()
            .filter(|t| seen_names.insert(t.name().to_string()))
            .collect::<Vec<_>>();
        for (name, weight) in self.weights.iter() {
            if *weight < 0 {
                return invalid_configuration(format!(
                    r#"negative weight {} for translator "{}""#,
                    weight, name
                ));
            }
            if !seen_names.contains(name) {
                return invalid_configuration(format!(r#"no translator named "{}""#, name));
            }
        }
        let mut effective = Vec::new();
        for t in distinct_translators {
            match self.weights.get(t.name()) {
                Some(w) => (0..*w).for_each(|_| effective.push(t.clone())),
                None => {
                    return invalid_configuration(format!(
                        r#"no weight given for translator "{}""#,
                        t.name()
                    ))
                }
            }
        }
        Ok(effective)
    }
}

fn invalid_configuration<T>(msg: String) -> Result<T> {
    Err(HarnessError::InvalidConfiguration(msg).into())
}
