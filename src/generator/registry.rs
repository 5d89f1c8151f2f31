use super::PayloadGenerator;
use crate::{
    aa::ArgumentationGeneratorFactory,
    cnf::{
        cnf_generator, model_counting_generator, weighted_cnf_generator,
        weighted_model_counting_generator,
    },
    utils::HarnessError,
};
use anyhow::Result;

const GENERATORS: [(&str, &str); 5] = [
    ("AF", "argumentation frameworks and their extensions"),
    ("CNF", "CNF formulas and their models"),
    ("MC", "CNF formulas and their number of models"),
    ("WCNF", "weighted CNF formulas and their models"),
    ("WMC", "weighted CNF formulas and their weighted number of models"),
];

/// Returns an iterator to the names and descriptions of the available generators.
pub fn iter_generator_names() -> impl Iterator<Item = (&'static str, &'static str)> {
    GENERATORS.into_iter()
}

/// Returns the generator with the given name.
///
/// An [InvalidArgument](HarnessError::InvalidArgument) error is returned if no generator has this name.
///
/// # Example
///
/// ```
/// # use crusticheck::generator::{self, GenerationContext};
/// let generator = generator::generator_by_name("CNF").unwrap();
/// let mut context = GenerationContext::new_with_seed(0);
/// let mut n = 0;
/// generator.generate_payloads(2, &mut context, &mut |_| { n += 1; Ok(()) }).unwrap();
/// assert_eq!(2, n);
/// ```
pub fn generator_by_name(name: &str) -> Result<Box<dyn PayloadGenerator>> {
    match name {
        "AF" => Ok(Box::new(ArgumentationGeneratorFactory::default())),
        "CNF" => Ok(Box::new(cnf_generator()?)),
        "MC" => Ok(Box::new(model_counting_generator()?)),
        "WCNF" => Ok(Box::new(weighted_cnf_generator()?)),
        "WMC" => Ok(Box::new(weighted_model_counting_generator()?)),
        _ => Err(HarnessError::InvalidArgument(format!(
            r#"unknown generator "{}" (expected one of {})"#,
            name,
            GENERATORS
                .iter()
                .map(|(n, _)| *n)
                .collect::<Vec<&str>>()
                .join(", ")
        ))
        .into()),
    }
}
