//! The CNF model oracle: formulas, their models, and the translators generating them.

mod cnf_instance;
pub use cnf_instance::CnfInstance;

mod counting;
pub use counting::model_counting_generator_factory;
pub use counting::weighted_model_counting_generator_factory;
pub use counting::ModelCountingGeneratorFactory;
pub use counting::ModelCountingInstance;
pub use counting::WeightedModelCountingGeneratorFactory;
pub use counting::WeightedModelCountingInstance;

mod generators;
pub use generators::cnf_generator;
pub use generators::model_counting_generator;
pub use generators::weighted_cnf_generator;
pub use generators::weighted_model_counting_generator;
pub use generators::CNF_TRANSLATOR_WEIGHTS;
pub use generators::WEIGHTED_CNF_TRANSLATOR_WEIGHTS;

mod literal;
pub use literal::all_assignments;
pub use literal::satisfies_clause;
pub use literal::Literal;
pub use literal::Model;
pub use literal::Variable;

mod translators;
pub use translators::CnfGeneratorFactory;
pub use translators::NewClauseTranslator;
pub use translators::NewLiteralInClauseTranslator;
pub use translators::NewVariableTranslator;
pub use translators::NEW_CLAUSE_TRANSLATOR;
pub use translators::NEW_LITERAL_IN_CLAUSE_TRANSLATOR;
pub use translators::NEW_VARIABLE_TRANSLATOR;

mod weighted;
pub use weighted::weighted_cnf_generator_factory;
pub use weighted::SetLiteralWeightTranslator;
pub use weighted::WeightedCnfGeneratorFactory;
pub use weighted::WeightedCnfInstance;
pub use weighted::DEFAULT_LITERAL_WEIGHT;
pub use weighted::SET_LITERAL_WEIGHT_TRANSLATOR;
