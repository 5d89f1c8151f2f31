//! The generation engine, building trees of instances by applying translators.

mod adapted;
pub use adapted::AdaptedGeneratorFactory;
pub use adapted::AdaptedInstance;
pub use adapted::AdaptingTranslator;

mod engine;
pub use engine::generate;
pub use engine::generate_with;
pub use engine::PayloadGenerator;

mod registry;
pub use registry::generator_by_name;
pub use registry::iter_generator_names;

pub(crate) mod specs;
pub use specs::GenerationContext;
pub use specs::GeneratorFactory;
pub use specs::Instance;
pub use specs::Payloads;
pub use specs::SharedTranslator;
pub use specs::Translator;

mod weighted;
pub use weighted::WeightedGeneratorFactory;
