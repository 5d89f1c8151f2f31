//! The argumentation oracle: frameworks, their extensions, and the translators generating them.

mod aa_framework;
pub use aa_framework::AAFramework;
pub use aa_framework::Attack;

mod arguments;
pub use arguments::Argument;
pub use arguments::ArgumentRegistry;

mod extension_instance;
pub use extension_instance::ExtensionInstance;

pub mod extensions;
pub use extensions::admissible_sets;
pub use extensions::grounded_extension;
pub use extensions::Extension;
pub use extensions::ExtensionSet;

mod translators;
pub use translators::ArgumentationGeneratorFactory;
pub use translators::NewArgumentTranslator;
pub use translators::NewAttackTranslator;
pub use translators::NEW_ARGUMENT_TRANSLATOR;
pub use translators::NEW_ATTACK_TRANSLATOR;
