use crate::{aa::ArgumentRegistry, utils::HarnessError};
use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use std::{fmt::Debug, io::Write, rc::Rc};

/// A trait for objects that can be written as a set of named payloads.
///
/// Each payload kind usually corresponds to a file format (`apx`, `cnf`, ...).
/// This trait is object safe, which allows instances of different kinds to be handled the same way when they are persisted.
pub trait Payloads {
    /// Returns the kinds of payloads this object can write.
    fn payload_kinds(&self) -> &[&'static str];

    /// Writes the payload of the given kind.
    ///
    /// If the kind is not one returned by [payload_kinds](Self::payload_kinds), an [InvalidArgument](HarnessError::InvalidArgument) error is returned.
    fn write_payload(&self, kind: &str, writer: &mut dyn Write) -> Result<()>;
}

/// A problem instance paired with its ground truth solution.
///
/// Instances are values: they are never modified once built, and [`Translator`] objects produce new instances from existing ones.
/// Equality is structural and takes into account both the problem and its solution.
pub trait Instance: Payloads + Clone + Debug + Eq + 'static {}

pub(crate) fn unknown_payload_kind(kind: &str, known_kinds: &[&str]) -> anyhow::Error {
    HarnessError::InvalidArgument(format!(
        r#"unknown payload kind "{}" (expected one of {:?})"#,
        kind, known_kinds
    ))
    .into()
}

/// The mutable state shared by the translators during a generation process.
///
/// It holds the random source used by the translators and the registry of the arguments created so far.
/// Seeding the context makes the whole generation process reproducible.
pub struct GenerationContext {
    rng: StdRng,
    arguments: ArgumentRegistry,
}

impl GenerationContext {
    /// Builds a new context with a random source seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            arguments: ArgumentRegistry::default(),
        }
    }

    /// Builds a new context with a seeded random source.
    ///
    /// # Example
    ///
    /// ```
    /// # use crusticheck::generator::GenerationContext;
    /// # use rand::Rng;
    /// let mut c1 = GenerationContext::new_with_seed(42);
    /// let mut c2 = GenerationContext::new_with_seed(42);
    /// assert_eq!(c1.rng().gen::<u64>(), c2.rng().gen::<u64>());
    /// ```
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            arguments: ArgumentRegistry::default(),
        }
    }

    /// Returns the random source.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Returns the registry of the arguments.
    pub fn argument_registry(&mut self) -> &mut ArgumentRegistry {
        &mut self.arguments
    }

    /// Forgets all the arguments created so far.
    ///
    /// This must be called between independent runs sharing a context.
    pub fn reset_all(&mut self) {
        self.arguments.reset_all();
    }
}

impl Default for GenerationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A guarded mutation producing a new instance from an existing one.
///
/// Translators are identified by their name, which is the key used to assign them weights.
/// Translators of the same kind share the same name.
pub trait Translator<I>
where
    I: Instance,
{
    /// Returns the name of the mutation kind of this translator.
    fn name(&self) -> &str;

    /// Returns `true` iff this translator can be applied to the instance.
    fn can_apply(&self, instance: &I) -> bool;

    /// Applies the translator, returning the new instance.
    ///
    /// The caller must check [can_apply](Self::can_apply) before calling this function.
    /// Applying a translator while it is not applicable is a programmer error;
    /// implementations may return an [InvalidState](HarnessError::InvalidState) error or an arbitrary instance.
    fn apply(&self, instance: &I, context: &mut GenerationContext) -> Result<I>;
}

/// A shared reference to a translator.
pub type SharedTranslator<I> = Rc<dyn Translator<I>>;

/// A trait for objects providing a root instance and the translators used to expand it.
pub trait GeneratorFactory {
    /// The type of the generated instances.
    type Instance: Instance;

    /// Builds the root instance.
    fn init_instance(&self, context: &mut GenerationContext) -> Result<Self::Instance>;

    /// Returns the translators of this factory, each of them once.
    fn init_translators(&self) -> Vec<SharedTranslator<Self::Instance>>;

    /// Returns the translators to apply at each node, in order.
    ///
    /// A translator may appear multiple times in the list; each occurrence produces its own child.
    /// The default implementation returns the result of [init_translators](Self::init_translators).
    fn effective_translators(&self) -> Result<Vec<SharedTranslator<Self::Instance>>> {
        Ok(self.init_translators())
    }
}
