use super::{GenerationContext, GeneratorFactory, Instance, SharedTranslator, Translator};
use crate::utils::HarnessError;
use anyhow::Result;
use std::{marker::PhantomData, rc::Rc};

/// A trait for instances specializing another kind of instance.
///
/// Such instances embed a base instance and add information to it (weights, a derived count, ...).
/// They allow a generator to be derived from the generator of the base instances:
/// the base translators are applied to the embedded instance, and the specialized instance is rebuilt from the result.
pub trait AdaptedInstance: Instance {
    /// The type of the embedded instance.
    type Base: Instance;

    /// Returns the embedded instance.
    fn base(&self) -> &Self::Base;

    /// Builds a specialized instance from a base instance.
    ///
    /// The default implementation returns an [InvalidConfiguration](HarnessError::InvalidConfiguration) error,
    /// meaning this specialized type cannot be built from scratch.
    fn from_base(_base: Self::Base) -> Result<Self> {
        Err(HarnessError::InvalidConfiguration(format!(
            "{} cannot be built from a base instance",
            std::any::type_name::<Self>()
        ))
        .into())
    }

    /// Builds a specialized instance from this one and a new base instance derived from its own.
    ///
    /// The default implementation ignores `self` and calls [from_base](Self::from_base).
    fn rebuild(&self, base: Self::Base) -> Result<Self> {
        Self::from_base(base)
    }
}

/// A translator applying a base translator to the instance embedded in an [`AdaptedInstance`].
pub struct AdaptingTranslator<S>
where
    S: AdaptedInstance,
{
    inner: SharedTranslator<S::Base>,
}

impl<S> AdaptingTranslator<S>
where
    S: AdaptedInstance,
{
    /// Wraps a base translator.
    pub fn new(inner: SharedTranslator<S::Base>) -> Self {
        Self { inner }
    }
}

impl<S> Translator<S> for AdaptingTranslator<S>
where
    S: AdaptedInstance,
{
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn can_apply(&self, instance: &S) -> bool {
        self.inner.can_apply(instance.base())
    }

    fn apply(&self, instance: &S, context: &mut GenerationContext) -> Result<S> {
        let new_base = self.inner.apply(instance.base(), context)?;
        instance.rebuild(new_base)
    }
}

/// A generator factory derived from another one by adapting its instances.
///
/// The root instance is built from the root of the base factory, and each translator of the base factory is wrapped into an [`AdaptingTranslator`].
/// Additional translators dedicated to the specialized instances can be provided.
pub struct AdaptedGeneratorFactory<B, S>
where
    B: GeneratorFactory,
    S: AdaptedInstance<Base = B::Instance>,
{
    base: B,
    additional_translators: Vec<SharedTranslator<S>>,
    _phantom: PhantomData<S>,
}

impl<B, S> AdaptedGeneratorFactory<B, S>
where
    B: GeneratorFactory,
    S: AdaptedInstance<Base = B::Instance>,
{
    /// Builds a new adapted factory.
    pub fn new(base: B) -> Self {
        Self::new_with_additional_translators(base, vec![])
    }

    /// Builds a new adapted factory with translators dedicated to the specialized instances.
    ///
    /// The additional translators are placed after the adapted ones.
    pub fn new_with_additional_translators(
        base: B,
        additional_translators: Vec<SharedTranslator<S>>,
    ) -> Self {
        Self {
            base,
            additional_translators,
            _phantom: PhantomData,
        }
    }
}

impl<B, S> GeneratorFactory for AdaptedGeneratorFactory<B, S>
where
    B: GeneratorFactory,
    S: AdaptedInstance<Base = B::Instance>,
{
    type Instance = S;

    fn init_instance(&self, context: &mut GenerationContext) -> Result<S> {
        S::from_base(self.base.init_instance(context)?)
    }

    fn init_translators(&self) -> Vec<SharedTranslator<S>> {
        self.base
            .init_translators()
            .into_iter()
            .map(|t| Rc::new(AdaptingTranslator::<S>::new(t)) as SharedTranslator<S>)
            .chain(self.additional_translators.iter().cloned())
            .collect()
    }
}
