use super::ExtensionInstance;
use crate::{
    generator::{GenerationContext, GeneratorFactory, SharedTranslator, Translator},
    utils::HarnessError,
};
use anyhow::Result;
use rand::Rng;
use std::rc::Rc;

/// The name of the [`NewArgumentTranslator`].
pub const NEW_ARGUMENT_TRANSLATOR: &str = "new_argument";

/// The name of the [`NewAttackTranslator`].
pub const NEW_ATTACK_TRANSLATOR: &str = "new_attack";

/// A translator adding an unattacked and non-attacking argument.
///
/// The new argument is labelled `a<n>`, where `n` is the number of arguments in the framework before the addition.
/// It is interned through the registry of the generation context.
/// This translator is always applicable.
#[derive(Default)]
pub struct NewArgumentTranslator;

impl Translator<ExtensionInstance> for NewArgumentTranslator {
    fn name(&self) -> &str {
        NEW_ARGUMENT_TRANSLATOR
    }

    fn can_apply(&self, _instance: &ExtensionInstance) -> bool {
        true
    }

    fn apply(
        &self,
        instance: &ExtensionInstance,
        context: &mut GenerationContext,
    ) -> Result<ExtensionInstance> {
        let mut af = instance.af().clone();
        let label = format!("a{}", af.n_arguments());
        let argument = context.argument_registry().intern(&label);
        af.new_argument(argument)?;
        Ok(ExtensionInstance::new(af))
    }
}

/// A translator adding a random attack that is not in the framework yet.
///
/// The attacker is chosen uniformly among the arguments that do not attack all the arguments yet,
/// and the attacked argument is chosen uniformly among the ones it does not attack.
/// Self-attacks may be forbidden.
///
/// This translator is applicable as long as the attack relation is not complete.
pub struct NewAttackTranslator {
    allow_self_attacks: bool,
}

impl NewAttackTranslator {
    /// Builds a new translator, allowing self-attacks or not.
    pub fn new(allow_self_attacks: bool) -> Self {
        Self { allow_self_attacks }
    }

    fn missing_targets(&self, instance: &ExtensionInstance, attacker: usize) -> Vec<usize> {
        let af = instance.af();
        (0..af.n_arguments())
            .filter(|t| {
                (self.allow_self_attacks || *t != attacker) && !af.has_attack(attacker, *t)
            })
            .collect()
    }
}

impl Default for NewAttackTranslator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Translator<ExtensionInstance> for NewAttackTranslator {
    fn name(&self) -> &str {
        NEW_ATTACK_TRANSLATOR
    }

    fn can_apply(&self, instance: &ExtensionInstance) -> bool {
        let n = instance.af().n_arguments();
        let max_attacks = if self.allow_self_attacks {
            n * n
        } else {
            n * n.saturating_sub(1)
        };
        let n_self_attacks = (0..n).filter(|i| instance.af().has_attack(*i, *i)).count();
        let n_relevant_attacks = if self.allow_self_attacks {
            instance.af().n_attacks()
        } else {
            instance.af().n_attacks() - n_self_attacks
        };
        n_relevant_attacks < max_attacks
    }

    fn apply(
        &self,
        instance: &ExtensionInstance,
        context: &mut GenerationContext,
    ) -> Result<ExtensionInstance> {
        let candidates = (0..instance.af().n_arguments())
            .map(|a| (a, self.missing_targets(instance, a)))
            .filter(|(_, targets)| !targets.is_empty())
            .collect::<Vec<_>>();
        if candidates.is_empty() {
            return Err(HarnessError::InvalidState(
                "cannot add an attack to a framework with a complete attack relation".to_string(),
            )
            .into());
        }
        let rng = context.rng();
        let (attacker, targets) = &candidates[rng.gen_range(0..candidates.len())];
        let attacked = targets[rng.gen_range(0..targets.len())];
        let mut af = instance.af().clone();
        af.new_attack_by_ids(*attacker, attacked)?;
        Ok(ExtensionInstance::new(af))
    }
}

/// The factory of argumentation instances.
///
/// The root instance is the empty framework, which only extension is the empty set.
/// The translators are a [`NewArgumentTranslator`] and a [`NewAttackTranslator`].
pub struct ArgumentationGeneratorFactory {
    allow_self_attacks: bool,
}

impl ArgumentationGeneratorFactory {
    /// Builds a new factory, allowing self-attacks or not.
    pub fn new(allow_self_attacks: bool) -> Self {
        Self { allow_self_attacks }
    }
}

impl Default for ArgumentationGeneratorFactory {
    fn default() -> Self {
        Self::new(true)
    }
}

impl GeneratorFactory for ArgumentationGeneratorFactory {
    type Instance = ExtensionInstance;

    fn init_instance(&self, _context: &mut GenerationContext) -> Result<ExtensionInstance> {
        Ok(ExtensionInstance::default())
    }

    fn init_translators(&self) -> Vec<SharedTranslator<ExtensionInstance>> {
        vec![
            Rc::new(NewArgumentTranslator),
            Rc::new(NewAttackTranslator::new(self.allow_self_attacks)),
        ]
    }
}
