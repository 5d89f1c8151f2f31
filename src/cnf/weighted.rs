use super::{CnfGeneratorFactory, CnfInstance, Literal, Model};
use crate::{
    generator::{
        specs::unknown_payload_kind, AdaptedGeneratorFactory, AdaptedInstance, GenerationContext,
        Instance, Payloads, SharedTranslator, Translator,
    },
    io::DimacsWriter,
    utils::HarnessError,
};
use anyhow::Result;
use rand::Rng;
use std::{collections::BTreeMap, io::Write, rc::Rc};

/// The weight of the literals that were not explicitly given one.
///
/// It is neither `0` nor `1`, so that a solver ignoring default weights is detected.
pub const DEFAULT_LITERAL_WEIGHT: u64 = 2;

/// The name of the [`SetLiteralWeightTranslator`].
pub const SET_LITERAL_WEIGHT_TRANSLATOR: &str = "set_literal_weight";

const PAYLOAD_KINDS: [&str; 3] = ["cnf", "weights", "models"];

/// A CNF instance in which each literal has a positive weight.
///
/// The weight of a model is the product of the weights of its literals.
/// Literals that were not explicitly given a weight have weight [`DEFAULT_LITERAL_WEIGHT`].
///
/// The available payloads are `cnf`, `weights` (one `<literal> <weight>` line for both polarities of each variable) and `models`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightedCnfInstance {
    cnf: CnfInstance,
    weights: BTreeMap<Literal, u64>,
}

impl WeightedCnfInstance {
    /// Builds a new instance with the given explicit weights.
    ///
    /// An error is returned if a weight is null or refers to an unknown variable.
    pub fn new(cnf: CnfInstance, weights: BTreeMap<Literal, u64>) -> Result<Self> {
        if let Some((l, w)) = weights
            .iter()
            .find(|(l, w)| **w == 0 || usize::from(l.var()) > cnf.n_vars())
        {
            return Err(HarnessError::InvalidArgument(format!(
                "cannot set weight {} to literal {} (number of variables is {})",
                w,
                l,
                cnf.n_vars()
            ))
            .into());
        }
        Ok(Self { cnf, weights })
    }

    /// Returns the underlying CNF instance.
    pub fn cnf(&self) -> &CnfInstance {
        &self.cnf
    }

    /// Returns the weight of a literal.
    pub fn literal_weight(&self, literal: Literal) -> u64 {
        self.weights
            .get(&literal)
            .copied()
            .unwrap_or(DEFAULT_LITERAL_WEIGHT)
    }

    /// Returns `true` iff the literal was explicitly given a weight.
    pub fn has_explicit_weight(&self, literal: Literal) -> bool {
        self.weights.contains_key(&literal)
    }

    /// Returns the weight of a model.
    pub fn model_weight(&self, model: &Model) -> u128 {
        model
            .iter()
            .map(|l| self.literal_weight(*l) as u128)
            .product()
    }

    /// Returns the sum of the weights of the models.
    pub fn weighted_count(&self) -> u128 {
        self.cnf
            .models()
            .iter()
            .map(|m| self.model_weight(m))
            .sum()
    }

    pub(crate) fn write_weights(&self, writer: &mut dyn Write) -> Result<()> {
        DimacsWriter::default().write_weights(
            self.cnf
                .iter_literals()
                .map(|l| (l, self.literal_weight(l))),
            writer,
        )
    }

    fn with_weight(&self, literal: Literal, weight: u64) -> Self {
        let mut weights = self.weights.clone();
        weights.insert(literal, weight);
        Self {
            cnf: self.cnf.clone(),
            weights,
        }
    }
}

impl Payloads for WeightedCnfInstance {
    fn payload_kinds(&self) -> &[&'static str] {
        &PAYLOAD_KINDS
    }

    fn write_payload(&self, kind: &str, writer: &mut dyn Write) -> Result<()> {
        match kind {
            "cnf" | "models" => self.cnf.write_payload(kind, writer),
            "weights" => self.write_weights(writer),
            _ => Err(unknown_payload_kind(kind, &PAYLOAD_KINDS)),
        }
    }
}

impl Instance for WeightedCnfInstance {}

impl AdaptedInstance for WeightedCnfInstance {
    type Base = CnfInstance;

    fn base(&self) -> &CnfInstance {
        &self.cnf
    }

    fn from_base(base: CnfInstance) -> Result<Self> {
        Ok(Self {
            cnf: base,
            weights: BTreeMap::new(),
        })
    }

    fn rebuild(&self, base: CnfInstance) -> Result<Self> {
        Self::new(base, self.weights.clone())
    }
}

/// A translator giving a random weight to a literal which has the default one.
///
/// The literal is chosen uniformly among the ones without an explicit weight, and its weight is chosen uniformly in `1..=9`.
/// This translator is applicable as long as such a literal exists.
#[derive(Default)]
pub struct SetLiteralWeightTranslator;

impl SetLiteralWeightTranslator {
    fn default_weighted_literals(instance: &WeightedCnfInstance) -> Vec<Literal> {
        instance
            .cnf
            .iter_literals()
            .filter(|l| !instance.has_explicit_weight(*l))
            .collect()
    }
}

impl Translator<WeightedCnfInstance> for SetLiteralWeightTranslator {
    fn name(&self) -> &str {
        SET_LITERAL_WEIGHT_TRANSLATOR
    }

    fn can_apply(&self, instance: &WeightedCnfInstance) -> bool {
        instance
            .cnf
            .iter_literals()
            .any(|l| !instance.has_explicit_weight(l))
    }

    fn apply(
        &self,
        instance: &WeightedCnfInstance,
        context: &mut GenerationContext,
    ) -> Result<WeightedCnfInstance> {
        let candidates = Self::default_weighted_literals(instance);
        if candidates.is_empty() {
            return Err(HarnessError::InvalidState(
                "all the literals already have an explicit weight".to_string(),
            )
            .into());
        }
        let rng = context.rng();
        let literal = candidates[rng.gen_range(0..candidates.len())];
        let weight = rng.gen_range(1..=9);
        Ok(instance.with_weight(literal, weight))
    }
}

/// The factory of weighted CNF instances.
pub type WeightedCnfGeneratorFactory = AdaptedGeneratorFactory<CnfGeneratorFactory, WeightedCnfInstance>;

/// Builds the factory of weighted CNF instances.
///
/// Its translators are the ones of the [`CnfGeneratorFactory`] followed by a [`SetLiteralWeightTranslator`].
pub fn weighted_cnf_generator_factory() -> WeightedCnfGeneratorFactory {
    AdaptedGeneratorFactory::new_with_additional_translators(
        CnfGeneratorFactory,
        vec![Rc::new(SetLiteralWeightTranslator) as SharedTranslator<WeightedCnfInstance>],
    )
}
