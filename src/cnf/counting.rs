use super::{
    weighted_cnf_generator_factory, CnfGeneratorFactory, CnfInstance, WeightedCnfGeneratorFactory,
    WeightedCnfInstance,
};
use crate::{
    generator::{
        specs::unknown_payload_kind, AdaptedGeneratorFactory, AdaptedInstance, Instance, Payloads,
    },
    io::DimacsWriter,
};
use anyhow::Result;
use std::io::Write;

const MC_PAYLOAD_KINDS: [&str; 2] = ["cnf", "count"];

const WMC_PAYLOAD_KINDS: [&str; 3] = ["cnf", "weights", "count"];

/// A model counting instance: a CNF formula paired with its number of models.
///
/// The available payloads are `cnf` and `count`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelCountingInstance {
    cnf: CnfInstance,
}

impl ModelCountingInstance {
    /// Returns the underlying CNF instance.
    pub fn cnf(&self) -> &CnfInstance {
        &self.cnf
    }

    /// Returns the number of models of the formula.
    pub fn count(&self) -> usize {
        self.cnf.models().len()
    }
}

impl Payloads for ModelCountingInstance {
    fn payload_kinds(&self) -> &[&'static str] {
        &MC_PAYLOAD_KINDS
    }

    fn write_payload(&self, kind: &str, writer: &mut dyn Write) -> Result<()> {
        match kind {
            "cnf" => self.cnf.write_payload(kind, writer),
            "count" => DimacsWriter::default().write_count(&self.count(), writer),
            _ => Err(unknown_payload_kind(kind, &MC_PAYLOAD_KINDS)),
        }
    }
}

impl Instance for ModelCountingInstance {}

impl AdaptedInstance for ModelCountingInstance {
    type Base = CnfInstance;

    fn base(&self) -> &CnfInstance {
        &self.cnf
    }

    fn from_base(base: CnfInstance) -> Result<Self> {
        Ok(Self { cnf: base })
    }
}

/// A weighted model counting instance: a weighted CNF formula paired with the sum of the weights of its models.
///
/// The available payloads are `cnf`, `weights` and `count`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightedModelCountingInstance {
    weighted_cnf: WeightedCnfInstance,
}

impl WeightedModelCountingInstance {
    /// Returns the underlying weighted CNF instance.
    pub fn weighted_cnf(&self) -> &WeightedCnfInstance {
        &self.weighted_cnf
    }

    /// Returns the sum of the weights of the models.
    pub fn count(&self) -> u128 {
        self.weighted_cnf.weighted_count()
    }
}

impl Payloads for WeightedModelCountingInstance {
    fn payload_kinds(&self) -> &[&'static str] {
        &WMC_PAYLOAD_KINDS
    }

    fn write_payload(&self, kind: &str, writer: &mut dyn Write) -> Result<()> {
        match kind {
            "cnf" | "weights" => self.weighted_cnf.write_payload(kind, writer),
            "count" => DimacsWriter::default().write_count(&self.count(), writer),
            _ => Err(unknown_payload_kind(kind, &WMC_PAYLOAD_KINDS)),
        }
    }
}

impl Instance for WeightedModelCountingInstance {}

impl AdaptedInstance for WeightedModelCountingInstance {
    type Base = WeightedCnfInstance;

    fn base(&self) -> &WeightedCnfInstance {
        &self.weighted_cnf
    }

    fn from_base(base: WeightedCnfInstance) -> Result<Self> {
        Ok(Self { weighted_cnf: base })
    }
}

/// The factory of model counting instances.
pub type ModelCountingGeneratorFactory =
    AdaptedGeneratorFactory<CnfGeneratorFactory, ModelCountingInstance>;

/// Builds the factory of model counting instances, which translators are the ones of the [`CnfGeneratorFactory`].
pub fn model_counting_generator_factory() -> ModelCountingGeneratorFactory {
    AdaptedGeneratorFactory::new(CnfGeneratorFactory)
}

/// The factory of weighted model counting instances.
pub type WeightedModelCountingGeneratorFactory =
    AdaptedGeneratorFactory<WeightedCnfGeneratorFactory, WeightedModelCountingInstance>;

/// Builds the factory of weighted model counting instances, which translators are the ones of the weighted CNF factory.
pub fn weighted_model_counting_generator_factory() -> WeightedModelCountingGeneratorFactory {
    AdaptedGeneratorFactory::new(weighted_cnf_generator_factory())
}
