use super::{admissible_sets, AAFramework, ExtensionSet};
use crate::{
    generator::{specs::unknown_payload_kind, Instance, Payloads},
    io::{AnswerWriter, AspartixWriter, Iccma19Writer, TgfWriter},
};
use anyhow::Result;
use std::{collections::BTreeSet, io::Write};

const PAYLOAD_KINDS: [&str; 3] = ["apx", "tgf", "extensions"];

/// An argumentation framework paired with its extensions.
///
/// The extensions are the admissible sets of the framework.
/// They are computed from scratch each time an instance is built, so they are always consistent with the framework.
///
/// The available payloads are `apx` (Aspartix format), `tgf` (Trivial Graph Format) and `extensions` (the extensions, one per line).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionInstance {
    af: AAFramework,
    extensions: ExtensionSet,
}

impl ExtensionInstance {
    /// Builds an instance from a framework, computing its extensions.
    ///
    /// # Example
    ///
    /// ```
    /// # use crusticheck::aa::{AAFramework, ExtensionInstance};
    /// let instance = ExtensionInstance::new(AAFramework::default());
    /// assert_eq!(1, instance.extensions().len());
    /// ```
    pub fn new(af: AAFramework) -> Self {
        let extensions = admissible_sets(&af);
        Self { af, extensions }
    }

    /// Returns the argumentation framework.
    pub fn af(&self) -> &AAFramework {
        &self.af
    }

    /// Returns the extensions of the framework.
    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    /// Returns the extensions of the framework as sets of argument labels.
    pub fn extension_labels(&self) -> BTreeSet<BTreeSet<String>> {
        self.extensions
            .iter()
            .map(|e| e.iter().map(|a| a.label().to_string()).collect())
            .collect()
    }
}

impl Default for ExtensionInstance {
    fn default() -> Self {
        Self::new(AAFramework::default())
    }
}

impl Payloads for ExtensionInstance {
    fn payload_kinds(&self) -> &[&'static str] {
        &PAYLOAD_KINDS
    }

    fn write_payload(&self, kind: &str, writer: &mut dyn Write) -> Result<()> {
        match kind {
            "apx" => AspartixWriter::default().write_framework(&self.af, writer),
            "tgf" => TgfWriter::default().write_framework(&self.af, writer),
            "extensions" => {
                Iccma19Writer::default().write_extension_set(writer, &self.extension_labels())
            }
            _ => Err(unknown_payload_kind(kind, &PAYLOAD_KINDS)),
        }
    }
}

impl Instance for ExtensionInstance {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{aa::ArgumentRegistry, utils::HarnessError};

    fn instance() -> ExtensionInstance {
        let mut registry = ArgumentRegistry::default();
        let mut af = AAFramework::default();
        af.new_argument(registry.intern("a0")).unwrap();
        af.new_argument(registry.intern("a1")).unwrap();
        af.new_attack_by_ids(0, 1).unwrap();
        ExtensionInstance::new(af)
    }

    fn payload(instance: &ExtensionInstance, kind: &str) -> String {
        let mut buffer = Vec::new();
        instance.write_payload(kind, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_apx_payload() {
        assert_eq!("arg(a0).\narg(a1).\natt(a0,a1).\n", payload(&instance(), "apx"));
    }

    #[test]
    fn test_tgf_payload() {
        assert_eq!("a0\na1\n#\na0 a1\n", payload(&instance(), "tgf"));
    }

    #[test]
    fn test_extensions_payload() {
        assert_eq!("[\n  []\n  [a0]\n]\n", payload(&instance(), "extensions"));
    }

    #[test]
    fn test_unknown_payload() {
        let mut buffer = Vec::new();
        let err = instance().write_payload("cnf", &mut buffer).unwrap_err();
        assert!(HarnessError::is_invalid_argument(&err));
    }

    #[test]
    fn test_root_instance() {
        let instance = ExtensionInstance::default();
        assert_eq!(0, instance.af().n_arguments());
        assert_eq!(1, instance.extensions().len());
        assert!(instance.extensions().iter().all(|e| e.is_empty()));
    }
}
