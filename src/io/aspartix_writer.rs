use crate::aa::AAFramework;
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the Aspartix format.
///
/// This object is used to write an [`AAFramework`] using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
///
/// # Example
///
/// ```
/// # use crusticheck::aa::{AAFramework, ArgumentRegistry};
/// # use crusticheck::io::AspartixWriter;
/// let mut registry = ArgumentRegistry::default();
/// let mut af = AAFramework::default();
/// af.new_argument(registry.intern("a0")).unwrap();
/// let mut buffer = Vec::new();
/// AspartixWriter::default().write_framework(&af, &mut buffer).unwrap();
/// assert_eq!("arg(a0).\n", String::from_utf8(buffer).unwrap());
/// ```
#[derive(Default)]
pub struct AspartixWriter {}

impl AspartixWriter {
    /// Writes a framework using the Aspartix format to the provided writer.
    pub fn write_framework(&self, framework: &AAFramework, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing an Aspartix framework";
        for arg in framework.arguments() {
            writeln!(writer, "arg({}).", arg).context(context)?;
        }
        for attack in framework.iter_attacks() {
            writeln!(writer, "att({},{}).", attack.attacker(), attack.attacked()).context(context)?;
        }
        writer.flush().context(context)
    }
}

/// A writer for the Trivial Graph Format.
///
/// The arguments are written one per line, followed by a line containing `#` and the attacks, one per line.
#[derive(Default)]
pub struct TgfWriter {}

impl TgfWriter {
    /// Writes a framework using the Trivial Graph Format to the provided writer.
    pub fn write_framework(&self, framework: &AAFramework, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing a TGF framework";
        for arg in framework.arguments() {
            writeln!(writer, "{}", arg).context(context)?;
        }
        writeln!(writer, "#").context(context)?;
        for attack in framework.iter_attacks() {
            writeln!(writer, "{} {}", attack.attacker(), attack.attacked()).context(context)?;
        }
        writer.flush().context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentRegistry;
    use std::io::BufWriter;

    fn framework() -> AAFramework {
        let mut registry = ArgumentRegistry::default();
        let mut framework = AAFramework::default();
        for label in ["a", "b", "c"] {
            framework.new_argument(registry.intern(label)).unwrap();
        }
        framework.new_attack_by_ids(0, 0).unwrap();
        framework.new_attack_by_ids(1, 2).unwrap();
        framework
    }

    #[test]
    fn test_write_af() {
        let mut buffer = BufWriter::new(Vec::new());
        let writer = AspartixWriter::default();
        writer.write_framework(&framework(), &mut buffer).unwrap();
        assert_eq!(
            "arg(a).\narg(b).\narg(c).\natt(a,a).\natt(b,c).\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        )
    }

    #[test]
    fn test_write_empty_af() {
        let mut buffer = BufWriter::new(Vec::new());
        let writer = AspartixWriter::default();
        writer
            .write_framework(&AAFramework::default(), &mut buffer)
            .unwrap();
        assert!(buffer.into_inner().unwrap().is_empty())
    }

    #[test]
    fn test_write_tgf() {
        let mut buffer = BufWriter::new(Vec::new());
        let writer = TgfWriter::default();
        writer.write_framework(&framework(), &mut buffer).unwrap();
        assert_eq!(
            "a\nb\nc\n#\na a\nb c\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        )
    }
}
