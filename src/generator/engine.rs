use super::{GenerationContext, GeneratorFactory, Payloads, SharedTranslator};
use crate::utils::HarnessError;
use anyhow::{Context, Result};
use log::debug;

/// Generates the tree of instances rooted at the factory initial instance and returns all its nodes.
///
/// The root has depth 1; nodes at depth `max_depth` are not expanded.
/// Each node is expanded by applying, in order, every occurrence of the factory effective translators which is applicable to it.
/// The nodes are returned in depth-first order, parents before their children.
///
/// If `max_depth` is zero, an [InvalidArgument](HarnessError::InvalidArgument) error is returned.
///
/// # Example
///
/// ```
/// # use crusticheck::aa::ArgumentationGeneratorFactory;
/// # use crusticheck::generator::{self, GenerationContext};
/// let factory = ArgumentationGeneratorFactory::default();
/// let mut context = GenerationContext::new_with_seed(0);
/// let instances = generator::generate(&factory, 1, &mut context).unwrap();
/// assert_eq!(1, instances.len());
/// ```
pub fn generate<F>(
    factory: &F,
    max_depth: usize,
    context: &mut GenerationContext,
) -> Result<Vec<F::Instance>>
where
    F: GeneratorFactory + ?Sized,
{
    let mut instances = Vec::new();
    generate_with(factory, max_depth, context, |i| {
        instances.push(i.clone());
        Ok(())
    })?;
    Ok(instances)
}

/// Generates the tree of instances rooted at the factory initial instance and calls the callback on each node.
///
/// The callback is called exactly once per node, in the same order nodes would be returned by [`generate`].
/// If the callback returns an error, the generation stops and the error is returned.
pub fn generate_with<F, C>(
    factory: &F,
    max_depth: usize,
    context: &mut GenerationContext,
    mut callback: C,
) -> Result<()>
where
    F: GeneratorFactory + ?Sized,
    C: FnMut(&F::Instance) -> Result<()>,
{
    if max_depth == 0 {
        return Err(HarnessError::InvalidArgument(
            "the maximal depth must be at least 1".to_string(),
        )
        .into());
    }
    let translators = factory.effective_translators()?;
    debug!(
        "generating instances up to depth {} with {} effective translator(s)",
        max_depth,
        translators.len()
    );
    let root = factory
        .init_instance(context)
        .context("while building the root instance")?;
    expand(&translators, root, 1, max_depth, context, &mut callback)
}

fn expand<I, C>(
    translators: &[SharedTranslator<I>],
    node: I,
    depth: usize,
    max_depth: usize,
    context: &mut GenerationContext,
    callback: &mut C,
) -> Result<()>
where
    I: super::Instance,
    C: FnMut(&I) -> Result<()>,
{
    callback(&node)?;
    if depth == max_depth {
        return Ok(());
    }
    for t in translators.iter() {
        if !t.can_apply(&node) {
            continue;
        }
        let child = t
            .apply(&node, context)
            .with_context(|| format!("while applying translator {}", t.name()))?;
        expand(translators, child, depth + 1, max_depth, context, callback)?;
    }
    Ok(())
}

/// A generator which instances are only known through their payloads.
///
/// This trait is implemented by all [`GeneratorFactory`] objects.
/// It is used to handle generators selected by their name, regardless of the type of instances they produce.
pub trait PayloadGenerator {
    /// Generates the instances and calls the callback on each of them.
    ///
    /// See [`generate_with`].
    fn generate_payloads(
        &self,
        max_depth: usize,
        context: &mut GenerationContext,
        callback: &mut dyn FnMut(&dyn Payloads) -> Result<()>,
    ) -> Result<()>;
}

impl<F> PayloadGenerator for F
where
    F: GeneratorFactory,
{
    fn generate_payloads(
        &self,
        max_depth: usize,
        context: &mut GenerationContext,
        callback: &mut dyn FnMut(&dyn Payloads) -> Result<()>,
    ) -> Result<()> {
        generate_with(self, max_depth, context, |i| callback(i))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::generator::{Instance, Translator};
    use std::{io::Write, rc::Rc};

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) struct PathInstance(pub(crate) Vec<usize>);

    impl Payloads for PathInstance {
        fn payload_kinds(&self) -> &[&'static str] {
            &["path"]
        }

        fn write_payload(&self, kind: &str, writer: &mut dyn Write) -> Result<()> {
            if kind != "path" {
                return Err(crate::generator::specs::unknown_payload_kind(
                    kind,
                    self.payload_kinds(),
                ));
            }
            writeln!(writer, "{:?}", self.0)?;
            Ok(())
        }
    }

    impl Instance for PathInstance {}

    pub(crate) struct PushTranslator {
        pub(crate) name: String,
        pub(crate) value: usize,
        pub(crate) max_len: Option<usize>,
    }

    impl Translator<PathInstance> for PushTranslator {
        fn name(&self) -> &str {
            &self.name
        }

        fn can_apply(&self, instance: &PathInstance) -> bool {
            self.max_len.map(|m| instance.0.len() < m).unwrap_or(true)
        }

        fn apply(
            &self,
            instance: &PathInstance,
            _context: &mut GenerationContext,
        ) -> Result<PathInstance> {
            let mut path = instance.0.clone();
            path.push(self.value);
            Ok(PathInstance(path))
        }
    }

    pub(crate) struct PathGeneratorFactory {
        pub(crate) n_translators: usize,
        pub(crate) max_len: Option<usize>,
    }

    impl GeneratorFactory for PathGeneratorFactory {
        type Instance = PathInstance;

        fn init_instance(&self, _context: &mut GenerationContext) -> Result<PathInstance> {
            Ok(PathInstance(vec![]))
        }

        fn init_translators(&self) -> Vec<SharedTranslator<PathInstance>> {
            (0..self.n_translators)
                .map(|i| {
                    Rc::new(PushTranslator {
                        name: format!("push_{}", i),
                        value: i,
                        max_len: self.max_len,
                    }) as SharedTranslator<PathInstance>
                })
                .collect()
        }
    }

    fn expected_tree_size(k: usize, max_depth: usize) -> usize {
        (0..max_depth).map(|i| k.pow(i as u32)).sum()
    }

    #[test]
    fn test_tree_sizes() {
        for k in 0..4 {
            for max_depth in 1..6 {
                let factory = PathGeneratorFactory {
                    n_translators: k,
                    max_len: None,
                };
                let mut context = GenerationContext::new_with_seed(0);
                let instances = generate(&factory, max_depth, &mut context).unwrap();
                assert_eq!(expected_tree_size(k, max_depth), instances.len());
            }
        }
    }

    #[test]
    fn test_two_translators_depth_3() {
        let factory = PathGeneratorFactory {
            n_translators: 2,
            max_len: None,
        };
        let mut context = GenerationContext::new_with_seed(0);
        let instances = generate(&factory, 3, &mut context).unwrap();
        assert_eq!(7, instances.len());
        let paths = instances.into_iter().map(|i| i.0).collect::<Vec<_>>();
        assert_eq!(
            vec![
                vec![],
                vec![0],
                vec![0, 0],
                vec![0, 1],
                vec![1],
                vec![1, 0],
                vec![1, 1]
            ],
            paths
        );
    }

    #[test]
    fn test_max_depth_zero() {
        let factory = PathGeneratorFactory {
            n_translators: 2,
            max_len: None,
        };
        let mut context = GenerationContext::new_with_seed(0);
        let err = generate(&factory, 0, &mut context).unwrap_err();
        assert!(HarnessError::is_invalid_argument(&err));
    }

    #[test]
    fn test_inapplicable_translators_make_leaves() {
        let factory = PathGeneratorFactory {
            n_translators: 2,
            max_len: Some(1),
        };
        let mut context = GenerationContext::new_with_seed(0);
        let instances = generate(&factory, 5, &mut context).unwrap();
        assert_eq!(3, instances.len());
    }

    #[test]
    fn test_callback_called_once_per_node() {
        let factory = PathGeneratorFactory {
            n_translators: 3,
            max_len: None,
        };
        let mut context = GenerationContext::new_with_seed(0);
        let mut visited = Vec::new();
        generate_with(&factory, 3, &mut context, |i| {
            visited.push(i.clone());
            Ok(())
        })
        .unwrap();
        let mut context = GenerationContext::new_with_seed(0);
        assert_eq!(generate(&factory, 3, &mut context).unwrap(), visited);
    }

    #[test]
    fn test_callback_error_stops_generation() {
        let factory = PathGeneratorFactory {
            n_translators: 2,
            max_len: None,
        };
        let mut context = GenerationContext::new_with_seed(0);
        let mut n_calls = 0;
        let result = generate_with(&factory, 3, &mut context, |_| {
            n_calls += 1;
            if n_calls == 2 {
                Err(anyhow::anyhow!("stop"))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert_eq!(2, n_calls);
    }

    #[test]
    fn test_payload_generator() {
        let factory = PathGeneratorFactory {
            n_translators: 2,
            max_len: None,
        };
        let mut context = GenerationContext::new_with_seed(0);
        let mut n_nodes = 0;
        factory
            .generate_payloads(2, &mut context, &mut |p| {
                assert_eq!(&["path"], p.payload_kinds());
                n_nodes += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(3, n_nodes);
    }
}
