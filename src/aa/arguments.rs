use anyhow::{anyhow, Result};
use std::{collections::HashMap, fmt::Display, rc::Rc};

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in the [`ArgumentRegistry`] that created it.
/// Arguments are cheap to clone, and are ordered by their identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Argument {
    id: usize,
    label: Rc<str>,
}

impl Argument {
    /// Returns the label of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use crusticheck::aa::ArgumentRegistry;
    /// let mut registry = ArgumentRegistry::default();
    /// let a = registry.intern("a0");
    /// assert_eq!("a0", a.label());
    /// ```
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the id of the argument.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Interns arguments given their labels.
///
/// The first request for a label creates the argument; subsequent requests return the same argument.
/// Arguments are never removed individually, but the whole registry can be reset between independent runs.
#[derive(Default)]
pub struct ArgumentRegistry {
    arguments: Vec<Argument>,
    label_to_id: HashMap<Rc<str>, usize>,
}

impl ArgumentRegistry {
    /// Returns the argument associated with a label, creating it if necessary.
    ///
    /// The id of a new argument is the number of arguments interned before it.
    ///
    /// # Example
    ///
    /// ```
    /// # use crusticheck::aa::ArgumentRegistry;
    /// let mut registry = ArgumentRegistry::default();
    /// let a = registry.intern("a");
    /// let b = registry.intern("b");
    /// assert_eq!(a, registry.intern("a"));
    /// assert_ne!(a, b);
    /// assert_eq!(2, registry.len());
    /// ```
    pub fn intern(&mut self, label: &str) -> Argument {
        if let Some(id) = self.label_to_id.get(label) {
            return self.arguments[*id].clone();
        }
        let argument = Argument {
            id: self.arguments.len(),
            label: Rc::from(label),
        };
        self.label_to_id
            .insert(Rc::clone(&argument.label), argument.id);
        self.arguments.push(argument.clone());
        argument
    }

    /// Returns the argument associated to an argument label.
    ///
    /// If the label was never interned, an error is returned.
    pub fn get_argument(&self, label: &str) -> Result<&Argument> {
        self.label_to_id
            .get(label)
            .map(|i| &self.arguments[*i])
            .ok_or_else(|| anyhow!("no such argument: {}", label))
    }

    /// Returns the number of arguments interned so far.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff no argument has been interned.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Forgets all the arguments.
    ///
    /// Arguments created after this call may reuse the ids and labels of forgotten ones.
    pub fn reset_all(&mut self) {
        self.arguments.clear();
        self.label_to_id.clear();
    }

    /// Returns an iterator to the arguments, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Argument> + '_ {
        self.arguments.iter()
    }
}
