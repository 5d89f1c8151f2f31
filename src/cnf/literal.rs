use std::{
    cmp::Ordering,
    collections::BTreeSet,
    fmt::Display,
    num::{NonZeroIsize, NonZeroUsize},
};

/// A propositional variable.
///
/// A variable is represented by a non-null positive integer.
/// It can be obtained through the [From] trait from an integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(NonZeroUsize);

macro_rules! impl_var_from {
    ($t: ty) => {
        impl From<$t> for Variable {
            fn from(v: $t) -> Self {
                Self(NonZeroUsize::try_from(v as usize).unwrap())
            }
        }
    };
}
impl_var_from!(usize);
impl_var_from!(u64);
impl_var_from!(u32);

impl From<Variable> for usize {
    fn from(v: Variable) -> Self {
        v.0.into()
    }
}

impl Variable {
    /// Returns the literal of this variable with the given polarity.
    pub fn literal(self, positive: bool) -> Literal {
        let n = usize::from(self) as isize;
        Literal::from(if positive { n } else { -n })
    }
}

/// A literal, that is a variable or its negation.
///
/// A literal is represented by a non-null integer.
/// It can be obtained through the [From] trait from a signed integer type.
///
/// Literals are ordered by variable first, the negative literal preceding the positive one.
/// This way, the literals of a model stored in an ordered set are iterated in variable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal(NonZeroIsize);

impl Literal {
    /// Returns the opposite literal.
    pub fn negate(self) -> Self {
        Self::from(-self.0.get())
    }

    /// Returns the variable of this literal.
    pub fn var(&self) -> Variable {
        Variable(self.0.unsigned_abs())
    }

    /// Returns `true` iff this literal is the positive one of its variable.
    pub fn is_positive(&self) -> bool {
        self.0.get() > 0
    }

    /// Builds a literal from an integer, returning `None` if the integer is zero.
    pub fn try_new(value: isize) -> Option<Self> {
        NonZeroIsize::new(value).map(Self)
    }
}

macro_rules! impl_lit_from {
    ($t: ty) => {
        impl From<$t> for Literal {
            fn from(l: $t) -> Self {
                Self(NonZeroIsize::try_from(l as isize).unwrap())
            }
        }
    };
}
impl_lit_from!(isize);
impl_lit_from!(i64);
impl_lit_from!(i32);

impl From<Literal> for isize {
    fn from(l: Literal) -> Self {
        l.0.into()
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .unsigned_abs()
            .cmp(&other.0.unsigned_abs())
            .then(self.0.get().cmp(&other.0.get()))
    }
}

/// Builds a clause from a list of integers.
#[macro_export]
macro_rules! clause {
    () => (
        vec![] as Vec<$crate::cnf::Literal>
    );
    ($($x:expr),+ $(,)?) => (
        [$($x),+].into_iter().map($crate::cnf::Literal::from).collect::<Vec<$crate::cnf::Literal>>()
    );
}

/// A total assignment of the variables, given by the set of its true literals.
pub type Model = BTreeSet<Literal>;

/// Returns an iterator to all the total assignments of the variables `1..=n_vars`.
///
/// The assignments are produced in increasing binary order, the first one setting all variables to false.
pub fn all_assignments(n_vars: usize) -> impl Iterator<Item = Model> {
    (0..1u128 << n_vars).map(move |mask| {
        (1..=n_vars)
            .map(|v| Variable::from(v).literal(mask & (1 << (v - 1)) != 0))
            .collect()
    })
}

/// Returns `true` iff the clause contains a literal of the model.
pub fn satisfies_clause(model: &Model, clause: &[Literal]) -> bool {
    clause.iter().any(|l| model.contains(l))
}
