//! Crusticheck, a differential testing harness for argumentation and SAT solvers.
//!
//! Crusticheck builds trees of small problem instances by applying random mutations to a root instance,
//! while keeping the expected solutions of the instances up to date.
//! The instances are given to the solvers under test, and their answers are compared to the expected ones.
//!
//! Instances are generated by the [generator](crate::generator) module, using the argumentation frameworks of the [aa] module
//! or the CNF formulas of the [cnf] module.
//! Solver outputs are decoded by the readers of the [io] module, and compared to the expected answers by the [checkers].

#![warn(missing_docs)]

pub mod aa;

pub mod checkers;

pub mod cnf;

pub mod generator;

pub mod io;

pub mod utils;
