//! Bruteaf is an exhaustive reasoner for abstract argumentation frameworks.
//!
//! It decides extension verification, credulous acceptance and skeptical acceptance problems
//! under the preferred and stable semantics by exploring all the subsets of arguments.

#![warn(missing_docs)]

pub mod aa;

pub mod io;

pub mod solvers;

pub mod utils;
