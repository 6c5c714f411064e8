//! Evaluates arithmetic expressions written in infix notation.
//!
//! An expression is split into tokens, reordered into postfix form with the
//! shunting-yard algorithm and then run on a stack machine. See
//! [`interpreter::evaluate`] for the entry point.

pub mod interpreter;
