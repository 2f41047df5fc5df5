//! # sathi
//!
//! sathi is an interpreter for Sathi, a small scripting language whose
//! keywords are Nepali words written in Latin script. Programs are read by a
//! lexer, turned into a syntax tree by a recursive-descent parser, and run by
//! a tree-walking evaluator that collects everything the program prints.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{evaluator::core::Context, parser::core::parse, value::core::Value};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of a program as a tree. The tree is
/// built by the parser and traversed by the evaluator; it is never modified
/// after construction.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Options for a single run.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every error carries the line it was raised at. Runtime errors display as a
/// bare message, which is also the text a `samatan` clause receives.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Unifies them in [`SathiError`] for callers of [`run`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime
/// value representation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for number formatting and checked numeric conversion.
pub mod util;

pub use config::Config;
pub use error::SathiError;

/// Runs a Sathi program with the default [`Config`].
///
/// The whole source is parsed before anything runs, so a syntax error anywhere
/// means no statement executes. On success the values printed by
/// `sathi bhana`, in order, are returned.
///
/// # Errors
/// The first lexical, syntax or uncaught runtime error.
///
/// # Examples
/// ```
/// use sathi::run;
///
/// let output = run("sathi yo ho x = 10\nsathi bhana(x)").unwrap();
/// assert_eq!(output[0].to_string(), "10");
///
/// let err = run("foo()").unwrap_err();
/// assert_eq!(err.to_string(), "Undefined function: foo");
/// ```
pub fn run(source: &str) -> Result<Vec<Value>, SathiError> {
    run_with_config(source, &Config::default())
}

/// Runs a Sathi program with an explicit [`Config`].
///
/// Each call uses a fresh evaluation context; nothing carries over between
/// runs.
///
/// # Errors
/// The first lexical, syntax or uncaught runtime error.
pub fn run_with_config(source: &str, config: &Config) -> Result<Vec<Value>, SathiError> {
    let program = parse(source)?;
    debug!(statements = program.len(), "parsed program");

    let output = Context::with_config(*config).evaluate(&program)?;
    debug!(printed = output.len(), "program finished");

    Ok(output)
}
