/// The parser cursor and program entry point.
///
/// Holds the single token of lookahead, pulls tokens from the lexer on
/// demand, and exposes [`parse`](core::parse) for whole programs.
pub mod core;

/// Unary, primary, and postfix parsing.
///
/// Handles literals, variables, calls, list and record literals,
/// parenthesised expressions, `!`/`hoina`/`-`, and the `[index]` and
/// `.property` chains that follow a primary.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence level, from logical-or down to
/// multiplicative. Every level is left-associative.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences, skipping blank lines.
pub mod block;

/// Shared parser helpers.
///
/// Token matching, identifier parsing, and comma-separated lists.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading keyword or identifier and parses every
/// statement form of the language.
pub mod statement;
