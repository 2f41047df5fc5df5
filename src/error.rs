/// Lexical errors.
///
/// Raised while the lexer turns source text into tokens: characters outside
/// the language and quoted text that never closes.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree.
/// Parse errors name the token kind that was expected and the one actually
/// found. Lexical errors met while pulling tokens are carried through
/// unchanged.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. These are
/// the only errors a script can observe through `pryas`/`samatan`.
pub mod runtime_error;
/// The error returned by a whole run.
///
/// Unifies the three failure categories behind one type so that the driver
/// can use `?` on every stage.
pub mod sathi_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use sathi_error::SathiError;
