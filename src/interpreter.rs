/// The evaluator module executes the syntax tree.
///
/// The evaluator walks statements in order, evaluates expressions, manages
/// the scope stack and the function table, and collects printed values.
///
/// # Responsibilities
/// - Evaluates every statement and expression form.
/// - Carries `thodau`, `jari` and `firta` to the construct that handles them.
/// - Reports runtime errors such as undefined names or division by zero, and
///   lets `pryas`/`samatan` catch them.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens one at a time on
/// request: numbers, quoted text, identifiers, keywords, operators, and line
/// ends. Comments and horizontal whitespace are dropped.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Reports lexical errors for unknown characters and unterminated text.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser pulls tokens from the lexer with one token of lookahead and
/// builds statements by recursive descent, with one function per expression
/// precedence level.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Reports syntax errors naming the expected and the found token.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are numbers, text, booleans, null, lists and records. Lists and
/// records are shared by reference and mutable in place.
///
/// # Responsibilities
/// - Defines the `Value` enum and its display form.
/// - Implements truthiness, numeric conversion and loose equality.
pub mod value;
