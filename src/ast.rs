/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code. Lists and records are not literals: their elements are expressions
/// and they are built fresh every time they are evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A number literal. Sathi has a single, floating point, number type.
    Number(f64),
    /// A quoted text literal.
    Text(String),
    /// `satya` or `asatya`.
    Bool(bool),
    /// `khali`.
    Null,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant models a distinct syntactic construct and records the source
/// line it started on, for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, text, boolean, null).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`-x`, `!x`, `hoina x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// An arithmetic or comparison operation. Both operands are always
    /// evaluated.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `ra`/`&&` or `wa`/`||`. The right operand is evaluated only when the
    /// left one does not decide the result.
    Logical {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// List literal expression (`[1, 2, 3]`).
    ListLiteral {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Record literal expression (`{naam: "Ram", umer: 20}`).
    RecordLiteral {
        /// Keys and value expressions, in source order.
        entries: Vec<(String, Self)>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Index access (`x[i]`).
    Index {
        /// The value being indexed.
        target: Box<Self>,
        /// The index expression.
        index:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Property access (`x.naam`).
    Property {
        /// The value whose property is read.
        target: Box<Self>,
        /// The property name.
        name:   String,
        /// Line number in the source code.
        line:   usize,
    },
    /// Function call expression (e.g. `lambai(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use sathi::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Logical { line, .. }
            | Self::ListLiteral { line, .. }
            | Self::RecordLiteral { line, .. }
            | Self::Index { line, .. }
            | Self::Property { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-`).
    Negate,
    /// Logical negation (`!` or `hoina`).
    Not,
}

/// Binary operators whose operands are both evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{symbol}")
    }
}

/// Short-circuiting operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    /// `ra` or `&&`
    And,
    /// `wa` or `||`
    Or,
}

/// A user-defined function: `kaam naam(a, b) { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// Name of the function.
    pub name:   String,
    /// Parameter names, in order.
    pub params: Vec<String>,
    /// The statements of the body.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// The header and body of a ranged loop:
/// `prawahit (i dekhi start samma end kadam step) { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    /// The loop variable.
    pub var:   String,
    /// First value of the loop variable.
    pub start: Expr,
    /// Exclusive bound.
    pub end:   Expr,
    /// Increment per iteration, `1` when absent.
    pub step:  Option<Expr>,
    /// The statements of the body.
    pub body:  Vec<Statement>,
}

/// A statement node.
///
/// Statements do not produce values; their effects are bindings, printed
/// output, and control transfer.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `sathi yo ho naam = expr`: binds a new name in the current scope.
    Declaration {
        /// The name being declared.
        name:  String,
        /// The initial value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `sathi bhana(expr)`: appends a value to the run's output.
    Print {
        /// The value to print.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `naam = expr`: mutates the nearest existing binding.
    Assignment {
        /// The variable being reassigned.
        name:  String,
        /// The new value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `naam[index] = expr`.
    IndexAssignment {
        /// The variable holding the list or record.
        name:  String,
        /// The index expression.
        index: Expr,
        /// The value to store.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `naam.property = expr`.
    PropertyAssignment {
        /// The variable holding the record.
        name:     String,
        /// The property name.
        property: String,
        /// The value to store.
        value:    Expr,
        /// Line number in the source code.
        line:     usize,
    },
    /// `yadi (cond) { ... } anya { ... }`.
    If {
        /// The condition.
        condition:   Expr,
        /// Statements run when the condition is truthy.
        then_branch: Vec<Statement>,
        /// Statements run otherwise, if an `anya` clause is present.
        else_branch: Option<Vec<Statement>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `jaba (cond) { ... }`.
    While {
        /// The loop condition, checked before every iteration.
        condition: Expr,
        /// The statements of the body.
        body:      Vec<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `prawahit (i dekhi a samma b kadam s) { ... }`.
    For {
        /// Loop header and body.
        context: ForLoop,
        /// Line number in the source code.
        line:    usize,
    },
    /// `kaam naam(params) { ... }`.
    Function(FunctionDef),
    /// `firta` or `firta expr`.
    Return {
        /// The returned value; null when absent.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `thodau`.
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// `jari`.
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// `pryas { ... } samatan (e) { ... }`.
    TryCatch {
        /// The guarded statements.
        body:       Vec<Statement>,
        /// Name bound to the error message inside the handler.
        error_name: String,
        /// The statements of the handler.
        handler:    Vec<Statement>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A function call used as a statement; its result is discarded.
    Expression {
        /// The call expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}
