use std::{collections::HashMap, rc::Rc};

use tracing::trace;

use crate::{
    ast::{Expr, FunctionDef, Statement},
    config::Config,
    error::RuntimeError,
    interpreter::{
        evaluator::access::{read_index, read_property, write_index, write_property},
        value::{core::Value, record::Record},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How control leaves a statement.
///
/// `thodau`, `jari` and `firta` are not errors: they travel up the evaluation
/// call stack as values of this type until the loop or function call that
/// understands them. Every statement sequence stops at the first outcome that
/// is not [`Flow::Normal`] and hands it to its caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// Leave the innermost loop.
    Break {
        /// Line of the `thodau` statement.
        line: usize,
    },
    /// Start the next iteration of the innermost loop.
    Continue {
        /// Line of the `jari` statement.
        line: usize,
    },
    /// Leave the innermost function call with a value.
    Return {
        /// The returned value.
        value: Value,
        /// Line of the `firta` statement.
        line:  usize,
    },
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for a single run: the scope
/// stack, all user-defined functions, and the values printed so far.
///
/// ## Usage
///
/// A `Context` is created at the start of a run and dropped at its end. It is
/// not meant to be shared between runs.
///
/// ```
/// use sathi::interpreter::{evaluator::core::Context, parser::core::parse, value::core::Value};
///
/// let program = parse("sathi yo ho x = 2\nsathi bhana(x * 21)").unwrap();
/// let output = Context::new().evaluate(&program).unwrap();
///
/// assert_eq!(output, vec![Value::Number(42.0)]);
/// ```
pub struct Context {
    /// Variable scopes, innermost last. The first entry is the global scope
    /// and is never removed.
    pub scope_stack:       Vec<HashMap<String, Value>>,
    /// A mapping from function names to their definitions. Populated when a
    /// `kaam` statement executes.
    pub functions:         HashMap<String, Rc<FunctionDef>>,
    /// Values printed by `sathi bhana`, in order.
    pub output:            Vec<Value>,
    /// Number of user-function calls currently active.
    pub(crate) call_depth: usize,
    pub(crate) config:     Config,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a new evaluation context with an empty global scope and no
    /// user-defined functions.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { scope_stack: vec![HashMap::new()],
               functions: HashMap::new(),
               output: Vec::new(),
               call_depth: 0,
               config }
    }

    /// Runs a whole program and returns everything it printed.
    ///
    /// A `thodau` or `jari` that reaches the top level is an error, and so is
    /// a `firta`.
    ///
    /// # Errors
    /// The first runtime error that no `samatan` clause caught.
    pub fn evaluate(&mut self, program: &[Statement]) -> EvalResult<Vec<Value>> {
        for statement in program {
            match self.exec_statement(statement)? {
                Flow::Normal => {},
                Flow::Break { line } => return Err(RuntimeError::BreakOutsideLoop { line }),
                Flow::Continue { line } => {
                    return Err(RuntimeError::ContinueOutsideLoop { line });
                },
                Flow::Return { line, .. } => {
                    return Err(RuntimeError::ReturnOutsideFunction { line });
                },
            }
        }

        Ok(std::mem::take(&mut self.output))
    }

    /// Executes statements in order until one of them transfers control.
    ///
    /// No scope is pushed here; the caller decides whether the block gets a
    /// frame of its own.
    ///
    /// # Returns
    /// [`Flow::Normal`] if every statement completed, otherwise the first
    /// other outcome.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            let flow = self.exec_statement(statement)?;
            if !matches!(flow, Flow::Normal) {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    ///
    /// Handles declarations, printing, every assignment form, conditionals,
    /// loops, function definitions, control transfer, `pryas`/`samatan`, and
    /// calls used as statements.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// How control leaves the statement.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Declaration { name, value, .. } => {
                let value = self.eval(value)?;
                self.define_local(name, value);
            },
            Statement::Print { value: expr, .. } => {
                let value = self.eval(expr)?;
                trace!(line = expr.line_number(), %value, "print");
                self.output.push(value);
            },
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value)?;
                if !self.assign_nearest(name, value) {
                    return Err(RuntimeError::UndefinedAssignment { name: name.clone(),
                                                                   line: *line, });
                }
            },
            Statement::IndexAssignment { name,
                                         index,
                                         value,
                                         line, } => {
                let target = self.lookup(name, *line)?;
                let index = self.eval(index)?;
                let value = self.eval(value)?;
                write_index(&target, &index, value, *line)?;
            },
            Statement::PropertyAssignment { name,
                                            property,
                                            value,
                                            line, } => {
                let target = self.lookup(name, *line)?;
                let value = self.eval(value)?;
                write_property(&target, property, value, *line)?;
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition)?.is_truthy() {
                    return self.exec_block(then_branch);
                }
                if let Some(else_branch) = else_branch {
                    return self.exec_block(else_branch);
                }
            },
            Statement::While { condition, body, .. } => return self.eval_while(condition, body),
            Statement::For { context, line } => return self.eval_for(context, *line),
            Statement::Function(def) => {
                self.functions.insert(def.name.clone(), Rc::new(def.clone()));
            },
            Statement::Return { value, line } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Null,
                };
                return Ok(Flow::Return { value, line: *line });
            },
            Statement::Break { line } => return Ok(Flow::Break { line: *line }),
            Statement::Continue { line } => return Ok(Flow::Continue { line: *line }),
            Statement::TryCatch { body,
                                  error_name,
                                  handler,
                                  .. } => return self.eval_try_catch(body, error_name, handler),
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
            },
        }
        Ok(Flow::Normal)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// variables, unary and binary operations, the short-circuiting logical
    /// operators, list and record literals, index and property access, and
    /// function calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.lookup(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right),
            Expr::ListLiteral { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.eval(element))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::new_list(values))
            },
            Expr::RecordLiteral { entries, .. } => {
                let mut record = Record::new();
                for (key, value) in entries {
                    let value = self.eval(value)?;
                    record.insert(key.clone(), value);
                }
                Ok(Value::new_record(record))
            },
            Expr::Index { target, index, line } => {
                let target = self.eval(target)?;
                let index = self.eval(index)?;
                read_index(&target, &index, *line)
            },
            Expr::Property { target, name, line } => {
                let target = self.eval(target)?;
                read_property(&target, name, *line)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
        }
    }

    /// Reads a variable, searching from the innermost scope outward.
    ///
    /// # Errors
    /// `UndefinedVariable` if no scope binds `name`.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }
}
