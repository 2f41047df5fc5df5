use std::collections::HashMap;

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Pushes a new, empty innermost scope.
    ///
    /// # Example
    /// ```
    /// use sathi::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// context.push_scope();
    ///
    /// assert_eq!(context.scope_stack.len(), 2);
    /// ```
    pub fn push_scope(&mut self) {
        self.scope_stack.push(HashMap::new());
        trace!(depth = self.scope_stack.len(), "push scope");
    }

    /// Removes the innermost local scope.
    ///
    /// The global scope is never removed, so the stack is never empty.
    ///
    /// # Example
    /// ```
    /// use sathi::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// context.pop_scope();
    ///
    /// assert_eq!(context.scope_stack.len(), 1);
    /// ```
    pub fn pop_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
        trace!(depth = self.scope_stack.len(), "pop scope");
    }

    /// Runs `body` inside a fresh scope frame.
    ///
    /// The frame is popped on every exit path: normal completion, a control
    /// transfer carried in the result, or an error.
    ///
    /// # Example
    /// ```
    /// use sathi::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// let result: Result<(), RuntimeError> = context.with_scope(|ctx| {
    ///     ctx.define_local("x", Value::Number(1.0));
    ///     Err(RuntimeError::DivisionByZero { line: 1 })
    /// });
    ///
    /// assert!(result.is_err());
    /// assert_eq!(context.scope_stack.len(), 1);
    /// assert_eq!(context.get_variable("x"), None);
    /// ```
    pub fn with_scope<T>(&mut self,
                         body: impl FnOnce(&mut Self) -> EvalResult<T>)
                         -> EvalResult<T> {
        self.push_scope();
        let result = body(self);
        self.pop_scope();

        result
    }

    /// Retrieves a variable from the current scope stack.
    ///
    /// Lookup begins at the innermost scope and proceeds outward toward the
    /// global scope. Returns `None` if the variable is not defined in any
    /// active scope.
    ///
    /// # Example
    /// ```
    /// use sathi::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.define_local("x", Value::Number(5.0));
    ///
    /// assert_eq!(context.get_variable("x"), Some(&Value::Number(5.0)));
    /// assert_eq!(context.get_variable("y"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.scope_stack.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Defines a variable in the current (innermost) scope.
    ///
    /// An existing binding of the same name in that scope is replaced; a
    /// binding in an outer scope is shadowed.
    pub fn define_local(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }

    /// Assigns a value to the nearest existing binding of `name`.
    ///
    /// The search runs from the innermost scope outward. Nothing is created
    /// when no scope binds the name.
    ///
    /// # Returns
    /// `true` if a binding was updated, `false` if none exists.
    ///
    /// # Example
    /// ```
    /// use sathi::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::new();
    /// context.define_local("x", Value::Number(1.0));
    /// context.push_scope();
    ///
    /// assert!(context.assign_nearest("x", Value::Number(2.0)));
    /// assert!(!context.assign_nearest("y", Value::Null));
    ///
    /// context.pop_scope();
    /// assert_eq!(context.get_variable("x"), Some(&Value::Number(2.0)));
    /// ```
    pub fn assign_nearest(&mut self, name: &str, value: Value) -> bool {
        match self.scope_stack
                  .iter_mut()
                  .rev()
                  .find_map(|scope| scope.get_mut(name))
        {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }
}

/// Verifies that a builtin received exactly `expected` arguments.
///
/// # Parameters
/// - `args`: The evaluated arguments.
/// - `expected`: Required count.
/// - `name`: Builtin name, for the error message.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// `ArgumentCountMismatch` when the count differs.
pub fn check_arity<T>(args: &[T], expected: usize, name: &str, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  expected: expected.to_string(),
                                                  found: args.len(),
                                                  line })
    }
}
