use std::rc::Rc;

use tracing::trace;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Flow},
            function::{builtin, list, math, min_max, text},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number.
/// It returns a value wrapped in `EvalResult`.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
///
/// # Example
/// ```
/// use sathi::interpreter::evaluator::function::core::Arity;
///
/// let slice = Arity::OneOf(&[2, 3]);
/// assert!(slice.check(3));
/// assert!(!slice.check(1));
/// assert_eq!(slice.to_string(), "2 or 3");
/// assert_eq!(Arity::AtLeast(1).to_string(), "at least 1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sankhya"   => { arity: Arity::Exact(1), func: builtin::sankhya },
    "shabda"    => { arity: Arity::Exact(1), func: builtin::shabda },
    "tathya"    => { arity: Arity::Exact(1), func: builtin::tathya },
    "lambai"    => { arity: Arity::Exact(1), func: text::lambai },
    "upari"     => { arity: Arity::Exact(1), func: text::upari },
    "tala"      => { arity: Arity::Exact(1), func: text::tala },
    "khojne"    => { arity: Arity::Exact(2), func: text::khojne },
    "kaatne"    => { arity: Arity::OneOf(&[2, 3]), func: text::kaatne },
    "jodne"     => { arity: Arity::AtLeast(0), func: text::jodne },
    "thapaune"  => { arity: Arity::AtLeast(1), func: list::thapaune },
    "hataune"   => { arity: Arity::Exact(1), func: list::hataune },
    "prapt"     => { arity: Arity::Exact(2), func: list::prapt },
    "sthapana"  => { arity: Arity::Exact(3), func: list::sthapana },
    "gol"       => { arity: Arity::Exact(1), func: math::gol },
    "mathi"     => { arity: Arity::Exact(1), func: math::mathi },
    "tala_math" => { arity: Arity::Exact(1), func: math::tala_math },
    "mutlak"    => { arity: Arity::Exact(1), func: math::mutlak },
    "shakti"    => { arity: Arity::Exact(2), func: math::shakti },
    "vargamul"  => { arity: Arity::Exact(1), func: math::vargamul },
    "yaksyamsh" => { arity: Arity::OneOf(&[0, 1]), func: math::yaksyamsh },
    "prakar"    => { arity: Arity::Exact(1), func: builtin::prakar },
    "thulo"     => { arity: Arity::AtLeast(0), func: |args, line| min_max::min_max("thulo", args, line) },
    "sano"      => { arity: Arity::AtLeast(0), func: |args, line| min_max::min_max("sano", args, line) },
    "padhne"    => { arity: Arity::Exact(0), func: builtin::padhne },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(counts) => {
                for (index, count) in counts.iter().enumerate() {
                    if index > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{count}")?;
                }
                Ok(())
            },
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

fn find_builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

impl Context {
    /// Evaluates a function call.
    ///
    /// The name is first looked up among the builtins, which therefore cannot
    /// be replaced by a user function of the same name. A builtin gets its
    /// arguments evaluated left to right and its arity verified before it
    /// runs. Otherwise the call goes to the user function table; an unknown
    /// name fails before any argument is evaluated.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions, not yet evaluated.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Value> {
        if let Some(builtin) = find_builtin(name) {
            let arg_vals = self.eval_arguments(arguments)?;
            if !builtin.arity.check(arg_vals.len()) {
                return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                 expected: builtin.arity
                                                                                  .to_string(),
                                                                 found: arg_vals.len(),
                                                                 line });
            }
            return (builtin.func)(&arg_vals, line);
        }

        let func = self.functions
                       .get(name)
                       .cloned()
                       .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                                        line })?;
        let arg_vals = self.eval_arguments(arguments)?;

        self.call_user_defined_function(&func, arg_vals, line)
    }

    fn eval_arguments(&mut self, arguments: &[Expr]) -> EvalResult<Vec<Value>> {
        arguments.iter().map(|arg| self.eval(arg)).collect()
    }

    /// Executes a user-defined function.
    ///
    /// The parameter count must match the number of supplied arguments. A new
    /// frame is pushed on top of the caller's scopes, so the body sees the
    /// caller's variables wherever its own parameters and locals do not
    /// shadow them. The frame is released however the body finishes.
    ///
    /// A body that ends without `firta` yields null. A `thodau` or `jari`
    /// that reaches the call boundary is an error.
    ///
    /// # Errors
    /// - Wrong number of arguments.
    /// - Nesting deeper than the configured maximum call depth.
    /// - Any error raised by the body.
    ///
    /// # Returns
    /// The value given to `firta`, or null.
    fn call_user_defined_function(&mut self,
                                  func: &Rc<FunctionDef>,
                                  arg_vals: Vec<Value>,
                                  line: usize)
                                  -> EvalResult<Value> {
        if arg_vals.len() != func.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: func.name.clone(),
                                                             expected: func.params
                                                                           .len()
                                                                           .to_string(),
                                                             found: arg_vals.len(),
                                                             line });
        }

        if self.call_depth >= self.config.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.config.max_call_depth,
                                                         line });
        }

        trace!(name = %func.name, depth = self.call_depth + 1, line, "call");

        self.call_depth += 1;
        let flow = self.with_scope(|ctx| {
                           for (param, value) in func.params.iter().zip(arg_vals) {
                               ctx.define_local(param, value);
                           }
                           ctx.exec_block(&func.body)
                       });
        self.call_depth -= 1;

        match flow? {
            Flow::Normal => Ok(Value::Null),
            Flow::Return { value, .. } => Ok(value),
            Flow::Break { line } => Err(RuntimeError::BreakOutsideLoop { line }),
            Flow::Continue { line } => Err(RuntimeError::ContinueOutsideLoop { line }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{config::Config, interpreter::parser::core::parse};

    fn run(source: &str) -> Result<Vec<String>, String> {
        let program = parse(source).unwrap();
        Context::new().evaluate(&program)
                      .map(|values| values.iter().map(ToString::to_string).collect())
                      .map_err(|e| e.to_string())
    }

    #[test]
    fn every_listed_builtin_is_found() {
        for name in BUILTIN_FUNCTIONS {
            assert!(find_builtin(name).is_some(), "{name} missing from the table");
        }
        assert_eq!(find_builtin("kaatne").map(|b| b.arity), Some(Arity::OneOf(&[2, 3])));
        assert!(find_builtin("print").is_none());
    }

    #[test]
    fn builtin_names_are_unique() {
        for (index, name) in BUILTIN_FUNCTIONS.iter().enumerate() {
            assert!(!BUILTIN_FUNCTIONS[index + 1..].contains(name), "{name} listed twice");
        }
    }

    #[test]
    fn arity_messages() {
        assert_eq!(run("sathi bhana(kaatne(\"abc\"))").unwrap_err(),
                   "Function kaatne expects 2 or 3 arguments, got 1");
        assert_eq!(run("thapaune()").unwrap_err(),
                   "Function thapaune expects at least 1 arguments, got 0");
        assert_eq!(run("kaam f(a, b) {\n}\nf(1)").unwrap_err(),
                   "Function f expects 2 arguments, got 1");
    }

    #[test]
    fn unknown_function_fails_before_evaluating_arguments() {
        assert_eq!(run("foo(bar)").unwrap_err(), "Undefined function: foo");
    }

    #[test]
    fn builtins_shadow_user_functions() {
        let output = run("kaam lambai(x) {\n firta 99\n}\nsathi bhana(lambai(\"ab\"))");
        assert_eq!(output.unwrap(), ["2"]);
    }

    #[test]
    fn missing_return_yields_null() {
        assert_eq!(run("kaam f() {\n}\nsathi bhana(f())").unwrap(), ["null"]);
        assert_eq!(run("kaam f() {\n firta\n}\nsathi bhana(f())").unwrap(), ["null"]);
    }

    #[test]
    fn callee_sees_caller_locals() {
        let output = run("kaam show() {\n firta x\n}\nkaam outer() {\n sathi yo ho x = \"outer\"\n firta show()\n}\nsathi bhana(outer())");
        assert_eq!(output.unwrap(), ["outer"]);
    }

    #[test]
    fn break_at_call_boundary_is_an_error() {
        let output = run("kaam f() {\n thodau\n}\njaba (satya) {\n f()\n}");
        assert_eq!(output.unwrap_err(), "thodau used outside of a loop");
    }

    #[test]
    fn depth_limit_releases_frames() {
        let program = parse("kaam f(n) {\n firta f(n + 1)\n}\npryas {\n f(0)\n} samatan (e) {\n sathi bhana(e)\n}").unwrap();
        let mut context = Context::with_config(Config { max_call_depth: 16 });
        let output = context.evaluate(&program).unwrap();

        assert_eq!(output, vec![Value::from("Maximum call depth exceeded (16)")]);
        assert_eq!(context.scope_stack.len(), 1);
        assert_eq!(context.call_depth, 0);
    }
}
