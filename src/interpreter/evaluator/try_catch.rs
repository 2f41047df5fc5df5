use tracing::debug;

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `pryas { body } samatan (name) { handler }`.
    ///
    /// The body runs in the current scope. If it fails with a runtime error,
    /// the handler runs in a new frame in which `name` is bound to the error
    /// message as text. Scope frames opened inside the failed body have
    /// already been released by then.
    ///
    /// Control transfers (`thodau`, `jari`, `firta`) are not failures. They
    /// pass through the statement untouched, whether they come from the body
    /// or from the handler. An error raised inside the handler propagates.
    ///
    /// # Parameters
    /// - `body`: Statements of the `pryas` block.
    /// - `error_name`: Name bound to the message inside the handler.
    /// - `handler`: Statements of the `samatan` block.
    ///
    /// # Example
    /// ```
    /// use sathi::interpreter::{evaluator::core::Context, parser::core::parse, value::core::Value};
    ///
    /// let source = "pryas {\n sathi yo ho x = 10 / 0\n} samatan (e) {\n sathi bhana(\"Error: \" + e)\n}";
    /// let output = Context::new().evaluate(&parse(source).unwrap()).unwrap();
    ///
    /// assert_eq!(output, vec![Value::from("Error: Division by zero")]);
    /// ```
    pub fn eval_try_catch(&mut self,
                          body: &[Statement],
                          error_name: &str,
                          handler: &[Statement])
                          -> EvalResult<Flow> {
        match self.exec_block(body) {
            Ok(flow) => Ok(flow),
            Err(error) => {
                debug!(line = error.line(), %error, "caught runtime error");

                let message = Value::Text(error.to_string());
                self.with_scope(|ctx| {
                        ctx.define_local(error_name, message);
                        ctx.exec_block(handler)
                    })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::interpreter::{evaluator::core::Context, parser::core::parse};

    fn run(source: &str) -> Result<Vec<String>, String> {
        let program = parse(source).unwrap();
        Context::new().evaluate(&program)
                      .map(|values| values.iter().map(ToString::to_string).collect())
                      .map_err(|e| e.to_string())
    }

    #[test]
    fn output_before_the_failure_is_kept() {
        let output = run("pryas {\n sathi bhana(1)\n sathi bhana(x)\n sathi bhana(2)\n} samatan (e) {\n sathi bhana(e)\n}");
        assert_eq!(output.unwrap(), ["1", "Undefined variable: x"]);
    }

    #[test]
    fn catch_variable_is_scoped_to_the_handler() {
        let output = run("pryas {\n foo()\n} samatan (e) {\n}\nsathi bhana(e)");
        assert_eq!(output.unwrap_err(), "Undefined variable: e");
    }

    #[test]
    fn frames_of_the_failed_body_are_released() {
        let program = parse("pryas {\n jaba (satya) {\n sathi yo ho y = 1 / 0\n }\n} samatan (e) {\n}").unwrap();
        let mut context = Context::new();
        context.evaluate(&program).unwrap();
        assert_eq!(context.scope_stack.len(), 1);
    }

    #[test]
    fn break_passes_through_try() {
        let output = run("jaba (satya) {\n pryas {\n thodau\n } samatan (e) {\n sathi bhana(\"caught\")\n }\n}\nsathi bhana(\"done\")");
        assert_eq!(output.unwrap(), ["done"]);
    }

    #[test]
    fn handler_errors_propagate() {
        let output = run("pryas {\n sathi yo ho z = 1 / 0\n} samatan (e) {\n sathi bhana(1 % 0)\n}");
        assert_eq!(output.unwrap_err(), "Modulo by zero");
    }

    #[test]
    fn nested_try_catches_innermost_first() {
        let output = run("pryas {\n pryas {\n kehi()\n } samatan (a) {\n sathi bhana(\"inner: \" + a)\n }\n} samatan (b) {\n sathi bhana(\"outer\")\n}");
        assert_eq!(output.unwrap(), ["inner: Undefined function: kehi"]);
    }
}
