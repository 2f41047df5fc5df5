use tracing::trace;

use crate::{
    ast::{Expr, ForLoop, Statement},
    interpreter::evaluator::core::{Context, EvalResult, Flow},
};

/// What a loop does after one run of its body.
enum Next {
    Iterate,
    Exit(Flow),
}

/// Interprets the outcome of one body run: `thodau` ends the loop, `jari`
/// and normal completion go on, and `firta` leaves the loop and keeps
/// travelling.
fn after_body(flow: Flow) -> Next {
    match flow {
        Flow::Normal | Flow::Continue { .. } => Next::Iterate,
        Flow::Break { .. } => Next::Exit(Flow::Normal),
        Flow::Return { .. } => Next::Exit(flow),
    }
}

impl Context {
    /// Evaluates a `jaba` (while) loop.
    ///
    /// The whole loop runs inside one scope frame. The condition is
    /// re-evaluated before every iteration inside that frame, so names
    /// declared by the body are visible to it.
    ///
    /// # Parameters
    /// - `condition`: Loop condition.
    /// - `body`: Statements of the loop body.
    ///
    /// # Returns
    /// [`Flow::Normal`] once the loop ends, or the [`Flow::Return`] that left
    /// it.
    ///
    /// # Example
    /// ```
    /// use sathi::interpreter::{evaluator::core::Context, parser::core::parse, value::core::Value};
    ///
    /// let source = "sathi yo ho i = 0\njaba (i < 10) {\n i = i + 1\n yadi (i == 3) { thodau }\n}\nsathi bhana(i)";
    /// let output = Context::new().evaluate(&parse(source).unwrap()).unwrap();
    ///
    /// assert_eq!(output, vec![Value::Number(3.0)]);
    /// ```
    pub fn eval_while(&mut self, condition: &Expr, body: &[Statement]) -> EvalResult<Flow> {
        self.with_scope(|ctx| {
                while ctx.eval(condition)?.is_truthy() {
                    if let Next::Exit(flow) = after_body(ctx.exec_block(body)?) {
                        return Ok(flow);
                    }
                }
                Ok(Flow::Normal)
            })
    }

    /// Evaluates a ranged `prawahit` (for) loop.
    ///
    /// Start, end and step are evaluated once, before the loop frame is
    /// pushed, and must all be numbers. A hidden counter starts at `start`
    /// and moves by `step` after every iteration, including iterations cut
    /// short by `jari`. With a non-negative step the loop runs while the
    /// counter is below `end`; with a negative step, while it is above.
    ///
    /// The loop variable is rebound in the loop frame from the counter at
    /// the start of each iteration, so assignments to it inside the body do
    /// not affect the iteration count.
    ///
    /// A step of zero never reaches the bound and the loop only ends through
    /// `thodau`, `firta` or an error.
    ///
    /// # Parameters
    /// - `context`: Loop header and body.
    /// - `line`: Line number of the loop, for tracing.
    ///
    /// # Returns
    /// [`Flow::Normal`] once the loop ends, or the [`Flow::Return`] that left
    /// it.
    ///
    /// # Example
    /// ```
    /// use sathi::interpreter::{evaluator::core::Context, parser::core::parse, value::core::Value};
    ///
    /// let source = "prawahit (i dekhi 5 samma 0 kadam -2) {\n sathi bhana(i)\n}";
    /// let output = Context::new().evaluate(&parse(source).unwrap()).unwrap();
    ///
    /// assert_eq!(output, vec![Value::Number(5.0), Value::Number(3.0), Value::Number(1.0)]);
    /// ```
    pub fn eval_for(&mut self, context: &ForLoop, line: usize) -> EvalResult<Flow> {
        let start = self.eval(&context.start)?.as_number(line)?;
        let end = self.eval(&context.end)?.as_number(line)?;
        let step = match &context.step {
            Some(step) => self.eval(step)?.as_number(line)?,
            None => 1.0,
        };

        trace!(var = %context.var, start, end, step, line, "for loop");

        let in_range = |counter: f64| {
            if step >= 0.0 { counter < end } else { counter > end }
        };

        self.with_scope(|ctx| {
                let mut counter = start;
                while in_range(counter) {
                    ctx.define_local(&context.var, counter.into());

                    if let Next::Exit(flow) = after_body(ctx.exec_block(&context.body)?) {
                        return Ok(flow);
                    }

                    counter += step;
                }
                Ok(Flow::Normal)
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::interpreter::{evaluator::core::Context, parser::core::parse};

    fn run(source: &str) -> Vec<String> {
        let program = parse(source).unwrap();
        Context::new().evaluate(&program)
                      .unwrap()
                      .iter()
                      .map(ToString::to_string)
                      .collect()
    }

    #[test]
    fn continue_still_advances_the_counter() {
        let output = run("prawahit (i dekhi 0 samma 5) {\n yadi (i % 2 == 0) { jari }\n sathi bhana(i)\n}");
        assert_eq!(output, ["1", "3"]);
    }

    #[test]
    fn body_assignment_to_loop_variable_does_not_change_iterations() {
        let output = run("prawahit (i dekhi 0 samma 3) {\n i = 100\n sathi bhana(i)\n}");
        assert_eq!(output, ["100", "100", "100"]);
    }

    #[test]
    fn bound_is_evaluated_once() {
        let output = run("sathi yo ho n = 2\nprawahit (i dekhi 0 samma n) {\n n = n + 1\n}\nsathi bhana(n)");
        assert_eq!(output, ["4"]);
    }

    #[test]
    fn loop_frame_is_released() {
        let program = parse("prawahit (i dekhi 0 samma 2) {\n sathi yo ho inner = i\n}").unwrap();
        let mut context = Context::new();
        context.evaluate(&program).unwrap();
        assert_eq!(context.scope_stack.len(), 1);
        assert_eq!(context.get_variable("i"), None);
        assert_eq!(context.get_variable("inner"), None);
    }

    #[test]
    fn start_already_past_the_bound_runs_nothing() {
        assert!(run("prawahit (i dekhi 3 samma 3) {\n sathi bhana(i)\n}").is_empty());
        assert!(run("prawahit (i dekhi 0 samma 3 kadam -1) {\n sathi bhana(i)\n}").is_empty());
    }

    #[test]
    fn non_number_bound_is_a_type_error() {
        let program = parse("prawahit (i dekhi 0 samma \"3\") {\n}").unwrap();
        let err = Context::new().evaluate(&program).unwrap_err();
        assert_eq!(err.to_string(), "Type error: expected a number, found text");
    }

    #[test]
    fn while_runs_until_the_condition_fails() {
        let output = run("sathi yo ho n = 0\njaba (n < 2) {\n n = n + 1\n sathi bhana(n)\n}");
        assert_eq!(output, ["1", "2"]);
    }
}
