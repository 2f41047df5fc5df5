use crate::interpreter::{
    evaluator::{core::EvalResult, utils::check_arity},
    value::core::Value,
};

/// Defines a one-argument built-in that applies an `f64` function.
///
/// The generated function accepts exactly one argument, which must be a
/// number; any other value is a type error.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::function::math::mathi, value::core::Value};
///
/// assert_eq!(mathi(&[Value::Number(1.2)], 1).unwrap(), Value::Number(2.0));
/// assert!(mathi(&[Value::from("1.2")], 1).is_err());
/// ```
macro_rules! number_builtin {
    ($(#[$doc:meta])* $fname:ident, $name:literal, $apply:expr) => {
        $(#[$doc])*
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            check_arity(args, 1, $name, line)?;

            let apply: fn(f64) -> f64 = $apply;
            Ok(Value::Number(apply(args[0].as_number(line)?)))
        }
    };
}

number_builtin!(
    /// Rounds to the nearest integer; halves round up, towards positive
    /// infinity (`gol(-2.5)` is `-2`).
    gol, "gol", round_half_up
);
number_builtin!(
    /// Smallest integer not less than the argument.
    mathi, "mathi", f64::ceil
);
number_builtin!(
    /// Largest integer not greater than the argument.
    tala_math, "tala_math", f64::floor
);
number_builtin!(
    /// Absolute value.
    mutlak, "mutlak", f64::abs
);
number_builtin!(
    /// Square root; `NaN` for negative numbers.
    vargamul, "vargamul", f64::sqrt
);

fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Raises the first argument to the power of the second.
///
/// # Example
/// ```
/// use sathi::interpreter::{evaluator::function::math::shakti, value::core::Value};
///
/// assert_eq!(shakti(&[Value::Number(2.0), Value::Number(10.0)], 1).unwrap(),
///            Value::Number(1024.0));
/// ```
pub fn shakti(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(args, 2, "shakti", line)?;

    let base = args[0].as_number(line)?;
    let exponent = args[1].as_number(line)?;

    Ok(Value::Number(base.powf(exponent)))
}

/// Returns a uniformly distributed random number in `[0, n)`.
///
/// `n` defaults to `1` when it is missing or falsy.
pub fn yaksyamsh(args: &[Value], line: usize) -> EvalResult<Value> {
    let scale = match args.first() {
        Some(value) if value.is_truthy() => value.as_number(line)?,
        _ => 1.0,
    };

    Ok(Value::Number(rand::random::<f64>() * scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gol_rounds_halves_up() {
        for (input, expected) in [(2.5, 3.0), (-2.5, -2.0), (2.4, 2.0), (-0.6, -1.0)] {
            assert_eq!(gol(&[Value::Number(input)], 1).unwrap(), Value::Number(expected));
        }
    }

    #[test]
    fn floor_and_ceil_of_negative_numbers() {
        assert_eq!(tala_math(&[Value::Number(-1.5)], 1).unwrap(), Value::Number(-2.0));
        assert_eq!(mathi(&[Value::Number(-1.5)], 1).unwrap(), Value::Number(-1.0));
    }

    #[test]
    fn vargamul_of_negative_is_nan() {
        let Value::Number(root) = vargamul(&[Value::Number(-4.0)], 1).unwrap() else {
            panic!("vargamul must return a number");
        };
        assert!(root.is_nan());
    }

    #[test]
    fn yaksyamsh_stays_in_range() {
        for _ in 0..100 {
            let Value::Number(n) = yaksyamsh(&[Value::Number(6.0)], 1).unwrap() else {
                panic!("yaksyamsh must return a number");
            };
            assert!((0.0..6.0).contains(&n));
        }

        let Value::Number(unit) = yaksyamsh(&[Value::Number(0.0)], 1).unwrap() else {
            panic!("yaksyamsh must return a number");
        };
        assert!((0.0..1.0).contains(&unit));
    }

    #[test]
    fn math_requires_numbers() {
        let err = shakti(&[Value::from("2"), Value::Number(2.0)], 5).unwrap_err();
        assert_eq!(err.to_string(), "Type error: expected a number, found text");
    }
}
