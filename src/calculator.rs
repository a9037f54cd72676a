//! The demo calculator
//!
//! Both computations are deliberately naive so that a debugger session has
//! a deep, easy-to-follow call stack to step through. Arithmetic is 32-bit
//! and wraps on overflow; `checked_factorial` and `divide` are the paths that
//! surface errors instead.

use crate::common::{Error, Result};

/// Precision used by `Calculator::default()`
pub const DEFAULT_PRECISION: i32 = 2;

/// A calculator holding a display precision and an operation history
///
/// Neither field influences any computation. The history is never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    precision: i32,
    history: Vec<String>,
}

impl Calculator {
    /// Create a calculator with an explicit precision
    ///
    /// No validation is performed; zero and negative values are accepted.
    pub fn new(precision: i32) -> Self {
        tracing::debug!(precision, "Creating calculator");
        Self {
            precision,
            history: Vec::new(),
        }
    }

    pub fn precision(&self) -> i32 {
        self.precision
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Compute the n-th Fibonacci number by binary recursion
    ///
    /// Any `n <= 1` is returned unchanged, so negative inputs come back as-is.
    pub fn fibonacci(&self, n: i32) -> i32 {
        let result = self.fib(n);
        tracing::debug!(n, result, "fibonacci");
        result
    }

    fn fib(&self, n: i32) -> i32 {
        tracing::trace!(n, "fib");
        if n <= 1 {
            return n;
        }
        self.fib(n - 1).wrapping_add(self.fib(n - 2))
    }

    /// Compute n! by recursion, wrapping on overflow
    ///
    /// Any `n <= 1` yields 1, including negative inputs.
    pub fn factorial(&self, n: i32) -> i32 {
        let result = self.fact(n);
        tracing::debug!(n, result, "factorial");
        result
    }

    fn fact(&self, n: i32) -> i32 {
        tracing::trace!(n, "fact");
        if n <= 1 {
            return 1;
        }
        n.wrapping_mul(self.fact(n - 1))
    }

    /// Compute n!, failing on the first overflowing multiply
    ///
    /// Multiplies upward from 2 so that overflow is reported after at most
    /// thirteen steps, whatever the size of `n`.
    pub fn checked_factorial(&self, n: i32) -> Result<i32> {
        let product = (2..=n).try_fold(1i32, |acc, k| {
            tracing::trace!(k, acc, "checked factorial step");
            acc.checked_mul(k)
        });
        match product {
            Some(result) => {
                tracing::debug!(n, result, "checked factorial");
                Ok(result)
            }
            None => {
                tracing::warn!(n, "factorial overflowed i32");
                Err(Error::overflow("factorial", &[n]))
            }
        }
    }

    /// Integer division truncating toward zero
    pub fn divide(&self, dividend: i32, divisor: i32) -> Result<i32> {
        if divisor == 0 {
            tracing::warn!(dividend, "division by zero");
            return Err(Error::DivisionByZero { dividend });
        }
        let result = dividend.checked_div(divisor).ok_or_else(|| {
            tracing::warn!(dividend, divisor, "division overflowed i32");
            Error::overflow("divide", &[dividend, divisor])
        })?;
        tracing::debug!(dividend, divisor, result, "divide");
        Ok(result)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}
