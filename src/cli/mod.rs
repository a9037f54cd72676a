//! CLI command handling
//!
//! Runs commands against a calculator and formats output.

use std::io::Write;

use serde::Serialize;

use crate::calculator::Calculator;
use crate::commands::Commands;
use crate::common::Result;

/// Input to the demo program's fixed Fibonacci call
pub const DEMO_FIBONACCI_INPUT: i32 = 10;
/// Input to the demo program's fixed factorial call
pub const DEMO_FACTORIAL_INPUT: i32 = 5;

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A single computed result, as emitted with `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub operation: &'static str,
    pub input: Input,
    pub result: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Input {
    Single(i32),
    Pair([i32; 2]),
}

impl Evaluation {
    fn fibonacci(n: i32, result: i32) -> Self {
        Self {
            operation: "fibonacci",
            input: Input::Single(n),
            result,
        }
    }

    fn factorial(n: i32, result: i32) -> Self {
        Self {
            operation: "factorial",
            input: Input::Single(n),
            result,
        }
    }

    fn divide(dividend: i32, divisor: i32, result: i32) -> Self {
        Self {
            operation: "divide",
            input: Input::Pair([dividend, divisor]),
            result,
        }
    }

    fn text(&self) -> String {
        match (self.operation, &self.input) {
            ("fibonacci", Input::Single(n)) => format!("Fibonacci of {}: {}", n, self.result),
            ("factorial", Input::Single(n)) => format!("Factorial of {}: {}", n, self.result),
            (_, Input::Pair([a, b])) => format!("{} / {} = {}", a, b, self.result),
            (op, Input::Single(n)) => format!("{} of {}: {}", op, n, self.result),
        }
    }
}

/// Dispatch a CLI command, writing results to `out`
pub fn dispatch<W: Write>(
    command: Commands,
    calc: &Calculator,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Demo { trigger_error } => {
            let fib_result = calc.fibonacci(DEMO_FIBONACCI_INPUT);
            emit(out, format, &Evaluation::fibonacci(DEMO_FIBONACCI_INPUT, fib_result))?;

            let fact_result = calc.factorial(DEMO_FACTORIAL_INPUT);
            emit(out, format, &Evaluation::factorial(DEMO_FACTORIAL_INPUT, fact_result))?;

            if trigger_error {
                out.flush()?;
                let result = calc.divide(10, 0)?;
                emit(out, format, &Evaluation::divide(10, 0, result))?;
            }
            Ok(())
        }

        Commands::Fibonacci { n } => {
            let result = calc.fibonacci(n);
            emit(out, format, &Evaluation::fibonacci(n, result))
        }

        Commands::Factorial { n, checked } => {
            let result = if checked {
                calc.checked_factorial(n)?
            } else {
                calc.factorial(n)
            };
            emit(out, format, &Evaluation::factorial(n, result))
        }

        Commands::Divide { dividend, divisor } => {
            let result = calc.divide(dividend, divisor)?;
            emit(out, format, &Evaluation::divide(dividend, divisor, result))
        }
    }
}

fn emit<W: Write>(out: &mut W, format: OutputFormat, eval: &Evaluation) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", eval.text())?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, eval)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    fn run(command: Commands, format: OutputFormat) -> (Result<()>, String) {
        let calc = Calculator::default();
        let mut out = Vec::new();
        let result = dispatch(command, &calc, format, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_demo_output() {
        let (result, out) = run(Commands::default(), OutputFormat::Text);
        result.unwrap();
        assert_eq!(out, "Fibonacci of 10: 55\nFactorial of 5: 120\n");
    }

    #[test]
    fn test_demo_trigger_error_prints_results_first() {
        let (result, out) = run(
            Commands::Demo {
                trigger_error: true,
            },
            OutputFormat::Text,
        );
        assert!(matches!(result, Err(Error::DivisionByZero { dividend: 10 })));
        assert_eq!(out, "Fibonacci of 10: 55\nFactorial of 5: 120\n");
    }

    #[test]
    fn test_json_output() {
        let (result, out) = run(Commands::default(), OutputFormat::Json);
        result.unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["operation"], "fibonacci");
        assert_eq!(lines[0]["input"], 10);
        assert_eq!(lines[0]["result"], 55);
        assert_eq!(lines[1]["operation"], "factorial");
        assert_eq!(lines[1]["result"], 120);
    }

    #[test]
    fn test_divide_text_and_json() {
        let (result, out) = run(
            Commands::Divide {
                dividend: 17,
                divisor: 5,
            },
            OutputFormat::Text,
        );
        result.unwrap();
        assert_eq!(out, "17 / 5 = 3\n");

        let (result, out) = run(
            Commands::Divide {
                dividend: 17,
                divisor: 5,
            },
            OutputFormat::Json,
        );
        result.unwrap();
        assert_eq!(out, "{\"operation\":\"divide\",\"input\":[17,5],\"result\":3}\n");
    }

    #[test]
    fn test_factorial_checked_overflow() {
        let (result, out) = run(
            Commands::Factorial {
                n: 13,
                checked: true,
            },
            OutputFormat::Text,
        );
        assert!(matches!(result, Err(Error::Overflow { .. })));
        assert!(out.is_empty());

        let (result, out) = run(
            Commands::Factorial {
                n: 13,
                checked: false,
            },
            OutputFormat::Text,
        );
        result.unwrap();
        assert_eq!(out, "Factorial of 13: 1932053504\n");
    }

    #[test]
    fn test_fibonacci_negative_input() {
        let (result, out) = run(Commands::Fibonacci { n: -4 }, OutputFormat::Text);
        result.unwrap();
        assert_eq!(out, "Fibonacci of -4: -4\n");
    }
}
