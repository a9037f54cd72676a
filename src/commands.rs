//! CLI command definitions
//!
//! Defines the clap commands for the calculator demo.

use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the fixed demo: fibonacci(10) and factorial(5)
    Demo {
        /// Divide 10 by zero after the demo to exercise the error path
        #[arg(long)]
        trigger_error: bool,
    },

    /// Compute the n-th Fibonacci number (naive recursion)
    #[command(alias = "fib")]
    Fibonacci {
        /// Input; values <= 1 are returned unchanged
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },

    /// Compute n! (recursive, wraps on overflow unless --checked)
    #[command(alias = "fact")]
    Factorial {
        /// Input; values <= 1 yield 1
        #[arg(allow_negative_numbers = true)]
        n: i32,

        /// Report overflow as an error instead of wrapping
        #[arg(long)]
        checked: bool,
    },

    /// Integer division truncating toward zero
    Divide {
        #[arg(allow_negative_numbers = true)]
        dividend: i32,

        #[arg(allow_negative_numbers = true)]
        divisor: i32,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Demo {
            trigger_error: false,
        }
    }
}
