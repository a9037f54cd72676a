//! calc-demo - A small recursive calculator to step through in a debugger
//!
//! Running it with no arguments prints fibonacci(10) and factorial(5).

use calc_demo::calculator::Calculator;
use calc_demo::cli::{self, OutputFormat};
use calc_demo::commands::Commands;
use calc_demo::common::{config::Config, logging, Result};
use clap::Parser;

#[derive(Parser)]
#[command(name = "calc-demo", about = "Recursive calculator demo for debugger walkthroughs")]
#[command(version, long_about = None)]
struct Cli {
    /// Display precision (overrides the config file)
    #[arg(long, global = true, allow_negative_numbers = true)]
    precision: Option<i32>,

    /// Print one JSON object per result
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let calc = Calculator::new(Config::resolve_precision(cli.precision));
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::dispatch(cli.command.unwrap_or_default(), &calc, format, &mut out)
}
