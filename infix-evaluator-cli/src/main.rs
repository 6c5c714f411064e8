use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use infix_evaluator::interpreter::{evaluate, tokens_to_string, Evaluation};
use log::{debug, info};
use std::io::{self, BufRead, Write};

/// Evaluates arithmetic expressions, showing their tokens and postfix form
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Reads expressions from standard input when left out.
    /// Put `--` before an expression that starts with a minus sign
    expression: Option<String>,

    /// Number of decimals to print for results that are not whole numbers
    #[clap(short, long)]
    precision: Option<usize>,

    /// Only print the result, not the tokens and postfix form
    #[clap(long)]
    result_only: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(Debug, Default)]
struct OutputOptions {
    precision: Option<usize>,
    result_only: bool,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let options = OutputOptions {
        precision: args.precision,
        result_only: args.result_only,
    };
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match args.expression {
        Some(expression) => {
            let evaluation = evaluate(&expression)
                .with_context(|| format!("could not evaluate expression {:?}", expression))?;
            print_evaluation(&mut output, &evaluation, &options)
        }
        None => {
            let stdin = io::stdin();
            run_interactive(stdin.lock(), &mut output, &options)
        }
    }
}

/// Reads one expression per line until `q` or the end of input, printing the
/// evaluation of each one. Failed evaluations are reported and skipped.
fn run_interactive(
    input: impl BufRead,
    output: &mut impl Write,
    options: &OutputOptions,
) -> Result<()> {
    writeln!(output, "Expression Calculator (infix -> postfix -> evaluate)")?;
    writeln!(output, "Supports +  -  *  /  ^  and parentheses, plus unary minus.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "\nEnter expression (or 'q' to quit): ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line.context("could not read expression")?,
            None => break,
        };
        let expression = line.trim();
        if expression.eq_ignore_ascii_case("q") {
            break;
        }

        debug!("Evaluating {:?}", expression);
        match evaluate(expression) {
            Ok(evaluation) => print_evaluation(output, &evaluation, options)?,
            Err(error) => writeln!(output, "Error: {}", error)?,
        }
    }

    info!("Leaving interactive mode");
    Ok(())
}

fn print_evaluation(
    output: &mut impl Write,
    evaluation: &Evaluation,
    options: &OutputOptions,
) -> Result<()> {
    if !options.result_only {
        writeln!(output, "Tokens:  {}", tokens_to_string(&evaluation.tokens)?)?;
        writeln!(output, "Postfix: {}", tokens_to_string(&evaluation.postfix)?)?;
    }
    writeln!(output, "Result:  {}", format_value(evaluation, options.precision))?;
    Ok(())
}

/// Whole numbers are printed without a decimal point.
fn format_value(evaluation: &Evaluation, precision: Option<usize>) -> String {
    let value = evaluation.value;
    if evaluation.is_integral() {
        // Avoid printing "-0".
        let value = if value == 0.0 { 0.0 } else { value };
        return format!("{:.0}", value);
    }
    match precision {
        Some(decimals) => format!("{:.*}", decimals, value),
        None => value.to_string(),
    }
}
