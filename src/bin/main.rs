use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use qfixed::{Error, FixedPoint, Number, QFormat};

/// Evaluate a single operation on binary fixed point numbers.
#[derive(Parser)]
#[command(version, author)]
struct Opts {
    /// Left operand, an integer, decimal (`-3.25`) or fraction (`1/3`)
    #[arg(allow_hyphen_values = true)]
    lhs: String,
    /// Operator to apply
    operator: Operator,
    /// Right operand
    #[arg(allow_hyphen_values = true)]
    rhs: String,
    /// Format of the operands, like `Q8.8`; without it, operands have to be exactly representable
    #[arg(short, long)]
    qformat: Option<QFormat>,
}

#[derive(Copy, Clone, ValueEnum)]
enum Operator {
    #[value(name = "+")]
    Add,
    #[value(name = "-")]
    Subtract,
    #[value(name = "*")]
    Multiply,
    #[value(name = "/")]
    Divide,
    #[value(name = "//")]
    FloorDivide,
    #[value(name = "%")]
    Modulo,
    #[value(name = "**")]
    Power,
}

fn operand(text: &str, qformat: Option<&QFormat>) -> Result<FixedPoint, Error> {
    let value = text.parse::<Number>()?;
    let operand = FixedPoint::construct(value, qformat)?;
    debug!(text, value = %operand, qformat = %operand.qformat(), "operand");
    Ok(operand)
}

fn evaluate(opts: &Opts) -> Result<Number, Error> {
    let lhs = operand(&opts.lhs, opts.qformat.as_ref())?;
    let rhs = operand(&opts.rhs, opts.qformat.as_ref())?;

    match opts.operator {
        Operator::Add => lhs.checked_add(rhs),
        Operator::Subtract => lhs.checked_sub(rhs),
        Operator::Multiply => lhs.checked_mul(rhs),
        Operator::Divide => lhs.checked_div(rhs),
        Operator::FloorDivide => lhs.floor_div(rhs).map(Number::Integer),
        Operator::Modulo => lhs.modulo(rhs),
        Operator::Power => lhs.checked_pow(rhs),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts: Opts = Opts::parse();

    match evaluate(&opts) {
        Ok(Number::FixedPoint(value)) => {
            println!("{value} ({})", value.qformat());
            ExitCode::SUCCESS
        },
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
    }
}
