use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use lazyseq::reduce::{prod, sum};
use lazyseq::{
    count_from_number, cumulative, cumulative_with, decimal_digits, digits, range, unique_lazy,
    zip, Number, OutputConfig,
};
use num_bigint::BigInt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lazyseq", about = "Print lazily generated number sequences")]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Text printed between values.
    #[arg(long, global = true, default_value = ", ")]
    separator: String,
    /// Print at most this many values.
    #[arg(long, global = true)]
    limit: Option<usize>,
}

impl From<OutputArgs> for OutputConfig {
    fn from(args: OutputArgs) -> Self {
        OutputConfig {
            separator: args.separator,
            limit: args.limit,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inclusive range from START to END; direction follows the bounds.
    Range {
        #[arg(allow_hyphen_values = true)]
        start: i64,
        #[arg(allow_hyphen_values = true)]
        end: i64,
        /// Step size (sign is ignored).
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        step: i64,
    },
    /// Count forever from START by STEP (printed up to --limit, default 10).
    CountFrom {
        #[arg(default_value = "0", allow_hyphen_values = true)]
        start: String,
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        step: String,
        /// Use arbitrary-precision integers even for small values.
        #[arg(long)]
        big: bool,
    },
    /// Digits of NUMBER, least significant first.
    Digits {
        #[arg(allow_hyphen_values = true)]
        number: BigInt,
        /// Base of the digits (default: 10).
        #[arg(long)]
        base: Option<BigInt>,
    },
    /// Rows of values taken in lock-step from each comma-separated list.
    Zip {
        /// Comma-separated values; repeat once per input.
        #[arg(long = "seq", required = true)]
        sequences: Vec<String>,
    },
    /// Running sum or product of VALUES.
    Cumulative {
        #[arg(value_enum)]
        reducer: Reducer,
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<i64>,
        /// Seed for the accumulator; not itself printed.
        #[arg(long, allow_hyphen_values = true)]
        init: Option<i64>,
    },
    /// VALUES with repeats removed, in first-seen order.
    Unique {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Reducer {
    Sum,
    Prod,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = OutputConfig::from(cli.output);
    debug!(?config, "output configuration");

    let rendered = match cli.command {
        Commands::Range { start, end, step } => run_range(&config, start, end, step)?,
        Commands::CountFrom { start, step, big } => run_count_from(&config, &start, &step, big)?,
        Commands::Digits { number, base } => run_digits(&config, number, base)?,
        Commands::Zip { sequences } => run_zip(&config, &sequences),
        Commands::Cumulative {
            reducer,
            values,
            init,
        } => run_cumulative(&config, reducer, values, init),
        Commands::Unique { values } => config.render(unique_lazy(values)),
    };

    println!("{rendered}");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_range(config: &OutputConfig, start: i64, end: i64, step: i64) -> Result<String> {
    let values = range(start, end, step)
        .with_context(|| format!("invalid range {start}..={end} with step {step}"))?;
    Ok(config.render(values))
}

fn run_count_from(config: &OutputConfig, start: &str, step: &str, big: bool) -> Result<String> {
    let start = parse_number(start, big)?;
    let step = parse_number(step, big)?;
    let counter = count_from_number(start, step).context("failed to create counter")?;
    Ok(config.bounded().render(counter))
}

fn parse_number(literal: &str, big: bool) -> Result<Number> {
    let number =
        Number::parse(literal).ok_or_else(|| anyhow!("'{literal}' is not an integer"))?;
    Ok(if big {
        Number::Big(number.to_big())
    } else {
        number
    })
}

fn run_digits(config: &OutputConfig, number: BigInt, base: Option<BigInt>) -> Result<String> {
    let values = match base {
        Some(base) => digits(number, base),
        None => decimal_digits(number),
    }
    .context("failed to extract digits")?;
    Ok(config.render(values))
}

fn run_zip(config: &OutputConfig, sequences: &[String]) -> String {
    let inputs: Vec<Vec<&str>> = sequences
        .iter()
        .map(|sequence| sequence.split(',').map(str::trim).collect())
        .collect();
    config.render(zip(inputs).map(|row| format!("[{}]", row.join(", "))))
}

fn run_cumulative(
    config: &OutputConfig,
    reducer: Reducer,
    values: Vec<i64>,
    init: Option<i64>,
) -> String {
    let reduce = match reducer {
        Reducer::Sum => sum::<i64>,
        Reducer::Prod => prod::<i64>,
    };
    match init {
        Some(init) => config.render(cumulative_with(reduce, values, init)),
        None => config.render(cumulative(reduce, values)),
    }
}
