mod input;

use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use num_bigint::BigInt;
use num_traits::{CheckedAdd, Num};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Reads a file holding one integer per line and prints the numbers.
#[derive(Parser, Debug)]
#[command(name = "number-file-reader", version, about)]
struct Cli {
    /// File to read, one base-10 integer per line
    #[arg(default_value = "input.txt")]
    path: PathBuf,

    /// Parse as arbitrary-precision integers instead of 32-bit
    #[arg(long)]
    big: bool,

    /// Print the sum of all numbers after the listing
    #[arg(long)]
    sum: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.big {
        let numbers: Vec<BigInt> = input::read_numbers(&cli.path)
            .with_context(|| format!("Failed to load numbers from {}", cli.path.display()))?;
        print_numbers(&numbers, cli.sum)
    } else {
        let numbers = input::read_i32_numbers(&cli.path)
            .with_context(|| format!("Failed to load numbers from {}", cli.path.display()))?;
        print_numbers(&numbers, cli.sum)
    }
}

fn print_numbers<T>(numbers: &[T], with_sum: bool) -> Result<()>
where
    T: Num + CheckedAdd + Display,
{
    info!("Loaded {} numbers", numbers.len());
    for number in numbers {
        println!("{}", number);
    }
    if with_sum {
        println!("Sum: {}", sum(numbers)?);
    }
    Ok(())
}

fn sum<T: Num + CheckedAdd>(numbers: &[T]) -> Result<T> {
    let mut total = T::zero();
    for number in numbers {
        total = total
            .checked_add(number)
            .ok_or_else(|| anyhow!("Sum overflows the integer type"))?;
    }
    Ok(total)
}
