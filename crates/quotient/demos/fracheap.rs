//! Interactive fraction block demo.
//!
//! Asks for a count and that many numerator/denominator pairs on stdin,
//! inverts every fraction and prints the block, then shows unreduced
//! addition.
//!
//! Run with: cargo run --example fracheap
//! Set `RUST_LOG=debug` to see the collection lifecycle.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use quotient::prelude::*;

fn run<R: BufRead, W: Write>(input: R, prompt: W) -> Result<()> {
    let mut source = LineSource::with_prompt(input, prompt);

    let count = source.read_count()?;
    let mut fractions = FractionCollection::allocate(count)?;
    fractions.populate(&mut source)?;
    fractions.invert_all();
    print!("{}", fractions.listing());
    fractions.release();

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::try_init().map_err(anyhow::Error::msg)?;

    run(io::stdin().lock(), io::stdout())?;

    let f1 = Fraction::new(1, 2);
    let f2 = Fraction::new(3, 5);
    let f3 = add(f1, f2)?;
    println!("{f1} + {f2} = {f3}");

    Ok(())
}
