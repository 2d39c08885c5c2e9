//! Subcommand implementations.

use anyhow::{Context, Result};
use tracing::info;

use tally::dice::{Characteristic, DiceSpec, OddsEngine, PoolDisplay, RollSummary};
use tally::rings::{Q, Z};

pub fn odds(engine: &OddsEngine, target: i64, pool: &[DiceSpec]) -> Result<()> {
    let odds = engine
        .odds(pool, target)
        .with_context(|| format!("computing odds for {}", PoolDisplay(pool)))?;

    println!("Pool: {}", PoolDisplay(pool));
    println!(
        "Chance of rolling {target} or more: {:.2}% ({})",
        odds.at_or_above_percent(),
        odds.at_or_above()
    );
    println!(
        "Chance of rolling below {target}: {:.2}% ({})",
        odds.below_percent(),
        odds.below()
    );
    Ok(())
}

pub fn distribution(engine: &OddsEngine, pool: &[DiceSpec]) -> Result<()> {
    let counts = engine
        .outcome_counts(pool)
        .with_context(|| format!("building distribution for {}", PoolDisplay(pool)))?;
    let total = counts.coeff_sum();

    let mean = pool
        .iter()
        .map(DiceSpec::expected_sum)
        .fold(Q::from_integer(0), |acc, e| acc + e);

    println!(
        "Pool: {}  (mean {:.2}, {total} outcomes)",
        PoolDisplay(pool),
        mean.to_f64()
    );
    println!("{:>6}  {:>16}  {:>9}", "sum", "ways", "percent");
    for (sum, ways) in counts.iter() {
        let percent = Q::from_ratio(&(ways.clone() * Z::new(100)), &total);
        println!("{sum:>6}  {:>16}  {:>8.3}%", ways.to_string(), percent.to_f64());
    }
    Ok(())
}

pub fn summary(engine: &OddsEngine, characteristics: &[Characteristic]) -> Result<()> {
    match RollSummary::from_characteristics(engine, characteristics)
        .context("summarizing characteristics")?
    {
        Some(summary) => println!("{summary}"),
        None => info!("all rolls are zero, nothing to summarize"),
    }
    Ok(())
}
