//! The `fracdrill solve` command.

use anyhow::{Context, Result};

use fracdrill_core::{compute, MixedNumber, Operator};

pub fn execute(left: &str, operator: &str, right: &str) -> Result<()> {
    let left: MixedNumber = left
        .parse()
        .with_context(|| format!("invalid left operand '{left}'"))?;
    let operator: Operator = operator.parse()?;
    let right: MixedNumber = right
        .parse()
        .with_context(|| format!("invalid right operand '{right}'"))?;

    tracing::debug!(%left, %operator, %right, "solving");
    println!("{}", compute(&left, operator, &right)?);
    Ok(())
}
