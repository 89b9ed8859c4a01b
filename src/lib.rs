use anyhow::{Context, Result};
use itertools::Itertools;

#[derive(thiserror::Error, Debug)]
#[error("line is neither blank nor an integer: {0:?}")]
pub struct MalformedLine(String);

pub fn get_group_totals(input: impl Iterator<Item = String>) -> Result<Vec<i64>> {
    let mut totals = Vec::new();
    let mut current: Option<i64> = None;

    for line in input {
        if line.is_empty() {
            totals.push(current.take().unwrap_or(0));
        } else {
            let value: i64 = line.parse().map_err(|_| MalformedLine(line.clone()))?;
            *current.get_or_insert(0) += value;
        }
    }

    // The last group has no trailing delimiter unless the file ends with one.
    if let Some(last) = current {
        totals.push(last);
    }

    Ok(totals)
}

pub fn get_biggest_totals(totals: &[i64], n: usize) -> Vec<i64> {
    totals
        .iter()
        .copied()
        .sorted()
        .skip(totals.len().saturating_sub(n))
        .collect()
}

pub fn get_biggest_total(input: impl Iterator<Item = String>) -> Result<i64> {
    get_group_totals(input)?
        .into_iter()
        .max()
        .context("no groups in input")
}
