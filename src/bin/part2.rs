use top_totals::{get_biggest_totals, get_group_totals};

use std::fs;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let input = fs::read_to_string("input.txt").context("could not read input.txt")?;

    let totals = get_group_totals(input.lines().map(|l| l.to_string()))?;
    let top = get_biggest_totals(&totals, 3);

    println!("{top:?}");
    println!("{}", top.iter().sum::<i64>());

    Ok(())
}
