use top_totals::get_biggest_total;

use std::fs;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let input = fs::read_to_string("input.txt").context("could not read input.txt")?;

    let res = get_biggest_total(input.lines().map(|l| l.to_string()))?;

    println!("{res}");

    Ok(())
}
