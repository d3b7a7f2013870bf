//! Decrypt the grove coordinates: `grove <path-to-input>`.

use anyhow::Context;
use handheld::grove::{grove_coordinates, Decryption};
use handheld::input::{parse_numbers, read_input};
use handheld::Part;
use strum::VariantArray;

fn main() -> anyhow::Result<()> {
    let path = solver::start();

    let numbers = parse_numbers(&read_input(&path))
        .with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!(count = numbers.len(), "read encrypted file");

    for part in Part::VARIANTS {
        println!("{} result: {}", part, grove_coordinates(&numbers, Decryption::for_part(*part)));
    }

    Ok(())
}
