//! Find the start-of-packet and start-of-message markers: `signal <path-to-input>`.

use anyhow::Context;
use handheld::input::{first_line, read_input};
use handheld::signal::{find_marker, marker_size};
use handheld::Part;
use strum::VariantArray;

fn main() -> anyhow::Result<()> {
    let path = solver::start();

    let input = read_input(&path);
    let datastream = first_line(&input);
    tracing::info!(len = datastream.len(), "read datastream");

    for part in Part::VARIANTS {
        let marker = find_marker(datastream, marker_size(*part))
            .with_context(|| format!("scanning {} for the {} marker", path.display(), part))?;
        match marker {
            Some(end) => println!("{} result: {}", part, end),
            None => println!("{} result: -1", part),
        }
    }

    Ok(())
}
