//! `compress` command implementation.

use crate::utils::{format_duration, format_ratio, format_size};
use lzw_core::Framing;
use std::path::Path;
use std::time::Instant;

#[allow(clippy::too_many_arguments)]
pub fn cmd_compress(
    input: &Path,
    output: &Path,
    initial_bits: u8,
    max_bits: u8,
    framing: Framing,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    log::debug!("read {} bytes from {}", data.len(), input.display());

    let started = Instant::now();
    let container = lzw_core::compress_to_container(&data, initial_bits, max_bits, framing)?;
    let elapsed = started.elapsed();

    std::fs::write(output, &container)?;

    if verbose {
        println!(
            "{} -> {} ({} -> {}, {} saved, {})",
            input.display(),
            output.display(),
            format_size(data.len() as u64),
            format_size(container.len() as u64),
            format_ratio(data.len() as u64, container.len() as u64),
            format_duration(elapsed),
        );
    }

    Ok(())
}
