//! `decompress` command implementation.

use crate::utils::{format_duration, format_size};
use std::path::Path;
use std::time::Instant;

pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let container = std::fs::read(input)?;
    log::debug!("read {} bytes from {}", container.len(), input.display());

    let started = Instant::now();
    let data = lzw_core::decompress_from_container(&container)?;
    let elapsed = started.elapsed();

    std::fs::write(output, &data)?;

    if verbose {
        println!(
            "{} -> {} ({} -> {}, {})",
            input.display(),
            output.display(),
            format_size(container.len() as u64),
            format_size(data.len() as u64),
            format_duration(elapsed),
        );
    }

    Ok(())
}
