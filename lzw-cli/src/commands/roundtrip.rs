//! `roundtrip` command implementation: compress then immediately
//! decompress, verifying the result is byte-identical to the input.
//!
//! Mirrors the reference tool's default workflow of writing both the
//! compressed file and a `decompressed.<ext>` sibling in one pass.

use crate::utils::{format_duration, format_ratio, format_size};
use lzw_core::Framing;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[allow(clippy::too_many_arguments)]
pub fn cmd_roundtrip(
    input: &Path,
    initial_bits: u8,
    max_bits: u8,
    framing: Framing,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;

    let started = Instant::now();
    let container = lzw_core::compress_to_container(&data, initial_bits, max_bits, framing)?;
    let decompressed = lzw_core::decompress_from_container(&container)?;
    let elapsed = started.elapsed();

    let decompressed_path = decompressed_sibling_path(input);
    std::fs::write(&decompressed_path, &decompressed)?;

    if decompressed != data {
        return Err(format!(
            "round trip mismatch: {} bytes in, {} bytes out after decode",
            data.len(),
            decompressed.len()
        )
        .into());
    }

    if verbose {
        println!(
            "{} round-tripped clean ({} -> {} compressed, {} saved, {})",
            input.display(),
            format_size(data.len() as u64),
            format_size(container.len() as u64),
            format_ratio(data.len() as u64, container.len() as u64),
            format_duration(elapsed),
        );
    } else {
        println!("OK");
    }

    Ok(())
}

fn decompressed_sibling_path(input: &Path) -> PathBuf {
    let ext = input.extension().map(|e| e.to_string_lossy().into_owned());
    match ext {
        Some(ext) => PathBuf::from(format!("decompressed.{ext}")),
        None => PathBuf::from("decompressed"),
    }
}
