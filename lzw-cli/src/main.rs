//! lzwc - command-line front end for the LZW dictionary codec.
//!
//! File I/O, argument parsing, and the one-line progress/ratio reports
//! live here; the actual compression algorithm is all in `lzw-core`.

mod commands;
mod utils;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{cmd_compress, cmd_decompress, cmd_roundtrip};
use lzw_core::Framing;
use std::path::PathBuf;
use utils::{default_compressed_path, default_decompressed_path};

#[derive(Parser)]
#[command(name = "lzwc")]
#[command(author, version, about = "LZW dictionary compressor")]
#[command(long_about = "
lzwc is a Pure Rust implementation of the classical LZW compression algorithm.

Examples:
  lzwc compress notes.txt
  lzwc decompress notes.txt.lzw
  lzwc roundtrip notes.txt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file (defaults to `<input>.lzw`)
        output: Option<PathBuf>,

        /// Starting code width in bits
        #[arg(short = 'i', long, default_value_t = 12)]
        initial_bits: u8,

        /// Maximum code width in bits
        #[arg(short = 'm', long, default_value_t = 12)]
        max_bits: u8,

        /// Code-stream framing
        #[arg(short, long, value_enum, default_value = "packed")]
        framing: FramingArg,

        /// Print a one-line summary
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decompress a file produced by `compress`
    #[command(alias = "d")]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Output file (defaults to stripping the `.lzw` extension)
        output: Option<PathBuf>,

        /// Print a one-line summary
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compress then decompress a file, verifying the result matches
    #[command(alias = "r")]
    Roundtrip {
        /// File to round-trip
        input: PathBuf,

        /// Starting code width in bits
        #[arg(short = 'i', long, default_value_t = 12)]
        initial_bits: u8,

        /// Maximum code width in bits
        #[arg(short = 'm', long, default_value_t = 12)]
        max_bits: u8,

        /// Code-stream framing
        #[arg(short, long, value_enum, default_value = "packed")]
        framing: FramingArg,

        /// Print a one-line summary
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Code-stream framing (for clap ValueEnum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FramingArg {
    /// Byte-aligned, fixed width per stream
    Fixed,
    /// Bit-packed, width grows with the dictionary
    Packed,
}

impl From<FramingArg> for Framing {
    fn from(arg: FramingArg) -> Self {
        match arg {
            FramingArg::Fixed => Framing::Fixed,
            FramingArg::Packed => Framing::Packed,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            initial_bits,
            max_bits,
            framing,
            verbose,
        } => {
            let output = output.unwrap_or_else(|| default_compressed_path(&input));
            cmd_compress(&input, &output, initial_bits, max_bits, framing.into(), verbose)
        }
        Commands::Decompress {
            input,
            output,
            verbose,
        } => {
            let output = output.unwrap_or_else(|| default_decompressed_path(&input));
            cmd_decompress(&input, &output, verbose)
        }
        Commands::Roundtrip {
            input,
            initial_bits,
            max_bits,
            framing,
            verbose,
        } => cmd_roundtrip(&input, initial_bits, max_bits, framing.into(), verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
