use std::{fs, path::PathBuf};

use anyhow::{ensure, Result};
use bitbuf::BitBuffer;
use clap::Parser;

#[derive(Parser)]
struct Args {
    /// Path to the file to load
    input_file: PathBuf,

    /// Print the contents as hex words instead of binary
    #[clap(short = 'x', long)]
    hex: bool,

    /// Report every offset of a bit pattern, given as a string of 0s and 1s
    #[clap(short, long)]
    find: Option<String>,

    /// Extract a field starting at this bit offset
    #[clap(short, long)]
    offset: Option<usize>,

    /// Field width in bits for --offset
    #[clap(short, long, default_value_t = 32)]
    bits: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = fs::read(&args.input_file)?;
    let buffer = BitBuffer::from(&raw[..]);
    println!("{} bits ({} bytes)", buffer.len(), buffer.byte_size());

    if args.hex {
        println!("{}", buffer.dump_hex());
    } else {
        println!("{}", buffer.dump());
    }

    if let Some(pattern) = args.find {
        ensure!(
            !pattern.is_empty() && pattern.bytes().all(|c| c == b'0' || c == b'1'),
            "Pattern must be a non-empty string of 0s and 1s"
        );
        ensure!(pattern.len() <= 64, "Patterns are limited to 64 bits");

        let value = u64::from_str_radix(&pattern, 2)?;
        let offsets = buffer.find(value, pattern.len())?;
        println!("{} occurrences of {pattern}: {offsets:?}", offsets.len());
    }

    if let Some(offset) = args.offset {
        ensure!(args.bits <= 64, "Fields are limited to 64 bits");
        let value = buffer.get_bits::<u64>(offset, args.bits)?;
        println!("{} bits at offset {offset}: {value:#x}", args.bits);
    }

    Ok(())
}
