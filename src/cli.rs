//! Argument parsing, file I/O, and reporting for the command-line driver.
//!
//! Generalizes the teacher's small standalone driver binaries
//! (`examples/better.rs`, `examples/delz4.rs`, `examples/dolz4.rs` — each
//! opens two files and runs one codec operation) into a single binary with a
//! command selector, matching the `-encode`/`-decode` surface of the
//! original C driver's `main`.

use std::fs;
use std::time::{Duration, Instant};

use crate::error::DriverError;
use crate::{compress, decompress};

pub enum Mode {
    Encode,
    Decode,
}

pub struct Args {
    pub mode: Mode,
    pub input_path: String,
    pub output_path: String,
}

/// Parse `argv` (including the program name at index 0). Any shape other
/// than `<prog> -encode <in> <out>` or `<prog> -decode <in> <out>` is
/// [`DriverError::Usage`].
pub fn parse_args(argv: &[String]) -> Result<Args, DriverError> {
    if argv.len() != 4 {
        return Err(DriverError::Usage);
    }
    let mode = match argv[1].as_str() {
        "-encode" => Mode::Encode,
        "-decode" => Mode::Decode,
        _ => return Err(DriverError::Usage),
    };
    Ok(Args {
        mode,
        input_path: argv[2].clone(),
        output_path: argv[3].clone(),
    })
}

pub fn print_usage(program: &str) {
    eprintln!("Usage for compression:   {} -encode <input file> <output file>", program);
    eprintln!("Usage for decompression: {} -decode <input file> <output file>", program);
}

/// Run the selected operation end to end: read the whole input file, run the
/// codec, write the whole output file, report timing.
pub fn run(args: &Args) -> Result<(), DriverError> {
    match args.mode {
        Mode::Encode => run_encode(&args.input_path, &args.output_path),
        Mode::Decode => run_decode(&args.input_path, &args.output_path),
    }
}

fn run_encode(input_path: &str, output_path: &str) -> Result<(), DriverError> {
    let input = fs::read(input_path).map_err(DriverError::InputUnreadable)?;

    let start = Instant::now();
    let compressed = compress(&input);
    let elapsed = start.elapsed();

    fs::write(output_path, &compressed).map_err(DriverError::OutputUnwritable)?;

    let raw_size = input.len();
    let compressed_size = compressed.len();
    let ratio = if compressed_size == 0 {
        0.0
    } else {
        raw_size as f64 / compressed_size as f64
    };

    println!("raw_size={}", raw_size);
    println!("compressed_size={}", compressed_size);
    println!("ratio={:.2}", ratio);
    println!("throughput_mb_s={:.2}", throughput_mb_per_sec(raw_size, elapsed));
    Ok(())
}

fn run_decode(input_path: &str, output_path: &str) -> Result<(), DriverError> {
    let input = fs::read(input_path).map_err(DriverError::InputUnreadable)?;

    let start = Instant::now();
    let output = decompress(&input)?;
    let elapsed = start.elapsed();

    fs::write(output_path, &output).map_err(DriverError::OutputUnwritable)?;

    println!("compressed_size={}", input.len());
    println!("raw_size={}", output.len());
    println!("throughput_mb_s={:.2}", throughput_mb_per_sec(output.len(), elapsed));
    Ok(())
}

fn throughput_mb_per_sec(bytes: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return 0.0;
    }
    (bytes as f64 / (1024.0 * 1024.0)) / secs
}
