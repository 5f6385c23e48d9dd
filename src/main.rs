// src/main.rs
mod logger;

use clap::{Parser, Subcommand, ValueEnum};
use huffcodec::symbol::{self, Symbol};
use huffcodec::{BitBuf, frame};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "huffcodec", version = "0.1.0")]
#[command(about = "Huffman compressor and decompressor for arbitrary files.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum WidthArg {
    /// One byte per symbol (default)
    #[value(name = "1")]
    W1,
    #[value(name = "2")]
    W2,
    #[value(name = "4")]
    W4,
    #[value(name = "8")]
    W8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    Encode {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// Symbol width in bytes; the input length must be a multiple of it
        #[arg(long, value_enum, default_value_t = WidthArg::W1)]
        width: WidthArg,
    },
    /// Decompress a file, to stdout when no output is given
    Decode {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = WidthArg::W1)]
        width: WidthArg,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(logger::level(cli.verbose, cli.quiet));

    let result = match cli.command {
        Commands::Encode { input, output, width } => match width {
            WidthArg::W1 => encode_file::<u8>(&input, &output),
            WidthArg::W2 => encode_file::<u16>(&input, &output),
            WidthArg::W4 => encode_file::<u32>(&input, &output),
            WidthArg::W8 => encode_file::<u64>(&input, &output),
        },
        Commands::Decode { input, output, width } => {
            let output = output.as_deref();
            match width {
                WidthArg::W1 => decode_file::<u8>(&input, output),
                WidthArg::W2 => decode_file::<u16>(&input, output),
                WidthArg::W4 => decode_file::<u32>(&input, output),
                WidthArg::W8 => decode_file::<u64>(&input, output),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn encode_file<S: Symbol>(input: &Path, output: &Path) -> huffcodec::Result<()> {
    let then = Instant::now();
    let raw = fs::read(input)?;
    let symbols = symbol::symbols_from_bytes::<S>(&raw)?;

    let bits = huffcodec::encode(&symbols)?;
    let out_file = BufWriter::new(File::create(output)?);
    frame::write_framed(&bits, out_file)?;

    let in_bits = raw.len() * 8;
    report("compressed", in_bits, bits.len(), then);
    if in_bits > 0 && bits.len() as f64 / in_bits as f64 >= 0.95 {
        warn!("dataset is either small or incompressible");
    }
    Ok(())
}

fn decode_file<S: Symbol>(input: &Path, output: Option<&Path>) -> huffcodec::Result<()> {
    let then = Instant::now();
    let in_file = BufReader::new(File::open(input)?);
    let bits: BitBuf = frame::read_framed(in_file)?;
    let symbols = huffcodec::decode::<S>(&bits)?;
    let raw = symbol::bytes_from_symbols(&symbols);

    match output {
        Some(path) => {
            fs::write(path, &raw)?;
            report("decompressed", bits.len(), raw.len() * 8, then);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&raw)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn report(action: &str, in_bits: usize, out_bits: usize, then: Instant) {
    let secs = then.elapsed().as_secs_f64();
    if in_bits == 0 {
        info!(action, out_bits, secs, "input was empty");
        return;
    }
    let ratio = out_bits as f64 / in_bits as f64;
    info!(
        "Successfully {} {} bits to {} bits ({:.2}%) (in {:.3} s).",
        action,
        in_bits,
        out_bits,
        ratio * 100.0,
        secs
    );
}
