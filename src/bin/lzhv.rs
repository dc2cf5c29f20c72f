//! lzhv CLI - LZ77 compression with linear or hash-chain match finding.

use clap::{Parser, Subcommand};
use lzhv::stats::{Comparison, RunStats, format_bytes, measure};
use lzhv::{Params, Strategy, decompress, decompress_strict};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Extension appended to compressed files.
const COMPRESSED_EXT: &str = "lz77";

#[derive(Parser)]
#[command(name = "lzhv")]
#[command(author, version, about = "LZ77 compressor with linear and hash-chain match finding")]
#[command(long_about = "
Compresses files into a flat stream of 4-byte LZ77 tokens.

Examples:
  lzhv compress book.txt
  lzhv compress book.txt --finder linear -w 1024
  lzhv decompress book.txt.lz77
  lzhv compare book.txt notes.txt --json
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

        /// Output file (defaults to <INPUT>.lz77)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Match finder to use
        #[arg(short, long, value_enum, default_value_t = Strategy::HashChain)]
        finder: Strategy,

        #[command(flatten)]
        params: ParamArgs,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Decompress a .lz77 file
    #[command(alias = "d")]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Output file (defaults to <INPUT without .lz77>_decoded)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compress files with both match finders and compare the results
    Compare {
        /// Files to compress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        params: ParamArgs,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct ParamArgs {
    /// Search window size in bytes
    #[arg(short, long, default_value_t = lzhv::compress::DEFAULT_WINDOW_SIZE)]
    window: u16,

    /// Maximum match length
    #[arg(short, long, default_value_t = lzhv::compress::DEFAULT_LOOKAHEAD_SIZE)]
    lookahead: u8,
}

impl From<&ParamArgs> for Params {
    fn from(args: &ParamArgs) -> Self {
        Params::new(args.window, args.lookahead)
    }
}

#[derive(Serialize)]
struct RunReport {
    file: String,
    finder: Strategy,
    original_size: usize,
    compressed_size: usize,
    token_count: usize,
    ratio_percent: f64,
    time_ms: f64,
}

impl RunReport {
    fn new(file: &Path, stats: &RunStats) -> Self {
        Self {
            file: file.display().to_string(),
            finder: stats.strategy,
            original_size: stats.original_size,
            compressed_size: stats.compressed_size,
            token_count: stats.token_count,
            ratio_percent: stats.ratio_percent(),
            time_ms: stats.elapsed_ms(),
        }
    }
}

#[derive(Serialize)]
struct ComparisonReport {
    linear: RunReport,
    hash_chain: RunReport,
    speedup: f64,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            finder,
            params,
            json,
        } => cmd_compress(&input, output, finder, (&params).into(), json),
        Commands::Decompress { input, output } => cmd_decompress(&input, output),
        Commands::Compare {
            files,
            params,
            json,
        } => cmd_compare(&files, (&params).into(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(
    input: &Path,
    output: Option<PathBuf>,
    finder: Strategy,
    params: Params,
    json: bool,
) -> CliResult {
    let data = lzhv::fs::read_file(input)?;
    let (compressed, stats) = measure(&data, params, finder);

    let output = output.unwrap_or_else(|| compressed_path(input));
    lzhv::fs::write_file(&output, &compressed.data)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&RunReport::new(input, &stats))?);
        return Ok(());
    }

    println!("Original Size:   {} bytes", stats.original_size);
    println!("Method:          {}", finder);
    println!("Time Taken:      {:.2} ms", stats.elapsed_ms());
    println!("Compressed Size: {} bytes", stats.compressed_size);
    println!("Tokens Created:  {}", stats.token_count);
    if stats.is_worthwhile() {
        println!(
            "Reduced size to {:.2}% (saved {:.2}%)",
            stats.ratio_percent(),
            stats.saved_percent()
        );
    } else {
        println!(
            "File grew larger ({:.2}%), which is normal for small or random files",
            stats.ratio_percent()
        );
    }
    println!("Saved to:        {}", output.display());
    Ok(())
}

fn cmd_decompress(input: &Path, output: Option<PathBuf>) -> CliResult {
    let data = lzhv::fs::read_file(input)?;

    let started = Instant::now();
    let mut restored = Vec::new();
    decompress(&data, &mut restored);
    let elapsed = started.elapsed();

    let output = output.unwrap_or_else(|| decoded_path(input));
    lzhv::fs::write_file(&output, &restored)?;

    println!("Time Taken:      {:.2} ms", elapsed.as_secs_f64() * 1000.0);
    println!("Restored Size:   {} bytes", restored.len());
    println!("Saved to:        {}", output.display());
    Ok(())
}

fn cmd_compare(files: &[PathBuf], params: Params, json: bool) -> CliResult {
    let mut reports = Vec::with_capacity(files.len());

    for (idx, file) in files.iter().enumerate() {
        if !json {
            println!("[{}/{}] Processing: {}", idx + 1, files.len(), file.display());
        }

        let data = lzhv::fs::read_file(file)?;
        let (linear_out, linear) = measure(&data, params, Strategy::Linear);
        let (hash_out, hash_chain) = measure(&data, params, Strategy::HashChain);

        for compressed in [&linear_out, &hash_out] {
            let mut restored = Vec::new();
            decompress_strict(&compressed.data, &mut restored)?;
            if restored != data {
                return Err(format!("round-trip mismatch for {}", file.display()).into());
            }
        }

        let cmp = Comparison { linear, hash_chain };
        if json {
            reports.push(ComparisonReport {
                linear: RunReport::new(file, &cmp.linear),
                hash_chain: RunReport::new(file, &cmp.hash_chain),
                speedup: cmp.speedup(),
            });
            continue;
        }

        println!("  Original: {}", format_bytes(linear.original_size as u64));
        println!(
            "  Linear:   {} ({:.2}%) in {:.2}ms",
            format_bytes(linear.compressed_size as u64),
            linear.ratio_percent(),
            linear.elapsed_ms()
        );
        println!(
            "  Hash:     {} ({:.2}%) in {:.2}ms",
            format_bytes(hash_chain.compressed_size as u64),
            hash_chain.ratio_percent(),
            hash_chain.elapsed_ms()
        );
        println!("  Speedup:  {:.2}x faster with hash", cmp.speedup());
        println!();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

/// `<input>.lz77`
fn compressed_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(COMPRESSED_EXT);
    PathBuf::from(name)
}

/// `book.txt.lz77` becomes `book.txt_decoded`.
fn decoded_path(input: &Path) -> PathBuf {
    let stem = if input.extension().is_some_and(|ext| ext == COMPRESSED_EXT) {
        input.with_extension("")
    } else {
        input.to_path_buf()
    };
    let mut name = stem.into_os_string();
    name.push("_decoded");
    PathBuf::from(name)
}
