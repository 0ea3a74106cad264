use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, Level};

#[derive(Parser)]
#[command(name = "acz", about = "Adaptive arithmetic coder")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    Compress {
        /// Input file
        file: PathBuf,
        /// Output file (default: <file>.ac)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decompress a .ac file
    Decompress {
        /// Input file
        file: PathBuf,
        /// Output file (default: strip .ac extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compress and decompress a file in memory and report the ratio
    Roundtrip {
        /// Input file
        file: PathBuf,
    },
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("reading {}", path.display()))
}

fn write(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = data.len(), "written");
    Ok(())
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    path.with_file_name(name)
}

fn compress(file: &Path, output: Option<PathBuf>) -> Result<()> {
    let data = read(file)?;
    let encoded = ac::encode(&data);
    let out_path = output.unwrap_or_else(|| with_suffix(file, ".ac"));
    write(&out_path, &encoded)
}

fn decompress(file: &Path, output: Option<PathBuf>) -> Result<()> {
    let data = read(file)?;
    let decoded = ac::decode(&data).with_context(|| format!("decoding {}", file.display()))?;
    let out_path = output.unwrap_or_else(|| match file.extension() {
        Some(ext) if ext == "ac" => file.with_extension(""),
        _ => with_suffix(file, ".out"),
    });
    write(&out_path, &decoded)
}

fn roundtrip(file: &Path) -> Result<()> {
    let data = read(file)?;

    let start = Instant::now();
    let encoded = ac::encode(&data);
    let encode_time = start.elapsed();

    let start = Instant::now();
    let decoded = ac::decode(&encoded)?;
    let decode_time = start.elapsed();

    let ratio = if data.is_empty() {
        0.0
    } else {
        encoded.len() as f64 * 100.0 / data.len() as f64
    };
    println!(
        "{} -> {} bytes ({:.1}%), encode {:.3}s, decode {:.3}s",
        data.len(),
        encoded.len(),
        ratio,
        encode_time.as_secs_f64(),
        decode_time.as_secs_f64()
    );

    if decoded != data {
        bail!(
            "decoded {} bytes do not match the {} original bytes",
            decoded.len(),
            data.len()
        );
    }
    println!("Success: decoded data matches the original");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Compress { file, output } => compress(&file, output),
        Commands::Decompress { file, output } => decompress(&file, output),
        Commands::Roundtrip { file } => roundtrip(&file),
    };

    if let Err(e) = result {
        error!(error = %format!("{e:#}"), "acz failed");
        std::process::exit(1);
    }
}
