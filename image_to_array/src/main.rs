/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::info;

use image_to_array::{
    ConvertError, convert, decode_file, logger, validate_identifier, write_declaration,
};

/// Converts an image into a C++ `std::array<uint32_t, N>` of ABGR pixels.
#[derive(Parser, Debug)]
#[command(name = "image_to_array", version, about)]
struct Cli {
    /// Image to convert (PNG, BMP, ...)
    image: PathBuf,

    /// Name of the generated array
    #[arg(value_parser = parse_identifier)]
    identifier: String,

    /// Write the declaration here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_identifier(s: &str) -> Result<String, String> {
    validate_identifier(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

fn run(cli: &Cli) -> Result<(), RunError> {
    match &cli.output {
        Some(path) => {
            let packed = decode_file(&cli.image).map_err(ConvertError::from)?;
            let mut writer = BufWriter::new(File::create(path)?);
            write_declaration(&mut writer, &cli.identifier, &packed.pixels)?;
            writeln!(writer)?;
            writer.flush()?;
            report(&cli.identifier, packed.width, packed.height, path);
        }
        None => {
            let declaration = convert(&cli.image, &cli.identifier)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{declaration}")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn report(identifier: &str, width: u32, height: u32, path: &Path) {
    info!(
        "Wrote {}x{} image ({} pixels) as {} to {}",
        width,
        height,
        width as u64 * height as u64,
        identifier,
        path.display()
    );
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(logger::level_for_verbosity(cli.verbose)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
