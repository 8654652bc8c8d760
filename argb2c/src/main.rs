use argb2c::{bmp_to_aligned_array, bmp_to_array, bmp_to_font, default_output};
use libargb::FontCell;
use std::path::PathBuf;
use tracing::Level;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 1;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count)]
    verbosity: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// converts an ARGB8888 bitmap to a C array
    #[command(name = "array")]
    ToArray {
        /// The bitmap (ARGB8888)
        input_file: PathBuf,

        /// The output file name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// converts an ARGB8888 bitmap to a C array with a 4-byte aligned pixel array
    #[command(name = "aligned")]
    ToAlignedArray {
        /// The bitmap (ARGB8888)
        input_file: PathBuf,

        /// The output file name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// converts a strip of monospace glyphs (ARGB8888) to an anti-aliased C font
    #[command(name = "font")]
    ToFont {
        /// The bitmap (ARGB8888), all glyphs in a single row in ASCII order
        input_file: PathBuf,

        /// Glyph height, must equal the image height
        #[arg(long)]
        height: u16,

        /// Glyph width, the image width must be a multiple of it
        #[arg(long)]
        width: u16,

        /// The output file name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    let output = match cli.command {
        Commands::ToArray { input_file, output } => {
            let output = match output {
                Some(o) => o,
                None => default_output(&input_file, "h")?,
            };
            bmp_to_array(&input_file, &output)?;
            output
        }
        Commands::ToAlignedArray { input_file, output } => {
            let output = match output {
                Some(o) => o,
                None => default_output(&input_file, "h")?,
            };
            bmp_to_aligned_array(&input_file, &output)?;
            output
        }
        Commands::ToFont {
            input_file,
            height,
            width,
            output,
        } => {
            let output = match output {
                Some(o) => o,
                None => default_output(&input_file, "c")?,
            };
            let cell = FontCell::builder().width(width).height(height).build();
            bmp_to_font(&input_file, &output, cell)?;
            output
        }
    };
    println!("Output written to {}", output.display());
    Ok(())
}
