use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use libargb::{as_c_array, Argb8888Bitmap, CArray, FontCell, FontExtractor};
use tracing::{debug, info, instrument};

/// Builds the default output path: `<stem>.<extension>` in the directory of `input`
pub fn default_output(input: &Path, extension: &str) -> Result<PathBuf> {
    let mut output = PathBuf::new();
    let Some(dir) = input.parent() else {
        bail!("Invalid bitmap file: {}", input.display());
    };
    output.push(dir);
    output.push(format!("{}.{extension}", file_stem(input)?));
    info!("output name: {}", output.display());
    Ok(output)
}

fn file_stem(input: &Path) -> Result<&str> {
    let Some(Some(stem)) = input.file_stem().map(|os| os.to_str()) else {
        bail!("Invalid bitmap file: {}", input.display());
    };
    Ok(stem)
}

fn read_bitmap(input: &Path) -> Result<Argb8888Bitmap> {
    let bitmap = Argb8888Bitmap::from_file(input)
        .with_context(|| format!("Failed to read bitmap {}", input.display()))?;
    debug!(
        "Read {}x{} bitmap, {} pixel bytes",
        bitmap.width(),
        bitmap.height(),
        bitmap.pixel_array().len()
    );
    Ok(bitmap)
}

// the text is complete before the file is touched
fn write_output(output_name: &Path, content: &str) -> Result<()> {
    let output = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(output_name)
        .with_context(|| format!("Failed to open {}", output_name.display()))?;
    let mut output = BufWriter::new(output);
    output
        .write_all(content.as_bytes())
        .context("Write C source to file")?;
    output.flush()?;
    info!(
        "Successfully wrote {} bytes to {}",
        content.len(),
        output_name.display()
    );
    Ok(())
}

/// Converts a bitmap into a C header holding the file verbatim
#[instrument]
pub fn bmp_to_array(input: &Path, output_name: &Path) -> Result<()> {
    let bitmap = read_bitmap(input)?;
    let array = as_c_array(&bitmap, file_stem(input)?)?;
    write_output(output_name, &array)
}

/// Converts a bitmap into a C header whose pixel array is 4-byte aligned
#[instrument]
pub fn bmp_to_aligned_array(input: &Path, output_name: &Path) -> Result<()> {
    let bitmap = read_bitmap(input)?;
    let aligned = bitmap.aligned()?;
    debug!("Added {} byte(s) to the gap", aligned.delta());
    let array = CArray::render(&aligned, file_stem(input)?)?;
    write_output(output_name, &array)
}

/// Converts a strip of monospace glyphs into an anti-aliased C font table
#[instrument]
pub fn bmp_to_font(input: &Path, output_name: &Path, cell: FontCell) -> Result<()> {
    let bitmap = read_bitmap(input)?;
    let font = FontExtractor::new(&bitmap, cell)?;
    info!("Extracting {} glyphs", font.n_glyphs());
    let table = font.as_c_font(file_stem(input)?)?;
    write_output(output_name, &table)
}
