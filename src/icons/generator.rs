use image::{imageops::FilterType, DynamicImage, ImageFormat, ImageReader};
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use super::error::IconError;
use super::sizes::icon_path;

/// Create the output directory (and any missing parents) if it isn't there yet
pub fn ensure_output_dir(output_dir: &Path) -> Result<(), IconError> {
    fs::create_dir_all(output_dir)?;
    Ok(())
}

/// Generate one square PNG icon per size from the master image
///
/// Sizes are processed in order and each icon is fully written before the
/// next resize starts. The first failure aborts the remaining sizes.
/// Existing icons with the same name are overwritten.
///
/// # Returns
/// * `Ok(())` - One `icon-<size>x<size>.png` per size was written
/// * `Err(IconError::SourceNotFound)` - The master image doesn't exist
/// * `Err(_)` - Any other decode, encode or I/O failure
pub fn generate_icons(
    source_path: &Path,
    output_dir: &Path,
    sizes: &[u32],
) -> Result<(), IconError> {
    let source = open_source(source_path)?;

    for &size in sizes {
        let path = icon_path(output_dir, size);
        write_icon(&source, size, &path)?;
        println!("{}", created_line(&path));
    }

    Ok(())
}

/// Status line printed after an icon is written
pub fn created_line(path: &Path) -> String {
    format!("✅ Created: {}", path.display())
}

/// Open and decode the master image
///
/// The format is sniffed from the file content, not the extension.
/// The file handle is closed before this returns, on every path.
fn open_source(source_path: &Path) -> Result<DynamicImage, IconError> {
    let file = File::open(source_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IconError::SourceNotFound {
            path: source_path.to_path_buf(),
        },
        _ => IconError::Io(e),
    })?;

    let image = ImageReader::new(BufReader::new(file))
        .with_guessed_format()?
        .decode()?;

    Ok(image)
}

/// Resize the full source to exactly `size` x `size` and save it as PNG
///
/// Aspect ratio is not preserved: non-square sources are stretched.
fn write_icon(source: &DynamicImage, size: u32, path: &Path) -> Result<(), IconError> {
    let resized = source.resize_exact(size, size, FilterType::Lanczos3);
    resized.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
