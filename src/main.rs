//! Icon generator for the web app manifest
//!
//! Resizes `GenerateIcons/master-icon.png` into every manifest icon size
//! and writes the PNGs to `public/icons/`. Run from the web app root.

mod config;
mod icons;

use config::GeneratorConfig;
use icons::error::IconError;
use icons::generator::{ensure_output_dir, generate_icons};

/// Run one generation pass
///
/// The output directory is created first, even if the source turns out
/// to be missing. A missing source is reported and swallowed; any other
/// error is returned to the caller.
fn run(config: &GeneratorConfig) -> Result<(), IconError> {
    ensure_output_dir(&config.output_dir)?;

    match generate_icons(&config.source_path, &config.output_dir, &config.sizes) {
        Ok(()) => Ok(()),
        Err(e) if e.is_source_not_found() => {
            println!("{}", error_line(&e));
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Status line printed when generation stops on a reported error
fn error_line(err: &IconError) -> String {
    format!("❌ Error: {}", err)
}

fn main() -> Result<(), IconError> {
    run(&GeneratorConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_in(tmp: &TempDir) -> GeneratorConfig {
        GeneratorConfig {
            source_path: tmp.path().join("GenerateIcons").join("master-icon.png"),
            output_dir: tmp.path().join("public").join("icons"),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_error_line_names_missing_path() {
        let err = IconError::SourceNotFound {
            path: PathBuf::from("GenerateIcons/master-icon.png"),
        };
        assert_eq!(
            error_line(&err),
            "❌ Error: Could not find GenerateIcons/master-icon.png. Check your folder names!"
        );
    }

    #[test]
    fn test_run_with_missing_source() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);

        assert!(run(&config).is_ok());

        // Directory is created even though nothing was generated
        assert!(config.output_dir.is_dir());
        assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_run_generates_all_icons() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        fs::create_dir_all(config.source_path.parent().unwrap()).unwrap();
        RgbaImage::from_pixel(600, 600, Rgba([20, 120, 220, 255]))
            .save(&config.source_path)
            .unwrap();

        run(&config).unwrap();

        for size in &config.sizes {
            let icon = config.output_dir.join(format!("icon-{}x{}.png", size, size));
            assert!(icon.is_file(), "missing {}", icon.display());
        }
    }

    #[test]
    fn test_run_propagates_corrupt_source() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(&tmp);
        fs::create_dir_all(config.source_path.parent().unwrap()).unwrap();
        fs::write(&config.source_path, b"garbage").unwrap();

        let err = run(&config).unwrap_err();

        assert!(!err.is_source_not_found());
        assert!(config.output_dir.is_dir());
    }
}
