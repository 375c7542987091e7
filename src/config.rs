//! Generator configuration
//!
//! All values are fixed at authoring time. The struct only groups them so
//! the entry point and tests pass one value around instead of three constants.
//! Nothing here is read from the command line, the environment or a file.

use std::path::PathBuf;

use crate::icons::sizes::TARGET_SIZES;

/// Where the master image lives, relative to the web app root
pub const SOURCE_FILE: &str = "GenerateIcons/master-icon.png";

/// Where the icons go so the web app serves them
pub const OUTPUT_DIR: &str = "public/icons";

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Master image to resize
    pub source_path: PathBuf,
    /// Directory receiving `icon-<size>x<size>.png` files
    pub output_dir: PathBuf,
    /// Square sizes in generation order
    pub sizes: Vec<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(SOURCE_FILE),
            output_dir: PathBuf::from(OUTPUT_DIR),
            sizes: TARGET_SIZES.to_vec(),
        }
    }
}
