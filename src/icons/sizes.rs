use std::path::{Path, PathBuf};

/// Square icon sizes (px) expected by the web app manifest, in generation order
pub const TARGET_SIZES: &[u32] = &[72, 96, 128, 144, 152, 192, 384, 512];

/// Filename of the icon for a given size (e.g., "icon-192x192.png")
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}x{}.png", size, size)
}

/// Full output path of the icon for a given size
pub fn icon_path(output_dir: &Path, size: u32) -> PathBuf {
    output_dir.join(icon_file_name(size))
}
